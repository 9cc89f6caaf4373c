use crate::grid::{Dir, Pos};
use anyhow::{ensure, Context, Result};
use arrayvec::ArrayVec;
use log::debug;
use rustc_hash::FxHashMap;

/// A keypad layout, row by row; the blank is the gap no arm may hover over.
struct Keypad(&'static [&'static [u8]]);

const NUMERIC: Keypad = Keypad(&[b"789", b"456", b"123", b" 0A"]);
const DIRECTIONAL: Keypad = Keypad(&[b" ^A", b"<v>"]);

impl Keypad {
    fn find(&self, key: u8) -> Result<Pos> {
        self.0.iter().enumerate()
            .find_map(|(row, keys)| keys.iter().position(|&k| k == key).map(|col| (row, col)))
            .filter(|_| key != b' ')
            .with_context(|| format!("no key {:?} on the keypad", key as char))
    }

    /// Ways to move the arm from `from` to `to` and press: all horizontal moves
    /// first or all vertical moves first. Zig-zagging never helps.
    fn routes(&self, from: u8, to: u8) -> Result<ArrayVec<Vec<u8>, 2>> {
        let ((r1, c1), (r2, c2)) = (self.find(from)?, self.find(to)?);
        let gap = self.find_gap();
        let horizontal = vec![(if c2 > c1 {Dir::Right} else {Dir::Left}).arrow(); c1.abs_diff(c2)];
        let vertical = vec![(if r2 > r1 {Dir::Down} else {Dir::Up}).arrow(); r1.abs_diff(r2)];
        let mut routes = ArrayVec::new();
        if Some((r1, c2)) != gap {routes.push([&horizontal[..], &vertical[..], &b"A"[..]].concat())}
        if Some((r2, c1)) != gap && !(horizontal.is_empty() || vertical.is_empty()) {
            routes.push([&vertical[..], &horizontal[..], &b"A"[..]].concat());
        }
        Ok(routes)
    }

    fn find_gap(&self) -> Option<Pos> {
        self.0.iter().enumerate().find_map(|(row, keys)| keys.iter().position(|&k| k == b' ').map(|col| (row, col)))
    }
}

/// A chain of robots on directional keypads, ending with the one a person presses.
struct Chain {
    /// Presses needed for a single move, keyed by (from, to, robots between).
    memo: FxHashMap<(u8, u8, usize), u64>,
}

impl Chain {
    fn new() -> Self {
        Self {memo: FxHashMap::default()}
    }

    /// Presses on the outermost keypad to type `keys` on a directional keypad `depth` robots away.
    fn typing_cost(&mut self, keys: &[u8], depth: usize) -> Result<u64> {
        if depth == 0 {return Ok(keys.len() as u64)}
        let mut arm = b'A';
        let mut total = 0;
        for &key in keys {
            total += self.move_cost(arm, key, depth)?;
            arm = key;
        }
        Ok(total)
    }

    fn move_cost(&mut self, from: u8, to: u8, depth: usize) -> Result<u64> {
        if let Some(&cost) = self.memo.get(&(from, to, depth)) {return Ok(cost)}
        let mut best = u64::MAX;
        for route in DIRECTIONAL.routes(from, to)? {
            best = best.min(self.typing_cost(&route, depth - 1)?);
        }
        self.memo.insert((from, to, depth), best);
        Ok(best)
    }

    /// Shortest sequence a person types to get `code` entered on the door.
    fn code_cost(&mut self, code: &[u8], robots: usize) -> Result<u64> {
        let mut arm = b'A';
        let mut total = 0;
        for &key in code {
            let mut best = u64::MAX;
            for route in NUMERIC.routes(arm, key)? {
                best = best.min(self.typing_cost(&route, robots)?);
            }
            total += best;
            arm = key;
        }
        Ok(total)
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let robots = if part == 1 {2} else {25};
    let mut chain = Chain::new();
    let mut total = 0;
    for code in input.trim().lines().map(str::trim) {
        ensure!(code.ends_with('A'), "code {:?} does not end in A", code);
        let value = code.trim_end_matches('A').parse::<u64>().with_context(|| format!("bad code {:?}", code))?;
        let presses = chain.code_cost(code.as_bytes(), robots)?;
        debug!("{}: {} presses", code, presses);
        total += presses * value;
    }
    Ok(total.to_string())
}
