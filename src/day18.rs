use crate::grid::{Grid, Pos};
use crate::input::numbers;
use anyhow::{bail, ensure, Context, Result};
use bitvec::prelude::*;
use log::debug;
use std::collections::VecDeque;

/// A square memory region walked from the top left corner to the bottom right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemorySpace {
    pub size: usize,
    /// How many bytes have fallen when the first path is taken.
    pub fallen: usize,
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self {size: 71, fallen: 1024}
    }
}

impl MemorySpace {
    fn parse(&self, input: &str) -> Result<Vec<Pos>> {
        input.trim().lines().map(|line| -> Result<Pos> {
            let [x, y] = numbers::<usize>(line)?[..] else {bail!("cannot parse byte {:?}", line)};
            ensure!(x < self.size && y < self.size, "byte {},{} falls outside the memory", x, y);
            Ok((y, x))
        }).collect()
    }

    /// Shortest number of steps across once `bytes` have fallen.
    fn shortest_path(&self, bytes: &[Pos]) -> Option<usize> {
        let mut memory = Grid::new(self.size, self.size, b'.');
        for &byte in bytes {memory[byte] = b'#'}
        let goal = (self.size - 1, self.size - 1);
        let mut seen = bitvec![0; self.size * self.size];
        let mut queue = VecDeque::from([((0, 0), 0)]);
        if memory[(0, 0)] == b'#' {return None}
        seen.set(0, true);
        while let Some((pos, steps)) = queue.pop_front() {
            if pos == goal {return Some(steps)}
            for next in memory.neighbors(pos) {
                if memory[next] != b'#' && !seen.replace(memory.index_of(next), true) {
                    queue.push_back((next, steps + 1));
                }
            }
        }
        None
    }
}

pub fn solve_in(space: MemorySpace, part: u8, input: &str) -> Result<String> {
    ensure!(space.size > 0, "empty memory space");
    let bytes = space.parse(input)?;
    if part == 1 {
        let fallen = &bytes[.. space.fallen.min(bytes.len())];
        let steps = space.shortest_path(fallen).context("no path to the exit")?;
        return Ok(steps.to_string());
    }
    // once cut off, every later prefix stays cut off
    let open = (0 ..= bytes.len()).collect::<Vec<_>>()
        .partition_point(|&fallen| space.shortest_path(&bytes[.. fallen]).is_some());
    ensure!(open <= bytes.len() && open > 0, "the exit is never cut off");
    let (row, col) = bytes[open - 1];
    debug!("byte {} cuts the exit off", open - 1);
    Ok(format!("{},{}", col, row))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    solve_in(MemorySpace::default(), part, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    const SMALL: MemorySpace = MemorySpace {size: 7, fallen: 12};

    #[test]
    fn example() {
        assert_eq!(solve_in(SMALL, 1, EXAMPLE).unwrap(), "22");
        assert_eq!(solve_in(SMALL, 2, EXAMPLE).unwrap(), "6,1");
    }

    #[test]
    fn exit_never_cut_off() {
        assert!(solve_in(SMALL, 2, "1,1\n2,2").is_err());
    }

    #[test]
    fn bytes_must_fit() {
        assert!(solve_in(SMALL, 1, "7,0").is_err());
        assert!(solve_in(SMALL, 1, "1").is_err());
    }
}
