use crate::input::sections;
use anyhow::{bail, ensure, Result};
use rustc_hash::FxHashMap;

struct Onsen<'a> {
    towels: Vec<&'a str>,
    /// Arrangements per design suffix seen so far.
    memo: FxHashMap<&'a str, u64>,
}

impl<'a> Onsen<'a> {
    fn arrangements(&mut self, design: &'a str) -> u64 {
        if design.is_empty() {return 1}
        if let Some(&count) = self.memo.get(design) {return count}
        let mut count = 0;
        for i in 0 .. self.towels.len() {
            if let Some(rest) = design.strip_prefix(self.towels[i]) {count += self.arrangements(rest)}
        }
        self.memo.insert(design, count);
        count
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let [towels, designs] = sections(input).collect::<Vec<_>>()[..] else {
        bail!("expected towel patterns and designs separated by a blank line")
    };
    let towels = towels.split(',').map(str::trim).collect::<Vec<_>>();
    ensure!(towels.iter().all(|towel| !towel.is_empty()), "empty towel pattern");
    let mut onsen = Onsen {towels, memo: FxHashMap::default()};
    let counts = designs.lines().map(|design| onsen.arrangements(design.trim())).collect::<Vec<_>>();
    Ok(if part == 1 {counts.iter().filter(|&&count| count > 0).count() as u64} else {counts.iter().sum::<u64>()}.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "6");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "16");
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(solve(1, "r, , b\n\nrb").is_err());
        assert!(solve(1, "r, b").is_err());
    }
}
