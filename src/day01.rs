use crate::input::parse_num;
use anyhow::{bail, Result};
use rustc_hash::FxHashMap;
use std::iter::zip;

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for line in input.trim().lines() {
        let [left, right] = line.split_whitespace().collect::<Vec<_>>()[..] else {
            bail!("cannot parse {:?} as two numbers", line)
        };
        lefts.push(parse_num(left)?);
        rights.push(parse_num(right)?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (mut lefts, mut rights) = parse(input)?;
    if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        Ok(zip(lefts, rights).map(|(left, right)| left.abs_diff(right)).sum::<u64>().to_string())
    } else {
        let mut counts = FxHashMap::<i64, i64>::default();
        for right in rights {*counts.entry(right).or_insert(0) += 1}
        Ok(lefts.iter().map(|left| left * counts.get(left).copied().unwrap_or(0)).sum::<i64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "11");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "31");
    }

    #[test]
    fn rejects_odd_lines() {
        assert!(solve(1, "1 2 3").is_err());
        assert!(solve(1, "1 x").is_err());
    }
}
