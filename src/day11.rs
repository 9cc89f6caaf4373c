use crate::input::numbers;
use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

fn blink_stone(stone: u64) -> Result<ArrayVec<u64, 2>> {
    let mut next = ArrayVec::new();
    if stone == 0 {
        next.push(1);
        return Ok(next);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        next.push(stone / half);
        next.push(stone % half);
    } else {
        next.push(stone.checked_mul(2024).with_context(|| format!("stone {} outgrows 64 bits", stone))?);
    }
    Ok(next)
}

/// Stones only ever depend on their own engraving, so equal stones are counted together.
fn blink(stones: &[u64], times: usize) -> Result<u64> {
    let mut counts = FxHashMap::<u64, u64>::default();
    for &stone in stones {*counts.entry(stone).or_default() += 1}
    for _ in 0 .. times {
        let mut next = FxHashMap::default();
        for (stone, count) in counts {
            for split in blink_stone(stone)? {*next.entry(split).or_default() += count}
        }
        counts = next;
    }
    Ok(counts.values().sum::<u64>())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let stones = numbers(input)?;
    Ok(blink(&stones, if part == 1 {25} else {75})?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules() {
        assert_eq!(blink_stone(0).unwrap().as_slice(), [1]);
        assert_eq!(blink_stone(1000).unwrap().as_slice(), [10, 0]);
        assert_eq!(blink_stone(17).unwrap().as_slice(), [1, 7]);
        assert_eq!(blink_stone(125).unwrap().as_slice(), [253000]);
        assert_eq!(blink(&[0, 1, 10, 99, 999], 1).unwrap(), 7);
    }

    #[test]
    fn example() {
        assert_eq!(blink(&[125, 17], 6).unwrap(), 22);
        assert_eq!(solve(1, "125 17").unwrap(), "55312");
    }

    #[test]
    fn overflowing_engraving() {
        assert!(blink_stone(1_000_000_000_000_000_000).is_err());
        assert!(solve(1, "1000000000000000000").is_err());
    }
}
