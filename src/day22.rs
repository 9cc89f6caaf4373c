use crate::input::parse_num;
use anyhow::Result;
use bitvec::prelude::*;
use log::debug;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;
/// Price changes run from -9 to 9.
const CHANGES: usize = 19;

fn next_secret(secret: u64) -> u64 {
    let secret = (secret ^ (secret * 64)) % PRUNE;
    let secret = (secret ^ (secret / 32)) % PRUNE;
    (secret ^ (secret * 2048)) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&secret| Some(next_secret(secret))).take(ROUNDS + 1)
}

/// Bananas for the best sequence of four price changes, summed over all buyers.
/// Each buyer sells at the first occurrence of the sequence.
fn best_bananas(seeds: &[u64]) -> u64 {
    let mut totals = vec![0; CHANGES.pow(4)];
    let mut sold = bitvec![0; CHANGES.pow(4)];
    for &seed in seeds {
        sold.fill(false);
        let mut key = 0;
        let mut prev = seed % 10;
        for (i, secret) in secrets(seed).enumerate().skip(1) {
            let price = secret % 10;
            let change = (price + 9 - prev) as usize;
            key = (key * CHANGES + change) % CHANGES.pow(4);
            prev = price;
            if i >= 4 && !sold.replace(key, true) {totals[key] += price}
        }
    }
    let best = totals.iter().copied().max().unwrap_or(0);
    debug!("{} distinct change sequences sold", totals.iter().filter(|&&total| total > 0).count());
    best
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let seeds = input.trim().lines().map(parse_num).collect::<Result<Vec<u64>>>()?;
    Ok(if part == 1 {
        seeds.iter().filter_map(|&seed| secrets(seed).last()).sum::<u64>()
    } else {
        best_bananas(&seeds)
    }.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_sequence() {
        assert_eq!(next_secret(123), 15887950);
        let ten = secrets(123).skip(1).take(10).collect::<Vec<_>>();
        assert_eq!(ten[9], 5908254);
    }

    #[test]
    fn examples() {
        assert_eq!(solve(1, "1\n10\n100\n2024").unwrap(), "37327623");
        assert_eq!(solve(2, "1\n2\n3\n2024").unwrap(), "23");
    }

    #[test]
    fn rejects_garbage() {
        assert!(solve(1, "1\nten").is_err());
    }
}
