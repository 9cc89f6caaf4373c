use crate::input::numbers;
use anyhow::Result;
use itertools::Itertools;

fn is_safe(levels: impl Iterator<Item = i64>) -> bool {
    let mut trend = 0;
    levels.tuple_windows().all(|(a, b)| {
        let step = b - a;
        if trend == 0 {trend = step.signum()}
        step.signum() == trend && (1 ..= 3).contains(&step.abs())
    })
}

/// Safe once any single level is left out.
fn is_tolerable(levels: &[i64]) -> bool {
    is_safe(levels.iter().copied()) || (0 .. levels.len()).any(|skip|
        is_safe(levels.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &level)| level))
    )
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let reports = input.trim().lines().map(numbers::<i64>).collect::<Result<Vec<_>>>()?;
    Ok(reports.iter().filter(|levels| {
        if part == 1 {is_safe(levels.iter().copied())} else {is_tolerable(levels)}
    }).count().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "2");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4");
    }

    #[test]
    fn first_level_can_be_dropped() {
        assert!(!is_safe([5, 1, 2, 3].into_iter()));
        assert!(is_tolerable(&[5, 1, 2, 3]));
        assert!(is_tolerable(&[1, 2, 3, 9]));
        assert!(!is_tolerable(&[1, 9, 2, 10]));
    }
}
