use crate::input::{numbers, parse_num, sections};
use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

struct Manual {
    /// `(before, after)` pairs.
    rules: FxHashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

fn parse(input: &str) -> Result<Manual> {
    let [rules, updates] = sections(input).collect::<Vec<_>>()[..] else {
        bail!("expected ordering rules and updates separated by a blank line")
    };
    let rules = rules.lines().map(|line| -> Result<(u32, u32)> {
        let (before, after) = line.split_once('|').with_context(|| format!("bad rule {:?}", line))?;
        Ok((parse_num(before)?, parse_num(after)?))
    }).collect::<Result<_>>()?;
    let updates = updates.lines().map(|line| -> Result<Vec<u32>> {
        let pages = numbers(line)?;
        ensure!(pages.len() % 2 == 1, "update {:?} has no middle page", line);
        Ok(pages)
    }).collect::<Result<_>>()?;
    Ok(Manual {rules, updates})
}

fn is_ordered(pages: &[u32], rules: &FxHashSet<(u32, u32)>) -> bool {
    pages.iter().tuple_combinations().all(|(&a, &b)| !rules.contains(&(b, a)))
}

/// Kahn's algorithm over the rules that mention two pages of this update.
fn reorder(pages: &[u32], rules: &FxHashSet<(u32, u32)>) -> Result<Vec<u32>> {
    let mut blockers = pages.iter()
        .map(|&page| pages.iter().filter(|&&before| rules.contains(&(before, page))).count())
        .collect::<Vec<_>>();
    let mut ready = (0 .. pages.len()).filter(|&i| blockers[i] == 0).collect::<VecDeque<_>>();
    let mut sorted = Vec::with_capacity(pages.len());
    while let Some(i) = ready.pop_front() {
        sorted.push(pages[i]);
        for (j, &after) in pages.iter().enumerate() {
            if rules.contains(&(pages[i], after)) {
                blockers[j] -= 1;
                if blockers[j] == 0 {ready.push_back(j)}
            }
        }
    }
    ensure!(sorted.len() == pages.len(), "rules for update {:?} are cyclic", pages);
    Ok(sorted)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let Manual {rules, updates} = parse(input)?;
    let mut sum = 0;
    for pages in &updates {
        match (part, is_ordered(pages, &rules)) {
            (1, true) => sum += pages[pages.len() / 2],
            (2, false) => sum += reorder(pages, &rules)?[pages.len() / 2],
            _ => {}
        }
    }
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "143");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "123");
    }

    #[test]
    fn cyclic_rules_cannot_be_reordered() {
        let rules = [(1, 2), (2, 3), (3, 1)].into_iter().collect();
        assert!(reorder(&[1, 2, 3], &rules).is_err());
        assert_eq!(reorder(&[3, 1], &rules).unwrap(), [3, 1]);
    }

    #[test]
    fn needs_both_sections() {
        assert!(solve(1, "1|2\n3|4").is_err());
        assert!(solve(1, "1|2\n\n1,2").is_err());
    }
}
