use crate::input::{numbers, parse_num};
use anyhow::{ensure, Context, Result};

/// Works backwards from the target, undoing the last operation at each step.
fn solvable(target: u64, operands: &[u64], concat: bool) -> bool {
    let [rest @ .., last] = operands else {return false};
    let last = *last;
    if rest.is_empty() {return target == last}

    if target >= last && solvable(target - last, rest, concat) {return true}
    if last == 0 {
        if target == 0 {return true}
    } else if target % last == 0 && solvable(target / last, rest, concat) {
        return true;
    }
    if !concat {return false}
    let digits = last.checked_ilog10().map_or(1, |d| d + 1);
    let Some(shift) = 10u64.checked_pow(digits) else {return false};
    target % shift == last && solvable(target / shift, rest, concat)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let mut total = 0;
    for line in input.trim().lines() {
        let (target, operands) = line.split_once(':').with_context(|| format!("no ':' in {:?}", line))?;
        let target = parse_num::<u64>(target)?;
        let operands = numbers::<u64>(operands)?;
        ensure!(!operands.is_empty(), "no operands in {:?}", line);
        if solvable(target, &operands, part == 2) {total += target}
    }
    Ok(total.to_string())
}
