use anyhow::Result;
use regex::Regex;

pub fn solve(part: u8, input: &str) -> Result<String> {
    let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;
    let mut enabled = true;
    let mut sum = 0u64;
    for caps in re.captures_iter(input) {
        match &caps[0] {
            "do()" => enabled = true,
            "don't()" => enabled = part == 1,
            _ if enabled => sum += caps[1].parse::<u64>()? * caps[2].parse::<u64>()?,
            _ => {}
        }
    }
    Ok(sum.to_string())
}
