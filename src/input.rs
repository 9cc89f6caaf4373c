use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// `day{N}.in`, or `day{N}test{T}.in` for the examples.
pub fn input_path(dir: &Path, day: u8, test: Option<u32>) -> PathBuf {
    match test {
        Some(test) => dir.join(format!("day{}test{}.in", day, test)),
        None => dir.join(format!("day{}.in", day)),
    }
}

pub fn read_input(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read input file {}", path.display()))?;
    Ok(text.replace("\r\n", "\n"))
}

pub fn parse_num<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim().parse().with_context(|| format!("cannot parse {:?} as a number", s))
}

/// Every integer in `s`, in order of appearance. A `-` directly in front of the
/// digits makes the number negative.
pub fn numbers<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split(|c: char| !(c.is_ascii_digit() || c == '-'))
        .filter(|token| !token.is_empty() && *token != "-")
        .map(parse_num)
        .collect()
}

/// Blank-line separated blocks of the input.
pub fn sections(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split("\n\n").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_day_naming() {
        let dir = Path::new("inputs");
        assert_eq!(input_path(dir, 17, None), Path::new("inputs/day17.in"));
        assert_eq!(input_path(dir, 3, Some(2)), Path::new("inputs/day3test2.in"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input(Path::new("/nonexistent/day1.in")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/day1.in"));
    }

    #[test]
    fn numbers_keeps_signs() {
        assert_eq!(numbers::<i64>("p=0,4 v=3,-3").unwrap(), vec![0, 4, 3, -3]);
        assert_eq!(numbers::<u64>("Button A: X+94, Y+34").unwrap(), vec![94, 34]);
        assert!(numbers::<u8>("x=300").is_err());
    }

    #[test]
    fn sections_split_on_blank_lines() {
        let parts = sections("a\nb\n\nc\n").collect::<Vec<_>>();
        assert_eq!(parts, vec!["a\nb", "c"]);
    }
}
