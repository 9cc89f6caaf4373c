use crate::input::{numbers, sections};
use anyhow::{bail, Result};
use log::debug;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Clone, Copy, Debug)]
struct Machine {a: (i64, i64), b: (i64, i64), prize: (i64, i64)}

fn parse(input: &str) -> Result<Vec<Machine>> {
    sections(input).map(|section| -> Result<Machine> {
        let [ax, ay, bx, by, px, py] = numbers::<i64>(section)?[..] else {
            bail!("expected six numbers in {:?}", section)
        };
        Ok(Machine {a: (ax, ay), b: (bx, by), prize: (px, py)})
    }).collect()
}

/// Cheapest way to win, by Cramer's rule. Machines whose buttons move along the
/// same line are treated as unwinnable.
fn cost(machine: &Machine, press_limit: Option<i64>) -> Option<i64> {
    let Machine {a: (ax, ay), b: (bx, by), prize: (px, py)} = *machine;
    let det = ax * by - ay * bx;
    if det == 0 {
        debug!("{:?} has parallel buttons", machine);
        return None;
    }
    let (a_num, b_num) = (px * by - py * bx, ax * py - ay * px);
    if a_num % det != 0 || b_num % det != 0 {return None}
    let (a, b) = (a_num / det, b_num / det);
    let in_limit = |presses: i64| press_limit.map_or(true, |limit| presses <= limit);
    (a >= 0 && b >= 0 && in_limit(a) && in_limit(b)).then_some(3 * a + b)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let machines = parse(input)?;
    let total: i64 = machines.iter().filter_map(|machine| if part == 1 {
        cost(machine, Some(100))
    } else {
        let (px, py) = machine.prize;
        cost(&Machine {prize: (px + PRIZE_OFFSET, py + PRIZE_OFFSET), ..*machine}, None)
    }).sum();
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn example() {
        let machines = parse(EXAMPLE).unwrap();
        let costs = machines.iter().map(|machine| cost(machine, Some(100))).collect::<Vec<_>>();
        assert_eq!(costs, [Some(280), None, Some(200), None]);
        assert_eq!(solve(1, EXAMPLE).unwrap(), "480");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "875318608908");
    }

    #[test]
    fn parallel_buttons_never_win() {
        let machine = Machine {a: (1, 1), b: (2, 2), prize: (4, 4)};
        assert_eq!(cost(&machine, None), None);
    }

    #[test]
    fn needs_six_numbers() {
        assert!(solve(1, "Button A: X+1, Y+2\nPrize: X=3, Y=4").is_err());
    }
}
