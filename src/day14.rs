use crate::grid::Grid;
use crate::input::numbers;
use anyhow::{bail, Context, Result};
use log::debug;

/// The floor the robots patrol. Robots walking off one edge reappear on the opposite one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Floor {
    pub width: i64,
    pub height: i64,
    /// How long the robots walk before the safety factor is taken.
    pub seconds: i64,
}

impl Default for Floor {
    fn default() -> Self {
        Self {width: 101, height: 103, seconds: 100}
    }
}

/// Both coordinate standard deviations must fall below this for the robots to form a picture.
const PICTURE_SPREAD: f64 = 20.0;

#[derive(Clone, Copy, Debug)]
struct Robot {pos: (i64, i64), vel: (i64, i64)}

fn parse(input: &str) -> Result<Vec<Robot>> {
    input.trim().lines().map(|line| -> Result<Robot> {
        let [x, y, dx, dy] = numbers::<i64>(line)?[..] else {bail!("cannot parse robot {:?}", line)};
        Ok(Robot {pos: (x, y), vel: (dx, dy)})
    }).collect()
}

impl Floor {
    fn position(&self, robot: &Robot, seconds: i64) -> (i64, i64) {
        ((robot.pos.0 + robot.vel.0 * seconds).rem_euclid(self.width),
         (robot.pos.1 + robot.vel.1 * seconds).rem_euclid(self.height))
    }

    fn safety_factor(&self, robots: &[Robot]) -> usize {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0; 4];
        for robot in robots {
            let (x, y) = self.position(robot, self.seconds);
            if x == mid_x || y == mid_y {continue}
            quadrants[usize::from(x > mid_x) + 2 * usize::from(y > mid_y)] += 1;
        }
        quadrants.iter().product()
    }

    /// First second at which the robots huddle together. The positions repeat
    /// after `width * height` seconds, so the search stops there.
    fn picture_time(&self, robots: &[Robot]) -> Result<i64> {
        fn spread(coords: &[f64]) -> f64 {
            let mean = coords.iter().sum::<f64>() / coords.len() as f64;
            (coords.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / coords.len() as f64).sqrt()
        }
        (1 ..= self.width * self.height).find(|&seconds| {
            let (xs, ys): (Vec<f64>, Vec<f64>) = robots.iter()
                .map(|robot| self.position(robot, seconds))
                .map(|(x, y)| (x as f64, y as f64))
                .unzip();
            spread(&xs) < PICTURE_SPREAD && spread(&ys) < PICTURE_SPREAD
        }).context("the robots never form a picture")
    }

    fn render(&self, robots: &[Robot], seconds: i64) -> Grid {
        let mut grid = Grid::new(self.width as usize, self.height as usize, b'.');
        for robot in robots {
            let (x, y) = self.position(robot, seconds);
            grid[(y as usize, x as usize)] = b'#';
        }
        grid
    }
}

pub fn solve_on(floor: Floor, part: u8, input: &str) -> Result<String> {
    let robots = parse(input)?;
    if robots.is_empty() {bail!("no robots")}
    if part == 1 {return Ok(floor.safety_factor(&robots).to_string())}
    let seconds = floor.picture_time(&robots)?;
    debug!("after {} seconds:\n{}", seconds, floor.render(&robots, seconds));
    Ok(seconds.to_string())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    solve_on(Floor::default(), part, input)
}
