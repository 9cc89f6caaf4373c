use crate::grid::{manhattan, Grid, Pos};
use anyhow::{bail, ensure, Context, Result};
use log::debug;

pub const MIN_SAVING: usize = 100;

/// Track tiles in race order, from the start to the end.
fn track(grid: &Grid) -> Result<Vec<Pos>> {
    let start = grid.find(b'S').context("no start")?;
    let end = grid.find(b'E').context("no end")?;
    let mut path = vec![start];
    let mut prev = None;
    let mut pos = start;
    while pos != end {
        let mut ways = grid.neighbors(pos).filter(|&next| grid[next] != b'#' && Some(next) != prev);
        let (Some(step), None) = (ways.next(), ways.next()) else {bail!("the track forks or ends at {:?}", pos)};
        prev = Some(pos);
        pos = step;
        path.push(pos);
    }
    Ok(path)
}

/// Cheats that pass through walls for at most `max_cheat` picoseconds and save at least `min_saving`.
pub fn count_cheats(input: &str, max_cheat: usize, min_saving: usize) -> Result<usize> {
    let grid = Grid::parse(input)?;
    let path = track(&grid)?;
    ensure!(path.len() > 1, "the start is the end");
    debug!("track is {} picoseconds long", path.len() - 1);
    let mut count = 0;
    for (from, &a) in path.iter().enumerate() {
        for (to, &b) in path.iter().enumerate().skip(from + min_saving) {
            let cheat = manhattan(a, b);
            if cheat <= max_cheat && to - from >= cheat + min_saving {count += 1}
        }
    }
    Ok(count)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    Ok(count_cheats(input, if part == 1 {2} else {20}, MIN_SAVING)?.to_string())
}
