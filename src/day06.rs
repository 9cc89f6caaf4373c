use crate::grid::{Dir, Grid, Pos};
use anyhow::{bail, Context, Result};
use bitvec::prelude::*;
use log::debug;

enum Patrol {
    /// Walked off the map; one bit per cell that was visited.
    Leaves(BitVec),
    Loops,
}

fn patrol(grid: &Grid, start: Pos, obstacle: Option<Pos>) -> Patrol {
    let mut seen = bitvec![0; grid.width() * grid.height() * 4];
    let (mut pos, mut dir) = (start, Dir::Up);
    loop {
        let state = grid.index_of(pos) * 4 + dir.index();
        if seen[state] {return Patrol::Loops}
        seen.set(state, true);
        let Some(next) = grid.step(pos, dir) else {break};
        if grid[next] == b'#' || Some(next) == obstacle {dir = dir.turn_right()} else {pos = next}
    }
    Patrol::Leaves(seen.chunks(4).map(|states| states.any()).collect())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let start = grid.find(b'^').context("no guard on the map")?;
    let Patrol::Leaves(visited) = patrol(&grid, start, None) else {bail!("the guard never leaves the map")};
    debug!("guard visits {} cells", visited.count_ones());
    if part == 1 {return Ok(visited.count_ones().to_string())}

    // only cells on the unobstructed route can change it
    let loops = grid.positions()
        .filter(|&pos| pos != start && visited[grid.index_of(pos)])
        .filter(|&pos| matches!(patrol(&grid, start, Some(pos)), Patrol::Loops))
        .count();
    Ok(loops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "41");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "6");
    }

    #[test]
    fn guard_must_be_present() {
        assert!(solve(1, "..#\n...").is_err());
    }

    #[test]
    fn walking_straight_out() {
        assert_eq!(solve(1, "...\n.^.\n...").unwrap(), "2");
    }
}
