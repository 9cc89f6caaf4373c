use crate::grid::{Dir, Grid, Pos};
use anyhow::{ensure, Context, Result};
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

const TURN_COST: u64 = 1000;

fn state(grid: &Grid, pos: Pos, dir: Dir) -> usize {
    grid.index_of(pos) * 4 + dir.index()
}

/// Lowest score to reach every (tile, heading) from any of `starts`.
fn dijkstra(grid: &Grid, starts: impl IntoIterator<Item = (Pos, Dir)>) -> Vec<u64> {
    let mut dist = vec![u64::MAX; grid.width() * grid.height() * 4];
    let mut queue = BinaryHeap::new();
    for (pos, dir) in starts {
        dist[state(grid, pos, dir)] = 0;
        queue.push(Reverse((0, pos, dir)));
    }
    while let Some(Reverse((cost, pos, dir))) = queue.pop() {
        if cost > dist[state(grid, pos, dir)] {continue}
        let forward = grid.step(pos, dir).filter(|&next| grid[next] != b'#').map(|next| (cost + 1, next, dir));
        let turns = [dir.turn_left(), dir.turn_right()].map(|turned| (cost + TURN_COST, pos, turned));
        for (cost, pos, dir) in forward.into_iter().chain(turns) {
            let best = &mut dist[state(grid, pos, dir)];
            if cost < *best {
                *best = cost;
                queue.push(Reverse((cost, pos, dir)));
            }
        }
    }
    dist
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let start = grid.find(b'S').context("no start tile")?;
    let end = grid.find(b'E').context("no end tile")?;

    let from_start = dijkstra(&grid, [(start, Dir::Right)]);
    let best = Dir::ALL.into_iter().map(|dir| from_start[state(&grid, end, dir)]).min().unwrap_or(u64::MAX);
    ensure!(best != u64::MAX, "the end tile cannot be reached");
    debug!("lowest score {}", best);
    if part == 1 {return Ok(best.to_string())}

    // walking backwards from the end is walking forwards with every heading reversed
    let from_end = dijkstra(&grid, Dir::ALL.map(|dir| (end, dir)));
    let on_best_path = grid.positions().filter(|&pos| Dir::ALL.into_iter().any(|dir| {
        let (there, back) = (from_start[state(&grid, pos, dir)], from_end[state(&grid, pos, dir.reverse())]);
        there != u64::MAX && back != u64::MAX && there + back == best
    })).count();
    Ok(on_best_path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn examples() {
        assert_eq!(solve(1, FIRST).unwrap(), "7036");
        assert_eq!(solve(2, FIRST).unwrap(), "45");
        assert_eq!(solve(1, SECOND).unwrap(), "11048");
        assert_eq!(solve(2, SECOND).unwrap(), "64");
    }

    #[test]
    fn walled_off_end() {
        assert!(solve(1, "#####\n#S#E#\n#####").is_err());
        assert!(solve(1, "#####\n#S..#\n#####").is_err());
    }
}
