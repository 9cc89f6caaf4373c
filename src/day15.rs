use crate::grid::{Dir, Grid, Pos};
use crate::input::sections;
use anyhow::{bail, Context, Result};
use log::trace;
use rustc_hash::FxHashSet;

fn parse(input: &str) -> Result<(Grid, Vec<Dir>)> {
    let [map, moves] = sections(input).collect::<Vec<_>>()[..] else {
        bail!("expected the map and the moves separated by a blank line")
    };
    let moves = moves.bytes().filter(|c| !c.is_ascii_whitespace()).map(|c|
        Dir::from_arrow(c).with_context(|| format!("unknown move {:?}", c as char))
    ).collect::<Result<_>>()?;
    Ok((Grid::parse(map)?, moves))
}

fn widen(grid: &Grid) -> Grid {
    let mut wide = Grid::new(grid.width() * 2, grid.height(), b'.');
    for (row, col) in grid.positions() {
        let pair = match grid[(row, col)] {b'O' => *b"[]", b'@' => *b"@.", cell => [cell, cell]};
        wide[(row, 2 * col)] = pair[0];
        wide[(row, 2 * col + 1)] = pair[1];
    }
    wide
}

/// Pushes the robot and everything in front of it one step, unless a wall is in the way.
fn push(grid: &mut Grid, robot: Pos, dir: Dir) -> Option<Pos> {
    let vertical = matches!(dir, Dir::Up | Dir::Down);
    let mut moving = vec![robot];
    let mut seen = FxHashSet::default();
    let mut i = 0;
    while i < moving.len() {
        let next = grid.step(moving[i], dir)?;
        i += 1;
        let partner = match grid[next] {
            b'#' => return None,
            b'[' if vertical => grid.step(next, Dir::Right),
            b']' if vertical => grid.step(next, Dir::Left),
            b'O' | b'[' | b']' => None,
            _ => continue,
        };
        for pos in [Some(next), partner].into_iter().flatten() {
            if seen.insert(pos) {moving.push(pos)}
        }
    }
    // farthest first, so nothing is overwritten before it moves
    for &pos in moving.iter().rev() {
        let next = grid.step(pos, dir)?;
        grid[next] = grid[pos];
        grid[pos] = b'.';
    }
    grid.step(robot, dir)
}

fn gps_sum(grid: &Grid) -> usize {
    grid.positions().filter(|&pos| matches!(grid[pos], b'O' | b'[')).map(|(row, col)| 100 * row + col).sum()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (grid, moves) = parse(input)?;
    let mut grid = if part == 1 {grid} else {widen(&grid)};
    let mut robot = grid.find(b'@').context("no robot in the warehouse")?;
    for dir in moves {
        if let Some(next) = push(&mut grid, robot, dir) {robot = next}
    }
    trace!("final warehouse:\n{}", grid);
    Ok(gps_sum(&grid).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const WIDE_SMALL: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

    #[test]
    fn narrow_boxes() {
        assert_eq!(solve(1, SMALL).unwrap(), "2028");
    }

    #[test]
    fn wide_boxes() {
        assert_eq!(solve(2, WIDE_SMALL).unwrap(), "618");
        // the lower box straddles two others and lifts both, until the wall stops all three
        let stacked = "#######\n#.....#\n#.OO..#\n#..O@.#\n#.....#\n#######\n\n";
        assert_eq!(solve(2, &format!("{}<v<^", stacked)).unwrap(), "415");
        assert_eq!(solve(2, &format!("{}<v<^^", stacked)).unwrap(), "415");
    }

    #[test]
    fn widened_map() {
        let (grid, _) = parse("####\n#O@#\n####\n\n<").unwrap();
        assert_eq!(widen(&grid).to_string(), "########\n##[]@.##\n########\n");
    }

    #[test]
    fn malformed_warehouse() {
        assert!(solve(1, "#####\n#.@.#\n#####").is_err());
        assert!(solve(1, "#####\n#...#\n#####\n\n<>").is_err());
        assert!(solve(1, "#####\n#.@.#\n#####\n\n<x>").is_err());
    }
}
