use crate::grid::{Grid, Pos};
use anyhow::Result;

const DIRECTIONS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

fn at(grid: &Grid, (row, col): Pos, (dr, dc): (isize, isize), dist: isize) -> Option<u8> {
    grid.get((row.checked_add_signed(dr * dist)?, col.checked_add_signed(dc * dist)?))
}

fn count_xmas(grid: &Grid) -> usize {
    grid.find_all(b'X').map(|pos| DIRECTIONS.iter().filter(|&&dir|
        b"MAS".iter().enumerate().all(|(i, &c)| at(grid, pos, dir, i as isize + 1) == Some(c))
    ).count()).sum()
}

/// Two MAS diagonals crossing at an `A`, each readable either way.
fn count_x_mas(grid: &Grid) -> usize {
    let is_ms = |a: Option<u8>, b: Option<u8>| matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')));
    grid.find_all(b'A').filter(|&pos|
        is_ms(at(grid, pos, (-1, -1), 1), at(grid, pos, (1, 1), 1))
        && is_ms(at(grid, pos, (-1, 1), 1), at(grid, pos, (1, -1), 1))
    ).count()
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    Ok(if part == 1 {count_xmas(&grid)} else {count_x_mas(&grid)}.to_string())
}
