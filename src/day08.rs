use crate::grid::{Grid, Pos};
use anyhow::Result;
use bitvec::prelude::*;
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// `pos + (to - from)`, if it stays on the grid.
fn project(grid: &Grid, pos: Pos, from: Pos, to: Pos) -> Option<Pos> {
    let dr = to.0 as isize - from.0 as isize;
    let dc = to.1 as isize - from.1 as isize;
    let next = (pos.0.checked_add_signed(dr)?, pos.1.checked_add_signed(dc)?);
    grid.contains(next).then_some(next)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let mut antennas = FxHashMap::<u8, Vec<Pos>>::default();
    for pos in grid.positions().filter(|&pos| grid[pos] != b'.') {
        antennas.entry(grid[pos]).or_default().push(pos);
    }

    let mut antinodes = bitvec![0; grid.width() * grid.height()];
    for positions in antennas.values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            for (from, to) in [(a, b), (b, a)] {
                if part == 1 {
                    if let Some(node) = project(&grid, to, from, to) {antinodes.set(grid.index_of(node), true)}
                } else {
                    // every step along the line, including the antenna itself
                    let mut node = Some(to);
                    while let Some(pos) = node {
                        antinodes.set(grid.index_of(pos), true);
                        node = project(&grid, pos, from, to);
                    }
                }
            }
        }
    }
    Ok(antinodes.count_ones().to_string())
}
