use crate::grid::{offset, Dir, Grid, Pos};
use anyhow::Result;
use bitvec::prelude::*;

struct Region {area: usize, perimeter: usize, sides: usize}

fn same_plant(grid: &Grid, pos: Pos, dirs: &[Dir]) -> bool {
    let plant = grid[pos];
    let moved = dirs.iter().try_fold(pos, |pos, &dir| offset(pos, dir));
    moved.and_then(|pos| grid.get(pos)) == Some(plant)
}

/// A region has as many sides as it has corners.
fn corners(grid: &Grid, pos: Pos) -> usize {
    Dir::ALL.into_iter().filter(|&dir| {
        let side = dir.turn_right();
        let (a, b) = (same_plant(grid, pos, &[dir]), same_plant(grid, pos, &[side]));
        (!a && !b) || (a && b && !same_plant(grid, pos, &[dir, side]))
    }).count()
}

fn regions(grid: &Grid) -> Vec<Region> {
    let mut seen = bitvec![0; grid.width() * grid.height()];
    let mut regions = vec![];
    for start in grid.positions() {
        if seen[grid.index_of(start)] {continue}
        seen.set(grid.index_of(start), true);
        let mut region = Region {area: 0, perimeter: 0, sides: 0};
        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            region.area += 1;
            region.sides += corners(grid, pos);
            for dir in Dir::ALL {
                if !same_plant(grid, pos, &[dir]) {region.perimeter += 1; continue}
                let Some(next) = offset(pos, dir) else {continue};
                if !seen.replace(grid.index_of(next), true) {stack.push(next)}
            }
        }
        regions.push(region);
    }
    regions
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let price: usize = regions(&grid).iter()
        .map(|region| region.area * if part == 1 {region.perimeter} else {region.sides})
        .sum();
    Ok(price.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_examples() {
        let garden = "AAAA\nBBCD\nBBCC\nEEEC";
        assert_eq!(solve(1, garden).unwrap(), "140");
        assert_eq!(solve(2, garden).unwrap(), "80");

        let nested = "OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO";
        assert_eq!(solve(1, nested).unwrap(), "772");
        assert_eq!(solve(2, nested).unwrap(), "436");

        let e_shape = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE";
        assert_eq!(solve(2, e_shape).unwrap(), "236");

        let touching = "AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA";
        assert_eq!(solve(2, touching).unwrap(), "368");
    }

    #[test]
    fn larger_example() {
        let garden = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";
        assert_eq!(solve(1, garden).unwrap(), "1930");
        assert_eq!(solve(2, garden).unwrap(), "1206");
    }
}
