use crate::grid::{Grid, Pos};
use anyhow::Result;
use bitvec::prelude::*;

fn uphill<'g>(grid: &'g Grid, pos: Pos) -> impl Iterator<Item = Pos> + 'g {
    let height = grid[pos];
    grid.neighbors(pos).filter(move |&next| height.is_ascii_digit() && grid[next] == height + 1)
}

/// Number of distinct summits reachable from `head`.
fn score(grid: &Grid, head: Pos) -> usize {
    let mut seen = bitvec![0; grid.width() * grid.height()];
    let mut stack = vec![head];
    let mut summits = 0;
    while let Some(pos) = stack.pop() {
        if seen.replace(grid.index_of(pos), true) {continue}
        if grid[pos] == b'9' {summits += 1}
        stack.extend(uphill(grid, pos));
    }
    summits
}

/// Number of distinct trails from each cell to any summit, filled in from the top down.
fn ratings(grid: &Grid) -> Vec<usize> {
    let mut ratings = vec![0; grid.width() * grid.height()];
    for height in (b'0' ..= b'9').rev() {
        for pos in grid.find_all(height) {
            let rating = if height == b'9' {1}
                else {uphill(grid, pos).map(|next| ratings[grid.index_of(next)]).sum::<usize>()};
            ratings[grid.index_of(pos)] = rating;
        }
    }
    ratings
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let grid = Grid::parse(input)?;
    let total: usize = if part == 1 {
        grid.find_all(b'0').map(|head| score(&grid, head)).sum()
    } else {
        let ratings = ratings(&grid);
        grid.find_all(b'0').map(|head| ratings[grid.index_of(head)]).sum()
    };
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "36");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "81");
    }

    #[test]
    fn impassable_cells() {
        let map = "...0...\n...1...\n...2...\n6543456\n7.....7\n8.....8\n9.....9";
        assert_eq!(solve(1, map).unwrap(), "2");
        assert_eq!(solve(2, map).unwrap(), "2");
    }
}
