use crate::grid::Grid;
use crate::input::sections;
use anyhow::{bail, ensure, Result};
use arrayvec::ArrayVec;
use itertools::Itertools;
use log::debug;

type Heights = ArrayVec<usize, 8>;

/// Pin heights per column, not counting the solid top or bottom row.
fn heights(schematic: &Grid) -> Result<Heights> {
    ensure!(schematic.width() <= 8, "schematic is {} columns wide", schematic.width());
    Ok((0 .. schematic.width())
        .map(|col| (0 .. schematic.height()).filter(|&row| schematic[(row, col)] == b'#').count() - 1)
        .collect())
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    if part == 2 {return Ok("Merry Christmas!".to_string())}

    let (mut locks, mut keys) = (vec![], vec![]);
    let mut shape = None;
    for section in sections(input) {
        let schematic = Grid::parse(section)?;
        let size = (schematic.width(), schematic.height());
        ensure!(*shape.get_or_insert(size) == size, "schematics differ in size");
        let mut rows = schematic.rows();
        let (top, bottom) = (rows.next(), rows.last());
        match (top, bottom) {
            (Some(top), Some(bottom)) if top.iter().all(|&c| c == b'#') && bottom.iter().all(|&c| c == b'.') =>
                locks.push(heights(&schematic)?),
            (Some(top), Some(bottom)) if top.iter().all(|&c| c == b'.') && bottom.iter().all(|&c| c == b'#') =>
                keys.push(heights(&schematic)?),
            _ => bail!("schematic is neither a lock nor a key:\n{}", schematic),
        }
    }
    debug!("{} locks, {} keys", locks.len(), keys.len());

    let Some((_, rows)) = shape else {bail!("no schematics")};
    let room = rows - 2;
    let fitting = locks.iter().cartesian_product(&keys)
        .filter(|(lock, key)| lock.iter().zip(key.iter()).all(|(l, k)| l + k <= room))
        .count();
    Ok(fitting.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "3");
    }

    #[test]
    fn lock_heights() {
        let lock = Grid::parse("#####\n.####\n.####\n.####\n.#.#.\n.#...\n.....").unwrap();
        assert_eq!(heights(&lock).unwrap().as_slice(), [0, 5, 3, 4, 3]);
    }

    #[test]
    fn not_a_schematic() {
        assert!(solve(1, "#.#\n...\n#.#").is_err());
        assert!(solve(1, "###\n...\n...\n\n....\n....\n####").is_err());
    }
}
