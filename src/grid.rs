//! Rectangular byte grids addressed by `(row, col)`.
//!
//! Days that walk a map share this instead of keeping width and height around as
//! loose variables; every query is bounds-checked against the grid it is asked of.

use anyhow::{ensure, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {Up, Right, Down, Left}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn turn_right(self) -> Dir {
        match self {Dir::Up => Dir::Right, Dir::Right => Dir::Down, Dir::Down => Dir::Left, Dir::Left => Dir::Up}
    }

    pub fn turn_left(self) -> Dir {
        self.reverse().turn_right()
    }

    pub fn reverse(self) -> Dir {
        self.turn_right().turn_right()
    }

    pub fn delta(self) -> (isize, isize) {
        match self {Dir::Up => (-1, 0), Dir::Right => (0, 1), Dir::Down => (1, 0), Dir::Left => (0, -1)}
    }

    pub fn from_arrow(arrow: u8) -> Option<Dir> {
        match arrow {
            b'^' => Some(Dir::Up), b'>' => Some(Dir::Right),
            b'v' => Some(Dir::Down), b'<' => Some(Dir::Left),
            _ => None
        }
    }

    pub fn arrow(self) -> u8 {
        match self {Dir::Up => b'^', Dir::Right => b'>', Dir::Down => b'v', Dir::Left => b'<'}
    }

    /// Index usable for per-direction bit sets and tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Moves `pos` one step, without any bounds check beyond not going below zero.
pub fn offset(pos: Pos, dir: Dir) -> Option<Pos> {
    let (dr, dc) = dir.delta();
    Some((pos.0.checked_add_signed(dr)?, pos.1.checked_add_signed(dc)?))
}

pub fn manhattan(a: Pos, b: Pos) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: u8) -> Self {
        Self {cells: vec![fill; width * height], width, height}
    }

    pub fn parse(input: &str) -> Result<Self> {
        let lines = input.trim().lines().map(str::trim_end).collect::<Vec<_>>();
        let width = lines.first().map_or(0, |line| line.len());
        ensure!(width > 0, "empty grid");
        for (row, line) in lines.iter().enumerate() {
            ensure!(line.len() == width, "grid row {} is {} wide, expected {}", row, line.len(), width);
        }
        Ok(Self {cells: lines.concat().into_bytes(), width, height: lines.len()})
    }

    pub fn width(&self) -> usize {self.width}
    pub fn height(&self) -> usize {self.height}

    pub fn contains(&self, (row, col): Pos) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, pos: Pos) -> Option<u8> {
        self.contains(pos).then(|| self.cells[pos.0 * self.width + pos.1])
    }

    /// Flat index of `pos`, for side tables sized `width * height`.
    pub fn index_of(&self, (row, col): Pos) -> usize {
        row * self.width + col
    }

    pub fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        offset(pos, dir).filter(|&next| self.contains(next))
    }

    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Dir::ALL.into_iter().filter_map(move |dir| self.step(pos, dir))
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0 .. self.height).flat_map(move |row| (0 .. width).map(move |col| (row, col)))
    }

    pub fn find(&self, cell: u8) -> Option<Pos> {
        self.positions().find(|&pos| self[pos] == cell)
    }

    pub fn find_all(&self, cell: u8) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self[pos] == cell)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width)
    }
}

impl Index<Pos> for Grid {
    type Output = u8;
    fn index(&self, (row, col): Pos) -> &u8 {
        assert!(col < self.width, "column {} out of bounds", col);
        &self.cells[row * self.width + col]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, (row, col): Pos) -> &mut u8 {
        assert!(col < self.width, "column {} out of bounds", col);
        &mut self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid {}x{}\n{}", self.width, self.height, self)
    }
}
