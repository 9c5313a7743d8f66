pub mod coord;
pub mod explore;
pub mod graph;
pub mod render;

use std::fmt;

use crate::coord::Coord;

/// Smallest playable board.
pub const MIN_SIDE_LENGTH: u8 = 3;
/// [`Config`] packs one bit per hole into a `u64`, which caps the hole count
/// at 64; side length 10 is the largest triangle that fits (55 holes).
pub const MAX_SIDE_LENGTH: u8 = 10;

/// Jump direction vectors in (rows, cols) relative to the destination hole:
/// up-left, up-right, down-left, down-right, left, right.
const JUMP_DIRECTIONS: [(i8, i8); 6] = [(-2, -2), (-2, 0), (2, 2), (2, 0), (0, -2), (0, 2)];

/// Geometry of a triangular board: side length, hole count and the table of
/// all geometrically possible jumps.
#[derive(Debug, Clone)]
pub struct Board {
    side_length: u8,
    nr_holes: usize,
    jumps: Vec<Jump>,
}

/// Occupancy of every hole on a board, packed one bit per hole in row-major
/// triangular order. Bit `i` set means hole `i` holds a peg.
///
/// Values are compared and hashed structurally, so a `Config` can be used
/// directly as a search key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Config(pub u64);

/// A single jump: the peg at `src` leaps over `mid` into the empty hole at
/// `dst`, removing the peg at `mid`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Jump {
    remove_bits: u64,
    add_bits: u64,
    src: u8,
    mid: u8,
    dst: u8,
}

impl Board {
    /// `None` for side lengths outside `MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH`.
    pub fn new(side_length: u8) -> Option<Board> {
        if !(MIN_SIDE_LENGTH..=MAX_SIDE_LENGTH).contains(&side_length) {
            return None;
        }

        let nr_holes = side_length as usize * (side_length as usize + 1) / 2;
        Some(Board {
            side_length,
            nr_holes,
            jumps: compute_jumps(side_length),
        })
    }

    pub fn side_length(&self) -> u8 {
        self.side_length
    }

    pub fn nr_holes(&self) -> usize {
        self.nr_holes
    }

    /// Hole coordinate of a linear index; `None` past the last row.
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.nr_holes {
            return None;
        }

        let mut row: i8 = 0;
        let mut rest = index;
        while rest > row as usize {
            row += 1;
            rest -= row as usize;
        }

        Some(Coord::new(row, rest as i8).expect("row-major decomposition stays inside the triangle"))
    }

    /// Linear index of a coordinate; `None` when the row is off this board.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        (coord.row() < self.side_length as i8).then(|| coord.index())
    }

    /// All geometrically possible jumps, ordered by destination hole and,
    /// per destination, by the fixed direction order of `JUMP_DIRECTIONS`.
    pub fn jumps(&self) -> &[Jump] {
        &self.jumps
    }

    /// The jumps legal in `config`, in the same deterministic order as
    /// [`Board::jumps`].
    pub fn legal_jumps(&self, config: Config) -> Vec<Jump> {
        self.jumps
            .iter()
            .copied()
            .filter(|&jump| config.can_jump(jump))
            .collect()
    }
}

fn compute_jumps(side_length: u8) -> Vec<Jump> {
    let side = side_length as i8;
    let mut jumps = Vec::new();

    for row in 0..side {
        for col in 0..=row {
            let dst = Coord::new(row, col).expect("loop ranges stay inside the triangle");

            for (rows, cols) in JUMP_DIRECTIONS {
                let Some(src) = dst.shift(rows, cols) else {
                    continue;
                };
                if src.row() >= side {
                    continue;
                }

                let mid = dst
                    .shift(rows / 2, cols / 2)
                    .expect("midpoint between two valid holes is valid");

                jumps.push(Jump {
                    remove_bits: 1u64 << src.index() | 1u64 << mid.index(),
                    add_bits: 1u64 << dst.index(),
                    src: src.index() as u8,
                    mid: mid.index() as u8,
                    dst: dst.index() as u8,
                });
            }
        }
    }

    jumps
}

impl Jump {
    pub fn src(&self) -> usize {
        self.src as usize
    }
    pub fn mid(&self) -> usize {
        self.mid as usize
    }
    pub fn dst(&self) -> usize {
        self.dst as usize
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}

impl Config {
    /// Every hole filled except `missing`; `None` when the index is off the
    /// board.
    pub fn with_missing(board: &Board, missing: usize) -> Option<Config> {
        if missing >= board.nr_holes() {
            return None;
        }

        let full = (1u64 << board.nr_holes()) - 1;
        Some(Config(full & !(1u64 << missing)))
    }

    /// A lone peg in `index`; `None` when the index is off the board.
    pub fn single_peg(board: &Board, index: usize) -> Option<Config> {
        (index < board.nr_holes()).then(|| Config(1u64 << index))
    }

    /// Parse a configuration from `#` (peg) and `.` (empty) symbols in hole
    /// order. Whitespace is ignored, so literals can be laid out as indented
    /// triangles. Panics on other characters or on a symbol count that
    /// doesn't match the board.
    pub fn from_ascii(board: &Board, s: &str) -> Config {
        let mut bits = 0;
        let mut nr_symbols = 0;

        for c in s.chars() {
            match c {
                '#' => {
                    bits |= 1u64 << nr_symbols;
                    nr_symbols += 1;
                }
                '.' => nr_symbols += 1,
                c if c.is_whitespace() => {}
                _ => panic!("invalid char {c:?} in ascii configuration"),
            }
            assert!(
                nr_symbols <= board.nr_holes(),
                "too many symbols in ascii configuration"
            );
        }

        assert_eq!(
            nr_symbols,
            board.nr_holes(),
            "ascii configuration must cover every hole exactly once"
        );
        Config(bits)
    }

    /// Flat `#`/`.` pattern in hole order; inverse of [`Config::from_ascii`]
    /// up to whitespace.
    pub fn ascii(self, board: &Board) -> String {
        (0..board.nr_holes())
            .map(|index| if self.has_peg(index) { '#' } else { '.' })
            .collect()
    }

    /// Number of pegs on the board.
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn has_peg(self, index: usize) -> bool {
        self.0 & 1u64 << index != 0
    }

    /// A jump is legal when its destination is empty and both the source and
    /// the jumped-over hole hold pegs.
    pub fn can_jump(self, jump: Jump) -> bool {
        (self.0 & jump.remove_bits).count_ones() == 2 && self.0 & jump.add_bits == 0
    }

    /// Apply a legal jump, yielding the configuration with source and
    /// midpoint cleared and destination set.
    ///
    /// Panics when the jump is not legal here; callers check with
    /// [`Config::can_jump`] or go through [`Board::legal_jumps`].
    pub fn apply_jump(self, jump: Jump) -> Config {
        assert!(self.can_jump(jump), "jump {jump} is not legal here");
        Config(self.0 & !jump.remove_bits | jump.add_bits)
    }
}
