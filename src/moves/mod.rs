//! Move commands
//!
//! A move is one input line: a direction letter followed by a magnitude.
//! Directions are validated when the move is built, so downstream code only
//! ever dispatches over the two real variants.

mod parser;

pub use parser::{parse_moves, MoveParseError};

use std::fmt;
use std::str::FromStr;

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rotate toward lower numbers (decrement position)
    Left,

    /// Rotate toward higher numbers (increment position)
    Right,
}

impl Direction {
    /// Decode the command letter. Only uppercase `L` and `R` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Command letter for this direction
    pub fn as_char(&self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

/// Single rotation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Which way the dial turns
    pub direction: Direction,

    /// Number of unit clicks; may exceed the dial size
    pub amount: u64,
}

impl Move {
    /// Construct a move.
    pub fn new(direction: Direction, amount: u64) -> Self {
        Self { direction, amount }
    }

    /// Shorthand for a left move.
    pub fn left(amount: u64) -> Self {
        Self::new(Direction::Left, amount)
    }

    /// Shorthand for a right move.
    pub fn right(amount: u64) -> Self {
        Self::new(Direction::Right, amount)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.as_char(), self.amount)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_line(1, s.trim())
    }
}
