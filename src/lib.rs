//! # Dial Zero Counting
//!
//! Simulates a circular dial with `size` positions (100 by default) that
//! starts at position 50 and is rotated by a sequence of `L`/`R` commands.
//! Two counting rules are supported:
//!
//! 1. **Landing**: count moves after which the dial rests exactly on 0.
//! 2. **Crossing**: count every instant a move passes through or lands on 0,
//!    including full revolutions inside a single move.
//!
//! Both rules are evaluated in closed form per move, so a magnitude of
//! `u64::MAX` costs the same as a magnitude of 1.
//!
//! ## Usage Example
//!
//! ```
//! use safe_dial::{solve, DialConfig};
//!
//! let report = solve("L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82", &DialConfig::default())?;
//! assert_eq!(report.landings, 3);
//! assert_eq!(report.crossings, 6);
//! # Ok::<(), safe_dial::DialError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod dial;    // Dial state and per-move arithmetic
pub mod moves;   // Move commands and the line parser
pub mod rules;   // Counting rules and run reports
pub mod source;  // Input acquisition

pub use dial::{Dial, MoveOutcome};
pub use moves::{parse_moves, Direction, Move, MoveParseError};
pub use rules::{
    count, count_crossings, count_landings, part1, part2, simulate, simulate_stepwise, solve,
    verify, CountingRule, Report, EXAMPLE_CROSSINGS, EXAMPLE_INPUT, EXAMPLE_LANDINGS,
};
pub use source::{read_from, InputSource};

use thiserror::Error;

/// Number of positions on the standard dial.
pub const DEFAULT_SIZE: u32 = 100;

/// Position the standard dial points at before the first move.
pub const DEFAULT_START: u32 = 50;

/// Dial geometry and starting point.
///
/// The size is bounded by `u32` so that all per-move arithmetic fits in
/// `u64` without overflow, whatever the move magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialConfig {
    /// Number of positions on the dial (positions are `0..size`)
    pub size: u32,

    /// Initial position before any move is applied
    pub start: u32,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            start: DEFAULT_START,
        }
    }
}

impl DialConfig {
    /// Create a validated configuration
    pub fn new(size: u32, start: u32) -> Result<Self, DialError> {
        let config = Self { size, start };
        config.validate()?;
        Ok(config)
    }

    /// Replace the dial size
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Replace the starting position
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Check that the dial has at least one position and the start lies on it
    pub fn validate(&self) -> Result<(), DialError> {
        if self.size == 0 {
            return Err(DialError::InvalidConfig(
                "dial size must be at least 1".to_string(),
            ));
        }
        if self.start >= self.size {
            return Err(DialError::InvalidConfig(format!(
                "start position {} is outside dial of size {}",
                self.start, self.size
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while reading, parsing, or counting
#[derive(Error, Debug)]
pub enum DialError {
    /// Dial size or start position is unusable
    #[error("Invalid dial configuration: {0}")]
    InvalidConfig(String),

    /// A line of input is not a well-formed move
    #[error("Invalid move: {0}")]
    Parse(#[from] MoveParseError),

    /// The running crossing total no longer fits in `u64`
    #[error("Crossing count overflowed at move {index}")]
    CountOverflow {
        /// 1-based index of the move that overflowed the total
        index: usize,
    },

    /// Closed-form and unit-step crossing counts disagree
    #[error("Closed-form crossing count {closed_form} disagrees with step simulation {stepwise}")]
    VerificationFailed {
        /// Count from the per-move formula
        closed_form: u64,
        /// Count from the unit-step sweep
        stepwise: u64,
    },

    /// Input could not be read
    #[error("Failed to read {origin}: {source}")]
    Io {
        /// Human-readable name of the input (path or `stdin`)
        origin: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
