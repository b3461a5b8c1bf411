//! Dial state and move arithmetic
//!
//! The dial is a single position on a cycle of `size` points, always kept
//! in `[0, size)`. Applying a move yields both counting-rule contributions
//! at once:
//! - whether the dial rests on 0 afterwards (landing)
//! - how many times it reached 0 while turning (crossings)
//!
//! Crossings are computed in closed form. A magnitude splits into whole laps,
//! each of which passes 0 exactly once, and a remainder shorter than one lap
//! that reaches 0 at most once.

mod sweep;

use crate::moves::{Direction, Move};
use crate::{DialConfig, DialError};

/// Circular dial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    size: u64,
    position: u64,
}

/// Contribution of one move to each counting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Dial rests on 0 after the move
    pub landed: bool,

    /// Times the dial reached 0 during the move, final rest included
    pub crossings: u64,
}

impl Dial {
    /// Create a dial at the configured start position.
    pub fn new(config: &DialConfig) -> Result<Self, DialError> {
        config.validate()?;
        Ok(Self {
            size: u64::from(config.size),
            position: u64::from(config.start),
        })
    }

    /// Current position in `[0, size)`
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Number of positions on the dial
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whether the dial currently points at 0
    pub fn is_at_zero(&self) -> bool {
        self.position == 0
    }

    /// Apply a move and report what it contributed to each rule.
    ///
    /// Never overflows: `position` and the sub-lap remainder are both below
    /// `size <= u32::MAX`, so their sum fits easily in `u64`.
    pub fn apply(&mut self, mv: &Move) -> MoveOutcome {
        let laps = mv.amount / self.size;
        let rest = mv.amount % self.size;

        let (partial, next) = match mv.direction {
            Direction::Right => {
                let reach = self.position + rest;
                (reach / self.size, reach % self.size)
            }
            Direction::Left => {
                // Leaving 0 to the left does not count; 0 is next reached a full lap later.
                let partial = if self.position == 0 {
                    0
                } else {
                    (self.size - self.position + rest) / self.size
                };
                (partial, (self.position + self.size - rest) % self.size)
            }
        };

        self.position = next;
        MoveOutcome {
            landed: next == 0,
            crossings: laps + partial,
        }
    }
}
