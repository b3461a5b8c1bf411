//! Unit-step reference simulation
//!
//! Turns the dial one click at a time and tallies every click that stops on 0.
//! Runs in time linear in the magnitude, so it is only suitable for checking
//! the closed form in [`Dial::apply`] on modest inputs.

use super::{Dial, MoveOutcome};
use crate::moves::{Direction, Move};

impl Dial {
    /// Apply a move one click at a time.
    ///
    /// Produces the same outcome and final position as [`Dial::apply`].
    pub fn sweep(&mut self, mv: &Move) -> MoveOutcome {
        let mut crossings = 0;

        for _ in 0..mv.amount {
            self.position = match mv.direction {
                Direction::Right => (self.position + 1) % self.size,
                Direction::Left => (self.position + self.size - 1) % self.size,
            };
            if self.position == 0 {
                crossings += 1;
            }
        }

        MoveOutcome {
            landed: self.position == 0,
            crossings,
        }
    }
}
