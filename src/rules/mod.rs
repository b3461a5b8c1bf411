//! Counting rules
//!
//! Threads a [`Dial`] through a move list in order and accumulates both
//! counting rules in a single pass.

use tracing::{debug, info};

use crate::dial::{Dial, MoveOutcome};
use crate::moves::{parse_moves, Move};
use crate::{DialConfig, DialError};

/// Worked example used by `dial selftest` and the regression tests.
pub const EXAMPLE_INPUT: &str = "\
L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

/// Landing count of [`EXAMPLE_INPUT`] on the default dial.
pub const EXAMPLE_LANDINGS: u64 = 3;

/// Crossing count of [`EXAMPLE_INPUT`] on the default dial.
pub const EXAMPLE_CROSSINGS: u64 = 6;

/// Which zero events are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountingRule {
    /// Moves after which the dial rests on 0
    Landing,
    /// Every click during a move that reaches 0
    Crossing,
}

impl CountingRule {
    /// Both rules, in reporting order.
    pub const ALL: [CountingRule; 2] = [CountingRule::Landing, CountingRule::Crossing];

    /// Label used on the answer line
    pub fn label(&self) -> &'static str {
        match self {
            CountingRule::Landing => "Part 1",
            CountingRule::Crossing => "Part 2",
        }
    }
}

/// Totals for one run over a move list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Landing-rule total
    pub landings: u64,

    /// Crossing-rule total
    pub crossings: u64,

    /// Number of moves applied
    pub moves: usize,

    /// Dial position after the last move
    pub final_position: u64,
}

impl Report {
    /// Total for the requested rule
    pub fn get(&self, rule: CountingRule) -> u64 {
        match rule {
            CountingRule::Landing => self.landings,
            CountingRule::Crossing => self.crossings,
        }
    }
}

/// Apply every move with the closed-form arithmetic.
pub fn simulate(moves: &[Move], config: &DialConfig) -> Result<Report, DialError> {
    simulate_with(moves, config, Dial::apply)
}

/// Apply every move one click at a time.
///
/// Cost is proportional to the sum of all magnitudes.
pub fn simulate_stepwise(moves: &[Move], config: &DialConfig) -> Result<Report, DialError> {
    simulate_with(moves, config, Dial::sweep)
}

/// Run the closed form and cross-check it against the unit-step simulation.
pub fn verify(moves: &[Move], config: &DialConfig) -> Result<Report, DialError> {
    let report = simulate(moves, config)?;
    let reference = simulate_stepwise(moves, config)?;
    if report.crossings != reference.crossings || report.landings != reference.landings {
        return Err(DialError::VerificationFailed {
            closed_form: report.crossings,
            stepwise: reference.crossings,
        });
    }
    Ok(report)
}

fn simulate_with<F>(moves: &[Move], config: &DialConfig, mut step: F) -> Result<Report, DialError>
where
    F: FnMut(&mut Dial, &Move) -> MoveOutcome,
{
    let mut dial = Dial::new(config)?;
    let mut report = Report {
        final_position: dial.position(),
        ..Report::default()
    };

    for (idx, mv) in moves.iter().enumerate() {
        let outcome = step(&mut dial, mv);
        debug!(
            index = idx + 1,
            %mv,
            position = dial.position(),
            landed = outcome.landed,
            crossings = outcome.crossings,
            "applied move"
        );

        if outcome.landed {
            report.landings += 1;
        }
        report.crossings = report
            .crossings
            .checked_add(outcome.crossings)
            .ok_or(DialError::CountOverflow { index: idx + 1 })?;
    }

    report.moves = moves.len();
    report.final_position = dial.position();
    info!(
        moves = report.moves,
        landings = report.landings,
        crossings = report.crossings,
        final_position = report.final_position,
        "dial run complete"
    );
    Ok(report)
}

/// Total for a single rule.
pub fn count(rule: CountingRule, moves: &[Move], config: &DialConfig) -> Result<u64, DialError> {
    simulate(moves, config).map(|report| report.get(rule))
}

/// Landing-rule total on the default dial.
pub fn count_landings(moves: &[Move]) -> Result<u64, DialError> {
    count(CountingRule::Landing, moves, &DialConfig::default())
}

/// Crossing-rule total on the default dial.
pub fn count_crossings(moves: &[Move]) -> Result<u64, DialError> {
    count(CountingRule::Crossing, moves, &DialConfig::default())
}

/// Parse `input` and run both rules.
pub fn solve(input: &str, config: &DialConfig) -> Result<Report, DialError> {
    let moves = parse_moves(input)?;
    simulate(&moves, config)
}

/// Landing-rule answer for raw puzzle text.
pub fn part1(input: &str) -> Result<u64, DialError> {
    count_landings(&parse_moves(input)?)
}

/// Crossing-rule answer for raw puzzle text.
pub fn part2(input: &str) -> Result<u64, DialError> {
    count_crossings(&parse_moves(input)?)
}
