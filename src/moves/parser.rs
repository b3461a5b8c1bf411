use thiserror::Error;
use tracing::debug;

use super::{Direction, Move};

/// Errors produced while turning input lines into moves.
///
/// Line numbers are 1-based and count every physical line, blank ones included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// The line has no content.
    #[error("line {line}: empty move")]
    Empty {
        /// Offending line
        line: usize,
    },

    /// The first character is not `L` or `R`.
    #[error("line {line}: unknown direction '{found}' (expected 'L' or 'R')")]
    UnknownDirection {
        /// Offending line
        line: usize,
        /// Character found in the direction slot
        found: char,
    },

    /// A direction letter with nothing after it.
    #[error("line {line}: missing magnitude after '{direction}'")]
    MissingMagnitude {
        /// Offending line
        line: usize,
        /// Direction letter that was present
        direction: char,
    },

    /// The magnitude contains something other than decimal digits.
    #[error("line {line}: invalid magnitude '{text}'")]
    InvalidMagnitude {
        /// Offending line
        line: usize,
        /// Raw magnitude text
        text: String,
    },

    /// The magnitude is all digits but exceeds `u64::MAX`.
    #[error("line {line}: magnitude '{text}' does not fit in 64 bits")]
    MagnitudeOutOfRange {
        /// Offending line
        line: usize,
        /// Raw magnitude text
        text: String,
    },
}

/// Parse newline-delimited moves.
///
/// Each line is trimmed; lines that are empty after trimming are skipped.
/// Parsing stops at the first malformed line.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, MoveParseError> {
    let mut moves = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        moves.push(parse_line(idx + 1, line)?);
    }

    debug!(moves = moves.len(), "parsed move list");
    Ok(moves)
}

/// Parse an already-trimmed line.
pub(super) fn parse_line(line_no: usize, line: &str) -> Result<Move, MoveParseError> {
    let mut chars = line.chars();
    let letter = chars
        .next()
        .ok_or(MoveParseError::Empty { line: line_no })?;
    let direction = Direction::from_char(letter).ok_or(MoveParseError::UnknownDirection {
        line: line_no,
        found: letter,
    })?;

    let digits = chars.as_str();
    if digits.is_empty() {
        return Err(MoveParseError::MissingMagnitude {
            line: line_no,
            direction: letter,
        });
    }
    // `u64::from_str` also accepts a leading '+', which is not a valid move.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoveParseError::InvalidMagnitude {
            line: line_no,
            text: digits.to_string(),
        });
    }

    let amount = digits
        .parse::<u64>()
        .map_err(|_| MoveParseError::MagnitudeOutOfRange {
            line: line_no,
            text: digits.to_string(),
        })?;

    Ok(Move::new(direction, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_input_order() {
        let moves = parse_moves("L68\nL30\nR48").unwrap();
        assert_eq!(moves, vec![Move::left(68), Move::left(30), Move::right(48)]);
    }

    #[test]
    fn skips_blank_and_indented_lines() {
        let moves = parse_moves("\n    L5\n\n   \n    R60\n").unwrap();
        assert_eq!(moves, vec![Move::left(5), Move::right(60)]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let moves = parse_moves("L1\r\nR2\r\n").unwrap();
        assert_eq!(moves, vec![Move::left(1), Move::right(2)]);
    }

    #[test]
    fn rejects_lowercase_direction() {
        let result = parse_moves("L1\nr2");
        assert_eq!(
            result,
            Err(MoveParseError::UnknownDirection { line: 2, found: 'r' })
        );
    }

    #[test]
    fn rejects_missing_magnitude() {
        assert_eq!(
            parse_moves("R"),
            Err(MoveParseError::MissingMagnitude {
                line: 1,
                direction: 'R'
            })
        );
    }

    #[test]
    fn rejects_non_numeric_magnitude() {
        for bad in ["L1x", "L+5", "L-5", "L 5", "R4.0"] {
            assert!(
                matches!(
                    parse_moves(bad),
                    Err(MoveParseError::InvalidMagnitude { line: 1, .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn magnitude_limits() {
        let max = format!("R{}", u64::MAX);
        assert_eq!(parse_moves(&max).unwrap(), vec![Move::right(u64::MAX)]);

        let too_big = "R18446744073709551616";
        assert!(matches!(
            parse_moves(too_big),
            Err(MoveParseError::MagnitudeOutOfRange { line: 1, .. })
        ));
    }

    #[test]
    fn empty_input_has_no_moves() {
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves("  \n\n").unwrap().is_empty());
    }

    #[test]
    fn from_str_rejects_blank() {
        assert_eq!("   ".parse::<Move>(), Err(MoveParseError::Empty { line: 1 }));
    }
}
