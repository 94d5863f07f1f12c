// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Frame parser for the car command protocol.
//!
//! Converts one complete frame into a [`Command`]. Frames that cannot be interpreted produce a
//! [`ParseError`]; the controller turns every error into a stop.

use crate::protocol::messages::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    #[error("empty frame")]
    Empty,
    #[error("frame starts with {found:#04x}, not the sentinel")]
    MissingSentinel { found: u8 },
    #[error("non-digit {found:#04x} in speed field")]
    InvalidSpeed { found: u8 },
    #[error("speed does not fit in 16 bits")]
    SpeedOverflow,
    #[error("frame longer than the command buffer")]
    Overflow,
    #[error("serial receive error while framing")]
    Receive,
}

/// Parse a complete frame.
///
/// - `%<digits><action>` (length > 2, digit after the sentinel) sets the target speed.
/// - `%<action>` keeps the target speed. Bytes after the action are ignored.
/// - `%` alone is the sender's stop frame.
pub fn parse(frame: &[u8]) -> Result<Command, ParseError> {
    let (&first, rest) = frame.split_first().ok_or(ParseError::Empty)?;
    if first != SENTINEL {
        return Err(ParseError::MissingSentinel { found: first });
    }

    match rest {
        [] => Ok(Command::stop()),
        [d, .., action] if d.is_ascii_digit() => {
            let digits = &rest[..rest.len() - 1];
            let speed = parse_speed(digits)?;
            Ok(Command::with_speed(speed, Action::from_symbol(*action)))
        }
        [action, ..] => Ok(Command::bare(Action::from_symbol(*action))),
    }
}

/// Parse a non-empty run of ASCII digits as a base-10 speed.
fn parse_speed(digits: &[u8]) -> Result<u16, ParseError> {
    digits.iter().try_fold(0u16, |acc, &b| {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidSpeed { found: b });
        }
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(u16::from(b - b'0')))
            .ok_or(ParseError::SpeedOverflow)
    })
}
