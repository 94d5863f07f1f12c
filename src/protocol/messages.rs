// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command message protocol used to drive the car over the Bluetooth serial link.
//!
//! A frame is plain ASCII: the sentinel `%`, an optional decimal speed, then one action symbol.
//!
//! | Frame   | Meaning                                   |
//! | ------- | ----------------------------------------- |
//! | `%W`    | Forward at the current target speed       |
//! | `%75W`  | Set target speed to 75, then forward      |
//! | `%+`    | Report the target speed, no motion change |
//! | `%`     | Stop                                      |

use core::fmt;

/// Sentinel byte that opens every command frame.
pub const SENTINEL: u8 = b'%';

// Action symbols
pub const SYM_SPEED_UP: u8 = b'+';
pub const SYM_SPEED_DOWN: u8 = b'-';
pub const SYM_LEFT: u8 = b'L';
pub const SYM_RIGHT: u8 = b'R';
pub const SYM_FORWARD: u8 = b'W';
pub const SYM_REVERSE: u8 = b'S';

/// Speed range the sender works in. The receiver does not enforce it.
pub const MAX_SPEED: u16 = 100;

/// Clamp a requested speed to the sender's 0..=100 range.
#[inline]
pub fn clamp_speed(speed: i32) -> u16 {
    speed.clamp(0, MAX_SPEED as i32) as u16
}

/// Actuation selected by a frame's action symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// `+`: speed acknowledgement, motors untouched.
    SpeedUp,
    /// `-`: speed acknowledgement, motors untouched.
    SpeedDown,
    /// `L`
    TurnLeft,
    /// `R`
    TurnRight,
    /// `W`
    Forward,
    /// `S`
    Reverse,
    /// Any other symbol, and the fallback for frames that cannot be interpreted.
    Stop,
}

impl Action {
    /// Map an action symbol to its action. Unknown symbols stop the car.
    pub const fn from_symbol(symbol: u8) -> Self {
        match symbol {
            SYM_SPEED_UP => Action::SpeedUp,
            SYM_SPEED_DOWN => Action::SpeedDown,
            SYM_LEFT => Action::TurnLeft,
            SYM_RIGHT => Action::TurnRight,
            SYM_FORWARD => Action::Forward,
            SYM_REVERSE => Action::Reverse,
            _ => Action::Stop,
        }
    }

    /// Wire symbol for this action. `Stop` has none; it is sent as the bare sentinel.
    pub const fn symbol(self) -> Option<u8> {
        match self {
            Action::SpeedUp => Some(SYM_SPEED_UP),
            Action::SpeedDown => Some(SYM_SPEED_DOWN),
            Action::TurnLeft => Some(SYM_LEFT),
            Action::TurnRight => Some(SYM_RIGHT),
            Action::Forward => Some(SYM_FORWARD),
            Action::Reverse => Some(SYM_REVERSE),
            Action::Stop => None,
        }
    }

    /// True for `+` and `-`, which only report the target speed.
    #[inline]
    pub const fn is_speed_ack(self) -> bool {
        matches!(self, Action::SpeedUp | Action::SpeedDown)
    }
}

/// A parsed command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// New target speed, present only in speed-bearing frames.
    pub speed: Option<u16>,
    pub action: Action,
}

impl Command {
    /// Bare command: action only, target speed kept.
    pub const fn bare(action: Action) -> Self {
        Self {
            speed: None,
            action,
        }
    }

    /// Speed-bearing command.
    pub const fn with_speed(speed: u16, action: Action) -> Self {
        Self {
            speed: Some(speed),
            action,
        }
    }

    /// The sender's speed-set frame, `%<speed>-`, clamped to 0..=100.
    pub fn set_speed(speed: i32) -> Self {
        Self::with_speed(clamp_speed(speed), Action::SpeedDown)
    }

    pub const fn stop() -> Self {
        Self::bare(Action::Stop)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode(f)
    }
}
