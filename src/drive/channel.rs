// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One motor channel: a direction line plus a PWM duty-cycle output.
//!
//! Duty is expressed on the 0..=255 scale of the reference firmware and scaled onto whatever
//! resolution the PWM timer has.

use embedded_hal::digital::{self, OutputPin, PinState};
use embedded_hal::pwm::{self, SetDutyCycle};

/// Full-scale duty on the 8-bit output scale.
pub const DUTY_MAX: u8 = u8::MAX;

/// Logical drive direction of one channel. Forward drives the direction line high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub const fn pin_state(self) -> PinState {
        match self {
            Direction::Forward => PinState::High,
            Direction::Reverse => PinState::Low,
        }
    }
}

/// Which side of the car a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// Output state of one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelState {
    pub direction: Direction,
    pub duty: u8,
}

impl ChannelState {
    pub const fn new(direction: Direction, duty: u8) -> Self {
        Self { direction, duty }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveError {
    #[error("{side:?} direction line failed: {kind:?}")]
    Direction {
        side: Side,
        kind: digital::ErrorKind,
    },
    #[error("{side:?} PWM output failed: {kind:?}")]
    Duty { side: Side, kind: pwm::ErrorKind },
}

/// Motor channel driven through `embedded-hal` traits.
pub struct MotorChannel<DIR, PWM> {
    side: Side,
    dir: DIR,
    pwm: PWM,
    state: Option<ChannelState>,
}

impl<DIR, PWM> MotorChannel<DIR, PWM>
where
    DIR: OutputPin,
    PWM: SetDutyCycle,
{
    /// Wrap a direction line and PWM output. Nothing is driven until the first `set`.
    pub fn new(side: Side, dir: DIR, pwm: PWM) -> Self {
        Self {
            side,
            dir,
            pwm,
            state: None,
        }
    }

    /// Drive direction, then duty.
    pub fn set(&mut self, state: ChannelState) -> Result<(), DriveError> {
        let side = self.side;
        self.dir
            .set_state(state.direction.pin_state())
            .map_err(|e| DriveError::Direction {
                side,
                kind: digital::Error::kind(&e),
            })?;
        // The line has switched even if the duty write below fails.
        if let Some(written) = self.state.as_mut() {
            written.direction = state.direction;
        }
        self.pwm
            .set_duty_cycle_fraction(u16::from(state.duty), u16::from(DUTY_MAX))
            .map_err(|e| DriveError::Duty {
                side,
                kind: pwm::Error::kind(&e),
            })?;

        self.state = Some(state);
        Ok(())
    }

    /// State on the pins, `None` before the first complete write.
    #[inline]
    pub fn state(&self) -> Option<ChannelState> {
        self.state
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}
