// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Differential-drive actuator.
//!
//! Maps an [`Action`] and a duty level onto both motor channels. The mapping is a flat table with
//! no memory of the previous state:
//!
//! | Action  | Left             | Right            |
//! | ------- | ---------------- | ---------------- |
//! | Left    | reverse, duty    | reverse, duty    |
//! | Right   | forward, duty    | forward, duty    |
//! | Forward | forward, duty    | reverse, duty    |
//! | Reverse | reverse, duty    | forward, duty    |
//! | Stop    | reverse, 0       | forward, 0       |
//! | `+`/`-` | unchanged        | unchanged        |
//!
//! The right motor is mounted mirrored, so straight-line motion uses opposite direction levels.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::drive::channel::{ChannelState, Direction, DriveError, MotorChannel};
use crate::protocol::Action;

/// Speed units per duty step in the linear speed-to-duty map.
pub const SPEED_PER_STEP: f32 = 10.0;
/// Duty added per step of [`SPEED_PER_STEP`].
pub const DUTY_PER_STEP: f32 = 22.5;

/// Duty magnitude for a target speed: `(speed / 10.0) * 22.5`.
#[inline]
pub fn duty_magnitude(target_speed: u16) -> f32 {
    (f32::from(target_speed) / SPEED_PER_STEP) * DUTY_PER_STEP
}

/// Output level for a duty magnitude: truncated, saturating at 255.
#[inline]
pub fn duty_level(magnitude: f32) -> u8 {
    magnitude as u8
}

/// Both channels' outputs after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveState {
    pub left: ChannelState,
    pub right: ChannelState,
}

impl DriveState {
    pub const STOPPED: Self = Self::new(Direction::Reverse, Direction::Forward, 0);

    const fn new(left: Direction, right: Direction, duty: u8) -> Self {
        Self {
            left: ChannelState::new(left, duty),
            right: ChannelState::new(right, duty),
        }
    }

    /// Table lookup. `None` for speed acknowledgements, which leave the motors alone.
    pub const fn for_action(action: Action, duty: u8) -> Option<Self> {
        use Direction::*;

        let state = match action {
            Action::TurnLeft => Self::new(Reverse, Reverse, duty),
            Action::TurnRight => Self::new(Forward, Forward, duty),
            Action::Forward => Self::new(Forward, Reverse, duty),
            Action::Reverse => Self::new(Reverse, Forward, duty),
            Action::Stop => Self::STOPPED,
            Action::SpeedUp | Action::SpeedDown => return None,
        };
        Some(state)
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        *self == Self::STOPPED
    }
}

/// Left and right motor channels driven as one unit.
pub struct Actuator<LD, LP, RD, RP> {
    left: MotorChannel<LD, LP>,
    right: MotorChannel<RD, RP>,
}

impl<LD, LP, RD, RP> Actuator<LD, LP, RD, RP>
where
    LD: OutputPin,
    LP: SetDutyCycle,
    RD: OutputPin,
    RP: SetDutyCycle,
{
    /// Take both channels and put them in the stop state.
    pub fn new(
        left: MotorChannel<LD, LP>,
        right: MotorChannel<RD, RP>,
    ) -> Result<Self, DriveError> {
        let mut actuator = Self { left, right };
        actuator.write(DriveState::STOPPED)?;
        Ok(actuator)
    }

    /// Apply an action at the given duty level.
    ///
    /// Returns the new drive state, or `None` when the action leaves the motors unchanged.
    pub fn apply(&mut self, action: Action, duty: u8) -> Result<Option<DriveState>, DriveError> {
        match DriveState::for_action(action, duty) {
            Some(next) => {
                self.write(next)?;
                Ok(Some(next))
            }
            None => Ok(None),
        }
    }

    #[inline]
    pub fn stop(&mut self) -> Result<(), DriveError> {
        self.write(DriveState::STOPPED)
    }

    /// State on the pins, including any half-applied write.
    pub fn state(&self) -> DriveState {
        // Both channels are fully written in `new`.
        DriveState {
            left: self.left.state().unwrap_or(DriveState::STOPPED.left),
            right: self.right.state().unwrap_or(DriveState::STOPPED.right),
        }
    }

    fn write(&mut self, next: DriveState) -> Result<(), DriveError> {
        self.left.set(next.left)?;
        self.right.set(next.right)
    }
}
