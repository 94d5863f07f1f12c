// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Differential Drive
//!
//! Hardware-independent motor output, written against `embedded-hal` 1.0 traits so the same code
//! runs on the board and against mocks on the host.
//!
//! ## Modules
//!
//! - [`channel`] - One motor channel: direction line plus PWM duty.
//! - [`actuator`] - Left/right channel pair and the action-to-output table.

pub mod actuator;
pub mod channel;

pub use actuator::{duty_level, duty_magnitude, Actuator, DriveState};
pub use channel::{ChannelState, Direction, DriveError, MotorChannel, Side, DUTY_MAX};
