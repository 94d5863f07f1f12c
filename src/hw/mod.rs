// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # MCU Wrappers
//!
//! STM32F7-specific glue between `stm32f7xx-hal` and the `embedded-hal` 1.0 traits the rest of
//! the crate is written against. Only built with the `firmware` feature.

pub mod delay;
pub mod gpio;
pub mod led;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use delay::SysDelay;
pub use gpio::OutputLine;
pub use led::{ActiveLevel, StatusLed};
pub use pins::BoardPins;
pub use pwm::Tim4Channel;
pub use usart::Usart;
