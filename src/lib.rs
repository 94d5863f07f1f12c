// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # bluecar Firmware
//!
//! This crate contains the firmware for a two-wheeled car driven over a Bluetooth serial link,
//! written in Rust, targeting an STM32F767ZI MCU.
//!
//! ASCII frames such as `%75W` arrive from the Bluetooth module, are delimited by the gap after
//! each burst, parsed into a speed and an action, and applied to a left and right motor channel.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`protocol`] | Frame accumulation, parsing and encoding |
//! | [`drive`] | Motor channels and the differential-drive action table |
//! | [`controller`] | Polling step tying framing to actuation |
//! | [`console`] | Serial diagnostics (frame echo, speed notice) |
//! | [`config`] | Runtime configuration |
//! | `hw` | MCU-level wrappers around USART, TIM4 PWM, GPIO, SysTick (`firmware` feature) |
//!
//! Everything except `hw` is hardware-independent and builds on the host.
//!
//! ## Getting Started
//!
//! Run the tests on the host:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features firmware --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod controller;
pub mod drive;
#[cfg(feature = "firmware")]
pub mod hw;
pub mod protocol;

#[cfg(test)]
mod test_helpers;

pub use config::Config;
pub use controller::{Controller, Dispatch};
