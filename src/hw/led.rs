// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LED.
//!
//! Toggles once per dispatched frame, so a steady blink while driving means frames are arriving.
//! A drive fault latches it on until the next clean frame.

use embedded_hal::digital::OutputPin;

use crate::controller::Dispatch;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct StatusLed<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> StatusLed<PIN> {
    /// Create the LED, initially off.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: true,
        };
        led.set(false);
        led
    }

    pub fn set(&mut self, on: bool) {
        let high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        self.is_on = on;
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    /// Reflect one dispatch: toggle when the outputs were written, hold on for a fault.
    pub fn show(&mut self, dispatch: &Dispatch) {
        if dispatch.fault.is_some() {
            self.set(true);
        } else {
            self.toggle();
        }
    }
}
