// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Controller configuration.
//!
//! Defaults match the reference car: speed 60, 9600 baud, a 2 ms pause after each received byte.

/// Runtime configuration for the controller and the firmware bring-up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Target speed before any speed-bearing frame arrives.
    pub default_speed: u16,
    /// Pause after each received byte, in microseconds. Must cover at least one byte time at
    /// `baud_rate` so a paced sender's next byte is already waiting.
    pub pacing_us: u32,
    /// Serial baud rate of the Bluetooth module.
    pub baud_rate: u32,
    /// PWM carrier frequency for both motor channels.
    pub pwm_frequency_hz: u32,
    /// Echo each completed frame on the serial console.
    pub echo_frames: bool,
}

impl Config {
    pub const DEFAULT: Self = Self {
        default_speed: 60,
        pacing_us: 2_000,
        baud_rate: 9_600,
        pwm_frequency_hz: 20_000,
        echo_frames: true,
    };

    pub const fn new() -> Self {
        Self::DEFAULT
    }

    pub const fn with_default_speed(mut self, speed: u16) -> Self {
        self.default_speed = speed;
        self
    }

    pub const fn with_pacing_us(mut self, us: u32) -> Self {
        self.pacing_us = us;
        self
    }

    pub const fn with_baud_rate(mut self, baud: u32) -> Self {
        self.baud_rate = baud;
        self
    }

    pub const fn with_pwm_frequency_hz(mut self, hz: u32) -> Self {
        self.pwm_frequency_hz = hz;
        self
    }

    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo_frames = echo;
        self
    }

    /// Time to shift one 8N1 character at the configured baud rate, `None` for a zero baud rate.
    pub const fn byte_time_us(&self) -> Option<u32> {
        // start + 8 data + stop
        (10 * 1_000_000u32).checked_div(self.baud_rate)
    }

    /// Pacing is long enough for the next byte of a burst to arrive.
    pub const fn pacing_covers_byte(&self) -> bool {
        match self.byte_time_us() {
            Some(t) => self.pacing_us >= t,
            None => false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
