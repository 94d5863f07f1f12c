// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command controller: framing, interpretation and actuation in one polling step.
//!
//! The controller owns every piece of mutable state the car has: the frame being assembled, the
//! target speed, and the actuator. Call [`Controller::poll`] from the main loop:
//!
//! ```ignore
//! loop {
//!     if let Some(dispatch) = controller.poll(&mut usart_rx, &mut delay, &mut console) {
//!         led.toggle();
//!     }
//! }
//! ```

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::config::Config;
use crate::console;
use crate::drive::{duty_level, duty_magnitude, Actuator, DriveError, DriveState};
use crate::protocol::{parse, Action, ByteSource, Command, FrameAccumulator, ParseError};

/// Outcome of one dispatched frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatch {
    /// What the frame parsed to. Errors were dispatched as a stop.
    pub command: Result<Command, ParseError>,
    /// Action actually applied.
    pub action: Action,
    /// Target speed after this frame.
    pub target_speed: u16,
    /// Duty magnitude computed from `target_speed`.
    pub duty: f32,
    /// Motor outputs after this frame.
    pub drive: DriveState,
    /// Set when the outputs could not be written; a stop was attempted.
    pub fault: Option<DriveError>,
    /// Set when that stop failed too.
    pub stop_fault: Option<DriveError>,
}

impl Dispatch {
    /// The frame could not be interpreted and fell back to stop.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.command.is_err()
    }
}

pub struct Controller<LD, LP, RD, RP> {
    config: Config,
    frame: FrameAccumulator,
    target_speed: u16,
    actuator: Actuator<LD, LP, RD, RP>,
}

impl<LD, LP, RD, RP> Controller<LD, LP, RD, RP>
where
    LD: OutputPin,
    LP: SetDutyCycle,
    RD: OutputPin,
    RP: SetDutyCycle,
{
    pub fn new(config: Config, actuator: Actuator<LD, LP, RD, RP>) -> Self {
        Self {
            config,
            frame: FrameAccumulator::new(),
            target_speed: config.default_speed,
            actuator,
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn target_speed(&self) -> u16 {
        self.target_speed
    }

    /// Duty magnitude the next motion command will use.
    #[inline]
    pub fn duty(&self) -> f32 {
        duty_magnitude(self.target_speed)
    }

    #[inline]
    pub fn drive_state(&self) -> DriveState {
        self.actuator.state()
    }

    /// Bytes of the frame currently being assembled.
    #[inline]
    pub fn pending(&self) -> &[u8] {
        self.frame.as_bytes()
    }

    /// One polling step.
    ///
    /// Drains every byte the source has ready, pausing `pacing_us` after each one so a paced
    /// sender's next byte can arrive. When the source goes quiet with a frame buffered, the frame
    /// is dispatched and the buffer cleared.
    pub fn poll<S, D, W>(
        &mut self,
        source: &mut S,
        delay: &mut D,
        console: &mut W,
    ) -> Option<Dispatch>
    where
        S: ByteSource,
        D: DelayNs,
        W: Write,
    {
        loop {
            match source.read() {
                Ok(byte) => self.frame.feed(byte),
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(_)) => self.frame.mark_corrupted(),
            }
            delay.delay_us(self.config.pacing_us);
        }
        self.frame.end_of_burst();

        if !self.frame.is_frame_ready() {
            return None;
        }

        let parsed = if self.frame.is_corrupted() {
            Err(ParseError::Receive)
        } else if self.frame.is_overflowed() {
            Err(ParseError::Overflow)
        } else {
            parse(self.frame.as_bytes())
        };
        if self.config.echo_frames {
            let _ = console::echo_frame(console, self.frame.as_bytes());
        }

        let dispatch = self.interpret(parsed, console);
        self.frame.reset();
        Some(dispatch)
    }

    /// Interpret and apply a complete frame, bypassing the accumulator.
    pub fn dispatch_frame<W: Write>(&mut self, frame: &[u8], console: &mut W) -> Dispatch {
        if self.config.echo_frames {
            let _ = console::echo_frame(console, frame);
        }
        self.interpret(parse(frame), console)
    }

    fn interpret<W: Write>(
        &mut self,
        parsed: Result<Command, ParseError>,
        console: &mut W,
    ) -> Dispatch {
        let command = parsed.unwrap_or(Command::stop());
        if let Some(speed) = command.speed {
            self.target_speed = speed;
        }

        let duty = duty_magnitude(self.target_speed);
        if command.action.is_speed_ack() {
            let _ = console::speed_notice(console, self.target_speed);
        }

        let (fault, stop_fault) = match self.actuator.apply(command.action, duty_level(duty)) {
            Ok(_) => (None, None),
            Err(e) => (Some(e), self.actuator.stop().err()),
        };

        Dispatch {
            command: parsed,
            action: command.action,
            target_speed: self.target_speed,
            duty,
            drive: self.actuator.state(),
            fault,
            stop_fault,
        }
    }
}
