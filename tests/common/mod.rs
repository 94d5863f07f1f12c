// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use bluecar::drive::{Actuator, MotorChannel, Side};
use bluecar::protocol::ByteSource;
use bluecar::{Config, Controller};

pub type Car = Controller<Line, Pwm, Line, Pwm>;

/// Shared view of one motor channel's pins: (direction high?, raw duty).
#[derive(Clone, Default)]
pub struct Wires {
    dir: Rc<Cell<Option<bool>>>,
    duty: Rc<Cell<u16>>,
}

impl Wires {
    pub fn dir_high(&self) -> Option<bool> {
        self.dir.get()
    }

    pub fn duty(&self) -> u16 {
        self.duty.get()
    }
}

pub struct Line(Rc<Cell<Option<bool>>>);

impl digital::ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(Some(true));
        Ok(())
    }
}

/// 8-bit PWM channel, so raw duty equals the drive level.
pub struct Pwm(Rc<Cell<u16>>);

impl pwm::ErrorType for Pwm {
    type Error = Infallible;
}

impl SetDutyCycle for Pwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set(duty);
        Ok(())
    }
}

/// Car wired to mock pins, with probes on the left and right channels.
pub fn car(config: Config) -> (Car, Wires, Wires) {
    let left = Wires::default();
    let right = Wires::default();
    let actuator = Actuator::new(
        MotorChannel::new(Side::Left, Line(left.dir.clone()), Pwm(left.duty.clone())),
        MotorChannel::new(
            Side::Right,
            Line(right.dir.clone()),
            Pwm(right.duty.clone()),
        ),
    )
    .unwrap();
    (Controller::new(config, actuator), left, right)
}

/// Serial line replayed from a script. `None` marks the gap after a burst.
#[derive(Default)]
pub struct Link {
    script: VecDeque<Option<u8>>,
}

impl Link {
    /// Queue one burst of bytes followed by a gap.
    pub fn send(&mut self, burst: &[u8]) -> &mut Self {
        self.script.extend(burst.iter().copied().map(Some));
        self.script.push_back(None);
        self
    }

    pub fn is_idle(&self) -> bool {
        self.script.is_empty()
    }
}

impl ByteSource for Link {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        match self.script.pop_front() {
            Some(Some(b)) => Ok(b),
            _ => Err(nb::Error::WouldBlock),
        }
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
