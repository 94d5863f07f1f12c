// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::drive::{MotorChannel, Side};
use crate::protocol::ByteSource;

/// Output pin recording its last level. `None` until first driven.
pub(crate) struct MockPin {
    level: Rc<Cell<Option<bool>>>,
}

impl MockPin {
    pub(crate) fn new() -> Self {
        Self {
            level: Rc::new(Cell::new(None)),
        }
    }

    pub(crate) fn probe(&self) -> Rc<Cell<Option<bool>>> {
        Rc::clone(&self.level)
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(Some(true));
        Ok(())
    }
}

/// Output pin that always fails.
pub(crate) struct FailingPin;

impl digital::ErrorType for FailingPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for FailingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(digital::ErrorKind::Other)
    }
}

/// PWM channel recording its raw duty register.
pub(crate) struct MockPwm {
    max: u16,
    duty: Rc<Cell<u16>>,
}

impl MockPwm {
    pub(crate) fn new(max: u16) -> Self {
        Self {
            max,
            duty: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn probe(&self) -> Rc<Cell<u16>> {
        Rc::clone(&self.duty)
    }
}

impl pwm::ErrorType for MockPwm {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        assert!(duty <= self.max, "duty {duty} above max {}", self.max);
        self.duty.set(duty);
        Ok(())
    }
}

/// PWM channel that accepts `ok_writes` writes, then fails.
#[derive(Default)]
pub(crate) struct FailingPwm {
    ok_writes: u32,
}

impl FailingPwm {
    pub(crate) fn after(ok_writes: u32) -> Self {
        Self { ok_writes }
    }
}

impl pwm::ErrorType for FailingPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for FailingPwm {
    fn max_duty_cycle(&self) -> u16 {
        255
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        if self.ok_writes == 0 {
            return Err(pwm::ErrorKind::Other);
        }
        self.ok_writes -= 1;
        Ok(())
    }
}

/// Shared view of one mock channel's direction level and raw duty.
pub(crate) struct ChannelProbe {
    level: Rc<Cell<Option<bool>>>,
    duty: Rc<Cell<u16>>,
}

impl ChannelProbe {
    pub(crate) fn channel(side: Side, max_duty: u16) -> (MotorChannel<MockPin, MockPwm>, Self) {
        let pin = MockPin::new();
        let pwm = MockPwm::new(max_duty);
        let probe = Self {
            level: pin.probe(),
            duty: pwm.probe(),
        };
        (MotorChannel::new(side, pin, pwm), probe)
    }

    pub(crate) fn read(&self) -> (Option<bool>, u16) {
        (self.level.get(), self.duty.get())
    }
}

/// One step of scripted serial input.
#[derive(Clone, Debug)]
pub(crate) enum Rx {
    Byte(u8),
    Fault,
    Gap,
}

/// Byte source replaying bursts separated by gaps.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    script: VecDeque<Rx>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue one burst, followed by a gap.
    pub(crate) fn burst(mut self, bytes: &[u8]) -> Self {
        self.script.extend(bytes.iter().copied().map(Rx::Byte));
        self.script.push_back(Rx::Gap);
        self
    }

    pub(crate) fn push(mut self, step: Rx) -> Self {
        self.script.push_back(step);
        self
    }

    pub(crate) fn is_drained(&self) -> bool {
        self.script.is_empty()
    }
}

impl ByteSource for ScriptedSource {
    type Error = ();

    fn read(&mut self) -> nb::Result<u8, ()> {
        match self.script.pop_front() {
            Some(Rx::Byte(b)) => Ok(b),
            Some(Rx::Fault) => Err(nb::Error::Other(())),
            Some(Rx::Gap) | None => Err(nb::Error::WouldBlock),
        }
    }
}

/// Delay that records requested pauses instead of sleeping.
#[derive(Default)]
pub(crate) struct RecordingDelay {
    pub(crate) pauses_ns: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_ns.push(ns);
    }
}
