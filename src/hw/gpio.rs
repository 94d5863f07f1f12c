// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Push-pull output line exposed through `embedded_hal::digital::OutputPin`.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::gpio::{self, Output, PinState, PushPull};

/// Push-pull GPIO output, generic over any pin.
pub struct OutputLine<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> OutputLine<P, N> {
    /// Wrap a push-pull output, driving it low.
    pub fn new(mut pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        pin.set_state(PinState::Low);
        Self { pin }
    }
}

impl<const P: char, const N: u8> ErrorType for OutputLine<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for OutputLine<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}
