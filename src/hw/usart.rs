// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! Splits the serial port wired to the Bluetooth module. The RX half feeds the frame accumulator
//! through [`ByteSource`]; [`Usart`] keeps the TX half and carries the console diagnostics back to
//! the sender.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::{_embedded_hal_serial_Read as SerialRead, *},
    serial::{self, Instance, Pins, Rx, Serial, Tx},
};

use crate::protocol::ByteSource;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    /// Split the port into the console writer and the receive half.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> (Self, Rx<U>) {
        let (tx, rx) = serial.split();
        (Self { tx }, rx)
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }
}

impl<U: Instance> ByteSource for Rx<U> {
    type Error = serial::Error;

    #[inline]
    fn read(&mut self) -> nb::Result<u8, serial::Error> {
        SerialRead::read(self)
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
