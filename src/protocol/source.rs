// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Non-blocking byte source feeding the frame accumulator.

/// A serial receiver polled one byte at a time.
///
/// `Err(nb::Error::WouldBlock)` means no further data is immediately available, which is what
/// delimits a frame.
pub trait ByteSource {
    type Error;

    fn read(&mut self) -> nb::Result<u8, Self::Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    type Error = S::Error;

    #[inline]
    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        (**self).read()
    }
}
