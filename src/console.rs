// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial console diagnostics.
//!
//! Writes to anything implementing `core::fmt::Write` (the firmware's `Usart`, or a `String` in
//! tests). Lines end in CRLF for terminal compatibility.

use core::fmt::{self, Write};

/// Echo a received frame. Non-printable bytes are shown as `\xNN`.
pub fn echo_frame<W: Write>(out: &mut W, frame: &[u8]) -> fmt::Result {
    for &b in frame {
        if b.is_ascii_graphic() || b == b' ' {
            out.write_char(b as char)?;
        } else {
            write!(out, "\\x{b:02X}")?;
        }
    }
    out.write_str("\r\n")
}

/// Report the target speed after a `+`/`-` frame.
pub fn speed_notice<W: Write>(out: &mut W, speed: u16) -> fmt::Result {
    write!(out, "Speed updated to: {speed}\r\n")
}

/// Console that discards everything.
pub struct Sink;

impl Write for Sink {
    #[inline]
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}
