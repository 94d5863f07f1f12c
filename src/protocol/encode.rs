// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sender-side frame encoding, for host tools and tests.

use core::fmt::{self, Write};

use heapless::String;

use crate::protocol::frame::FRAME_CAPACITY;
use crate::protocol::messages::{Command, SENTINEL};

impl Command {
    /// Write this command in wire format.
    ///
    /// A stop is always the bare sentinel `%`; a speed attached to it is not sent.
    pub fn encode<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char(SENTINEL as char)?;
        let Some(symbol) = self.action.symbol() else {
            return Ok(());
        };
        if let Some(speed) = self.speed {
            write!(out, "{speed}")?;
        }
        out.write_char(symbol as char)
    }

    /// Encode into a fixed-capacity string.
    pub fn to_frame(&self) -> String<FRAME_CAPACITY> {
        let mut frame = String::new();
        // Longest encoding is 7 bytes.
        let _ = self.encode(&mut frame);
        frame
    }
}
