// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Gap-delimited frame accumulator.
//!
//! The link has no terminator byte. A frame is whatever arrived before the byte source ran dry,
//! so the caller reports the end of each burst with [`FrameAccumulator::end_of_burst`]. Bursty
//! senders can therefore get one command split into two frames; the sender is expected to pace
//! its writes.

use heapless::Vec;

/// Default command buffer capacity. The longest valid frame is `%65535W`.
pub const FRAME_CAPACITY: usize = 32;

pub struct FrameAccumulator<const N: usize = FRAME_CAPACITY> {
    buf: Vec<u8, N>,
    /// Source reported no more data since the last byte.
    idle: bool,
    /// More than `N` bytes arrived; the tail was dropped.
    overflowed: bool,
    /// The source reported a receive error while this frame was assembling.
    corrupted: bool,
}

impl<const N: usize> FrameAccumulator<N> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            idle: true,
            overflowed: false,
            corrupted: false,
        }
    }

    /// Append one byte to the frame being assembled.
    pub fn feed(&mut self, byte: u8) {
        self.idle = false;
        if self.buf.push(byte).is_err() {
            self.overflowed = true;
        }
    }

    /// Record a receive error for the frame being assembled.
    pub fn mark_corrupted(&mut self) {
        self.idle = false;
        self.corrupted = true;
    }

    /// The byte source has no further data immediately available.
    #[inline]
    pub fn end_of_burst(&mut self) {
        self.idle = true;
    }

    /// A frame is ready once the source went quiet with something buffered.
    #[inline]
    pub fn is_frame_ready(&self) -> bool {
        self.idle && (!self.buf.is_empty() || self.corrupted)
    }

    /// Clear the buffer for the next frame. Keeps the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.idle = true;
        self.overflowed = false;
        self.corrupted = false;
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    #[inline]
    pub fn is_corrupted(&self) -> bool {
        self.corrupted
    }
}

impl<const N: usize> Default for FrameAccumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all<const N: usize>(acc: &mut FrameAccumulator<N>, bytes: &[u8]) {
        for &b in bytes {
            acc.feed(b);
        }
    }

    #[test]
    fn not_ready_while_bytes_are_arriving() {
        let mut acc: FrameAccumulator = FrameAccumulator::new();
        feed_all(&mut acc, b"%75");
        assert!(!acc.is_frame_ready());

        acc.end_of_burst();
        assert!(acc.is_frame_ready());
        assert_eq!(acc.as_bytes(), b"%75");
    }

    #[test]
    fn quiet_empty_buffer_is_not_a_frame() {
        let mut acc: FrameAccumulator = FrameAccumulator::new();
        acc.end_of_burst();
        assert!(!acc.is_frame_ready());
    }

    #[test]
    fn reset_clears_bytes_and_flags() {
        let mut acc: FrameAccumulator<4> = FrameAccumulator::new();
        feed_all(&mut acc, b"%100W");
        acc.mark_corrupted();
        acc.end_of_burst();
        assert!(acc.is_overflowed());
        assert!(acc.is_corrupted());

        acc.reset();
        assert!(acc.is_empty());
        assert!(!acc.is_overflowed());
        assert!(!acc.is_corrupted());
        assert!(!acc.is_frame_ready());
    }

    #[test]
    fn overflow_keeps_the_head_of_the_frame() {
        let mut acc: FrameAccumulator<4> = FrameAccumulator::new();
        feed_all(&mut acc, b"%1234W");
        assert_eq!(acc.as_bytes(), b"%123");
        assert_eq!(acc.len(), 4);
        assert!(acc.is_overflowed());
    }

    #[test]
    fn receive_error_alone_still_yields_a_frame() {
        let mut acc: FrameAccumulator = FrameAccumulator::new();
        acc.mark_corrupted();
        assert!(!acc.is_frame_ready());
        acc.end_of_burst();
        assert!(acc.is_frame_ready());
    }
}
