// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod encode;
pub mod frame;
pub mod messages;
pub mod parser;
pub mod source;

pub use frame::{FrameAccumulator, FRAME_CAPACITY};
pub use messages::{clamp_speed, Action, Command, SENTINEL};
pub use parser::{parse, ParseError};
pub use source::ByteSource;
