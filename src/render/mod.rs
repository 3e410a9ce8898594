//! Extra payload renderers
//!
//! Each renderer writes straight to the sink's stream through a small
//! staging buffer, so large payloads are never materialized as one string.

pub mod hexdump;
pub mod stacktrace;
pub mod wrap;

pub use hexdump::{write_binary, BYTES_PER_ROW};
pub use stacktrace::{write_frames, FrameInfo, StackTrace, STACK_MAX_DEPTH};
pub use wrap::{write_text, HARD_WRAP, TAB_WIDTH};

pub(crate) const INDENT: &str = "  ";
pub(crate) const STAGING_SIZE: usize = 256;
pub(crate) const STAGING_SLACK: usize = 16;
