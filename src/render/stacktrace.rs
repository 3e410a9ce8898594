//! Stack trace capture and rendering

use super::INDENT;
use crate::core::callsite::frames_above;
use std::io::{self, Write};

/// Maximum number of frames captured
pub const STACK_MAX_DEPTH: usize = 256;

/// Unresolved program counters captured at a log call.
///
/// Capturing is cheap; symbol resolution happens in [`StackTrace::write_to`],
/// which only runs once the message has been admitted and a sink is rendering.
#[derive(Debug, Clone, Default)]
pub struct StackTrace {
    frames: Vec<backtrace::Frame>,
}

impl StackTrace {
    /// Capture the stack starting `skip` frames above the caller of `capture`.
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let mut frames = Vec::new();
        frames_above(Self::capture as *const () as usize, skip, |frame| {
            // The outermost frame reported by some unwinders has no pc.
            if frame.ip().is_null() {
                return true;
            }
            frames.push(frame.clone());
            frames.len() < STACK_MAX_DEPTH
        });
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Resolve every frame. Inlined calls expand to several entries sharing
    /// the physical frame's entry address.
    pub fn resolve(&self) -> Vec<FrameInfo> {
        let mut resolved = Vec::with_capacity(self.frames.len());
        for frame in &self.frames {
            let pc = frame.ip() as usize;
            let entry = frame.symbol_address() as usize;
            let before = resolved.len();
            backtrace::resolve_frame(frame, |symbol| {
                resolved.push(FrameInfo {
                    pc,
                    entry,
                    function: symbol.name().map(|name| name.to_string()),
                    file: symbol.filename().map(|path| path.display().to_string()),
                    line: symbol.lineno(),
                });
            });
            if resolved.len() == before {
                resolved.push(FrameInfo {
                    pc,
                    entry,
                    ..FrameInfo::default()
                });
            }
        }
        resolved
    }

    pub fn write_to(&self, w: &mut dyn Write) -> io::Result<()> {
        write_frames(w, self.resolve())
    }
}

/// One resolved stack entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInfo {
    pub pc: usize,
    /// Start address of the enclosing function, 0 when unknown
    pub entry: usize,
    pub function: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

/// Write numbered frames, one per line.
///
/// Consecutive entries with the same function entry address share one index,
/// which folds inlined calls into the physical frame that contains them.
pub fn write_frames(
    w: &mut dyn Write,
    frames: impl IntoIterator<Item = FrameInfo>,
) -> io::Result<()> {
    let mut last_entry = 0usize;
    let mut index = 1usize;
    for frame in frames {
        if frame.entry != 0 && frame.entry != last_entry {
            if last_entry != 0 {
                index += 1;
            }
            last_entry = frame.entry;
        }
        match (&frame.function, &frame.file) {
            (Some(function), Some(file)) => writeln!(
                w,
                "{INDENT}#{index:<3} {:#x} in {function} ({file}:{})",
                frame.pc,
                frame.line.unwrap_or(0)
            )?,
            (Some(function), None) => writeln!(
                w,
                "{INDENT}#{index:<3} {:#x} {function}+{:#x}",
                frame.pc,
                frame.pc.saturating_sub(frame.entry)
            )?,
            _ => writeln!(w, "{INDENT}#{index:<3} {:#x} <unknown>", frame.pc)?,
        }
    }
    Ok(())
}
