//! Caller location resolution
//!
//! Most emission paths get their location for free through `#[track_caller]`.
//! The numeric `calldepth` paths walk the stack instead: the walk first looks
//! for the frame of a known marker function, then counts frames above it.
//! When the marker is not found (inlined, no unwind info) resolution fails and
//! callers fall back to [`UNKNOWN_FILE`] and line `0`.
//!
//! Debug info records absolute paths while `file!()` paths are relative to the
//! directory the compiler ran in. Resolved paths are rewritten into the
//! `file!()` form so one file prefix strips both.

use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

/// File reported when the caller cannot be resolved
pub const UNKNOWN_FILE: &str = "???";

/// Visit frames starting `skip` frames above the caller of `marker`.
///
/// `marker` is the address of the function whose frame anchors the walk.
/// `visit` returns `false` to stop.
pub(crate) fn frames_above(
    marker: usize,
    skip: usize,
    mut visit: impl FnMut(&backtrace::Frame) -> bool,
) {
    let mut anchored = false;
    let mut remaining = skip;
    backtrace::trace(|frame| {
        if !anchored {
            anchored = frame.symbol_address() as usize == marker;
            return true;
        }
        if remaining > 0 {
            remaining -= 1;
            return true;
        }
        visit(frame)
    });
}

/// Resolve the file and line `skip` frames above the caller of this function.
#[inline(never)]
pub(crate) fn resolve_caller(skip: usize) -> Option<(String, u32)> {
    let mut target = None;
    frames_above(resolve_caller as *const () as usize, skip, |frame| {
        target = Some(frame.clone());
        false
    });
    let frame = target?;

    let mut resolved = None;
    backtrace::resolve_frame(&frame, |symbol| {
        if resolved.is_some() {
            return;
        }
        if let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) {
            resolved = Some((file.display().to_string(), line));
        }
    });
    resolved
}

static BUILD_ROOT: OnceLock<Option<String>> = OnceLock::new();

/// Directory prepended by debug info to this build's `file!()` paths,
/// found by resolving a frame of this module.
fn build_root() -> Option<&'static str> {
    BUILD_ROOT
        .get_or_init(|| {
            let (resolved, _) = own_location()?;
            root_of(&resolved, file!())
        })
        .as_deref()
}

#[inline(never)]
fn own_location() -> Option<(String, u32)> {
    resolve_caller(0)
}

/// The directory part of `resolved` in front of the relative path `known`.
fn root_of(resolved: &str, known: &str) -> Option<String> {
    if Path::new(known).is_absolute() {
        return None;
    }
    resolved
        .strip_suffix(known)
        .filter(|root| root.ends_with(['/', '\\']))
        .map(str::to_string)
}

/// Rewrite a path resolved from debug info into the form `file!()` gives.
///
/// `anchor` is a `#[track_caller]` location near the resolved frame; it covers
/// crates built under another root than this one when both name the same file.
pub(crate) fn compile_time_path(resolved: String, anchor: &Location<'_>) -> String {
    if let Some(rest) = build_root().and_then(|root| resolved.strip_prefix(root)) {
        return rest.to_string();
    }
    match root_of(&resolved, anchor.file()) {
        Some(_) => anchor.file().to_string(),
        None => resolved,
    }
}

/// Strip `prefix` from `file` by literal match.
#[inline]
pub fn strip_file_prefix<'a>(file: &'a str, prefix: Option<&str>) -> &'a str {
    prefix
        .and_then(|prefix| file.strip_prefix(prefix))
        .unwrap_or(file)
}
