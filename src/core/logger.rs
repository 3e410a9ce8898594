//! Main logger implementation

use super::{
    callsite::{compile_time_path, resolve_caller, strip_file_prefix, UNKNOWN_FILE},
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_level::Level,
    message::{append_args, append_values, AppendFn, ExtraFn, Message},
    sink::Sink,
};
use crate::render::{write_binary, write_text, StackTrace};
use crate::sinks::{DiscardSink, Output};
use arc_swap::ArcSwapOption;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A leveled logger writing to one swappable sink.
///
/// The level and the file prefix are read without locking. Rendering holds
/// the sink mutex for the whole message, so concurrent messages never
/// interleave and a sink swap never lands in the middle of a message.
pub struct Logger {
    level: AtomicU8,
    sink: Mutex<Box<dyn Sink>>,
    file_prefix: ArcSwapOption<String>,
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $level:ident => $print:ident, $printf:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $print(&self, values: &[&dyn fmt::Display]) -> Result<()> {
                self.log(Level::$level, values)
            }

            $(#[$doc])*
            #[track_caller]
            pub fn $printf(&self, args: fmt::Arguments<'_>) -> Result<()> {
                self.logf(Level::$level, args)
            }
        )*
    };
}

impl Logger {
    /// A logger at [`Level::Info`] that discards everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: AtomicU8::new(Level::default() as u8),
            sink: Mutex::new(Box::new(DiscardSink)),
            file_prefix: ArcSwapOption::empty(),
        }
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8_clamped(self.level.load(Ordering::Relaxed))
    }

    /// Returns true if messages at `level` are currently emitted.
    #[inline]
    pub fn check_level(&self, level: Level) -> bool {
        level.enabled_at(self.level())
    }

    /// Build the sink for `output` and swap it in.
    ///
    /// On error the previous sink stays active.
    pub fn set_output(&self, output: Output) -> Result<()> {
        let sink = output.into_sink()?;
        self.set_sink(sink);
        Ok(())
    }

    /// Select an output by name; see [`Output::from_config`].
    pub fn set_output_config(&self, name: &str, arg: &str) -> Result<()> {
        self.set_output(Output::from_config(name, arg)?)
    }

    /// Install a custom sink.
    pub fn set_sink(&self, sink: Box<dyn Sink>) {
        let previous = {
            let mut current = self.sink.lock();
            std::mem::replace(&mut *current, sink)
        };
        // Flushing a replaced stream happens outside the lock.
        drop(previous);
    }

    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// Strip `prefix` from the start of every reported source path.
    pub fn set_file_prefix(&self, prefix: impl Into<String>) {
        self.file_prefix.store(Some(Arc::new(prefix.into())));
    }

    pub fn clear_file_prefix(&self) {
        self.file_prefix.store(None);
    }

    pub fn file_prefix(&self) -> Option<String> {
        self.file_prefix.load().as_deref().cloned()
    }

    /// Apply a declarative configuration.
    ///
    /// The output is built first; if that fails nothing changes.
    pub fn apply_config(&self, config: &LoggerConfig) -> Result<()> {
        let output = Output::from_config(&config.output, &config.target)?;
        let sink = output.into_sink()?;
        self.set_level(config.level);
        match &config.file_prefix {
            Some(prefix) => self.set_file_prefix(prefix.clone()),
            None => self.clear_file_prefix(),
        }
        self.set_sink(sink);
        Ok(())
    }

    /// Render one message if `level` is enabled.
    ///
    /// `location` of `None` reports the source as `???:0`.
    pub fn emit(
        &self,
        location: Option<&Location<'_>>,
        level: Level,
        append: AppendFn<'_>,
        extra: Option<ExtraFn<'_>>,
    ) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let timestamp = Local::now();
        match location {
            Some(location) => self.dispatch(
                timestamp,
                location.file(),
                location.line(),
                level,
                append,
                extra,
            ),
            None => self.dispatch(timestamp, UNKNOWN_FILE, 0, level, append, extra),
        }
    }

    /// Render without checking the level.
    fn dispatch(
        &self,
        timestamp: DateTime<Local>,
        file: &str,
        line: u32,
        level: Level,
        append: AppendFn<'_>,
        extra: Option<ExtraFn<'_>>,
    ) -> Result<()> {
        let prefix = self.file_prefix.load();
        let file = strip_file_prefix(file, prefix.as_deref().map(String::as_str));

        let mut sink = self.sink.lock();
        let message = Message::new(timestamp, level, file, line, append, extra);
        sink.render(&message)
    }

    #[inline]
    fn dispatch_at(
        &self,
        location: &Location<'_>,
        level: Level,
        append: AppendFn<'_>,
        extra: Option<ExtraFn<'_>>,
    ) -> Result<()> {
        self.dispatch(
            Local::now(),
            location.file(),
            location.line(),
            level,
            append,
            extra,
        )
    }

    /// Low-level output with the source `calldepth` frames above the caller.
    ///
    /// `calldepth` 0 reports the function calling `output`. The location comes
    /// from a stack walk and reads `???:0` when the stack cannot be resolved.
    /// Paths take the same form as those of the `#[track_caller]` methods.
    #[track_caller]
    #[inline(never)]
    pub fn output(
        &self,
        calldepth: usize,
        level: Level,
        extra: Option<ExtraFn<'_>>,
        values: &[&dyn fmt::Display],
    ) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let timestamp = Local::now();
        let anchor = Location::caller();
        let caller = resolve_caller(calldepth + 1)
            .map(|(file, line)| (compile_time_path(file, anchor), line));
        let (file, line) = caller
            .as_ref()
            .map_or((UNKNOWN_FILE, 0), |(file, line)| (file.as_str(), *line));
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        self.dispatch(timestamp, file, line, level, &append, extra)
    }

    /// Formatted flavour of [`Logger::output`].
    #[track_caller]
    #[inline(never)]
    pub fn outputf(
        &self,
        calldepth: usize,
        level: Level,
        extra: Option<ExtraFn<'_>>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let timestamp = Local::now();
        let anchor = Location::caller();
        let caller = resolve_caller(calldepth + 1)
            .map(|(file, line)| (compile_time_path(file, anchor), line));
        let (file, line) = caller
            .as_ref()
            .map_or((UNKNOWN_FILE, 0), |(file, line)| (file.as_str(), *line));
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        self.dispatch(timestamp, file, line, level, &append, extra)
    }

    /// Log `values` joined by spaces.
    #[track_caller]
    pub fn log(&self, level: Level, values: &[&dyn fmt::Display]) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        self.dispatch_at(Location::caller(), level, &append, None)
    }

    /// Log preformatted arguments. Nothing is formatted unless `level` is
    /// enabled.
    #[track_caller]
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        self.dispatch_at(Location::caller(), level, &append, None)
    }

    level_methods! {
        /// Serious problems that are likely to cause the program to exit.
        Fatal => fatal, fatalf;
        /// Issues that shouldn't be ignored.
        Error => error, errorf;
        /// Issues that may be ignored.
        Warning => warning, warningf;
        /// Important status changes.
        Notice => notice, noticef;
        /// Normal work reports.
        Info => info, infof;
        /// Extra information for debugging.
        Debug => debug, debugf;
        /// Details for inspecting specific issues.
        Verbose => verbose, verbosef;
        /// More details that may significantly impact performance.
        VeryVerbose => very_verbose, very_verbosef;
    }

    /// Debug-build-only message printed regardless of the level.
    #[track_caller]
    pub fn temporary(&self, values: &[&dyn fmt::Display]) -> Result<()> {
        if !cfg!(debug_assertions) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        self.dispatch_at(Location::caller(), Level::Silence, &append, None)
    }

    #[track_caller]
    pub fn temporaryf(&self, args: fmt::Arguments<'_>) -> Result<()> {
        if !cfg!(debug_assertions) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        self.dispatch_at(Location::caller(), Level::Silence, &append, None)
    }

    /// Log `txt` as a numbered, hard-wrapped block below the message.
    #[track_caller]
    pub fn text(&self, level: Level, txt: &str, values: &[&dyn fmt::Display]) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        let extra = |w: &mut dyn Write| write_text(w, txt);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    #[track_caller]
    pub fn textf(&self, level: Level, txt: &str, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        let extra = |w: &mut dyn Write| write_text(w, txt);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    /// Log `bin` as a hex dump below the message.
    #[track_caller]
    pub fn binary(&self, level: Level, bin: &[u8], values: &[&dyn fmt::Display]) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        let extra = |w: &mut dyn Write| write_binary(w, bin);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    #[track_caller]
    pub fn binaryf(&self, level: Level, bin: &[u8], args: fmt::Arguments<'_>) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        let extra = |w: &mut dyn Write| write_binary(w, bin);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    /// Log the current stack below the message, starting `calldepth` frames
    /// above the caller.
    #[track_caller]
    #[inline(never)]
    pub fn stack(&self, level: Level, calldepth: usize, values: &[&dyn fmt::Display]) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let trace = StackTrace::capture(calldepth + 1);
        let append = |buf: &mut Vec<u8>| append_values(buf, values);
        let extra = |w: &mut dyn Write| trace.write_to(w);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    #[track_caller]
    #[inline(never)]
    pub fn stackf(&self, level: Level, calldepth: usize, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.check_level(level) {
            return Ok(());
        }
        let trace = StackTrace::capture(calldepth + 1);
        let append = |buf: &mut Vec<u8>| append_args(buf, args);
        let extra = |w: &mut dyn Write| trace.write_to(w);
        self.dispatch_at(Location::caller(), level, &append, Some(&extra))
    }

    /// Assert `cond`. On failure the message is logged at [`Level::Fatal`]
    /// whatever the threshold, then the thread panics with it.
    #[track_caller]
    pub fn check(&self, cond: bool, values: &[&dyn fmt::Display]) {
        if cond {
            return;
        }
        let mut buf = Vec::new();
        append_values(&mut buf, values);
        self.check_failed(Location::caller(), &String::from_utf8_lossy(&buf))
    }

    #[track_caller]
    pub fn checkf(&self, cond: bool, args: fmt::Arguments<'_>) {
        if cond {
            return;
        }
        self.check_failed(Location::caller(), &args.to_string())
    }

    fn check_failed(&self, location: &Location<'_>, text: &str) -> ! {
        let append = |buf: &mut Vec<u8>| buf.extend_from_slice(text.as_bytes());
        // The panic below reports the failure even if the sink could not.
        let _ = self.dispatch_at(location, Level::Fatal, &append, None);
        panic!("{}", text)
    }

    /// An [`io::Write`] adapter logging each written line at `level`.
    ///
    /// Messages report the location where the writer was created.
    #[track_caller]
    pub fn writer(&self, level: Level) -> LogWriter<'_> {
        LogWriter {
            logger: self,
            level,
            location: Location::caller(),
            pending: Vec::new(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sink", &self.sink_name())
            .field("file_prefix", &self.file_prefix())
            .finish()
    }
}

/// Line-buffering [`io::Write`] adapter created by [`Logger::writer`].
///
/// Every complete line becomes one message; a trailing partial line is
/// emitted on [`flush`](Write::flush) or drop.
pub struct LogWriter<'a> {
    logger: &'a Logger,
    level: Level,
    location: &'static Location<'static>,
    pending: Vec<u8>,
}

impl LogWriter<'_> {
    fn emit_line(&self, line: &[u8]) -> io::Result<()> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let append = |buf: &mut Vec<u8>| buf.extend_from_slice(line);
        self.logger
            .emit(Some(self.location), self.level, &append, None)
            .map_err(into_io_error)
    }
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            self.emit_line(&line[..end])?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let line = std::mem::take(&mut self.pending);
        self.emit_line(&line)
    }
}

impl Drop for LogWriter<'_> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn into_io_error(err: LoggerError) -> io::Error {
    match err {
        LoggerError::IoError(err) => err,
        other => io::Error::other(other),
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use rust_slog::{Level, Logger, Output};
///
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .output(Output::text(std::io::sink()))
///     .file_prefix("/build/src/")
///     .build()
///     .unwrap();
/// assert_eq!(logger.level(), Level::Debug);
/// ```
#[derive(Debug, Default)]
pub struct LoggerBuilder {
    level: Level,
    output: Option<Output>,
    file_prefix: Option<String>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    #[must_use]
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = Some(prefix.into());
        self
    }

    /// Build the logger, connecting its sink.
    pub fn build(self) -> Result<Logger> {
        let logger = Logger::new();
        logger.set_level(self.level);
        if let Some(prefix) = self.file_prefix {
            logger.set_file_prefix(prefix);
        }
        if let Some(output) = self.output {
            logger.set_output(output)?;
        }
        Ok(logger)
    }
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::SharedBuffer;
    use std::sync::atomic::AtomicUsize;

    fn text_logger(level: Level) -> (Logger, SharedBuffer) {
        let out = SharedBuffer::new();
        let logger = Logger::new();
        logger.set_level(level);
        logger.set_output(Output::text(out.clone())).unwrap();
        (logger, out)
    }

    struct Counted<'a>(&'a AtomicUsize);

    impl fmt::Display for Counted<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    #[test]
    fn test_default_logger_discards() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.sink_name(), "discard");
        logger.error(&[&"dropped"]).unwrap();
    }

    #[test]
    fn test_threshold_scenario() {
        let (logger, out) = text_logger(Level::Warning);
        logger.info(&[&"x"]).unwrap();
        assert_eq!(out.contents(), "");

        logger.error(&[&"y"]).unwrap();
        let text = out.contents();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("E "));
        assert!(text.ends_with(" y\n"));
    }

    #[test]
    fn test_suppressed_messages_are_never_formatted() {
        let (logger, _out) = text_logger(Level::Warning);
        let calls = AtomicUsize::new(0);

        logger.debugf(format_args!("{}", Counted(&calls))).unwrap();
        logger.debug(&[&Counted(&calls)]).unwrap();
        logger.text(Level::Info, "block", &[&Counted(&calls)]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.warningf(format_args!("{}", Counted(&calls))).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reported_location_is_call_site() {
        let (logger, out) = text_logger(Level::Info);
        let line = line!() + 1;
        logger.infof(format_args!("here")).unwrap();
        assert!(out.contents().contains(&format!("{}:{} here", file!(), line)));
    }

    #[test]
    fn test_file_prefix_copy_on_write() {
        let (logger, out) = text_logger(Level::Info);
        let dir = file!().rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        logger.set_file_prefix(format!("{}/", dir));
        logger.info(&[&"short"]).unwrap();
        assert!(out.contents().contains(" logger.rs:"));

        logger.clear_file_prefix();
        logger.info(&[&"long"]).unwrap();
        assert!(out.contents().contains(file!()));
    }

    #[test]
    fn test_emit_without_location() {
        let (logger, out) = text_logger(Level::Info);
        let append = |buf: &mut Vec<u8>| buf.extend_from_slice(b"anon");
        logger.emit(None, Level::Info, &append, None).unwrap();
        assert!(out.contents().ends_with(" ???:0 anon\n"));
    }

    #[inline(never)]
    fn output_one_up(logger: &Logger, what: &str) {
        logger.output(1, Level::Info, None, &[&what]).unwrap();
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_output_calldepth_lands_on_call_site() {
        let (logger, out) = text_logger(Level::Info);
        let direct = line!() + 1;
        logger.output(0, Level::Info, None, &[&"direct"]).unwrap();
        let wrapped = line!() + 1;
        output_one_up(&logger, "wrapped");

        let text = out.contents();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].ends_with(&format!(" {}:{} direct", file!(), direct)), "{:?}", lines[0]);
        assert!(lines[1].ends_with(&format!(" {}:{} wrapped", file!(), wrapped)), "{:?}", lines[1]);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_one_prefix_strips_both_location_sources() {
        let (logger, out) = text_logger(Level::Info);
        logger.set_file_prefix("src/");
        logger.info(&[&"tracked"]).unwrap();
        logger.outputf(0, Level::Info, None, format_args!("walked")).unwrap();

        let text = out.contents();
        for line in text.lines() {
            assert!(line.contains(" core/logger.rs:"), "{:?}", line);
        }
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_output_degrades_past_the_stack() {
        let (logger, out) = text_logger(Level::Info);
        logger.output(100_000, Level::Info, None, &[&"low", &"level"]).unwrap();
        assert!(out.contents().ends_with(" ???:0 low level\n"));
    }

    #[test]
    fn test_failed_output_keeps_previous_sink() {
        let (logger, out) = text_logger(Level::Info);
        let dir = tempfile::TempDir::new().unwrap();
        let result = logger.set_output(Output::Syslog {
            tag: "app".to_string(),
            path: Some(dir.path().join("missing.sock")),
        });
        assert!(result.is_err());
        assert_eq!(logger.sink_name(), "text");
        logger.info(&[&"still here"]).unwrap();
        assert!(out.contents().contains("still here"));
    }

    #[test]
    fn test_text_and_binary_payloads() {
        let (logger, out) = text_logger(Level::Debug);
        logger.textf(Level::Debug, "one\ntwo", format_args!("config")).unwrap();
        logger.binary(Level::Debug, b"Hello", &[&"packet"]).unwrap();

        let text = out.contents();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].ends_with(" config"));
        assert_eq!(lines[1], "     1 one");
        assert_eq!(lines[2], "     2 two");
        assert!(lines[3].ends_with(" packet"));
        assert!(lines[4].starts_with("  00000000: 48 65 6C 6C 6F "));
    }

    #[test]
    fn test_stack_payload() {
        let (logger, out) = text_logger(Level::Debug);
        logger.stackf(Level::Debug, 0, format_args!("trace")).unwrap();
        let text = out.contents();
        assert!(text.lines().next().unwrap().ends_with(" trace"));
    }

    #[test]
    fn test_temporary_ignores_threshold() {
        let (logger, out) = text_logger(Level::Silence);
        logger.fatal(&[&"hidden"]).unwrap();
        logger.temporary(&[&"scaffolding"]).unwrap();
        if cfg!(debug_assertions) {
            assert!(out.contents().starts_with("- "));
            assert!(!out.contents().contains("hidden"));
        } else {
            assert_eq!(out.contents(), "");
        }
    }

    #[test]
    fn test_check_logs_then_panics() {
        let (logger, out) = text_logger(Level::Silence);
        logger.check(true, &[&"fine"]);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.checkf(false, format_args!("invariant {} broken", 7));
        }));
        assert!(result.is_err());
        let text = out.contents();
        assert!(text.starts_with("F "));
        assert!(text.ends_with(" invariant 7 broken\n"));
    }

    #[test]
    fn test_log_writer_splits_lines() {
        let (logger, out) = text_logger(Level::Info);
        {
            let mut writer = logger.writer(Level::Notice);
            write!(writer, "first {}\nsec", 1).unwrap();
            writer.write_all(b"ond\r\npartial").unwrap();
        }
        let text = out.contents();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" first 1"));
        assert!(lines[1].ends_with(" second"));
        assert!(lines[2].ends_with(" partial"));
        assert!(lines.iter().all(|l| l.starts_with("I ")));
    }

    #[test]
    fn test_apply_config_validates_before_changing() {
        let (logger, _out) = text_logger(Level::Info);
        let config = LoggerConfig {
            level: Level::Debug,
            output: "carrier-pigeon".to_string(),
            ..LoggerConfig::default()
        };
        assert!(logger.apply_config(&config).is_err());
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.sink_name(), "text");

        let config = LoggerConfig {
            level: Level::Debug,
            output: "discard".to_string(),
            file_prefix: Some("/src/".to_string()),
            ..LoggerConfig::default()
        };
        logger.apply_config(&config).unwrap();
        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(logger.sink_name(), "discard");
        assert_eq!(logger.file_prefix().as_deref(), Some("/src/"));
    }

    #[test]
    fn test_builder() {
        let out = SharedBuffer::new();
        let logger = Logger::builder()
            .level(Level::Verbose)
            .output(Output::terminal(out.clone()))
            .build()
            .unwrap();
        assert_eq!(logger.level(), Level::Verbose);
        logger.verbosef(format_args!("v")).unwrap();
        assert!(out.contents().starts_with("\x1b[36mV "));
    }
}
