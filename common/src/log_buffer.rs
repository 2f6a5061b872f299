//! Leveled log buffer for on-device log viewing.
//!
//! A fixed ring of log entries, each carrying a level, a truncated message and
//! the wall-clock second of day it was recorded at. The simulator shows the
//! buffer on its debug page with each line colored by level.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: Gray - per-tick detail
//! - `Info`: Green - normal operation
//! - `Warn`: Yellow - warnings
//! - `Error`: Red - errors
//!
//! # Usage
//!
//! ```ignore
//! use watchface_common::{log_debug, log_info};
//!
//! let mut log = LogBuffer::new();
//! log_info!(log, stamp, "Face loaded ({})", depth.label());
//! log_debug!(log, stamp, "Tick {:02}:{:02}:{:02}", h, m, s);
//! ```
//!
//! Formatting writes straight into the entry's fixed buffer; overlong
//! messages are cut at the buffer capacity.

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::colors::{DARK_GRAY, GRAY, GREEN, RED, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 14;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Seconds in one day; stamps wrap at midnight.
const SECONDS_PER_DAY: u32 = 86_400;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace = 0,
    /// Debug information (gray)
    Debug = 1,
    /// Normal operation (green)
    #[default]
    Info = 2,
    /// Warnings (yellow)
    Warn = 3,
    /// Errors (red)
    Error = 4,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => DARK_GRAY,
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and stamp.
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Wall-clock second of day (0..86400).
    pub stamp: u32,
}

impl LogEntry {
    /// Create a new entry from a plain message.
    pub fn new(
        level: LogLevel,
        message: &str,
        stamp: u32,
    ) -> Self {
        Self::from_args(level, format_args!("{message}"), stamp)
    }

    /// Create a new entry from formatting arguments.
    pub fn from_args(
        level: LogLevel,
        args: fmt::Arguments<'_>,
        stamp: u32,
    ) -> Self {
        let mut writer = Truncating::<LOG_MSG_LEN>::new();
        // Truncating never reports an error
        let _ = writer.write_fmt(args);
        Self {
            level,
            message: writer.into_inner(),
            stamp: stamp % SECONDS_PER_DAY,
        }
    }

    /// Stamp formatted as `HH:MM:SS`.
    pub fn stamp_text(&self) -> String<8> {
        let mut text = String::new();
        let _ = write!(
            text,
            "{:02}:{:02}:{:02}",
            self.stamp / 3600,
            (self.stamp / 60) % 60,
            self.stamp % 60
        );
        text
    }

    /// Message cut to at most `max_chars` characters, for narrow log views.
    pub fn visible_message(
        &self,
        max_chars: usize,
    ) -> &str {
        match self.message.char_indices().nth(max_chars) {
            Some((end, _)) => &self.message.as_str()[..end],
            None => self.message.as_str(),
        }
    }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    stamp: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Format and push an entry. Used by the `log_*!` macros.
    pub fn record(
        &mut self,
        level: LogLevel,
        stamp: u32,
        args: fmt::Arguments<'_>,
    ) {
        self.push(LogEntry::from_args(level, args, stamp));
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        if self.count == 0 {
            return None;
        }
        Some(&self.entries[(self.head + LOG_ENTRIES - 1) % LOG_ENTRIES])
    }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// `fmt::Write` adapter that keeps the first `N - 1` characters and drops the rest.
struct Truncating<const N: usize> {
    text: String<N>,
    chars: usize,
}

impl<const N: usize> Truncating<N> {
    const fn new() -> Self {
        Self {
            text: String::new(),
            chars: 0,
        }
    }

    fn into_inner(self) -> String<N> { self.text }
}

impl<const N: usize> Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.chars >= N - 1 {
                break;
            }
            if self.text.push(c).is_err() {
                break;
            }
            self.chars += 1;
        }
        Ok(())
    }
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $stamp:expr, $($arg:tt)*) => {
        $log.record($crate::log_buffer::LogLevel::Info, $stamp, format_args!($($arg)*))
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $stamp:expr, $($arg:tt)*) => {
        $log.record($crate::log_buffer::LogLevel::Warn, $stamp, format_args!($($arg)*))
    };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($log:expr, $stamp:expr, $($arg:tt)*) => {
        $log.record($crate::log_buffer::LogLevel::Error, $stamp, format_args!($($arg)*))
    };
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $stamp:expr, $($arg:tt)*) => {
        $log.record($crate::log_buffer::LogLevel::Debug, $stamp, format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_push() {
        let mut log = LogBuffer::new();
        assert!(log.is_empty());

        log.push(LogEntry::new(LogLevel::Info, "Face loaded", 0));
        assert_eq!(log.len(), 1);

        log.push(LogEntry::new(LogLevel::Debug, "Tick", 1));
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().map(|e| e.message.as_str()), Some("Tick"));
    }

    #[test]
    fn test_log_buffer_ring() {
        let mut log = LogBuffer::new();

        for i in 0..LOG_ENTRIES as u32 {
            log_info!(log, i, "Message {i}");
        }
        assert_eq!(log.len(), LOG_ENTRIES);

        // Push one more - should drop oldest
        log_warn!(log, 99, "New message");
        assert_eq!(log.len(), LOG_ENTRIES);

        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "Message 1");

        let last = log.iter().last().unwrap();
        assert_eq!(last.message.as_str(), "New message");
        assert_eq!(last.level, LogLevel::Warn);
    }

    #[test]
    fn test_log_iter_oldest_first_before_wrap() {
        let mut log = LogBuffer::new();
        log_info!(log, 0, "a");
        log_debug!(log, 0, "b");
        log_error!(log, 0, "c");
        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["a", "b", "c"]);
    }

    #[test]
    fn test_log_truncation() {
        let entry = LogEntry::new(
            LogLevel::Info,
            "This is a very long message that exceeds the maximum line length limit",
            0,
        );
        assert_eq!(entry.message.chars().count(), LOG_MSG_LEN - 1);
        assert!(entry.message.starts_with("This is a very long"));
    }

    #[test]
    fn test_log_truncation_with_format_args() {
        let mut log = LogBuffer::new();
        log_info!(log, 0, "{}-{}", "x".repeat(30), "y".repeat(30));
        let entry = log.latest().unwrap();
        assert_eq!(entry.message.chars().count(), LOG_MSG_LEN - 1);
        assert!(entry.message.contains('-'));
    }

    #[test]
    fn test_stamp_text() {
        let entry = LogEntry::new(LogLevel::Info, "x", 3 * 3600 + 15 * 60 + 30);
        assert_eq!(entry.stamp_text().as_str(), "03:15:30");

        // Stamps wrap at midnight
        let entry = LogEntry::new(LogLevel::Info, "x", 86_400 + 5);
        assert_eq!(entry.stamp_text().as_str(), "00:00:05");
    }

    #[test]
    fn test_visible_message_cuts_long_lines() {
        let entry = LogEntry::new(LogLevel::Info, "Face loaded (COLOR)", 0);
        assert_eq!(entry.visible_message(13), "Face loaded (");
        assert_eq!(entry.visible_message(40), "Face loaded (COLOR)", "short messages stay whole");
        assert_eq!(entry.visible_message(0), "");
    }

    #[test]
    fn test_visible_message_respects_char_boundaries() {
        let entry = LogEntry::new(LogLevel::Warn, "Temp 21\u{b0}C ok", 0);
        assert_eq!(entry.visible_message(8), "Temp 21\u{b0}");
    }

    #[test]
    fn test_level_prefix_and_color() {
        assert_eq!(LogLevel::Info.prefix(), 'I');
        assert_eq!(LogLevel::Error.prefix(), 'E');
        assert_eq!(LogLevel::Warn.color(), YELLOW);
        assert_eq!(LogLevel::Debug.color(), GRAY);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
