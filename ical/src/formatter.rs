// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module provides functionality to format iCalendar data structures
//! to the RFC 5545 text format, writing to any `std::io::Write` implementer.
//!
//! Content lines are folded at the configured octet limit (75 by default)
//! with a CRLF plus one whitespace character. A fold never lands inside a
//! multi-byte UTF-8 sequence; it may land between the two characters of a
//! text escape sequence, which RFC 5545 permits.

mod component;
mod property;
mod value;

use std::io::{self, Write};

use crate::formatter::component::write_calendar;
use crate::semantic::Calendar;

/// Convenience function to format a `Calendar` to a `String` (uses default options).
///
/// # Example
///
/// ```
/// use termcal_ical::{Calendar, format};
///
/// let calendar = Calendar {
///     prod_id: "-//termcal//termcal//EN".into(),
///     name: Some("Workday Schedule".into()),
///     timezone: None,
///     events: Vec::new(),
/// };
/// let ics = format(&calendar)?;
/// assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(calendar: &Calendar) -> io::Result<String> {
    FormatOptions::default().write_to_string(calendar)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Convenience method to write a `Calendar` to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, calendar: &Calendar, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        write_calendar(&mut formatter, calendar)?;
        Ok(())
    }

    /// Convenience method to write a `Calendar` to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, calendar: &Calendar) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// iCalendar formatter that writes to any `Write` implementer.
///
/// The formatter itself implements [`Write`]; bytes written through it are
/// folded into physical lines, and [`Formatter::writeln`] terminates the
/// current logical line.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Get a mutable reference to the underlying writer.
    #[must_use]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Get a reference to the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a `Calendar` to the underlying writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&mut self, calendar: &Calendar) -> io::Result<()> {
        write_calendar(self, calendar)
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        write!(self.writer, "\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    /// Insert line folding: CRLF + whitespace.
    ///
    /// This inserts the RFC 5545 line folding sequence and updates the
    /// line length counter (the whitespace after CRLF counts as 1 byte).
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        #[expect(clippy::indexing_slicing)]
        while !remaining.is_empty() {
            // Fold when the current line has no room left
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len.saturating_sub(self.line_length);
            let bytes_to_write = available.min(remaining.len());

            // Scan for UTF-8 continuation bytes to avoid breaking multi-byte sequences
            let bytes_to_write = find_safe_write_length(remaining, bytes_to_write);
            if bytes_to_write == 0 {
                // A multi-byte character straddles the limit, fold first
                self.insert_fold()?;
                continue;
            }

            let written = self.writer.write(&remaining[..bytes_to_write])?;
            self.line_length += written;
            remaining = &remaining[written..];
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
///
/// UTF-8 encoding:
/// - 0xxxxxxx: 1 byte (ASCII)
/// - 110xxxxx: 2 bytes
/// - 1110xxxx: 3 bytes
/// - 11110xxx: 4 bytes
/// - 10xxxxxx: continuation byte (not a start byte)
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    // Back off while the boundary byte is a continuation byte (10xxxxxx)
    let mut pos = max_bytes;
    #[expect(clippy::indexing_slicing)]
    while pos > 0 && (buf[pos] & 0xC0) == 0x80 {
        pos -= 1;
    }

    // A UTF-8 sequence has at most 3 continuation bytes; never back off further
    pos.max(max_bytes.saturating_sub(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_line(options: FormatOptions, line: &str) -> String {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, options);
        write!(f, "{line}").unwrap();
        f.writeln().unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_folds_long_line_at_limit() {
        let line = "X".repeat(100);
        let out = write_line(FormatOptions::default(), &line);

        let physical: Vec<&str> = out.split("\r\n").collect();
        assert_eq!(physical.len(), 3); // two lines plus trailing empty piece
        assert_eq!(physical[0].len(), 75);
        assert!(physical[1].starts_with(' '));
        assert!(physical[1].len() <= 75);
        assert_eq!(physical[2], "");
    }

    #[test]
    fn test_short_line_not_folded() {
        let out = write_line(FormatOptions::default(), "SUMMARY:short");
        assert_eq!(out, "SUMMARY:short\r\n");
    }

    #[test]
    fn test_folding_disabled() {
        let options = FormatOptions::default().folding(None);
        let line = "X".repeat(200);
        let out = write_line(options, &line);
        assert_eq!(out, format!("{line}\r\n"));
    }

    #[test]
    fn test_fold_with_tab_style() {
        let options = FormatOptions::default().folding_style(FoldingStyle::Tab);
        let line = "X".repeat(80);
        let out = write_line(options, &line);
        assert!(out.contains("\r\n\t"));
    }

    #[test]
    fn test_fold_never_splits_multibyte() {
        // Mixed ASCII and multi-byte content long enough to fold several times
        let line = "SUMMARY:".to_string() + &"日本語テキスト".repeat(10);
        let out = write_line(FormatOptions::default(), &line);

        // write_line already round-trips through String::from_utf8, which
        // fails if a fold lands inside a character
        for physical in out.split("\r\n") {
            assert!(physical.len() <= 75, "physical line too long: {physical:?}");
        }

        // Unfolding (strip CRLF + one whitespace) restores the logical line
        let unfolded = out.replace("\r\n ", "");
        assert_eq!(unfolded, format!("{line}\r\n"));
    }

    #[test]
    fn test_fold_boundary_multibyte_char() {
        // 74 ASCII bytes then a two-byte character: it cannot fit in the
        // one remaining octet, so the fold must come before it
        let line = format!("{}é", "A".repeat(74));
        let out = write_line(FormatOptions::default(), &line);
        assert_eq!(out, format!("{}\r\n é\r\n", "A".repeat(74)));
    }

    #[test]
    fn test_line_length_resets_after_writeln() {
        let mut buffer = Vec::new();
        let mut f = Formatter::new(&mut buffer, FormatOptions::default());
        write!(f, "{}", "A".repeat(70)).unwrap();
        f.writeln().unwrap();
        write!(f, "{}", "B".repeat(70)).unwrap();
        f.writeln().unwrap();

        let out = String::from_utf8(buffer).unwrap();
        // Neither line reaches the limit on its own, so no folding
        assert!(!out.contains("\r\n \r\n"));
        assert_eq!(out.matches("\r\n").count(), 2);
    }
}
