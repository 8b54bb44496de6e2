// SPDX-FileCopyrightText: 2025-2026 termcal contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Text value escaping as defined in RFC 5545 Section 3.3.11.
//!
//! Format Definition:  This value type is defined by the following notation:
//!
//! ```txt
//! text       = *(TSAFE-CHAR / ":" / DQUOTE / ESCAPED-CHAR)
//!    ; Folded according to description above
//!
//! ESCAPED-CHAR = ("\\" / "\;" / "\," / "\N" / "\n")
//!    ; \\ encodes \, \N or \n encodes newline
//!    ; \; encodes ;, \, encodes ,
//! ```

/// Escape text for serialization.
///
/// Backslash, semicolon, and comma gain a backslash prefix; a newline becomes
/// the two-character sequence `\n`; a bare carriage return is dropped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Reverse [`escape_text`].
///
/// Both `\n` and `\N` decode to a newline. A backslash starting an unknown
/// sequence, or ending the input, is preserved as-is.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => unescaped.push('\\'),
            Some(';') => unescaped.push(';'),
            Some(',') => unescaped.push(','),
            Some('n' | 'N') => unescaped.push('\n'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}
