//! Unescaping code
//!
//! Provides functions for converting C-style escaped text back to the raw
//! bytes it encodes, so that for example the text
//! > `Hi\t\000\376`
//! comes back as the bytes
//! > `48 69 09 00 FE`
//!
//! This is the reverse of the [`escape`](crate::escape) module. Escape
//! sequences are the named single-character escapes
//! (`\a \b \f \n \r \t \v \\ \? \' \"`), octal escapes of one to three
//! digits, and hex escapes (`\x`, `\X`, or `\u`) of one or more digits.
//! `\u` here is the byte-valued `\u00HH` form that
//! [`hex_escape`](crate::escape::hex_escape) emits, not a Unicode code-point
//! escape; it decodes exactly like `\x`. Malformed syntax and numeric values
//! that don't fit in a byte are errors; nothing is recovered internally.
//!
//! Decoded output is never longer than its input, which makes decoding in
//! place possible: [`unescape_in_place`] rewrites a buffer over itself and
//! truncates it to the decoded length.

use thiserror::Error;

/// Options controlling how escaped text is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnescapeOptions {
    /// Keep a NUL-valued octal or hex escape as its literal text (`\0`,
    /// `\x00`, ...) instead of emitting a real NUL byte. Useful when the
    /// output will be handed to something that treats NUL as a terminator.
    pub leave_nulls_escaped: bool,
}

/// Errors returned when decoding. The numeric-overflow variants carry the
/// text of the offending escape sequence, without its leading backslash.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnescapeError {
    /// Given when the input ends immediately after a backslash.
    #[error("String cannot end with \\")]
    UnterminatedEscape,
    /// Given when a backslash is followed by a character with no defined
    /// mapping.
    #[error("Unknown escape sequence: \\{0}")]
    UnknownEscape(char),
    /// Given when one to three octal digits decode to a value above 0xff.
    #[error("Value of \\{0} exceeds 0xff")]
    OctalOverflow(String),
    /// Given when `\x`, `\X`, or `\u` is not followed by any hex digit.
    #[error("\\x cannot be followed by a non-hex digit")]
    MissingHexDigit,
    /// Given when a run of hex digits decodes to a value above 0xff.
    #[error("Value of \\{0} exceeds 0xff")]
    HexOverflow(String),
}

fn is_octal_digit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

fn hex_digit_value(c: u8) -> u32 {
    debug_assert!(c.is_ascii_hexdigit());
    let mut x = u32::from(c);
    if x > u32::from(b'9') {
        x += 9;
    }
    x & 0xf
}

// Escape sequences only ever contain ASCII digits and letters, so this is a
// straight copy into the diagnostic string.
fn escape_text(span: &[u8]) -> String {
    String::from_utf8_lossy(span).into_owned()
}

/// Decode escape sequences within `buf`, writing the result over the front
/// of `buf` itself, and return the decoded length. Every branch consumes at
/// least as many bytes as it produces, so the write cursor never passes the
/// read cursor and decoding over the source is safe.
fn unescape_in_buffer(buf: &mut [u8], options: &UnescapeOptions) -> anyhow::Result<usize> {
    let len = buf.len();
    let mut r = 0;

    // The leading run with no escaping decodes to itself in place.
    while r < len && buf[r] != b'\\' {
        r += 1;
    }
    let mut w = r;

    while r < len {
        if buf[r] != b'\\' {
            buf[w] = buf[r];
            w += 1;
            r += 1;
            continue;
        }
        r += 1; // skip past the backslash
        if r == len {
            anyhow::bail!(UnescapeError::UnterminatedEscape);
        }
        match buf[r] {
            b'a' => {
                buf[w] = 0x07;
                w += 1;
            }
            b'b' => {
                buf[w] = 0x08;
                w += 1;
            }
            b'f' => {
                buf[w] = 0x0C;
                w += 1;
            }
            b'n' => {
                buf[w] = b'\n';
                w += 1;
            }
            b'r' => {
                buf[w] = b'\r';
                w += 1;
            }
            b't' => {
                buf[w] = b'\t';
                w += 1;
            }
            b'v' => {
                buf[w] = 0x0B;
                w += 1;
            }
            b'\\' => {
                buf[w] = b'\\';
                w += 1;
            }
            b'?' => {
                buf[w] = b'?';
                w += 1;
            }
            b'\'' => {
                buf[w] = b'\'';
                w += 1;
            }
            b'"' => {
                buf[w] = b'"';
                w += 1;
            }
            b'0'..=b'7' => {
                // octal escape: 1 to 3 digits
                let start = r;
                let mut value = u32::from(buf[r] - b'0');
                if r + 1 < len && is_octal_digit(buf[r + 1]) {
                    r += 1;
                    value = value * 8 + u32::from(buf[r] - b'0');
                }
                if r + 1 < len && is_octal_digit(buf[r + 1]) {
                    r += 1;
                    value = value * 8 + u32::from(buf[r] - b'0');
                }
                if value > 0xFF {
                    anyhow::bail!(UnescapeError::OctalOverflow(escape_text(&buf[start..=r])));
                }
                if value == 0 && options.leave_nulls_escaped {
                    // Copy the escape sequence for the null character back out
                    buf[w] = b'\\';
                    w += 1;
                    buf.copy_within(start..=r, w);
                    w += r - start + 1;
                } else {
                    buf[w] = value as u8;
                    w += 1;
                }
            }
            // \u is the byte-valued \u00HH form the hex escaper emits; it
            // takes arbitrarily many hex digits just like \x
            b'x' | b'X' | b'u' => {
                let start = r; // keep the introducer in the diagnostic text
                if r + 1 == len || !buf[r + 1].is_ascii_hexdigit() {
                    anyhow::bail!(UnescapeError::MissingHexDigit);
                }
                let mut value = 0u32;
                while r + 1 < len && buf[r + 1].is_ascii_hexdigit() {
                    r += 1;
                    // Arbitrarily many hex digits are consumed. Saturating
                    // accumulation keeps a long run from wrapping back below
                    // the bound check.
                    value = value
                        .saturating_mul(16)
                        .saturating_add(hex_digit_value(buf[r]));
                }
                if value > 0xFF {
                    anyhow::bail!(UnescapeError::HexOverflow(escape_text(&buf[start..=r])));
                }
                if value == 0 && options.leave_nulls_escaped {
                    buf[w] = b'\\';
                    w += 1;
                    buf.copy_within(start..=r, w);
                    w += r - start + 1;
                } else {
                    buf[w] = value as u8;
                    w += 1;
                }
            }
            other => {
                anyhow::bail!(UnescapeError::UnknownEscape(char::from(other)));
            }
        }
        r += 1; // read past the escape we decoded
    }

    Ok(w)
}

/// Decode C-style escape sequences in `source` and return the raw bytes.
///
/// This is the reverse of the escaping functions in
/// [`escape`](crate::escape); any of their outputs decodes back to the
/// original input. NUL-valued escapes produce real NUL bytes; to keep them
/// as literal text instead, use [`unescape_with`].
///
/// # Examples
/// ```
/// # use cescape::unescape::unescape;
/// # fn main() -> anyhow::Result<()> {
/// assert_eq!(b"\t".to_vec(), unescape(b"\\t")?);
/// assert_eq!(b"A".to_vec(), unescape(b"\\101")?);
/// assert_eq!(b"A".to_vec(), unescape(b"\\x41")?);
/// assert_eq!(b"\x00".to_vec(), unescape(b"\\0")?);
/// # Ok(())
/// # }
/// ```
pub fn unescape(source: &[u8]) -> anyhow::Result<Vec<u8>> {
    unescape_with(source, &UnescapeOptions::default())
}

/// Decode C-style escape sequences in `source` with explicit options.
///
/// # Examples
/// ```
/// # use cescape::unescape::{unescape_with, UnescapeOptions};
/// # fn main() -> anyhow::Result<()> {
/// let options = UnescapeOptions { leave_nulls_escaped: true };
/// assert_eq!(b"\\0".to_vec(), unescape_with(b"\\0", &options)?);
/// assert_eq!(b"A".to_vec(), unescape_with(b"\\x41", &options)?);
/// # Ok(())
/// # }
/// ```
pub fn unescape_with(source: &[u8], options: &UnescapeOptions) -> anyhow::Result<Vec<u8>> {
    let mut dest = source.to_vec();
    unescape_in_place(&mut dest, options)?;
    Ok(dest)
}

/// Decode C-style escape sequences within `buf` itself, truncating it to the
/// decoded length. Decoding never produces more bytes than it consumes, so
/// no extra storage is needed. On failure the buffer contents are
/// unspecified and should not be read.
///
/// # Examples
/// ```
/// # use cescape::unescape::{unescape_in_place, UnescapeOptions};
/// # fn main() -> anyhow::Result<()> {
/// let mut buf = b"a\\tb".to_vec();
/// unescape_in_place(&mut buf, &UnescapeOptions::default())?;
/// assert_eq!(b"a\tb".to_vec(), buf);
/// # Ok(())
/// # }
/// ```
pub fn unescape_in_place(buf: &mut Vec<u8>, options: &UnescapeOptions) -> anyhow::Result<()> {
    let new_len = unescape_in_buffer(buf.as_mut_slice(), options)?;
    buf.truncate(new_len);
    Ok(())
}
