//! Escaping code
//!
//! Converts raw bytes into C-style escaped text so that for example the bytes
//! > `48 69 09 00 FE`
//! come out as
//! > `Hi\t\000\376`
//!
//! Escaping is a total function: every byte sequence has exactly one output
//! and encoding never fails. Four fixed parameterizations are provided:
//! [`escape`] (octal), [`hex_escape`], and their UTF-8-safe variants which
//! leave bytes ≥ 0x80 alone so multi-byte UTF-8 sequences pass through
//! unmangled. [`escape_with`] accepts an explicit [`EscapeOptions`].

/// Digit characters for numeric escapes, shared by the octal and hex forms.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Options controlling how bytes are escaped. The four preset functions in
/// this module are fixed instances of these options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeOptions {
    /// Use `\u00HH` hex escapes instead of `\OOO` octal escapes.
    pub use_hex: bool,
    /// Never escape bytes ≥ 0x80, preserving UTF-8 sequences intact.
    pub utf8_safe: bool,
}

fn is_printable(c: u8) -> bool {
    c == b' ' || c.is_ascii_graphic()
}

/// Escape `src` using C-style escape sequences according to `options`.
///
/// `\n`, `\r`, `\t`, `"`, `'` and `\` become their two-character literal
/// escapes. Any other byte that is not printable ASCII becomes a numeric
/// escape: three-digit zero-padded octal (`\011`), or with
/// [`EscapeOptions::use_hex`] the two-digit form `\u0009`. Note that the hex
/// form always has exactly two hex digits after `\u00`; it encodes a byte,
/// not a Unicode code point.
///
/// A printable hex-digit character immediately following a hex escape is
/// escaped as well. Unescaping consumes arbitrarily many hex digits, so a
/// literal `5` after `\u0001` would otherwise be swallowed into the escape.
///
/// With [`EscapeOptions::utf8_safe`] set, bytes ≥ 0x80 are copied verbatim
/// regardless of printability.
///
/// # Examples
/// ```
/// # use cescape::escape::{escape_with, EscapeOptions};
/// let options = EscapeOptions { use_hex: true, utf8_safe: false };
/// assert_eq!(b"A\\u0000Z".to_vec(), escape_with(b"A\x00Z", &options));
/// ```
pub fn escape_with(src: &[u8], options: &EscapeOptions) -> Vec<u8> {
    let mut dest = Vec::with_capacity(src.len());
    let mut last_hex_escape = false; // true if the last output was \u00HH

    for &c in src {
        let mut is_hex_escape = false;
        match c {
            b'\n' => dest.extend_from_slice(b"\\n"),
            b'\r' => dest.extend_from_slice(b"\\r"),
            b'\t' => dest.extend_from_slice(b"\\t"),
            b'"' => dest.extend_from_slice(b"\\\""),
            b'\'' => dest.extend_from_slice(b"\\'"),
            b'\\' => dest.extend_from_slice(b"\\\\"),
            _ => {
                // If we emit \u00HH and the next source byte is a hex digit,
                // that digit must be escaped too or a decoder would read it
                // as part of the same escape.
                if (!options.utf8_safe || c < 0x80)
                    && (!is_printable(c) || (last_hex_escape && c.is_ascii_hexdigit()))
                {
                    if options.use_hex {
                        dest.extend_from_slice(b"\\u00");
                        dest.push(HEX_CHARS[usize::from(c / 16)]);
                        dest.push(HEX_CHARS[usize::from(c % 16)]);
                        is_hex_escape = true;
                    } else {
                        dest.push(b'\\');
                        dest.push(HEX_CHARS[usize::from(c / 64)]);
                        dest.push(HEX_CHARS[usize::from((c % 64) / 8)]);
                        dest.push(HEX_CHARS[usize::from(c % 8)]);
                    }
                } else {
                    dest.push(c);
                }
            }
        }
        last_hex_escape = is_hex_escape;
    }

    dest
}

/// Escape `src` with plain octal escapes.
///
/// # Examples
/// ```
/// # use cescape::escape::escape;
/// assert_eq!(b"\\t\\n".to_vec(), escape(b"\t\n"));
/// ```
pub fn escape(src: &[u8]) -> Vec<u8> {
    escape_with(
        src,
        &EscapeOptions {
            use_hex: false,
            utf8_safe: false,
        },
    )
}

/// Escape `src` with hex escapes.
///
/// # Examples
/// ```
/// # use cescape::escape::hex_escape;
/// assert_eq!(b"\\u0001".to_vec(), hex_escape(&[0x01]));
/// ```
pub fn hex_escape(src: &[u8]) -> Vec<u8> {
    escape_with(
        src,
        &EscapeOptions {
            use_hex: true,
            utf8_safe: false,
        },
    )
}

/// Escape `src` with octal escapes, leaving bytes ≥ 0x80 untouched.
pub fn utf8_safe_escape(src: &[u8]) -> Vec<u8> {
    escape_with(
        src,
        &EscapeOptions {
            use_hex: false,
            utf8_safe: true,
        },
    )
}

/// Escape `src` with hex escapes, leaving bytes ≥ 0x80 untouched.
pub fn utf8_safe_hex_escape(src: &[u8]) -> Vec<u8> {
    escape_with(
        src,
        &EscapeOptions {
            use_hex: true,
            utf8_safe: true,
        },
    )
}
