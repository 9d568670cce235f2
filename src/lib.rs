#![warn(missing_docs)]

//! C-style escaping and unescaping of byte strings
//!
//! An arbitrary byte sequence (which may contain any byte value, including
//! embedded NUL) can be escaped into printable text using backslash escape
//! sequences, e.g. the bytes `09 0A F0` become
//! ```text
//! \t\n\360
//! ```
//! and such text can be unescaped back into the original bytes. Escaping
//! comes in four flavors: octal or hex numeric escapes, each with or without
//! a UTF-8-safe mode that leaves bytes ≥ 0x80 untouched so that multi-byte
//! UTF-8 sequences survive intact.
//!
//! Escaping is total and cannot fail; unescaping rejects malformed escape
//! syntax and numeric values that don't fit in a byte.
//!
//! Both directions work on bytes rather than `str` because escaped text
//! produced in a UTF-8-safe mode may carry raw bytes that are not valid
//! UTF-8 on their own.

pub mod escape;
pub mod unescape;
