//! Reversible binary-to-text codec for email local parts.
//!
//! Up to 40 bytes are packed into at most 64 symbols drawn from a 32
//! character alphabet that leaves out `0`, `1`, `l` and `o`. The byte buffer
//! is treated as one big-endian number and cut into 5-bit groups, so unlike
//! RFC 4648 there is no `=` padding and short inputs are zero-padded at the
//! front, not the back.

/// The symbol set, indexed by 5-bit value.
pub const ALPHABET: &str = "abcdefghijkmnpqrstuvwxyz23456789";

/// Longest encoded form, from the email local-part limit.
pub const MAX_SYMBOLS: usize = 64;

/// Longest byte buffer whose encoding fits in `MAX_SYMBOLS`.
pub const MAX_BYTES: usize = MAX_SYMBOLS * 5 / 8;

mod alphabet;
mod regroup;
mod enc;
mod dec;
mod error;

pub use crate::enc::{encode, encode_into};
pub use crate::dec::{decode, is_email_base32, is_email_base32_with};
pub use crate::error::{Error, Result};

/// Number of symbols `encode` produces for `len` bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8 + 4) / 5 // ceil(len * 8 / 5)
}

/// Number of bytes `decode` produces for `len` canonical symbols.
pub const fn decoded_len(len: usize) -> usize {
    len * 5 / 8
}
