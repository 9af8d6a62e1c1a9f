use crate::alphabet::{contains, value_of};
use crate::error::{Error, Result};
use crate::regroup::groups_to_bytes;
use crate::MAX_SYMBOLS;

/// Decodes a symbol string of 1 to 64 characters.
///
/// Symbols are matched exactly: `"AB"` is rejected even though
/// `is_email_base32("AB")` holds. Callers wanting case-insensitive decoding
/// lowercase the input first.
pub fn decode(src: &str) -> Result<Vec<u8>> {
    if src.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    let length = src.chars().count();
    if length > MAX_SYMBOLS {
        return Err(Error::TooLong { length });
    }

    let groups = src
        .chars()
        .enumerate()
        .map(|(index, character)| value_of(character, index))
        .collect::<Result<Vec<u8>>>()?;
    groups_to_bytes(&groups)
}

/// Whether every character of `value` is in the alphabet, ignoring ASCII case.
pub fn is_email_base32(value: &str) -> bool {
    is_email_base32_with(value, true)
}

/// Alphabet membership check with explicit case handling.
///
/// Unlike `decode` this places no upper bound on the length. The empty string
/// is never valid.
pub fn is_email_base32_with(value: &str, case_insensitive: bool) -> bool {
    !value.is_empty()
        && value.chars().all(|character| {
            if case_insensitive {
                contains(character.to_ascii_lowercase())
            } else {
                contains(character)
            }
        })
}
