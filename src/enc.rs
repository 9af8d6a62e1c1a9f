use crate::alphabet::symbol_of;
use crate::error::{Error, Result};
use crate::regroup::bytes_to_groups;
use crate::{encoded_len, MAX_SYMBOLS};

/// Writes the symbols for `src` into `dst` and returns how many were written.
///
/// `dst` needs at least `encoded_len(src.len())` bytes; anything past that is
/// left untouched.
pub fn encode_into(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let groups = bytes_to_groups(src)?;
    if dst.len() < groups.len() {
        return Err(Error::BufferTooSmall { required: groups.len(), actual: dst.len() });
    }
    for (index, &group) in groups.iter().enumerate() {
        dst[index] = symbol_of(group, index)? as u8;
    }
    Ok(groups.len())
}

/// Encodes 1 to 40 bytes into at most 64 alphabet symbols.
pub fn encode(src: &[u8]) -> Result<String> {
    let mut dst = vec![0u8; encoded_len(src.len()).min(MAX_SYMBOLS)];
    let len = encode_into(src, &mut dst)?;
    dst.truncate(len);
    Ok(dst.into_iter().map(char::from).collect())
}
