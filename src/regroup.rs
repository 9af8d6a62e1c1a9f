//! Repartitioning between 8-bit bytes and 5-bit groups.
//!
//! The byte buffer is read as one big-endian unsigned integer. Encoding cuts
//! it into 5-bit groups, most significant first, left-padding the first
//! group with zero bits when the bit count is not a multiple of 5. Decoding
//! concatenates the groups back into one integer and renders it big-endian
//! in `floor(5 * groups / 8)` bytes, or in one more byte when the leading
//! bits that do not fill a whole byte are not all zero.
//!
//! Inputs are capped at 40 bytes / 64 groups, so a small shift register
//! consumed one byte (or one group) at a time replaces any big-integer
//! arithmetic.

use crate::error::{Error, Result};
use crate::{decoded_len, encoded_len, MAX_SYMBOLS};

/// Splits `bytes` into `encoded_len(bytes.len())` values in `0..32`.
pub fn bytes_to_groups(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.is_empty() {
        return Err(Error::EmptyInput);
    }
    let symbols = encoded_len(bytes.len());
    if symbols > MAX_SYMBOLS {
        return Err(Error::TooLarge { length: bytes.len(), symbols });
    }

    let mut groups = Vec::with_capacity(symbols);
    let mut accumulator: u32 = 0;
    // Zero bits in front of the first byte so the total is a multiple of 5.
    let mut bits = symbols * 5 - bytes.len() * 8;
    for &byte in bytes {
        accumulator = (accumulator << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            groups.push((accumulator >> bits) as u8);
            accumulator &= (1 << bits) - 1;
        }
    }
    debug_assert_eq!(bits, 0);
    debug_assert_eq!(groups.len(), symbols);
    Ok(groups)
}

/// Joins 5-bit groups back into bytes.
///
/// Fails with `TooLong` above 64 groups and with `OutOfRange` on the first
/// group above 31.
pub fn groups_to_bytes(groups: &[u8]) -> Result<Vec<u8>> {
    if groups.len() > MAX_SYMBOLS {
        return Err(Error::TooLong { length: groups.len() });
    }
    if let Some((index, &value)) = groups.iter().enumerate().find(|(_, &value)| value > 0x1F) {
        return Err(Error::OutOfRange { value, index });
    }

    let total_bits = groups.len() * 5;
    let excess = total_bits % 8;
    let mut output = Vec::with_capacity(decoded_len(groups.len()) + 1);
    let mut accumulator: u32 = 0;
    // Zero bits in front of the first group so the total is a multiple of 8.
    let mut bits = (8 - excess) % 8;
    for &group in groups {
        accumulator = (accumulator << 5) | group as u32;
        bits += 5;
        while bits >= 8 {
            bits -= 8;
            output.push((accumulator >> bits) as u8);
            accumulator &= (1 << bits) - 1;
        }
    }
    debug_assert_eq!(bits, 0);

    // The leading partial byte only survives when it carries set bits.
    if excess > 0 && output.first() == Some(&0) {
        output.remove(0);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_groups_single_byte() {
        assert_eq!(bytes_to_groups(&[0x00]), Ok(vec![0, 0]));
        assert_eq!(bytes_to_groups(&[0x01]), Ok(vec![0, 1]));
        assert_eq!(bytes_to_groups(&[0x80]), Ok(vec![4, 0]));
        assert_eq!(bytes_to_groups(&[0xFF]), Ok(vec![7, 31]));
    }

    #[test]
    fn test_bytes_to_groups_left_pads_first_group() {
        // 16 bits become 20; four zero bits lead the first group.
        assert_eq!(bytes_to_groups(&[0xFF, 0xFF]), Ok(vec![1, 31, 31, 31]));
        assert_eq!(bytes_to_groups(&[0x00, 0x01]), Ok(vec![0, 0, 0, 1]));
    }

    #[test]
    fn test_bytes_to_groups_exact_multiple() {
        assert_eq!(bytes_to_groups(&[0xFF; 5]), Ok(vec![31; 8]));
        assert_eq!(
            bytes_to_groups(&[0x84, 0x21, 0x08, 0x42, 0x10]),
            Ok(vec![16, 16, 16, 16, 16, 16, 16, 16])
        );
    }

    #[test]
    fn test_bytes_to_groups_limits() {
        assert_eq!(bytes_to_groups(&[]), Err(Error::EmptyInput));
        assert_eq!(bytes_to_groups(&[0xAB; 40]).map(|groups| groups.len()), Ok(64));
        assert_eq!(
            bytes_to_groups(&[0xAB; 41]),
            Err(Error::TooLarge { length: 41, symbols: 66 })
        );
    }

    #[test]
    fn test_groups_to_bytes_inverts_padding() {
        assert_eq!(groups_to_bytes(&[7, 31]), Ok(vec![0xFF]));
        assert_eq!(groups_to_bytes(&[0, 0]), Ok(vec![0x00]));
        assert_eq!(groups_to_bytes(&[0, 0, 0, 1]), Ok(vec![0x00, 0x01]));
        assert_eq!(groups_to_bytes(&[31; 8]), Ok(vec![0xFF; 5]));
    }

    #[test]
    fn test_groups_to_bytes_keeps_set_leading_bits() {
        // 10 bits of ones do not fit in one byte; the minimal rendering wins.
        assert_eq!(groups_to_bytes(&[31, 31]), Ok(vec![0x03, 0xFF]));
        assert_eq!(groups_to_bytes(&[8, 0]), Ok(vec![0x01, 0x00]));
    }

    #[test]
    fn test_groups_to_bytes_single_group() {
        assert_eq!(groups_to_bytes(&[0]), Ok(vec![]));
        assert_eq!(groups_to_bytes(&[1]), Ok(vec![0x01]));
        assert_eq!(groups_to_bytes(&[31]), Ok(vec![0x1F]));
    }

    #[test]
    fn test_groups_to_bytes_rejects_invalid_groups() {
        assert_eq!(groups_to_bytes(&[1, 2, 32, 40]), Err(Error::OutOfRange { value: 32, index: 2 }));
        assert_eq!(groups_to_bytes(&[0; 65]), Err(Error::TooLong { length: 65 }));
        assert_eq!(groups_to_bytes(&[0; 64]), Ok(vec![0; 40]));
    }
}
