//! Mapping between 5-bit values and alphabet symbols.

use crate::error::{Error, Result};

pub(crate) const CHARS: &[u8; 32] = b"abcdefghijkmnpqrstuvwxyz23456789";

static DECODE: [Option<u8>; 128] = decode_table(CHARS);

const fn decode_table(characters: &[u8; 32]) -> [Option<u8>; 128] {
    let mut decode: [Option<u8>; 128] = [None; 128];

    let mut index = 0;
    while index < characters.len() {
        let character = characters[index];
        if character >= 128 {
            panic!("alphabet must be ascii");
        }
        if let b'0' | b'1' | b'l' | b'o' = character {
            panic!("alphabet must not contain ambiguous characters");
        }
        if decode[character as usize].is_some() {
            panic!("duplicate character in alphabet");
        }
        decode[character as usize] = Some(index as u8);
        index += 1;
    }

    decode
}

/// Symbol for a 5-bit value. `index` is only used to locate the failure.
pub fn symbol_of(value: u8, index: usize) -> Result<char> {
    match CHARS.get(value as usize) {
        Some(&character) => Ok(character as char),
        None => Err(Error::OutOfRange { value, index }),
    }
}

/// 5-bit value of a symbol. Matching is exact; no case folding happens here.
pub fn value_of(character: char, index: usize) -> Result<u8> {
    if !character.is_ascii() {
        return Err(Error::InvalidSymbol { character, index });
    }
    DECODE[character as usize].ok_or(Error::InvalidSymbol { character, index })
}

pub(crate) fn contains(character: char) -> bool {
    character.is_ascii() && DECODE[character as usize].is_some()
}
