use thiserror::Error;

/// Every way an encode, decode, or regroup call can fail.
///
/// All failures are deterministic functions of the input; nothing here is
/// transient or worth retrying.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The argument was not supplied at all.
    #[error("input is absent")]
    NullInput,

    /// Zero bytes to encode, or an empty/whitespace-only string to decode.
    #[error("input is empty")]
    EmptyInput,

    /// The byte buffer would encode to more than 64 symbols.
    #[error("{length} bytes encode to {symbols} symbols, more than the 64 allowed")]
    TooLarge { length: usize, symbols: usize },

    /// The symbol string (or group sequence) is longer than 64.
    #[error("encoded value has {length} symbols, more than the 64 allowed")]
    TooLong { length: usize },

    /// A character outside the alphabet.
    #[error("invalid character '{character}' at index {index}")]
    InvalidSymbol { character: char, index: usize },

    /// A 5-bit group holding a value above 31. Only reachable through misuse
    /// of the regrouping layer.
    #[error("group value {value} at index {index} does not fit in 5 bits")]
    OutOfRange { value: u8, index: usize },

    /// The caller-supplied output buffer cannot hold the encoded symbols.
    #[error("output buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
