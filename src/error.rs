/// Unified error type for all codec operations.
///
/// Covers errors from bit-string manipulation, word-list lookup,
/// entropy generation, and mnemonic encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("word list for locale {locale} has {got} entries, want 2048")]
    WordListLoad { locale: String, got: usize },

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("random generation failed")]
    RandomGeneration,

    #[error("bit slice at {start} of length {length} exceeds width {width}")]
    BitRange {
        start: usize,
        length: usize,
        width: usize,
    },

    #[error("width {width} is not a multiple of chunk width {chunk_width}")]
    ChunkAlignment { width: usize, chunk_width: usize },

    #[error("no entropy set")]
    NoEntropySet,

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),

    #[error("invalid binary digit: {0}")]
    InvalidBinary(char),

    #[error("word index {0} out of range")]
    WordIndex(usize),

    #[error("value does not fit in {width} bits")]
    WidthOverflow { width: usize },

    #[error("entropy size {0} must be a multiple of 32 between 128 and 256 bits")]
    EntropySize(usize),
}
