//! BIP-39 mnemonic codec.
//!
//! Converts a raw binary secret ("entropy") of 128-256 bits into a
//! human-transcribable sequence of dictionary words and back, following
//! the BIP-39 mnemonic-encoding scheme:
//! - Fixed-width bit strings with base conversions, slicing, chunking
//!   and joining (`bits`)
//! - Locale-indexed 2048-word lists mapping 11-bit indices to words
//!   (`wordlist`)
//! - Entropy/checksum/seed construction and its checksum-verified
//!   inverse (`entropy`)
//! - The encode/decode facade and stateless free functions (`mnemonic`)
//!
//! Key derivation (PBKDF2 seed stretching, passphrases) is out of scope;
//! this crate produces and consumes the word sequence and its defining
//! entropy only.

pub mod hash;
pub mod bits;
pub mod wordlist;
pub mod entropy;
pub mod mnemonic;

mod error;
pub use error::CodecError;

pub use bits::BitVal;
pub use entropy::Entropy;
pub use mnemonic::{decode, encode, generate_random_entropy, MnemonicCodec};
pub use wordlist::{Locale, WordList};
