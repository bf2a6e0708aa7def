//! Mnemonic encoding and decoding.
//!
//! [`MnemonicCodec`] orchestrates the leaf components: entropy to seed,
//! seed sliced into 11-bit groups, groups mapped through the word list,
//! and the whole pipeline in reverse with checksum verification. The
//! free functions [`encode`], [`decode`] and [`generate_random_entropy`]
//! cover the same ground statelessly.

use std::str::FromStr;

use crate::bits::BitVal;
use crate::entropy::Entropy;
use crate::wordlist::{Locale, WordList, BITS_PER_WORD};
use crate::CodecError;

/// Encoder/decoder between entropy values and mnemonic word sequences
/// for one locale.
///
/// The locale is fixed at construction. The codec itself is stateless
/// between calls except for the optional current-entropy slot used by
/// the set-then-encode pattern; sharing an instance across threads
/// requires external mutual exclusion around `set_entropy`/`encode`
/// pairs.
#[derive(Debug, Clone)]
pub struct MnemonicCodec {
    wordlist: WordList,
    entropy: Option<Entropy>,
}

impl MnemonicCodec {
    /// Create a codec for a locale, loading its word list once.
    ///
    /// # Arguments
    /// * `locale` - A supported locale.
    ///
    /// # Returns
    /// `Ok(MnemonicCodec)` on success, or a word-list load error.
    pub fn new(locale: Locale) -> Result<Self, CodecError> {
        Ok(MnemonicCodec {
            wordlist: WordList::load(locale)?,
            entropy: None,
        })
    }

    /// The locale this codec encodes for.
    pub fn locale(&self) -> Locale {
        self.wordlist.locale()
    }

    /// Attach the entropy that subsequent [`MnemonicCodec::encode`]
    /// calls operate on.
    pub fn set_entropy(&mut self, entropy: Entropy) {
        self.entropy = Some(entropy);
    }

    /// Detach and return the current entropy, if any.
    pub fn take_entropy(&mut self) -> Option<Entropy> {
        self.entropy.take()
    }

    /// Encode the current entropy as a space-joined mnemonic string.
    ///
    /// # Returns
    /// The mnemonic, or an error when no entropy has been set.
    pub fn encode(&self) -> Result<String, CodecError> {
        Ok(self.encode_as_sequence()?.join(" "))
    }

    /// Encode the current entropy as an ordered word sequence.
    ///
    /// # Returns
    /// The words in seed-chunk order, or an error when no entropy has
    /// been set.
    pub fn encode_as_sequence(&self) -> Result<Vec<&'static str>, CodecError> {
        let entropy = self.entropy.as_ref().ok_or(CodecError::NoEntropySet)?;
        self.words_for(entropy)
    }

    /// Encode a given entropy without touching the codec's entropy slot.
    ///
    /// # Arguments
    /// * `entropy` - The entropy to encode.
    ///
    /// # Returns
    /// The space-joined mnemonic string.
    pub fn encode_entropy(&self, entropy: &Entropy) -> Result<String, CodecError> {
        Ok(self.words_for(entropy)?.join(" "))
    }

    fn words_for(&self, entropy: &Entropy) -> Result<Vec<&'static str>, CodecError> {
        let seed = entropy.seed();
        let mut words = Vec::with_capacity(seed.bit_width() / BITS_PER_WORD);
        for chunk in seed.chunks(BITS_PER_WORD)? {
            let index = chunk
                .to_usize()
                .expect("an 11-bit chunk fits in a machine word");
            words.push(self.wordlist.lookup_word(index)?);
        }
        Ok(words)
    }

    /// Decode a mnemonic string back into its entropy.
    ///
    /// The input is split on whitespace; the first word absent from the
    /// locale's list aborts with an unknown-word error before any
    /// checksum work. The resulting 11-bit indices are joined into a
    /// seed whose checksum must verify. Codec state is never touched; a
    /// fresh [`Entropy`] is returned.
    ///
    /// # Arguments
    /// * `words` - Words separated by whitespace.
    ///
    /// # Returns
    /// The decoded entropy, or an unknown-word / checksum-mismatch error.
    pub fn decode(&self, words: &str) -> Result<Entropy, CodecError> {
        let mut chunks = Vec::new();
        for word in words.split_whitespace() {
            let index = self.wordlist.lookup_index(word)?;
            // The index table has no widths; every chunk re-pads to 11.
            let index_bits = BitVal::from_decimal(&index.to_string())?;
            chunks.push((index_bits, BITS_PER_WORD));
        }
        let seed = BitVal::join(&chunks)?;
        Entropy::from_seed(&seed)
    }
}

/// Encode an entropy hex string as a mnemonic in the given locale.
///
/// Stateless counterpart of the set-then-encode pattern on
/// [`MnemonicCodec`].
///
/// # Arguments
/// * `entropy_hex` - Entropy as hex, 128-256 bits in 32-bit increments.
/// * `locale` - A supported locale code (`en`, `es`, `fr`, `it`, `ja`,
///   `ko`, `zh`).
///
/// # Returns
/// The space-joined mnemonic string.
pub fn encode(entropy_hex: &str, locale: &str) -> Result<String, CodecError> {
    let codec = MnemonicCodec::new(Locale::from_str(locale)?)?;
    codec.encode_entropy(&Entropy::new(entropy_hex)?)
}

/// Decode a mnemonic string back into its entropy hex.
///
/// # Arguments
/// * `mnemonic` - Words separated by whitespace.
/// * `locale` - A supported locale code.
///
/// # Returns
/// The entropy as lowercase hex.
pub fn decode(mnemonic: &str, locale: &str) -> Result<String, CodecError> {
    let codec = MnemonicCodec::new(Locale::from_str(locale)?)?;
    Ok(codec.decode(mnemonic)?.to_hex())
}

/// Generate random entropy of the requested width as hex.
///
/// # Arguments
/// * `bit_size` - A multiple of 32 in `[128, 256]`.
///
/// # Returns
/// The entropy as lowercase hex.
pub fn generate_random_entropy(bit_size: usize) -> Result<String, CodecError> {
    Ok(Entropy::random(bit_size)?.to_hex())
}
