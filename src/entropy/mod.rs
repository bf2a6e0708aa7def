//! Entropy values and the checksum/seed construction.
//!
//! An [`Entropy`] wraps the raw secret bit string, derives its checksum
//! (leading bits of SHA-256 over the entropy bytes, one bit per 32
//! entropy bits) and its seed (entropy followed by checksum), and
//! reconstructs entropy from a seed with mandatory checksum
//! re-verification.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bits::BitVal;
use crate::hash::sha256;
use crate::CodecError;

/// One checksum bit per this many entropy bits.
pub const CHECKSUM_DIVISOR: usize = 32;

/// Minimum entropy width in bits.
pub const MIN_ENTROPY_BITS: usize = 128;

/// Maximum entropy width in bits.
pub const MAX_ENTROPY_BITS: usize = 256;

/// A raw secret bit string, prior to checksum augmentation.
///
/// Construction does not enforce width validity; [`Entropy::valid_for_mnemonic`]
/// is a separate, advisory check. Widths that are not a multiple of 32
/// are silently truncated down to the nearest lower multiple for all
/// checksum and seed computation (designed normalization, not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entropy {
    value: BitVal,
}

impl Entropy {
    /// Wrap a hex string as entropy.
    ///
    /// Any valid hex is accepted here, mnemonic-sized or not.
    ///
    /// # Arguments
    /// * `hex_str` - Hex string, upper or lower case.
    ///
    /// # Returns
    /// `Ok(Entropy)` on success, or an error for invalid hex.
    pub fn new(hex_str: &str) -> Result<Self, CodecError> {
        Ok(Entropy {
            value: BitVal::from_hex(hex_str)?,
        })
    }

    /// Wrap an existing bit value as entropy.
    pub fn from_bits(value: BitVal) -> Self {
        Entropy { value }
    }

    /// Generate entropy from the platform's cryptographically secure
    /// random source.
    ///
    /// # Arguments
    /// * `bit_size` - Requested width; must be a multiple of 32 in
    ///   `[128, 256]`.
    ///
    /// # Returns
    /// `Ok(Entropy)` of the requested width, or an error for an invalid
    /// size or a platform source failure. The platform error itself is
    /// never exposed.
    pub fn random(bit_size: usize) -> Result<Self, CodecError> {
        if !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&bit_size)
            || bit_size % CHECKSUM_DIVISOR != 0
        {
            return Err(CodecError::EntropySize(bit_size));
        }
        let mut bytes = vec![0u8; bit_size / 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| CodecError::RandomGeneration)?;
        Ok(Entropy {
            value: BitVal::from_raw_bytes(&bytes),
        })
    }

    /// The underlying bit value.
    pub fn bits(&self) -> &BitVal {
        &self.value
    }

    /// The declared width of the raw entropy in bits.
    pub fn bit_size(&self) -> usize {
        self.value.bit_width()
    }

    /// Render the raw entropy as lowercase hex.
    pub fn to_hex(&self) -> String {
        self.value.to_hex()
    }

    /// The width actually used for checksum and seed computation: the
    /// declared width rounded down to the nearest multiple of 32. Bits
    /// beyond it are excluded, never rejected.
    pub fn effective_bit_size(&self) -> usize {
        self.value.bit_width() / CHECKSUM_DIVISOR * CHECKSUM_DIVISOR
    }

    /// Checksum width in bits: one per 32 effective entropy bits.
    pub fn checksum_bit_length(&self) -> usize {
        self.effective_bit_size() / CHECKSUM_DIVISOR
    }

    /// The effective-width prefix of the entropy.
    fn effective_value(&self) -> BitVal {
        self.value
            .slice(0, self.effective_bit_size())
            .expect("effective width never exceeds the declared width")
    }

    /// The checksum: leading [`Entropy::checksum_bit_length`] bits of
    /// SHA-256 over the effective entropy bytes.
    pub fn checksum(&self) -> BitVal {
        let digest = sha256(&self.effective_value().to_raw_bytes());
        BitVal::from_raw_bytes(&digest)
            .slice(0, self.checksum_bit_length())
            .expect("checksum is at most 8 of 256 digest bits")
    }

    /// The seed: effective entropy bits followed by checksum bits.
    pub fn seed(&self) -> BitVal {
        self.effective_value()
            .concat(
                &self.checksum(),
                self.effective_bit_size(),
                self.checksum_bit_length(),
            )
            .expect("entropy and checksum both fit their declared widths")
    }

    /// Reconstruct entropy from a seed, verifying its checksum.
    ///
    /// The leading bits (seed width rounded down to a multiple of 32)
    /// are the candidate entropy; its seed is recomputed and must render
    /// to exactly the same hex as the input. This is the sole integrity
    /// gate protecting against corrupted or mistyped mnemonics.
    ///
    /// # Arguments
    /// * `seed` - An entropy-plus-checksum bit value.
    ///
    /// # Returns
    /// `Ok(Entropy)` when the checksum verifies, or a checksum-mismatch
    /// error otherwise.
    pub fn from_seed(seed: &BitVal) -> Result<Self, CodecError> {
        let effective = seed.bit_width() / CHECKSUM_DIVISOR * CHECKSUM_DIVISOR;
        let candidate = Entropy::from_bits(seed.slice(0, effective)?);
        if candidate.seed().to_hex() != seed.to_hex() {
            return Err(CodecError::ChecksumMismatch);
        }
        Ok(candidate)
    }

    /// Whether the declared width lies in `[128, 256]`.
    pub fn within_range(&self) -> bool {
        (MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&self.value.bit_width())
    }

    /// Whether the declared width is a multiple of 32, i.e. no bits
    /// would be truncated by the seed computation.
    pub fn is_multiple_of_checksum_divisor(&self) -> bool {
        self.value.bit_width() % CHECKSUM_DIVISOR == 0
    }

    /// Whether this entropy can represent a standard mnemonic:
    /// width in {128, 160, 192, 224, 256}.
    pub fn valid_for_mnemonic(&self) -> bool {
        self.within_range() && self.is_multiple_of_checksum_divisor()
    }
}

/// Display the entropy as its hex rendering.
impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Serialize as a hex string in JSON.
impl Serialize for Entropy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Deserialize from a hex string in JSON.
impl<'de> Deserialize<'de> for Entropy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Entropy::new(&s).map_err(serde::de::Error::custom)
    }
}
