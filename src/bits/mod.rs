//! Fixed-width bit strings with big-integer semantics.
//!
//! A [`BitVal`] pairs an arbitrary-precision unsigned integer with a
//! declared bit width. The width is carried separately from the magnitude
//! because converting a bit string to an integer and back loses leading
//! zeros; every rendering left-pads back to the declared width. All
//! operations are pure and return new values.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::CodecError;

/// An immutable bit string of a declared width.
///
/// Invariant: `magnitude < 2^bit_width`. The canonical rendering is the
/// binary string left-zero-padded to exactly `bit_width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVal {
    magnitude: BigUint,
    bit_width: usize,
}

impl BitVal {
    /// Parse a hex string into a bit value.
    ///
    /// Each hex digit contributes exactly 4 bits, so leading zero digits
    /// widen the value rather than disappearing: `"0f"` has width 8,
    /// `"f"` has width 4. Both cases are accepted.
    ///
    /// # Arguments
    /// * `s` - Hex string, upper or lower case, any length.
    ///
    /// # Returns
    /// `Ok(BitVal)` of width `4 * s.len()`, or an error for invalid digits.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let bit_width = s.len() * 4;
        // Pad to an even digit count for byte-wise decoding.
        let padded = if s.len() % 2 != 0 {
            format!("0{}", s)
        } else {
            s.to_string()
        };
        let bytes = hex::decode(&padded)?;
        Ok(BitVal {
            magnitude: BigUint::from_bytes_be(&bytes),
            bit_width,
        })
    }

    /// Parse a decimal string into a bit value.
    ///
    /// Decimal strings carry no width information, so the width is the
    /// natural bit length of the value (minimum 1). Callers that need a
    /// wider rendering must supply the width explicitly when rendering
    /// or joining.
    ///
    /// # Arguments
    /// * `s` - Decimal digits.
    ///
    /// # Returns
    /// `Ok(BitVal)` on success, or an error for invalid digits.
    pub fn from_decimal(s: &str) -> Result<Self, CodecError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidDecimal(s.to_string()));
        }
        let magnitude = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| CodecError::InvalidDecimal(s.to_string()))?;
        let bit_width = (magnitude.bits() as usize).max(1);
        Ok(BitVal { magnitude, bit_width })
    }

    /// Wrap raw bytes as a bit value of width `8 * bytes.len()`.
    ///
    /// Bytes are interpreted big-endian; leading zero bytes widen the
    /// value just like leading zero hex digits do.
    pub fn from_raw_bytes(bytes: &[u8]) -> Self {
        BitVal {
            magnitude: BigUint::from_bytes_be(bytes),
            bit_width: bytes.len() * 8,
        }
    }

    /// Parse an explicit binary string into a bit value.
    ///
    /// The width is the exact character length of `s`, leading zeros
    /// included.
    ///
    /// # Arguments
    /// * `s` - A string of `0` and `1` characters.
    ///
    /// # Returns
    /// `Ok(BitVal)` on success, or an error for any other character.
    pub fn from_binary_string(s: &str) -> Result<Self, CodecError> {
        if let Some(c) = s.chars().find(|c| *c != '0' && *c != '1') {
            return Err(CodecError::InvalidBinary(c));
        }
        let magnitude = if s.is_empty() {
            BigUint::zero()
        } else {
            BigUint::parse_bytes(s.as_bytes(), 2).expect("digits are validated above")
        };
        Ok(BitVal {
            magnitude,
            bit_width: s.len(),
        })
    }

    /// The declared width in bits.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Render as lowercase hex, left-zero-padded to `ceil(width / 4)` digits.
    pub fn to_hex(&self) -> String {
        if self.bit_width == 0 {
            return String::new();
        }
        let digits = (self.bit_width + 3) / 4;
        format!("{:0>digits$}", self.magnitude.to_str_radix(16))
    }

    /// Render as a decimal string (no width padding; decimal has none).
    pub fn to_decimal(&self) -> String {
        self.magnitude.to_str_radix(10)
    }

    /// Render as big-endian bytes, left-zero-padded to `ceil(width / 8)` bytes.
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        let len = (self.bit_width + 7) / 8;
        if len == 0 {
            return Vec::new();
        }
        let bytes = self.magnitude.to_bytes_be();
        let mut out = vec![0u8; len];
        out[len - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Render as the canonical binary string, left-zero-padded to the
    /// declared width.
    pub fn to_binary_string(&self) -> String {
        self.to_binary_string_width(self.bit_width)
    }

    /// Render as a binary string left-zero-padded to an explicit width.
    ///
    /// Values whose declared width was lost through an integer round-trip
    /// (e.g. read back from an index table) must be re-padded with the
    /// original width; the integer alone has already forgotten its
    /// leading zeros.
    pub fn to_binary_string_width(&self, width: usize) -> String {
        if width == 0 && self.magnitude.is_zero() {
            return String::new();
        }
        format!("{:0>width$}", self.magnitude.to_str_radix(2))
    }

    /// Convert the magnitude to a usize, if it fits.
    pub fn to_usize(&self) -> Option<usize> {
        self.magnitude.to_usize()
    }

    /// Extract bits `[start, start + length)` of the canonical rendering
    /// as a new value of width `length`.
    ///
    /// # Arguments
    /// * `start` - Offset of the first bit, counted from the left.
    /// * `length` - Number of bits to take.
    ///
    /// # Returns
    /// `Ok(BitVal)` on success, or an error when the range exceeds the
    /// declared width.
    pub fn slice(&self, start: usize, length: usize) -> Result<Self, CodecError> {
        if start + length > self.bit_width {
            return Err(CodecError::BitRange {
                start,
                length,
                width: self.bit_width,
            });
        }
        let shifted = &self.magnitude >> (self.bit_width - start - length);
        let mask = (BigUint::one() << length) - BigUint::one();
        Ok(BitVal {
            magnitude: shifted & mask,
            bit_width: length,
        })
    }

    /// Split into equal-width chunks, left to right.
    ///
    /// The returned iterator is lazy, finite, and restartable (`Clone`).
    ///
    /// # Arguments
    /// * `chunk_width` - Width of every chunk.
    ///
    /// # Returns
    /// `Ok(Chunks)` when the declared width is a non-zero multiple of
    /// `chunk_width`, or an alignment error otherwise.
    pub fn chunks(&self, chunk_width: usize) -> Result<Chunks<'_>, CodecError> {
        if chunk_width == 0 || self.bit_width % chunk_width != 0 {
            return Err(CodecError::ChunkAlignment {
                width: self.bit_width,
                chunk_width,
            });
        }
        Ok(Chunks {
            source: self,
            chunk_width,
            pos: 0,
        })
    }

    /// Concatenate chunks into one value, padding each chunk's rendering
    /// to its paired width.
    ///
    /// This is the inverse of [`BitVal::chunks`]. Widths are explicit
    /// because chunk values read back from an index table have already
    /// lost theirs.
    ///
    /// # Arguments
    /// * `chunks` - Ordered `(value, width)` pairs.
    ///
    /// # Returns
    /// `Ok(BitVal)` of the summed width, or an error when a chunk's
    /// magnitude does not fit its paired width.
    pub fn join(chunks: &[(BitVal, usize)]) -> Result<Self, CodecError> {
        let mut magnitude = BigUint::zero();
        let mut bit_width = 0usize;
        for (chunk, width) in chunks {
            if chunk.magnitude.bits() as usize > *width {
                return Err(CodecError::WidthOverflow { width: *width });
            }
            magnitude = (magnitude << *width) | &chunk.magnitude;
            bit_width += *width;
        }
        Ok(BitVal { magnitude, bit_width })
    }

    /// Append `other` to `self`, a two-value [`BitVal::join`].
    ///
    /// Used to append a checksum onto an entropy value.
    pub fn concat(
        &self,
        other: &BitVal,
        self_width: usize,
        other_width: usize,
    ) -> Result<Self, CodecError> {
        Self::join(&[(self.clone(), self_width), (other.clone(), other_width)])
    }
}

/// Display the canonical width-padded binary string.
impl fmt::Display for BitVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_binary_string())
    }
}

/// Iterator over equal-width chunks of a [`BitVal`], left to right.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    source: &'a BitVal,
    chunk_width: usize,
    pos: usize,
}

impl Iterator for Chunks<'_> {
    type Item = BitVal;

    fn next(&mut self) -> Option<BitVal> {
        if self.pos >= self.source.bit_width {
            return None;
        }
        let chunk = self
            .source
            .slice(self.pos, self.chunk_width)
            .expect("chunk bounds are checked at construction");
        self.pos += self.chunk_width;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.source.bit_width - self.pos) / self.chunk_width;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}
