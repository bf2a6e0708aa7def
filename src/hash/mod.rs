//! Hash collaborator for checksum computation.
//!
//! SHA-256 is consumed as a black box: bytes in, 256-bit digest out.
//! The checksum logic in [`crate::entropy`] slices the leading bits of
//! the digest; nothing else in the crate hashes anything.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_string() {
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_string() {
        let hash = sha256(b"this is the data I want to hash");
        assert_eq!(
            hex::encode(hash),
            "f88eec7ecabf88f9a64c4100cac1e0c0c4581100492137d1b656ea626cad63e3"
        );
    }

    #[test]
    fn test_sha256_entropy_bytes() {
        // Digest of the 16 entropy bytes f6c1396f63b75efecbbd3b6d7c468818;
        // its leading bits become the mnemonic checksum.
        let entropy = hex::decode("f6c1396f63b75efecbbd3b6d7c468818").unwrap();
        let hash = sha256(&entropy);
        assert_eq!(
            hex::encode(hash),
            "cacfa781a88d992a00d47ccac89520de1a46fb4e86dacaa40f6990ae47f08a30"
        );
    }
}
