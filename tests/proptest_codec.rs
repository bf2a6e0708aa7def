use proptest::prelude::*;

use bip39_codec::bits::BitVal;
use bip39_codec::{decode, encode, Entropy, Locale, MnemonicCodec};

/// Entropy byte lengths valid for a mnemonic: 128-256 bits in 32-bit steps.
fn entropy_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|n| prop::collection::vec(any::<u8>(), n))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn encode_decode_roundtrip_all_locales(
        bytes in entropy_bytes(),
        locale_index in 0usize..7,
    ) {
        let locale = Locale::ALL[locale_index];
        let entropy_hex = hex::encode(&bytes);
        let mnemonic = encode(&entropy_hex, locale.code()).unwrap();
        prop_assert_eq!(decode(&mnemonic, locale.code()).unwrap(), entropy_hex);
    }

    #[test]
    fn word_count_follows_entropy_width(bytes in entropy_bytes()) {
        // entropy_bits / 32 * 3 words: 12/15/18/21/24.
        let mut codec = MnemonicCodec::new(Locale::En).unwrap();
        codec.set_entropy(Entropy::from_bits(BitVal::from_raw_bytes(&bytes)));
        let words = codec.encode_as_sequence().unwrap();
        prop_assert_eq!(words.len(), bytes.len() * 8 / 32 * 3);
    }

    #[test]
    fn seed_width_is_entropy_plus_checksum(bytes in entropy_bytes()) {
        let entropy = Entropy::from_bits(BitVal::from_raw_bytes(&bytes));
        let seed = entropy.seed();
        prop_assert_eq!(seed.bit_width(), bytes.len() * 8 + bytes.len() * 8 / 32);
        prop_assert_eq!(
            Entropy::from_seed(&seed).unwrap().to_hex(),
            entropy.to_hex()
        );
    }

    #[test]
    fn chunks_join_identity(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let value = BitVal::from_raw_bytes(&bytes);
        for chunk_width in [1usize, 2, 4, 8] {
            let pairs: Vec<(BitVal, usize)> = value
                .chunks(chunk_width)
                .unwrap()
                .map(|c| (c, chunk_width))
                .collect();
            prop_assert_eq!(&BitVal::join(&pairs).unwrap(), &value);
        }
    }

    #[test]
    fn slice_recomposes(bytes in prop::collection::vec(any::<u8>(), 1..32), split in 0usize..256) {
        let value = BitVal::from_raw_bytes(&bytes);
        let split = split % (value.bit_width() + 1);
        let head = value.slice(0, split).unwrap();
        let tail = value.slice(split, value.bit_width() - split).unwrap();
        let rejoined = head
            .concat(&tail, split, value.bit_width() - split)
            .unwrap();
        prop_assert_eq!(rejoined, value);
    }

    #[test]
    fn hex_roundtrip_preserves_width(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let value = BitVal::from_raw_bytes(&bytes);
        let back = BitVal::from_hex(&value.to_hex()).unwrap();
        prop_assert_eq!(back.bit_width(), value.bit_width());
        prop_assert_eq!(back.to_raw_bytes(), bytes);
    }
}
