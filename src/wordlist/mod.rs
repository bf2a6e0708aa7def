//! Locale-scoped BIP-39 word lists with bidirectional lookup.
//!
//! Word data comes from the `bip39` crate's static tables: one ordered
//! 2048-word list per locale, order fixed by the BIP-39 specification.
//! This module wraps the tables with locale validation and word<->index
//! lookup; it performs no file I/O of its own.

use std::fmt;
use std::str::FromStr;

use bip39::Language;

use crate::CodecError;

/// Number of words in every BIP-39 word list.
pub const WORDLIST_SIZE: usize = 2048;

/// Bits encoded by a single mnemonic word (2^11 = 2048).
pub const BITS_PER_WORD: usize = 11;

/// A supported word-list locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Es,
    Fr,
    It,
    Ja,
    Ko,
    Zh,
}

impl Locale {
    /// All supported locales, in code order.
    pub const ALL: [Locale; 7] = [
        Locale::En,
        Locale::Es,
        Locale::Fr,
        Locale::It,
        Locale::Ja,
        Locale::Ko,
        Locale::Zh,
    ];

    /// The two-letter locale code, e.g. `"en"`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Zh => "zh",
        }
    }

    /// The word-list table this locale maps to.
    fn language(&self) -> Language {
        match self {
            Locale::En => Language::English,
            Locale::Es => Language::Spanish,
            Locale::Fr => Language::French,
            Locale::It => Language::Italian,
            Locale::Ja => Language::Japanese,
            Locale::Ko => Language::Korean,
            Locale::Zh => Language::SimplifiedChinese,
        }
    }
}

/// Parse a locale code. Unrecognized codes fail before any word-list
/// access happens.
impl FromStr for Locale {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            "it" => Ok(Locale::It),
            "ja" => Ok(Locale::Ja),
            "ko" => Ok(Locale::Ko),
            "zh" => Ok(Locale::Zh),
            _ => Err(CodecError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An ordered 2048-word dictionary for one locale.
///
/// Loaded once per codec construction and read-only thereafter;
/// index<->word is a bijection.
#[derive(Debug, Clone, Copy)]
pub struct WordList {
    locale: Locale,
    entries: &'static [&'static str; WORDLIST_SIZE],
}

impl WordList {
    /// Load the word list for a locale.
    ///
    /// The backing tables are fixed-size, but the 2048-entry contract is
    /// what the 11-bit codec depends on, so it is verified anyway.
    ///
    /// # Arguments
    /// * `locale` - A supported locale.
    ///
    /// # Returns
    /// `Ok(WordList)` on success, or a load error when the backing data
    /// does not contain exactly 2048 entries.
    pub fn load(locale: Locale) -> Result<Self, CodecError> {
        let entries = locale.language().word_list();
        if entries.len() != WORDLIST_SIZE {
            return Err(CodecError::WordListLoad {
                locale: locale.code().to_string(),
                got: entries.len(),
            });
        }
        Ok(WordList { locale, entries })
    }

    /// The locale this list belongs to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Look up the word at an index.
    ///
    /// Upstream 11-bit slicing keeps indices below 2048, but the bound
    /// is checked regardless.
    ///
    /// # Arguments
    /// * `index` - Word index in `[0, 2047]`.
    ///
    /// # Returns
    /// The word, or an error for an out-of-range index.
    pub fn lookup_word(&self, index: usize) -> Result<&'static str, CodecError> {
        if index >= WORDLIST_SIZE {
            return Err(CodecError::WordIndex(index));
        }
        Ok(self.entries[index])
    }

    /// Look up the index of a word (exact, case-sensitive match).
    ///
    /// This is the primary user-facing validation signal for mistyped
    /// mnemonics.
    ///
    /// # Arguments
    /// * `word` - The word to find.
    ///
    /// # Returns
    /// The index, or an unknown-word error naming the offending word.
    pub fn lookup_index(&self, word: &str) -> Result<usize, CodecError> {
        self.entries
            .iter()
            .position(|w| *w == word)
            .ok_or_else(|| CodecError::UnknownWord(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_locale_codes_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_str(locale.code()).unwrap(), locale);
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_unsupported_locale() {
        // "de" is rejected before any word-list access.
        let err = Locale::from_str("de").unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedLocale(code) if code == "de"));
        assert!(Locale::from_str("EN").is_err());
        assert!(Locale::from_str("english").is_err());
        assert!(Locale::from_str("").is_err());
    }

    #[test]
    fn test_load_all_locales() {
        for locale in Locale::ALL {
            let list = WordList::load(locale).unwrap();
            assert_eq!(list.locale(), locale);
            assert!(list.lookup_word(0).is_ok());
            assert!(list.lookup_word(WORDLIST_SIZE - 1).is_ok());
        }
    }

    #[test]
    fn test_english_known_indices() {
        let list = WordList::load(Locale::En).unwrap();
        assert_eq!(list.lookup_word(0).unwrap(), "abandon");
        assert_eq!(list.lookup_word(3).unwrap(), "about");
        assert_eq!(list.lookup_word(2047).unwrap(), "zoo");

        assert_eq!(list.lookup_index("abandon").unwrap(), 0);
        assert_eq!(list.lookup_index("zoo").unwrap(), 2047);
        assert_eq!(list.lookup_index("walnut").unwrap(), 1974);
    }

    #[test]
    fn test_lookup_word_out_of_range() {
        let list = WordList::load(Locale::En).unwrap();
        assert!(matches!(
            list.lookup_word(WORDLIST_SIZE),
            Err(CodecError::WordIndex(2048))
        ));
    }

    #[test]
    fn test_unknown_word_names_offender() {
        let list = WordList::load(Locale::En).unwrap();
        let err = list.lookup_index("zzzz").unwrap_err();
        assert!(matches!(err, CodecError::UnknownWord(word) if word == "zzzz"));

        // Case-sensitive exact match: "Zoo" is not "zoo".
        assert!(list.lookup_index("Zoo").is_err());
    }

    #[test]
    fn test_entries_are_unique() {
        for locale in Locale::ALL {
            let list = WordList::load(locale).unwrap();
            let mut seen = HashSet::new();
            for index in 0..WORDLIST_SIZE {
                assert!(
                    seen.insert(list.lookup_word(index).unwrap()),
                    "duplicate word in {} list",
                    locale
                );
            }
        }
    }

    #[test]
    fn test_index_word_bijection() {
        let list = WordList::load(Locale::Es).unwrap();
        for index in [0usize, 1, 512, 1024, 2047] {
            let word = list.lookup_word(index).unwrap();
            assert_eq!(list.lookup_index(word).unwrap(), index);
        }
    }
}
