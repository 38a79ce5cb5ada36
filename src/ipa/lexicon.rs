//! Pronunciation dictionaries.
//!
//! Two plain-text formats are supported, one per conversion method:
//!
//! ```text
//! # IpaLexicon: word, whitespace, IPA (slashes and alternates allowed)
//! secret	/ˈsikɹɪt/, /ˈsikɹət/
//! kept	kɛpt
//!
//! ;;; CmuDict: CMUdict upper-case word, two spaces, ARPAbet phones
//! SECRET  S IY1 K R AH0 T
//! SECRET(1)  S IY1 K R IH0 T
//! ```
//!
//! Lookups are case-insensitive. The first entry for a word wins; CMUdict
//! alternates (`WORD(1)`) are ignored.

use super::arpabet;
use super::backend::Transcriber;
use super::IpaError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

fn read_dictionary(path: &Path) -> Result<String, IpaError> {
    fs::read_to_string(path).map_err(|source| IpaError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Word → IPA dictionary used by the primary method.
#[derive(Debug, Clone, Default)]
pub struct IpaLexicon {
    entries: HashMap<String, String>,
}

impl IpaLexicon {
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, rest)) = line.split_once(char::is_whitespace) else {
                continue;
            };
            let ipa = rest
                .split(',')
                .next()
                .unwrap_or("")
                .trim()
                .trim_matches('/')
                .trim();
            if ipa.is_empty() {
                continue;
            }
            entries
                .entry(word.to_lowercase())
                .or_insert_with(|| ipa.to_string());
        }
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, IpaError> {
        Ok(Self::parse(&read_dictionary(path)?))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Transcriber for IpaLexicon {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn word(&self, word: &str) -> Option<String> {
        self.entries.get(&word.to_lowercase()).cloned()
    }
}

/// CMUdict-format ARPAbet dictionary used by the fallback method.
#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDict {
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            if line.starts_with(";;;") {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            if word.ends_with(')') && word.contains('(') {
                continue;
            }
            let phones: Vec<String> = parts.map(str::to_string).collect();
            if phones.is_empty() {
                continue;
            }
            entries.entry(word.to_lowercase()).or_insert(phones);
        }
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self, IpaError> {
        Ok(Self::parse(&read_dictionary(path)?))
    }

    /// ARPAbet phones for `word`, stress digits included.
    pub fn phones(&self, word: &str) -> Option<&[String]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Transcriber for CmuDict {
    fn name(&self) -> &'static str {
        "cmudict"
    }

    fn word(&self, word: &str) -> Option<String> {
        self.phones(word)
            .map(|phones| arpabet::phones_to_ipa(phones.iter().map(String::as_str)))
    }
}
