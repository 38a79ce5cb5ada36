//! English → IPA transcription for the `pronunciation` field.
//!
//! Conversion tries two methods in order:
//!
//! 1. **Primary**: an IPA lexicon ([`IpaLexicon`]). Used only when it knows
//!    every word of the phrase, so a result is never half lexicon, half
//!    guess.
//! 2. **Fallback**: a CMUdict ([`CmuDict`]), word by word through the
//!    ARPAbet table. Unknown words are kept as written.
//!
//! Words are joined with a configurable separator. The result is meant to
//! be pasted into a deck's `pronunciation` field by hand; nothing links the
//! two tools.

pub mod arpabet;
pub mod backend;
pub mod lexicon;

pub use backend::Transcriber;
pub use lexicon::{CmuDict, IpaLexicon};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpaError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no fallback dictionary available and the primary method had no result for '{phrase}'")]
    NoFallback { phrase: String },
}

/// Which method produced a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Input was blank; nothing to convert.
    Empty,
    Primary,
    Fallback,
}

/// One converted phrase plus the lookup trace for `--debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub ipa: String,
    pub method: Method,
    pub trace: Vec<String>,
}

/// Lower-case a word and trim surrounding punctuation, keeping apostrophes
/// (`"Don't,"` → `don't`).
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

/// Primary → fallback transcription of whole phrases.
pub struct Converter<'a> {
    primary: Option<&'a dyn Transcriber>,
    fallback: Option<&'a dyn Transcriber>,
    separator: String,
}

impl<'a> Converter<'a> {
    pub fn new(
        primary: Option<&'a dyn Transcriber>,
        fallback: Option<&'a dyn Transcriber>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            primary,
            fallback,
            separator: separator.into(),
        }
    }

    pub fn convert(&self, text: &str) -> Result<Conversion, IpaError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut trace = Vec::new();
        if words.is_empty() {
            return Ok(Conversion {
                ipa: String::new(),
                method: Method::Empty,
                trace,
            });
        }

        if let Some(primary) = self.primary {
            let found: Option<Vec<String>> = words
                .iter()
                .map(|w| primary.word(&normalize_word(w)))
                .collect();
            match found {
                Some(ipa) => {
                    trace.push(format!("{}: {}", primary.name(), ipa.join(" ")));
                    return Ok(Conversion {
                        ipa: ipa.join(&self.separator),
                        method: Method::Primary,
                        trace,
                    });
                }
                None => trace.push(format!(
                    "{}: no result, trying fallback",
                    primary.name()
                )),
            }
        }

        let fallback = self.fallback.ok_or_else(|| IpaError::NoFallback {
            phrase: text.trim().to_string(),
        })?;

        let mut out = Vec::with_capacity(words.len());
        for word in words {
            match fallback.word(&normalize_word(word)) {
                Some(ipa) => {
                    trace.push(format!("{} → {}", word, ipa));
                    out.push(ipa);
                }
                None => {
                    trace.push(format!("{} → (unknown, kept)", word));
                    out.push(word.to_string());
                }
            }
        }

        Ok(Conversion {
            ipa: out.join(&self.separator),
            method: Method::Fallback,
            trace,
        })
    }
}
