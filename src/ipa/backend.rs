//! Transcription backend trait.
//!
//! A [`Transcriber`] answers one question: what is the IPA for this word?
//! [`Converter`](super::Converter) strings two of them together, primary
//! then fallback, and never needs to know which dictionary format is behind
//! either.

/// Word-level IPA lookup.
pub trait Transcriber {
    /// Short label for debug output.
    fn name(&self) -> &'static str;

    /// IPA for one normalized (lower-case, punctuation-trimmed) word, or
    /// `None` when the word is unknown.
    fn word(&self, word: &str) -> Option<String>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Fixed word list for converter tests.
    #[derive(Default)]
    pub struct MockTranscriber {
        pub words: HashMap<String, String>,
    }

    impl MockTranscriber {
        pub fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                words: pairs
                    .iter()
                    .map(|(w, ipa)| (w.to_string(), ipa.to_string()))
                    .collect(),
            }
        }
    }

    impl Transcriber for MockTranscriber {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn word(&self, word: &str) -> Option<String> {
            self.words.get(word).cloned()
        }
    }
}
