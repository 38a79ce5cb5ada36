//! Deck configuration module.
//!
//! Loads the TOML document that holds an optional theme and the list of
//! cards to render.
//!
//! ## File Format
//!
//! ```toml
//! [theme]                  # optional, any subset of the eight attributes
//! bg = "#0f1115"
//! accent = "#e8b04b"
//! brandFont = "'Space Grotesk', sans-serif"
//!
//! [[card]]                 # one table per card
//! id = "best-kept-secret"
//! phrase = "best kept secret"
//! translation = "el secreto mejor guardado"
//! pronunciation = "bɛst kɛpt ˈsikɹɪt"
//! part_of_speech = "noun phrase"
//! example = "The beach is the town's best kept secret."
//! ```
//!
//! The card list may also be a single `[card]` table, or the legacy
//! `cards = [ {...}, ... ]` array. All three shapes normalize to one ordered
//! `Vec<Card>` at load time. When the legacy array is present and non-empty
//! it wins; the two sources are never merged.
//!
//! Unknown keys are rejected to catch typos early, and the error names the
//! key. Bare numbers and dates in card fields are kept as text, so
//! `id = 7` and `timestamp = 2024-05-01` both load.

use crate::theme::{ThemeKey, ThemeLayer};
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// One phrase/translation entry.
///
/// Only `phrase` and `translation` are required for rendering, and even
/// those are checked by the caller right before rendering rather than at
/// parse time, so one bad card does not prevent loading the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Card {
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The two required card fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Phrase,
    Translation,
}

impl RequiredField {
    pub fn name(self) -> &'static str {
        match self {
            RequiredField::Phrase => "phrase",
            RequiredField::Translation => "translation",
        }
    }
}

impl Card {
    /// The first required field that is absent or blank, if any.
    pub fn missing_field(&self) -> Option<RequiredField> {
        let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
        if blank(&self.phrase) {
            Some(RequiredField::Phrase)
        } else if blank(&self.translation) {
            Some(RequiredField::Translation)
        } else {
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    theme: Option<ThemeLayer>,
    #[serde(default, deserialize_with = "one_or_many")]
    card: Vec<Card>,
    #[serde(default)]
    cards: Vec<Card>,
}

/// `card` holds either one table or an array of tables.
///
/// Branching on the TOML shape keeps serde's own field errors
/// (``unknown field `translaton` ``) intact.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CardsVisitor;

    impl<'de> Visitor<'de> for CardsVisitor {
        type Value = Vec<Card>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a card table or an array of card tables")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut cards = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(card) = seq.next_element()? {
                cards.push(card);
            }
            Ok(cards)
        }

        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            Card::deserialize(MapAccessDeserializer::new(map)).map(|card| vec![card])
        }
    }

    deserializer.deserialize_any(CardsVisitor)
}

/// Card fields are text, but bare TOML numbers, booleans and dates
/// (`id = 7`, `timestamp = 2024-05-01`) are taken as written.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => s,
        toml::Value::Integer(n) => n.to_string(),
        toml::Value::Float(n) => n.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(d) => d.to_string(),
        other => {
            return Err(de::Error::custom(format!(
                "expected text, found {}",
                other.type_str()
            )));
        }
    };
    Ok(Some(text))
}

/// A loaded deck: optional theme plus cards in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    pub theme: Option<ThemeLayer>,
    pub cards: Vec<Card>,
}

/// Parse a config document from TOML text. `path` is used for diagnostics only.
pub fn parse_config(content: &str, path: &Path) -> Result<ConfigDocument, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let cards = if raw.cards.is_empty() {
        raw.card
    } else {
        raw.cards
    };

    Ok(ConfigDocument {
        theme: raw.theme,
        cards,
    })
}

/// Load a config document from a file.
pub fn load_config(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Returns a fully-commented stock config with every theme default and a
/// sample card.
///
/// Used by `--gen-config`.
pub fn stock_config_toml() -> String {
    let mut out = String::from(
        "# Phrasecard deck\n\
         # ==============\n\
         # The [theme] table is optional; every key in it is optional too.\n\
         # Values shown are the built-in defaults. Command-line flags of the\n\
         # same name (--bg, --brandFont, ...) override anything set here.\n\
         \n\
         [theme]\n",
    );
    for key in ThemeKey::ALL {
        out.push_str(&format!("{} = {:?}\n", key.name(), key.default_value()));
    }
    out.push_str(
        "\n\
         # One [[card]] table per card, rendered in order.\n\
         # phrase and translation are required; everything else is optional.\n\
         # Write \\n inside translation or example for a line break.\n\
         # The id names the output file (best-kept-secret.svg); without it\n\
         # the card's position is used (output-01.svg).\n\
         [[card]]\n\
         id = \"best-kept-secret\"\n\
         phrase = \"best kept secret\"\n\
         translation = \"el secreto mejor guardado\"\n\
         pronunciation = \"bɛst kɛpt ˈsikɹɪt\"\n\
         part_of_speech = \"noun phrase\"\n\
         example = \"The beach is the town's best kept secret.\"\n\
         # signature = \"@you\"\n\
         # url = \"https://example.com\"\n\
         # timestamp = \"2024-05-01\"\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tempfile::TempDir;

    fn parse(text: &str) -> ConfigDocument {
        parse_config(text, Path::new("cards.toml")).unwrap()
    }

    fn phrases(doc: &ConfigDocument) -> Vec<&str> {
        doc.cards
            .iter()
            .map(|c| c.phrase.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn single_card_table() {
        let doc = parse(
            r#"
[card]
phrase = "hello"
translation = "hola"
"#,
        );
        assert_eq!(phrases(&doc), vec!["hello"]);
        assert_eq!(doc.cards[0].translation.as_deref(), Some("hola"));
        assert!(doc.theme.is_none());
    }

    #[test]
    fn array_of_card_tables_keeps_order() {
        let doc = parse(
            r#"
[[card]]
phrase = "one"
translation = "uno"

[[card]]
phrase = "two"
translation = "dos"

[[card]]
phrase = "three"
translation = "tres"
"#,
        );
        assert_eq!(phrases(&doc), vec!["one", "two", "three"]);
    }

    #[test]
    fn legacy_cards_array() {
        let doc = parse(
            r#"
cards = [
  { phrase = "a", translation = "x" },
  { phrase = "b", translation = "y" },
]
"#,
        );
        assert_eq!(phrases(&doc), vec!["a", "b"]);
    }

    #[test]
    fn legacy_cards_win_and_are_not_merged() {
        let doc = parse(
            r#"
cards = [{ phrase = "legacy", translation = "x" }]

[[card]]
phrase = "modern"
translation = "y"
"#,
        );
        assert_eq!(phrases(&doc), vec!["legacy"]);
    }

    #[test]
    fn empty_legacy_array_falls_through_to_card() {
        let doc = parse(
            r#"
cards = []

[card]
phrase = "modern"
translation = "y"
"#,
        );
        assert_eq!(phrases(&doc), vec!["modern"]);
    }

    #[test]
    fn empty_card_array_is_zero_cards() {
        let doc = parse("card = []\n");
        assert!(doc.cards.is_empty());
    }

    #[test]
    fn no_cards_is_not_a_parse_error() {
        let doc = parse("[theme]\nbg = \"#000\"\n");
        assert!(doc.cards.is_empty());
        assert_eq!(doc.theme.unwrap().bg.as_deref(), Some("#000"));
    }

    #[test]
    fn optional_card_fields() {
        let doc = parse(
            r#"
[card]
id = "x-1"
phrase = "p"
translation = "t"
pronunciation = "pʰ"
part_of_speech = "noun"
example = "e"
signature = "s"
url = "https://example.com"
timestamp = "2024-01-01"
"#,
        );
        let card = &doc.cards[0];
        assert_eq!(card.id.as_deref(), Some("x-1"));
        assert_eq!(card.pronunciation.as_deref(), Some("pʰ"));
        assert_eq!(card.part_of_speech.as_deref(), Some("noun"));
        assert_eq!(card.timestamp.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn unknown_card_key_rejected() {
        let result = parse_config(
            "[card]\nphrase = \"p\"\ntranslaton = \"t\"\n",
            Path::new("cards.toml"),
        );
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_card_key_error_names_the_key() {
        let err = parse_config(
            "[card]\nphrase = \"p\"\ntranslaton = \"t\"\n",
            Path::new("cards.toml"),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown field `translaton`"), "{message}");
        assert!(!message.contains("untagged"), "{message}");
    }

    #[test]
    fn extra_key_in_card_array_error_names_the_key() {
        let err = parse_config(
            r#"
[[card]]
phrase = "a"
translation = "b"

[[card]]
phrase = "c"
translation = "d"
notes = "draft"
"#,
            Path::new("cards.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("unknown field `notes`"), "{err}");
    }

    #[test]
    fn integer_id_is_read_as_text() {
        let doc = parse("[[card]]\nid = 7\nphrase = \"a\"\ntranslation = \"b\"\n");
        assert_eq!(doc.cards[0].id.as_deref(), Some("7"));
    }

    #[test]
    fn native_date_timestamp_is_read_as_text() {
        let doc = parse(
            "[[card]]\nphrase = \"a\"\ntranslation = \"b\"\ntimestamp = 2024-05-01\n",
        );
        assert_eq!(doc.cards[0].timestamp.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn table_valued_card_field_is_parse_error() {
        let result = parse_config(
            "[card]\nphrase = { text = \"a\" }\ntranslation = \"b\"\n",
            Path::new("cards.toml"),
        );
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let result = parse_config("[colors]\nbg = \"#000\"\n", Path::new("cards.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn malformed_toml_is_parse_error_with_path() {
        let err = parse_config("this is not [[[ toml", Path::new("deck.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("deck.toml"));
    }

    #[test]
    fn load_config_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cards.toml");
        fs::write(&path, "[card]\nphrase = \"p\"\ntranslation = \"t\"\n").unwrap();
        let doc = load_config(&path).unwrap();
        assert_eq!(doc.cards.len(), 1);
    }

    #[test]
    fn missing_field_checks_phrase_then_translation() {
        let card = Card::default();
        assert_eq!(card.missing_field(), Some(RequiredField::Phrase));

        let card = Card {
            phrase: Some("p".into()),
            translation: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(card.missing_field(), Some(RequiredField::Translation));

        let card = Card {
            phrase: Some("p".into()),
            translation: Some("t".into()),
            ..Default::default()
        };
        assert_eq!(card.missing_field(), None);
    }

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let doc = parse(&stock_config_toml());
        let theme = Theme::resolve(doc.theme.as_ref(), None);
        assert_eq!(theme, Theme::default());
        for key in ThemeKey::ALL {
            assert_eq!(doc.theme.as_ref().unwrap().get(key), Some(key.default_value()));
        }
        assert_eq!(doc.cards.len(), 1);
        assert_eq!(doc.cards[0].missing_field(), None);
    }
}
