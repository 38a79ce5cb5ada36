//! Shared test utilities for the phrasecard test suite.
//!
//! Builds throwaway deck directories (config + template) and inspects what a
//! run wrote.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_deck(&[card(None, "hello", "hola")]);
//! // ... run against tmp.path() ...
//! assert_eq!(output_files(tmp.path()), vec!["output-01.svg"]);
//! ```

use crate::config::Card;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    for entry in fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
        }
    }
    tmp
}

/// A deck directory holding `cards.toml` with `cards` and a small template
/// that uses every placeholder.
pub fn setup_deck(cards: &[Card]) -> TempDir {
    #[derive(Serialize)]
    struct Deck<'a> {
        card: &'a [Card],
    }

    let tmp = TempDir::new().unwrap();
    let toml = toml::to_string(&Deck { card: cards }).unwrap();
    fs::write(tmp.path().join("cards.toml"), toml).unwrap();
    fs::write(tmp.path().join("template.svg"), MINI_TEMPLATE).unwrap();
    tmp
}

pub const MINI_TEMPLATE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
<style>
  text { fill: {{ ink }}; font-family: {{ bodyFont }}; }
  .brand { font-family: {{ brandFont }}; }
  .mono { font-family: {{ monoFont }}; }
</style>
<rect fill="{{ bg }}" stroke="{{ rule }}"/>
<text class="brand" fill="{{ accent }}">{{ phrase }}</text>
<text>{{ translation }}</text>
<text class="mono" fill="{{ muted }}">{{ pronunciation }} {{ part_of_speech }}</text>
<text>{{ example }}</text>
<text>{{ signature }} {{ url }} {{ timestamp }} {{ id }}</text>
</svg>
"#;

/// Build a card with the two required fields and an optional id.
pub fn card(id: Option<&str>, phrase: &str, translation: &str) -> Card {
    Card {
        id: id.map(str::to_string),
        phrase: Some(phrase.to_string()),
        translation: Some(translation.to_string()),
        ..Default::default()
    }
}

// =========================================================================
// Output inspection
// =========================================================================

/// Sorted file names under `<root>/out`. Empty if the directory is missing.
pub fn output_files(root: &Path) -> Vec<String> {
    let out = root.join("out");
    let Ok(entries) = fs::read_dir(&out) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
