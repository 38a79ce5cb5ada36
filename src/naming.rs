//! Output file naming.
//!
//! A card with a usable `id` is written to `<slug>.svg`; any other card falls
//! back to its 1-based position in the deck, zero-padded to two digits:
//!
//! - `id = "Best-Kept_Secret"` → `best-kept_secret.svg`
//! - `id = "Café Déjà Vu!"` → `caf-d-j-vu.svg`
//! - `id = "###"` (third card) → `output-03.svg`
//! - no id (twelfth card) → `output-12.svg`
//!
//! Two cards that slugify to the same name write the same file; the later
//! card wins.

use crate::config::Card;
use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("slug pattern"));

/// Extension of every rendered card.
pub const OUTPUT_EXTENSION: &str = "svg";

/// Lower-case `id`, collapse each run of characters outside `[a-z0-9_-]`
/// into one hyphen, and trim hyphens from both ends.
///
/// Returns `None` when nothing is left.
pub fn slugify(id: &str) -> Option<String> {
    let lower = id.to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');
    (!slug.is_empty()).then(|| slug.to_string())
}

/// Positional fallback stem: `output-01` for the first card.
pub fn positional_stem(position: usize) -> String {
    format!("output-{:02}", position + 1)
}

/// File name for the card at 0-based `position` in the deck.
pub fn output_file_name(card: &Card, position: usize) -> String {
    let stem = card
        .id
        .as_deref()
        .and_then(slugify)
        .unwrap_or_else(|| positional_stem(position));
    format!("{stem}.{OUTPUT_EXTENSION}")
}
