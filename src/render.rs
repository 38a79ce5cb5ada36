//! Card rendering.
//!
//! Fills the template for one card and writes the finished SVG.
//!
//! ## Placeholder Keys
//!
//! | Source | Keys |
//! |--------|------|
//! | Theme  | `bg` `ink` `muted` `accent` `rule` `brandFont` `bodyFont` `monoFont` |
//! | Card   | `id` `phrase` `translation` `pronunciation` `part_of_speech` `example` `signature` `url` `timestamp` |
//!
//! Missing optional card fields render as empty strings. In `translation`
//! and `example` a literal `\n` becomes a line break before escaping.
//!
//! ## Style Cleanup
//!
//! Emptied placeholders leave ragged CSS behind (`font-family:  ;`, stray
//! blank lines). After substitution the contents of every `<style>` block
//! are tidied:
//!
//! 1. whitespace before a `;` that ends a line (or the block) is dropped
//! 2. a `;` followed by a blank line keeps a single line break
//! 3. three or more blank lines in a row shrink to one
//!
//! Text outside `<style>` blocks is never touched.

use crate::config::Card;
use crate::template::{self, Values};
use crate::theme::{Theme, ThemeKey};
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot read template {} for {}: {source}", .path.display(), .dest.display())]
    ReadTemplate {
        path: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(<style\b[^>]*>)(.*?)(</style\s*>)").expect("style block pattern")
});
static SPACE_BEFORE_SEMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+;(\r?\n|\}|$)").expect("semicolon pattern"));
static SEMI_BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";[ \t]*\r?\n[ \t]*\r?\n").expect("blank line pattern"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n){3,}").expect("blank run pattern"));

/// Card placeholder names, in substitution order.
pub const CARD_KEYS: [&str; 9] = [
    "id",
    "phrase",
    "translation",
    "pronunciation",
    "part_of_speech",
    "example",
    "signature",
    "url",
    "timestamp",
];

/// Every placeholder name a render fills: theme keys, then card keys.
pub fn placeholder_names() -> Vec<&'static str> {
    ThemeKey::ALL
        .iter()
        .map(|k| k.name())
        .chain(CARD_KEYS)
        .collect()
}

/// Build the full value map for one card: theme keys first, then card keys.
pub fn card_values(theme: &Theme, card: &Card) -> Values {
    let mut values = Values::new();
    for (name, value) in theme.entries() {
        values.insert(name, value);
    }

    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    let multiline = |v: &Option<String>| template::expand_line_breaks(v.as_deref().unwrap_or(""));

    values.insert("id", field(&card.id));
    values.insert("phrase", field(&card.phrase));
    values.insert("translation", multiline(&card.translation));
    values.insert("pronunciation", field(&card.pronunciation));
    values.insert("part_of_speech", field(&card.part_of_speech));
    values.insert("example", multiline(&card.example));
    values.insert("signature", field(&card.signature));
    values.insert("url", field(&card.url));
    values.insert("timestamp", field(&card.timestamp));
    values
}

/// Tidy the inside of every `<style>` block.
pub fn clean_style_blocks(document: &str) -> String {
    STYLE_BLOCK
        .replace_all(document, |caps: &Captures| {
            format!("{}{}{}", &caps[1], clean_css(&caps[2]), &caps[3])
        })
        .into_owned()
}

fn clean_css(css: &str) -> String {
    let css = SPACE_BEFORE_SEMI.replace_all(css, ";$1");
    let css = SEMI_BLANK_LINE.replace_all(&css, ";\n");
    BLANK_RUN.replace_all(&css, "\n\n").into_owned()
}

/// Produce the finished document for one card without touching the disk.
pub fn render_document(template: &str, theme: &Theme, card: &Card) -> String {
    let filled = template::substitute(template, &card_values(theme, card));
    clean_style_blocks(&filled)
}

/// Render one card from the template at `template_path` into `dest`.
///
/// Missing parent directories of `dest` are created. Returns `dest`.
pub fn render_card(
    template_path: &Path,
    theme: &Theme,
    card: &Card,
    dest: &Path,
) -> Result<PathBuf, RenderError> {
    let template =
        fs::read_to_string(template_path).map_err(|source| RenderError::ReadTemplate {
            path: template_path.to_path_buf(),
            dest: dest.to_path_buf(),
            source,
        })?;

    let document = render_document(&template, theme, card);

    let write_err = |source| RenderError::Write {
        path: dest.to_path_buf(),
        source,
    };
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(dest, document).map_err(write_err)?;
    Ok(dest.to_path_buf())
}
