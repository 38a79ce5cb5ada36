//! # Phrasecard
//!
//! Renders phrase/translation cards to SVG. A TOML deck lists the cards and
//! an optional theme; an SVG template marks where each value goes with
//! `{{ placeholder }}` tokens. One SVG file is written per card.
//!
//! # Pipeline
//!
//! ```text
//! cards.toml ──load──▶ ConfigDocument ──┬─▶ Theme (CLI > file > default)
//!                                       └─▶ Vec<Card>
//! template.svg + Theme + Card ──substitute──▶ clean <style> ──▶ out/<slug>.svg
//! ```
//!
//! Cards are rendered one at a time in deck order. There is no shared state
//! between cards: the same card, theme and template always produce the same
//! bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Deck loading; normalizes the three card-list shapes |
//! | [`theme`] | Eight theme attributes resolved per attribute from three layers |
//! | [`template`] | Single-pass `{{ name }}` substitution with XML escaping |
//! | [`render`] | One card → one SVG, plus `<style>` block cleanup |
//! | [`naming`] | Output file names: id slug or `output-NN` |
//! | [`settings`] | Absolute paths and overrides resolved once at startup |
//! | [`batch`] | Single-card and render-all orchestration |
//! | [`output`] | CLI line formatting (`[ok]`, `[warn]`, `[error]`) |
//! | [`ipa`] | English → IPA for the companion `text2ipa` tool |
//!
//! # Known Limitation
//!
//! Substituted values are never expanded again. A card whose `example`
//! contains `{{ ink }}` renders those characters literally; there is no way
//! to reference one field from another.

pub mod batch;
pub mod config;
pub mod ipa;
pub mod naming;
pub mod output;
pub mod render;
pub mod settings;
pub mod template;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
