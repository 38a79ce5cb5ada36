//! Batch orchestration.
//!
//! Loads the deck, resolves the theme, and renders either one selected card
//! or every card.
//!
//! ## Single Card
//!
//! `--index N` renders exactly one card. Everything that can go wrong is
//! fatal: an index past the end, a card missing `phrase` or `translation`,
//! an unreadable template, an unwritable destination.
//!
//! ## Every Card
//!
//! Without `--index` the whole deck is rendered in order, best effort:
//!
//! - a card missing a required field is skipped with a warning
//! - a card that fails to render is reported and the batch moves on
//! - the run fails only if no card was written at all
//!
//! Progress is reported through [`BatchEvent`]s so the caller decides how to
//! display it (see [`crate::output::format_batch_event`]).

use crate::config::{self, Card, ConfigDocument, ConfigError, RequiredField};
use crate::naming;
use crate::render::{self, RenderError};
use crate::settings::{Selection, Settings};
use crate::theme::Theme;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no cards found in {}", .path.display())]
    NoCards { path: PathBuf },
    #[error("index {index} is out of range: deck has {count} card(s), valid indexes are 0..{count}")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("card {position} is missing required field '{}'", .field.name())]
    MissingField {
        position: usize,
        field: RequiredField,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("none of {attempted} card(s) rendered successfully")]
    NothingRendered { attempted: usize },
}

/// Progress of a batch, one event per card.
#[derive(Debug)]
pub enum BatchEvent {
    Skipped {
        position: usize,
        field: RequiredField,
    },
    Written {
        position: usize,
        path: PathBuf,
    },
    Failed {
        position: usize,
        path: PathBuf,
        error: RenderError,
    },
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Destination of every card written, in deck order.
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    pub failed: usize,
}

/// What would happen to one card, without rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCard {
    pub position: usize,
    pub dest: PathBuf,
    /// `Some` when the card would be skipped.
    pub missing: Option<RequiredField>,
}

/// Work out destination and validity for every card in the deck.
pub fn plan(cards: &[Card], out_dir: &Path) -> Vec<PlannedCard> {
    cards
        .iter()
        .enumerate()
        .map(|(position, card)| PlannedCard {
            position,
            dest: out_dir.join(naming::output_file_name(card, position)),
            missing: card.missing_field(),
        })
        .collect()
}

/// Load the deck named in `settings`, failing if it holds no cards.
pub fn load_deck(settings: &Settings) -> Result<ConfigDocument, BatchError> {
    let doc = config::load_config(&settings.paths.config)?;
    if doc.cards.is_empty() {
        return Err(BatchError::NoCards {
            path: settings.paths.config.clone(),
        });
    }
    Ok(doc)
}

/// Run a full invocation: load, resolve the theme, render the selection.
pub fn run(
    settings: &Settings,
    on_event: impl FnMut(BatchEvent),
) -> Result<BatchReport, BatchError> {
    let doc = load_deck(settings)?;
    let theme = Theme::resolve(doc.theme.as_ref(), Some(&settings.theme_overrides));
    match settings.selection {
        Selection::One(index) => render_one(settings, &doc.cards, &theme, index, on_event),
        Selection::All => render_all(settings, &doc.cards, &theme, on_event),
    }
}

/// Render the card at `index`. Any failure aborts.
pub fn render_one(
    settings: &Settings,
    cards: &[Card],
    theme: &Theme,
    index: usize,
    mut on_event: impl FnMut(BatchEvent),
) -> Result<BatchReport, BatchError> {
    let card = cards.get(index).ok_or(BatchError::IndexOutOfRange {
        index,
        count: cards.len(),
    })?;
    if let Some(field) = card.missing_field() {
        return Err(BatchError::MissingField {
            position: index,
            field,
        });
    }

    let dest = settings
        .paths
        .out_dir
        .join(naming::output_file_name(card, index));
    let path = render::render_card(&settings.paths.template, theme, card, &dest)?;
    on_event(BatchEvent::Written {
        position: index,
        path: path.clone(),
    });

    Ok(BatchReport {
        written: vec![path],
        ..Default::default()
    })
}

/// Render every valid card, continuing past individual failures.
pub fn render_all(
    settings: &Settings,
    cards: &[Card],
    theme: &Theme,
    mut on_event: impl FnMut(BatchEvent),
) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();

    for planned in plan(cards, &settings.paths.out_dir) {
        let position = planned.position;
        if let Some(field) = planned.missing {
            report.skipped += 1;
            on_event(BatchEvent::Skipped { position, field });
            continue;
        }

        let card = &cards[position];
        match render::render_card(&settings.paths.template, theme, card, &planned.dest) {
            Ok(path) => {
                report.written.push(path.clone());
                on_event(BatchEvent::Written { position, path });
            }
            Err(error) => {
                report.failed += 1;
                on_event(BatchEvent::Failed {
                    position,
                    path: planned.dest,
                    error,
                });
            }
        }
    }

    if report.written.is_empty() {
        return Err(BatchError::NothingRendered {
            attempted: cards.len(),
        });
    }
    Ok(report)
}
