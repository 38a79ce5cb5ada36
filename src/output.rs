//! CLI output formatting.
//!
//! Every line the tool prints is built here. Lines carry a severity tag so
//! they stay readable when stdout and stderr are interleaved:
//!
//! ```text
//! [ok] 001 → out/best-kept-secret.svg
//! [warn] 002 skipped: missing required field 'translation'
//! [error] 003 failed → out/output-03.svg: cannot write ...
//! Rendered 1 of 3 cards (1 skipped, 1 failed)
//! ```
//!
//! `format_*` functions are pure and return the lines; `print_*` wrappers
//! send them to stdout (`[ok]`, summaries, listings) or stderr (`[warn]`,
//! `[error]`). Positions are shown 1-based, like the positional file names.

use crate::batch::{BatchEvent, BatchReport, PlannedCard};
use crate::config::Card;
use std::path::Path;

/// Where a line belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

fn format_index(position: usize) -> String {
    format!("{:0>3}", position + 1)
}

/// Show `path` relative to `base` when it lives under it.
fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn error_line(message: &str) -> String {
    format!("[error] {message}")
}

pub fn warn_line(message: &str) -> String {
    format!("[warn] {message}")
}

/// Format one batch event. `base` shortens written paths for display.
pub fn format_batch_event(event: &BatchEvent, base: Option<&Path>) -> (Stream, String) {
    match event {
        BatchEvent::Written { position, path } => (
            Stream::Stdout,
            format!(
                "[ok] {} → {}",
                format_index(*position),
                display_path(path, base)
            ),
        ),
        BatchEvent::Skipped { position, field } => (
            Stream::Stderr,
            warn_line(&format!(
                "{} skipped: missing required field '{}'",
                format_index(*position),
                field.name()
            )),
        ),
        BatchEvent::Failed {
            position,
            path,
            error,
        } => (
            Stream::Stderr,
            error_line(&format!(
                "{} failed → {}: {error}",
                format_index(*position),
                display_path(path, base)
            )),
        ),
    }
}

/// Closing line for a render-all run.
pub fn format_summary(report: &BatchReport, total: usize) -> String {
    let mut details = Vec::new();
    if report.skipped > 0 {
        details.push(format!("{} skipped", report.skipped));
    }
    if report.failed > 0 {
        details.push(format!("{} failed", report.failed));
    }
    let noun = if total == 1 { "card" } else { "cards" };
    if details.is_empty() {
        format!("Rendered {} of {} {}", report.written.len(), total, noun)
    } else {
        format!(
            "Rendered {} of {} {} ({})",
            report.written.len(),
            total,
            noun,
            details.join(", ")
        )
    }
}

/// Deck listing for `--list`: one header line per card plus unfilled
/// template placeholders, if any.
pub fn format_listing(
    cards: &[Card],
    planned: &[PlannedCard],
    unknown_placeholders: &[String],
    base: Option<&Path>,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Cards".to_string());
    for (card, plan) in cards.iter().zip(planned) {
        let phrase = card.phrase.as_deref().unwrap_or("").trim();
        let title = if phrase.is_empty() { "(no phrase)" } else { phrase };
        lines.push(format!("{} {}", format_index(plan.position), title));
        match plan.missing {
            Some(field) => lines.push(format!("    Skip: missing '{}'", field.name())),
            None => lines.push(format!("    Output: {}", display_path(&plan.dest, base))),
        }
    }
    if !unknown_placeholders.is_empty() {
        lines.push(String::new());
        lines.push("Unfilled placeholders".to_string());
        for name in unknown_placeholders {
            lines.push(format!("    {{{{ {name} }}}}"));
        }
    }
    lines
}

pub fn print_line(stream: Stream, line: &str) {
    match stream {
        Stream::Stdout => println!("{line}"),
        Stream::Stderr => eprintln!("{line}"),
    }
}

pub fn print_batch_event(event: &BatchEvent, base: Option<&Path>) {
    let (stream, line) = format_batch_event(event, base);
    print_line(stream, &line);
}

pub fn print_error(message: &str) {
    eprintln!("{}", error_line(message));
}

pub fn print_warn(message: &str) {
    eprintln!("{}", warn_line(message));
}
