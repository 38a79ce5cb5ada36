//! Placeholder substitution.
//!
//! Templates mark insertion points with `{{name}}`. Horizontal whitespace
//! just inside the braces is allowed, so `{{phrase}}`, `{{ phrase }}` and
//! `{{\tphrase }}` are the same placeholder.
//!
//! Substitution is one scan over the template. A value is never scanned
//! again after it is inserted, so a card whose `example` contains the text
//! `{{ ink }}` renders that text literally instead of the ink color.
//! Placeholders whose name is not in the value map are left as they are.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*\}\}").expect("placeholder pattern")
});

/// Ordered `(name, raw value)` pairs to substitute.
///
/// Values are stored unescaped; [`substitute`] escapes them on the way in.
#[derive(Debug, Clone, Default)]
pub struct Values {
    entries: Vec<(String, String)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value. A later insert for the same name replaces the earlier one
    /// in place, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Escape the three XML-significant characters `&`, `<` and `>`.
///
/// Quotes are left alone: placeholders sit in text content and inside
/// attribute values the template author already quoted.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn each two-character `\n` sequence into a real line break.
///
/// TOML basic strings already understand `\n`; this handles the literal
/// backslash-n that survives in single-quoted strings or doubled escapes.
pub fn expand_line_breaks(text: &str) -> String {
    text.replace("\\n", "\n")
}

/// Replace every known placeholder in `template` with its escaped value.
pub fn substitute(template: &str, values: &Values) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => escape_xml(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names in `template`, in order of first appearance.
pub fn placeholders_in(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
