//! Theme resolution.
//!
//! A card's look is controlled by eight attributes: five colors and three
//! font stacks. Each attribute is resolved on its own from up to three layers:
//!
//! ```text
//! 1. command line     --accent '#ff6a00'
//! 2. config file      [theme] accent = "#e8b04b"
//! 3. built-in         ThemeKey::default_value()
//! ```
//!
//! The first layer that sets an attribute wins. A config file that only sets
//! `bg` keeps the built-in defaults for the other seven. Values are opaque
//! strings: `#fff`, `rgb(0 0 0)` and `'Inter', sans-serif` are all passed
//! through to the template untouched.

use serde::{Deserialize, Serialize};

/// One of the eight theme attributes.
///
/// The placeholder name doubles as the command-line flag and the preferred
/// config key (`brandFont`, not `brand_font`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeKey {
    Bg,
    Ink,
    Muted,
    Accent,
    Rule,
    BrandFont,
    BodyFont,
    MonoFont,
}

impl ThemeKey {
    /// Every attribute, in placeholder substitution order.
    pub const ALL: [ThemeKey; 8] = [
        ThemeKey::Bg,
        ThemeKey::Ink,
        ThemeKey::Muted,
        ThemeKey::Accent,
        ThemeKey::Rule,
        ThemeKey::BrandFont,
        ThemeKey::BodyFont,
        ThemeKey::MonoFont,
    ];

    /// Placeholder name used in templates, e.g. `{{ brandFont }}`.
    pub fn name(self) -> &'static str {
        match self {
            ThemeKey::Bg => "bg",
            ThemeKey::Ink => "ink",
            ThemeKey::Muted => "muted",
            ThemeKey::Accent => "accent",
            ThemeKey::Rule => "rule",
            ThemeKey::BrandFont => "brandFont",
            ThemeKey::BodyFont => "bodyFont",
            ThemeKey::MonoFont => "monoFont",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            ThemeKey::Bg => "#0f1115",
            ThemeKey::Ink => "#f4f1ea",
            ThemeKey::Muted => "#9aa0a6",
            ThemeKey::Accent => "#e8b04b",
            ThemeKey::Rule => "#2a2e35",
            ThemeKey::BrandFont => "'Space Grotesk', 'Helvetica Neue', Arial, sans-serif",
            ThemeKey::BodyFont => "'Inter', 'Helvetica Neue', Arial, sans-serif",
            ThemeKey::MonoFont => "'JetBrains Mono', 'SFMono-Regular', Menlo, monospace",
        }
    }
}

/// A partial theme: any subset of the eight attributes.
///
/// Used for both the `[theme]` table of the config file and the set of
/// command-line overrides. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(
        rename = "brandFont",
        alias = "brand_font",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_font: Option<String>,
    #[serde(
        rename = "bodyFont",
        alias = "body_font",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_font: Option<String>,
    #[serde(
        rename = "monoFont",
        alias = "mono_font",
        skip_serializing_if = "Option::is_none"
    )]
    pub mono_font: Option<String>,
}

impl ThemeLayer {
    pub fn get(&self, key: ThemeKey) -> Option<&str> {
        let slot = match key {
            ThemeKey::Bg => &self.bg,
            ThemeKey::Ink => &self.ink,
            ThemeKey::Muted => &self.muted,
            ThemeKey::Accent => &self.accent,
            ThemeKey::Rule => &self.rule,
            ThemeKey::BrandFont => &self.brand_font,
            ThemeKey::BodyFont => &self.body_font,
            ThemeKey::MonoFont => &self.mono_font,
        };
        slot.as_deref()
    }
}

/// A fully resolved theme. Every attribute has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg: String,
    pub ink: String,
    pub muted: String,
    pub accent: String,
    pub rule: String,
    pub brand_font: String,
    pub body_font: String,
    pub mono_font: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::resolve(None, None)
    }
}

impl Theme {
    /// Resolve every attribute as CLI override → config value → default.
    pub fn resolve(config: Option<&ThemeLayer>, cli: Option<&ThemeLayer>) -> Self {
        // Highest priority first.
        let layers = [cli, config];
        let pick = |key: ThemeKey| {
            first_set(layers.iter().map(|l| l.and_then(|l| l.get(key))))
                .unwrap_or_else(|| key.default_value())
                .to_string()
        };
        Self {
            bg: pick(ThemeKey::Bg),
            ink: pick(ThemeKey::Ink),
            muted: pick(ThemeKey::Muted),
            accent: pick(ThemeKey::Accent),
            rule: pick(ThemeKey::Rule),
            brand_font: pick(ThemeKey::BrandFont),
            body_font: pick(ThemeKey::BodyFont),
            mono_font: pick(ThemeKey::MonoFont),
        }
    }

    pub fn get(&self, key: ThemeKey) -> &str {
        match key {
            ThemeKey::Bg => &self.bg,
            ThemeKey::Ink => &self.ink,
            ThemeKey::Muted => &self.muted,
            ThemeKey::Accent => &self.accent,
            ThemeKey::Rule => &self.rule,
            ThemeKey::BrandFont => &self.brand_font,
            ThemeKey::BodyFont => &self.body_font,
            ThemeKey::MonoFont => &self.mono_font,
        }
    }

    /// `(placeholder name, value)` pairs in substitution order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        ThemeKey::ALL.into_iter().map(|k| (k.name(), self.get(k)))
    }
}

/// Ordered fallback: the first candidate that is set.
///
/// Candidates are given highest priority first. An empty string counts as
/// set; only a missing value falls through.
pub fn first_set<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().next()
}
