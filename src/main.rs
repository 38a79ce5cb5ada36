use clap::Parser;
use phrasecard::batch::{self, BatchError};
use phrasecard::settings::{Paths, Selection, Settings};
use phrasecard::theme::ThemeLayer;
use phrasecard::{config, output, render, template};
use std::path::PathBuf;
use std::process::ExitCode;

/// Theme values given on the command line.
///
/// A flag given without a value (`--accent`) sets the attribute to `true`.
#[derive(clap::Args, Clone)]
struct ThemeArgs {
    /// Background color
    #[arg(long, value_name = "COLOR", num_args = 0..=1, default_missing_value = "true")]
    bg: Option<String>,
    /// Foreground (ink) color
    #[arg(long, value_name = "COLOR", num_args = 0..=1, default_missing_value = "true")]
    ink: Option<String>,
    /// Muted tone for secondary text
    #[arg(long, value_name = "COLOR", num_args = 0..=1, default_missing_value = "true")]
    muted: Option<String>,
    /// Accent color
    #[arg(long, value_name = "COLOR", num_args = 0..=1, default_missing_value = "true")]
    accent: Option<String>,
    /// Rule-line color
    #[arg(long, value_name = "COLOR", num_args = 0..=1, default_missing_value = "true")]
    rule: Option<String>,
    /// Font stack for the phrase
    #[arg(
        long = "brandFont",
        visible_alias = "brand-font",
        value_name = "FONTS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    brand_font: Option<String>,
    /// Font stack for body text
    #[arg(
        long = "bodyFont",
        visible_alias = "body-font",
        value_name = "FONTS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    body_font: Option<String>,
    /// Font stack for pronunciation and metadata
    #[arg(
        long = "monoFont",
        visible_alias = "mono-font",
        value_name = "FONTS",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    mono_font: Option<String>,
}

impl From<ThemeArgs> for ThemeLayer {
    fn from(args: ThemeArgs) -> Self {
        ThemeLayer {
            bg: args.bg,
            ink: args.ink,
            muted: args.muted,
            accent: args.accent,
            rule: args.rule,
            brand_font: args.brand_font,
            body_font: args.body_font,
            mono_font: args.mono_font,
        }
    }
}

#[derive(Parser)]
#[command(name = "phrasecard")]
#[command(about = "Render phrase/translation cards to SVG")]
#[command(long_about = "\
Render phrase/translation cards to SVG

Reads a TOML deck, fills an SVG template for every card and writes one file
per card. Without --index every card is rendered; cards missing phrase or
translation are skipped with a warning.

Deck layout:

  decks/
  ├── cards.toml       # [theme] + [[card]] tables (--config)
  ├── template.svg     # {{ placeholder }} template (--templatePath)
  └── out/             # rendered cards (--outDir)
      ├── best-kept-secret.svg   # card with id = \"best-kept-secret\"
      └── output-02.svg          # second card, no id

Paths given to --templatePath and --outDir are relative to the directory
holding the config file. --config is relative to the current directory.

Theme resolution (first set wins, per attribute):
  command line (--accent ...) → [theme] in the config → built-in default

Run 'phrasecard --gen-config' to print a documented starter deck.")]
#[command(version)]
struct Cli {
    /// Render only the card at this 0-based index
    #[arg(long)]
    index: Option<usize>,

    /// Template file
    #[arg(long = "templatePath", visible_alias = "template-path", value_name = "PATH")]
    template_path: Option<PathBuf>,

    /// Output directory
    #[arg(long = "outDir", visible_alias = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Deck config file [default: cards.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(flatten)]
    theme: ThemeArgs,

    /// List cards and their output files without rendering
    #[arg(long, conflicts_with = "index")]
    list: bool,

    /// Print a stock cards.toml with all options documented
    #[arg(long, exclusive = true)]
    gen_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.gen_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            output::print_error(&format!("cannot determine current directory: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings {
        paths: Paths::resolve(
            &cwd,
            cli.config.as_deref(),
            cli.template_path.as_deref(),
            cli.out_dir.as_deref(),
        ),
        theme_overrides: cli.theme.into(),
        selection: cli.index.map_or(Selection::All, Selection::One),
    };

    let result = if cli.list {
        list_cards(&settings)
    } else {
        render_cards(&settings)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn render_cards(settings: &Settings) -> Result<(), BatchError> {
    let base = settings.paths.config.parent();
    let report = batch::run(settings, |event| output::print_batch_event(&event, base))?;

    if settings.selection == Selection::All {
        let total = report.written.len() + report.skipped + report.failed;
        println!("{}", output::format_summary(&report, total));
    }
    Ok(())
}

fn list_cards(settings: &Settings) -> Result<(), BatchError> {
    let doc = batch::load_deck(settings)?;
    let planned = batch::plan(&doc.cards, &settings.paths.out_dir);

    let unfilled = match std::fs::read_to_string(&settings.paths.template) {
        Ok(text) => {
            let known = render::placeholder_names();
            template::placeholders_in(&text)
                .into_iter()
                .filter(|name| !known.contains(&name.as_str()))
                .collect()
        }
        Err(e) => {
            output::print_warn(&format!(
                "cannot read template {}: {e}",
                settings.paths.template.display()
            ));
            Vec::new()
        }
    };

    let base = settings.paths.config.parent();
    for line in output::format_listing(&doc.cards, &planned, &unfilled, base) {
        println!("{line}");
    }
    Ok(())
}
