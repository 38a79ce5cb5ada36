//! Run settings resolved once at startup.
//!
//! Every path the pipeline touches is made absolute here and then passed
//! down explicitly; nothing below this module looks at the working
//! directory or the executable's location.
//!
//! ```text
//! --config        relative to the current directory    (default cards.toml)
//! --templatePath  relative to the project root          (default template.svg)
//! --outDir        relative to the project root          (default out)
//! ```
//!
//! The project root is the directory holding the config file, so a deck,
//! its template and its output stay together however the tool is invoked.

use crate::theme::ThemeLayer;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "cards.toml";
pub const DEFAULT_TEMPLATE: &str = "template.svg";
pub const DEFAULT_OUT_DIR: &str = "out";

/// Which cards to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every valid card, in deck order.
    All,
    /// The card at this 0-based index.
    One(usize),
}

/// Absolute locations of the three files/directories a run uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config: PathBuf,
    pub template: PathBuf,
    pub out_dir: PathBuf,
}

impl Paths {
    /// Resolve user-supplied (possibly relative) paths against `cwd`.
    ///
    /// `cwd` must be absolute for the result to be absolute.
    pub fn resolve(
        cwd: &Path,
        config: Option<&Path>,
        template: Option<&Path>,
        out_dir: Option<&Path>,
    ) -> Self {
        let config = cwd.join(config.unwrap_or(Path::new(DEFAULT_CONFIG)));
        let root = config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        Self {
            template: root.join(template.unwrap_or(Path::new(DEFAULT_TEMPLATE))),
            out_dir: root.join(out_dir.unwrap_or(Path::new(DEFAULT_OUT_DIR))),
            config,
        }
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct Settings {
    pub paths: Paths,
    /// Theme values given on the command line.
    pub theme_overrides: ThemeLayer,
    pub selection: Selection,
}
