//! Configuration loading and defaults.
//!
//! The config file is optional; every field has a default so a bare
//! `pltags file.pl` invocation needs no setup. CLI flags override whatever
//! the file provides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".pltags.json";

fn default_max_depth() -> usize {
    2
}

fn default_true() -> bool {
    true
}

fn default_output() -> PathBuf {
    PathBuf::from("tags")
}

/// Engine and CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum traversal depth when following use/require statements.
    /// Depth 1 is a directly requested file; the default of 2 indexes the
    /// requested files plus one level of their dependencies.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Whether the variable recognizer runs at all.
    #[serde(default = "default_true")]
    pub track_variables: bool,

    /// Whether tag lines carry the extended `;"` metadata fields
    /// (kind, line number, file: and class: markers).
    #[serde(default = "default_true")]
    pub extended_output: bool,

    /// Library directories searched when resolving a module name like
    /// `Foo::Bar` to a file path. Searched in order, first hit wins.
    #[serde(default)]
    pub lib_dirs: Vec<PathBuf>,

    /// Tags file output path.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            track_variables: true,
            extended_output: true,
            lib_dirs: Vec::new(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }
}
