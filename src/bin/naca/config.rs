//! Defaults for the command line tool, optionally loaded from a JSON file. Command line flags
//! override values from the file, and the file overrides the built-in defaults.

use anyhow::Context;
use naca_rs::export::ExportFormat;
use naca_rs::stations::{Spacing, DEFAULT_SAMPLES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub chord: f64,
    pub samples: usize,
    pub spacing: Spacing,
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chord: 1.0,
            samples: DEFAULT_SAMPLES,
            spacing: Spacing::Cosine,
            format: ExportFormat::Dat,
            out_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads the config file if one was given, otherwise the defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
        match path {
            None => Ok(Config::default()),
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("reading config file {}", p.display()))?;
                Config::from_json(&text)
                    .with_context(|| format!("parsing config file {}", p.display()))
            }
        }
    }
}
