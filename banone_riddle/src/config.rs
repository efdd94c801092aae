// Runtime configuration for the riddle generator.
//
// Read from an optional JSON file; every field has a default, so `{}` is a
// valid config. Command-line flags override file values (see `cli.rs`).

use std::path::{Path, PathBuf};

use banone_lang::{Lexicon, default_lexicon};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RiddleError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiddleConfig {
    /// Dictionary JSON file. The embedded German lexicon is used when unset.
    pub dictionary: Option<PathBuf>,
    /// `log` level filter: error, warn, info, debug, or trace.
    pub log_level: String,
    /// Run the all-pairs batch on the rayon pool.
    pub parallel: bool,
    /// Print the dictionary summary after the riddles.
    pub show_stats: bool,
}

impl Default for RiddleConfig {
    fn default() -> Self {
        RiddleConfig {
            dictionary: None,
            log_level: "info".to_string(),
            parallel: true,
            show_stats: true,
        }
    }
}

impl RiddleConfig {
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| RiddleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| RiddleError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the configured dictionary, or the embedded one.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.dictionary {
            Some(path) => Ok(Lexicon::load(path)?),
            None => {
                let lexicon = default_lexicon();
                log::info!("event=lexicon_loaded path=<embedded> words={}", lexicon.len());
                Ok(lexicon)
            }
        }
    }
}
