//! `promptdesk.config.json`: custom placeholder vocabularies.
//!
//! ```json
//! {
//!   "vocabularies": [
//!     {
//!       "name": "persona-intro",
//!       "placeholders": ["{name}", "{role}"],
//!       "coverage": "all"
//!     }
//!   ]
//! }
//! ```
//!
//! Custom vocabularies shadow the built-in ones of the same name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PromptDeskError, Result};
use crate::vocabulary::Vocabulary;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "promptdesk.config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub vocabularies: Vec<Vocabulary>,
}

impl DeskConfig {
    /// Load and check a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| PromptDeskError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| PromptDeskError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        for vocab in &config.vocabularies {
            vocab.ensure_well_formed()?;
        }
        info!(
            path = %path.display(),
            vocabularies = config.vocabularies.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to an empty config.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using built-ins only");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| PromptDeskError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Find a vocabulary by name: custom first, then built-in.
    pub fn resolve(&self, name: &str) -> Result<Vocabulary> {
        if let Some(custom) = self.vocabularies.iter().find(|v| v.name == name) {
            debug!(name, "using custom vocabulary");
            return Ok(custom.clone());
        }
        Vocabulary::from_name(name).ok_or_else(|| PromptDeskError::UnknownVocabulary(name.into()))
    }

    /// Every vocabulary visible under this config, custom ones replacing
    /// built-ins of the same name.
    pub fn all_vocabularies(&self) -> Vec<Vocabulary> {
        let mut all: Vec<Vocabulary> = Vocabulary::builtins()
            .into_iter()
            .filter(|b| !self.vocabularies.iter().any(|c| c.name == b.name))
            .collect();
        all.extend(self.vocabularies.iter().cloned());
        all
    }
}
