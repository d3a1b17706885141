//! The process-wide language model bundle.
//!
//! A bundle is a serde-loaded lexicon (word -> fine tag) plus gazetteer
//! lists for entity labeling. The English bundle is embedded in the
//! binary; an alternate bundle can be loaded from disk at startup. After
//! loading, the model is read-only and shared across requests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// English bundle compiled into the binary.
const EMBEDDED_BUNDLE: &str = include_str!("../../data/lexicon.en.json");

/// Failure loading a model bundle at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model bundle: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model bundle: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lexicon and gazetteer bundle backing the NLP adapter.
#[derive(Debug, Deserialize)]
pub struct LanguageModel {
    name: String,
    #[serde(default)]
    version: u32,
    lexicon: HashMap<String, String>,
    #[serde(default)]
    gazetteer: HashMap<String, Vec<String>>,
}

impl LanguageModel {
    /// Load the embedded English bundle.
    pub fn embedded() -> Result<Self, ModelError> {
        Ok(serde_json::from_str(EMBEDDED_BUNDLE)?)
    }

    /// Load a bundle from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load the bundle at `path`, or the embedded one when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ModelError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    /// Bundle identifier for logging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bundle format version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Look up the fine-grained tag for a lowercase word.
    pub fn lookup(&self, lower: &str) -> Option<&str> {
        self.lexicon.get(lower).map(String::as_str)
    }

    /// Find the entity label for a lowercase phrase, if any gazetteer
    /// lists it.
    pub fn entity_label(&self, phrase_lower: &str) -> Option<&str> {
        self.gazetteer
            .iter()
            .find(|(_, terms)| terms.iter().any(|t| t == phrase_lower))
            .map(|(label, _)| label.as_str())
    }
}
