// src/config.rs
//! Run configuration: optional TOML file merged with command-line overrides.
//!
//! ```toml
//! [pagerank]
//! jump = 0.15
//! tolerance = 1e-10
//! max_iterations = 1000
//!
//! [input]
//! prefix = "part"
//! ```

use crate::error::{Result, SeqRankError};
use crate::graph::PageRankConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File-name prefix of the part files read from an input directory.
pub const DEFAULT_PART_PREFIX: &str = "part";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PART_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub pagerank: PageRankConfig,
    pub input: InputConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub jump: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub prefix: Option<String>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a TOML config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SeqRankError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse_toml(&content).map_err(|message| SeqRankError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Loads the file if given, otherwise defaults, then applies `overrides`
    /// and validates the result.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or the merged values are invalid.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::new(),
        };
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(jump) = overrides.jump {
            self.pagerank.jump = jump;
        }
        if let Some(tolerance) = overrides.tolerance {
            self.pagerank.tolerance = tolerance;
        }
        if let Some(max) = overrides.max_iterations {
            self.pagerank.max_iterations = max;
        }
        if let Some(prefix) = overrides.prefix {
            self.input.prefix = prefix;
        }
    }

    /// # Errors
    /// Returns error if the `PageRank` settings are out of range.
    pub fn validate(&self) -> Result<()> {
        self.pagerank.validate()
    }

    fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
