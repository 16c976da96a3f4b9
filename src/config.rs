//! Configuration types for the extraction engine.
//!
//! This module provides [`ParserConfig`], a clean configuration struct for
//! library usage without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatledger::config::ParserConfig;
//! use chatledger::parser::TranscriptParser;
//!
//! let config = ParserConfig::new()
//!     .with_dedupe(false)
//!     .with_extra_unit("bags");
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// Controls deduplication of the output table and business-specific
/// extensions to the unit vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Remove exact-duplicate rows from the output table (default: true).
    ///
    /// Disable to inspect raw rows, e.g. when auditing doubly-pasted chat
    /// blocks.
    pub dedupe: bool,

    /// Extra unit words appended to the fixed vocabulary (default: empty).
    ///
    /// Words must be purely alphabetic; they are matched case-insensitively
    /// and lowercased in output like the built-in units.
    pub extra_units: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dedupe: true,
            extra_units: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables output deduplication.
    #[must_use]
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Appends one extra unit word to the vocabulary.
    #[must_use]
    pub fn with_extra_unit(mut self, unit: impl Into<String>) -> Self {
        self.extra_units.push(unit.into());
        self
    }

    /// Replaces the extra unit words wholesale.
    #[must_use]
    pub fn with_extra_units(mut self, units: Vec<String>) -> Self {
        self.extra_units = units;
        self
    }
}
