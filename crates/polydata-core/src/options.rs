//! Configuration options for mesh building.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::IndexWidth;

/// Options controlling how poly data is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Whether uniform face tables may be written in a single bulk pass.
    pub fast_path: bool,

    /// Word width of the cell buffers handed to the rendering engine.
    pub index_width: IndexWidth,

    /// Face count above which the per-face path reports progress.
    pub progress_threshold: usize,

    /// Number of faces between two progress notifications.
    pub progress_stride: usize,

    /// Whether to log a text progress bar when no observer is supplied.
    pub log_progress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fast_path: true,
            index_width: IndexWidth::native(),
            progress_threshold: 25_000,
            progress_stride: 1_000,
            log_progress: true,
        }
    }
}

impl Options {
    /// Parses options from a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with the bulk path switched on or off.
    #[must_use]
    pub fn with_fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    /// Returns a copy using the given index width.
    #[must_use]
    pub fn with_index_width(mut self, width: IndexWidth) -> Self {
        self.index_width = width;
        self
    }

    /// Returns a copy with a different progress threshold.
    #[must_use]
    pub fn with_progress_threshold(mut self, threshold: usize) -> Self {
        self.progress_threshold = threshold;
        self
    }
}
