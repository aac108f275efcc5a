// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::DEFAULT_URL;

/// Inputs for one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    /// `None` → `nouns.txt` next to the executable.
    pub out_path: Option<PathBuf>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            out_path: None,
        }
    }
}

impl ScrapeOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_path = Some(path.into());
        self
    }

    pub fn out_path(&self) -> Option<&Path> {
        self.out_path.as_deref()
    }
}
