// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! JSON file source for offline demos and fixtures.

use std::path::PathBuf;

use crate::logic::error::FetchError;
use crate::logic::source::{ContentSource, ListQuery, decode_records};
use crate::models::RawRecord;

/// Reads raw list items from a JSON file (bare array or a list envelope).
///
/// The list title is ignored; ordering is left to the repository.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonFileSource {
    fn query(&self, _query: &ListQuery) -> Result<Vec<RawRecord>, FetchError> {
        let bytes = std::fs::read(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode_records(&bytes, &self.path.display().to_string())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
