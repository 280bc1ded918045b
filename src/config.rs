// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application configuration loaded from a JSON file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logic::{
    ContentRepository, ContentSource, DEFAULT_LIST_TITLE, JsonFileSource, SharePointSource,
};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "reusable-content.json";

/// Content file used when no configuration exists at all.
pub const SAMPLE_CONTENT_FILE: &str = "reusable-content.sample.json";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Where the content list comes from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceConfig {
    #[serde(rename = "sharepoint")]
    SharePoint {
        site_url: String,
        #[serde(default = "default_list_title")]
        list_title: String,
        #[serde(default)]
        access_token: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    #[serde(rename = "file")]
    File { path: PathBuf },
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::File {
            path: PathBuf::from(SAMPLE_CONTENT_FILE),
        }
    }
}

/// Initial window geometry.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 640.0,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub window: WindowConfig,
    /// Lower the default log level to `debug`.
    #[serde(default)]
    pub debug: bool,
}

fn default_list_title() -> String {
    DEFAULT_LIST_TITLE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Build the content source described by `source`.
    pub fn content_source(&self) -> Result<Box<dyn ContentSource>> {
        Ok(match &self.source {
            SourceConfig::SharePoint {
                site_url,
                access_token,
                timeout_secs,
                ..
            } => Box::new(
                SharePointSource::new(
                    site_url,
                    access_token.clone(),
                    Duration::from_secs(*timeout_secs),
                )
                .with_context(|| format!("Invalid SharePoint source: {site_url}"))?,
            ),
            SourceConfig::File { path } => Box::new(JsonFileSource::new(path)),
        })
    }

    /// Source description safe for logs (no credentials).
    pub fn source_label(&self) -> String {
        match &self.source {
            SourceConfig::SharePoint {
                site_url,
                list_title,
                ..
            } => format!("sharepoint {site_url} ({list_title})"),
            SourceConfig::File { path } => format!("file {}", path.display()),
        }
    }

    /// Repository wired to the configured source.
    pub fn repository(&self) -> Result<ContentRepository> {
        let list_title = match &self.source {
            SourceConfig::SharePoint { list_title, .. } => list_title.clone(),
            SourceConfig::File { .. } => default_list_title(),
        };
        Ok(ContentRepository::new(self.content_source()?, list_title))
    }
}
