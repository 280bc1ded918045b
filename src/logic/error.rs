// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Failure taxonomy for fetching content and writing to the clipboard.
//! Both are recovered at the component that detects them.

use std::path::PathBuf;

use thiserror::Error;

/// The remote query could not be completed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint could not be built from the configured site URL.
    #[error("Invalid list endpoint for site '{site}': {reason}")]
    InvalidEndpoint { site: String, reason: String },

    /// Network, TLS, or timeout failure.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status (auth, missing list, ...).
    #[error("Store returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected list shape.
    #[error("Unexpected response shape from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Local file source could not be read.
    #[error("Failed to read content file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The clipboard write was rejected or is unsupported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// No clipboard could be opened (headless session, missing display server).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard exists but refused the write.
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),
}
