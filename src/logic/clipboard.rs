// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Clipboard access behind a small trait so copy outcomes are testable.

use std::sync::Mutex;

use crate::logic::error::CopyError;

/// Anything that can receive text.
pub trait Clipboard: Send + Sync {
    fn set_text(&self, text: &str) -> Result<(), CopyError>;
}

/// Result of one copy request. Each request stands alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(CopyError),
}

/// Write `text` to the clipboard, logging a failure instead of raising it.
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.set_text(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "copied content to clipboard");
            CopyOutcome::Copied
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to copy content");
            CopyOutcome::Failed(err)
        }
    }
}

/// System clipboard via `arboard`.
///
/// The handle is opened on first use and kept for the app lifetime; on X11
/// and Wayland the copied text is only served while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), CopyError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| CopyError::Unavailable("clipboard lock poisoned".into()))?;

        if guard.is_none() {
            let opened =
                arboard::Clipboard::new().map_err(|err| CopyError::Unavailable(err.to_string()))?;
            *guard = Some(opened);
        }

        let result = match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|err| CopyError::Rejected(err.to_string())),
            None => Err(CopyError::Unavailable("clipboard not initialised".into())),
        };

        if result.is_err() {
            // Reopen on the next attempt in case the display connection went away.
            *guard = None;
        }
        result
    }
}
