// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: loading content from the store and clipboard writes.

pub mod clipboard;
pub mod error;
pub mod file_source;
#[cfg(test)]
pub(crate) mod log_capture;
pub mod repository;
pub mod sharepoint;
pub mod source;

pub use clipboard::{Clipboard, CopyOutcome, SystemClipboard, copy_to_clipboard};
pub use error::{CopyError, FetchError};
pub use file_source::JsonFileSource;
pub use repository::{ContentRepository, DEFAULT_LIST_TITLE};
pub use sharepoint::SharePointSource;
pub use source::{ContentSource, ListQuery};
