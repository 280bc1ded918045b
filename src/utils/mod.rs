// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and repository logic.

pub mod markup;
pub mod slug;

/// Render a tag-free preview of an HTML snippet body.
pub use markup::preview_text;
/// Collapse a title into its whitespace-insensitive key.
pub use slug::slugify_title;
