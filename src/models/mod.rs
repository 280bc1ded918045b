// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between the repository and the UI.

pub mod content;
pub mod raw_record;

pub use content::{Content, ContentId};
pub use raw_record::RawRecord;
