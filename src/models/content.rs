// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable content entity as rendered by the accordion.

use std::fmt;

use crate::utils::slugify_title;

/// Synthetic identity assigned when a loaded set is normalized.
///
/// Titles are display text only; every UI lookup goes through this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(usize);

impl ContentId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content-{}", self.0)
    }
}

/// One reusable snippet. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    id: ContentId,
    title: String,
    body: String,
    order: i64,
    expand: bool,
}

impl Content {
    /// Build a content entity. Returns `None` when the title is blank.
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        body: impl Into<String>,
        order: i64,
        expand: bool,
    ) -> Option<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return None;
        }
        Some(Self {
            id,
            title,
            body: body.into(),
            order,
            expand,
        })
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw body exactly as stored; may contain HTML.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    /// Whether the item starts expanded.
    pub fn expand(&self) -> bool {
        self.expand
    }

    /// Whitespace-insensitive key derived from the title (diagnostics only).
    pub fn slug(&self) -> String {
        slugify_title(&self.title)
    }

    /// Same entity re-keyed under a new id (used after ordering).
    pub(crate) fn with_id(mut self, id: ContentId) -> Self {
        self.id = id;
        self
    }
}
