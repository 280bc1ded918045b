// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Fetch and normalize reusable content into a ready-to-render list.

use std::collections::HashMap;

use crate::logic::error::FetchError;
use crate::logic::source::{ContentSource, ListQuery};
use crate::models::{Content, ContentId};

/// Default list holding the snippets.
pub const DEFAULT_LIST_TITLE: &str = "ReusableContent";

/// Loads the full content list from an injected [`ContentSource`].
pub struct ContentRepository {
    source: Box<dyn ContentSource>,
    query: ListQuery,
}

impl ContentRepository {
    pub fn new(source: Box<dyn ContentSource>, list_title: impl Into<String>) -> Self {
        Self {
            source,
            query: ListQuery::reusable_content(list_title),
        }
    }

    /// Fetch every item, ordered ascending by `order`.
    ///
    /// Never fails: a fetch failure is logged and yields an empty list so the
    /// accordion can still render.
    pub fn fetch_all(&self) -> Vec<Content> {
        match self.try_fetch_all() {
            Ok(items) => {
                tracing::info!(
                    count = items.len(),
                    source = %self.source.describe(),
                    "loaded reusable content"
                );
                items
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    source = %self.source.describe(),
                    "failed to fetch reusable content"
                );
                Vec::new()
            }
        }
    }

    /// Fetch and normalize, surfacing the failure.
    pub fn try_fetch_all(&self) -> Result<Vec<Content>, FetchError> {
        let records = self.source.query(&self.query)?;
        Ok(normalize(records))
    }
}

/// Map raw records to content, stable-sort by order, and assign ids.
fn normalize(records: Vec<crate::models::RawRecord>) -> Vec<Content> {
    let total = records.len();
    let mut items: Vec<Content> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let content = record.into_content(ContentId::new(index));
            if content.is_none() {
                tracing::warn!(index, "skipping list item without a title");
            }
            content
        })
        .collect();

    // Already sorted by the server; stable sort keeps that order intact.
    items.sort_by_key(Content::order);

    let items: Vec<Content> = items
        .into_iter()
        .enumerate()
        .map(|(index, content)| content.with_id(ContentId::new(index)))
        .collect();

    warn_on_aliasing_titles(&items);
    tracing::debug!(total, kept = items.len(), "normalized list items");
    items
}

/// Titles that collapse to the same key would have collided in a
/// title-keyed UI; ids keep them apart here, but the data is suspect.
fn warn_on_aliasing_titles(items: &[Content]) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for item in items {
        if let Some(previous) = seen.insert(item.slug(), item.title()) {
            tracing::warn!(
                first = previous,
                second = item.title(),
                "content titles differ only in whitespace or accents"
            );
        }
    }
}
