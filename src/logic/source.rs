// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Seam between the repository and whatever backs the content list.

use serde::Deserialize;
use serde_json::Value;

use crate::logic::error::FetchError;
use crate::models::RawRecord;
use crate::models::raw_record::{ORDER_FIELD, SELECTED_FIELDS};

/// Read request against a named list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub list_title: String,
    pub select: Vec<String>,
    pub order_by: String,
    pub ascending: bool,
}

impl ListQuery {
    /// The one query this application issues: the four content fields,
    /// ascending by order.
    pub fn reusable_content(list_title: impl Into<String>) -> Self {
        Self {
            list_title: list_title.into(),
            select: SELECTED_FIELDS.iter().map(|f| f.to_string()).collect(),
            order_by: ORDER_FIELD.to_string(),
            ascending: true,
        }
    }
}

/// Anything that can answer a [`ListQuery`] with raw records.
pub trait ContentSource: Send + Sync {
    fn query(&self, query: &ListQuery) -> Result<Vec<RawRecord>, FetchError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Accepted response envelopes for a list of items.
///
/// Items stay as loose JSON here so one malformed item cannot sink the rest.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    /// `application/json;odata=nometadata`
    Value { value: Vec<Value> },
    /// `application/json;odata=verbose`
    Verbose { d: VerboseResults },
    /// Bare array (file fixtures).
    Bare(Vec<Value>),
}

#[derive(Deserialize)]
struct VerboseResults {
    results: Vec<Value>,
}

/// Decode a list response body into raw records.
///
/// Only an unrecognized envelope is an error. Items that do not fit
/// [`RawRecord`] are logged and skipped.
pub fn decode_records(body: &[u8], origin: &str) -> Result<Vec<RawRecord>, FetchError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|source| FetchError::Decode {
            origin: origin.to_string(),
            source,
        })?;

    let items = match envelope {
        Envelope::Value { value } => value,
        Envelope::Verbose { d } => d.results,
        Envelope::Bare(items) => items,
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<RawRecord>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, origin, "skipping malformed list item");
                None
            }
        })
        .collect())
}
