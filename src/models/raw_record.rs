// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Wire shape of a list item as returned by the remote store.
//! Every field is nullable on the wire; normalization decides the defaults.

use serde::Deserialize;

use super::content::{Content, ContentId};

/// Field names selected from the backing list, in query order.
pub const SELECTED_FIELDS: [&str; 4] = ["Title", "Content", "Order0", "Expand"];

/// Field used for the server-side ascending sort.
pub const ORDER_FIELD: &str = "Order0";

/// Raw list item before normalization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Content", default)]
    pub content: Option<String>,
    #[serde(rename = "Order0", default)]
    pub order: Option<f64>,
    #[serde(rename = "Expand", default)]
    pub expand: Option<bool>,
}

impl RawRecord {
    /// Map into the internal vocabulary.
    ///
    /// Returns `None` when the record has no usable title. A missing order
    /// sorts last; missing body and expand flag default to empty/`false`.
    pub fn into_content(self, id: ContentId) -> Option<Content> {
        let title = self.title?;
        let order = self
            .order
            .filter(|o| o.is_finite())
            .map(|o| o.round() as i64)
            .unwrap_or(i64::MAX);
        Content::new(
            id,
            title,
            self.content.unwrap_or_default(),
            order,
            self.expand.unwrap_or(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sharepoint_field_names() {
        let record: RawRecord = serde_json::from_str(
            r#"{"Title":"Disclaimer","Content":"Confidential.","Order0":1.0,"Expand":true}"#,
        )
        .unwrap();

        let content = record.into_content(ContentId::new(0)).unwrap();
        assert_eq!(content.title(), "Disclaimer");
        assert_eq!(content.body(), "Confidential.");
        assert_eq!(content.order(), 1);
        assert!(content.expand());
    }

    #[test]
    fn null_fields_take_defaults() {
        let record: RawRecord =
            serde_json::from_str(r#"{"Title":"Signature","Content":null,"Order0":null}"#).unwrap();

        let content = record.into_content(ContentId::new(4)).unwrap();
        assert_eq!(content.body(), "");
        assert_eq!(content.order(), i64::MAX);
        assert!(!content.expand());
    }

    #[test]
    fn missing_title_is_dropped() {
        let record: RawRecord = serde_json::from_str(r#"{"Content":"orphan"}"#).unwrap();
        assert!(record.into_content(ContentId::new(0)).is_none());
    }
}
