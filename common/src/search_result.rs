//! Search results as stored in shared state.
//!
//! Service payloads are normalized once, on ingestion: numeric fields that
//! arrive as strings are parsed, and a lone item is turned into a one-element
//! list, so nothing downstream branches on the payload shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SearchError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResultList {
    /// Unknown while the search is pending.
    pub total_items: Option<u64>,
    pub page_size: Option<u64>,
    /// 0-based.
    pub page_num: Option<u64>,
    pub items_in_page: Option<u64>,
    pub items: Vec<RecordSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecordSummary {
    pub csid: Option<String>,
    /// Service object name of the record, used to resolve its record type.
    pub doc_type: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl RecordSummary {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|value| value.as_str())
    }

    fn from_value(value: &Value) -> Self {
        let mut fields = BTreeMap::new();
        if let Value::Object(map) = value {
            for (key, field_value) in map {
                if let Some(text) = value_to_text(field_value) {
                    fields.insert(key.clone(), text);
                }
            }
        }
        Self {
            csid: fields.get("csid").cloned(),
            doc_type: fields.get("docType").cloned(),
            fields,
        }
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

fn value_to_u64(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SearchResultList {
    /// Reads the list node `list_node_name` out of a service payload.
    pub fn from_payload(
        payload: &Value,
        list_node_name: &str,
        item_node_name: &str,
    ) -> Result<Self, SearchError> {
        let list = payload.get(list_node_name).ok_or_else(|| {
            SearchError::InvalidPayload(format!("missing list node {list_node_name}"))
        })?;

        let items = match list.get(item_node_name) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(RecordSummary::from_value).collect(),
            // a single result comes back as a bare item
            Some(item) => vec![RecordSummary::from_value(item)],
        };

        Ok(Self {
            total_items: value_to_u64(list.get("totalItems")),
            page_size: value_to_u64(list.get("pageSize")),
            page_num: value_to_u64(list.get("pageNum")),
            items_in_page: value_to_u64(list.get("itemsInPage")),
            items,
        })
    }

    /// Stand-in result while a search for the given page is in flight.
    pub fn pending_placeholder(page_num: u64, page_size: Option<u64>) -> Self {
        Self {
            page_num: Some(page_num),
            page_size,
            ..Default::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn row(&self, index: usize) -> Option<&RecordSummary> {
        self.items.get(index)
    }
}

/// Outcome of the latest search issued under a search name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Pending { placeholder: SearchResultList },
    Fulfilled(SearchResultList),
    Rejected(SearchError),
}

impl SearchOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, SearchOutcome::Pending { .. })
    }

    /// The result to render: the fetched list, or the placeholder while pending.
    pub fn result(&self) -> Option<&SearchResultList> {
        match self {
            SearchOutcome::Pending { placeholder } => Some(placeholder),
            SearchOutcome::Fulfilled(result) => Some(result),
            SearchOutcome::Rejected(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SearchError> {
        match self {
            SearchOutcome::Rejected(error) => Some(error),
            _ => None,
        }
    }
}
