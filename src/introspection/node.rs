//! Output vocabulary: reserved keys, stubs and collection summaries.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// Output mapping produced for one object.
pub type SerializedNode = Map<String, Value>;

pub const OBJECT_TYPE_KEY: &str = "_object_type";
pub const IDENTITY_KEY: &str = "_identity";
pub const PROPERTIES_KEY: &str = "properties";
pub const RELATIONSHIPS_KEY: &str = "relationships";
pub const AI_SUMMARY_KEY: &str = "_llm_context";
pub const TRUNCATED_KEY: &str = "truncated";
pub const CIRCULAR_KEY: &str = "circular_reference";
pub const ERROR_KEY: &str = "error_in";
pub const COLLECTION_SUMMARY_KEY: &str = "_collection_summary";

/// Keys that never name a formatted property.
pub const RESERVED_KEYS: [&str; 8] = [
    OBJECT_TYPE_KEY,
    IDENTITY_KEY,
    PROPERTIES_KEY,
    RELATIONSHIPS_KEY,
    AI_SUMMARY_KEY,
    TRUNCATED_KEY,
    CIRCULAR_KEY,
    ERROR_KEY,
];

/// Stub emitted when the depth budget is exhausted.
pub fn truncated(type_name: &str) -> Value {
    json!({
        TRUNCATED_KEY: true,
        "reason": format!("Max depth reached for {type_name}"),
    })
}

/// Stub emitted when an object is met a second time in one call.
pub fn circular_reference(type_name: &str, object_id: usize) -> Value {
    json!({
        CIRCULAR_KEY: true,
        "description": format!("Circular reference to {type_name} (object #{object_id})"),
    })
}

/// Stub emitted in place of a field whose extraction failed.
pub fn error_stub(field: &str, message: impl std::fmt::Display) -> Value {
    json!({
        ERROR_KEY: field,
        "message": message.to_string(),
    })
}

/// Shape of a collection that was not expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    List,
    Dict,
}

/// Summary emitted in place of an unexpanded collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub count: usize,
    pub item_type: String,
    pub collection_type: CollectionKind,
}

impl CollectionSummary {
    /// Item type reported for an empty collection.
    pub const EMPTY_ITEM_TYPE: &'static str = "object";
    /// Item type reported for a heterogeneous collection.
    pub const MIXED_ITEM_TYPE: &'static str = "mixed";

    /// Summarize a collection from its element type names.
    pub fn from_labels<'a>(
        kind: CollectionKind,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut count = 0;
        let mut common: Option<&str> = None;
        let mut mixed = false;

        for label in labels {
            count += 1;
            match common {
                None => common = Some(label),
                Some(existing) if existing != label => mixed = true,
                Some(_) => {},
            }
        }

        let item_type = match (common, mixed) {
            (None, _) => Self::EMPTY_ITEM_TYPE,
            (Some(_), true) => Self::MIXED_ITEM_TYPE,
            (Some(label), false) => label,
        };

        Self {
            count,
            item_type: item_type.to_string(),
            collection_type: kind,
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ COLLECTION_SUMMARY_KEY: self })
    }
}
