//! The dataset schema descriptor.
//!
//! The dashboard API validates every pushed row against the registered
//! schema, so the field set here must match `OutputRecord` exactly — same
//! keys, same types, same optionality.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field value type, as the dashboard API spells it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
}

/// One field declaration in a dataset schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaField {
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Human-readable column heading shown on the dashboard.
    pub name: String,
    pub optional: bool,
}

impl SchemaField {
    pub fn required(kind: FieldType, name: &str) -> Self {
        Self { kind, name: name.to_string(), optional: false }
    }

    pub fn optional(kind: FieldType, name: &str) -> Self {
        Self { kind, name: name.to_string(), optional: true }
    }
}

/// Field name → declaration.  `BTreeMap` so serialization order is fixed.
pub type SchemaDescriptor = BTreeMap<String, SchemaField>;

/// The schema for the published roster dataset.
///
/// One field per `OutputRecord` field: `agent` and `group` are required
/// strings; `status` is optional because a record is schema-valid before
/// the overlay fills it in.
pub fn roster_schema() -> SchemaDescriptor {
    BTreeMap::from([
        ("agent".to_string(), SchemaField::required(FieldType::String, "Agent")),
        ("group".to_string(), SchemaField::required(FieldType::String, "Group")),
        ("status".to_string(), SchemaField::optional(FieldType::String, "Status")),
    ])
}
