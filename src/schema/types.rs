//! Core graph schema types.
//!
//! These types describe the shape of the serialized schema document exactly:
//! `Serialize` implementations produce the wire format consumed by the PFB
//! container writer, so field names and renames here are contractual.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// The primitive serialization type assigned to an attribute, independent of
/// the source database's native type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    /// String/text data
    String,
    /// Boolean data
    Boolean,
    /// Floating point data
    Float,
    /// Integer data
    Int,
}

impl LogicalType {
    /// Returns the serialized name for this logical type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::String => "string",
            LogicalType::Boolean => "boolean",
            LogicalType::Float => "float",
            LogicalType::Int => "int",
        }
    }
}

/// A semantic tag layered on top of a primitive logical type.
///
/// Currently only UUID columns qualify. DateTime columns intentionally carry
/// no subtype yet (ISO-8601 tagging is an open follow-up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalSubtype {
    Uuid,
}

/// The typed representation of an attribute.
///
/// Nullable columns are represented as a two-member union `["null", <type>]`
/// rather than the bare type. Columns whose native type has no known mapping
/// keep an explicit unresolved marker (serialized as JSON `null`) instead of
/// failing the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// A bare, non-nullable logical type
    Scalar(LogicalType),
    /// The union `{null, <logical_type>}` for a nullable column
    Nullable(LogicalType),
    /// The source type had no known mapping
    Unresolved,
}

impl Serialize for AttributeType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AttributeType::Scalar(t) => serializer.serialize_str(t.as_str()),
            AttributeType::Nullable(t) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element("null")?;
                seq.serialize_element(t.as_str())?;
                seq.end()
            }
            AttributeType::Unresolved => serializer.serialize_none(),
        }
    }
}

/// One non-foreign-key column, re-expressed as a typed node attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Column identifier, unique within its owning entity
    pub name: String,

    /// Serialization type (bare, nullable union, or unresolved)
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,

    /// Semantic tag beyond the primitive representation (e.g. "uuid")
    #[serde(rename = "logicalType", skip_serializing_if = "Option::is_none")]
    pub logical_subtype: Option<LogicalSubtype>,

    /// Literal default value. Never populated today; reserved for future use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// One foreign-key column, re-expressed as a graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    /// The originating column's identifier, preserved as-is
    pub name: String,

    /// Name of the entity the foreign key references
    #[serde(rename = "table")]
    pub target_entity: String,

    /// Mirrors the column's nullability: a non-nullable foreign key means the
    /// edge must be present on every instance
    pub required: bool,
}

/// One entity's graph representation: its typed attributes plus the
/// relationship edges originating from it.
///
/// An entity with zero attributes and zero relationships is degenerate but
/// legal, preserved in the output rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntitySchema {
    /// Attributes in column declaration order
    pub attributes: Vec<Attribute>,

    /// Relationship edges in column declaration order
    pub relationships: Vec<Relationship>,
}

/// The transform's output: a mapping from entity name to entity schema.
///
/// Constructed once per run and never partially updated afterwards. Backed by
/// a `BTreeMap` so iteration and serialization order is alphabetical and
/// byte-stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSchema {
    #[serde(flatten)]
    entities: BTreeMap<String, EntitySchema>,
}

impl GraphSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity to the schema. Entity names are unique across the whole
    /// schema (guaranteed upstream by the model registry); inserting a
    /// duplicate name replaces the previous entry.
    pub fn insert(&mut self, name: String, entity: EntitySchema) {
        self.entities.insert(name, entity);
    }

    pub fn get(&self, name: &str) -> Option<&EntitySchema> {
        self.entities.get(name)
    }

    pub fn contains_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Iterates entities in alphabetical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &EntitySchema)> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Total attribute count across all entities.
    pub fn attribute_count(&self) -> usize {
        self.entities.values().map(|e| e.attributes.len()).sum()
    }

    /// Total relationship count across all entities.
    pub fn relationship_count(&self) -> usize {
        self.entities.values().map(|e| e.relationships.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_type_serializes_to_bare_name() {
        let value = serde_json::to_value(AttributeType::Scalar(LogicalType::String)).unwrap();
        assert_eq!(value, json!("string"));
    }

    #[test]
    fn test_nullable_type_serializes_to_union() {
        let value = serde_json::to_value(AttributeType::Nullable(LogicalType::Int)).unwrap();
        assert_eq!(value, json!(["null", "int"]));
    }

    #[test]
    fn test_unresolved_type_serializes_to_null() {
        let value = serde_json::to_value(AttributeType::Unresolved).unwrap();
        assert_eq!(value, json!(null));
    }

    #[test]
    fn test_attribute_omits_empty_subtype_and_default() {
        let attr = Attribute {
            name: "name".to_string(),
            attribute_type: AttributeType::Scalar(LogicalType::String),
            logical_subtype: None,
            default: None,
        };
        let value = serde_json::to_value(&attr).unwrap();
        assert_eq!(value, json!({"name": "name", "type": "string"}));
    }

    #[test]
    fn test_uuid_attribute_carries_logical_type_tag() {
        let attr = Attribute {
            name: "uuid".to_string(),
            attribute_type: AttributeType::Nullable(LogicalType::String),
            logical_subtype: Some(LogicalSubtype::Uuid),
            default: None,
        };
        let value = serde_json::to_value(&attr).unwrap();
        assert_eq!(
            value,
            json!({"name": "uuid", "type": ["null", "string"], "logicalType": "uuid"})
        );
    }

    #[test]
    fn test_relationship_serializes_target_as_table() {
        let rel = Relationship {
            name: "study_id".to_string(),
            target_entity: "study".to_string(),
            required: true,
        };
        let value = serde_json::to_value(&rel).unwrap();
        assert_eq!(
            value,
            json!({"name": "study_id", "table": "study", "required": true})
        );
    }

    #[test]
    fn test_graph_schema_flattens_entities() {
        let mut schema = GraphSchema::new();
        schema.insert("study".to_string(), EntitySchema::default());
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({"study": {"attributes": [], "relationships": []}})
        );
    }

    #[test]
    fn test_graph_schema_iterates_alphabetically() {
        let mut schema = GraphSchema::new();
        schema.insert("participant".to_string(), EntitySchema::default());
        schema.insert("biospecimen".to_string(), EntitySchema::default());
        schema.insert("study".to_string(), EntitySchema::default());

        let names: Vec<_> = schema.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["biospecimen", "participant", "study"]);
    }
}
