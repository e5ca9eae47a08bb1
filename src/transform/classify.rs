//! Column classification.
//!
//! Decides, for a single column, whether it becomes a typed attribute or a
//! relationship edge, and computes its typed representation. Classification
//! is a pure function of the column descriptor; warning bookkeeping is the
//! transformer's job.

use crate::model::ColumnDef;
use crate::schema::{Attribute, AttributeType, LogicalSubtype, LogicalType, Relationship};

/// The graph representation of one classified column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnClass {
    Attribute(Attribute),
    Relationship(Relationship),
}

/// Classify a column as an attribute or a relationship edge.
///
/// Foreign key columns are fully reinterpreted as edges: the target entity is
/// the table segment of the `<table>.<column>` reference, and the edge is
/// required exactly when the column is non-nullable. They are never also
/// emitted as attributes.
///
/// Non-foreign-key columns resolve their native type through the fixed lookup
/// table; an unknown native type yields the explicit unresolved marker rather
/// than failing. Nullability wraps the resolved type in a `{null, T}` union.
pub fn classify_column(column: &ColumnDef) -> ColumnClass {
    if let Some(fk) = &column.foreign_key {
        return ColumnClass::Relationship(Relationship {
            name: column.name.clone(),
            target_entity: fk.table.clone(),
            required: !column.nullable,
        });
    }

    let (attribute_type, logical_subtype) = match resolve_native_type(&column.native_type) {
        Some((logical, subtype)) => {
            let attribute_type = if column.nullable {
                AttributeType::Nullable(logical)
            } else {
                AttributeType::Scalar(logical)
            };
            (attribute_type, subtype)
        }
        None => (AttributeType::Unresolved, None),
    };

    ColumnClass::Attribute(Attribute {
        name: column.name.clone(),
        attribute_type,
        logical_subtype,
        default: None,
    })
}

/// Fixed lookup table from native type names to logical types.
///
/// UUID is the only native type carrying a logical subtype today. DateTime
/// maps to a plain string; its ISO-8601 subtype tagging is an open follow-up.
pub fn resolve_native_type(native_type: &str) -> Option<(LogicalType, Option<LogicalSubtype>)> {
    match native_type {
        "Text" | "String" => Some((LogicalType::String, None)),
        "Boolean" => Some((LogicalType::Boolean, None)),
        "Float" => Some((LogicalType::Float, None)),
        "Integer" => Some((LogicalType::Int, None)),
        "UUID" => Some((LogicalType::String, Some(LogicalSubtype::Uuid))),
        "DateTime" => Some((LogicalType::String, None)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForeignKeyRef;

    fn column(name: &str, native_type: &str, nullable: bool) -> ColumnDef {
        ColumnDef {
            name: name.to_string(),
            native_type: native_type.to_string(),
            nullable,
            primary_key: false,
            foreign_key: None,
        }
    }

    fn expect_attribute(class: ColumnClass) -> Attribute {
        match class {
            ColumnClass::Attribute(attr) => attr,
            ColumnClass::Relationship(rel) => panic!("Expected attribute, got edge {:?}", rel),
        }
    }

    #[test]
    fn test_native_type_table() {
        assert_eq!(resolve_native_type("Text"), Some((LogicalType::String, None)));
        assert_eq!(resolve_native_type("String"), Some((LogicalType::String, None)));
        assert_eq!(resolve_native_type("Boolean"), Some((LogicalType::Boolean, None)));
        assert_eq!(resolve_native_type("Float"), Some((LogicalType::Float, None)));
        assert_eq!(resolve_native_type("Integer"), Some((LogicalType::Int, None)));
        assert_eq!(
            resolve_native_type("UUID"),
            Some((LogicalType::String, Some(LogicalSubtype::Uuid)))
        );
        assert_eq!(resolve_native_type("DateTime"), Some((LogicalType::String, None)));
        assert_eq!(resolve_native_type("ARRAY"), None);
    }

    #[test]
    fn test_non_nullable_column_yields_bare_type() {
        let attr = expect_attribute(classify_column(&column("kf_id", "String", false)));
        assert_eq!(attr.attribute_type, AttributeType::Scalar(LogicalType::String));
    }

    #[test]
    fn test_nullable_column_yields_union_type() {
        let attr = expect_attribute(classify_column(&column("name", "Text", true)));
        assert_eq!(attr.attribute_type, AttributeType::Nullable(LogicalType::String));
    }

    #[test]
    fn test_uuid_column_tagged_with_subtype() {
        let attr = expect_attribute(classify_column(&column("uuid", "UUID", true)));
        assert_eq!(attr.attribute_type, AttributeType::Nullable(LogicalType::String));
        assert_eq!(attr.logical_subtype, Some(LogicalSubtype::Uuid));
    }

    #[test]
    fn test_datetime_column_has_no_subtype() {
        let attr = expect_attribute(classify_column(&column("created_at", "DateTime", true)));
        assert_eq!(attr.attribute_type, AttributeType::Nullable(LogicalType::String));
        assert_eq!(attr.logical_subtype, None);
    }

    #[test]
    fn test_unknown_type_yields_unresolved_marker() {
        let attr = expect_attribute(classify_column(&column("tags", "ARRAY", true)));
        assert_eq!(attr.attribute_type, AttributeType::Unresolved);
        assert_eq!(attr.logical_subtype, None);
    }

    #[test]
    fn test_default_is_never_populated() {
        let attr = expect_attribute(classify_column(&column("visible", "Boolean", false)));
        assert_eq!(attr.default, None);
    }

    #[test]
    fn test_foreign_key_column_becomes_edge() {
        let mut col = column("study_id", "String", false);
        col.foreign_key = Some(ForeignKeyRef::new("study", "kf_id"));

        match classify_column(&col) {
            ColumnClass::Relationship(rel) => {
                assert_eq!(rel.name, "study_id");
                assert_eq!(rel.target_entity, "study");
                assert!(rel.required);
            }
            ColumnClass::Attribute(attr) => panic!("Expected edge, got attribute {:?}", attr),
        }
    }

    #[test]
    fn test_nullable_foreign_key_is_optional_edge() {
        let mut col = column("family_id", "String", true);
        col.foreign_key = Some(ForeignKeyRef::new("family", "kf_id"));

        match classify_column(&col) {
            ColumnClass::Relationship(rel) => assert!(!rel.required),
            ColumnClass::Attribute(attr) => panic!("Expected edge, got attribute {:?}", attr),
        }
    }
}
