//! The relational-model to graph-schema transformer.
//!
//! Walks every entity in the model registry in declaration order, classifies
//! each column as a typed attribute or a relationship edge, and assembles the
//! complete graph schema. A referential post-pass checks that every edge
//! target names an entity present in the output.
//!
//! Recoverable conditions (unresolved native types, dangling edge targets)
//! are logged and collected as warnings without altering the output's shape:
//! they downgrade data quality, not structural completeness. The only fatal
//! condition here is an empty registry, which the transform rejects before
//! producing anything.

mod classify;

pub use classify::{classify_column, resolve_native_type, ColumnClass};

use std::fmt;

use thiserror::Error;

use crate::model::ModelRegistry;
use crate::schema::{AttributeType, EntitySchema, GraphSchema};

/// Fatal transform error types
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("No entities to transform: the model registry is empty")]
    EmptyModel,
}

/// A recoverable condition encountered during the transform, tagged with the
/// entity and column that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformWarning {
    /// A column's native type has no known logical type mapping
    UnresolvedType {
        entity: String,
        column: String,
        native_type: String,
    },
    /// A relationship's target entity does not exist in the produced schema
    DanglingReference {
        entity: String,
        relationship: String,
        target: String,
    },
}

impl fmt::Display for TransformWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformWarning::UnresolvedType {
                entity,
                column,
                native_type,
            } => write!(
                f,
                "Unresolved native type '{}' for column '{}.{}'; \
                 emitting an unresolved type marker",
                native_type, entity, column
            ),
            TransformWarning::DanglingReference {
                entity,
                relationship,
                target,
            } => write!(
                f,
                "Relationship '{}.{}' references unknown entity '{}'",
                entity, relationship, target
            ),
        }
    }
}

/// The transform's result: the assembled schema plus every recoverable
/// condition encountered while building it.
#[derive(Debug)]
pub struct TransformOutput {
    pub schema: GraphSchema,
    pub warnings: Vec<TransformWarning>,
}

/// Transform the relational model into a graph schema.
///
/// Single-pass over the registry in declaration order, followed by the
/// referential post-pass. Pure with respect to its input: given the same
/// registry content the output is structurally identical on every run.
///
/// # Errors
///
/// Returns `TransformError::EmptyModel` when the registry holds no entities;
/// the transform's purpose cannot be satisfied with zero input.
pub fn transform(registry: &ModelRegistry) -> Result<TransformOutput, TransformError> {
    if registry.is_empty() {
        return Err(TransformError::EmptyModel);
    }

    let mut schema = GraphSchema::new();
    let mut warnings = Vec::new();

    for table in registry.iter() {
        let mut entity = EntitySchema::default();

        for column in &table.columns {
            match classify_column(column) {
                ColumnClass::Attribute(attribute) => {
                    if attribute.attribute_type == AttributeType::Unresolved {
                        let warning = TransformWarning::UnresolvedType {
                            entity: table.name.clone(),
                            column: column.name.clone(),
                            native_type: column.native_type.clone(),
                        };
                        log::warn!("{}", warning);
                        warnings.push(warning);
                    }
                    entity.attributes.push(attribute);
                }
                ColumnClass::Relationship(relationship) => {
                    entity.relationships.push(relationship);
                }
            }
        }

        // Empty entities are degenerate but legal; keep them in the output.
        schema.insert(table.name.clone(), entity);
    }

    // Referential post-pass: dangling targets are reported, never dropped.
    for (entity_name, entity) in schema.iter() {
        for relationship in &entity.relationships {
            if !schema.contains_entity(&relationship.target_entity) {
                let warning = TransformWarning::DanglingReference {
                    entity: entity_name.clone(),
                    relationship: relationship.name.clone(),
                    target: relationship.target_entity.clone(),
                };
                log::warn!("{}", warning);
                warnings.push(warning);
            }
        }
    }

    log::info!(
        "Transformed {} entity(ies) into {} attribute(s) and {} relationship(s)",
        schema.len(),
        schema.attribute_count(),
        schema.relationship_count()
    );

    Ok(TransformOutput { schema, warnings })
}
