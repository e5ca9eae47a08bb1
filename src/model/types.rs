//! Relational model description types.
//!
//! These are the statically-typed table/column descriptors every model
//! loading backend must populate. They carry exactly what the transform
//! needs: names, native type names, nullability, and foreign key targets.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::ModelError;

/// One relational table/model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableModel {
    /// Table name, unique across the model
    pub name: String,

    /// Columns in declaration order
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

/// One column of a relational table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnDef {
    /// Column identifier, unique within its table
    pub name: String,

    /// Native type name as declared in the source model (e.g. "Text", "UUID")
    #[serde(rename = "type")]
    pub native_type: String,

    /// Whether the column admits NULL. Model files may omit this; columns
    /// default to nullable, except primary keys which the loader forces to
    /// non-nullable.
    #[serde(default = "default_nullable")]
    pub nullable: bool,

    /// Whether the column is part of the primary key
    #[serde(default)]
    pub primary_key: bool,

    /// Foreign key target in `<table>.<column>` notation, if any
    #[serde(default)]
    pub foreign_key: Option<ForeignKeyRef>,
}

fn default_nullable() -> bool {
    true
}

/// A parsed `<table>.<column>` foreign key reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ForeignKeyRef {
    /// The referenced table; the only segment the transform keeps
    pub table: String,

    /// The referenced column
    pub column: String,
}

impl ForeignKeyRef {
    pub fn new(table: &str, column: &str) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
        }
    }
}

impl FromStr for ForeignKeyRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((table, column)) if !table.is_empty() && !column.is_empty() => {
                Ok(Self::new(table, column))
            }
            _ => Err(ModelError::MalformedReference {
                reference: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ForeignKeyRef {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ForeignKeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}
