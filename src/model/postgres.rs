//! Database introspection model loading backend.
//!
//! Builds the relational model by querying a live PostgreSQL database's
//! `information_schema`: base tables, columns in ordinal position, primary
//! key membership, and foreign key constraints. PostgreSQL type names are
//! normalized to the canonical native type names the column classifier
//! understands; unrecognized types pass through verbatim and surface later
//! as type-resolution warnings.

use std::collections::{HashMap, HashSet};

use postgres::{Client, NoTls};

use super::{ColumnDef, ForeignKeyRef, ModelError, ModelRegistry, ModelSource, TableModel};

/// Loads the relational model by introspecting a PostgreSQL database.
pub struct PostgresIntrospector {
    connection_string: String,
    schema: String,
}

impl PostgresIntrospector {
    /// Create an introspector for the given connection string, targeting the
    /// `public` schema.
    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_string(),
            schema: "public".to_string(),
        }
    }

    /// Target a different database schema than `public`.
    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = schema.to_string();
        self
    }

    fn primary_key_columns(
        &self,
        client: &mut Client,
    ) -> Result<HashSet<(String, String)>, ModelError> {
        let rows = client
            .query(
                "SELECT kcu.table_name, kcu.column_name
                 FROM information_schema.table_constraints tc
                 JOIN information_schema.key_column_usage kcu
                   ON kcu.constraint_name = tc.constraint_name
                  AND kcu.table_schema = tc.table_schema
                 WHERE tc.constraint_type = 'PRIMARY KEY'
                   AND tc.table_schema = $1",
                &[&self.schema],
            )
            .map_err(introspection_failed)?;

        Ok(rows
            .iter()
            .map(|row| (row.get::<_, String>(0), row.get::<_, String>(1)))
            .collect())
    }

    fn foreign_key_columns(
        &self,
        client: &mut Client,
    ) -> Result<HashMap<(String, String), ForeignKeyRef>, ModelError> {
        // Multi-column foreign keys must pair each referencing column with
        // its own referenced column, so the referenced side is joined on
        // position_in_unique_constraint rather than constraint name alone.
        let rows = client
            .query(
                "SELECT kcu.table_name, kcu.column_name,
                        target.table_name AS target_table,
                        target.column_name AS target_column
                 FROM information_schema.referential_constraints rc
                 JOIN information_schema.key_column_usage kcu
                   ON kcu.constraint_name = rc.constraint_name
                  AND kcu.constraint_schema = rc.constraint_schema
                 JOIN information_schema.key_column_usage target
                   ON target.constraint_name = rc.unique_constraint_name
                  AND target.constraint_schema = rc.unique_constraint_schema
                  AND target.ordinal_position = kcu.position_in_unique_constraint
                 WHERE kcu.table_schema = $1",
                &[&self.schema],
            )
            .map_err(introspection_failed)?;

        Ok(rows
            .iter()
            .map(|row| {
                let key = (row.get::<_, String>(0), row.get::<_, String>(1));
                let target_table: String = row.get(2);
                let target_column: String = row.get(3);
                (key, ForeignKeyRef::new(&target_table, &target_column))
            })
            .collect())
    }
}

impl ModelSource for PostgresIntrospector {
    fn load(&self) -> Result<ModelRegistry, ModelError> {
        let mut client =
            Client::connect(&self.connection_string, NoTls).map_err(introspection_failed)?;

        let primary_keys = self.primary_key_columns(&mut client)?;
        let mut foreign_keys = self.foreign_key_columns(&mut client)?;

        // Ordering by table name and ordinal position keeps the registry
        // deterministic across runs against the same database.
        let rows = client
            .query(
                "SELECT c.table_name, c.column_name, c.data_type, c.is_nullable
                 FROM information_schema.columns c
                 JOIN information_schema.tables t
                   ON t.table_name = c.table_name
                  AND t.table_schema = c.table_schema
                 WHERE c.table_schema = $1
                   AND t.table_type = 'BASE TABLE'
                 ORDER BY c.table_name, c.ordinal_position",
                &[&self.schema],
            )
            .map_err(introspection_failed)?;

        let mut registry = ModelRegistry::new();
        let mut current: Option<TableModel> = None;

        for row in &rows {
            let table_name: String = row.get(0);
            let column_name: String = row.get(1);
            let data_type: String = row.get(2);
            let is_nullable: String = row.get(3);

            if current.as_ref().map(|t| t.name.as_str()) != Some(table_name.as_str()) {
                if let Some(table) = current.take() {
                    registry.insert(table)?;
                }
                current = Some(TableModel {
                    name: table_name.clone(),
                    columns: vec![],
                });
            }

            let key = (table_name.clone(), column_name.clone());
            let primary_key = primary_keys.contains(&key);
            let column = ColumnDef {
                name: column_name,
                native_type: native_type_from_pg(&data_type),
                nullable: is_nullable == "YES" && !primary_key,
                primary_key,
                foreign_key: foreign_keys.remove(&key),
            };
            if let Some(table) = current.as_mut() {
                table.columns.push(column);
            }
        }
        if let Some(table) = current {
            registry.insert(table)?;
        }

        log::debug!(
            "Introspected {} table(s) from schema '{}'",
            registry.len(),
            self.schema
        );
        Ok(registry)
    }

    fn describe(&self) -> String {
        format!("database schema '{}'", self.schema)
    }
}

fn introspection_failed(e: postgres::Error) -> ModelError {
    ModelError::IntrospectionFailed {
        message: e.to_string(),
    }
}

/// Normalize an `information_schema` data type name to the canonical native
/// type names the classifier's lookup table is keyed on.
fn native_type_from_pg(data_type: &str) -> String {
    match data_type {
        "text" => "Text".to_string(),
        "character varying" | "character" => "String".to_string(),
        "boolean" => "Boolean".to_string(),
        "double precision" | "real" | "numeric" => "Float".to_string(),
        "integer" | "bigint" | "smallint" => "Integer".to_string(),
        "uuid" => "UUID".to_string(),
        "timestamp without time zone" | "timestamp with time zone" => "DateTime".to_string(),
        other => other.to_string(),
    }
}
