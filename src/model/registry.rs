//! The model registry: in-memory holder of the loaded relational model.

use std::collections::HashMap;

use super::{ModelError, TableModel};

/// Mapping from table name to table definition, preserving insertion order.
///
/// Insertion order is the source declaration order, which the transform
/// relies on for deterministic output. Table names are unique; inserting a
/// duplicate is an error rather than a silent replacement.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    tables: Vec<TableModel>,
    index: HashMap<String, usize>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table definition to the registry.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DuplicateTable` if a table with the same name was
    /// already registered.
    pub fn insert(&mut self, table: TableModel) -> Result<(), ModelError> {
        if self.index.contains_key(&table.name) {
            return Err(ModelError::DuplicateTable {
                name: table.name.clone(),
            });
        }
        self.index.insert(table.name.clone(), self.tables.len());
        self.tables.push(table);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TableModel> {
        self.index.get(name).map(|&i| &self.tables[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates tables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TableModel> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
