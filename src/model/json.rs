//! File-based model loading backend.
//!
//! Reads table definitions from a JSON model file of the form:
//!
//! ```json
//! {
//!     "tables": [
//!         {
//!             "name": "study",
//!             "columns": [
//!                 {"name": "kf_id", "type": "String", "primary_key": true},
//!                 {"name": "name", "type": "Text"}
//!             ]
//!         }
//!     ]
//! }
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use super::{ModelError, ModelRegistry, ModelSource, TableModel};

#[derive(Debug, Deserialize)]
struct ModelFile {
    tables: Vec<TableModel>,
}

/// Loads the relational model from a JSON model definition file.
pub struct JsonModelFile {
    path: PathBuf,
}

impl JsonModelFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ModelSource for JsonModelFile {
    fn load(&self) -> Result<ModelRegistry, ModelError> {
        let content = fs::read_to_string(&self.path).map_err(|e| ModelError::FileReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let model_file: ModelFile =
            serde_json::from_str(&content).map_err(|e| ModelError::ParseFailed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut registry = ModelRegistry::new();
        for mut table in model_file.tables {
            // Primary key columns are non-nullable even when the model file
            // leaves `nullable` unset.
            for column in &mut table.columns {
                if column.primary_key {
                    column.nullable = false;
                }
            }
            registry.insert(table)?;
        }

        log::debug!(
            "Loaded {} table definition(s) from {}",
            registry.len(),
            self.path.display()
        );
        Ok(registry)
    }

    fn describe(&self) -> String {
        format!("model file {}", self.path.display())
    }
}
