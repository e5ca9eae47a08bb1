use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use super::CreateSchemaCmd;
use crate::commands::Execute;
use crate::config::{self, ModelSourceConfig};
use crate::schema::write_schema;
use crate::transform::{transform, TransformOutput};

/// Result of a schema creation run.
#[derive(Debug, Serialize)]
pub struct SchemaReport {
    /// Where the schema document was written
    pub schema_file: PathBuf,
    pub entities: usize,
    pub attributes: usize,
    pub relationships: usize,
    /// Recoverable conditions encountered during the transform
    pub warnings: Vec<String>,
}

impl SchemaReport {
    pub(crate) fn new(schema_file: PathBuf, output: &TransformOutput) -> Self {
        Self {
            schema_file,
            entities: output.schema.len(),
            attributes: output.schema.attribute_count(),
            relationships: output.schema.relationship_count(),
            warnings: output.warnings.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Execute for CreateSchemaCmd {
    type Output = SchemaReport;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let source = ModelSourceConfig::from_options(self.models, self.database_url)?.into_source();
        log::info!("Loading relational model from {}", source.describe());
        let registry = source.load()?;

        let output = transform(&registry)?;

        let schema_file = config::schema_file_path(&self.output_dir);
        write_schema(&output.schema, &schema_file)?;
        log::info!("Wrote graph schema to {}", schema_file.display());

        Ok(SchemaReport::new(schema_file, &output))
    }
}
