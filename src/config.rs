//! Export run configuration.
//!
//! Default output locations and the explicit model-source selection. The
//! source of the relational model is chosen by configuration, never
//! discovered: a JSON model file or a live database connection, one of which
//! must be provided for an export run to make sense.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{JsonModelFile, ModelSource, PostgresIntrospector};

/// Default directory where the schema file and PFB container get written.
pub const DEFAULT_OUTPUT_DIR: &str = "pfb_export";

/// File name of the persisted graph schema document.
pub const SCHEMA_FILE_NAME: &str = "pfb-schema.json";

/// File name of the PFB container.
pub const PFB_FILE_NAME: &str = "pfb.avro";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "No source of entities configured: pass --models <file> or --database-url <url>"
    )]
    NoModelSource,
}

/// Where the relational model comes from.
///
/// When both a model file and a database URL are given, the database wins:
/// a live connection is the more authoritative description of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSourceConfig {
    /// JSON model definition file
    File { path: PathBuf },
    /// Live PostgreSQL database to introspect
    Database { url: String },
}

impl ModelSourceConfig {
    /// Resolve the model source from the CLI options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoModelSource` when neither option was given;
    /// this is the fatal configuration error that aborts the run before any
    /// output is produced.
    pub fn from_options(
        models: Option<PathBuf>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        match (models, database_url) {
            (_, Some(url)) => Ok(ModelSourceConfig::Database { url }),
            (Some(path), None) => Ok(ModelSourceConfig::File { path }),
            (None, None) => Err(ConfigError::NoModelSource),
        }
    }

    /// Build the loader backend for this configuration.
    pub fn into_source(self) -> Box<dyn ModelSource> {
        match self {
            ModelSourceConfig::File { path } => Box::new(JsonModelFile::new(path)),
            ModelSourceConfig::Database { url } => Box::new(PostgresIntrospector::new(&url)),
        }
    }
}

/// Path of the schema document inside the output directory.
pub fn schema_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(SCHEMA_FILE_NAME)
}

/// Path of the PFB container inside the output directory.
pub fn pfb_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(PFB_FILE_NAME)
}
