//! Relational model registry and loading backends.
//!
//! The model registry is the in-memory holder of the already-loaded
//! relational model: a mapping from table name to table definition with its
//! ordered columns, types, nullability, and foreign keys. The transformer
//! consumes it read-only; it is populated by exactly one `ModelSource`
//! backend, selected explicitly by configuration:
//!
//! - `JsonModelFile` - loads table definitions from a JSON model file
//! - `PostgresIntrospector` - builds the definitions by introspecting a live
//!   PostgreSQL database through `information_schema`
//!
//! # Type Decisions
//!
//! **Why a `Vec` plus name index instead of a plain map?**
//! The transform must iterate tables in source declaration order, not in
//! arbitrary hash order, so the registry keeps insertion order and uses the
//! index only for uniqueness and lookups.
//!
//! **Why a trait instead of runtime backend discovery?**
//! Any backend that can describe tables populates the same statically-typed
//! registry; the transformer never inspects where the model came from.

mod json;
mod postgres;
mod registry;
mod types;

pub use json::JsonModelFile;
pub use postgres::PostgresIntrospector;
pub use registry::ModelRegistry;
pub use types::{ColumnDef, ForeignKeyRef, TableModel};

use thiserror::Error;

/// Model loading error types
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to read model file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse model file '{path}': {message}")]
    ParseFailed { path: String, message: String },

    #[error("Duplicate table definition '{name}'")]
    DuplicateTable { name: String },

    #[error("Malformed foreign key reference '{reference}': expected <table>.<column>")]
    MalformedReference { reference: String },

    #[error("Database introspection failed: {message}")]
    IntrospectionFailed { message: String },
}

/// A backend capable of materializing the relational model.
///
/// Implementations own all I/O; the registry they return is a plain in-memory
/// value with no connection or file handle behind it.
pub trait ModelSource {
    /// Load the complete relational model into a registry.
    fn load(&self) -> Result<ModelRegistry, ModelError>;

    /// Human-readable description of where the model comes from, for logging.
    fn describe(&self) -> String;
}
