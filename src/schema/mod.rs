//! Graph schema output types and persistence.
//!
//! The graph schema is the transform's output: every relational entity
//! becomes a node type with typed attributes, and every foreign key becomes
//! an explicit relationship edge to another node type.
//!
//! # Overview
//!
//! The schema system consists of two components:
//!
//! 1. **Core Types** (`types.rs`):
//!    - `LogicalType` - The closed set of primitive serialization types
//!    - `AttributeType` - A bare, nullable-union, or unresolved attribute type
//!    - `Attribute` / `Relationship` - One column's graph representation
//!    - `EntitySchema` / `GraphSchema` - The assembled per-entity and
//!      whole-model schema
//!
//! 2. **Writer** (`writer.rs`):
//!    - Persists the schema as a JSON document with alphabetically sorted
//!      keys and stable 4-space indentation, written atomically so a failed
//!      run never leaves a partial file behind.

mod types;
mod writer;

pub use types::{
    Attribute, AttributeType, EntitySchema, GraphSchema, LogicalSubtype, LogicalType, Relationship,
};
pub use writer::{render_schema, write_schema, WriteError};
