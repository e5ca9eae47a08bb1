//! pfb_export library - Relational model to PFB graph schema exporter
//!
//! Transforms a relational data model (tables, columns, foreign keys) into a
//! self-describing graph schema suitable for serializing relational data into
//! a single portable PFB (Portable Format for Bioinformatics) container.

pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod model;
pub mod output;
pub mod schema;
pub mod transform;

#[macro_use]
pub mod test_macros;
