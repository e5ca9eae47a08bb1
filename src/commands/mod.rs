//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing

mod create_schema;
mod export;

pub use create_schema::{CreateSchemaCmd, SchemaReport};
pub use export::{ExportCmd, ExportReport};

use clap::Subcommand;
use std::error::Error;

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform the relational model into a graph schema and write it as JSON
    CreateSchema(CreateSchemaCmd),

    /// Create the graph schema and assemble the PFB container
    Export(ExportCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::CreateSchema(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
            Command::Export(cmd) => {
                let result = cmd.execute()?;
                Ok(result.format(format))
            }
        }
    }
}
