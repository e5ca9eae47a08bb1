mod execute;
mod output;

pub use execute::SchemaReport;

use std::path::PathBuf;

use clap::Args;

use crate::config::DEFAULT_OUTPUT_DIR;

/// Transform the relational model into a graph schema
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  pfb_export create-schema -m models.json              # Transform a JSON model file
  pfb_export create-schema -d postgres://host/db       # Introspect a live database
  pfb_export create-schema -m models.json -o ./out     # Write schema under ./out")]
pub struct CreateSchemaCmd {
    /// Path to the JSON relational model definition file
    #[arg(short, long)]
    pub models: Option<PathBuf>,

    /// Connection URL of a database to introspect for the relational model
    #[arg(short, long)]
    pub database_url: Option<String>,

    /// Directory where the schema file gets written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
