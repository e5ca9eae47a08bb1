mod cli_tests;
mod execute;
mod output;

pub use execute::ExportReport;

use std::path::PathBuf;

use clap::Args;

use crate::config::DEFAULT_OUTPUT_DIR;

fn validate_dir_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("Directory not found: {}", path.display()))
    }
}

/// Create the graph schema and assemble the PFB container
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  pfb_export export ./data -m models.json          # Export file-defined model + payloads
  pfb_export export ./data -d postgres://host/db   # Export an introspected model")]
pub struct ExportCmd {
    /// Directory containing the JSON entity payloads that conform to the model
    #[arg(value_parser = validate_dir_exists)]
    pub data_dir: PathBuf,

    /// Path to the JSON relational model definition file
    #[arg(short, long)]
    pub models: Option<PathBuf>,

    /// Connection URL of a database to introspect for the relational model
    #[arg(short, long)]
    pub database_url: Option<String>,

    /// Directory where the schema file and PFB container get written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
