use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use super::ExportCmd;
use crate::commands::{CreateSchemaCmd, Execute, SchemaReport};
use crate::config;
use crate::container::build_container;

/// Result of a full export run.
#[derive(Debug, Serialize)]
pub struct ExportReport {
    /// The schema creation half of the run
    pub schema: SchemaReport,
    /// Where the PFB container would be written
    pub pfb_file: PathBuf,
    /// Number of entity records appended to the container
    pub records_appended: usize,
}

impl Execute for ExportCmd {
    type Output = ExportReport;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let schema_report = CreateSchemaCmd {
            models: self.models,
            database_url: self.database_url,
            output_dir: self.output_dir.clone(),
        }
        .execute()?;

        let pfb_file = config::pfb_file_path(&self.output_dir);
        let container = build_container(&schema_report.schema_file, &self.data_dir, &pfb_file)?;

        Ok(ExportReport {
            schema: schema_report,
            pfb_file,
            records_appended: container.records_appended,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    fn sample_model_json() -> &'static str {
        r#"{
            "tables": [
                {
                    "name": "study",
                    "columns": [
                        {"name": "kf_id", "type": "String", "primary_key": true}
                    ]
                }
            ]
        }"#
    }

    #[fixture]
    fn workspace() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("models.json"), sample_model_json()).unwrap();
        dir
    }

    #[rstest]
    fn test_export_writes_schema_and_appends_nothing(workspace: TempDir) {
        let cmd = ExportCmd {
            data_dir: workspace.path().join("data"),
            models: Some(workspace.path().join("models.json")),
            database_url: None,
            output_dir: workspace.path().join("out"),
        };
        let report = cmd.execute().expect("export should succeed");

        assert!(report.schema.schema_file.exists());
        assert_eq!(report.schema.entities, 1);
        assert_eq!(report.records_appended, 0);
        assert!(
            !report.pfb_file.exists(),
            "no container until record conversion lands"
        );
    }

    #[rstest]
    fn test_export_without_model_source_fails(workspace: TempDir) {
        let cmd = ExportCmd {
            data_dir: workspace.path().join("data"),
            models: None,
            database_url: None,
            output_dir: workspace.path().join("out"),
        };
        assert!(cmd.execute().is_err());
    }

    #[rstest]
    fn test_export_missing_data_dir_fails(workspace: TempDir) {
        let cmd = ExportCmd {
            data_dir: workspace.path().join("missing"),
            models: Some(workspace.path().join("models.json")),
            database_url: None,
            output_dir: workspace.path().join("out"),
        };
        assert!(cmd.execute().is_err());
    }
}
