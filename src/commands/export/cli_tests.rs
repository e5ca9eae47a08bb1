//! CLI parsing tests for the export command using the test DSL.
//!
//! The data_dir positional argument is validated at parse time, so the
//! success-path tests run against a real temporary directory.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[fixture]
    fn data_dir() -> TempDir {
        TempDir::new().expect("Failed to create temp dir")
    }

    crate::cli_required_arg_test! {
        command: "export",
        test_name: test_export_requires_data_dir,
        required_arg: "<DATA_DIR>",
    }

    crate::cli_error_test! {
        command: "export",
        test_name: test_export_rejects_missing_data_dir,
        args: ["/nonexistent/payloads"],
    }

    #[rstest]
    fn test_export_defaults(data_dir: TempDir) {
        let dir = data_dir.path().to_str().unwrap();
        let args = Args::try_parse_from(["pfb_export", "export", dir]).unwrap();
        match args.command {
            crate::commands::Command::Export(cmd) => {
                assert_eq!(cmd.data_dir, data_dir.path());
                assert_eq!(cmd.models, None);
                assert_eq!(cmd.database_url, None);
                assert_eq!(cmd.output_dir, PathBuf::from("pfb_export"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[rstest]
    fn test_export_with_options(data_dir: TempDir) {
        let dir = data_dir.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "pfb_export",
            "export",
            dir,
            "-m",
            "models.json",
            "-o",
            "./out",
        ])
        .unwrap();
        match args.command {
            crate::commands::Command::Export(cmd) => {
                assert_eq!(cmd.models, Some(PathBuf::from("models.json")));
                assert_eq!(cmd.output_dir, PathBuf::from("./out"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[rstest]
    fn test_export_with_database_url(data_dir: TempDir) {
        let dir = data_dir.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "pfb_export",
            "export",
            dir,
            "--database-url",
            "postgres://localhost/kf",
        ])
        .unwrap();
        match args.command {
            crate::commands::Command::Export(cmd) => {
                assert_eq!(cmd.database_url, Some("postgres://localhost/kf".to_string()));
            }
            _ => panic!("Expected Export command"),
        }
    }
}
