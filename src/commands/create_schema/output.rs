//! Output formatting for create-schema command results.

use super::execute::SchemaReport;
use crate::output::Outputable;

impl Outputable for SchemaReport {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Schema written to {}", self.schema_file.display()));
        lines.push(String::new());
        lines.push(format!("Entities:      {}", self.entities));
        lines.push(format!("Attributes:    {}", self.attributes));
        lines.push(format!("Relationships: {}", self.relationships));

        if !self.warnings.is_empty() {
            lines.push(String::new());
            lines.push(format!("Warnings ({}):", self.warnings.len()));
            for warning in &self.warnings {
                lines.push(format!("  {}", warning));
            }
        }

        lines.join("\n")
    }
}
