//! Output formatting for export command results.

use super::execute::ExportReport;
use crate::output::Outputable;

impl Outputable for ExportReport {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(self.schema.to_table());
        lines.push(String::new());

        if self.records_appended == 0 {
            lines.push(format!(
                "PFB container {} not written: 0 records appended",
                self.pfb_file.display()
            ));
        } else {
            lines.push(format!(
                "PFB container {}: {} records appended",
                self.pfb_file.display(),
                self.records_appended
            ));
        }

        lines.join("\n")
    }
}
