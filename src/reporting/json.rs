use std::path::Path;
use anyhow::{Result, Context};
use tracing::info;

use super::model::Report;

/// JSON report generator
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    /// Create a new JSON report generator
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(&self, report: &Report, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        tokio::fs::write(output_path, json)
            .await
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

        info!("Report written to {}", output_path.display());
        Ok(())
    }
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
