//! JSON report output

use chrono::{DateTime, Utc};
use pavecarbon_domain::service::ComparisonReport;
use pavecarbon_types::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Comparison report stamped with its generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Utc>,
    pub report: ComparisonReport,
}

impl ReportDocument {
    pub fn new(report: ComparisonReport) -> Self {
        Self {
            generated_at: Utc::now(),
            report,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write a comparison report as pretty-printed JSON
pub fn write_report_json(report: &ComparisonReport, output_path: &Path) -> Result<()> {
    let document = ReportDocument::new(report.clone());
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
