// * Reporting Collaborators
// * Consume the ranked dataset: CSV persistence, two raster charts, console preview.

pub mod charts;
pub mod csv_export;
pub mod preview;

pub use charts::{language_distribution, LanguagePieChart, StarsBarChart};
pub use csv_export::CsvExporter;
pub use preview::render_preview;

use crate::config::ReportConfig;
use crate::refinery::Dataset;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

/// A collaborator that turns a ranked dataset into exactly one output file
pub trait ReportSink {
    /// Short name used in logs and console narration
    fn name(&self) -> &str;

    /// Writes the output, overwriting any previous file, and returns its path
    fn emit(&self, dataset: &Dataset) -> Result<PathBuf, ReportError>;
}

/// The standard set of sinks: CSV table, bar chart, pie chart, in that order
pub fn default_sinks(config: &ReportConfig) -> Vec<Box<dyn ReportSink>> {
    vec![
        Box::new(CsvExporter::new(config.csv_path())),
        Box::new(StarsBarChart::new(config.bar_chart_path(), config.top_n)),
        Box::new(LanguagePieChart::new(config.pie_chart_path(), config.other_threshold)),
    ]
}

// * Creates the parent directory of an output file when it does not exist yet
pub(crate) fn ensure_parent(path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
