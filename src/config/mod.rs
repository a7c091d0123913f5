pub mod constants;

use std::path::{Path, PathBuf};

use constants::{
    BAR_CHART_FILENAME, CSV_FILENAME, OTHER_THRESHOLD, PIE_CHART_FILENAME, TOP_N,
};

/// Where and how the reporting collaborators write their output
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory that receives every output file
    pub output_dir: PathBuf,
    pub csv_filename: String,
    pub bar_chart_filename: String,
    pub pie_chart_filename: String,
    /// Number of records drawn in the bar chart
    pub top_n: usize,
    /// Categories seen fewer times than this collapse into "Other"
    pub other_threshold: usize,
}

impl ReportConfig {
    /// Default configuration rooted at `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_filename)
    }

    pub fn bar_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.bar_chart_filename)
    }

    pub fn pie_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.pie_chart_filename)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: Path::new(".").to_path_buf(),
            csv_filename: CSV_FILENAME.to_string(),
            bar_chart_filename: BAR_CHART_FILENAME.to_string(),
            pie_chart_filename: PIE_CHART_FILENAME.to_string(),
            top_n: TOP_N,
            other_threshold: OTHER_THRESHOLD,
        }
    }
}
