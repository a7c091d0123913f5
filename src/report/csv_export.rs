// * Persistence Sink
// * Header row `Repository,Language,Stars,Forks`, one row per record, no index column.

use crate::config::constants::CSV_HEADERS;
use crate::refinery::Dataset;
use crate::report::{ensure_parent, ReportError, ReportSink};
use std::path::PathBuf;
use tracing::info;

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serializes the dataset into any writer
    pub fn write_to<W: std::io::Write>(dataset: &Dataset, writer: W) -> Result<(), ReportError> {
        // * Header is written by hand so an empty dataset still gets one
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(CSV_HEADERS)?;
        for record in dataset {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl ReportSink for CsvExporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn emit(&self, dataset: &Dataset) -> Result<PathBuf, ReportError> {
        ensure_parent(&self.path)?;
        let file = std::fs::File::create(&self.path)?;
        Self::write_to(dataset, std::io::BufWriter::new(file))?;

        info!(path = %self.path.display(), rows = dataset.len(), "CSV exported");
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refinery::Record;

    fn to_string(dataset: &Dataset) -> String {
        let mut buf = Vec::new();
        CsvExporter::write_to(dataset, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let dataset = Dataset::new(vec![
            Record::new("b/high", "Rust", 200, 20),
            Record::new("a/low", "Unknown", 50, 0),
        ]);

        assert_eq!(
            to_string(&dataset),
            "Repository,Language,Stars,Forks\nb/high,Rust,200,20\na/low,Unknown,50,0\n"
        );
    }

    #[test]
    fn test_empty_dataset_still_has_header() {
        assert_eq!(to_string(&Dataset::default()), "Repository,Language,Stars,Forks\n");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let dataset = Dataset::new(vec![Record::new("x/y", "C, C++", 1, 2)]);
        assert!(to_string(&dataset).contains("x/y,\"C, C++\",1,2"));
    }

    #[test]
    fn test_emit_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out.csv"));

        exporter
            .emit(&Dataset::new(vec![Record::new("old/one", "Go", 1, 1)]))
            .unwrap();
        let path = exporter
            .emit(&Dataset::new(vec![Record::new("new/one", "Go", 2, 2)]))
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("new/one"));
        assert!(!written.contains("old/one"));
    }
}
