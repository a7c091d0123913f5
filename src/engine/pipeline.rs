// * Linear extract-transform-load run
// * fetch -> status check -> parse -> item selection -> table -> rank -> sinks
// * Any failure before the sinks short-circuits: no file is written.

use crate::config::constants::TRENDING_URL;
use crate::network::{DocumentSource, NetworkError};
use crate::refinery::{self, Dataset, TableBuilder};
use crate::report::{ReportError, ReportSink};
use scraper::Html;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to retrieve the page: {0}")]
    Retrieval(#[from] NetworkError),

    #[error("Failed to retrieve the page. Status code: {0}")]
    BadStatus(u16),

    #[error("The page contained no repository entries")]
    EmptyResult,

    #[error("Report output failed: {0}")]
    Report(#[from] ReportError),
}

impl PipelineError {
    /// Both transport failures and non-success statuses count as retrieval failures
    pub fn is_retrieval_failure(&self) -> bool {
        matches!(self, PipelineError::Retrieval(_) | PipelineError::BadStatus(_))
    }

    /// Follow-up line for the console; only retrieval failures point at the connection
    pub fn operator_hint(&self) -> Option<&'static str> {
        self.is_retrieval_failure()
            .then_some("Failed to scrape data. Please check your connection or try again later.")
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct RunSummary {
    /// The dataset after ranking
    pub dataset: Dataset,
    /// Output files, in sink order
    pub files_written: Vec<PathBuf>,
}

pub struct Pipeline<S: DocumentSource> {
    source: S,
    url: Url,
    sinks: Vec<Box<dyn ReportSink>>,
}

impl<S: DocumentSource> Pipeline<S> {
    pub fn new(source: S, url: Url, sinks: Vec<Box<dyn ReportSink>>) -> Self {
        Self { source, url, sinks }
    }

    /// Pipeline pointed at the public trending page
    pub fn trending(source: S, sinks: Vec<Box<dyn ReportSink>>) -> Result<Self, PipelineError> {
        let url = Url::parse(TRENDING_URL).map_err(NetworkError::from)?;
        Ok(Self::new(source, url, sinks))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches, extracts and ranks without touching any sink
    pub async fn collect(&self) -> Result<Dataset, PipelineError> {
        let page = self.source.fetch(&self.url).await?;
        if !page.is_success() {
            warn!(url = %self.url, status = page.status, "Non-success status");
            return Err(PipelineError::BadStatus(page.status));
        }

        let document = Html::parse_document(&page.body);
        let items = refinery::select_items(&document);
        if items.is_empty() {
            warn!(url = %self.url, "No item nodes in document");
            return Err(PipelineError::EmptyResult);
        }

        let dataset = TableBuilder::build(items).rank();
        info!(records = dataset.len(), "Dataset built and ranked");
        Ok(dataset)
    }

    /// Full run: collect, then hand the ranked dataset to every sink in order
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let dataset = self.collect().await?;

        let mut files_written = Vec::with_capacity(self.sinks.len());
        for sink in &self.sinks {
            let path = sink.emit(&dataset)?;
            info!(sink = sink.name(), path = %path.display(), "Sink finished");
            files_written.push(path);
        }

        Ok(RunSummary {
            dataset,
            files_written,
        })
    }
}
