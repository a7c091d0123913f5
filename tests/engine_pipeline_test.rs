use trending_scout::config::ReportConfig;
use trending_scout::engine::{Pipeline, PipelineError};
use trending_scout::network::{DocumentSource, FetchedPage, NetworkError};
use trending_scout::report;
use url::Url;

// * End-to-end runs against an in-memory page source and real file sinks

const TRENDING_PAGE: &str = include_str!("fixtures/trending.html");
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

struct CannedSource {
    status: u16,
    body: &'static str,
}

impl DocumentSource for CannedSource {
    async fn fetch(&self, _url: &Url) -> Result<FetchedPage, NetworkError> {
        Ok(FetchedPage {
            status: self.status,
            body: self.body.to_string(),
        })
    }
}

fn pipeline_into(dir: &std::path::Path, status: u16, body: &'static str) -> (Pipeline<CannedSource>, ReportConfig) {
    let config = ReportConfig::in_dir(dir);
    let pipeline = Pipeline::trending(CannedSource { status, body }, report::default_sinks(&config)).unwrap();
    (pipeline, config)
}

#[tokio::test]
async fn test_full_run_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let (pipeline, config) = pipeline_into(dir.path(), 200, TRENDING_PAGE);

    let summary = pipeline.run().await.unwrap();
    assert_eq!(summary.dataset.len(), 5);
    assert_eq!(
        summary.files_written,
        vec![config.csv_path(), config.bar_chart_path(), config.pie_chart_path()]
    );

    let csv = std::fs::read_to_string(config.csv_path()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Repository,Language,Stars,Forks");
    assert_eq!(lines[1], "python/cpython,Python,65110,31002");
    assert_eq!(lines[2], "astral-sh/uv,Rust,65110,1900");
    assert_eq!(lines.len(), 6);

    for chart in [config.bar_chart_path(), config.pie_chart_path()] {
        let bytes = std::fs::read(&chart).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC), "{} is not a PNG", chart.display());
    }
}

#[tokio::test]
async fn test_bad_status_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (pipeline, config) = pipeline_into(dir.path(), 429, TRENDING_PAGE);

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(err, PipelineError::BadStatus(429)));
    assert_eq!(err.to_string(), "Failed to retrieve the page. Status code: 429");
    assert!(!config.csv_path().exists());
    assert!(!config.bar_chart_path().exists());
    assert!(!config.pie_chart_path().exists());
}

#[tokio::test]
async fn test_page_without_items_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (pipeline, config) = pipeline_into(dir.path(), 200, "<html><body><p>Nothing trending</p></body></html>");

    let err = pipeline.run().await.unwrap_err();
    assert!(matches!(err, PipelineError::EmptyResult));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(!config.csv_path().exists());
}

#[tokio::test]
async fn test_collect_ranks_without_sinks() {
    let source = CannedSource { status: 200, body: TRENDING_PAGE };
    let pipeline = Pipeline::new(source, Url::parse("https://example.test/trending").unwrap(), Vec::new());

    let dataset = pipeline.collect().await.unwrap();
    let stars: Vec<u64> = dataset.iter().map(|r| r.stars).collect();
    assert_eq!(stars, vec![65110, 65110, 19402, 812, 0]);
}
