// * Configuration Constants
// * Central location for the source page, selectors, sentinels and output geometry

// * Ranking page fetched once per run
pub const TRENDING_URL: &str = "https://github.com/trending";

// * Desktop browser identity sent with the page request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// * Page fetch timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// * CSS patterns for the trending page markup
pub const ITEM_PATTERN: &str = "article.Box-row";
pub const NAME_PATTERN: &str = "h2 a";
pub const LANGUAGE_PATTERN: &str = r#"span[itemprop="programmingLanguage"]"#;
pub const MUTED_LINK_PATTERN: &str = "a.Link--muted";

// * Sentinels substituted when a field cannot be extracted
pub const NAME_SENTINEL: &str = "N/A";
pub const CATEGORY_SENTINEL: &str = "Unknown";
pub const COUNT_SENTINEL: u64 = 0;

// * Output files, overwritten on every run
pub const CSV_FILENAME: &str = "github_trending_repos.csv";
pub const BAR_CHART_FILENAME: &str = "top_repos_by_stars.png";
pub const PIE_CHART_FILENAME: &str = "language_distribution.png";
pub const CSV_HEADERS: [&str; 4] = ["Repository", "Language", "Stars", "Forks"];

// * Reporting shape
pub const TOP_N: usize = 13;
pub const PREVIEW_ROWS: usize = 5;
pub const OTHER_THRESHOLD: usize = 2;
pub const OTHER_LABEL: &str = "Other";

// * Chart raster sizes in pixels (12x6 in and 10x8 in at 300 dpi)
pub const BAR_CHART_SIZE: (u32, u32) = (3600, 1800);
pub const PIE_CHART_SIZE: (u32, u32) = (3000, 2400);

// * Default log filter; the environment is never consulted
pub const LOG_FILTER: &str = "trending_scout=info,warn";
