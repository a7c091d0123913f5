use std::process::ExitCode;

use trending_scout::config::constants::PREVIEW_ROWS;
use trending_scout::config::ReportConfig;
use trending_scout::engine::{Pipeline, PipelineError};
use trending_scout::network::TrendingClient;
use trending_scout::ops::telemetry;
use trending_scout::report::{self, render_preview};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();

    println!("GitHub Trending Repositories Analysis");
    println!("{}", "-".repeat(40));

    match run().await {
        Ok(()) => {
            println!("\nAnalysis completed successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Run failed");
            println!("{err}");
            if let Some(hint) = err.operator_hint() {
                println!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PipelineError> {
    let config = ReportConfig::default();
    let client = TrendingClient::new()?;
    let pipeline = Pipeline::trending(client, report::default_sinks(&config))?;

    println!("Fetching GitHub trending repositories...");
    let summary = pipeline.run().await?;

    println!("Successfully scraped {} trending repositories", summary.dataset.len());
    println!("\nTop trending repositories:");
    print!("{}", render_preview(&summary.dataset, PREVIEW_ROWS));

    println!("\n Data exported to {}", config.csv_path().display());
    println!("Created visualization of top {} repositories by stars", config.top_n);
    println!("Created visualization of language distribution");
    Ok(())
}
