// * Telemetry - structured logging
// * JSON lines on stderr, kept apart from the operator narration on stdout.

use crate::config::constants::LOG_FILTER;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use trending_scout::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(url = "https://github.com/trending", "Fetching page");
/// ```
pub fn init_tracing() {
    // * A second call is a no-op rather than a panic
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
