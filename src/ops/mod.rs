// * Operations: observability for a single pipeline run

pub mod telemetry;

// * Re-exports for convenient access
pub use telemetry::init_tracing;
