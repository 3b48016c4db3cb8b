mod loader;
mod models;
mod reports;

use anyhow::Context;
use loader::{JsonFileSource, VisitorSource};
use reports::LibraryReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Load visitors from `source` and render every report.
///
/// Nothing is rendered unless the load succeeds.
fn run(source: &impl VisitorSource) -> anyhow::Result<String> {
    let visitors = source.load().context("Loading visitors failed")?;

    let report = LibraryReport::build(&visitors);
    info!(
        "Reported on {} visitors, {} unique books",
        report.visitor_count(),
        report.unique_book_count()
    );

    Ok(report.to_string())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging on stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = JsonFileSource::new();
    info!(
        "Reading visitors from {} ({})",
        source.path().display(),
        source.source_name()
    );

    let output = run(&source)?;
    print!("{}", output);

    Ok(())
}
