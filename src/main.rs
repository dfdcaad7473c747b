mod config;
mod converter;
mod error;
mod models;
mod utils;

use anyhow::Result;
use config::Config;
use converter::FormatConverter;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new()?;
    info!("Current Working Directory: {}", config.base_dir().display());

    // Failures are already logged by the converter.
    FormatConverter::convert(
        &config.source_path(),
        &config.destination_path(),
        config.layout,
    );

    Ok(())
}
