use clap::Parser;
use anyhow::{Context, Result};
use tracing::{info, error};

use edgar13f::cli::Cli;
use edgar13f::config::Config;
use edgar13f::edgar::HttpPageSource;
use edgar13f::pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Default log level is INFO if not specified
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("edgar13f=info"));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        error!("Parsing 13F for {} failed: {:#}", cli.identifier, e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    info!("Parsing 13F for {}...", cli.identifier);

    let source = HttpPageSource::new(&config).context("Failed to build HTTP client")?;
    let path = pipeline::export_latest_13f(&source, &cli.identifier, &cli.output_dir).await?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!(
        "Successfully parsed! File is named {} and is located in {}",
        file_name,
        cli.output_dir.display()
    );

    Ok(())
}
