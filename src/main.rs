use anyhow::Result;
use clap::Parser;
use cart_manager::{cli::{Args, CliApp}, utils::Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let app = CliApp::new(&config, &args);
    tracing::debug!("Working cart file: {}", app.cart_file().display());
    app.run(args.command)
}
