use clap::Parser;
use marine_tracker_client::cli::Cli;
use marine_tracker_client::config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Loaded once from the environment; .env must be read before this
    let config = config::config();
    tracing::debug!("Using {:?} backend at {}", config.environment, config.api.base_url);

    let result = match config.validate() {
        Ok(()) => marine_tracker_client::cli::run(cli, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        match std::env::var("MTP_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => eprintln!("Error: {e:?}"),
            _ => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }

    Ok(())
}
