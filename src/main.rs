use anyhow::Result;
use clap::Parser;
use resume_tailor::cli::{self, Cli};
use resume_tailor::config::ClientConfig;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for rendered output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::load()?.with_base_url(cli.base_url.clone());

    cli::run(cli, config).await
}
