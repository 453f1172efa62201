use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use patent_predictor::{cli, launch};

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config()?;
    init_tracing(config.log_filter());

    tracing::debug!(
        model = %config.llm.model_name,
        output = %config.output_path.display(),
        credential_present = config.credential_present(),
        "configuration loaded"
    );

    launch(config).await
}
