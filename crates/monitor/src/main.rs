use autoshield_monitor::{cli, config, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    let args = cli::parse();
    let cfg = config::load_from_file(&args.config_path)?;

    if args.once {
        let processed = run::run_once(&cfg).await;
        tracing::info!(processed, "sweep complete");
    } else {
        run::run_forever(&cfg).await;
    }

    Ok(())
}
