//! Deeper - terminal front end entry point.

use deeper_engine::api::Console;
use deeper_engine::infrastructure::config::{load_dotenv_from_repo_root, AppConfig};
use deeper_engine::App;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout belongs to the console
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deeper_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Deeper");

    let config = AppConfig::from_env();
    let stack_depth = config.stack_depth;
    let mut app = App::from_config(config)?;

    // A failed load leaves an empty deck; the session stays usable
    if let Err(e) = app.refresh_catalog().await {
        tracing::error!(error = %e, "Failed to load catalog");
    }

    let mut console = Console::new(std::io::stdout(), stack_depth);
    console
        .run(&mut app.session, BufReader::new(tokio::io::stdin()))
        .await?;

    if let Err(e) = app.session.flush() {
        tracing::error!(error = %e, "Progress could not be saved before exit");
    }

    tracing::info!("Deeper stopped");
    Ok(())
}
