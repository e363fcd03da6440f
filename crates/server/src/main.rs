use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use libreta_bot::Interpreter;
use libreta_server::config::Config;
use libreta_server::google::{DriveStore, GoogleAuth, SheetsLedger, VisionOcr};
use libreta_server::twilio::TwilioMedia;
use libreta_server::webhook;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path = Config::default_path();
    let config = Config::load(&config_path)?;
    tracing::info!(config = %config_path.display(), "configuration loaded");

    let auth = Arc::new(GoogleAuth::from_env().context("loading Google credentials")?);
    let media = TwilioMedia::from_env();

    let interpreter = Arc::new(Interpreter::new(
        config.directory(),
        config.routing_policy(),
        config.amount_extractor(),
        Arc::new(SheetsLedger::new(auth.clone(), config.sheets.clone())),
        Arc::new(DriveStore::new(auth.clone(), media.clone(), config.drive.clone())),
        Arc::new(VisionOcr::new(auth, media)),
    ));

    let app = webhook::router(interpreter);
    let addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "webhook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
