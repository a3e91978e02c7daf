mod config;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};
use tracing::{info, warn};

use kgrade_api::{HttpApi, PipelineApiAdapter};
use kgrade_core::KubeJobSubmitter;
use kgrade_observe::{LoggerConfig, init_logger};

use crate::config::ServerConfig;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) logger
    let log_cfg = LoggerConfig::from_env()?;
    init_logger(&log_cfg)?;
    info!(format = %log_cfg.format, level = log_cfg.level.as_str(), "logger initialized");

    // 2) settings
    let cfg = ServerConfig::from_env()?;

    // 3) cluster client, built once and shared by every request
    let client = cfg.credentials.connect().await?;
    let submitter = Arc::new(KubeJobSubmitter::new(client, cfg.pipeline.namespace.clone()));
    info!(namespace = submitter.namespace(), "cluster client ready");

    // 4) http
    let handler = Arc::new(PipelineApiAdapter::new(submitter, cfg.pipeline));
    let app = HttpApi::new(handler).router();

    let listener = TcpListener::bind(cfg.bind).await?;
    info!(addr = %cfg.bind, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on SIGTERM (pod termination) or SIGINT.
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
        _ = tokio::signal::ctrl_c() => info!("received SIGINT, shutting down"),
    }
}
