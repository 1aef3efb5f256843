// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use sitecheck_agent::app::{create_router, AppState};
use sitecheck_agent::models::config::{port_from_env, CheckerConfig};
use sitecheck_agent::models::version::VERSION;
use sitecheck_agent::services::checker::SiteChecker;
use sitecheck_agent::services::logging::init_tracing;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = CheckerConfig::from_env().context("Failed to load configuration")?;
    let port = port_from_env()?;

    tracing::info!(
        roster = ?config.crawler_roster,
        sitemap_paths = ?config.sitemap_paths,
        robots_timeout_secs = config.robots_timeout.as_secs(),
        probe_timeout_secs = config.probe_timeout.as_secs(),
        "Configuration loaded"
    );

    let checker = SiteChecker::new(config).context("Failed to initialize site checker")?;
    let app = create_router(AppState::new(checker));

    // Bind to 0.0.0.0 to accept connections from any network interface (required for Docker)
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("sitecheck-agent v{} listening on {}", VERSION, addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
