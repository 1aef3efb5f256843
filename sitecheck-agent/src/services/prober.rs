// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! HEAD-based liveness probing of sitemap candidates.

use crate::models::check::{ProbeStatus, SitemapCandidate};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Probe one URL with a HEAD request, bounded by `limit`.
///
/// The final status after redirects is recorded verbatim; timeouts and
/// transport failures become [`ProbeStatus::Error`].
pub async fn probe_url(client: &Client, url: &str, limit: Duration) -> ProbeStatus {
    match timeout(limit, client.head(url).send()).await {
        Ok(Ok(response)) => {
            let status = response.status().as_u16();
            debug!(url, status, "Probed sitemap candidate");
            ProbeStatus::Status(status)
        }
        Ok(Err(e)) => {
            warn!(url, error = %e, "Sitemap probe failed");
            ProbeStatus::Error
        }
        Err(_) => {
            warn!(url, timeout_ms = limit.as_millis() as u64, "Sitemap probe timed out");
            ProbeStatus::Error
        }
    }
}

/// Probe every candidate concurrently, at most `max_in_flight` at a time.
///
/// Each probe carries its own timeout, so a slow candidate never cuts
/// another one short. Output order matches input order.
pub async fn probe_all(
    client: &Client,
    candidates: Vec<SitemapCandidate>,
    per_probe_timeout: Duration,
    max_in_flight: usize,
) -> Vec<SitemapCandidate> {
    stream::iter(candidates)
        .map(|mut candidate| async move {
            candidate.status = probe_url(client, &candidate.url, per_probe_timeout).await;
            candidate
        })
        .buffered(max_in_flight.max(1))
        .collect()
        .await
}
