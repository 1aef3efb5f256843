// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The sitemap check pipeline.
//!
//! `resolve origin → fetch robots.txt → analyze → build candidates → probe → filter`.
//! Only origin resolution can fail the request; every later stage degrades
//! into fields of the [`CheckResult`].

use crate::models::check::CheckResult;
use crate::models::config::CheckerConfig;
use crate::services::candidates::{build_candidates, retain_live};
use crate::services::error::CheckError;
use crate::services::origin::Origin;
use crate::services::prober::probe_all;
use crate::services::robots::{analyze, RobotsAnalysis, TextingRobotsRules};
use crate::services::robots_fetcher::fetch_robots;
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Maximum redirects followed by robots.txt fetches and probes
const MAX_REDIRECTS: usize = 10;

/// Stateless checker; one instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct SiteChecker {
    client: Client,
    config: CheckerConfig,
}

impl SiteChecker {
    /// Create a checker with its own HTTP client
    pub fn new(config: CheckerConfig) -> Result<Self, CheckError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| CheckError::Unexpected(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Create a checker around an existing HTTP client
    pub fn with_client(client: Client, config: CheckerConfig) -> Self {
        Self { client, config }
    }

    /// Run the full check for `url`.
    ///
    /// Fails only when `url` is not an absolute http(s) URL; in that case no
    /// network request is made.
    #[instrument(skip(self), fields(origin = tracing::field::Empty))]
    pub async fn check(&self, url: &str) -> Result<CheckResult, CheckError> {
        let origin = Origin::resolve(url)?;
        tracing::Span::current().record("origin", origin.as_str());

        let fetch = fetch_robots(&self.client, &origin, self.config.robots_timeout).await;
        let robots_status = fetch.status();

        let analysis = match fetch.document() {
            Some(document) => {
                let rules = TextingRobotsRules::new(&origin, document);
                analyze(&rules, document, &self.config.crawler_roster)
            }
            None => {
                if robots_status.is_found() {
                    debug!("robots.txt is empty, skipping analysis");
                }
                RobotsAnalysis::default()
            }
        };

        let candidates = build_candidates(&analysis.sitemaps, &origin, &self.config.sitemap_paths);
        let probed = probe_all(
            &self.client,
            candidates,
            self.config.probe_timeout,
            self.config.max_concurrent_probes,
        )
        .await;
        let sitemaps = retain_live(probed);

        info!(
            robots_status = %robots_status,
            llm_rules = analysis.crawler_rules.len(),
            sitemaps = sitemaps.len(),
            "Sitemap check complete"
        );

        Ok(CheckResult {
            robots_status,
            llm_rules: analysis.crawler_rules,
            sitemaps,
        })
    }
}
