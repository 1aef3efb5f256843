// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Wire types for the sitemap check endpoint.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// Request to check a site's robots.txt and sitemaps
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CheckSitemapRequest {
    /// Any URL on the site to inspect; only its origin is used
    #[serde(default)]
    pub url: Option<String>,
}

/// Outcome of fetching `<origin>/robots.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotsStatus {
    /// Served with HTTP 200
    Found,
    /// Any other HTTP status; the code is kept for diagnostics only
    NotFound { status: u16 },
    /// Transport failure (DNS, connect, timeout, unreadable body)
    FetchError,
}

impl RobotsStatus {
    pub fn is_found(&self) -> bool {
        matches!(self, RobotsStatus::Found)
    }
}

impl fmt::Display for RobotsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotsStatus::Found => write!(f, "Found"),
            RobotsStatus::NotFound { .. } => write!(f, "Not Found"),
            RobotsStatus::FetchError => write!(f, "Error fetching"),
        }
    }
}

impl Serialize for RobotsStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Effective access verdict for one crawler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CrawlerVerdict {
    Blocked,
    Allowed,
}

/// Access rule inferred for a known crawler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CrawlerRule {
    /// Crawler user-agent token, e.g. `GPTBot`
    pub bot: String,
    pub status: CrawlerVerdict,
}

/// Where a sitemap candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SitemapSource {
    /// Listed in a `Sitemap:` directive
    #[serde(rename = "robots.txt")]
    Declared,
    /// Conventional location, kept only if it answers 200
    #[serde(rename = "guessed")]
    Guessed,
}

/// Result of the liveness probe for one candidate.
///
/// Serializes as the bare status code, `"Error"` on transport failure,
/// or `null` while the candidate has not been probed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Unprobed,
    Status(u16),
    Error,
}

impl ProbeStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeStatus::Status(200))
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProbeStatus::Unprobed => serializer.serialize_none(),
            ProbeStatus::Status(code) => serializer.serialize_u16(*code),
            ProbeStatus::Error => serializer.serialize_str("Error"),
        }
    }
}

/// A sitemap URL under consideration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SitemapCandidate {
    pub url: String,
    pub source: SitemapSource,
    /// HTTP status code of the HEAD probe, or `"Error"`
    #[schema(value_type = Object)]
    pub status: ProbeStatus,
}

impl SitemapCandidate {
    pub fn declared(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: SitemapSource::Declared,
            status: ProbeStatus::Unprobed,
        }
    }

    pub fn guessed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            source: SitemapSource::Guessed,
            status: ProbeStatus::Unprobed,
        }
    }
}

/// Response payload of a sitemap check
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// `Found`, `Not Found` or `Error fetching`
    #[schema(value_type = String)]
    pub robots_status: RobotsStatus,
    /// Verdicts for the configured crawler roster; unmentioned crawlers are omitted
    pub llm_rules: Vec<CrawlerRule>,
    pub sitemaps: Vec<SitemapCandidate>,
}

/// Error payload returned for rejected or failed checks
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine-readable reason: `missing_url`, `invalid_url` or `unexpected_failure`
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
