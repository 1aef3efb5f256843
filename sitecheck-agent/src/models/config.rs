// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Runtime configuration for the checker, read from environment variables.
//!
//! Every setting has a default, so the agent starts with an empty environment.
//! The crawler roster and conventional sitemap paths are plain data here so
//! tests can swap them without touching the pipeline.

use crate::models::version::VERSION;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Crawlers whose access rules are reported, in report order.
pub const DEFAULT_CRAWLER_ROSTER: &[&str] = &[
    "GPTBot",
    "CCBot",
    "Google-Extended",
    "anthropic-ai",
    "Claude-Web",
    "FacebookBot",
];

/// Well-known sitemap locations probed when robots.txt does not list them.
pub const DEFAULT_SITEMAP_PATHS: &[&str] =
    &["/sitemap.xml", "/sitemap_index.xml", "/sitemap/sitemap.xml"];

pub const DEFAULT_ROBOTS_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 16;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub crawler_roster: Vec<String>,
    pub sitemap_paths: Vec<String>,
    pub robots_timeout: Duration,
    pub probe_timeout: Duration,
    pub max_concurrent_probes: usize,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            crawler_roster: DEFAULT_CRAWLER_ROSTER
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sitemap_paths: DEFAULT_SITEMAP_PATHS.iter().map(|s| s.to_string()).collect(),
            robots_timeout: DEFAULT_ROBOTS_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            user_agent: default_user_agent(),
        }
    }
}

impl CheckerConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    /// Unset keys fall back to defaults; set-but-invalid keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("CRAWLER_ROSTER") {
            config.crawler_roster = parse_list("CRAWLER_ROSTER", &value)?;
        }

        if let Some(value) = lookup("SITEMAP_PATHS") {
            let paths = parse_list("SITEMAP_PATHS", &value)?;
            if let Some(bad) = paths.iter().find(|p| !p.starts_with('/')) {
                bail!("SITEMAP_PATHS entries must start with '/', got: {}", bad);
            }
            config.sitemap_paths = paths;
        }

        if let Some(value) = lookup("ROBOTS_TIMEOUT_SECS") {
            config.robots_timeout = parse_secs("ROBOTS_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = lookup("PROBE_TIMEOUT_SECS") {
            config.probe_timeout = parse_secs("PROBE_TIMEOUT_SECS", &value)?;
        }

        if let Some(value) = lookup("MAX_CONCURRENT_PROBES") {
            let max = value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("MAX_CONCURRENT_PROBES must be a number, got: {value}"))?;
            if max == 0 {
                bail!("MAX_CONCURRENT_PROBES must be at least 1");
            }
            config.max_concurrent_probes = max;
        }

        if let Some(value) = lookup("USER_AGENT") {
            let value = value.trim();
            if !value.is_empty() {
                config.user_agent = value.to_string();
            }
        }

        Ok(config)
    }
}

/// Port the HTTP server binds to, from `PORT`
pub fn port_from_env() -> Result<u16> {
    match env::var("PORT") {
        Ok(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got: {value}")),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

fn default_user_agent() -> String {
    format!("sitecheck-agent/{}", VERSION)
}

fn parse_list(key: &str, value: &str) -> Result<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        bail!("{key} must contain at least one entry");
    }
    Ok(items)
}

fn parse_secs(key: &str, value: &str) -> Result<Duration> {
    let secs = value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of seconds, got: {value}"))?;
    if secs == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = CheckerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.crawler_roster.len(), 6);
        assert_eq!(config.crawler_roster[0], "GPTBot");
        assert_eq!(
            config.sitemap_paths,
            vec!["/sitemap.xml", "/sitemap_index.xml", "/sitemap/sitemap.xml"]
        );
        assert_eq!(config.robots_timeout, Duration::from_secs(10));
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, format!("sitecheck-agent/{VERSION}"));
    }

    #[test]
    fn test_roster_override_keeps_order_and_trims() {
        let config =
            CheckerConfig::from_lookup(lookup_from(&[("CRAWLER_ROSTER", " Bytespider , GPTBot,")]))
                .unwrap();
        assert_eq!(config.crawler_roster, vec!["Bytespider", "GPTBot"]);
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let err = CheckerConfig::from_lookup(lookup_from(&[("CRAWLER_ROSTER", " , ")]))
            .unwrap_err();
        assert!(err.to_string().contains("CRAWLER_ROSTER"));
    }

    #[test]
    fn test_sitemap_paths_must_be_absolute() {
        let err = CheckerConfig::from_lookup(lookup_from(&[(
            "SITEMAP_PATHS",
            "/sitemap.xml,sitemap-news.xml",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("sitemap-news.xml"));
    }

    #[test]
    fn test_timeouts_and_concurrency_parse() {
        let config = CheckerConfig::from_lookup(lookup_from(&[
            ("ROBOTS_TIMEOUT_SECS", "3"),
            ("PROBE_TIMEOUT_SECS", "1"),
            ("MAX_CONCURRENT_PROBES", "4"),
            ("USER_AGENT", "TestAgent/1.0"),
        ]))
        .unwrap();
        assert_eq!(config.robots_timeout, Duration::from_secs(3));
        assert_eq!(config.probe_timeout, Duration::from_secs(1));
        assert_eq!(config.max_concurrent_probes, 4);
        assert_eq!(config.user_agent, "TestAgent/1.0");
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(CheckerConfig::from_lookup(lookup_from(&[("PROBE_TIMEOUT_SECS", "soon")])).is_err());
        assert!(CheckerConfig::from_lookup(lookup_from(&[("ROBOTS_TIMEOUT_SECS", "0")])).is_err());
        assert!(CheckerConfig::from_lookup(lookup_from(&[("MAX_CONCURRENT_PROBES", "0")])).is_err());
    }
}
