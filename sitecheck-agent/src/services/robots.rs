// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! robots.txt analysis: declared sitemaps and per-crawler access verdicts.
//!
//! Directive matching lives behind [`RobotsRules`] so the parser can be
//! swapped without touching the pipeline. The default implementation uses
//! `texting_robots`, which applies longest-match precedence between Allow and
//! Disallow and falls back to the `*` group for unlisted agents.
//!
//! Sitemap lines are read directly from the document: only the `Sitemap`
//! keyword counts, not the `Site-map` spelling `texting_robots` also accepts.

use crate::models::check::{CrawlerRule, CrawlerVerdict};
use crate::services::origin::Origin;
use regex::RegexBuilder;
use std::collections::HashSet;
use texting_robots::Robot;
use tracing::{debug, warn};

/// Queries the analyzer needs from a parsed robots.txt
pub trait RobotsRules {
    /// Sitemap URLs from `Sitemap:` lines, in document order
    fn declared_sitemaps(&self) -> Vec<String>;

    /// Whether `path` is disallowed for `agent` under the effective group
    fn is_disallowed(&self, path: &str, agent: &str) -> bool;
}

/// [`RobotsRules`] backed by `texting_robots`.
///
/// `texting_robots` compiles the rules for one agent at a time, so each
/// query parses the document again. Rosters are small and documents are
/// fetched once per request, so this stays cheap.
pub struct TextingRobotsRules<'a> {
    origin: &'a Origin,
    document: &'a str,
}

impl<'a> TextingRobotsRules<'a> {
    pub fn new(origin: &'a Origin, document: &'a str) -> Self {
        Self { origin, document }
    }

    fn robot_for(&self, agent: &str) -> Option<Robot> {
        match Robot::new(agent, self.document.as_bytes()) {
            Ok(robot) => Some(robot),
            Err(e) => {
                warn!(origin = %self.origin, agent, error = %e, "Failed to parse robots.txt");
                None
            }
        }
    }
}

impl RobotsRules for TextingRobotsRules<'_> {
    fn declared_sitemaps(&self) -> Vec<String> {
        sitemap_directives(self.document)
    }

    fn is_disallowed(&self, path: &str, agent: &str) -> bool {
        let url = self.origin.join(path);
        self.robot_for(agent)
            .map(|robot| !robot.allowed(&url))
            .unwrap_or(false)
    }
}

/// What the analyzer extracted from one robots.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsAnalysis {
    pub sitemaps: Vec<String>,
    pub crawler_rules: Vec<CrawlerRule>,
}

/// Run both analysis passes over a robots.txt document.
///
/// A crawler is `Blocked` when the root path is disallowed for it. Otherwise it
/// is `Allowed` only if the document names it in a `User-agent:` line; crawlers
/// the document never mentions get no entry.
pub fn analyze(rules: &dyn RobotsRules, document: &str, roster: &[String]) -> RobotsAnalysis {
    let sitemaps = dedup_in_order(rules.declared_sitemaps());

    let crawler_rules: Vec<CrawlerRule> = roster
        .iter()
        .filter_map(|bot| {
            let status = if rules.is_disallowed("/", bot) {
                CrawlerVerdict::Blocked
            } else if mentions_user_agent(document, bot) {
                CrawlerVerdict::Allowed
            } else {
                return None;
            };
            Some(CrawlerRule {
                bot: bot.clone(),
                status,
            })
        })
        .collect();

    debug!(
        sitemaps = sitemaps.len(),
        rules = crawler_rules.len(),
        "Analyzed robots.txt"
    );

    RobotsAnalysis {
        sitemaps,
        crawler_rules,
    }
}

/// Whether `agent` appears after a `User-agent:` directive anywhere in the document.
///
/// Case-insensitive, and like a prefix match: `GPTBot` also matches `GPTBot-News`.
pub fn mentions_user_agent(document: &str, agent: &str) -> bool {
    let pattern = format!(r"User-agent:\s*{}", regex::escape(agent));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(document),
        Err(e) => {
            warn!(agent, error = %e, "Could not build user-agent pattern");
            false
        }
    }
}

/// Values of `Sitemap:` lines in document order. The keyword is
/// case-insensitive; `#` starts a comment.
fn sitemap_directives(document: &str) -> Vec<String> {
    document
        .lines()
        .filter_map(|line| {
            let line = line.split('#').next().unwrap_or_default();
            let (key, value) = line.split_once(':')?;
            let value = value.trim();
            (key.trim().eq_ignore_ascii_case("sitemap") && !value.is_empty())
                .then(|| value.to_string())
        })
        .collect()
}

fn dedup_in_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rules fixture with canned answers, independent of any parser
    struct FixedRules {
        sitemaps: Vec<&'static str>,
        blocked: Vec<&'static str>,
    }

    impl RobotsRules for FixedRules {
        fn declared_sitemaps(&self) -> Vec<String> {
            self.sitemaps.iter().map(|s| s.to_string()).collect()
        }

        fn is_disallowed(&self, path: &str, agent: &str) -> bool {
            assert_eq!(path, "/");
            self.blocked.contains(&agent)
        }
    }

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn origin() -> Origin {
        Origin::resolve("https://example.com").unwrap()
    }

    #[test]
    fn test_blocked_even_when_not_mentioned() {
        let rules = FixedRules {
            sitemaps: vec![],
            blocked: vec!["CCBot"],
        };
        let analysis = analyze(&rules, "User-agent: *\nDisallow: /\n", &roster(&["CCBot"]));
        assert_eq!(
            analysis.crawler_rules,
            vec![CrawlerRule {
                bot: "CCBot".to_string(),
                status: CrawlerVerdict::Blocked,
            }]
        );
    }

    #[test]
    fn test_allowed_only_when_mentioned() {
        let rules = FixedRules {
            sitemaps: vec![],
            blocked: vec![],
        };
        let document = "User-agent: GPTBot\nAllow: /\n";
        let analysis = analyze(&rules, document, &roster(&["GPTBot", "CCBot"]));
        assert_eq!(
            analysis.crawler_rules,
            vec![CrawlerRule {
                bot: "GPTBot".to_string(),
                status: CrawlerVerdict::Allowed,
            }]
        );
    }

    #[test]
    fn test_rules_follow_roster_order() {
        let rules = FixedRules {
            sitemaps: vec![],
            blocked: vec!["anthropic-ai"],
        };
        let document = "User-agent: GPTBot\nAllow: /\n\nUser-agent: anthropic-ai\nDisallow: /\n";
        let analysis = analyze(
            &rules,
            document,
            &roster(&["anthropic-ai", "CCBot", "GPTBot"]),
        );
        let bots: Vec<&str> = analysis
            .crawler_rules
            .iter()
            .map(|r| r.bot.as_str())
            .collect();
        assert_eq!(bots, vec!["anthropic-ai", "GPTBot"]);
    }

    #[test]
    fn test_sitemaps_are_deduplicated_in_document_order() {
        let rules = FixedRules {
            sitemaps: vec![
                "https://example.com/b.xml",
                "https://example.com/a.xml",
                "https://example.com/b.xml",
            ],
            blocked: vec![],
        };
        let analysis = analyze(&rules, "", &roster(&[]));
        assert_eq!(
            analysis.sitemaps,
            vec!["https://example.com/b.xml", "https://example.com/a.xml"]
        );
    }

    #[test]
    fn test_mentions_user_agent_is_case_insensitive() {
        assert!(mentions_user_agent("user-agent:gptbot\n", "GPTBot"));
        assert!(mentions_user_agent("USER-AGENT:   GPTBot\n", "GPTBot"));
        assert!(!mentions_user_agent("# GPTBot is welcome\n", "GPTBot"));
        assert!(!mentions_user_agent("User-agent: *\n", "GPTBot"));
    }

    #[test]
    fn test_mentions_user_agent_escapes_agent_token() {
        assert!(mentions_user_agent("User-agent: Google-Extended\n", "Google-Extended"));
        assert!(!mentions_user_agent("User-agent: GoogleXExtended\n", "Google.Extended"));
    }

    #[test]
    fn test_texting_robots_specific_group_blocks_root() {
        let origin = origin();
        let document = "User-agent: GPTBot\nDisallow: /\n\nUser-agent: *\nAllow: /\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert!(rules.is_disallowed("/", "GPTBot"));
        assert!(!rules.is_disallowed("/", "CCBot"));
    }

    #[test]
    fn test_texting_robots_falls_back_to_wildcard_group() {
        let origin = origin();
        let document = "User-agent: *\nDisallow: /\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert!(rules.is_disallowed("/", "FacebookBot"));
    }

    #[test]
    fn test_texting_robots_partial_disallow_leaves_root_open() {
        let origin = origin();
        let document = "User-agent: CCBot\nDisallow: /private/\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert!(!rules.is_disallowed("/", "CCBot"));
        assert!(rules.is_disallowed("/private/data", "CCBot"));
    }

    #[test]
    fn test_texting_robots_longest_match_wins() {
        let origin = origin();
        let document = "User-agent: GPTBot\nDisallow: /docs/\nAllow: /docs/public/\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert!(rules.is_disallowed("/docs/internal", "GPTBot"));
        assert!(!rules.is_disallowed("/docs/public/page", "GPTBot"));
    }

    #[test]
    fn test_texting_robots_reads_sitemap_lines() {
        let origin = origin();
        let document = "Sitemap: https://example.com/custom-sitemap.xml\n\
                        User-agent: *\nDisallow:\n\
                        sitemap: https://example.com/news.xml\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert_eq!(
            rules.declared_sitemaps(),
            vec![
                "https://example.com/custom-sitemap.xml",
                "https://example.com/news.xml"
            ]
        );
    }

    #[test]
    fn test_only_sitemap_keyword_declares_sitemaps() {
        let origin = origin();
        let document = "SITEMAP: https://example.com/a.xml\n\
                        Site-map: https://example.com/legacy.xml\n\
                        Sitemap:\n\
                        # Sitemap: https://example.com/commented.xml\n\
                        Sitemap: https://example.com/b.xml # primary\n";
        let rules = TextingRobotsRules::new(&origin, document);
        assert_eq!(
            rules.declared_sitemaps(),
            vec!["https://example.com/a.xml", "https://example.com/b.xml"]
        );
    }

    #[test]
    fn test_end_to_end_analysis_with_texting_robots() {
        let origin = origin();
        let document =
            "User-agent: GPTBot\nDisallow: /\n\nSitemap: https://example.com/custom-sitemap.xml\n";
        let rules = TextingRobotsRules::new(&origin, document);
        let analysis = analyze(
            &rules,
            document,
            &roster(&["GPTBot", "CCBot", "Google-Extended"]),
        );

        assert_eq!(
            analysis.sitemaps,
            vec!["https://example.com/custom-sitemap.xml"]
        );
        assert_eq!(
            analysis.crawler_rules,
            vec![CrawlerRule {
                bot: "GPTBot".to_string(),
                status: CrawlerVerdict::Blocked,
            }]
        );
    }
}
