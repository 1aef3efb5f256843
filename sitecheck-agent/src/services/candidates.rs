// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Merging declared and conventional sitemap URLs, and filtering probe results.

use crate::models::check::{SitemapCandidate, SitemapSource};
use crate::services::origin::Origin;
use std::collections::HashSet;

/// Declared URLs first, in document order, then one guessed URL per
/// conventional path unless that exact URL was already declared.
pub fn build_candidates(
    declared: &[String],
    origin: &Origin,
    conventional_paths: &[String],
) -> Vec<SitemapCandidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::with_capacity(declared.len() + conventional_paths.len());

    for url in declared {
        if seen.insert(url.clone()) {
            candidates.push(SitemapCandidate::declared(url.clone()));
        }
    }

    for path in conventional_paths {
        let url = origin.join(path);
        if seen.insert(url.clone()) {
            candidates.push(SitemapCandidate::guessed(url));
        }
    }

    candidates
}

/// Keep every declared candidate; keep guessed ones only when they answered 200.
pub fn retain_live(candidates: Vec<SitemapCandidate>) -> Vec<SitemapCandidate> {
    candidates
        .into_iter()
        .filter(|c| match c.source {
            SitemapSource::Declared => true,
            SitemapSource::Guessed => c.status.is_ok(),
        })
        .collect()
}
