// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::services::error::CheckError;
use std::fmt;
use url::Url;

/// Scheme + host (+ non-default port) of the site being checked.
/// All derived URLs (robots.txt, conventional sitemaps) are built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Resolve user input to an origin, rejecting anything that is not an
    /// absolute http(s) URL with a host.
    pub fn resolve(input: &str) -> Result<Self, CheckError> {
        let parsed = Url::parse(input.trim())?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CheckError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let origin = parsed.origin();
        if !origin.is_tuple() {
            return Err(CheckError::InvalidUrl("URL has no host".to_string()));
        }

        Ok(Origin(origin.ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append an absolute path (`/robots.txt`) to the origin
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    pub fn robots_url(&self) -> String {
        self.join("/robots.txt")
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
