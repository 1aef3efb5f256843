// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::check::RobotsStatus;
use crate::services::origin::Origin;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Bytes of robots.txt kept for analysis; anything past this is ignored
pub const MAX_ROBOTS_BYTES: usize = 500 * 1024;

/// Outcome of the robots.txt GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsFetch {
    /// HTTP 200 with the body as text
    Found(String),
    /// Any other HTTP status
    NotFound(u16),
    /// No response (DNS, connection, timeout, unreadable body)
    Failed(String),
}

impl RobotsFetch {
    pub fn status(&self) -> RobotsStatus {
        match self {
            RobotsFetch::Found(_) => RobotsStatus::Found,
            RobotsFetch::NotFound(status) => RobotsStatus::NotFound { status: *status },
            RobotsFetch::Failed(_) => RobotsStatus::FetchError,
        }
    }

    /// The document to analyze, if there is a non-empty one
    pub fn document(&self) -> Option<&str> {
        match self {
            RobotsFetch::Found(body) if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}

/// Fetch `<origin>/robots.txt` once, without retries.
///
/// Every HTTP response counts as an answer; only transport failures are
/// reported as `Failed`. Bodies longer than [`MAX_ROBOTS_BYTES`] are truncated.
pub async fn fetch_robots(client: &Client, origin: &Origin, timeout: Duration) -> RobotsFetch {
    let robots_url = origin.robots_url();

    let mut response = match client.get(&robots_url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(url = %robots_url, error = %e, "Failed to fetch robots.txt");
            return RobotsFetch::Failed(e.to_string());
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        debug!(url = %robots_url, status = status.as_u16(), "robots.txt not available");
        return RobotsFetch::NotFound(status.as_u16());
    }

    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let room = MAX_ROBOTS_BYTES - body.len();
                body.extend_from_slice(&chunk[..chunk.len().min(room)]);
                if body.len() == MAX_ROBOTS_BYTES {
                    debug!(url = %robots_url, "robots.txt reached size limit, ignoring the rest");
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(url = %robots_url, error = %e, "Failed to read robots.txt body");
                return RobotsFetch::Failed(e.to_string());
            }
        }
    }

    debug!(url = %robots_url, bytes = body.len(), "Fetched robots.txt");
    RobotsFetch::Found(String::from_utf8_lossy(&body).into_owned())
}
