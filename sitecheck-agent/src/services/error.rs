// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Errors that abort a sitemap check.
//!
//! Robots fetch failures and probe failures never show up here: they are
//! recorded in the result payload instead.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Request carried no URL at all
    #[error("URL is required")]
    MissingUrl,

    /// Request body was not a JSON object the endpoint understands
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Input could not be turned into an http(s) origin
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Anything else that went wrong while orchestrating the check
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl CheckError {
    /// Machine-readable reason included in error payloads
    pub fn reason(&self) -> &'static str {
        match self {
            CheckError::MissingUrl => "missing_url",
            CheckError::MalformedBody(_) => "malformed_body",
            CheckError::InvalidUrl(_) => "invalid_url",
            CheckError::Unexpected(_) => "unexpected_failure",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            CheckError::MissingUrl | CheckError::MalformedBody(_) | CheckError::InvalidUrl(_) => {
                StatusCode::BAD_REQUEST
            }
            CheckError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<url::ParseError> for CheckError {
    fn from(err: url::ParseError) -> Self {
        CheckError::InvalidUrl(err.to_string())
    }
}
