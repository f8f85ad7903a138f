//! Error types for the portal workflow
//!
//! Every step of the scrape chain reports failure through these types; no
//! step signals failure through logging alone or through sentinel values.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while authenticating against the portal
#[derive(Debug, Error)]
pub enum AuthError {
    /// The landing page request came back with a non-200 status
    #[error("token page returned status {0}")]
    TokenPage(StatusCode),
    /// The landing page HTML did not contain the hidden authenticity token input
    #[error("authenticity token not found in landing page")]
    TokenNotFound,
    /// The login form submission came back with a non-200 status
    #[error("login rejected with status {0}")]
    LoginRejected(StatusCode),
    /// Transport-level failure talking to the portal
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication step failed
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The export endpoint answered 200 but the body was empty
    #[error("fetched consumption successfully but there was no data")]
    EmptyExport,
    /// The export endpoint came back with a non-200 status
    #[error("unexpected status {0}")]
    Unexpected(StatusCode),
    /// Transport-level failure talking to the portal
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
