//! # meridian-client
//!
//! Client library for the Meridian Energy (NZ) customer web portal.
//!
//! The portal has no public API; consumption data is only reachable through
//! the HTML login form. This crate drives that flow end to end:
//!
//! 1. Fetch the landing page and pull the `authenticity_token` CSRF value out
//!    of the login form.
//! 2. Submit the login form with the token and the account credentials inside
//!    a cookie session.
//! 3. Download the detailed consumption export (CSV) for a rolling lookback
//!    window and hand back the raw text.
//!
//! The export body is passed through untouched; parsing the CSV is the
//! caller's concern. Each step returns a `Result`, and the chain stops at the
//! first failed step.
//!
//! ## Usage
//! ```ignore
//! use meridian_client::prelude::*;
//!
//! let client = MeridianClient::new(Config::new());
//! let csv = client.fetch_consumption().await?;
//! ```

/// Services built on top of an authenticated session
pub mod application;
/// High-level client running the full scrape workflow
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used re-exports
pub mod prelude;
/// Login workflow and session handling
pub mod session;
/// Shared helpers
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
