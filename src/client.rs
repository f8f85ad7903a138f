//! High-level client for the Meridian Energy customer portal
//!
//! Runs the full scrape workflow in one call:
//! - Landing page fetch and CSRF token extraction
//! - Login form submission inside a cookie session
//! - Detailed consumption export download
//!
//! Each step checks its own result; the chain stops at the first failure and
//! returns it to the caller.
//!
//! # Example
//! ```ignore
//! use meridian_client::client::MeridianClient;
//! use meridian_client::config::Config;
//!
//! let client = MeridianClient::new(Config::new());
//! let csv = client.fetch_consumption().await?;
//! ```

use crate::application::interfaces::consumption::ConsumptionService;
use crate::application::services::consumption_service::ConsumptionFetcher;
use crate::config::Config;
use crate::error::AppError;
use crate::session::auth::PortalAuth;
use crate::session::interface::PortalAuthenticator;
use std::sync::Arc;
use tracing::info;

/// High-level portal client
///
/// Construction does not contact the portal; every `fetch_consumption` call
/// performs a fresh token-login-export chain. No token validity window is
/// tracked between calls, so there is no state to refresh or invalidate.
pub struct MeridianClient {
    auth: PortalAuth,
    consumption: ConsumptionFetcher,
}

impl MeridianClient {
    /// Creates a new client from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and portal settings
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        Self {
            auth: PortalAuth::new(config.clone()),
            consumption: ConsumptionFetcher::new(config),
        }
    }

    /// Runs the full token, login and export chain and returns the CSV text
    ///
    /// # Returns
    /// * `Ok(String)` - The raw export body, exactly as the portal sent it
    /// * `Err(AppError)` - The first step that failed
    pub async fn fetch_consumption(&self) -> Result<String, AppError> {
        let session = self.auth.authenticate().await?;
        let data = self.consumption.detailed_export(&session).await?;
        info!("Consumption export fetched ({} bytes)", data.len());
        Ok(data)
    }
}
