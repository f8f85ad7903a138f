use crate::constants::{DAYS_TO_BACK_LOOK, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the customer portal
pub struct Credentials {
    /// Email address the account was registered with
    pub email: String,
    /// Password for the customer account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the portal HTTP surface
pub struct PortalConfig {
    /// Base URL of the customer portal
    pub base_url: String,
    /// Timeout in seconds for portal requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the portal client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Portal endpoint configuration
    pub portal: PortalConfig,
    /// Number of days to look back when fetching consumption data
    pub days_to_look_back: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from the environment
    ///
    /// Loads a `.env` file when one is present, then reads the `MERIDIAN_*`
    /// variables, falling back to defaults. Missing credentials are logged as
    /// errors but do not fail construction; the login will be rejected by the
    /// portal instead.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email = get_env_or_default("MERIDIAN_EMAIL", String::from("default_email"));
        let password = get_env_or_default("MERIDIAN_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if email == "default_email" {
            error!("MERIDIAN_EMAIL not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("MERIDIAN_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { email, password },
            portal: PortalConfig {
                base_url: get_env_or_default("MERIDIAN_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("MERIDIAN_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            days_to_look_back: get_env_or_default("MERIDIAN_DAYS_LOOKBACK", DAYS_TO_BACK_LOOK),
        }
    }
}
