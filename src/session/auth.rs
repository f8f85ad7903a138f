// Authentication against the Meridian Energy customer portal

use crate::config::Config;
use crate::constants::{LOGIN_COMMIT, LOGIN_PATH, TOKEN_INPUT_NAME, USER_AGENT};
use crate::error::AuthError;
use crate::session::interface::{PortalAuthenticator, PortalSession};
use crate::utils::parsing::extract_authenticity_token;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Authentication handler for the customer portal
///
/// Owns the credentials and the cookie-backed HTTP client for one portal
/// session. The portal sets its session cookie on the landing page and
/// expects the login form to come back through the same session, so the
/// landing fetch, the login and any later export download all share this
/// client.
pub struct PortalAuth {
    cfg: Arc<Config>,
    http: Client,
}

impl PortalAuth {
    /// Creates a new portal authentication handler
    ///
    /// # Arguments
    /// * `cfg` - Shared configuration with credentials and portal endpoints
    ///
    /// # Returns
    /// * A new PortalAuth instance
    pub fn new(cfg: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(Duration::from_secs(cfg.portal.timeout))
            .build()
            .expect("reqwest client");
        Self { cfg, http }
    }

    /// Joins a path onto the configured portal base URL
    fn portal_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.cfg.portal.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl PortalAuthenticator for PortalAuth {
    async fn request_token(&self) -> Result<String, AuthError> {
        let url = self.portal_url("");
        debug!("Requesting landing page: {}", url);

        let resp = self.http.get(&url).send().await?;

        match resp.status() {
            StatusCode::OK => {
                let body = resp.text().await?;
                match extract_authenticity_token(&body) {
                    Some(token) => {
                        debug!("Extracted authenticity token ({} chars)", token.len());
                        Ok(token)
                    }
                    None => {
                        error!("Landing page did not contain an authenticity token");
                        Err(AuthError::TokenNotFound)
                    }
                }
            }
            other => {
                error!("Failed to retrieve the token page: {}", other);
                Err(AuthError::TokenPage(other))
            }
        }
    }

    async fn login(&self, token: &str) -> Result<PortalSession, AuthError> {
        let url = self.portal_url(LOGIN_PATH);
        let form = [
            (TOKEN_INPUT_NAME, token),
            ("email", self.cfg.credentials.email.as_str()),
            ("password", self.cfg.credentials.password.as_str()),
            ("commit", LOGIN_COMMIT),
        ];

        debug!("Submitting login form for {}", self.cfg.credentials.email);

        let resp = self.http.post(&url).form(&form).send().await?;

        match resp.status() {
            // The portal answers 200 for a rejected login too and reports the
            // failure in the page body; the body is not inspected here.
            StatusCode::OK => {
                debug!("Logged in");
                Ok(PortalSession {
                    http: self.http.clone(),
                    token: token.to_string(),
                    logged_in_at: Utc::now(),
                })
            }
            other => {
                error!("Could not login: {}", other);
                Err(AuthError::LoginRejected(other))
            }
        }
    }

    async fn authenticate(&self) -> Result<PortalSession, AuthError> {
        let token = self.request_token().await?;
        self.login(&token).await
    }
}
