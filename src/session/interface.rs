use crate::constants::USER_AGENT;
use crate::error::AuthError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

/// Session information for an authenticated portal login
///
/// The portal tracks the authenticated state server-side against the cookies
/// set during the login exchange, so every later request must go through the
/// same cookie store. Cloning the session shares that store.
///
/// One session represents one login. The portal keeps a single session per
/// account, so a second concurrent login through the same credentials
/// invalidates the cookie state; treat a session as single-owner.
#[derive(Debug, Clone)]
pub struct PortalSession {
    /// HTTP client carrying the portal session cookies
    pub(crate) http: Client,
    /// CSRF token the login form was submitted with
    pub token: String,
    /// When the login was performed
    pub logged_in_at: DateTime<Utc>,
}

impl PortalSession {
    /// Creates a session around a fresh cookie store without logging in
    ///
    /// This is a simplified version for tests and basic usage. Requests made
    /// through it carry no authenticated cookies, so the portal will answer
    /// them as an anonymous visitor.
    pub fn new(token: String) -> Self {
        Self {
            http: Client::builder()
                .user_agent(USER_AGENT)
                .cookie_store(true)
                .build()
                .expect("reqwest client"),
            token,
            logged_in_at: Utc::now(),
        }
    }

    /// Returns the HTTP client bound to this session's cookie store
    pub(crate) fn client(&self) -> &Client {
        &self.http
    }
}

/// Interface for the portal authentication workflow
///
/// The three operations form a strict sequence: a token is only valid for the
/// login that immediately follows it, and a session is only produced by a
/// login that answered 200. Each step reports its own failure; nothing runs
/// past a failed step.
#[async_trait]
pub trait PortalAuthenticator: Send + Sync {
    /// Fetches the landing page and extracts the CSRF token from the login form
    ///
    /// # Returns
    /// * `Ok(String)` - The `authenticity_token` value
    /// * `Err(AuthError)` - Non-200 landing page, missing token or transport failure
    async fn request_token(&self) -> Result<String, AuthError>;

    /// Submits the login form with the given token and the stored credentials
    ///
    /// # Arguments
    /// * `token` - A CSRF token freshly extracted from the landing page
    ///
    /// # Returns
    /// * `Ok(PortalSession)` - The login endpoint answered 200
    /// * `Err(AuthError)` - Any other status or transport failure
    async fn login(&self, token: &str) -> Result<PortalSession, AuthError>;

    /// Runs the full token-then-login sequence, stopping at the first failure
    async fn authenticate(&self) -> Result<PortalSession, AuthError>;
}
