use crate::error::AppError;
use crate::session::interface::PortalSession;
use async_trait::async_trait;

/// Interface for the consumption export service
#[async_trait]
pub trait ConsumptionService: Send + Sync {
    /// Downloads the detailed consumption export for the rolling lookback window
    ///
    /// The date window is recomputed from the wall clock on every call.
    ///
    /// # Arguments
    /// * `session` - An authenticated portal session
    ///
    /// # Returns
    /// * `Ok(String)` - The raw CSV text exactly as the portal returned it
    /// * `Err(AppError)` - Empty body, non-200 status or transport failure
    async fn detailed_export(&self, session: &PortalSession) -> Result<String, AppError>;
}
