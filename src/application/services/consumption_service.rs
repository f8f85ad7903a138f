use crate::application::interfaces::consumption::ConsumptionService;
use crate::config::Config;
use crate::constants::{DATE_FORMAT, EXPORT_PATH};
use crate::error::AppError;
use crate::session::interface::PortalSession;
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Rolling date window for a consumption export request
///
/// Built from the wall clock at request time; nothing is cached between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportWindow {
    /// First day of the window (inclusive)
    pub date_from: NaiveDate,
    /// Last day of the window (inclusive)
    pub date_to: NaiveDate,
}

impl ExportWindow {
    /// Builds the window ending today and starting `days_back` days earlier
    pub fn current(days_back: i64) -> Self {
        let today = Local::now().date_naive();
        Self {
            date_from: today - Duration::days(days_back),
            date_to: today,
        }
    }

    /// Query parameters for the export endpoint
    ///
    /// Dates are formatted `DD/MM/YYYY`; `all_icps` is deliberately empty and
    /// `download=true` asks the portal for the CSV attachment instead of the
    /// report page.
    pub fn query(&self) -> [(&'static str, String); 4] {
        [
            ("date_from", self.date_from.format(DATE_FORMAT).to_string()),
            ("date_to", self.date_to.format(DATE_FORMAT).to_string()),
            ("all_icps", String::new()),
            ("download", String::from("true")),
        ]
    }
}

/// Implementation of the consumption export service
pub struct ConsumptionFetcher {
    config: Arc<Config>,
}

impl ConsumptionFetcher {
    /// Creates a new instance of the consumption service
    ///
    /// # Arguments
    /// * `config` - Shared configuration with the portal base URL and lookback
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn export_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.portal.base_url.trim_end_matches('/'),
            EXPORT_PATH
        )
    }
}

#[async_trait]
impl ConsumptionService for ConsumptionFetcher {
    async fn detailed_export(&self, session: &PortalSession) -> Result<String, AppError> {
        let window = ExportWindow::current(self.config.days_to_look_back);
        let url = self.export_url();

        debug!(
            "Downloading consumption export from {} to {}",
            window.date_from, window.date_to
        );

        let resp = session
            .client()
            .get(&url)
            .query(&window.query())
            .send()
            .await?;

        match resp.status() {
            StatusCode::OK => {
                let data = resp.text().await?;
                if data.is_empty() {
                    warn!("Fetched consumption successfully but there was no data");
                    return Err(AppError::EmptyExport);
                }
                debug!("Export downloaded ({} bytes)", data.len());
                Ok(data)
            }
            other => {
                error!("Could not fetch consumption: {}", other);
                Err(AppError::Unexpected(other))
            }
        }
    }
}
