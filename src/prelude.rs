//! # Meridian Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. Importing the prelude is enough for the
//! whole portal workflow.
//!
//! ## Usage
//!
//! ```rust
//! use meridian_client::prelude::*;
//!
//! let config = Config::new();
//! let client = MeridianClient::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the portal client
pub use crate::config::{Config, Credentials, PortalConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{AppError, AuthError};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Authentication handler for the portal login form
pub use crate::session::auth::PortalAuth;

/// Authentication trait and session type
pub use crate::session::interface::{PortalAuthenticator, PortalSession};

// ============================================================================
// SERVICES
// ============================================================================

/// Consumption export service trait
pub use crate::application::interfaces::consumption::ConsumptionService;

/// Consumption export service implementation and date window
pub use crate::application::services::consumption_service::{ConsumptionFetcher, ExportWindow};

// ============================================================================
// HIGH-LEVEL CLIENT
// ============================================================================

/// High-level client running the full scrape workflow
pub use crate::client::MeridianClient;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
