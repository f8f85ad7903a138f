/// Module containing environment configuration helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing parsing utilities for the portal's HTML pages
pub mod parsing;

pub use config::*;
pub use logger::*;
pub use parsing::*;
