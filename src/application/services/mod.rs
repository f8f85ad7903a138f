/// Module containing the consumption export service
pub mod consumption_service;

pub use consumption_service::*;
