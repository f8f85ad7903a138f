/// Authentication handler for the portal login form
pub mod auth;
/// Session type and authentication interface
pub mod interface;
