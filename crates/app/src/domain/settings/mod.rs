//! Display Settings

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SettingsError;
pub use service::*;
