//! Settings

pub mod errors;
pub mod models;
pub mod service;

pub use errors::SettingsServiceError;
pub use service::*;
