//! Avaria Domain Concerns

pub mod products;
pub mod reports;
pub mod settings;
