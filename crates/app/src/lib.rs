//! Record store, domain services and application wiring for Avaria.

pub mod auth;
pub mod clock;
pub mod context;
pub mod domain;
pub mod store;

#[cfg(test)]
mod test;
