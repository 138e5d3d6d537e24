//! Avaria
//!
//! Avaria is the reporting engine behind the damaged-inventory dashboard: it filters, sorts and
//! paginates damage reports, aggregates dashboard figures, prices discounted units and renders
//! report exports. Everything in this crate is a pure function of its inputs; persistence lives
//! in `avaria-app`.

pub mod categories;
pub mod discounts;
pub mod export;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod query;
pub mod registration;
pub mod reports;
pub mod stats;
