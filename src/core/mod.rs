//! Core module: domain models, the eligibility engine and its adapters

pub mod config;
pub mod eligibility;
pub mod import;
pub mod models;
pub mod report;

/// Returns the current version of the `advising` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
