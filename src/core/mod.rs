//! Core module for the guide builder

pub mod config;
pub mod loader;
pub mod models;
pub mod overview;
pub mod report;

/// Returns the current version of the `ModuleGuide` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
