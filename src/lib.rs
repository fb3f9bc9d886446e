//! Library for `ModuleGuide`
//! Aggregates module-guide records into the overview consumed by the handbook writer.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
