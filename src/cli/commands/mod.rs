//! CLI command handlers for `ModuleGuide`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod overview;
