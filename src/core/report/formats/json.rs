//! JSON report generator

use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    language: String,
    overview: &'a crate::core::overview::Overview,
    diagnostics: Vec<String>,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        fs::write(output_path, self.render(ctx)?)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            title: &ctx.title,
            language: ctx.language.to_string(),
            overview: ctx.overview,
            diagnostics: ctx.diagnostics.iter().map(ToString::to_string).collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
