//! Report generation for module guide overviews
//!
//! Renders a finished [`Overview`] as a Markdown document (semester tables,
//! specialization chapters, elective groups) or as JSON.

pub mod formats;

use crate::core::models::{Language, ModuleGuide};
use crate::core::overview::{Diagnostic, Overview, OverviewReport};
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Guide title, e.g. "Informatik (B.Sc., Fulltime, 2024)"
    pub title: String,
    /// Language of headings
    pub language: Language,
    /// Aggregated overview
    pub overview: &'a Overview,
    /// Recoverable conditions found while building
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        title: String,
        language: Language,
        overview: &'a Overview,
        diagnostics: &'a [Diagnostic],
    ) -> Self {
        Self {
            title,
            language,
            overview,
            diagnostics,
        }
    }

    /// Context for a built guide
    #[must_use]
    pub fn for_guide(guide: &ModuleGuide, language: Language, report: &'a OverviewReport) -> Self {
        Self::new(
            guide.title(),
            language,
            &report.overview,
            &report.diagnostics,
        )
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
