//! Overview command handler
//!
//! Loads a guide and its course descriptions, builds the overview and
//! writes it as Markdown or JSON.

use module_guide::config::Config;
use module_guide::core::loader::{load_courses, load_guide};
use module_guide::core::overview::{build_overview, Labels};
use module_guide::core::report::{ReportContext, ReportFormat};
use module_guide::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs of one `overview` run
#[derive(Debug)]
pub struct OverviewRequest<'a> {
    /// Guide JSON file
    pub guide: &'a Path,
    /// Course descriptions JSON file
    pub courses: &'a Path,
    /// Report format
    pub format: ReportFormat,
    /// Explicit output file
    pub output: Option<&'a Path>,
    /// Write into the configured reports directory
    pub save: bool,
}

/// Run the overview command.
///
/// # Errors
/// Returns a message if loading, building, or writing fails
pub fn run(request: &OverviewRequest, config: &Config) -> Result<(), String> {
    let guide = load_guide(request.guide).map_err(|e| e.to_string())?;
    let courses = load_courses(request.courses).map_err(|e| e.to_string())?;

    // A language named by the guide wins over the configured fallback
    let language = guide.general_language.unwrap_or_else(|| config.language());
    let labels = Labels::for_language(language);
    verbose!(
        "Building overview of {} ({language}, elective marker '{}')",
        guide.title(),
        config.elective_marker()
    );

    let report = build_overview(&guide, &courses, &labels, config.elective_marker()).map_err(|e| {
        error!("Overview of {} failed: {e}", guide.title());
        e.to_string()
    })?;
    for diagnostic in &report.diagnostics {
        verbose!("⚠ {diagnostic}");
    }

    let ctx = ReportContext::for_guide(&guide, language, &report);
    let reporter = request.format.reporter();

    let target = match (request.output, request.save) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, true) => Some(report_path(config, &guide.subject, &guide.year, request.format)?),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            reporter
                .generate(&ctx, &path)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            info!("Overview written to {}", path.display());
            println!("✓ Overview generated: {}", path.display());
        }
        None => {
            let content = reporter
                .render(&ctx)
                .map_err(|e| format!("Failed to render overview: {e}"))?;
            print!("{content}");
        }
    }
    Ok(())
}

/// `<reports_dir>/<subject>_<year>.<ext>`, creating the directory
fn report_path(
    config: &Config,
    subject: &str,
    year: &str,
    format: ReportFormat,
) -> Result<PathBuf, String> {
    let dir = PathBuf::from(&config.paths.reports_dir);
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create reports directory {}: {e}", dir.display()))?;

    let stem: String = format!("{subject}_{year}")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    Ok(dir.join(format!("{stem}.{}", format.extension())))
}
