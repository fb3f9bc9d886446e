//! Markdown report generator
//!
//! Produces the overview tables of a module handbook: one table per semester
//! with a closing sum row, one chapter per named specialization, and the
//! elective courses grouped by the slot numbers they fill.

use crate::core::models::Language;
use crate::core::overview::{format_number_set, ModuleStats};
use crate::core::report::{ReportContext, ReportGenerator};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/overview.md");

/// Headings and column names of one language
struct Headings {
    semesters: &'static str,
    specializations: &'static str,
    electives: &'static str,
    semester: &'static str,
    module: &'static str,
    title: &'static str,
    contact: &'static str,
    self_study: &'static str,
    examination: &'static str,
    sum: &'static str,
    slots: &'static str,
    elective_group: &'static str,
    warnings: &'static str,
    none: &'static str,
}

const GERMAN: Headings = Headings {
    semesters: "Studienverlauf",
    specializations: "Spezialisierungen",
    electives: "Wahlpflichtmodule",
    semester: "Semester",
    module: "Modul",
    title: "Titel",
    contact: "Kontaktzeit",
    self_study: "Selbststudium",
    examination: "Prüfung",
    sum: "Summe",
    slots: "Module",
    elective_group: "Wahlpflichtmodul",
    warnings: "Hinweise",
    none: "Keine",
};

const ENGLISH: Headings = Headings {
    semesters: "Course of study",
    specializations: "Specializations",
    electives: "Elective modules",
    semester: "Semester",
    module: "Module",
    title: "Title",
    contact: "Contact hours",
    self_study: "Self-study",
    examination: "Examination",
    sum: "Sum",
    slots: "Modules",
    elective_group: "Elective module",
    warnings: "Notes",
    none: "None",
};

const fn headings(language: Language) -> &'static Headings {
    match language {
        Language::German => &GERMAN,
        Language::English => &ENGLISH,
    }
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let h = headings(ctx.language);
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", &ctx.title);
        output = output.replace("{{heading_semesters}}", h.semesters);
        output = output.replace("{{heading_specializations}}", h.specializations);
        output = output.replace("{{heading_electives}}", h.electives);

        output = output.replace("{{semester_tables}}", &Self::semester_tables(ctx, h));
        output = output.replace(
            "{{specialization_chapters}}",
            &Self::specialization_chapters(ctx, h),
        );
        output = output.replace("{{elective_groups}}", &Self::elective_groups(ctx, h));
        output = output.replace("{{diagnostics}}", &Self::diagnostics(ctx, h));

        output
    }

    fn table_header(h: &Headings) -> String {
        format!(
            "| {} | {} | {} | {} | ECTS | {} |\n|---|---|---:|---:|---:|---|\n",
            h.module, h.title, h.contact, h.self_study, h.examination
        )
    }

    fn table_row(table: &mut String, stats: &ModuleStats) {
        let _ = writeln!(
            table,
            "| {} | {} | {} | {} | {} | {} |",
            stats.id,
            stats.title,
            stats.contact_hours,
            stats.home_hours,
            stats.ects,
            stats.examination
        );
    }

    /// One table per semester; the last table closes with the program totals
    fn semester_tables(ctx: &ReportContext, h: &Headings) -> String {
        let overview = ctx.overview;
        let mut out = String::new();

        for semester in &overview.semesters {
            let _ = writeln!(out, "### {} {}\n", h.semester, semester.number);
            out.push_str(&Self::table_header(h));
            for stats in &semester.modules {
                Self::table_row(&mut out, stats);
            }
            out.push('\n');
        }

        if overview.semesters.is_empty() {
            let _ = writeln!(out, "_{}_\n", h.none);
        } else {
            let _ = writeln!(
                out,
                "**{}:** {} / {} / {} ECTS\n",
                h.sum, overview.contact_hours_sum, overview.home_hours_sum, overview.ects_sum
            );
        }
        out
    }

    fn specialization_chapters(ctx: &ReportContext, h: &Headings) -> String {
        let overview = ctx.overview;
        let mut out = String::new();

        let slots: BTreeSet<u32> = (1..=overview.specialization_slot_count())
            .filter_map(|n| u32::try_from(n).ok())
            .collect();
        if !slots.is_empty() {
            let _ = writeln!(out, "{} {}\n", h.slots, format_number_set(&slots));
        }

        let mut any = false;
        for (name, modules) in overview.named_specializations() {
            any = true;
            let _ = writeln!(out, "### {name}\n");
            out.push_str(&Self::table_header(h));
            for stats in modules {
                Self::table_row(&mut out, stats);
            }
            out.push('\n');
        }
        if !any {
            let _ = writeln!(out, "_{}_\n", h.none);
        }
        out
    }

    fn elective_groups(ctx: &ReportContext, h: &Headings) -> String {
        let groups = ctx.overview.elective_groups();
        let mut out = String::new();

        if groups.is_empty() {
            let _ = writeln!(out, "_{}_\n", h.none);
        }
        for group in groups {
            let _ = writeln!(out, "### {} {}\n", h.elective_group, group.label);
            out.push_str(&Self::table_header(h));
            for stats in &group.modules {
                Self::table_row(&mut out, stats);
            }
            out.push('\n');
        }
        out
    }

    fn diagnostics(ctx: &ReportContext, h: &Headings) -> String {
        if ctx.diagnostics.is_empty() {
            return String::new();
        }
        let mut out = format!("## {}\n\n", h.warnings);
        for diagnostic in ctx.diagnostics {
            let _ = writeln!(out, "- {diagnostic}");
        }
        out
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseContent, CourseMeta};
    use crate::core::overview::{Labels, OverviewBuilder};
    use std::collections::BTreeMap;

    fn render(language: Language) -> String {
        let labels = Labels::for_language(language);
        let mut courses = BTreeMap::new();
        courses.insert(
            "INF1".to_string(),
            CourseContent::new("Programming".to_string(), 60, 120, 6, "K".to_string()),
        );
        courses.insert(
            "ROB".to_string(),
            CourseContent::new("Robotics".to_string(), 48, 102, 5, "M".to_string()),
        );
        let placements = vec![
            CourseMeta::new("INF1".to_string(), 1).with_weight(6),
            CourseMeta::new("ROB".to_string(), 6)
                .with_weight(5)
                .with_specialization("Wahlpflicht", 1),
            CourseMeta::new("ROB".to_string(), 6).with_specialization("Wahlpflicht", 2),
        ];
        let report = OverviewBuilder::new(&labels)
            .title("Informatik (B.Sc., Fulltime, 2024)")
            .build(&placements, &courses)
            .expect("valid input");

        let ctx = ReportContext::new(
            "Informatik (B.Sc., Fulltime, 2024)".to_string(),
            language,
            &report.overview,
            &report.diagnostics,
        );
        MarkdownReporter::new().render(&ctx).expect("render")
    }

    #[test]
    fn test_render_semester_tables() {
        let md = render(Language::English);

        assert!(md.starts_with("# Informatik (B.Sc., Fulltime, 2024)"));
        assert!(md.contains("### Semester 1"));
        assert!(md.contains("| INF1 | Programming | 60 | 120 | 6 | K |"));
        assert!(md.contains("| ROB | Elective module I | 48 | 102 | 5 | see elective modules |"));
        assert!(md.contains("**Sum:** 156 / 324 / 16 ECTS"));
    }

    #[test]
    fn test_render_elective_groups_and_diagnostics() {
        let md = render(Language::German);

        assert!(md.contains("### Wahlpflichtmodul I–II"));
        assert_eq!(md.matches("| ROB | Robotics |").count(), 1);
        assert!(md.contains("## Hinweise"));
        assert!(md.contains("Sum of weights and ECTS does not match (11 vs. 16"));
    }
}
