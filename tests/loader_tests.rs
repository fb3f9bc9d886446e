//! Integration tests for loading guides and course descriptions from disk

use module_guide::core::loader::{load_courses, load_guide, LoadError};
use module_guide::core::models::{Language, TimeModel};
use module_guide::core::overview::{build_overview, Labels, DEFAULT_ELECTIVE_MARKER};
use std::fs;
use tempfile::TempDir;

const GUIDE: &str = r#"{
    "subject": "Wirtschaftsinformatik",
    "degree": "B.Sc.",
    "timemodel": "PARTTIME",
    "year": "2025",
    "generallanguage": "ENGLISH",
    "modules": [
        {"module": "BWL1", "semester": 1, "sempos": 1, "weight": 5, "type": "Pflicht"},
        {"module": "INF1", "semester": 1, "sempos": 2, "weight": 6, "contacthoursfactor": "1/2", "homehoursfactor": "1.5"},
        {"module": "ERP", "semester": 5, "weight": 5, "specialization": "Wahlpflicht", "specializationnumber": 1},
        {"module": "ERP", "semester": 5, "specialization": "Wahlpflicht", "specializationnumber": 2}
    ]
}"#;

const COURSES: &str = r#"{
    "BWL1": {"title": "Business Basics", "contacthours": 60, "homehours": 90, "ects": 5, "examination": "K90"},
    "INF1": {"title": "Programming", "contacthours": 60, "homehours": 80, "ects": 6, "examination": "*MS"},
    "ERP": {"title": "ERP Systems", "contacthours": 48, "homehours": 102, "ects": 5, "examination": "R"}
}"#;

fn write_inputs() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let guide = dir.path().join("guide.json");
    let courses = dir.path().join("courses.json");
    fs::write(&guide, GUIDE).expect("Failed to write guide");
    fs::write(&courses, COURSES).expect("Failed to write courses");
    (dir, guide, courses)
}

#[test]
fn test_load_guide_from_file() {
    let (_dir, guide_path, _) = write_inputs();
    let guide = load_guide(&guide_path).expect("Failed to load guide");

    assert_eq!(guide.time_model, TimeModel::Parttime);
    assert_eq!(guide.general_language, Some(Language::English));
    assert_eq!(guide.title(), "Wirtschaftsinformatik (B.Sc., Parttime, 2025)");
    assert_eq!(guide.modules.len(), 4);
    assert_eq!(guide.modules[0].kind.as_deref(), Some("Pflicht"));
    assert_eq!(guide.modules[1].sequence_position, Some(2));
    assert_eq!(guide.modules[3].weight, 0);
    assert_eq!(guide.modules[3].duration_semesters, 1);
}

#[test]
fn test_loaded_files_build_an_overview() {
    let (_dir, guide_path, courses_path) = write_inputs();
    let guide = load_guide(&guide_path).expect("Failed to load guide");
    let courses = load_courses(&courses_path).expect("Failed to load courses");
    let labels = Labels::for_language(guide.general_language.unwrap_or_default());

    let report = build_overview(&guide, &courses, &labels, DEFAULT_ELECTIVE_MARKER)
        .expect("Failed to build overview");
    let overview = &report.overview;

    assert_eq!(overview.semesters.len(), 2);
    assert_eq!(overview.semesters[0].modules[1].workload(), (30, 120, 6));
    assert_eq!(overview.semesters[1].modules.len(), 2);
    assert_eq!(overview.semesters[1].modules[0].title, "Elective module I");
    assert_eq!(overview.semesters[1].modules[1].title, "Elective module II");
    assert_eq!(overview.ects_sum, 21);
    assert_eq!(overview.weight_sum, 16);
    assert_eq!(report.diagnostics.len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_guide(dir.path().join("absent.json")).expect_err("file does not exist");

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_courses_are_json_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("courses.json");
    fs::write(&path, "{\"X\": {\"title\": \"No numbers\"}}").expect("Failed to write");

    let err = load_courses(&path).expect_err("missing fields");
    assert!(matches!(err, LoadError::Json { .. }));
}
