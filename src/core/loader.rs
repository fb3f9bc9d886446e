//! JSON loader for module guides and course descriptions
//!
//! A guide file holds one [`ModuleGuide`]. A course file holds the
//! descriptions of all courses, either as an object keyed by course id or as
//! an array of records carrying their id in a `module` field.

use crate::core::models::{CourseContent, ModuleGuide};
use crate::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or decode an input file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File content is not the expected JSON shape
    #[error("Failed to parse '{origin}': {source}")]
    Json {
        /// File name, or a short description for in-memory input
        origin: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The same course id is described twice
    #[error("Course '{course_id}' is described more than once in '{origin}'")]
    DuplicateCourse {
        /// Duplicated id
        course_id: String,
        /// File name, or a short description for in-memory input
        origin: String,
    },
}

/// Course descriptions keyed by course id
pub type CourseCatalog = BTreeMap<String, CourseContent>;

#[derive(Deserialize)]
struct CourseRecord {
    #[serde(rename = "module")]
    course_id: String,
    #[serde(flatten)]
    content: CourseContent,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CourseFile {
    Keyed(BTreeMap<String, CourseContent>),
    Records(Vec<CourseRecord>),
}

/// Parse a module guide from JSON text
///
/// # Errors
/// Returns [`LoadError::Json`] if the text is not a valid guide
pub fn parse_guide(json: &str, origin: &str) -> Result<ModuleGuide, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Parse course descriptions from JSON text
///
/// # Errors
/// Returns [`LoadError::Json`] for malformed input and
/// [`LoadError::DuplicateCourse`] when a record id repeats
pub fn parse_courses(json: &str, origin: &str) -> Result<CourseCatalog, LoadError> {
    let file: CourseFile = serde_json::from_str(json).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;

    match file {
        CourseFile::Keyed(catalog) => Ok(catalog),
        CourseFile::Records(records) => {
            let mut catalog = CourseCatalog::new();
            for record in records {
                if catalog.contains_key(&record.course_id) {
                    return Err(LoadError::DuplicateCourse {
                        course_id: record.course_id,
                        origin: origin.to_string(),
                    });
                }
                catalog.insert(record.course_id, record.content);
            }
            Ok(catalog)
        }
    }
}

/// Load a module guide from a JSON file
///
/// # Arguments
/// * `path` - Path to the guide file
///
/// # Errors
/// Returns a [`LoadError`] if the file cannot be read or parsed
pub fn load_guide<P: AsRef<Path>>(path: P) -> Result<ModuleGuide, LoadError> {
    let path = path.as_ref();
    let guide = parse_guide(&read(path)?, &path.display().to_string())?;
    info!(
        "Loaded guide '{}' with {} placements",
        guide.title(),
        guide.modules.len()
    );
    Ok(guide)
}

/// Load course descriptions from a JSON file
///
/// # Arguments
/// * `path` - Path to the course file
///
/// # Errors
/// Returns a [`LoadError`] if the file cannot be read or parsed
pub fn load_courses<P: AsRef<Path>>(path: P) -> Result<CourseCatalog, LoadError> {
    let path = path.as_ref();
    let catalog = parse_courses(&read(path)?, &path.display().to_string())?;
    info!("Loaded {} course descriptions", catalog.len());
    Ok(catalog)
}

fn read(path: &Path) -> Result<String, LoadError> {
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
