//! Module guide model

use super::CourseMeta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language a guide is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// German
    #[default]
    #[serde(alias = "german")]
    German,
    /// English
    #[serde(alias = "english")]
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "german" | "deutsch" | "de" => Ok(Self::German),
            "english" | "englisch" | "en" => Ok(Self::English),
            _ => Err(format!("Unknown language: '{s}' (expected german or english)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::German => write!(f, "german"),
            Self::English => write!(f, "english"),
        }
    }
}

/// Study time model of a program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeModel {
    /// Full-time study
    #[default]
    #[serde(alias = "fulltime")]
    Fulltime,
    /// Part-time study
    #[serde(alias = "parttime")]
    Parttime,
}

impl fmt::Display for TimeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fulltime => write!(f, "Fulltime"),
            Self::Parttime => write!(f, "Parttime"),
        }
    }
}

/// A module guide: one study program with all its course placements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGuide {
    /// Subject of the program (e.g., "Informatik")
    pub subject: String,

    /// Degree awarded (e.g., "B.Sc.")
    pub degree: String,

    /// Full-time or part-time program
    #[serde(rename = "timemodel", default)]
    pub time_model: TimeModel,

    /// Year of the guide edition
    #[serde(default)]
    pub year: String,

    /// Language of the generated document; falls back to configuration when absent
    #[serde(rename = "generallanguage", default)]
    pub general_language: Option<Language>,

    /// Course placements of the program
    #[serde(default)]
    pub modules: Vec<CourseMeta>,
}

impl ModuleGuide {
    /// Create an empty guide
    ///
    /// # Arguments
    /// * `subject` - Program subject
    /// * `degree` - Degree awarded
    /// * `year` - Edition year
    #[must_use]
    pub const fn new(subject: String, degree: String, year: String) -> Self {
        Self {
            subject,
            degree,
            time_model: TimeModel::Fulltime,
            year,
            general_language: None,
            modules: Vec::new(),
        }
    }

    /// Human-readable title used in diagnostics
    ///
    /// # Returns
    /// A string such as "Informatik (B.Sc., Fulltime, 2024)"
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} ({}, {}, {})",
            self.subject, self.degree, self.time_model, self.year
        )
    }

    /// Add a placement to the guide
    pub fn add_module(&mut self, meta: CourseMeta) {
        self.modules.push(meta);
    }
}
