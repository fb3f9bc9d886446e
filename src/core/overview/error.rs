//! Build failures and recoverable diagnostics

use super::factor::FactorError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Scaled quantity of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Contact hours
    ContactHours,
    /// Self-study hours
    SelfStudyHours,
    /// ECTS credits
    Ects,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContactHours => write!(f, "contact hours"),
            Self::SelfStudyHours => write!(f, "self-study hours"),
            Self::Ects => write!(f, "ECTS"),
        }
    }
}

/// Fatal input errors; no overview is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverviewError {
    /// Malformed factor text
    #[error("Invalid factor for course '{course_id}': {source}")]
    Format {
        /// Course whose placement carries the factor
        course_id: String,
        /// Parser failure
        #[source]
        source: FactorError,
    },

    /// A factor yields a fractional hour or credit value
    #[error("Factor for {quantity} of course '{course_id}' does not lead to an integer result ({value})")]
    NonIntegralScaling {
        /// Offending course
        course_id: String,
        /// Quantity that was scaled
        quantity: Quantity,
        /// Exact scaled value
        value: String,
    },

    /// A scaled value is negative or does not fit the stats fields
    #[error("Scaled {quantity} of course '{course_id}' is out of range ({value})")]
    ValueOutOfRange {
        /// Offending course
        course_id: String,
        /// Quantity that was scaled
        quantity: Quantity,
        /// Exact scaled value
        value: String,
    },

    /// A running total exceeds the range of the sum fields
    #[error("Sum of {total} overflows when adding course '{course_id}'")]
    SumOverflow {
        /// Course whose figures were being added
        course_id: String,
        /// Name of the overflowing total
        total: String,
    },

    /// Placements sharing a slot number scale to different figures
    #[error(
        "Stats of {track} module {number} do not match: course '{course_id}' has \
         {found:?} (contact, self-study, ECTS), expected {expected:?}"
    )]
    InconsistentSpecialization {
        /// Track name of the mismatching placement
        track: String,
        /// Slot number
        number: u32,
        /// Course of the mismatching placement
        course_id: String,
        /// Figures of the first placement in this slot
        expected: (u32, u32, u32),
        /// Figures of the mismatching placement
        found: (u32, u32, u32),
    },

    /// Track name without slot number, or slot number without track name
    #[error("Course '{course_id}' needs both a specialization name and a specialization number")]
    IncompleteSpecialization {
        /// Offending course
        course_id: String,
    },
}

/// Recoverable conditions reported next to a complete overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A placement references an unknown course; it was skipped
    MissingCourseContent {
        /// Unknown course id
        course_id: String,
    },

    /// Sum of weights differs from sum of ECTS
    WeightEctsMismatch {
        /// Sum of placement weights
        weight_sum: u32,
        /// Sum of ECTS
        ects_sum: u32,
        /// Guide title
        title: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCourseContent { course_id } => {
                write!(f, "No course content found for '{course_id}'; placement skipped")
            }
            Self::WeightEctsMismatch {
                weight_sum,
                ects_sum,
                title,
            } => write!(
                f,
                "Sum of weights and ECTS does not match ({weight_sum} vs. {ects_sum} in {title})"
            ),
        }
    }
}
