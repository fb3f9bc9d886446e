//! Timeline ordering of course placements
//!
//! Every placement maps to a [`TimelineKey`]; the derived ordering of the key
//! is the timeline order:
//!
//! 1. Regular placements (no slot number) before track placements, regardless
//!    of semester.
//! 2. Among track placements: named specializations before the elective track;
//!    named specializations by name, then slot number; electives by slot number.
//! 3. Among regular placements: by semester.
//! 4. Within a semester: positioned before unpositioned, positions ascending.
//!
//! Ties keep input order, because sorting is stable.

use crate::core::models::CourseMeta;
use std::cmp::Ordering;

/// Position within a semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    /// Explicit sequence position
    At(u32),
    /// No position; sorts after every positioned entry
    Unpositioned,
}

/// Composite sort key of one placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimelineKey<'a> {
    /// Placement without a slot number
    Regular {
        /// Nominal semester
        semester: u32,
        /// Position within the semester
        position: Position,
    },
    /// Placement in a named specialization track
    Specialization {
        /// Track name
        name: &'a str,
        /// Slot number
        number: u32,
    },
    /// Placement in the elective track
    Elective {
        /// Slot number
        number: u32,
    },
}

/// Derive the sort key of a placement
///
/// # Arguments
/// * `meta` - The placement
/// * `elective_marker` - Reserved track name of the elective track
#[must_use]
pub fn timeline_key<'a>(meta: &'a CourseMeta, elective_marker: &str) -> TimelineKey<'a> {
    match meta.specialization_number {
        Some(number) if meta.is_elective(elective_marker) => TimelineKey::Elective { number },
        Some(number) => TimelineKey::Specialization {
            name: meta.specialization_name.as_deref().unwrap_or_default(),
            number,
        },
        None => TimelineKey::Regular {
            semester: meta.semester,
            position: meta.sequence_position.map_or(Position::Unpositioned, Position::At),
        },
    }
}

/// Compare two placements in timeline order
#[must_use]
pub fn compare(a: &CourseMeta, b: &CourseMeta, elective_marker: &str) -> Ordering {
    timeline_key(a, elective_marker).cmp(&timeline_key(b, elective_marker))
}

/// Placements sorted into timeline order (stable)
///
/// # Arguments
/// * `placements` - Placements in input order
/// * `elective_marker` - Reserved track name of the elective track
#[must_use]
pub fn sort_for_timeline<'a>(
    placements: &'a [CourseMeta],
    elective_marker: &str,
) -> Vec<&'a CourseMeta> {
    let mut sorted: Vec<&CourseMeta> = placements.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, elective_marker));
    sorted
}
