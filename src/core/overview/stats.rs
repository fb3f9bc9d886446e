//! Per-placement statistics

use super::labels::Labels;
use serde::{Deserialize, Serialize};

/// Kind of track a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// A named specialization track
    Specialization,
    /// The reserved elective track
    Elective,
}

/// A numbered slot in the semester timeline that a placeholder stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackSlot {
    /// Track kind
    pub kind: TrackKind,
    /// Slot number within the track
    pub number: u32,
}

impl TrackSlot {
    /// Create a slot
    #[must_use]
    pub const fn new(kind: TrackKind, number: u32) -> Self {
        Self { kind, number }
    }
}

/// Scaled figures of one placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStats {
    /// Course id
    pub id: String,
    /// Course title, or the synthetic placeholder title
    pub title: String,
    /// Nominal semester
    pub semester: u32,
    /// Duration in semesters
    pub duration: u32,
    /// Scaled contact hours
    pub contact_hours: u32,
    /// Scaled self-study hours
    pub home_hours: u32,
    /// Scaled ECTS credits
    pub ects: u32,
    /// Examination code, or the "see ..." label of a placeholder
    pub examination: String,
    /// Slot this entry stands in for; `None` for concrete stats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<TrackSlot>,
}

impl ModuleStats {
    /// Placeholder variant shown in the semester timeline
    ///
    /// Keeps id, semester and figures; swaps title and examination for the
    /// localized slot title and "see ..." label.
    ///
    /// # Arguments
    /// * `slot` - Track slot the placeholder stands for
    /// * `labels` - Localized label table
    #[must_use]
    pub fn for_slot(&self, slot: TrackSlot, labels: &Labels) -> Self {
        Self {
            id: self.id.clone(),
            title: labels.placeholder_title(slot.kind, slot.number),
            semester: self.semester,
            duration: self.duration,
            contact_hours: self.contact_hours,
            home_hours: self.home_hours,
            ects: self.ects,
            examination: labels.see_label(slot.kind).to_string(),
            slot: Some(slot),
        }
    }

    /// Contact hours, self-study hours and ECTS as one tuple
    #[must_use]
    pub const fn workload(&self) -> (u32, u32, u32) {
        (self.contact_hours, self.home_hours, self.ects)
    }

    /// Whether this entry is a placeholder
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.slot.is_some()
    }
}
