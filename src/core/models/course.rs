//! Course models
//!
//! A [`CourseMeta`] places a course inside one study program; a
//! [`CourseContent`] describes the course independently of any program.

use serde::{Deserialize, Serialize};

const fn one() -> u32 {
    1
}

/// Placement of one course within a module guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMeta {
    /// Key into the course content lookup (e.g., "INF101")
    #[serde(rename = "module")]
    pub course_id: String,

    /// Nominal semester number, starting at 1
    pub semester: u32,

    /// Explicit position within the semester
    #[serde(rename = "sempos", default)]
    pub sequence_position: Option<u32>,

    /// Module type as printed in the guide (e.g., "Pflicht")
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Offering frequency (e.g., "jedes Jahr")
    #[serde(default)]
    pub frequency: Option<String>,

    /// Weight of the module in the final grade
    #[serde(default)]
    pub weight: u32,

    /// Number of semesters the course spans
    #[serde(rename = "duration", default = "one")]
    pub duration_semesters: u32,

    /// Responsible lecturer for this placement
    #[serde(default)]
    pub responsible: Option<String>,

    /// Scaling factor for contact hours (e.g., "1/2", "0.5")
    #[serde(rename = "contacthoursfactor", default)]
    pub contact_hours_factor: Option<String>,

    /// Scaling factor for self-study hours
    #[serde(rename = "homehoursfactor", default)]
    pub self_study_hours_factor: Option<String>,

    /// Scaling factor for ECTS credits
    #[serde(rename = "ectsfactor", default)]
    pub ects_factor: Option<String>,

    /// Specialization track name; the elective marker denotes the elective track
    #[serde(rename = "specialization", default)]
    pub specialization_name: Option<String>,

    /// Ordinal slot within the specialization or elective track
    #[serde(rename = "specializationnumber", default)]
    pub specialization_number: Option<u32>,
}

impl CourseMeta {
    /// Create a regular placement with weight 0, duration 1 and no factors
    ///
    /// # Arguments
    /// * `course_id` - Key of the course content
    /// * `semester` - Nominal semester
    #[must_use]
    pub const fn new(course_id: String, semester: u32) -> Self {
        Self {
            course_id,
            semester,
            sequence_position: None,
            kind: None,
            frequency: None,
            weight: 0,
            duration_semesters: 1,
            responsible: None,
            contact_hours_factor: None,
            self_study_hours_factor: None,
            ects_factor: None,
            specialization_name: None,
            specialization_number: None,
        }
    }

    /// Set the position within the semester
    #[must_use]
    pub const fn with_sequence_position(mut self, position: u32) -> Self {
        self.sequence_position = Some(position);
        self
    }

    /// Set the grade weight
    #[must_use]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the duration in semesters
    #[must_use]
    pub const fn with_duration(mut self, semesters: u32) -> Self {
        self.duration_semesters = semesters;
        self
    }

    /// Place the course into a specialization (or the elective) track
    ///
    /// # Arguments
    /// * `name` - Track name
    /// * `number` - Slot number within the track
    #[must_use]
    pub fn with_specialization(mut self, name: &str, number: u32) -> Self {
        self.specialization_name = Some(name.to_string());
        self.specialization_number = Some(number);
        self
    }

    /// Set the contact hours, self-study hours and ECTS factors at once
    #[must_use]
    pub fn with_factors(
        mut self,
        contact_hours: Option<&str>,
        self_study_hours: Option<&str>,
        ects: Option<&str>,
    ) -> Self {
        self.contact_hours_factor = contact_hours.map(str::to_string);
        self.self_study_hours_factor = self_study_hours.map(str::to_string);
        self.ects_factor = ects.map(str::to_string);
        self
    }

    /// Whether this placement belongs to the elective track
    ///
    /// # Arguments
    /// * `elective_marker` - Reserved track name of the elective track
    #[must_use]
    pub fn is_elective(&self, elective_marker: &str) -> bool {
        self.specialization_name.as_deref() == Some(elective_marker)
    }
}

/// Program-independent description of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContent {
    /// Course title
    pub title: String,

    /// Nominal contact hours
    #[serde(rename = "contacthours")]
    pub nominal_contact_hours: u32,

    /// Nominal self-study hours
    #[serde(rename = "homehours")]
    pub nominal_self_study_hours: u32,

    /// Nominal ECTS credits
    #[serde(rename = "ects")]
    pub nominal_ects: u32,

    /// Examination code (e.g., "K", "*MS")
    #[serde(rename = "examination", default)]
    pub examination_code: String,
}

impl CourseContent {
    /// Create a new course description
    ///
    /// # Arguments
    /// * `title` - Course title
    /// * `contact_hours` - Nominal contact hours
    /// * `self_study_hours` - Nominal self-study hours
    /// * `ects` - Nominal ECTS credits
    /// * `examination_code` - Examination code
    #[must_use]
    pub const fn new(
        title: String,
        contact_hours: u32,
        self_study_hours: u32,
        ects: u32,
        examination_code: String,
    ) -> Self {
        Self {
            title,
            nominal_contact_hours: contact_hours,
            nominal_self_study_hours: self_study_hours,
            nominal_ects: ects,
            examination_code,
        }
    }
}
