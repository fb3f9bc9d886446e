//! Overview aggregation for module guides
//!
//! Turns the course placements of a guide into the figures the handbook
//! prints: one list of stats per semester, the concrete courses of every
//! specialization track, and the program totals.
//!
//! Placements are visited in timeline order (see [`ordering`]). A regular
//! placement lands in its semester as is. The first placement of a
//! specialization or elective slot lands there as a placeholder ("Elective
//! module II", "see elective modules"); later placements in the same slot must
//! scale to the same figures and only show up in the track's detail list.
//! Totals count each timeline entry once.

pub mod error;
pub mod factor;
pub mod labels;
pub mod ordering;
pub mod roman;
pub mod stats;

pub use error::{Diagnostic, OverviewError, Quantity};
pub use factor::{parse_factor, FactorError};
pub use labels::{LabelKey, Labels};
pub use roman::{format_number_set, to_roman_numeral};
pub use stats::{ModuleStats, TrackKind, TrackSlot};

use crate::core::models::{CourseContent, CourseMeta, ModuleGuide};
use crate::{debug, info, warn};
use num_traits::ToPrimitive;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

/// Reserved track name of the elective track
pub const DEFAULT_ELECTIVE_MARKER: &str = "Wahlpflicht";

/// Source of course descriptions, keyed by course id
pub trait CourseLookup {
    /// Look up the description of a course
    fn course(&self, course_id: &str) -> Option<&CourseContent>;
}

impl<S: BuildHasher> CourseLookup for HashMap<String, CourseContent, S> {
    fn course(&self, course_id: &str) -> Option<&CourseContent> {
        self.get(course_id)
    }
}

impl CourseLookup for BTreeMap<String, CourseContent> {
    fn course(&self, course_id: &str) -> Option<&CourseContent> {
        self.get(course_id)
    }
}

/// Timeline entries of one semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Semester {
    /// Semester number
    pub number: u32,
    /// Entries in timeline order
    pub modules: Vec<ModuleStats>,
}

/// Elective courses offered under the same set of slot numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectiveGroup {
    /// Slot numbers
    pub numbers: BTreeSet<u32>,
    /// Numbers rendered as Roman numerals (e.g., "I–III")
    pub label: String,
    /// Courses of the group, each once
    pub modules: Vec<ModuleStats>,
}

/// Aggregated figures of a module guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Semesters in ascending order
    pub semesters: Vec<Semester>,
    /// Concrete stats of every track placement, by track name
    pub specializations: BTreeMap<String, Vec<ModuleStats>>,
    /// Elective slot numbers each elective course is offered under
    pub elective_numbers: BTreeMap<String, BTreeSet<u32>>,
    /// Track name of the elective track
    pub elective_marker: String,
    /// Total contact hours
    pub contact_hours_sum: u32,
    /// Total self-study hours
    pub home_hours_sum: u32,
    /// Total ECTS credits
    pub ects_sum: u32,
    /// Total weight
    pub weight_sum: u32,
}

impl Overview {
    /// All timeline entries, semester by semester
    pub fn timeline(&self) -> impl Iterator<Item = &ModuleStats> {
        self.semesters.iter().flat_map(|s| s.modules.iter())
    }

    /// Number of specialization placeholders in the timeline
    #[must_use]
    pub fn specialization_slot_count(&self) -> usize {
        self.slot_count(TrackKind::Specialization)
    }

    /// Number of elective placeholders in the timeline
    #[must_use]
    pub fn elective_slot_count(&self) -> usize {
        self.slot_count(TrackKind::Elective)
    }

    fn slot_count(&self, kind: TrackKind) -> usize {
        self.timeline()
            .filter(|stats| stats.slot.is_some_and(|slot| slot.kind == kind))
            .count()
    }

    /// Detail lists of the named specialization tracks, by name
    pub fn named_specializations(&self) -> impl Iterator<Item = (&str, &[ModuleStats])> {
        self.specializations
            .iter()
            .filter(|(name, _)| **name != self.elective_marker)
            .map(|(name, stats)| (name.as_str(), stats.as_slice()))
    }

    /// Detail list of the elective track
    #[must_use]
    pub fn electives(&self) -> &[ModuleStats] {
        self.specializations
            .get(&self.elective_marker)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Elective courses grouped by the slot numbers they are offered under
    ///
    /// Groups are ordered by their number sets; a course offered in several
    /// placements of the same group is listed once.
    #[must_use]
    pub fn elective_groups(&self) -> Vec<ElectiveGroup> {
        let mut groups: BTreeMap<BTreeSet<u32>, Vec<ModuleStats>> = BTreeMap::new();
        for stats in self.electives() {
            let numbers = self
                .elective_numbers
                .get(&stats.id)
                .cloned()
                .unwrap_or_default();
            let modules = groups.entry(numbers).or_default();
            if modules.iter().all(|m| m.id != stats.id) {
                modules.push(stats.clone());
            }
        }

        groups
            .into_iter()
            .map(|(numbers, modules)| ElectiveGroup {
                label: format_number_set(&numbers),
                numbers,
                modules,
            })
            .collect()
    }

    /// Whether total weight equals total ECTS
    #[must_use]
    pub const fn is_weight_consistent(&self) -> bool {
        self.weight_sum == self.ects_sum
    }
}

/// A finished overview plus recoverable diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewReport {
    /// The overview
    pub overview: Overview,
    /// Conditions that did not stop the build
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds an [`Overview`] from placements and course descriptions
///
/// The builder holds configuration only; [`OverviewBuilder::build`] is pure
/// and may be called any number of times.
#[derive(Debug, Clone)]
pub struct OverviewBuilder<'a> {
    labels: &'a Labels,
    elective_marker: String,
    title: String,
}

impl<'a> OverviewBuilder<'a> {
    /// Create a builder with the default elective marker
    ///
    /// # Arguments
    /// * `labels` - Localized placeholder labels
    #[must_use]
    pub fn new(labels: &'a Labels) -> Self {
        Self {
            labels,
            elective_marker: DEFAULT_ELECTIVE_MARKER.to_string(),
            title: String::new(),
        }
    }

    /// Set the reserved track name of the elective track
    #[must_use]
    pub fn elective_marker(mut self, marker: impl Into<String>) -> Self {
        self.elective_marker = marker.into();
        self
    }

    /// Set the guide title used in diagnostics
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Aggregate placements into an overview
    ///
    /// # Arguments
    /// * `placements` - Course placements in input order
    /// * `courses` - Course descriptions keyed by course id
    ///
    /// # Errors
    /// Returns an [`OverviewError`] for malformed or non-integral factors,
    /// incomplete track data, slot placements with mismatching figures, or
    /// totals that overflow. No partial overview is returned.
    pub fn build<L>(&self, placements: &[CourseMeta], courses: &L) -> Result<OverviewReport, OverviewError>
    where
        L: CourseLookup + ?Sized,
    {
        if let Some(meta) = placements
            .iter()
            .find(|m| m.specialization_name.is_some() != m.specialization_number.is_some())
        {
            return Err(OverviewError::IncompleteSpecialization {
                course_id: meta.course_id.clone(),
            });
        }

        let mut acc = Accumulator::default();
        for meta in ordering::sort_for_timeline(placements, &self.elective_marker) {
            if let (Some(track), Some(number)) = (&meta.specialization_name, meta.specialization_number) {
                if self.track_kind(track) == TrackKind::Elective {
                    acc.elective_numbers
                        .entry(meta.course_id.clone())
                        .or_default()
                        .insert(number);
                }
            }

            let Some(content) = courses.course(&meta.course_id) else {
                warn!(
                    "No course content found for '{}'; placement skipped",
                    meta.course_id
                );
                acc.diagnostics.push(Diagnostic::MissingCourseContent {
                    course_id: meta.course_id.clone(),
                });
                continue;
            };

            let stats = compute_stats(meta, content)?;
            debug!(
                "Visiting '{}' (semester {}, {}/{}/{})",
                stats.id, stats.semester, stats.contact_hours, stats.home_hours, stats.ects
            );

            match (&meta.specialization_name, meta.specialization_number) {
                (Some(track), Some(number)) => {
                    self.add_track_placement(&mut acc, meta, track, number, stats)?;
                }
                _ => acc.add_to_timeline(stats, meta.weight)?,
            }
        }

        Ok(self.finish(acc))
    }

    fn add_track_placement(
        &self,
        acc: &mut Accumulator,
        meta: &CourseMeta,
        track: &str,
        number: u32,
        stats: ModuleStats,
    ) -> Result<(), OverviewError> {
        let kind = self.track_kind(track);
        let slot = TrackSlot::new(kind, number);

        if let Some(first) = acc.seen_slots.get(&slot) {
            if first.workload() != stats.workload() {
                return Err(OverviewError::InconsistentSpecialization {
                    track: track.to_string(),
                    number,
                    course_id: stats.id.clone(),
                    expected: first.workload(),
                    found: stats.workload(),
                });
            }
            debug!("Slot {kind:?} {number} already in timeline; '{}' listed in '{track}' only", stats.id);
        } else {
            let placeholder = stats.for_slot(slot, self.labels);
            acc.seen_slots.insert(slot, placeholder.clone());
            acc.add_to_timeline(placeholder, meta.weight)?;
        }

        acc.specializations
            .entry(track.to_string())
            .or_default()
            .push(stats);
        Ok(())
    }

    fn track_kind(&self, track: &str) -> TrackKind {
        if track == self.elective_marker {
            TrackKind::Elective
        } else {
            TrackKind::Specialization
        }
    }

    fn finish(&self, acc: Accumulator) -> OverviewReport {
        let Accumulator {
            semesters,
            specializations,
            elective_numbers,
            contact_hours_sum,
            home_hours_sum,
            ects_sum,
            weight_sum,
            mut diagnostics,
            ..
        } = acc;

        if weight_sum != ects_sum {
            warn!(
                "Sum of weights and ECTS does not match ({weight_sum} vs. {ects_sum} in {})",
                self.title
            );
            diagnostics.push(Diagnostic::WeightEctsMismatch {
                weight_sum,
                ects_sum,
                title: self.title.clone(),
            });
        }

        let overview = Overview {
            semesters: semesters
                .into_iter()
                .map(|(number, modules)| Semester { number, modules })
                .collect(),
            specializations,
            elective_numbers,
            elective_marker: self.elective_marker.clone(),
            contact_hours_sum,
            home_hours_sum,
            ects_sum,
            weight_sum,
        };
        info!(
            "Overview built: {} semesters, {} tracks, {} ECTS",
            overview.semesters.len(),
            overview.specializations.len(),
            overview.ects_sum
        );

        OverviewReport {
            overview,
            diagnostics,
        }
    }
}

/// Build the overview of a guide
///
/// # Arguments
/// * `guide` - The module guide
/// * `courses` - Course descriptions keyed by course id
/// * `labels` - Localized placeholder labels
/// * `elective_marker` - Reserved track name of the elective track
///
/// # Errors
/// See [`OverviewBuilder::build`]
pub fn build_overview<L>(
    guide: &ModuleGuide,
    courses: &L,
    labels: &Labels,
    elective_marker: &str,
) -> Result<OverviewReport, OverviewError>
where
    L: CourseLookup + ?Sized,
{
    OverviewBuilder::new(labels)
        .elective_marker(elective_marker)
        .title(guide.title())
        .build(&guide.modules, courses)
}

#[derive(Debug, Default)]
struct Accumulator {
    semesters: BTreeMap<u32, Vec<ModuleStats>>,
    seen_slots: BTreeMap<TrackSlot, ModuleStats>,
    specializations: BTreeMap<String, Vec<ModuleStats>>,
    elective_numbers: BTreeMap<String, BTreeSet<u32>>,
    contact_hours_sum: u32,
    home_hours_sum: u32,
    ects_sum: u32,
    weight_sum: u32,
    diagnostics: Vec<Diagnostic>,
}

impl Accumulator {
    /// Append a timeline entry; totals are only updated if none overflows
    fn add_to_timeline(&mut self, stats: ModuleStats, weight: u32) -> Result<(), OverviewError> {
        let add = |sum: u32, value: u32, total: &str| {
            sum.checked_add(value).ok_or_else(|| OverviewError::SumOverflow {
                course_id: stats.id.clone(),
                total: total.to_string(),
            })
        };
        let contact_hours_sum = add(
            self.contact_hours_sum,
            stats.contact_hours,
            &Quantity::ContactHours.to_string(),
        )?;
        let home_hours_sum = add(
            self.home_hours_sum,
            stats.home_hours,
            &Quantity::SelfStudyHours.to_string(),
        )?;
        let ects_sum = add(self.ects_sum, stats.ects, &Quantity::Ects.to_string())?;
        let weight_sum = add(self.weight_sum, weight, "weight")?;

        self.contact_hours_sum = contact_hours_sum;
        self.home_hours_sum = home_hours_sum;
        self.ects_sum = ects_sum;
        self.weight_sum = weight_sum;
        self.semesters.entry(stats.semester).or_default().push(stats);
        Ok(())
    }
}

/// Scale the nominal figures of `content` by the factors of `meta`
fn compute_stats(meta: &CourseMeta, content: &CourseContent) -> Result<ModuleStats, OverviewError> {
    let id = &meta.course_id;
    Ok(ModuleStats {
        id: id.clone(),
        title: content.title.clone(),
        semester: meta.semester,
        duration: meta.duration_semesters,
        contact_hours: scaled(
            id,
            Quantity::ContactHours,
            meta.contact_hours_factor.as_deref(),
            content.nominal_contact_hours,
        )?,
        home_hours: scaled(
            id,
            Quantity::SelfStudyHours,
            meta.self_study_hours_factor.as_deref(),
            content.nominal_self_study_hours,
        )?,
        ects: scaled(id, Quantity::Ects, meta.ects_factor.as_deref(), content.nominal_ects)?,
        examination: content.examination_code.clone(),
        slot: None,
    })
}

fn scaled(
    course_id: &str,
    quantity: Quantity,
    factor: Option<&str>,
    nominal: u32,
) -> Result<u32, OverviewError> {
    let ratio = parse_factor(factor).map_err(|source| OverviewError::Format {
        course_id: course_id.to_string(),
        source,
    })?;
    let value = factor::scale(&ratio, nominal);
    let whole = factor::whole_value(&value).ok_or_else(|| OverviewError::NonIntegralScaling {
        course_id: course_id.to_string(),
        quantity,
        value: value.to_string(),
    })?;
    whole.to_u32().ok_or_else(|| OverviewError::ValueOutOfRange {
        course_id: course_id.to_string(),
        quantity,
        value: whole.to_string(),
    })
}
