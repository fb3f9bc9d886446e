//! Localized labels for placeholder timeline entries
//!
//! The builder only needs four strings: two numbered title patterns with a
//! single `%s` for the Roman numeral, and two "see ..." examination labels.

use super::roman::to_roman_numeral;
use super::stats::TrackKind;
use crate::core::models::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keys of the label table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Title pattern of an elective placeholder (one `%s`)
    ElectiveModulePattern,
    /// Title pattern of a specialization placeholder (one `%s`)
    SpecializationModulePattern,
    /// Examination label of an elective placeholder
    SeeElective,
    /// Examination label of a specialization placeholder
    SeeSpecialization,
}

impl LabelKey {
    /// All keys in table order
    pub const ALL: [Self; 4] = [
        Self::ElectiveModulePattern,
        Self::SpecializationModulePattern,
        Self::SeeElective,
        Self::SeeSpecialization,
    ];
}

impl FromStr for LabelKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "ELECTIVE_MODULE_PATTERN" => Ok(Self::ElectiveModulePattern),
            "SPECIALIZATION_MODULE_PATTERN" => Ok(Self::SpecializationModulePattern),
            "SEE_ELECTIVE" => Ok(Self::SeeElective),
            "SEE_SPECIALIZATION" => Ok(Self::SeeSpecialization),
            _ => Err(format!("Unknown label key: '{s}'")),
        }
    }
}

impl fmt::Display for LabelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ElectiveModulePattern => "ELECTIVE_MODULE_PATTERN",
            Self::SpecializationModulePattern => "SPECIALIZATION_MODULE_PATTERN",
            Self::SeeElective => "SEE_ELECTIVE",
            Self::SeeSpecialization => "SEE_SPECIALIZATION",
        };
        write!(f, "{name}")
    }
}

/// Label table injected into the overview builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Title pattern of an elective placeholder
    pub elective_module_pattern: String,
    /// Title pattern of a specialization placeholder
    pub specialization_module_pattern: String,
    /// Examination label of an elective placeholder
    pub see_elective: String,
    /// Examination label of a specialization placeholder
    pub see_specialization: String,
}

impl Labels {
    /// German label table
    #[must_use]
    pub fn german() -> Self {
        Self {
            elective_module_pattern: "Wahlpflichtmodul %s".to_string(),
            specialization_module_pattern: "Modul %s aus Spezialisierung".to_string(),
            see_elective: "S. Wahlpflicht".to_string(),
            see_specialization: "S. Spezialisierung".to_string(),
        }
    }

    /// English label table
    #[must_use]
    pub fn english() -> Self {
        Self {
            elective_module_pattern: "Elective module %s".to_string(),
            specialization_module_pattern: "Specialization module %s".to_string(),
            see_elective: "see elective modules".to_string(),
            see_specialization: "see specializations".to_string(),
        }
    }

    /// Built-in label table for a language
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::German => Self::german(),
            Language::English => Self::english(),
        }
    }

    /// Look up a label
    #[must_use]
    pub fn get(&self, key: LabelKey) -> &str {
        match key {
            LabelKey::ElectiveModulePattern => &self.elective_module_pattern,
            LabelKey::SpecializationModulePattern => &self.specialization_module_pattern,
            LabelKey::SeeElective => &self.see_elective,
            LabelKey::SeeSpecialization => &self.see_specialization,
        }
    }

    /// Replace a label
    pub fn set(&mut self, key: LabelKey, value: String) {
        match key {
            LabelKey::ElectiveModulePattern => self.elective_module_pattern = value,
            LabelKey::SpecializationModulePattern => self.specialization_module_pattern = value,
            LabelKey::SeeElective => self.see_elective = value,
            LabelKey::SeeSpecialization => self.see_specialization = value,
        }
    }

    /// Synthetic title of a placeholder, e.g. "Elective module III"
    ///
    /// # Arguments
    /// * `kind` - Track the slot belongs to
    /// * `number` - Slot number, rendered as a Roman numeral
    #[must_use]
    pub fn placeholder_title(&self, kind: TrackKind, number: u32) -> String {
        let pattern = match kind {
            TrackKind::Elective => self.get(LabelKey::ElectiveModulePattern),
            TrackKind::Specialization => self.get(LabelKey::SpecializationModulePattern),
        };
        pattern.replacen("%s", &to_roman_numeral(number), 1)
    }

    /// Examination label pointing the reader to the track's detail chapter
    #[must_use]
    pub fn see_label(&self, kind: TrackKind) -> &str {
        match kind {
            TrackKind::Elective => self.get(LabelKey::SeeElective),
            TrackKind::Specialization => self.get(LabelKey::SeeSpecialization),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::german()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_titles() {
        let english = Labels::english();
        assert_eq!(
            english.placeholder_title(TrackKind::Elective, 3),
            "Elective module III"
        );
        assert_eq!(
            english.placeholder_title(TrackKind::Specialization, 4),
            "Specialization module IV"
        );

        let german = Labels::german();
        assert_eq!(
            german.placeholder_title(TrackKind::Specialization, 2),
            "Modul II aus Spezialisierung"
        );
    }

    #[test]
    fn test_see_labels() {
        let german = Labels::for_language(Language::German);
        assert_eq!(german.see_label(TrackKind::Elective), "S. Wahlpflicht");
        assert_eq!(
            german.see_label(TrackKind::Specialization),
            "S. Spezialisierung"
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut labels = Labels::default();
        labels.set(LabelKey::ElectiveModulePattern, "WP %s".to_string());

        assert_eq!(labels.get(LabelKey::ElectiveModulePattern), "WP %s");
        assert_eq!(labels.placeholder_title(TrackKind::Elective, 9), "WP IX");
    }

    #[test]
    fn test_pattern_without_placeholder_is_kept_verbatim() {
        let mut labels = Labels::english();
        labels.set(LabelKey::SpecializationModulePattern, "Track module".to_string());

        assert_eq!(
            labels.placeholder_title(TrackKind::Specialization, 1),
            "Track module"
        );
    }

    #[test]
    fn test_label_key_names_roundtrip() {
        for key in LabelKey::ALL {
            assert_eq!(key.to_string().parse::<LabelKey>(), Ok(key));
        }
        assert_eq!("see-elective".parse::<LabelKey>(), Ok(LabelKey::SeeElective));
        assert!("SUM".parse::<LabelKey>().is_err());
    }
}
