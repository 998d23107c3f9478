use serde::{Deserialize, Serialize};

use super::aggregate::Patient;
use crate::enums::PatientStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PatientStatus),
}

impl StatusFilter {
    /// The list screen only flips between everyone and critical residents
    pub fn toggled(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(PatientStatus::Critical),
            StatusFilter::Only(_) => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.display_name(),
        }
    }

    pub fn accepts(&self, status: PatientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => *s == status,
        }
    }
}

/// Search box plus status filter of the patient list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        if !self.status.accepts(patient.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || patient.name.to_lowercase().contains(&needle)
            || patient.room_number.to_lowercase().contains(&needle)
    }

    /// Matching patients in their original order
    pub fn apply<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        patients.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_patient::{EmergencyContact, Gender, PatientId};
    use chrono::NaiveDate;

    fn patient(id: &str, name: &str, room: &str, status: PatientStatus) -> Patient {
        Patient {
            id: PatientId::new(id),
            name: name.into(),
            age: 80,
            gender: Gender::Female,
            room_number: room.into(),
            primary_diagnosis: String::new(),
            admission_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            status,
            allergies: vec![],
            emergency_contact: EmergencyContact {
                name: String::new(),
                relationship: String::new(),
                phone: String::new(),
            },
        }
    }

    fn ward() -> Vec<Patient> {
        vec![
            patient("p1", "Eleanor Rigby", "301A", PatientStatus::Critical),
            patient("p2", "Harold Finch", "204B", PatientStatus::Stable),
            patient("p3", "Martha Stewart", "112C", PatientStatus::Observation),
        ]
    }

    fn ids(list: Vec<&Patient>) -> Vec<&str> {
        list.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everyone() {
        let ward = ward();
        assert_eq!(ids(PatientFilter::default().apply(&ward)), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_search_by_name_or_room_case_insensitive() {
        let ward = ward();
        let mut filter = PatientFilter {
            search: "FINCH".into(),
            ..Default::default()
        };
        assert_eq!(ids(filter.apply(&ward)), vec!["p2"]);

        filter.search = "112c".into();
        assert_eq!(ids(filter.apply(&ward)), vec!["p3"]);

        filter.search = "zzz".into();
        assert!(filter.apply(&ward).is_empty());
    }

    #[test]
    fn test_status_toggle() {
        let ward = ward();
        let mut filter = PatientFilter::default();
        filter.status = filter.status.toggled();
        assert_eq!(filter.status, StatusFilter::Only(PatientStatus::Critical));
        assert_eq!(ids(filter.apply(&ward)), vec!["p1"]);

        filter.status = filter.status.toggled();
        assert_eq!(filter.status, StatusFilter::All);
    }

    #[test]
    fn test_search_and_status_combine() {
        let ward = ward();
        let filter = PatientFilter {
            search: "harold".into(),
            status: StatusFilter::Only(PatientStatus::Critical),
        };
        assert!(filter.apply(&ward).is_empty());
    }
}
