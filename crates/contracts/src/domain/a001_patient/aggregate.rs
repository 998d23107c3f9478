use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::PatientStatus;

// ============================================================================
// ID Type
// ============================================================================

/// Resident identifier ("p1", "p2", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn short(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Resident of the facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub room_number: String,
    pub primary_diagnosis: String,
    pub admission_date: NaiveDate,
    pub status: PatientStatus,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub emergency_contact: EmergencyContact,
}

impl Patient {
    /// Up to two uppercase initials taken from the name words
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// "82 yrs • F • Room 301A"
    pub fn summary_line(&self) -> String {
        format!(
            "{} yrs • {} • Room {}",
            self.age,
            self.gender.short(),
            self.room_number
        )
    }

    pub fn allergies_label(&self) -> String {
        if self.allergies.is_empty() {
            "None recorded".to_string()
        } else {
            self.allergies.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Patient {
        Patient {
            id: PatientId::new("p1"),
            name: "Eleanor Rigby".into(),
            age: 82,
            gender: Gender::Female,
            room_number: "301A".into(),
            primary_diagnosis: "Congestive heart failure".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
            status: PatientStatus::Critical,
            allergies: vec![],
            emergency_contact: EmergencyContact {
                name: "Mark Rigby".into(),
                relationship: "Son".into(),
                phone: "+1 (555) 010-0001".into(),
            },
        }
    }

    #[test]
    fn test_initials() {
        let mut p = sample();
        assert_eq!(p.initials(), "ER");
        p.name = "cher".into();
        assert_eq!(p.initials(), "C");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["roomNumber"], "301A");
        assert_eq!(json["admissionDate"], "2024-10-01");
        assert_eq!(json["gender"], "F");
        assert_eq!(json["status"], "critical");
        assert_eq!(json["emergencyContact"]["relationship"], "Son");
    }

    #[test]
    fn test_labels() {
        let p = sample();
        assert_eq!(p.summary_line(), "82 yrs • F • Room 301A");
        assert_eq!(p.allergies_label(), "None recorded");
    }
}
