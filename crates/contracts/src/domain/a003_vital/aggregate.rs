use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_patient::PatientId;
use crate::enums::PatientStatus;

/// One recorded vital-sign check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vital {
    pub patient_id: PatientId,
    pub timestamp: DateTime<Utc>,
    pub status: PatientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Point of the facility-wide weekly trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSnapshot {
    pub timestamp_label: String,
    pub heart_rate: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub spo2: u32,
}

impl VitalSnapshot {
    /// "124/78"
    pub fn blood_pressure(&self) -> String {
        format!("{}/{}", self.systolic, self.diastolic)
    }
}

/// The `count` most recent readings, newest first
pub fn latest(vitals: &[Vital], count: usize) -> Vec<Vital> {
    let mut sorted = vitals.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(count);
    sorted
}

/// Most recent reading of one resident
pub fn latest_for<'a>(vitals: &'a [Vital], patient_id: &PatientId) -> Option<&'a Vital> {
    vitals
        .iter()
        .filter(|v| &v.patient_id == patient_id)
        .max_by_key(|v| v.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn vital(patient: &str, hour: u32, status: PatientStatus) -> Vital {
        Vital {
            patient_id: PatientId::new(patient),
            timestamp: Utc.with_ymd_and_hms(2024, 11, 14, hour, 0, 0).unwrap(),
            status,
            notes: None,
        }
    }

    #[test]
    fn test_latest_newest_first() {
        let all = vec![
            vital("p1", 8, PatientStatus::Critical),
            vital("p2", 7, PatientStatus::Stable),
            vital("p3", 9, PatientStatus::Observation),
        ];
        let ids: Vec<String> = latest(&all, 2).into_iter().map(|v| v.patient_id.0).collect();
        assert_eq!(ids, vec!["p3", "p1"]);
        assert_eq!(latest(&all, 10).len(), 3);
    }

    #[test]
    fn test_latest_for_patient() {
        let all = vec![
            vital("p1", 6, PatientStatus::Stable),
            vital("p1", 8, PatientStatus::Critical),
        ];
        let v = latest_for(&all, &PatientId::new("p1")).unwrap();
        assert_eq!(v.status, PatientStatus::Critical);
        assert!(latest_for(&all, &PatientId::new("p9")).is_none());
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let v: Vital = serde_json::from_str(
            r#"{"patientId":"p1","timestamp":"2024-11-14T08:30:00Z","status":"critical"}"#,
        )
        .unwrap();
        assert_eq!(v.notes, None);
        assert_eq!(v.timestamp, Utc.with_ymd_and_hms(2024, 11, 14, 8, 30, 0).unwrap());
    }
}
