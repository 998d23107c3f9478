use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_patient::PatientId;
use crate::enums::{AppointmentStatus, AppointmentType};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub String);

/// Scheduled visit of a provider with a resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    /// Denormalized for list rendering
    pub patient_name: String,
    pub provider: String,
    pub date: NaiveDate,
    /// Local wall-clock time, "HH:MM"
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_scheduled(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }
}

/// Appointments falling on `date`, ordered by time of day
pub fn appointments_on(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    let mut out: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date == date)
        .cloned()
        .collect();
    out.sort_by(|a, b| a.time.cmp(&b.time));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(id: &str, date: NaiveDate, time: &str) -> Appointment {
        Appointment {
            id: AppointmentId(id.into()),
            patient_id: PatientId::new("p1"),
            patient_name: "Eleanor Rigby".into(),
            provider: "NP Carter".into(),
            date,
            time: time.into(),
            appointment_type: AppointmentType::FollowUp,
            status: AppointmentStatus::Scheduled,
        }
    }

    #[test]
    fn test_appointments_on_filters_and_sorts() {
        let d14 = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let d15 = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        let all = vec![
            appt("a1", d14, "13:00"),
            appt("a2", d15, "08:00"),
            appt("a3", d14, "09:00"),
        ];

        let day: Vec<String> = appointments_on(&all, d14).into_iter().map(|a| a.id.0).collect();
        assert_eq!(day, vec!["a3", "a1"]);
        assert!(appointments_on(&all, NaiveDate::from_ymd_opt(2024, 11, 16).unwrap()).is_empty());
    }

    #[test]
    fn test_type_field_name() {
        let d = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let json = serde_json::to_value(appt("a1", d, "09:00")).unwrap();
        assert_eq!(json["type"], "Follow-up");
        assert_eq!(json["patientId"], "p1");
        assert_eq!(json["date"], "2024-11-14");
    }
}
