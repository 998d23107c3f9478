use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_patient::{Patient, PatientId};
use crate::domain::a002_appointment::Appointment;
use crate::domain::a003_vital::{self, Vital};
use crate::enums::PatientStatus;

/// Readings counted by the "Monitoring" card
pub const MONITORING_WINDOW: usize = 3;
/// Rows of the "Upcoming appointments" panel
pub const UPCOMING_LIMIT: usize = 4;

/// Headline numbers of the dashboard screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareOverview {
    /// Day the counts are computed for
    pub reference_date: NaiveDate,
    pub total_patients: usize,
    pub critical_patients: usize,
    pub today_appointments: usize,
    pub monitoring: usize,
    /// Critical and observation residents, in roster order
    pub watch_list: Vec<WatchEntry>,
    /// First scheduled appointments in list order, whatever their date
    pub upcoming: Vec<Appointment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEntry {
    pub patient_id: PatientId,
    pub name: String,
    pub initials: String,
    pub room_number: String,
    pub primary_diagnosis: String,
    pub status: PatientStatus,
}

impl CareOverview {
    pub fn compute(
        patients: &[Patient],
        appointments: &[Appointment],
        vitals: &[Vital],
        today: NaiveDate,
    ) -> Self {
        let critical_patients = patients
            .iter()
            .filter(|p| p.status == PatientStatus::Critical)
            .count();

        let today_appointments = appointments.iter().filter(|a| a.date == today).count();

        let watch_list = patients
            .iter()
            .filter(|p| p.status.needs_attention())
            .map(|p| WatchEntry {
                patient_id: p.id.clone(),
                name: p.name.clone(),
                initials: p.initials(),
                room_number: p.room_number.clone(),
                primary_diagnosis: p.primary_diagnosis.clone(),
                status: p.status,
            })
            .collect();

        let upcoming = appointments
            .iter()
            .filter(|a| a.is_scheduled())
            .take(UPCOMING_LIMIT)
            .cloned()
            .collect();

        Self {
            reference_date: today,
            total_patients: patients.len(),
            critical_patients,
            today_appointments,
            monitoring: a003_vital::latest(vitals, MONITORING_WINDOW).len(),
            watch_list,
            upcoming,
        }
    }
}
