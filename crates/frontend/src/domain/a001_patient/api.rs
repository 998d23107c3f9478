use crate::shared::api_utils::get_json;
use contracts::domain::a001_patient::{Patient, PatientId};
use contracts::domain::a003_vital::Vital;

pub async fn fetch_patients() -> Result<Vec<Patient>, String> {
    get_json("/api/patients", "patients").await
}

/// Recorded vitals of one resident, newest first
pub async fn fetch_patient_vitals(id: &PatientId) -> Result<Vec<Vital>, String> {
    get_json(&format!("/api/vitals?patientId={}", id), "vitals").await
}
