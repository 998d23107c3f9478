use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

use contracts::domain::a001_patient::Patient;
use contracts::domain::a002_appointment::Appointment;
use contracts::domain::a003_vital::{Vital, VitalSnapshot};
use contracts::domain::a004_doctor::Doctor;

/// Read-only collections served by the API
#[derive(Debug)]
pub struct SeedData {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub vitals: Vec<Vital>,
    pub vital_trend: Vec<VitalSnapshot>,
    pub doctors: Vec<Doctor>,
}

static SEED: OnceCell<SeedData> = OnceCell::new();

const PATIENTS_JSON: &str = include_str!("seed/patients.json");
const APPOINTMENTS_JSON: &str = include_str!("seed/appointments.json");
const VITALS_JSON: &str = include_str!("seed/vitals.json");
const VITAL_TREND_JSON: &str = include_str!("seed/vital_trend.json");
const DOCTORS_JSON: &str = include_str!("seed/doctors.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> anyhow::Result<Vec<T>> {
    serde_json::from_str(json).with_context(|| format!("invalid seed file {}.json", name))
}

fn load() -> anyhow::Result<SeedData> {
    Ok(SeedData {
        patients: parse("patients", PATIENTS_JSON)?,
        appointments: parse("appointments", APPOINTMENTS_JSON)?,
        vitals: parse("vitals", VITALS_JSON)?,
        vital_trend: parse("vital_trend", VITAL_TREND_JSON)?,
        doctors: parse("doctors", DOCTORS_JSON)?,
    })
}

/// Parse the embedded collections. Safe to call more than once.
pub fn initialize() -> anyhow::Result<()> {
    let seed = SEED.get_or_try_init(load)?;
    tracing::info!(
        "Seed data ready: {} patients, {} appointments, {} vitals, {} doctors",
        seed.patients.len(),
        seed.appointments.len(),
        seed.vitals.len(),
        seed.doctors.len()
    );
    Ok(())
}

pub fn get() -> anyhow::Result<&'static SeedData> {
    SEED.get()
        .ok_or_else(|| anyhow::anyhow!("Seed data is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        initialize().unwrap();
        let seed = get().unwrap();
        assert_eq!(seed.patients.len(), 3);
        assert_eq!(seed.appointments.len(), 3);
        assert_eq!(seed.vitals.len(), 3);
        assert_eq!(seed.vital_trend.len(), 7);
        assert_eq!(seed.doctors.len(), 4);
    }
}
