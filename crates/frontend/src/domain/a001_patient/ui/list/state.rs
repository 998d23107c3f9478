use contracts::domain::a001_patient::{Patient, PatientFilter, PatientId};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct PatientListState {
    pub patients: Vec<Patient>,
    pub filter: PatientFilter,
    /// Resident shown in the details panel
    pub selected: Option<PatientId>,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl PatientListState {
    /// Patients passing the current filter, in server order
    pub fn visible(&self) -> Vec<Patient> {
        self.filter
            .apply(&self.patients)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn selected_patient(&self) -> Option<Patient> {
        let id = self.selected.as_ref()?;
        self.patients.iter().find(|p| &p.id == id).cloned()
    }

    /// Store a fresh load, keeping the selection when it still exists
    pub fn set_loaded(&mut self, patients: Vec<Patient>) {
        let keep = self
            .selected
            .as_ref()
            .is_some_and(|id| patients.iter().any(|p| &p.id == id));
        if !keep {
            self.selected = patients.first().map(|p| p.id.clone());
        }
        self.patients = patients;
        self.is_loaded = true;
        self.error = None;
    }
}

// Created per page mount so the state is dropped with the screen
pub fn create_state() -> RwSignal<PatientListState> {
    RwSignal::new(PatientListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_patient::{EmergencyContact, Gender, StatusFilter};
    use contracts::enums::PatientStatus;

    fn patient(id: &str, name: &str, status: PatientStatus) -> Patient {
        Patient {
            id: PatientId::new(id),
            name: name.into(),
            age: 80,
            gender: Gender::Female,
            room_number: "101".into(),
            primary_diagnosis: "Hypertension".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status,
            allergies: vec![],
            emergency_contact: EmergencyContact {
                name: "Kin".into(),
                relationship: "Son".into(),
                phone: "555".into(),
            },
        }
    }

    #[test]
    fn test_first_patient_selected_on_load() {
        let mut state = PatientListState::default();
        state.set_loaded(vec![
            patient("p1", "Eleanor Rigby", PatientStatus::Critical),
            patient("p2", "Arthur Dent", PatientStatus::Stable),
        ]);
        assert!(state.is_loaded);
        assert_eq!(state.selected, Some(PatientId::new("p1")));

        state.selected = Some(PatientId::new("p2"));
        state.set_loaded(vec![patient("p2", "Arthur Dent", PatientStatus::Stable)]);
        assert_eq!(state.selected_patient().map(|p| p.name), Some("Arthur Dent".to_string()));
    }

    #[test]
    fn test_visible_follows_filter() {
        let mut state = PatientListState::default();
        state.set_loaded(vec![
            patient("p1", "Eleanor Rigby", PatientStatus::Critical),
            patient("p2", "Arthur Dent", PatientStatus::Stable),
        ]);
        state.filter.status = StatusFilter::All.toggled();
        let names: Vec<String> = state.visible().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Eleanor Rigby"]);
    }
}
