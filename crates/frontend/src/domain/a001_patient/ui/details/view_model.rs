use crate::domain::a001_patient::api;
use contracts::domain::a001_patient::PatientId;
use contracts::domain::a003_vital::{latest_for, Vital};
use leptos::prelude::*;

/// Latest vital reading of the selected resident
#[derive(Clone, Copy)]
pub struct PatientDetailsViewModel {
    pub latest_vital: RwSignal<Option<Vital>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PatientDetailsViewModel {
    pub fn new() -> Self {
        Self {
            latest_vital: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load_vitals(&self, id: PatientId) {
        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_patient_vitals(&id).await {
                Ok(vitals) => vm.latest_vital.set(latest_for(&vitals, &id).cloned()),
                Err(e) => {
                    log::warn!("vitals for {}: {}", id, e);
                    vm.latest_vital.set(None);
                    vm.error.set(Some(e));
                }
            }
            vm.loading.set(false);
        });
    }
}

impl Default for PatientDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
