use crate::layout::global_context::AppGlobalContext;
use contracts::shared::wizard::{WizardError, WizardStatus};
use contracts::usecases::u501_add_patient::{AddPatientWizard, IntakeField, IntakeStep};
use leptos::prelude::*;

/// Reactive wrapper around one run of the intake wizard
#[derive(Clone, Copy)]
pub struct AddPatientViewModel {
    pub wizard: RwSignal<AddPatientWizard>,
    ctx: AppGlobalContext,
}

impl AddPatientViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        let enabled = ctx.validation_enabled.get_untracked();
        log::info!("add patient: started (validation {})", enabled);
        Self {
            wizard: RwSignal::new(AddPatientWizard::new(enabled)),
            ctx,
        }
    }

    /// Follow the header switch for the lifetime of the modal
    pub fn bind_validation_toggle(&self) {
        let vm = *self;
        Effect::new(move |_| {
            let enabled = vm.ctx.validation_enabled.get();
            vm.wizard.update(|w| w.set_validation_enabled(enabled));
        });
    }

    pub fn value(&self, field: IntakeField) -> Signal<String> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.value(field).to_string()))
    }

    pub fn error(&self, field: IntakeField) -> Signal<Option<String>> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.with(|w| w.error_for(field).map(str::to_string)))
    }

    pub fn error_count(&self) -> usize {
        self.wizard.with(|w| w.errors().len())
    }

    pub fn edit(&self, field: IntakeField, value: String) {
        if let Some(Err(e)) = self.wizard.try_update(|w| w.edit(field, value)) {
            log::warn!("add patient: edit {:?} rejected: {}", field, e);
        }
    }

    pub fn next(&self) {
        match self.wizard.try_update(|w| w.next()) {
            Some(Ok(status)) => self.after_transition(status),
            Some(Err(WizardError::Validation(errors))) => {
                log::debug!("add patient: {}", errors);
            }
            Some(Err(e)) => log::warn!("add patient: next rejected: {}", e),
            None => {}
        }
    }

    pub fn back(&self) {
        match self.wizard.try_update(|w| w.back()) {
            Some(Ok(status)) => self.after_transition(status),
            Some(Err(e)) => log::warn!("add patient: back rejected: {}", e),
            None => {}
        }
    }

    pub fn cancel(&self) {
        match self.wizard.try_update(|w| w.cancel()) {
            Some(Ok(status)) => self.after_transition(status),
            Some(Err(e)) => log::warn!("add patient: cancel rejected: {}", e),
            None => {}
        }
    }

    fn after_transition(&self, status: WizardStatus<IntakeStep>) {
        match status {
            WizardStatus::Step(step) => log::debug!("add patient: step {:?}", step),
            WizardStatus::Completed => {
                let notice = self.wizard.with_untracked(completion_notice);
                log::info!("add patient: {}", notice);
                self.ctx.close_add_patient(Some(notice));
            }
            WizardStatus::Cancelled => {
                log::info!("add patient: cancelled");
                self.ctx.close_add_patient(None);
            }
        }
    }
}

fn completion_notice(wizard: &AddPatientWizard) -> String {
    format!(
        "Patient intake for {} {} completed",
        wizard.value(IntakeField::FirstName).trim(),
        wizard.value(IntakeField::LastName).trim()
    )
}
