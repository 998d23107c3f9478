//! u501: add a new patient through a six-step intake wizard.
//!
//! The flow is purely client side. Values are collected and discarded when
//! the wizard completes or is cancelled.

pub mod form;
pub mod steps;

pub use form::IntakeField;
pub use steps::IntakeStep;

use crate::shared::wizard::WizardController;

/// Controller for one run of the intake flow
pub type AddPatientWizard = WizardController<IntakeStep>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{Terminal, WizardError, WizardStatus, WizardStep};

    fn fill_required(w: &mut AddPatientWizard) {
        w.edit(IntakeField::FirstName, "Jane").unwrap();
        w.edit(IntakeField::LastName, "Doe").unwrap();
        w.edit(IntakeField::EmergencyName, "John Doe").unwrap();
        w.edit(IntakeField::EmergencyPhone, "+1 (555) 555-1234").unwrap();
    }

    #[test]
    fn test_without_validation_n_advances_complete() {
        let mut w = AddPatientWizard::new(false);
        let n = w.step_count();
        assert_eq!(n, 6);
        for _ in 0..n - 1 {
            assert!(matches!(w.next(), Ok(WizardStatus::Step(_))));
        }
        assert_eq!(w.next(), Ok(WizardStatus::Completed));
    }

    #[test]
    fn test_empty_required_fields_block_first_step() {
        let mut w = AddPatientWizard::new(true);
        let errors = match w.next() {
            Err(WizardError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {:?}", other),
        };
        assert_eq!(w.status(), WizardStatus::Step(IntakeStep::PatientInfo));
        assert_eq!(
            errors.fields(),
            vec!["firstName", "lastName", "emergencyName", "emergencyPhone"]
        );
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("emergencyPhone"), Some("Phone is required"));
    }

    #[test]
    fn test_filled_form_walks_to_completion() {
        let mut w = AddPatientWizard::new(true);
        fill_required(&mut w);
        for expected in 2..=6 {
            let status = w.next().unwrap();
            assert_eq!(status.step().map(|s| s.number()), Some(expected));
        }
        assert_eq!(w.current_step(), Some(IntakeStep::Appointments));
        assert_eq!(w.next(), Ok(WizardStatus::Completed));
    }

    #[test]
    fn test_back_preserves_values() {
        let mut w = AddPatientWizard::new(true);
        fill_required(&mut w);
        w.next().unwrap();
        w.edit(IntakeField::DoctorName, "Dr. Smith").unwrap();
        w.next().unwrap();

        assert_eq!(w.back(), Ok(WizardStatus::Step(IntakeStep::Doctor)));
        assert_eq!(w.back(), Ok(WizardStatus::Step(IntakeStep::PatientInfo)));
        assert_eq!(w.value(IntakeField::FirstName), "Jane");
        assert_eq!(w.value(IntakeField::DoctorName), "Dr. Smith");

        assert_eq!(w.back(), Ok(WizardStatus::Cancelled));
    }

    #[test]
    fn test_whole_form_gate_on_later_steps() {
        let mut w = AddPatientWizard::new(false);
        w.next().unwrap();
        w.next().unwrap();
        w.set_validation_enabled(true);

        // Step 3 has no required fields, but step 1 is still empty
        let err = w.next().unwrap_err();
        assert!(matches!(err, WizardError::Validation(ref e) if e.len() == 4));
        assert_eq!(w.current_step(), Some(IntakeStep::Caregiver));
    }

    #[test]
    fn test_terminal_states_reject_transitions() {
        let mut w = AddPatientWizard::new(true);
        w.cancel().unwrap();
        let misuse = WizardError::Finished(Terminal::Cancelled);
        assert_eq!(w.edit(IntakeField::LastName, "x"), Err(misuse.clone()));
        assert_eq!(w.next(), Err(misuse.clone()));
        assert_eq!(w.back(), Err(misuse));
        assert_eq!(w.value(IntakeField::LastName), "");
    }
}
