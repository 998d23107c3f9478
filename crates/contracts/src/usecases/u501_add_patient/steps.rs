use serde::{Deserialize, Serialize};

use super::form::IntakeField;
use crate::shared::wizard::WizardStep;

/// Steps of the add-patient flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntakeStep {
    PatientInfo,
    Doctor,
    Caregiver,
    Medications,
    VitalSigns,
    Appointments,
}

impl IntakeStep {
    /// Icon name understood by the frontend `icon()` helper
    pub fn icon(&self) -> &'static str {
        match self {
            IntakeStep::PatientInfo => "user",
            IntakeStep::Doctor => "stethoscope",
            IntakeStep::Caregiver => "heart",
            IntakeStep::Medications => "pill",
            IntakeStep::VitalSigns => "activity",
            IntakeStep::Appointments => "calendar",
        }
    }
}

impl WizardStep for IntakeStep {
    type Field = IntakeField;

    const ALL: &'static [Self] = &[
        IntakeStep::PatientInfo,
        IntakeStep::Doctor,
        IntakeStep::Caregiver,
        IntakeStep::Medications,
        IntakeStep::VitalSigns,
        IntakeStep::Appointments,
    ];

    fn title(&self) -> &'static str {
        match self {
            IntakeStep::PatientInfo => "Patient Info",
            IntakeStep::Doctor => "Doctor",
            IntakeStep::Caregiver => "Caregiver",
            IntakeStep::Medications => "Medications",
            IntakeStep::VitalSigns => "Vital Signs",
            IntakeStep::Appointments => "Appointments",
        }
    }

    fn fields(&self) -> &'static [IntakeField] {
        match self {
            IntakeStep::PatientInfo => &[
                IntakeField::FirstName,
                IntakeField::LastName,
                IntakeField::EmergencyName,
                IntakeField::EmergencyPhone,
            ],
            IntakeStep::Doctor => &[IntakeField::DoctorName],
            IntakeStep::Caregiver => &[IntakeField::CaregiverName],
            IntakeStep::Medications => &[IntakeField::Medications],
            IntakeStep::VitalSigns => &[IntakeField::VitalsNotes],
            IntakeStep::Appointments => &[IntakeField::AppointmentNotes],
        }
    }
}
