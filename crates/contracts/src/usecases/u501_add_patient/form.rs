use serde::{Deserialize, Serialize};

use crate::shared::metadata::{FieldMetadata, FieldUiMetadata, ValidationRules};
use crate::shared::wizard::FormField;

/// Fields of the patient intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    FirstName,
    LastName,
    EmergencyName,
    EmergencyPhone,
    DoctorName,
    CaregiverName,
    Medications,
    VitalsNotes,
    AppointmentNotes,
}

const fn field(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    multiline: bool,
    validation: ValidationRules,
) -> FieldMetadata {
    FieldMetadata {
        name,
        ui: FieldUiMetadata {
            label,
            placeholder: Some(placeholder),
            multiline,
        },
        validation,
    }
}

const FIRST_NAME: FieldMetadata = field(
    "firstName",
    "First Name",
    "Jane",
    false,
    ValidationRules::required()
        .with_min_length(2)
        .with_message("First name is required"),
);
const LAST_NAME: FieldMetadata = field(
    "lastName",
    "Last Name",
    "Doe",
    false,
    ValidationRules::required()
        .with_min_length(2)
        .with_message("Last name is required"),
);
const EMERGENCY_NAME: FieldMetadata = field(
    "emergencyName",
    "Emergency Contact Name",
    "John Doe",
    false,
    ValidationRules::required()
        .with_min_length(2)
        .with_message("Emergency contact is required"),
);
const EMERGENCY_PHONE: FieldMetadata = field(
    "emergencyPhone",
    "Emergency Contact Phone",
    "+1 (555) 555-1234",
    false,
    ValidationRules::required()
        .with_min_length(5)
        .with_message("Phone is required"),
);
const DOCTOR_NAME: FieldMetadata = field(
    "doctorName",
    "Primary Doctor",
    "Dr. Smith, Geriatrics",
    false,
    ValidationRules::none(),
);
const CAREGIVER_NAME: FieldMetadata = field(
    "caregiverName",
    "Primary Caregiver",
    "Nurse Caitlyn, Night Shift",
    false,
    ValidationRules::none(),
);
const MEDICATIONS: FieldMetadata = field(
    "medications",
    "Medications",
    "List medications and dosing",
    true,
    ValidationRules::none(),
);
const VITALS_NOTES: FieldMetadata = field(
    "vitalsNotes",
    "Initial Vital Signs",
    "BP, HR, RR, SpO2, notes...",
    true,
    ValidationRules::none(),
);
const APPOINTMENT_NOTES: FieldMetadata = field(
    "appointmentNotes",
    "Appointments",
    "Schedule follow-up visits and consults...",
    true,
    ValidationRules::none(),
);

impl FormField for IntakeField {
    const ALL: &'static [Self] = &[
        IntakeField::FirstName,
        IntakeField::LastName,
        IntakeField::EmergencyName,
        IntakeField::EmergencyPhone,
        IntakeField::DoctorName,
        IntakeField::CaregiverName,
        IntakeField::Medications,
        IntakeField::VitalsNotes,
        IntakeField::AppointmentNotes,
    ];

    fn metadata(&self) -> FieldMetadata {
        match self {
            IntakeField::FirstName => FIRST_NAME,
            IntakeField::LastName => LAST_NAME,
            IntakeField::EmergencyName => EMERGENCY_NAME,
            IntakeField::EmergencyPhone => EMERGENCY_PHONE,
            IntakeField::DoctorName => DOCTOR_NAME,
            IntakeField::CaregiverName => CAREGIVER_NAME,
            IntakeField::Medications => MEDICATIONS,
            IntakeField::VitalsNotes => VITALS_NOTES,
            IntakeField::AppointmentNotes => APPOINTMENT_NOTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for f in IntakeField::ALL {
            let json = serde_json::to_string(f).unwrap();
            assert_eq!(json, format!("\"{}\"", f.name()));
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            IntakeField::from_name("emergencyPhone"),
            Some(IntakeField::EmergencyPhone)
        );
        assert_eq!(IntakeField::from_name("EmergencyPhone"), None);
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<&str> = IntakeField::ALL
            .iter()
            .filter(|f| f.metadata().validation.is_required())
            .map(|f| f.name())
            .collect();
        assert_eq!(
            required,
            vec!["firstName", "lastName", "emergencyName", "emergencyPhone"]
        );
    }

    #[test]
    fn test_single_character_name_is_rejected() {
        assert_eq!(
            IntakeField::FirstName.check("J"),
            Err("First name is required".to_string())
        );
        assert!(IntakeField::FirstName.check("Jo").is_ok());
        assert!(IntakeField::EmergencyPhone.check("5551").is_err());
        assert!(IntakeField::EmergencyPhone.check("55512").is_ok());
        assert!(IntakeField::Medications.check("").is_ok());
    }

    #[test]
    fn test_whitespace_only_required_field_is_empty() {
        assert_eq!(
            IntakeField::FirstName.check("  "),
            Err("First name is required".to_string())
        );
        assert_eq!(
            IntakeField::EmergencyPhone.check("      "),
            Err("Phone is required".to_string())
        );
        assert!(IntakeField::DoctorName.check("  ").is_ok());
    }
}
