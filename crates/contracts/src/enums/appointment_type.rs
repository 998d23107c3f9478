use serde::{Deserialize, Serialize};

/// Kind of visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    Telehealth,
    #[serde(rename = "Follow-up")]
    FollowUp,
    #[serde(rename = "Initial Consult")]
    InitialConsult,
}

impl AppointmentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentType::Telehealth => "Telehealth",
            AppointmentType::FollowUp => "Follow-up",
            AppointmentType::InitialConsult => "Initial Consult",
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AppointmentType::Telehealth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_display_names() {
        for t in [
            AppointmentType::Telehealth,
            AppointmentType::FollowUp,
            AppointmentType::InitialConsult,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.display_name()));
        }
    }
}
