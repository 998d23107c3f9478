use serde::{Deserialize, Serialize};

/// Lifecycle of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    InProgress,
    Cancelled,
}

impl AppointmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::InProgress => "In progress",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<AppointmentStatus> {
        vec![
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::InProgress,
            AppointmentStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "completed" => Some(AppointmentStatus::Completed),
            "in-progress" => Some(AppointmentStatus::InProgress),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_is_kebab_case() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        for s in AppointmentStatus::all() {
            assert_eq!(AppointmentStatus::from_code(s.code()), Some(s));
        }
    }
}
