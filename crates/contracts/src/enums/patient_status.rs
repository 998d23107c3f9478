use serde::{Deserialize, Serialize};

/// Clinical status of a resident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Stable,
    Critical,
    Observation,
}

impl PatientStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "stable",
            PatientStatus::Critical => "critical",
            PatientStatus::Observation => "observation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Critical => "Critical",
            PatientStatus::Observation => "Observation",
        }
    }

    pub fn all() -> Vec<PatientStatus> {
        vec![
            PatientStatus::Stable,
            PatientStatus::Critical,
            PatientStatus::Observation,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "stable" => Some(PatientStatus::Stable),
            "critical" => Some(PatientStatus::Critical),
            "observation" => Some(PatientStatus::Observation),
            _ => None,
        }
    }

    /// Needs staff attention on the dashboard watch list
    pub fn needs_attention(&self) -> bool {
        !matches!(self, PatientStatus::Stable)
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde() {
        for s in PatientStatus::all() {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.code()));
            assert_eq!(PatientStatus::from_code(s.code()), Some(s));
        }
    }
}
