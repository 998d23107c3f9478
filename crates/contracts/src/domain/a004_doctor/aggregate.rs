use serde::{Deserialize, Serialize};

/// Member of the care team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Size of the caseload
    pub patients: u32,
    pub on_call: bool,
}

impl Doctor {
    pub fn on_call_label(&self) -> &'static str {
        if self.on_call {
            "On call"
        } else {
            "Off duty"
        }
    }
}
