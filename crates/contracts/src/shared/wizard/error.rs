use std::fmt;
use thiserror::Error;

/// Terminal state a finished wizard ended in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Completed,
    Cancelled,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Completed => write!(f, "completed"),
            Terminal::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One failed field rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field
    pub field: &'static str,
    pub message: String,
}

/// Result of the validation gate: at most one message per field, in field
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for a field by its wire name
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    /// Field names in declaration order
    pub fn fields(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.field).collect()
    }

    pub(crate) fn push(&mut self, field: &'static str, message: String) {
        self.entries.push(FieldError { field, message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Errors returned by wizard transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The validation gate refused the advance. State is unchanged.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A transition was requested after the flow ended.
    #[error("wizard is already {0}")]
    Finished(Terminal),

    /// A field name that the form does not declare.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}
