//! Validation rules for form fields

/// Validation rules for a single field.
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Replaces the generated message for every failure of this field.
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.custom_error = Some(message);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters, not bytes. A required value made
    /// only of whitespace counts as empty.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let fail = |generated: String| -> Result<(), String> {
            Err(self.custom_error.map(str::to_string).unwrap_or(generated))
        };

        if self.required && value.trim().is_empty() {
            return fail(format!("{} is required", field_label));
        }

        let len = value.chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return fail(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return fail(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        Ok(())
    }
}
