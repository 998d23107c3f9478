//! Static field metadata used by form schemas
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Wire name, also the key of validation messages
    pub name: &'static str,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// Render as a textarea instead of a single-line input
    pub multiline: bool,
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self {
            label: "",
            placeholder: None,
            multiline: false,
        }
    }
}
