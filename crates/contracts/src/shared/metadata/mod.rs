//! Field metadata for declarative forms
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::{FieldMetadata, FieldUiMetadata, ValidationRules};
//!
//! const PHONE: FieldMetadata = FieldMetadata {
//!     name: "phone",
//!     ui: FieldUiMetadata { label: "Phone", placeholder: None, multiline: false },
//!     validation: ValidationRules::required().with_min_length(5),
//! };
//! assert!(PHONE.validation.validate_string("555", PHONE.ui.label).is_err());
//! ```

mod types;
mod validation;

pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
