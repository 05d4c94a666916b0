//! # formfab_spec
//!
//! Field specification model for the formfab generator.
//!
//! A form is described as an ordered list of [`FieldSpec`] values: named,
//! typed fields with validation rules, optional defaults, and display
//! metadata. Specs are pure data; the only behavior here is structural
//! validation.
//!
//! ## Example
//!
//! ```rust
//! use formfab_spec::{FieldKind, FieldSpec, SpecValidator, ValidationRule};
//!
//! let fields = vec![
//!     FieldSpec::new("email", FieldKind::Input)
//!         .with_label("Email Address")
//!         .with_validation(ValidationRule::required()),
//!     FieldSpec::new("consent", FieldKind::Checkbox)
//!         .with_label("I agree to the terms"),
//! ];
//!
//! SpecValidator::check_fields(&fields).unwrap();
//! ```

pub mod error;
pub mod fields;
pub mod validator;

pub use error::{SpecError, SpecResult};
pub use fields::{ChoiceItem, ChoiceOptions, DefaultValue, FieldKind, FieldSpec, ValidationRule};
pub use validator::{SpecValidator, ValidationResult};
