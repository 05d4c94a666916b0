//! Structural validation for field specifications.

use std::collections::HashSet;

use crate::error::{SpecError, SpecResult};
use crate::fields::{DefaultValue, FieldKind, FieldSpec};

/// Maximum field name length, matching the generated accessor convention.
const MAX_NAME_LEN: usize = 30;

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validator for field specifications.
pub struct SpecValidator;

impl SpecValidator {
    /// Validate an ordered field list as a whole form.
    ///
    /// Returns the first structural error; a field list is either fully
    /// usable by the assembler or rejected.
    pub fn check_fields(fields: &[FieldSpec]) -> SpecResult<()> {
        let mut seen = HashSet::new();
        for field in fields {
            Self::check_field(field)?;
            if !seen.insert(field.name.as_str()) {
                return Err(SpecError::DuplicateName(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Validate a single field spec.
    pub fn check_field(field: &FieldSpec) -> SpecResult<()> {
        if field.name.is_empty() {
            return Err(SpecError::EmptyName);
        }

        if field.name.len() > MAX_NAME_LEN {
            return Err(SpecError::InvalidName {
                name: field.name.clone(),
                message: format!("exceeds {} characters", MAX_NAME_LEN),
            });
        }

        if !is_camel_case(&field.name) {
            return Err(SpecError::InvalidName {
                name: field.name.clone(),
                message: "must be camelCase".to_string(),
            });
        }

        match (&field.options, field.kind.requires_options()) {
            (None, true) => {
                return Err(SpecError::MissingOptions {
                    field: field.name.clone(),
                    kind: field.kind.to_string(),
                });
            }
            (Some(_), false) => {
                return Err(SpecError::UnexpectedOptions {
                    field: field.name.clone(),
                    kind: field.kind.to_string(),
                });
            }
            _ => {}
        }

        if let Some(default) = &field.default {
            if !default_matches_kind(default, field.kind) {
                return Err(SpecError::DefaultMismatch {
                    field: field.name.clone(),
                    kind: field.kind.to_string(),
                    expected: expected_shape(field.kind),
                });
            }
        }

        if let Some(pattern) = &field.validation.pattern {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(SpecError::InvalidPattern {
                    field: field.name.clone(),
                    message: e.to_string(),
                });
            }
        }

        if let (Some(min), Some(max)) = (field.validation.min, field.validation.max) {
            if min > max {
                return Err(SpecError::InvalidRange {
                    field: field.name.clone(),
                    min,
                    max,
                });
            }
        }

        Ok(())
    }

    /// Validate a field list collecting every issue, for reporting.
    pub fn validate_fields(fields: &[FieldSpec]) -> ValidationResult {
        let mut result = ValidationResult::new();
        let mut seen = HashSet::new();

        for field in fields {
            if let Err(e) = Self::check_field(field) {
                result.add_error(e.to_string());
            } else if !seen.insert(field.name.clone()) {
                result.add_error(SpecError::DuplicateName(field.name.clone()).to_string());
            }

            if field.label.is_none() && field.kind != FieldKind::Custom {
                result.add_warning(format!("Field '{}' has no label", field.name));
            }
        }

        result
    }
}

/// camelCase: lowercase start, alphanumeric throughout.
fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

fn default_matches_kind(default: &DefaultValue, kind: FieldKind) -> bool {
    match kind {
        FieldKind::Input
        | FieldKind::Textarea
        | FieldKind::Phone
        | FieldKind::Select
        | FieldKind::Radio => matches!(default, DefaultValue::Text(_)),
        FieldKind::Checkbox => matches!(default, DefaultValue::Flag(_)),
        FieldKind::Date => matches!(default, DefaultValue::Date(_)),
        FieldKind::FileUpload => matches!(default, DefaultValue::List(_)),
        // Custom fields carry caller-defined values of any shape.
        FieldKind::Custom => true,
    }
}

fn expected_shape(kind: FieldKind) -> String {
    match kind {
        FieldKind::Input
        | FieldKind::Textarea
        | FieldKind::Phone
        | FieldKind::Select
        | FieldKind::Radio => "string",
        FieldKind::Checkbox => "boolean",
        FieldKind::Date => "date",
        FieldKind::FileUpload => "list",
        FieldKind::Custom => "any",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ChoiceOptions, ValidationRule};

    #[test]
    fn test_check_valid_field() {
        let field = FieldSpec::new("email", FieldKind::Input)
            .with_validation(ValidationRule::required());
        assert!(SpecValidator::check_field(&field).is_ok());
    }

    #[test]
    fn test_reject_empty_name() {
        let field = FieldSpec::new("", FieldKind::Input);
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::EmptyName)
        ));
    }

    #[test]
    fn test_reject_non_camel_case() {
        let field = FieldSpec::new("Email_Address", FieldKind::Input);
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_reject_duplicate_names() {
        let fields = vec![
            FieldSpec::new("email", FieldKind::Input),
            FieldSpec::new("email", FieldKind::Textarea),
        ];
        assert!(matches!(
            SpecValidator::check_fields(&fields),
            Err(SpecError::DuplicateName(name)) if name == "email"
        ));
    }

    #[test]
    fn test_select_requires_options() {
        let field = FieldSpec::new("gender", FieldKind::Select);
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::MissingOptions { .. })
        ));

        let field = field.with_options(ChoiceOptions::Plain(vec![
            "male".to_string(),
            "female".to_string(),
        ]));
        assert!(SpecValidator::check_field(&field).is_ok());
    }

    #[test]
    fn test_options_rejected_elsewhere() {
        let field = FieldSpec::new("notes", FieldKind::Textarea)
            .with_options(ChoiceOptions::Plain(vec!["a".to_string()]));
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::UnexpectedOptions { .. })
        ));
    }

    #[test]
    fn test_default_shape_mismatch() {
        let field = FieldSpec::new("consent", FieldKind::Checkbox)
            .with_default(DefaultValue::Text("yes".to_string()));
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::DefaultMismatch { .. })
        ));

        let field = FieldSpec::new("consent", FieldKind::Checkbox)
            .with_default(DefaultValue::Flag(false));
        assert!(SpecValidator::check_field(&field).is_ok());
    }

    #[test]
    fn test_invalid_pattern() {
        let field = FieldSpec::new("code", FieldKind::Input)
            .with_validation(ValidationRule::required().with_pattern("([unclosed"));
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_min_max_range() {
        let field = FieldSpec::new("bio", FieldKind::Textarea)
            .with_validation(ValidationRule::optional().with_min(100).with_max(10));
        assert!(matches!(
            SpecValidator::check_field(&field),
            Err(SpecError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_validate_fields_collects_warnings() {
        let fields = vec![FieldSpec::new("email", FieldKind::Input)];
        let result = SpecValidator::validate_fields(&fields);
        assert!(result.valid);
        assert!(!result.warnings.is_empty()); // No label warning
    }
}
