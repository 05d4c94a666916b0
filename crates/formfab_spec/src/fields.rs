//! Data models for form field specifications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The closed set of form field kinds the generator understands.
///
/// Each kind maps to one control in the generated markup and one
/// validation-schema shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Input,
    Textarea,
    Phone,
    Checkbox,
    Date,
    Select,
    Radio,
    FileUpload,
    Custom,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Input => "input",
            FieldKind::Textarea => "textarea",
            FieldKind::Phone => "phone",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Date => "date",
            FieldKind::Select => "select",
            FieldKind::Radio => "radio",
            FieldKind::FileUpload => "file-upload",
            FieldKind::Custom => "custom",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "input" => Some(FieldKind::Input),
            "textarea" => Some(FieldKind::Textarea),
            "phone" => Some(FieldKind::Phone),
            "checkbox" => Some(FieldKind::Checkbox),
            "date" => Some(FieldKind::Date),
            "select" => Some(FieldKind::Select),
            "radio" => Some(FieldKind::Radio),
            "file-upload" => Some(FieldKind::FileUpload),
            "custom" => Some(FieldKind::Custom),
            _ => None,
        }
    }

    /// Whether this kind requires an options list.
    pub fn requires_options(&self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Radio)
    }

    pub fn all() -> Vec<Self> {
        vec![
            FieldKind::Input,
            FieldKind::Textarea,
            FieldKind::Phone,
            FieldKind::Checkbox,
            FieldKind::Date,
            FieldKind::Select,
            FieldKind::Radio,
            FieldKind::FileUpload,
            FieldKind::Custom,
        ]
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation rule attached to one field.
///
/// The value-type constraint itself comes from the field kind; this
/// carries the per-field refinements on top of it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationRule {
    /// Whether the field must be filled in before submit.
    #[serde(default)]
    pub required: bool,
    /// Minimum length (strings) or count (lists).
    #[serde(default)]
    pub min: Option<u32>,
    /// Maximum length (strings) or count (lists).
    #[serde(default)]
    pub max: Option<u32>,
    /// Regex the value must match.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl ValidationRule {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// A default value, shaped by the owning field's kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Checkbox state.
    Flag(bool),
    /// Calendar date for date fields.
    Date(NaiveDate),
    /// String-valued kinds (input, textarea, phone, select, radio).
    Text(String),
    /// String or file lists (file-upload).
    List(Vec<String>),
}

impl DefaultValue {
    /// Human-readable shape name, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            DefaultValue::Text(_) => "string",
            DefaultValue::Flag(_) => "boolean",
            DefaultValue::List(_) => "list",
            DefaultValue::Date(_) => "date",
        }
    }
}

/// One selectable choice with a label and an optional image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceItem {
    pub label: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Options for select and radio fields.
///
/// The two representations render through different paths and are never
/// mixed within a single field; the untagged serde form rejects a mixed
/// list at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChoiceOptions {
    /// Bare choice strings.
    Plain(Vec<String>),
    /// Labeled, optionally-imaged entries.
    Items(Vec<ChoiceItem>),
}

impl ChoiceOptions {
    pub fn len(&self) -> usize {
        match self {
            ChoiceOptions::Plain(v) => v.len(),
            ChoiceOptions::Items(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Specification of one form field to generate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Unique identifier within a form; camelCase, max 30 characters.
    /// Used as the object key and accessor token in generated code.
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub validation: ValidationRule,
    #[serde(default)]
    pub default: Option<DefaultValue>,
    /// Required when kind is select or radio, absent otherwise.
    #[serde(default)]
    pub options: Option<ChoiceOptions>,
}

impl FieldSpec {
    /// Create a minimal field spec with the given name and kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            label: None,
            description: None,
            placeholder: None,
            validation: ValidationRule::default(),
            default: None,
            options: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_validation(mut self, validation: ValidationRule) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_options(mut self, options: ChoiceOptions) -> Self {
        self.options = Some(options);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_round_trip() {
        for kind in FieldKind::all() {
            assert_eq!(FieldKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::from_str("slider"), None);
    }

    #[test]
    fn test_field_spec_builder() {
        let field = FieldSpec::new("email", FieldKind::Input)
            .with_label("Email Address")
            .with_placeholder("ex: johndoe@youremail.com")
            .with_validation(ValidationRule::required().with_max(120));

        assert_eq!(field.name, "email");
        assert!(field.validation.required);
        assert_eq!(field.validation.max, Some(120));
    }

    #[test]
    fn test_options_deserialization() {
        let plain: ChoiceOptions = serde_yaml::from_str("[male, female, other]").unwrap();
        assert!(matches!(plain, ChoiceOptions::Plain(ref v) if v.len() == 3));

        let items: ChoiceOptions =
            serde_yaml::from_str("[{label: UK, image: /flags/uk.svg}, {label: US}]").unwrap();
        assert!(matches!(items, ChoiceOptions::Items(ref v) if v.len() == 2));
    }

    #[test]
    fn test_default_value_shapes() {
        let spec: FieldSpec = serde_yaml::from_str(
            r#"
name: consent
kind: checkbox
default: true
"#,
        )
        .unwrap();
        assert_eq!(spec.default, Some(DefaultValue::Flag(true)));

        let spec: FieldSpec = serde_yaml::from_str(
            r#"
name: birthDate
kind: date
default: 1990-04-12
"#,
        )
        .unwrap();
        assert!(matches!(spec.default, Some(DefaultValue::Date(_))));
    }
}
