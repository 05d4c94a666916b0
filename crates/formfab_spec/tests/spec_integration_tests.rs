//! Integration tests for field specification parsing and validation.

use formfab_spec::{
    ChoiceOptions, DefaultValue, FieldKind, FieldSpec, SpecError, SpecValidator,
};

#[test]
fn test_parse_full_form_from_yaml() {
    let yaml = r#"
- name: fullName
  kind: input
  label: Full Name
  placeholder: "ex: Adam"
  validation:
    required: true
    max: 60
- name: phone
  kind: phone
  label: Phone Number
  placeholder: "(555) 123-4567"
- name: birthDate
  kind: date
  label: Date of Birth
  default: 1990-04-12
- name: gender
  kind: radio
  label: Gender
  options: [male, female, other]
- name: idType
  kind: select
  label: Identification Type
  options:
    - label: Passport
      image: /icons/passport.svg
    - label: Driving License
- name: avatar
  kind: file-upload
  label: Profile Picture
  validation:
    max: 1
- name: consent
  kind: checkbox
  label: I consent to treatment
  default: false
  validation:
    required: true
"#;

    let fields: Vec<FieldSpec> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(fields.len(), 7);
    assert!(SpecValidator::check_fields(&fields).is_ok());

    assert_eq!(fields[0].kind, FieldKind::Input);
    assert_eq!(fields[0].validation.max, Some(60));
    assert!(matches!(fields[2].default, Some(DefaultValue::Date(_))));
    assert!(matches!(
        fields[3].options,
        Some(ChoiceOptions::Plain(ref v)) if v.len() == 3
    ));
    assert!(matches!(
        fields[4].options,
        Some(ChoiceOptions::Items(ref v)) if v.len() == 2 && v[0].image.is_some()
    ));
    assert_eq!(fields[6].default, Some(DefaultValue::Flag(false)));
}

#[test]
fn test_unknown_kind_fails_at_parse() {
    let yaml = "name: rating\nkind: slider\n";
    let parsed: Result<FieldSpec, _> = serde_yaml::from_str(yaml);
    assert!(parsed.is_err());
}

#[test]
fn test_mixed_option_representations_rejected() {
    // A list mixing bare strings and labeled items fits neither
    // representation and must not parse.
    let yaml = r#"
name: country
kind: select
options:
  - uk
  - label: US
    image: /flags/us.svg
"#;
    let parsed: Result<FieldSpec, _> = serde_yaml::from_str(yaml);
    assert!(parsed.is_err());
}

#[test]
fn test_duplicate_names_across_form() {
    let yaml = r#"
- name: email
  kind: input
- name: notes
  kind: textarea
- name: email
  kind: input
"#;
    let fields: Vec<FieldSpec> = serde_yaml::from_str(yaml).unwrap();
    assert!(matches!(
        SpecValidator::check_fields(&fields),
        Err(SpecError::DuplicateName(name)) if name == "email"
    ));
}

#[test]
fn test_validate_fields_reports_all_issues() {
    let fields = vec![
        FieldSpec::new("email", FieldKind::Input), // no label: warning
        FieldSpec::new("BadName", FieldKind::Input),
        FieldSpec::new("gender", FieldKind::Select),
    ];

    let result = SpecValidator::validate_fields(&fields);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.warnings.len(), 3); // none of the three has a label
}

#[test]
fn test_default_round_trips_through_json() {
    let field = FieldSpec::new("tags", FieldKind::FileUpload)
        .with_default(DefaultValue::List(vec!["a.png".to_string()]));

    let json = serde_json::to_string(&field).unwrap();
    let back: FieldSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back.default, field.default);
}
