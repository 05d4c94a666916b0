//! Field-kind registry: per-kind control fragments, import symbols, and
//! schema-fragment builders.
//!
//! The registry is a closed mapping populated at startup. A lookup miss is
//! reported as a data error by the assembler, never a panic, so malformed
//! input specifications surface as `InvalidField` instead of crashing.

use std::collections::HashMap;

use formfab_spec::{ChoiceItem, ChoiceOptions, FieldKind, FieldSpec, ValidationRule};

/// One symbol the generated file must import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportSymbol {
    pub name: &'static str,
    pub source: &'static str,
}

impl ImportSymbol {
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Form scaffold symbols every generated unit needs, regardless of kinds.
pub const FORM_SCAFFOLD_IMPORTS: &[ImportSymbol] = &[
    ImportSymbol::new("Form", "@/components/ui/form"),
    ImportSymbol::new("FormControl", "@/components/ui/form"),
    ImportSymbol::new("FormDescription", "@/components/ui/form"),
    ImportSymbol::new("FormField", "@/components/ui/form"),
    ImportSymbol::new("FormItem", "@/components/ui/form"),
    ImportSymbol::new("FormLabel", "@/components/ui/form"),
    ImportSymbol::new("FormMessage", "@/components/ui/form"),
];

const INPUT_IMPORTS: &[ImportSymbol] = &[ImportSymbol::new("Input", "@/components/ui/input")];

const TEXTAREA_IMPORTS: &[ImportSymbol] =
    &[ImportSymbol::new("Textarea", "@/components/ui/textarea")];

const PHONE_IMPORTS: &[ImportSymbol] =
    &[ImportSymbol::new("PhoneInput", "react-phone-number-input")];

const CHECKBOX_IMPORTS: &[ImportSymbol] = &[
    ImportSymbol::new("Checkbox", "@/components/ui/checkbox"),
    ImportSymbol::new("Label", "@/components/ui/label"),
];

const DATE_IMPORTS: &[ImportSymbol] = &[ImportSymbol::new("DatePicker", "react-datepicker")];

const SELECT_IMPORTS: &[ImportSymbol] = &[
    ImportSymbol::new("Select", "@/components/ui/select"),
    ImportSymbol::new("SelectContent", "@/components/ui/select"),
    ImportSymbol::new("SelectItem", "@/components/ui/select"),
    ImportSymbol::new("SelectTrigger", "@/components/ui/select"),
    ImportSymbol::new("SelectValue", "@/components/ui/select"),
    ImportSymbol::new("Image", "next/image"),
];

const RADIO_IMPORTS: &[ImportSymbol] = &[
    ImportSymbol::new("RadioGroup", "@/components/ui/radio-group"),
    ImportSymbol::new("RadioGroupItem", "@/components/ui/radio-group"),
    ImportSymbol::new("Label", "@/components/ui/label"),
    ImportSymbol::new("Image", "next/image"),
];

const FILE_UPLOAD_IMPORTS: &[ImportSymbol] =
    &[ImportSymbol::new("FileUploader", "@/components/FileUploader")];

const CUSTOM_IMPORTS: &[ImportSymbol] = &[];

/// Registry entry associating a kind with its rendering fragment, import
/// symbols, and schema-fragment builder.
#[derive(Clone)]
pub struct FieldKindDescriptor {
    pub kind: FieldKind,
    pub imports: &'static [ImportSymbol],
    pub control: fn(&FieldSpec) -> String,
    pub schema: fn(&ValidationRule) -> String,
}

impl std::fmt::Debug for FieldKindDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldKindDescriptor")
            .field("kind", &self.kind)
            .field("imports", &self.imports)
            .finish()
    }
}

/// Static, closed mapping from field kind to descriptor.
#[derive(Debug, Clone, Default)]
pub struct FieldKindRegistry {
    entries: HashMap<FieldKind, FieldKindDescriptor>,
}

impl FieldKindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering every kind in the closed set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Input,
            imports: INPUT_IMPORTS,
            control: input_control,
            schema: string_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Textarea,
            imports: TEXTAREA_IMPORTS,
            control: textarea_control,
            schema: string_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Phone,
            imports: PHONE_IMPORTS,
            control: phone_control,
            schema: string_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Checkbox,
            imports: CHECKBOX_IMPORTS,
            control: checkbox_control,
            schema: boolean_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Date,
            imports: DATE_IMPORTS,
            control: date_control,
            schema: date_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Select,
            imports: SELECT_IMPORTS,
            control: select_control,
            schema: string_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Radio,
            imports: RADIO_IMPORTS,
            control: radio_control,
            schema: string_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::FileUpload,
            imports: FILE_UPLOAD_IMPORTS,
            control: file_upload_control,
            schema: file_schema,
        });
        registry.register(FieldKindDescriptor {
            kind: FieldKind::Custom,
            imports: CUSTOM_IMPORTS,
            control: custom_control,
            schema: any_schema,
        });
        registry
    }

    pub fn register(&mut self, descriptor: FieldKindDescriptor) {
        self.entries.insert(descriptor.kind, descriptor);
    }

    /// Look up the descriptor for a kind; `None` means the kind is outside
    /// this registry's closed set.
    pub fn lookup(&self, kind: FieldKind) -> Option<&FieldKindDescriptor> {
        self.entries.get(&kind)
    }

    pub fn kinds(&self) -> Vec<FieldKind> {
        self.entries.keys().copied().collect()
    }
}

/// Quote a display string for a JSX attribute value.
fn jsx_str(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// `placeholder="..."` attribute, or nothing when the spec has none.
fn placeholder_attr(attr: &str, spec: &FieldSpec) -> String {
    match &spec.placeholder {
        Some(p) => format!(" {}={}", attr, jsx_str(p)),
        None => String::new(),
    }
}

fn input_control(spec: &FieldSpec) -> String {
    format!("<Input{} {{...field}} />", placeholder_attr("placeholder", spec))
}

fn textarea_control(spec: &FieldSpec) -> String {
    format!(
        "<Textarea{} disabled={{isLoading}} {{...field}} />",
        placeholder_attr("placeholder", spec)
    )
}

fn phone_control(spec: &FieldSpec) -> String {
    format!(
        "<PhoneInput\n  international\n  withCountryCallingCode{}\n  value={{field.value}}\n  onChange={{field.onChange}}\n/>",
        placeholder_attr("placeholder", spec)
    )
}

fn checkbox_control(spec: &FieldSpec) -> String {
    let label = spec.label.as_deref().unwrap_or(&spec.name);
    format!(
        "<div className=\"flex items-center gap-2\">\n  <Checkbox\n    id={id}\n    checked={{field.value}}\n    onCheckedChange={{field.onChange}}\n  />\n  <Label htmlFor={id}>{label}</Label>\n</div>",
        id = jsx_str(&spec.name),
        label = label,
    )
}

fn date_control(spec: &FieldSpec) -> String {
    format!(
        "<DatePicker\n  selected={{field.value}}\n  onChange={{(date) => field.onChange(date)}}\n  dateFormat=\"dd MMMM yyyy\"{}\n/>",
        placeholder_attr("placeholderText", spec)
    )
}

fn select_control(spec: &FieldSpec) -> String {
    let items = match &spec.options {
        Some(ChoiceOptions::Plain(choices)) => choices
            .iter()
            .map(|choice| {
                format!(
                    "    <SelectItem value={v}>{text}</SelectItem>",
                    v = jsx_str(choice),
                    text = choice
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(ChoiceOptions::Items(choices)) => choices
            .iter()
            .map(select_item_entry)
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    };

    format!(
        "<Select onValueChange={{field.onChange}} defaultValue={{field.value}}>\n  <SelectTrigger>\n    <SelectValue{} />\n  </SelectTrigger>\n  <SelectContent>\n{}\n  </SelectContent>\n</Select>",
        placeholder_attr("placeholder", spec),
        items
    )
}

/// Labeled, optionally-imaged select entry. This path is kept separate
/// from the bare-string path above; the two are never mixed in one field.
fn select_item_entry(item: &ChoiceItem) -> String {
    let image = match &item.image {
        Some(src) => format!(
            "\n        <Image src={src} width={{32}} height={{32}} alt={alt} />",
            src = jsx_str(src),
            alt = jsx_str(&item.label)
        ),
        None => String::new(),
    };
    format!(
        "    <SelectItem value={v}>\n      <div className=\"flex items-center gap-2\">{image}\n        <p>{label}</p>\n      </div>\n    </SelectItem>",
        v = jsx_str(&item.label),
        image = image,
        label = item.label,
    )
}

fn radio_control(spec: &FieldSpec) -> String {
    let items = match &spec.options {
        Some(ChoiceOptions::Plain(choices)) => choices
            .iter()
            .map(|choice| {
                format!(
                    "  <div className=\"flex items-center gap-2\">\n    <RadioGroupItem value={v} id={v} />\n    <Label htmlFor={v}>{text}</Label>\n  </div>",
                    v = jsx_str(choice),
                    text = choice
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(ChoiceOptions::Items(choices)) => choices
            .iter()
            .map(radio_item_entry)
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    };

    format!(
        "<RadioGroup\n  onValueChange={{field.onChange}}\n  defaultValue={{field.value}}\n>\n{}\n</RadioGroup>",
        items
    )
}

fn radio_item_entry(item: &ChoiceItem) -> String {
    let image = match &item.image {
        Some(src) => format!(
            "\n    <Image src={src} width={{24}} height={{24}} alt={alt} />",
            src = jsx_str(src),
            alt = jsx_str(&item.label)
        ),
        None => String::new(),
    };
    format!(
        "  <div className=\"flex items-center gap-2\">\n    <RadioGroupItem value={v} id={v} />{image}\n    <Label htmlFor={v}>{label}</Label>\n  </div>",
        v = jsx_str(&item.label),
        image = image,
        label = item.label,
    )
}

fn file_upload_control(_spec: &FieldSpec) -> String {
    "<FileUploader files={field.value} onChange={field.onChange} />".to_string()
}

fn custom_control(spec: &FieldSpec) -> String {
    format!("{{/* TODO: render custom control for '{}' */}}", spec.name)
}

/// zod fragment for string-valued kinds.
fn string_schema(rule: &ValidationRule) -> String {
    let mut expr = String::from("z.string()");

    if let Some(pattern) = &rule.pattern {
        expr.push_str(&format!(".regex(/{}/)", pattern));
    }
    match rule.min {
        Some(min) => expr.push_str(&format!(".min({})", min)),
        None if rule.required => expr.push_str(".min(1, { message: \"Required\" })"),
        None => {}
    }
    if let Some(max) = rule.max {
        expr.push_str(&format!(".max({})", max));
    }
    if !rule.required {
        expr.push_str(".optional()");
    }

    expr
}

fn boolean_schema(rule: &ValidationRule) -> String {
    if rule.required {
        "z.boolean()".to_string()
    } else {
        "z.boolean().optional()".to_string()
    }
}

fn date_schema(rule: &ValidationRule) -> String {
    if rule.required {
        "z.date()".to_string()
    } else {
        "z.date().optional()".to_string()
    }
}

/// zod fragment for file lists; min/max bound the file count.
fn file_schema(rule: &ValidationRule) -> String {
    let mut expr = String::from("z.array(z.custom<File>())");

    match rule.min {
        Some(min) => expr.push_str(&format!(".min({})", min)),
        None if rule.required => expr.push_str(".min(1)"),
        None => {}
    }
    if let Some(max) = rule.max {
        expr.push_str(&format!(".max({})", max));
    }
    if !rule.required {
        expr.push_str(".optional()");
    }

    expr
}

fn any_schema(_rule: &ValidationRule) -> String {
    "z.any()".to_string()
}
