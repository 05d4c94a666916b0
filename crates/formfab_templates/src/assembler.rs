//! Template assembly: field specs in, one coherent generated source unit out.

use std::collections::HashMap;

use tracing::{debug, info};

use formfab_spec::{DefaultValue, FieldSpec, SpecValidator};
use serde::Serialize;

use crate::error::{TemplateError, TemplateResult};
use crate::registry::{FieldKindDescriptor, FieldKindRegistry, ImportSymbol, FORM_SCAFFOLD_IMPORTS};
use crate::resolver::{PlaceholderResolver, TokenValue};
use crate::skeleton::{TemplateCatalog, TemplateSkeleton};

/// One filled placeholder, recorded for inspection.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FilledToken {
    pub token: String,
    pub content: String,
}

/// The assembler's output: resolved source text plus a manifest of which
/// placeholders were filled and with what.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUnit {
    pub family: String,
    pub form_name: String,
    pub source: String,
    /// Filled tokens in skeleton declaration order.
    pub manifest: Vec<FilledToken>,
}

/// Assembles generated units from field specifications and a template
/// family.
///
/// The catalog and registry are read-only after construction, so one
/// assembler can serve concurrent callers without coordination.
pub struct TemplateAssembler {
    catalog: TemplateCatalog,
    registry: FieldKindRegistry,
    resolver: PlaceholderResolver,
}

impl TemplateAssembler {
    pub fn new(catalog: TemplateCatalog, registry: FieldKindRegistry) -> Self {
        Self {
            catalog,
            registry,
            resolver: PlaceholderResolver::new(),
        }
    }

    /// Assembler over the bundled catalog and the builtin kind registry.
    pub fn builtin() -> Self {
        Self::new(TemplateCatalog::builtin(), FieldKindRegistry::builtin())
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &FieldKindRegistry {
        &self.registry
    }

    /// Assemble one generated unit.
    ///
    /// Fails atomically: any invalid field or placement error aborts the
    /// whole call with no partial output. An empty field list is legal and
    /// produces a minimal valid unit.
    pub fn assemble(
        &self,
        form_name: &str,
        fields: &[FieldSpec],
        family: &str,
    ) -> TemplateResult<GeneratedUnit> {
        info!(
            "Assembling form '{}' ({} fields) from family '{}'",
            form_name,
            fields.len(),
            family
        );

        let skeleton = self
            .catalog
            .get(family)
            .ok_or_else(|| TemplateError::UnknownFamily(family.to_string()))?;

        SpecValidator::check_fields(fields).map_err(|e| TemplateError::InvalidField {
            field: e.field().unwrap_or("").to_string(),
            reason: e.to_string(),
        })?;

        // Resolve every descriptor up front so an unknown kind aborts
        // before any block is built.
        let mut resolved = Vec::with_capacity(fields.len());
        for field in fields {
            let descriptor =
                self.registry
                    .lookup(field.kind)
                    .ok_or_else(|| TemplateError::InvalidField {
                        field: field.name.clone(),
                        reason: format!("unknown field kind: {}", field.kind),
                    })?;
            debug!("Resolved field '{}' as kind '{}'", field.name, field.kind);
            resolved.push((field, descriptor));
        }

        let component_name = to_pascal_case(form_name);

        let mut values = HashMap::new();
        values.insert(
            "FORM_NAME".to_string(),
            TokenValue::Single(component_name.clone()),
        );
        values.insert(
            "IMPORTS".to_string(),
            TokenValue::Join(build_import_block(&resolved)),
        );
        values.insert(
            "SCHEMA_VALS".to_string(),
            TokenValue::Join(build_schema_block(&resolved)),
        );
        values.insert(
            "FORM_DEFAULTS".to_string(),
            TokenValue::Join(build_defaults_block(fields)),
        );
        values.insert(
            "FORM_FIELDS".to_string(),
            TokenValue::Join(build_rendered_fields(&resolved)),
        );

        let source = self
            .resolver
            .resolve(skeleton, &values)
            .map_err(|e| match e {
                TemplateError::Unfilled(token)
                | TemplateError::Unexpected(token)
                | TemplateError::Cardinality { token, .. } => TemplateError::TemplateMismatch {
                    family: family.to_string(),
                    token,
                },
                other => other,
            })?;

        let manifest = build_manifest(skeleton, &values);

        Ok(GeneratedUnit {
            family: family.to_string(),
            form_name: component_name,
            source,
            manifest,
        })
    }
}

/// Import lines: the form scaffold symbols first, then each field's
/// symbols in field order, deduplicated by identity at first occurrence
/// and grouped by module source.
fn build_import_block(resolved: &[(&FieldSpec, &FieldKindDescriptor)]) -> Vec<String> {
    let mut groups: Vec<(&'static str, Vec<&'static str>)> = Vec::new();

    let mut add = |symbol: &ImportSymbol| {
        match groups.iter_mut().find(|(source, _)| *source == symbol.source) {
            Some((_, names)) => {
                if !names.contains(&symbol.name) {
                    names.push(symbol.name);
                }
            }
            None => groups.push((symbol.source, vec![symbol.name])),
        }
    };

    for symbol in FORM_SCAFFOLD_IMPORTS {
        add(symbol);
    }
    for (_, descriptor) in resolved {
        for symbol in descriptor.imports {
            add(symbol);
        }
    }

    groups
        .into_iter()
        .map(|(source, names)| format!("import {{ {} }} from \"{}\";", names.join(", "), source))
        .collect()
}

/// One schema fragment per field, keyed by field name, in field order.
fn build_schema_block(resolved: &[(&FieldSpec, &FieldKindDescriptor)]) -> Vec<String> {
    resolved
        .iter()
        .map(|(field, descriptor)| {
            format!("{}: {},", field.name, (descriptor.schema)(&field.validation))
        })
        .collect()
}

/// Default-value entries for fields that declare one; fields without a
/// default are omitted, never fabricated.
fn build_defaults_block(fields: &[FieldSpec]) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| {
            field
                .default
                .as_ref()
                .map(|default| format!("{}: {},", field.name, render_default(default)))
        })
        .collect()
}

/// Render a default value as a TypeScript literal.
fn render_default(default: &DefaultValue) -> String {
    match default {
        DefaultValue::Text(s) => format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
        DefaultValue::Flag(b) => b.to_string(),
        DefaultValue::List(items) => {
            let quoted: Vec<String> = items.iter().map(|i| format!("\"{}\"", i)).collect();
            format!("[{}]", quoted.join(", "))
        }
        DefaultValue::Date(d) => format!("new Date(\"{}\")", d.format("%Y-%m-%d")),
    }
}

/// Field-level markup in field order, each control wrapped in its
/// label/description/error-presentation scaffold.
fn build_rendered_fields(resolved: &[(&FieldSpec, &FieldKindDescriptor)]) -> Vec<String> {
    resolved
        .iter()
        .map(|(field, descriptor)| render_field(field, descriptor))
        .collect()
}

fn render_field(field: &FieldSpec, descriptor: &FieldKindDescriptor) -> String {
    let mut jsx = String::new();
    jsx.push_str("<FormField\n");
    jsx.push_str("  control={form.control}\n");
    jsx.push_str(&format!("  name=\"{}\"\n", field.name));
    jsx.push_str("  render={({ field }) => (\n");
    jsx.push_str("    <FormItem>\n");

    // Checkboxes carry their label next to the control instead of above it.
    if field.kind != formfab_spec::FieldKind::Checkbox {
        if let Some(label) = &field.label {
            jsx.push_str(&format!("      <FormLabel>{}</FormLabel>\n", label));
        }
    }
    if let Some(description) = &field.description {
        jsx.push_str(&format!(
            "      <FormDescription>{}</FormDescription>\n",
            description
        ));
    }

    jsx.push_str("      <FormControl>\n");
    jsx.push_str(&indent(&(descriptor.control)(field), "        "));
    jsx.push('\n');
    jsx.push_str("      </FormControl>\n");
    jsx.push_str("      <FormMessage />\n");
    jsx.push_str("    </FormItem>\n");
    jsx.push_str("  )}\n");
    jsx.push_str("/>");
    jsx
}

fn indent(text: &str, pad: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Manifest entries in skeleton declaration order.
fn build_manifest(
    skeleton: &TemplateSkeleton,
    values: &HashMap<String, TokenValue>,
) -> Vec<FilledToken> {
    skeleton
        .tokens()
        .iter()
        .filter_map(|decl| {
            values.get(&decl.name).map(|value| FilledToken {
                token: decl.name.clone(),
                content: value.render(),
            })
        })
        .collect()
}

/// Convert string to PascalCase for the generated component identifier.
fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c == ' ')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}
