//! Template skeletons and the family catalog.
//!
//! A skeleton is a text template carrying `**TOKEN**` placeholders. The
//! placeholder set is declared up front and checked against the body at
//! construction time, so substitution works against a closed, verified
//! contract instead of an implicit text convention.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};

/// Placeholder token pattern: `**TOKEN_NAME**`.
pub(crate) const TOKEN_PATTERN: &str = r"\*\*([A-Z][A-Z0-9_]*)\*\*";

/// How a token's value is substituted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenCardinality {
    /// One value, substituted verbatim.
    Single,
    /// A list of fragments, joined line-by-line.
    Join,
}

impl TokenCardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCardinality::Single => "single",
            TokenCardinality::Join => "join",
        }
    }
}

/// A declared placeholder token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenDecl {
    pub name: String,
    pub cardinality: TokenCardinality,
}

impl TokenDecl {
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: TokenCardinality::Single,
        }
    }

    pub fn join(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cardinality: TokenCardinality::Join,
        }
    }
}

/// A text template identified by a family name, with a closed declared
/// token set.
#[derive(Debug, Clone)]
pub struct TemplateSkeleton {
    family: String,
    body: String,
    tokens: Vec<TokenDecl>,
}

impl TemplateSkeleton {
    /// Build a skeleton, verifying the declared tokens against the body.
    ///
    /// Every token scanned from the body must be declared and every
    /// declared token must occur in the body at least once.
    pub fn new(
        family: impl Into<String>,
        body: impl Into<String>,
        tokens: Vec<TokenDecl>,
    ) -> TemplateResult<Self> {
        let family = family.into();
        let body = body.into();

        let scanned = scan_tokens(&body);
        for token in &scanned {
            if !tokens.iter().any(|t| &t.name == token) {
                return Err(TemplateError::InvalidSkeleton {
                    family,
                    message: format!("body contains undeclared token '{}'", token),
                });
            }
        }
        for decl in &tokens {
            if !scanned.contains(&decl.name) {
                return Err(TemplateError::InvalidSkeleton {
                    family,
                    message: format!("declared token '{}' never occurs in body", decl.name),
                });
            }
        }

        Ok(Self {
            family,
            body,
            tokens,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Declared tokens, in declaration order.
    pub fn tokens(&self) -> &[TokenDecl] {
        &self.tokens
    }

    pub fn declares(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.name == token)
    }

    pub fn cardinality_of(&self, token: &str) -> Option<TokenCardinality> {
        self.tokens
            .iter()
            .find(|t| t.name == token)
            .map(|t| t.cardinality)
    }
}

/// Scan a body for placeholder tokens, deduplicated in first-seen order.
pub(crate) fn scan_tokens(body: &str) -> Vec<String> {
    let pattern = Regex::new(TOKEN_PATTERN).unwrap();
    let mut seen = Vec::new();
    for caps in pattern.captures_iter(body) {
        let name = caps[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Catalog of template skeletons, keyed by family name.
///
/// Built once at process start and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    skeletons: HashMap<String, TemplateSkeleton>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the bundled template families.
    ///
    /// - `form`: a complete form component file.
    /// - `field`: a field-only file exporting the schema, defaults, and
    ///   rendered fields without the form shell.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(
            TemplateSkeleton::new(
                "form",
                include_str!("../catalog/form/form.tsx.tmpl"),
                standard_tokens(),
            )
            .expect("builtin form skeleton is well-formed"),
        );
        catalog.register(
            TemplateSkeleton::new(
                "field",
                include_str!("../catalog/field/field.tsx.tmpl"),
                standard_tokens(),
            )
            .expect("builtin field skeleton is well-formed"),
        );
        catalog
    }

    /// Register a skeleton, replacing any previous one for the family.
    pub fn register(&mut self, skeleton: TemplateSkeleton) {
        self.skeletons.insert(skeleton.family().to_string(), skeleton);
    }

    pub fn get(&self, family: &str) -> Option<&TemplateSkeleton> {
        self.skeletons.get(family)
    }

    pub fn exists(&self, family: &str) -> bool {
        self.skeletons.contains_key(family)
    }

    pub fn list(&self) -> Vec<&TemplateSkeleton> {
        self.skeletons.values().collect()
    }
}

/// The token set every form-generating skeleton declares.
pub fn standard_tokens() -> Vec<TokenDecl> {
    vec![
        TokenDecl::single("FORM_NAME"),
        TokenDecl::join("IMPORTS"),
        TokenDecl::join("SCHEMA_VALS"),
        TokenDecl::join("FORM_DEFAULTS"),
        TokenDecl::join("FORM_FIELDS"),
    ]
}
