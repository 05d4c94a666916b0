//! # formfab_templates
//!
//! Template assembly and placeholder substitution for formfab.
//!
//! This crate turns an ordered list of field specifications and a template
//! family into one syntactically coherent generated source unit:
//! consistent imports, validation schema, default values, and rendered
//! field markup, with every `**TOKEN**` placeholder accounted for.
//!
//! ## Example
//!
//! ```rust
//! use formfab_spec::{FieldKind, FieldSpec, ValidationRule};
//! use formfab_templates::TemplateAssembler;
//!
//! let assembler = TemplateAssembler::builtin();
//!
//! let fields = vec![
//!     FieldSpec::new("email", FieldKind::Input)
//!         .with_label("Email Address")
//!         .with_validation(ValidationRule::required()),
//!     FieldSpec::new("consent", FieldKind::Checkbox)
//!         .with_label("I agree to the terms"),
//! ];
//!
//! let unit = assembler.assemble("signup", &fields, "form").unwrap();
//! assert!(unit.source.contains("const Signup"));
//! ```

pub mod assembler;
pub mod error;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod skeleton;

pub use assembler::{FilledToken, GeneratedUnit, TemplateAssembler};
pub use error::{TemplateError, TemplateResult};
pub use loader::{CatalogLoader, SkeletonManifest};
pub use registry::{FieldKindDescriptor, FieldKindRegistry, ImportSymbol, FORM_SCAFFOLD_IMPORTS};
pub use resolver::{PlaceholderResolver, TokenValue};
pub use skeleton::{
    standard_tokens, TemplateCatalog, TemplateSkeleton, TokenCardinality, TokenDecl,
};
