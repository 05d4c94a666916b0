//! Placeholder substitution against a skeleton's declared token set.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};
use crate::skeleton::{TemplateSkeleton, TokenCardinality, TOKEN_PATTERN};

/// A value supplied for one placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// Substituted verbatim.
    Single(String),
    /// Fragments joined with newlines; an empty list renders as empty text.
    Join(Vec<String>),
}

impl TokenValue {
    pub fn cardinality(&self) -> TokenCardinality {
        match self {
            TokenValue::Single(_) => TokenCardinality::Single,
            TokenValue::Join(_) => TokenCardinality::Join,
        }
    }

    /// Render the value to the text placed at the token position.
    pub fn render(&self) -> String {
        match self {
            TokenValue::Single(s) => s.clone(),
            TokenValue::Join(fragments) => fragments.join("\n"),
        }
    }
}

/// Low-level substitution pass over a skeleton.
///
/// Coverage is exact in both directions: every declared token needs a
/// value and every value needs a declared token. Substitution is a single
/// literal pass, so a substituted value is never rescanned for further
/// tokens.
pub struct PlaceholderResolver {
    token_pattern: Regex,
}

impl Default for PlaceholderResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderResolver {
    pub fn new() -> Self {
        Self {
            token_pattern: Regex::new(TOKEN_PATTERN).unwrap(),
        }
    }

    /// Substitute `values` into `skeleton`, verifying exact coverage.
    pub fn resolve(
        &self,
        skeleton: &TemplateSkeleton,
        values: &HashMap<String, TokenValue>,
    ) -> TemplateResult<String> {
        for decl in skeleton.tokens() {
            let value = values
                .get(&decl.name)
                .ok_or_else(|| TemplateError::Unfilled(decl.name.clone()))?;
            if value.cardinality() != decl.cardinality {
                return Err(TemplateError::Cardinality {
                    token: decl.name.clone(),
                    expected: decl.cardinality.as_str().to_string(),
                    actual: value.cardinality().as_str().to_string(),
                });
            }
        }

        for token in values.keys() {
            if !skeleton.declares(token) {
                return Err(TemplateError::Unexpected(token.clone()));
            }
        }

        // One pass over the original body; replacement text is emitted
        // verbatim and never itself rescanned. Token matching is
        // exact-name thanks to the ** delimiters.
        let resolved = self
            .token_pattern
            .replace_all(skeleton.body(), |caps: &regex::Captures| {
                // Coverage was checked above; the skeleton constructor
                // guarantees every body token is declared.
                values
                    .get(&caps[1])
                    .map(|v| v.render())
                    .unwrap_or_default()
            })
            .to_string();

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::TokenDecl;

    fn skeleton(body: &str, tokens: Vec<TokenDecl>) -> TemplateSkeleton {
        TemplateSkeleton::new("test", body, tokens).unwrap()
    }

    #[test]
    fn test_resolve_single_and_join() {
        let sk = skeleton(
            "name: **NAME**\nitems:\n**ITEMS**",
            vec![TokenDecl::single("NAME"), TokenDecl::join("ITEMS")],
        );
        let mut values = HashMap::new();
        values.insert("NAME".to_string(), TokenValue::Single("demo".to_string()));
        values.insert(
            "ITEMS".to_string(),
            TokenValue::Join(vec!["- a".to_string(), "- b".to_string()]),
        );

        let out = PlaceholderResolver::new().resolve(&sk, &values).unwrap();
        assert_eq!(out, "name: demo\nitems:\n- a\n- b");
    }

    #[test]
    fn test_missing_value_is_unfilled() {
        let sk = skeleton("**X**", vec![TokenDecl::single("X")]);
        let err = PlaceholderResolver::new()
            .resolve(&sk, &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::Unfilled(token) if token == "X"));
    }

    #[test]
    fn test_surplus_value_is_unexpected() {
        let sk = skeleton("**X**", vec![TokenDecl::single("X")]);
        let mut values = HashMap::new();
        values.insert("X".to_string(), TokenValue::Single("x".to_string()));
        values.insert("Y".to_string(), TokenValue::Single("y".to_string()));

        let err = PlaceholderResolver::new().resolve(&sk, &values).unwrap_err();
        assert!(matches!(err, TemplateError::Unexpected(token) if token == "Y"));
    }

    #[test]
    fn test_cardinality_mismatch() {
        let sk = skeleton("**X**", vec![TokenDecl::join("X")]);
        let mut values = HashMap::new();
        values.insert("X".to_string(), TokenValue::Single("x".to_string()));

        let err = PlaceholderResolver::new().resolve(&sk, &values).unwrap_err();
        assert!(matches!(err, TemplateError::Cardinality { token, .. } if token == "X"));
    }

    #[test]
    fn test_no_recursive_expansion() {
        let sk = skeleton("**X**", vec![TokenDecl::single("X")]);
        let mut values = HashMap::new();
        values.insert(
            "X".to_string(),
            TokenValue::Single("**X** stays literal".to_string()),
        );

        let out = PlaceholderResolver::new().resolve(&sk, &values).unwrap();
        assert_eq!(out, "**X** stays literal");
    }

    #[test]
    fn test_prefix_sharing_tokens_do_not_collide() {
        let sk = skeleton(
            "**FORM** / **FORM_NAME**",
            vec![TokenDecl::single("FORM"), TokenDecl::single("FORM_NAME")],
        );
        let mut values = HashMap::new();
        values.insert("FORM".to_string(), TokenValue::Single("a".to_string()));
        values.insert("FORM_NAME".to_string(), TokenValue::Single("b".to_string()));

        let out = PlaceholderResolver::new().resolve(&sk, &values).unwrap();
        assert_eq!(out, "a / b");
    }

    #[test]
    fn test_empty_join_renders_empty() {
        let sk = skeleton("[**ITEMS**]", vec![TokenDecl::join("ITEMS")]);
        let mut values = HashMap::new();
        values.insert("ITEMS".to_string(), TokenValue::Join(Vec::new()));

        let out = PlaceholderResolver::new().resolve(&sk, &values).unwrap();
        assert_eq!(out, "[]");
    }
}
