//! Variable-reference validation for example templates.
//!
//! Before a template is executed, every `{{ vars.NAME }}` and
//! `{{ test_env_vars.NAME }}` reference in its text must resolve to a key
//! declared in the example's YAML. An undeclared reference is a
//! configuration error that fails the whole generation run; catching it
//! here, before rendering, produces an error that names the variable, the
//! template, and the mapping it should be declared in instead of an opaque
//! engine failure.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::core::{Result, TfgenError};

fn vars_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{-?\s*vars\.([A-Za-z0-9_]+)").expect("vars reference pattern is valid")
    })
}

fn test_env_vars_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{-?\s*test_env_vars\.([A-Za-z0-9_]+)")
            .expect("test_env_vars reference pattern is valid")
    })
}

/// Check that every variable reference in `contents` is declared in the
/// example's mappings.
///
/// The two reference syntaxes are checked independently: a name declared in
/// `vars` does not satisfy a `test_env_vars` reference or vice versa.
///
/// # Errors
///
/// Returns [`TfgenError::UndeclaredVariable`] for the first reference whose
/// name is not a key of the corresponding mapping.
pub fn validate_references<E>(
    contents: &str,
    template: &Path,
    vars: &BTreeMap<String, String>,
    test_env_vars: &BTreeMap<String, E>,
) -> Result<()> {
    validate_mapping_references(vars_reference_re(), contents, template, "vars", |name| {
        vars.contains_key(name)
    })?;
    validate_mapping_references(
        test_env_vars_reference_re(),
        contents,
        template,
        "test_env_vars",
        |name| test_env_vars.contains_key(name),
    )
}

fn validate_mapping_references(
    pattern: &Regex,
    contents: &str,
    template: &Path,
    mapping: &'static str,
    is_declared: impl Fn(&str) -> bool,
) -> Result<()> {
    for captures in pattern.captures_iter(contents) {
        // Capture group 1 is the referenced variable name
        let name = &captures[1];
        if !is_declared(name) {
            return Err(TfgenError::UndeclaredVariable {
                variable: name.to_string(),
                template: template.to_path_buf(),
                mapping,
            });
        }
    }
    Ok(())
}
