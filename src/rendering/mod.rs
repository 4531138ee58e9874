//! The example-rendering pipeline.
//!
//! One canonical template is rendered into three textual artifacts, each
//! with its own variable-substitution semantics and path rewrites:
//!
//! - **Docs**: author values verbatim, test-env vars replaced with fixed
//!   human-readable defaults
//! - **Test**: values mangled against cross-run name collisions, env values
//!   left as `%{...}` placeholders for the test harness
//! - **Cloud Shell** (OiCS): values suffixed for uniqueness in the shared
//!   demo project
//!
//! The pipeline is synchronous and single-threaded: derive the variant
//! mapping ([`vars`]), execute the template ([`executor`]), post-process
//! the raw text ([`postprocess`]), store the result in the example's
//! output slot. Variant mappings are derived from the example's declared
//! state without mutating it, so every variant starts from the same
//! baseline and distinct examples render in parallel safely.
//!
//! Any error aborts the whole render; there is no partial-success mode and
//! no retry.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

pub mod executor;
pub mod filters;
pub mod postprocess;
pub mod resolver;
pub mod vars;

#[cfg(test)]
mod vars_tests;

use crate::core::{Result, TfgenError};
use crate::example::Example;
use executor::RenderContext;

/// One of the three rendering targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Human-facing documentation config.
    Docs,
    /// Acceptance-test fixture config.
    Test,
    /// "Open in Cloud Shell" demo config.
    CloudShell,
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Docs => write!(f, "docs"),
            Self::Test => write!(f, "test"),
            Self::CloudShell => write!(f, "oics"),
        }
    }
}

/// Render all three variants of an example and store them in its output
/// slots.
///
/// The template file is read once; variable references are validated
/// against the declared mappings before any variant executes (the Cloud
/// Shell variant shares the same template source, so the validated text is
/// reused). The example's `vars` and `test_env_vars` are left exactly as
/// declared.
///
/// # Errors
///
/// Any configuration, I/O, or template error aborts the render. Callers
/// treat an `Err` as fatal for the example; slots may be partially
/// populated only by earlier variants of the same failed call.
pub fn render_example(example: &mut Example) -> Result<()> {
    let template = example.template_path();
    let contents = fs::read_to_string(&template).map_err(|source| TfgenError::TemplateRead {
        path: template.clone(),
        source,
    })?;

    resolver::validate_references(&contents, &template, &example.vars, &example.test_env_vars)?;

    let doc = render_target(example, RenderTarget::Docs, &contents, &template)?;
    let test = render_target(example, RenderTarget::Test, &contents, &template)?;
    let oics = render_target(example, RenderTarget::CloudShell, &contents, &template)?;

    example.doc_hcl_text = Some(doc);
    example.test_hcl_text = Some(test);
    example.oics_hcl_text = Some(oics);

    Ok(())
}

/// Render a single variant from already-loaded template text.
pub fn render_target(
    example: &Example,
    target: RenderTarget,
    contents: &str,
    template: &Path,
) -> Result<String> {
    tracing::debug!(example = %example.name, variant = %target, "rendering example variant");

    let (variant_vars, variant_test_env_vars) = match target {
        RenderTarget::Docs => {
            (example.vars.clone(), vars::doc_test_env_vars(&example.test_env_vars))
        }
        RenderTarget::Test => (
            vars::test_vars(&example.vars, &example.test_vars_overrides),
            vars::test_test_env_vars(&example.test_env_vars),
        ),
        // OiCS configs don't use env-derived values; the symbolic category
        // names pass through untransformed.
        RenderTarget::CloudShell => (
            vars::oics_vars(&example.vars, &example.oics_vars_overrides),
            example
                .test_env_vars
                .iter()
                .map(|(name, category)| (name.clone(), category.as_str().to_string()))
                .collect::<BTreeMap<_, _>>(),
        ),
    };

    let context = RenderContext {
        name: example.name.clone(),
        primary_resource_id: example.primary_resource_id.clone(),
        primary_resource_type: example.primary_resource_type.clone(),
        min_version: example.min_version.clone(),
        vars: variant_vars,
        test_env_vars: variant_test_env_vars,
    };

    let raw = executor::execute_template_str(contents, template, &context)?;

    // Path substitution must follow region-tag stripping
    let text = postprocess::collapse_trailing_blank_line(&raw);
    let text = postprocess::strip_region_tags(&text);
    let text = match target {
        RenderTarget::Test => postprocess::substitute_test_paths(&text),
        RenderTarget::Docs | RenderTarget::CloudShell => {
            postprocess::substitute_example_paths(&text)
        }
    };

    Ok(text)
}
