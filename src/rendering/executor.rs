//! Template execution with Tera.
//!
//! A template is executed against an ephemeral [`RenderContext`]: the
//! per-variant variable mappings plus the example metadata templates may
//! interpolate (`{{ primary_resource_id }}`, `{{ name }}`). A fresh Tera
//! instance is built per execution — it is just empty maps, and keeps the
//! fixed filter library the only registered extension point.
//!
//! Parse and render faults are fatal for the whole render, not just one
//! variant: a template that fails for docs will fail identically for tests.

use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error as _;
use std::fs;
use std::path::Path;
use tera::{Context as TeraContext, Tera};

use super::filters;
use crate::core::{Result, TfgenError};

/// Ephemeral view of an example handed to the template engine for one
/// execution. The `vars` and `test_env_vars` mappings hold the
/// already-transformed values for the variant being rendered; the view is
/// dropped as soon as the execution finishes.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Example name, usable in templates for derived identifiers.
    pub name: String,
    /// Terraform identifier of the primary resource.
    pub primary_resource_id: String,
    /// Optional resource-type override for import tests.
    pub primary_resource_type: Option<String>,
    /// Minimum provider version (`beta` examples reference it in provider blocks).
    pub min_version: Option<String>,
    /// Variant-transformed plain variables.
    pub vars: BTreeMap<String, String>,
    /// Variant-transformed test environment variables.
    pub test_env_vars: BTreeMap<String, String>,
}

/// Read the template at `path` and execute it against `context`.
///
/// # Errors
///
/// [`TfgenError::TemplateRead`] if the file is unreadable, otherwise the
/// errors of [`execute_template_str`].
pub fn execute_template(path: &Path, context: &RenderContext) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|source| TfgenError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    execute_template_str(&contents, path, context)
}

/// Execute already-loaded template text against `context`.
///
/// The output always ends with exactly one trailing line terminator,
/// appended if the template produced none.
///
/// # Errors
///
/// [`TfgenError::TemplateParse`] for malformed template syntax,
/// [`TfgenError::TemplateRender`] for execution faults (`path` is used for
/// diagnostics only).
pub fn execute_template_str(
    contents: &str,
    path: &Path,
    context: &RenderContext,
) -> Result<String> {
    let template_name =
        path.file_name().and_then(|name| name.to_str()).unwrap_or("template");

    // Fresh instance per execution - just empty maps, cheap to build
    let mut tera = Tera::default();
    tera.register_filter("camelize", filters::camelize_filter);
    tera.register_filter("underscore", filters::underscore_filter);
    tera.register_filter("dasherize", filters::dasherize_filter);
    tera.register_filter("titlecase", filters::titlecase_filter);

    tera.add_raw_template(template_name, contents).map_err(|err| TfgenError::TemplateParse {
        path: path.to_path_buf(),
        reason: flatten_tera_error(&err),
    })?;

    let tera_context =
        TeraContext::from_serialize(context).map_err(|err| TfgenError::TemplateRender {
            path: path.to_path_buf(),
            reason: flatten_tera_error(&err),
        })?;

    tracing::debug!(template = template_name, "executing example template");

    let mut rendered =
        tera.render(template_name, &tera_context).map_err(|err| TfgenError::TemplateRender {
            path: path.to_path_buf(),
            reason: flatten_tera_error(&err),
        })?;

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    Ok(rendered)
}

/// Flatten a Tera error chain into a single diagnostic line.
///
/// Tera reports the root cause (missing variable, bad filter argument,
/// syntax position) through `Error::source`, with the top-level message
/// carrying only the template name.
fn flatten_tera_error(error: &tera::Error) -> String {
    let mut messages = vec![error.to_string()];
    let mut current = error.source();
    while let Some(err) = current {
        messages.push(err.to_string());
        current = err.source();
    }
    messages.join(": ")
}
