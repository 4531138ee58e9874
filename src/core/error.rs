//! Error handling for tfgen
//!
//! Every failure in the rendering pipeline is surfaced as a [`TfgenError`]
//! and propagated to the caller. The crate never terminates the process:
//! a batch driver iterating over many examples decides whether a failed
//! example aborts the run or is reported and skipped.
//!
//! # Error Categories
//!
//! - **Configuration**: [`TfgenError::MissingExampleName`],
//!   [`TfgenError::UndeclaredVariable`], [`TfgenError::DisallowedProviders`]
//! - **I/O**: [`TfgenError::TemplateRead`]
//! - **Template**: [`TfgenError::TemplateParse`], [`TfgenError::TemplateRender`]
//!
//! None of these are recoverable or retried; rendering is a build-time
//! generation step, not a live service.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tfgen operations.
///
/// Each variant carries enough context to point the example author at the
/// offending example, template file, or variable without needing a stack
/// trace.
#[derive(Error, Debug)]
pub enum TfgenError {
    /// An example was declared without a `name`.
    #[error("Missing `name` for one example in resource {resource}")]
    MissingExampleName {
        /// The resource whose YAML declared the unnamed example
        resource: String,
    },

    /// A template referenced a variable that the example never declared.
    ///
    /// Raised by reference validation before any variant is rendered, so a
    /// typo in a template fails the run instead of producing partial output.
    #[error(
        "Failed to find `{variable}` in `{mapping}` when validating {}; \
         declare it in the example's `{mapping}` mapping", .template.display()
    )]
    UndeclaredVariable {
        /// The referenced variable name
        variable: String,
        /// Path to the template file containing the reference
        template: PathBuf,
        /// The declaring mapping the name was expected in (`vars` or `test_env_vars`)
        mapping: &'static str,
    },

    /// An example requested external providers outside the HashiCorp set.
    #[error(
        "Providers {providers:?} are not allowed; only providers published by HashiCorp are allowed"
    )]
    DisallowedProviders {
        /// The providers that failed the whitelist check
        providers: Vec<String>,
    },

    /// The template file could not be read.
    #[error("Failed to read template {}", .path.display())]
    TemplateRead {
        /// Path to the unreadable template
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The template file contained invalid syntax.
    #[error("Failed to parse template {}: {reason}", .path.display())]
    TemplateParse {
        /// Path to the malformed template
        path: PathBuf,
        /// Cleaned-up engine diagnostic
        reason: String,
    },

    /// Template execution failed at render time.
    #[error("Failed to render template {}: {reason}", .path.display())]
    TemplateRender {
        /// Path to the template that failed to render
        path: PathBuf,
        /// Cleaned-up engine diagnostic
        reason: String,
    },
}
