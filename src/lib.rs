//! tfgen - Terraform example-config generator core
//!
//! Renders a single example-configuration template into three textual
//! artifacts from one canonical source:
//!
//! - human-facing **documentation** (author values verbatim, readable
//!   defaults for environment-derived values)
//! - an automated **acceptance-test** fixture (values mangled against
//!   cross-run name collisions, `%{...}` placeholders for the test harness)
//! - an "Open in **Cloud Shell**" demo (values suffixed for uniqueness in
//!   a shared environment)
//!
//! # Pipeline
//!
//! For each variant: derive the variant's variable mapping from the
//! declared one, execute the Tera template against it, then apply the
//! pattern-based rewrites (trailing-blank-line collapse, region-tag
//! stripping, placeholder-path substitution). Variable references in the
//! template are validated against the declared mappings before anything
//! renders; an undeclared reference is a fatal configuration error.
//!
//! ```no_run
//! use tfgen::example::Example;
//!
//! # fn main() -> anyhow::Result<()> {
//! let yaml = r#"
//! name: address_basic
//! primary_resource_id: basic
//! vars:
//!   address_name: my-address
//! test_env_vars:
//!   project: PROJECT_NAME
//! "#;
//! let mut example: Example = serde_yaml::from_str(yaml)?;
//! example.validate("Address")?;
//! example.render()?;
//!
//! println!("{}", example.doc_hcl_text.as_deref().unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`core`] - crate error type
//! - [`example`] - the [`Example`](example::Example) configuration struct
//!   and validation
//! - [`rendering`] - the pipeline: variable transformation, reference
//!   validation, template execution, post-processing
//!
//! HCL itself is never parsed or validated here; rendered output is opaque
//! text shaped only by pattern transforms. The driver that iterates over
//! examples and writes files, and the YAML ingestion step, are external.

pub mod core;
pub mod example;
pub mod rendering;
