//! Example configuration structs and validation.
//!
//! An [`Example`] is the unit of rendering: one shared Terraform config
//! template that gets rendered into documentation, an acceptance-test
//! fixture, and an "Open in Cloud Shell" (OiCS) demo. The struct is
//! deserialized from the resource YAML by the driver; this module owns the
//! field semantics, construction-time validation, and the small helpers
//! the generated docs and tests need (Cloud Shell deep link, test slug,
//! resource-type override).
//!
//! # Example declaration
//!
//! ```yaml
//! name: address_with_subnetwork
//! primary_resource_id: internal
//! vars:
//!   address_name: my-internal-address
//!   network_name: my-network
//! test_env_vars:
//!   project: PROJECT_NAME
//! test_vars_overrides:
//!   network_name: acctest.BootstrapSharedTestNetwork(t, "addresses")
//! ```
//!
//! The three rendered outputs are write-once slots owned by the example and
//! are populated by [`Example::render`](crate::rendering).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use url::Url;

use crate::core::{Result, TfgenError};
use crate::rendering::filters::{CaseFirst, camelize};


/// Official providers supported by HashiCorp.
///
/// <https://registry.terraform.io/search/providers?namespace=hashicorp&tier=official>
const HASHICORP_PROVIDERS: &[&str] = &[
    "aws",
    "random",
    "null",
    "template",
    "azurerm",
    "kubernetes",
    "local",
    "external",
    "time",
    "vault",
    "archive",
    "tls",
    "helm",
    "azuread",
    "http",
    "cloudinit",
    "tfe",
    "dns",
    "consul",
    "vsphere",
    "nomad",
    "awscc",
    "googleworkspace",
    "hcp",
    "boundary",
    "ad",
    "azurestack",
    "opc",
    "oraclepaas",
    "hcs",
    "salesforce",
];

/// Symbolic category for a variable whose real value comes from the test
/// environment at run time.
///
/// Each category corresponds to a `get*FromEnv` accessor in the generated
/// provider test harness. Declaring the categories as an enum means an
/// unrecognized category in YAML fails deserialization up front instead of
/// silently rendering an empty documentation default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestEnvVar {
    ProjectName,
    ProjectNumber,
    Credentials,
    Region,
    OrgId,
    OrgDomain,
    OrgTarget,
    BillingAcct,
    MasterBillingAcct,
    ServiceAcct,
    CustId,
    IdentityUser,
    PapDescription,
    ChronicleId,
    VmwareengineProject,
}

impl TestEnvVar {
    /// Fixed human-readable literal shown in documentation for this category.
    pub fn doc_default(self) -> &'static str {
        match self {
            Self::ProjectName => "my-project-name",
            Self::ProjectNumber => "1111111111111",
            Self::Credentials => "my/credentials/filename.json",
            Self::Region => "us-west1",
            Self::OrgId => "123456789",
            Self::OrgDomain => "example.com",
            Self::OrgTarget => "123456789",
            Self::BillingAcct => "000000-0000000-0000000-000000",
            Self::MasterBillingAcct => "000000-0000000-0000000-000000",
            Self::ServiceAcct => "my@service-account.com",
            Self::CustId => "A01b123xz",
            Self::IdentityUser => "cloud_identity_user",
            Self::PapDescription => "description",
            Self::ChronicleId => "00000000-0000-0000-0000-000000000000",
            Self::VmwareengineProject => "my-vmwareengine-project",
        }
    }

    /// The symbolic category name as declared in YAML, e.g. `PROJECT_NAME`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectName => "PROJECT_NAME",
            Self::ProjectNumber => "PROJECT_NUMBER",
            Self::Credentials => "CREDENTIALS",
            Self::Region => "REGION",
            Self::OrgId => "ORG_ID",
            Self::OrgDomain => "ORG_DOMAIN",
            Self::OrgTarget => "ORG_TARGET",
            Self::BillingAcct => "BILLING_ACCT",
            Self::MasterBillingAcct => "MASTER_BILLING_ACCT",
            Self::ServiceAcct => "SERVICE_ACCT",
            Self::CustId => "CUST_ID",
            Self::IdentityUser => "IDENTITY_USER",
            Self::PapDescription => "PAP_DESCRIPTION",
            Self::ChronicleId => "CHRONICLE_ID",
            Self::VmwareengineProject => "VMWAREENGINE_PROJECT",
        }
    }
}

/// A member/role pair bootstrapped on the default test project before the
/// test runs.
///
/// Used where specific IAM permissions must already be present to avoid race
/// conditions between tests; permissions on resources created inside a test
/// should use normal Terraform resources instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IamMember {
    pub member: String,
    pub role: String,
}

/// Generates configs to be shown as examples in docs and outputted as tests
/// from a shared template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    /// The name of the example in lower snake_case. Generally the resource
    /// name followed by some detail about the specific test, e.g.
    /// `address_with_subnetwork`.
    pub name: String,

    /// The id of the "primary" resource in the example, used in import
    /// tests. This is the value that appears in the Terraform config url:
    ///
    /// ```text
    /// resource "google_compute_address" "{{primary_resource_id}}" {
    /// ```
    pub primary_resource_id: String,

    /// Optional resource type of the "primary" resource, used in import
    /// tests. If set, overrides the default type implied from the object
    /// parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_resource_type: Option<String>,

    /// Mapping from template variable names to author-supplied values.
    /// The value is used as a prefix for generated tests and inserted into
    /// the docs verbatim.
    pub vars: BTreeMap<String, String>,

    /// Variables that must hold real environment values during tests and
    /// cannot be invented by the generator: an existing project id, a zone,
    /// a billing account, etc. Maps template variable name to the symbolic
    /// category the test harness resolves at run time.
    pub test_env_vars: BTreeMap<String, TestEnvVar>,

    /// Custom override expressions for generated test configs.
    ///
    /// If `vars["network"] = "my-vpc"`, the test config would normally get
    /// `my-vpc%{random_suffix}`. With
    /// `test_vars_overrides["network"] = "nameOfVpc(t)"` the test config
    /// instead gets `%{network}`, with the override expression supplying the
    /// value in the test context.
    pub test_vars_overrides: BTreeMap<String, String>,

    /// Custom override values for the OiCS config; same idea as
    /// [`test_vars_overrides`](Self::test_vars_overrides) but the override
    /// is a literal inserted verbatim.
    pub oics_vars_overrides: BTreeMap<String, String>,

    /// Member/role pairs to bootstrap on the default test project.
    pub bootstrap_iam: Vec<IamMember>,

    /// The version name of the example's version if it differs from the
    /// resource version, e.g. `beta`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,

    /// Extra properties to ignore read on during import.
    pub ignore_read_extra: Vec<String>,

    /// Whether to skip generating tests for this example.
    pub exclude_test: bool,

    /// Whether to skip generating docs for this example.
    pub exclude_docs: bool,

    /// Whether to skip import tests for this example.
    pub exclude_import_test: bool,

    /// The name of the primary resource for use in IAM tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_resource_name: Option<String>,

    /// Location/region override for use in IAM tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_override: Option<String>,

    /// The path to this example's Terraform config template. Defaults to
    /// `templates/terraform/examples/{name}.tf.tmpl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,

    /// If the example should be skipped during VCR testing, e.g. when a
    /// config has two fine-grained resources with a create race.
    pub skip_vcr: bool,

    /// The reason to skip a test, e.g. a link to a ticket that must be
    /// resolved first. Non-empty means the test is skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_test: Option<String>,

    /// External providers needed for the testcase. Think before adding:
    /// each one adds latency and an external dependency to the test.
    pub external_providers: Vec<String>,

    /// Rendered documentation config. Populated by
    /// [`render`](crate::rendering::render_example).
    #[serde(skip)]
    pub doc_hcl_text: Option<String>,

    /// Rendered acceptance-test config.
    #[serde(skip)]
    pub test_hcl_text: Option<String>,

    /// Rendered Open-in-Cloud-Shell config.
    #[serde(skip)]
    pub oics_hcl_text: Option<String>,
}

impl Example {
    /// Validate the example as declared in the given resource's YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TfgenError::MissingExampleName`] if `name` is empty and
    /// [`TfgenError::DisallowedProviders`] if any external provider is not
    /// on the HashiCorp whitelist.
    pub fn validate(&self, resource_name: &str) -> Result<()> {
        if self.name.is_empty() {
            return Err(TfgenError::MissingExampleName {
                resource: resource_name.to_string(),
            });
        }
        self.validate_external_providers()
    }

    /// Check requested external providers against the HashiCorp whitelist.
    pub fn validate_external_providers(&self) -> Result<()> {
        let unallowed: Vec<String> = self
            .external_providers
            .iter()
            .filter(|p| !HASHICORP_PROVIDERS.contains(&p.as_str()))
            .cloned()
            .collect();

        if unallowed.is_empty() {
            Ok(())
        } else {
            Err(TfgenError::DisallowedProviders {
                providers: unallowed,
            })
        }
    }

    /// Path to the example's config template.
    ///
    /// Uses `config_path` when set, otherwise the deterministic default
    /// derived from the example name.
    pub fn template_path(&self) -> PathBuf {
        match &self.config_path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(format!("templates/terraform/examples/{}.tf.tmpl", self.name)),
        }
    }

    /// Terraform resource type used in import tests: the explicit
    /// `primary_resource_type` override if set, otherwise the given default.
    pub fn resource_type<'a>(&'a self, terraform_name: &'a str) -> &'a str {
        self.primary_resource_type.as_deref().unwrap_or(terraform_name)
    }

    /// Name of the generated acceptance-test function for this example.
    pub fn test_slug(&self, product_name: &str, resource_name: &str) -> String {
        format!(
            "{}{}_{}Example",
            product_name,
            resource_name,
            camelize(&self.name, CaseFirst::Lower)
        )
    }

    /// Render the documentation, test, and Cloud Shell variants from the
    /// example's template and store them in the output slots.
    ///
    /// See [`crate::rendering::render_example`].
    ///
    /// # Errors
    ///
    /// Propagates any configuration, I/O, or template error; the render is
    /// all-or-nothing from the caller's perspective.
    pub fn render(&mut self) -> Result<()> {
        crate::rendering::render_example(self)
    }

    /// "Open in Cloud Shell" deep link for this example's generated demo
    /// directory.
    pub fn oics_link(&self) -> Url {
        // Static base URL, cannot fail to parse
        let mut link = Url::parse("https://console.cloud.google.com/cloudshell/open")
            .expect("static cloudshell URL is valid");
        link.query_pairs_mut()
            .append_pair(
                "cloudshell_git_repo",
                "https://github.com/terraform-google-modules/docs-examples.git",
            )
            .append_pair("cloudshell_image", "gcr.io/cloudshell-images/cloudshell:latest")
            .append_pair("cloudshell_print", "./motd")
            .append_pair("cloudshell_tutorial", "./tutorial.md")
            .append_pair("cloudshell_working_dir", &self.name)
            .append_pair("open_in_editor", "main.tf");
        link
    }
}
