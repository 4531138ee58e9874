//! End-to-end rendering pipeline tests.

use anyhow::Result;
use std::fs;

use tfgen::core::TfgenError;
use tfgen::example::Example;

/// Write `contents` to a template file in a fresh temp dir and point the
/// example at it.
fn with_template(example: &mut Example, contents: &str) -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(format!("{}.tf.tmpl", example.name));
    fs::write(&path, contents)?;
    example.config_path = Some(path.to_string_lossy().into_owned());
    Ok(dir)
}

#[test]
fn test_renders_all_three_variants() -> Result<()> {
    let yaml = r#"
name: network_basic
primary_resource_id: basic
vars:
  network: my-vpc
test_env_vars:
  project: PROJECT_NAME
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;
    example.validate("Network")?;

    let _dir = with_template(
        &mut example,
        "network = {{vars.network}}\nproject = {{test_env_vars.project}}\n",
    )?;
    example.render()?;

    let doc = example.doc_hcl_text.as_deref().expect("doc variant rendered");
    assert!(doc.contains("network = my-vpc"));
    assert!(doc.contains("project = my-project-name"));

    let test = example.test_hcl_text.as_deref().expect("test variant rendered");
    assert!(test.contains("network = tf-test-my-vpc%{random_suffix}"));
    assert!(test.contains("project = %{project}"));

    let oics = example.oics_hcl_text.as_deref().expect("oics variant rendered");
    assert!(oics.contains("network = my-vpc-${local.name_suffix}"));

    Ok(())
}

#[test]
fn test_vars_unchanged_after_render() -> Result<()> {
    let yaml = r#"
name: network_basic
primary_resource_id: basic
vars:
  network: my-vpc
test_env_vars:
  project: PROJECT_NAME
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;
    let vars_before = example.vars.clone();
    let env_before = example.test_env_vars.clone();

    let _dir = with_template(&mut example, "network = {{vars.network}}\n")?;
    example.render()?;

    assert_eq!(example.vars, vars_before);
    assert_eq!(example.test_env_vars, env_before);
    Ok(())
}

#[test]
fn test_region_tags_and_paths_per_variant() -> Result<()> {
    let yaml = r#"
name: ssl_cert
primary_resource_id: default
vars:
  cert_name: my-cert
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;

    let template = "# [START compute_ssl_cert]\n\
                    resource \"google_compute_ssl_certificate\" \"default\" {\n  \
                    name        = \"{{vars.cert_name}}\"\n  \
                    private_key = file(\"path/to/private.key\")\n  \
                    certificate = file(\"path/to/certificate.crt\")\n\
                    }\n\
                    # [END compute_ssl_cert]\n";
    let _dir = with_template(&mut example, template)?;
    example.render()?;

    let doc = example.doc_hcl_text.as_deref().unwrap();
    assert!(!doc.contains("[START"));
    assert!(!doc.contains("[END"));
    assert!(doc.contains("../static/ssl_cert/test.key"));
    assert!(doc.contains("../static/ssl_cert/test.crt"));

    let test = example.test_hcl_text.as_deref().unwrap();
    assert!(!test.contains("[START"));
    assert!(test.contains("test-fixtures/test.key"));
    assert!(test.contains("test-fixtures/test.crt"));
    assert!(test.contains("name        = \"tf-test-my-cert%{random_suffix}\""));

    let oics = example.oics_hcl_text.as_deref().unwrap();
    assert!(oics.contains("../static/ssl_cert/test.key"));
    assert!(oics.contains("name        = \"my-cert-${local.name_suffix}\""));

    Ok(())
}

#[test]
fn test_overrides_flow_through() -> Result<()> {
    let yaml = r#"
name: network_shared
primary_resource_id: shared
vars:
  network: my-vpc
  zone: us-central1-a
test_vars_overrides:
  network: acctest.BootstrapSharedTestNetwork(t, "example")
oics_vars_overrides:
  zone: us-east1-b
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;

    let _dir = with_template(&mut example, "network = {{vars.network}}\nzone = {{vars.zone}}\n")?;
    example.render()?;

    let test = example.test_hcl_text.as_deref().unwrap();
    assert!(test.contains("network = %{network}"));
    assert!(test.contains("zone = tf-test-us-central1-a%{random_suffix}"));

    let oics = example.oics_hcl_text.as_deref().unwrap();
    assert!(oics.contains("network = my-vpc-${local.name_suffix}"));
    assert!(oics.contains("zone = us-east1-b"));

    // Docs are untouched by either override table
    let doc = example.doc_hcl_text.as_deref().unwrap();
    assert!(doc.contains("network = my-vpc"));
    assert!(doc.contains("zone = us-central1-a"));

    Ok(())
}

#[test]
fn test_undeclared_reference_aborts_before_any_output() -> Result<()> {
    let yaml = r#"
name: network_basic
primary_resource_id: basic
vars:
  network: my-vpc
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;

    let _dir = with_template(&mut example, "subnet = {{vars.subnet_name}}\n")?;
    let err = example.render().unwrap_err();

    match err {
        TfgenError::UndeclaredVariable { variable, mapping, .. } => {
            assert_eq!(variable, "subnet_name");
            assert_eq!(mapping, "vars");
        }
        other => panic!("expected UndeclaredVariable, got {other:?}"),
    }

    assert!(example.doc_hcl_text.is_none());
    assert!(example.test_hcl_text.is_none());
    assert!(example.oics_hcl_text.is_none());
    Ok(())
}

#[test]
fn test_missing_template_file_is_fatal() -> Result<()> {
    let yaml = r#"
name: nonexistent_example
primary_resource_id: basic
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;
    let err = example.render().unwrap_err();

    match err {
        TfgenError::TemplateRead { path, .. } => {
            assert!(path.ends_with("nonexistent_example.tf.tmpl"));
        }
        other => panic!("expected TemplateRead, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_conditional_template_with_casing_filter() -> Result<()> {
    let yaml = r#"
name: instance_beta
primary_resource_id: beta_instance
min_version: beta
vars:
  instance_name: my-instance
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;

    let template = "{% if min_version %}provider = google-beta\n{% endif %}\
                    resource \"google_compute_instance\" \"{{ primary_resource_id }}\" {\n  \
                    name = \"{{ vars.instance_name }}\"\n  \
                    label = \"{{ name | camelize }}\"\n\
                    }\n";
    let _dir = with_template(&mut example, template)?;
    example.render()?;

    let doc = example.doc_hcl_text.as_deref().unwrap();
    assert!(doc.contains("provider = google-beta"));
    assert!(doc.contains("resource \"google_compute_instance\" \"beta_instance\""));
    assert!(doc.contains("label = \"instanceBeta\""));
    Ok(())
}

#[test]
fn test_output_ends_with_single_newline() -> Result<()> {
    let yaml = r#"
name: trailing
primary_resource_id: basic
vars:
  network: my-vpc
"#;
    let mut example: Example = serde_yaml::from_str(yaml)?;

    // No trailing newline in the template, and a variant with one blank line
    let _dir = with_template(&mut example, "network = {{vars.network}}\n\n")?;
    example.render()?;

    for text in [
        example.doc_hcl_text.as_deref().unwrap(),
        example.test_hcl_text.as_deref().unwrap(),
        example.oics_hcl_text.as_deref().unwrap(),
    ] {
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
    Ok(())
}
