//! Tests for per-target variable transformation.

use std::collections::BTreeMap;

use super::vars::{doc_test_env_vars, oics_vars, test_test_env_vars, test_vars};
use crate::example::TestEnvVar;

fn vars_of(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_mangling_prefixes() {
    let base = vars_of(&[
        ("network", "my-vpc"),
        ("subnet", "my_network"),
        ("description", "description text"),
    ]);
    let derived = test_vars(&base, &BTreeMap::new());

    assert_eq!(derived["network"], "tf-test-my-vpc%{random_suffix}");
    assert_eq!(derived["subnet"], "tf_test_my_network%{random_suffix}");
    // No identifier separator, no prefix
    assert_eq!(derived["description"], "description text%{random_suffix}");
}

#[test]
fn test_mangling_truncates_to_54_chars() {
    let long_value = "a-".repeat(40);
    let base = vars_of(&[("name", &long_value)]);
    let derived = test_vars(&base, &BTreeMap::new());

    let value = &derived["name"];
    assert!(value.ends_with("%{random_suffix}"));
    let prefix = value.strip_suffix("%{random_suffix}").unwrap();
    assert_eq!(prefix.len(), 54);
    assert_eq!(value.len(), 54 + "%{random_suffix}".len());
    assert!(prefix.starts_with("tf-test-a-a-"));
}

#[test]
fn test_mangling_keeps_short_values_untruncated() {
    let base = vars_of(&[("name", "short")]);
    let derived = test_vars(&base, &BTreeMap::new());
    assert_eq!(derived["name"], "short%{random_suffix}");
}

#[test]
fn test_overrides_replace_mangling() {
    let base = vars_of(&[("network", "my-vpc"), ("zone", "us-west1-a")]);
    let overrides = vars_of(&[("network", "acctest.BootstrapSharedTestNetwork(t)")]);
    let derived = test_vars(&base, &overrides);

    // Overridden variable gets a placeholder referencing its own name, the
    // override expression supplies the value at run time
    assert_eq!(derived["network"], "%{network}");
    assert_eq!(derived["zone"], "tf-test-us-west1-a%{random_suffix}");
}

#[test]
fn test_env_vars_become_placeholders() {
    let mut env = BTreeMap::new();
    env.insert("project".to_string(), TestEnvVar::ProjectName);
    env.insert("region".to_string(), TestEnvVar::Region);

    let derived = test_test_env_vars(&env);
    assert_eq!(derived["project"], "%{project}");
    assert_eq!(derived["region"], "%{region}");
}

#[test]
fn test_doc_defaults_lookup() {
    let mut env = BTreeMap::new();
    env.insert("project".to_string(), TestEnvVar::ProjectName);
    env.insert("region".to_string(), TestEnvVar::Region);
    env.insert("billing_account".to_string(), TestEnvVar::BillingAcct);

    let derived = doc_test_env_vars(&env);
    assert_eq!(derived["project"], "my-project-name");
    assert_eq!(derived["region"], "us-west1");
    assert_eq!(derived["billing_account"], "000000-0000000-0000000-000000");
}

#[test]
fn test_oics_suffixing_and_overrides() {
    let base = vars_of(&[("network", "my-vpc"), ("zone", "us-central1-a")]);
    let overrides = vars_of(&[("zone", "us-east1-b")]);
    let derived = oics_vars(&base, &overrides);

    assert_eq!(derived["network"], "my-vpc-${local.name_suffix}");
    assert_eq!(derived["zone"], "us-east1-b");
}

#[test]
fn test_derivations_leave_base_untouched() {
    let base = vars_of(&[("network", "my-vpc")]);
    let snapshot = base.clone();

    let _ = test_vars(&base, &BTreeMap::new());
    let _ = oics_vars(&base, &BTreeMap::new());

    assert_eq!(base, snapshot);
}
