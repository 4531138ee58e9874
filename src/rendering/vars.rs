//! Per-target variable transformation.
//!
//! Each rendering target sees a different view of the example's declared
//! variables. All derivations here are pure: they take the author-declared
//! mappings and return a fresh mapping, so the example's own state is never
//! touched and consecutive variants always start from the same baseline.
//!
//! For `vars["network"] = "my-vpc"`:
//! - docs get `my-vpc` verbatim
//! - tests get `tf-test-my-vpc%{random_suffix}`, where the suffix token is
//!   filled with a random string by the test harness
//! - OiCS gets `my-vpc-${local.name_suffix}` for uniqueness in the shared
//!   demo project

use std::collections::BTreeMap;

use crate::example::TestEnvVar;

/// Prefix for test values containing a hyphen.
const TEST_PREFIX_HYPHENATED: &str = "tf-test-";
/// Prefix for test values containing an underscore.
const TEST_PREFIX_UNDERSCORED: &str = "tf_test_";

/// Maximum length of a mangled test value before the suffix token.
///
/// The random suffix is 10 characters and standard resource name length is
/// at most 64, so the stored prefix keeps 54.
const MAX_TEST_VALUE_LEN: usize = 54;

/// Placeholder token the test harness replaces with a per-run random string.
const RANDOM_SUFFIX_TOKEN: &str = "%{random_suffix}";

/// Local-name suffix appended to OiCS values for uniqueness in the shared
/// demo environment.
const OICS_NAME_SUFFIX: &str = "-${local.name_suffix}";

/// Documentation view of the test-env-var mapping: every symbolic category
/// is replaced with its fixed human-readable literal.
pub fn doc_test_env_vars(test_env_vars: &BTreeMap<String, TestEnvVar>) -> BTreeMap<String, String> {
    test_env_vars
        .iter()
        .map(|(name, category)| (name.clone(), category.doc_default().to_string()))
        .collect()
}

/// Test view of the plain variable mapping.
///
/// Values are mangled to avoid resource-name collisions across parallel
/// test runs: hyphenated values get a `tf-test-` prefix, underscored values
/// `tf_test_`, anything else (descriptions and the like) is left alone. The
/// result is truncated to 54 characters and the random-suffix token is
/// appended unconditionally. Variables with a declared override become a
/// `%{name}` placeholder instead, with the override expression supplying
/// the value in the test context.
pub fn test_vars(
    vars: &BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    vars.iter()
        .map(|(name, value)| {
            let derived = if overrides.contains_key(name) {
                format!("%{{{name}}}")
            } else {
                format!("{}{}", mangle_test_value(value), RANDOM_SUFFIX_TOKEN)
            };
            (name.clone(), derived)
        })
        .collect()
}

/// Test view of the test-env-var mapping: every variable becomes a
/// `%{name}` placeholder. Real values are injected by the test harness from
/// environment state at run time, never hardcoded.
pub fn test_test_env_vars(
    test_env_vars: &BTreeMap<String, TestEnvVar>,
) -> BTreeMap<String, String> {
    test_env_vars.keys().map(|name| (name.clone(), format!("%{{{name}}}"))).collect()
}

/// OiCS view of the plain variable mapping: values get the local-name
/// suffix, overridden variables take their literal override verbatim.
pub fn oics_vars(
    vars: &BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    vars.iter()
        .map(|(name, value)| {
            let derived = match overrides.get(name) {
                Some(literal) => literal.clone(),
                None => format!("{value}{OICS_NAME_SUFFIX}"),
            };
            (name.clone(), derived)
        })
        .collect()
}

fn mangle_test_value(value: &str) -> String {
    let mut mangled = if value.contains('-') {
        format!("{TEST_PREFIX_HYPHENATED}{value}")
    } else if value.contains('_') {
        format!("{TEST_PREFIX_UNDERSCORED}{value}")
    } else {
        // Some vars like descriptions shouldn't have a prefix
        value.to_string()
    };
    if mangled.len() > MAX_TEST_VALUE_LEN {
        let mut cut = MAX_TEST_VALUE_LEN;
        while !mangled.is_char_boundary(cut) {
            cut -= 1;
        }
        mangled.truncate(cut);
    }
    mangled
}
