//! Pattern-based rewrites applied to rendered template output.
//!
//! Rendered output is treated as opaque text; these transforms run in a
//! fixed order on every variant:
//!
//! 1. collapse a trailing blank line to a single line terminator
//! 2. strip paired region-marker lines (`# [region_tag]`) used for
//!    documentation highlighting
//! 3. swap placeholder asset paths for the variant's real paths
//!
//! Path substitution must follow region-tag stripping so a replacement
//! never matches text inside a removed marker.

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder asset paths rewritten for documentation and OiCS output,
/// pointing at the shared static assets of the docs-examples repository.
const EXAMPLE_PATH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("../static/img/header-logo.png", "../static/header-logo.png"),
    ("path/to/private.key", "../static/ssl_cert/test.key"),
    ("path/to/id_rsa.pub", "../static/ssh_rsa.pub"),
    ("path/to/certificate.crt", "../static/ssl_cert/test.crt"),
];

/// Placeholder asset paths rewritten for acceptance-test output, pointing
/// at per-test fixture files. Includes the zip-path placeholder and the
/// verified-domain substitution that have no documentation equivalent.
const TEST_PATH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("../static/img/header-logo.png", "test-fixtures/header-logo.png"),
    ("path/to/private.key", "test-fixtures/test.key"),
    ("path/to/certificate.crt", "test-fixtures/test.crt"),
    ("path/to/index.zip", "%{zip_path}"),
    ("verified-domain.com", "tf-test-domain%{random_suffix}.gcp.tfacc.hashicorptest.com"),
    ("path/to/id_rsa.pub", "test-fixtures/ssh_rsa.pub"),
];

fn trailing_blank_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\n$").expect("trailing blank line pattern is valid"))
}

fn region_tag_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"# \[[a-zA-Z_ ]+\]\n").expect("region tag pattern is valid"))
}

fn region_tag_eol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n# \[[a-zA-Z_ ]+\]").expect("region tag pattern is valid"))
}

/// Collapse two consecutive line terminators at end-of-text to one.
pub fn collapse_trailing_blank_line(text: &str) -> String {
    trailing_blank_line_re().replace(text, "\n").into_owned()
}

/// Strip region-marker lines, both the marker line itself and a marker at
/// end-of-line. Idempotent: re-applying leaves the text unchanged.
pub fn strip_region_tags(text: &str) -> String {
    let stripped = region_tag_line_re().replace_all(text, "");
    region_tag_eol_re().replace_all(&stripped, "").into_owned()
}

/// Rewrite placeholder asset paths for documentation and OiCS output.
pub fn substitute_example_paths(text: &str) -> String {
    substitute(text, EXAMPLE_PATH_SUBSTITUTIONS)
}

/// Rewrite placeholder asset paths for acceptance-test output.
pub fn substitute_test_paths(text: &str) -> String {
    substitute(text, TEST_PATH_SUBSTITUTIONS)
}

fn substitute(text: &str, table: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    for (placeholder, real) in table {
        out = out.replace(placeholder, real);
    }
    out
}
