//! Identifier-casing helpers and their Tera filter wrappers.
//!
//! Example templates work with lower snake_case identifiers (resource and
//! variable names) but occasionally need other casings, e.g. a camelCase
//! field name inside a JSON policy body. These helpers are the fixed filter
//! library registered on every template execution:
//!
//! - `camelize`: `my_network` → `myNetwork` (`first="upper"` for `MyNetwork`)
//! - `underscore`: `MyNetwork` → `my_network`
//! - `dasherize`: `my_network` → `my-network`
//! - `titlecase`: `my_network` → `My Network`
//!
//! The plain functions are also used outside templates, e.g. for generated
//! test function names.

use std::collections::HashMap;
use tera::Value;

/// Casing of the first character produced by [`camelize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFirst {
    Lower,
    Upper,
}

/// Convert a snake_case or kebab-case identifier to camel case.
pub fn camelize(s: &str, first: CaseFirst) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.chars() {
        if ch == '_' || ch == '-' {
            upper_next = true;
            continue;
        }
        if out.is_empty() {
            match first {
                CaseFirst::Lower => out.extend(ch.to_lowercase()),
                CaseFirst::Upper => out.extend(ch.to_uppercase()),
            }
        } else if upper_next {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        upper_next = false;
    }
    out
}

/// Convert a camelCase or kebab-case identifier to snake_case.
pub fn underscore(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch == '-' {
            out.push('_');
        } else if ch.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a snake_case identifier to kebab-case.
pub fn dasherize(s: &str) -> String {
    underscore(s).replace('_', "-")
}

/// Convert a snake_case identifier to space-separated Title Case.
pub fn titlecase(s: &str) -> String {
    underscore(s)
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn expect_string<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("`{filter}` filter expects a string value")))
}

/// Tera filter: `{{ vars.name | camelize }}` or `{{ vars.name | camelize(first="upper") }}`.
pub fn camelize_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = expect_string(value, "camelize")?;
    let first = match args.get("first").and_then(Value::as_str) {
        Some("upper") => CaseFirst::Upper,
        Some("lower") | None => CaseFirst::Lower,
        Some(other) => {
            return Err(tera::Error::msg(format!(
                "`camelize` filter: unknown `first` argument `{other}` (expected `lower` or `upper`)"
            )));
        }
    };
    Ok(Value::String(camelize(s, first)))
}

/// Tera filter: `{{ vars.name | underscore }}`.
pub fn underscore_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(underscore(expect_string(value, "underscore")?)))
}

/// Tera filter: `{{ vars.name | dasherize }}`.
pub fn dasherize_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(dasherize(expect_string(value, "dasherize")?)))
}

/// Tera filter: `{{ vars.name | titlecase }}`.
pub fn titlecase_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(titlecase(expect_string(value, "titlecase")?)))
}
