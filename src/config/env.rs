//! Environment snapshot with lenient typed lookups
//!
//! Typed lookups never fail: a value that does not parse is treated as if it
//! were absent and the caller's default is returned.

use std::collections::HashMap;
use std::str::FromStr;

/// Immutable copy of environment variables taken once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value for `key` verbatim, including an empty value, else `default`.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Parse `key` with [`FromStr`], falling back to `default` when the
    /// variable is unset or malformed.
    pub fn parse_or<T: FromStr>(&self, key: &str, default: T) -> T {
        self.get(key).and_then(|raw| raw.parse().ok()).unwrap_or(default)
    }

    /// Boolean lookup using [`parse_bool_literal`], falling back to `default`.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(|raw| parse_bool_literal(raw).ok()).unwrap_or(default)
    }
}

impl From<HashMap<String, String>> for EnvSnapshot {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Parse the boolean spellings accepted for both flags and environment values.
pub fn parse_bool_literal(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}
