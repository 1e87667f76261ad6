// SPDX-License-Identifier: Apache-2.0

//! Flat string-keyed configuration consumed by solver providers.

use std::collections::HashMap;

use crate::constraints_error::ConstraintsError;

/// Unordered `key -> value` property map, e.g. `z3.options`, `z3.timeout`.
///
/// Providers only ever borrow a `Configuration`; solver construction never
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    properties: HashMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used while assembling a configuration.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses properties-file text, one entry per line.
    ///
    /// The key ends at the first `=`, `:` or whitespace; whitespace around a
    /// single `=` or `:` belongs to the separator, so `key=value`,
    /// `key: value` and `key value` are equivalent. `#` and `!` start comment
    /// lines and blank lines are ignored. A line with only a key defines it
    /// with an empty value. Backslash escapes and line continuations are not
    /// interpreted.
    pub fn from_properties_str(text: &str) -> Self {
        let mut config = Configuration::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let key_end = line
                .find(|c: char| c == '=' || c == ':' || c.is_whitespace())
                .unwrap_or(line.len());
            let rest = line[key_end..].trim_start();
            let value = rest
                .strip_prefix(|c: char| c == '=' || c == ':')
                .unwrap_or(rest);
            config.set(&line[..key_end], value.trim());
        }
        config
    }

    /// Parses TOML text, flattening nested tables into dotted keys so that
    ///
    /// ```toml
    /// [z3]
    /// timeout = 150
    /// ```
    ///
    /// yields `z3.timeout = "150"`.
    pub fn from_toml_str(text: &str) -> Result<Self, ConstraintsError> {
        let table: toml::Table = text
            .parse()
            .map_err(|source| ConstraintsError::InvalidToml { source })?;
        let mut config = Configuration::new();
        flatten_toml_table("", &table, &mut config)?;
        Ok(config)
    }
}

fn flatten_toml_table(
    prefix: &str,
    table: &toml::Table,
    config: &mut Configuration,
) -> Result<(), ConstraintsError> {
    for (key, value) in table {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            toml::Value::Table(nested) => flatten_toml_table(&full_key, nested, config)?,
            toml::Value::String(s) => config.set(&full_key, s),
            toml::Value::Integer(i) => config.set(&full_key, &i.to_string()),
            toml::Value::Float(f) => config.set(&full_key, &f.to_string()),
            toml::Value::Boolean(b) => config.set(&full_key, &b.to_string()),
            toml::Value::Datetime(d) => config.set(&full_key, &d.to_string()),
            toml::Value::Array(_) => {
                return Err(ConstraintsError::InvalidConfiguration(format!(
                    "array values are not supported for key `{}`",
                    full_key
                )))
            }
        }
    }
    Ok(())
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Configuration {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
