// SPDX-License-Identifier: Apache-2.0

use std::num::ParseIntError;

#[derive(Debug)]
pub enum ConstraintsError {
    /// The `z3.timeout` value is not a base-10 32-bit integer.
    InvalidTimeout {
        value: String,
        source: ParseIntError,
    },
    /// No provider is registered under the requested (case-sensitive) name.
    UnknownSolver(String),
    /// A required configuration key is absent.
    MissingProperty(String),
    /// Configuration text is not valid TOML.
    InvalidToml { source: toml::de::Error },
    /// Configuration text parsed but cannot be flattened into properties.
    InvalidConfiguration(String),
}

impl std::fmt::Display for ConstraintsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintsError::InvalidTimeout { value, source } => {
                write!(f, "constraints error: invalid timeout {:?}: {}", value, source)
            }
            ConstraintsError::UnknownSolver(name) => {
                write!(f, "constraints error: no solver registered as {:?}", name)
            }
            ConstraintsError::MissingProperty(key) => {
                write!(f, "constraints error: missing configuration property {:?}", key)
            }
            ConstraintsError::InvalidToml { source } => {
                write!(f, "constraints error: invalid TOML configuration: {}", source)
            }
            ConstraintsError::InvalidConfiguration(msg) => {
                write!(f, "constraints error: invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConstraintsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConstraintsError::InvalidTimeout { source, .. } => Some(source),
            ConstraintsError::InvalidToml { source } => Some(source),
            _ => None,
        }
    }
}
