// SPDX-License-Identifier: Apache-2.0

//! Translation of the flat `z3.*` configuration keys into the parameters
//! handed to [`crate::NativeZ3Solver::new`].

use std::collections::HashMap;

use crate::configuration::Configuration;
use crate::constraints_error::ConstraintsError;
use crate::diagnostics::DiagnosticSink;

pub const OPTIONS_KEY: &str = "z3.options";
pub const TIMEOUT_KEY: &str = "z3.timeout";

/// Timeout value meaning "no limit was configured".
pub const NO_TIMEOUT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Z3SolverParams {
    /// Milliseconds; [`NO_TIMEOUT`] when unspecified.
    pub timeout: i32,
    pub options: HashMap<String, String>,
}

impl Default for Z3SolverParams {
    fn default() -> Self {
        Z3SolverParams {
            timeout: NO_TIMEOUT,
            options: HashMap::new(),
        }
    }
}

/// Splits a `;`-separated list of `key=value` pairs.
///
/// Entries that do not split into exactly two parts around a single `=`, or
/// whose value is empty, are reported to `sink` and dropped; the remaining
/// entries are still returned. An empty key is kept as is. A repeated key
/// keeps its last value.
pub fn parse_option_list(text: &str, sink: &dyn DiagnosticSink) -> HashMap<String, String> {
    let mut options = HashMap::new();
    for entry in text.trim().split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let parts: Vec<&str> = entry.split('=').collect();
        let (key, value) = match parts.as_slice() {
            [key, value] if !value.trim().is_empty() => (key.trim(), value.trim()),
            _ => {
                sink.warn(&format!("{} is not a valid option to z3", entry));
                continue;
            }
        };
        options.insert(key.to_string(), value.to_string());
    }
    options
}

/// Parses the decimal `z3.timeout` value. Unlike option entries a malformed
/// timeout is an error for the caller.
pub fn parse_timeout(text: &str) -> Result<i32, ConstraintsError> {
    text.parse::<i32>()
        .map_err(|source| ConstraintsError::InvalidTimeout {
            value: text.to_string(),
            source,
        })
}

pub fn parse_z3_params(
    config: &Configuration,
    sink: &dyn DiagnosticSink,
) -> Result<Z3SolverParams, ConstraintsError> {
    let mut params = Z3SolverParams::default();
    if let Some(text) = config.get(OPTIONS_KEY) {
        params.options = parse_option_list(text, sink);
    }
    if let Some(text) = config.get(TIMEOUT_KEY) {
        params.timeout = parse_timeout(text)?;
    }
    log::debug!(
        "parsed z3 params: timeout={} options={:?}",
        params.timeout,
        params.options
    );
    Ok(params)
}
