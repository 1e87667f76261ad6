// SPDX-License-Identifier: Apache-2.0

//! Registry that resolves provider names to solver providers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::configuration::Configuration;
use crate::constraint_solver::ConstraintSolver;
use crate::constraints_error::ConstraintsError;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::provider::{native_z3_legacy_provider, NativeZ3SolverProvider, SolverProvider};

/// Configuration key naming the provider for
/// [`ConstraintSolverFactory::create_solver_from_config`].
pub const SOLVER_NAME_KEY: &str = "symbolic.dp";

static GLOBAL_FACTORY: Lazy<ConstraintSolverFactory> =
    Lazy::new(ConstraintSolverFactory::with_default_providers);

pub struct ConstraintSolverFactory {
    providers: Vec<Box<dyn SolverProvider>>,
    // Name -> index into `providers`.
    by_name: HashMap<&'static str, usize>,
}

impl ConstraintSolverFactory {
    /// An empty registry.
    pub fn new() -> Self {
        ConstraintSolverFactory {
            providers: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// A registry holding the Z3 provider (`z3`, `Z3`) and its deprecated
    /// `NativeZ3` alias.
    pub fn with_default_providers() -> Self {
        let mut factory = ConstraintSolverFactory::new();
        factory.register(Box::new(NativeZ3SolverProvider));
        factory.register(Box::new(native_z3_legacy_provider()));
        factory
    }

    /// Shared registry with the default providers, built on first use.
    pub fn global() -> &'static ConstraintSolverFactory {
        &GLOBAL_FACTORY
    }

    /// Adds `provider` under all of its names. A name that is already taken
    /// is re-pointed at the new provider.
    pub fn register(&mut self, provider: Box<dyn SolverProvider>) {
        let index = self.providers.len();
        for name in provider.names() {
            if let Some(previous) = self.by_name.insert(*name, index) {
                log::warn!(
                    "solver name {:?} re-registered; replacing provider #{} with #{}",
                    name,
                    previous,
                    index
                );
            }
        }
        self.providers.push(provider);
    }

    pub fn has_solver(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn provider(&self, name: &str) -> Option<&dyn SolverProvider> {
        self.by_name
            .get(name)
            .map(|&index| self.providers[index].as_ref())
    }

    /// Looks `name` up (case-sensitively) and builds a solver from `config`,
    /// logging recoverable configuration problems.
    pub fn create_solver(
        &self,
        name: &str,
        config: &Configuration,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError> {
        self.create_solver_with_diagnostics(name, config, &LogSink)
    }

    pub fn create_solver_with_diagnostics(
        &self,
        name: &str,
        config: &Configuration,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError> {
        let provider = self
            .provider(name)
            .ok_or_else(|| ConstraintsError::UnknownSolver(name.to_string()))?;
        log::info!("creating solver {:?}", name);
        provider.create_solver(config, diagnostics)
    }

    /// Builds the solver named by the `symbolic.dp` key of `config`.
    pub fn create_solver_from_config(
        &self,
        config: &Configuration,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError> {
        let name = config
            .get(SOLVER_NAME_KEY)
            .ok_or_else(|| ConstraintsError::MissingProperty(SOLVER_NAME_KEY.to_string()))?;
        self.create_solver(name, config)
    }
}

impl Default for ConstraintSolverFactory {
    fn default() -> Self {
        Self::with_default_providers()
    }
}
