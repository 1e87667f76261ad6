// SPDX-License-Identifier: Apache-2.0

//! Named solver factories that the [`crate::ConstraintSolverFactory`] looks up.

use crate::configuration::Configuration;
use crate::constraint_solver::ConstraintSolver;
use crate::constraints_error::ConstraintsError;
use crate::diagnostics::DiagnosticSink;
use crate::native_z3::NativeZ3Solver;
use crate::z3_options::parse_z3_params;

pub trait SolverProvider: Send + Sync {
    /// Case-sensitive names this provider answers to. Never empty.
    fn names(&self) -> &[&'static str];

    /// Builds a solver from `config` without modifying it. Recoverable
    /// configuration problems are reported to `diagnostics`.
    fn create_solver(
        &self,
        config: &Configuration,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError>;
}

/// Canonical provider for the native Z3 solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeZ3SolverProvider;

impl SolverProvider for NativeZ3SolverProvider {
    fn names(&self) -> &[&'static str] {
        &["z3", "Z3"]
    }

    fn create_solver(
        &self,
        config: &Configuration,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError> {
        let params = parse_z3_params(config, diagnostics)?;
        Ok(Box::new(NativeZ3Solver::from_params(params)))
    }
}

/// Exposes `inner` under a different set of (deprecated) names and forwards
/// construction to it unchanged.
#[derive(Debug, Clone)]
pub struct DeprecatedAlias<P> {
    names: &'static [&'static str],
    inner: P,
}

impl<P: SolverProvider> DeprecatedAlias<P> {
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn new(names: &'static [&'static str], inner: P) -> Self {
        assert!(!names.is_empty(), "a provider alias needs at least one name");
        DeprecatedAlias { names, inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: SolverProvider> SolverProvider for DeprecatedAlias<P> {
    fn names(&self) -> &[&'static str] {
        self.names
    }

    fn create_solver(
        &self,
        config: &Configuration,
        diagnostics: &dyn DiagnosticSink,
    ) -> Result<Box<dyn ConstraintSolver>, ConstraintsError> {
        log::debug!(
            "solver requested through deprecated name(s) {:?}; canonical name(s) {:?}",
            self.names,
            self.inner.names()
        );
        self.inner.create_solver(config, diagnostics)
    }
}

/// The legacy `NativeZ3` name for [`NativeZ3SolverProvider`].
pub fn native_z3_legacy_provider() -> DeprecatedAlias<NativeZ3SolverProvider> {
    DeprecatedAlias::new(&["NativeZ3"], NativeZ3SolverProvider)
}
