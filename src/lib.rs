// SPDX-License-Identifier: Apache-2.0

//! Exposes the native Z3 SMT solver through a name-keyed provider registry.
//!
//! A [`ConstraintSolverFactory`] maps provider names (`"z3"`, `"Z3"`, and the
//! deprecated `"NativeZ3"`) to [`SolverProvider`]s. A provider turns a flat
//! [`Configuration`] into a solver handle; for Z3 the keys `z3.options` and
//! `z3.timeout` are parsed and forwarded to [`NativeZ3Solver::new`].

pub mod configuration;
pub mod constraint_solver;
pub mod constraints_error;
pub mod diagnostics;
pub mod factory;
pub mod native_z3;
pub mod provider;
pub mod z3_options;

pub use configuration::Configuration;
pub use constraint_solver::{ConstraintSolver, SolveResult, SolveStatus};
pub use constraints_error::ConstraintsError;
pub use diagnostics::{CollectingSink, DiagnosticSink, LogSink};
pub use factory::{ConstraintSolverFactory, SOLVER_NAME_KEY};
pub use native_z3::NativeZ3Solver;
pub use provider::{
    native_z3_legacy_provider, DeprecatedAlias, NativeZ3SolverProvider, SolverProvider,
};
pub use z3_options::{parse_z3_params, Z3SolverParams, NO_TIMEOUT, OPTIONS_KEY, TIMEOUT_KEY};

// Callers build assertions with the same `z3` crate version the handle uses.
pub use z3;
