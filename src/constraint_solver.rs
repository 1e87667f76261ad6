// SPDX-License-Identifier: Apache-2.0

//! The handle returned by every provider.

use std::collections::HashMap;

use z3::ast::Bool;
use z3::{Context, Model};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Sat,
    Unsat,
    /// Z3 answered `unknown`, e.g. because the timeout elapsed.
    DontKnow,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Sat => "SAT",
            SolveStatus::Unsat => "UNSAT",
            SolveStatus::DontKnow => "DONT_KNOW",
        };
        write!(f, "{}", s)
    }
}

pub enum SolveResult<'ctx> {
    /// Satisfiable, with the model Z3 produced.
    Sat(Model<'ctx>),
    Unsat,
    DontKnow,
}

impl<'ctx> SolveResult<'ctx> {
    pub fn status(&self) -> SolveStatus {
        match self {
            SolveResult::Sat(_) => SolveStatus::Sat,
            SolveResult::Unsat => SolveStatus::Unsat,
            SolveResult::DontKnow => SolveStatus::DontKnow,
        }
    }

    pub fn model(&self) -> Option<&Model<'ctx>> {
        match self {
            SolveResult::Sat(model) => Some(model),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SolveResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolveResult({})", self.status())
    }
}

/// Opaque solver handle.
///
/// The handle itself is plain data; every query runs on a caller-owned Z3
/// [`Context`] obtained from [`ConstraintSolver::new_context`], so one handle
/// can serve several threads as long as each uses its own context.
pub trait ConstraintSolver: Send + Sync {
    /// Milliseconds forwarded to Z3, `-1` when unspecified.
    fn timeout(&self) -> i32;

    /// Options forwarded to Z3's configuration.
    fn options(&self) -> &HashMap<String, String>;

    /// Creates a Z3 context configured with this solver's options.
    fn new_context(&self) -> Context;

    /// Checks `assertion` for satisfiability on `ctx`.
    fn solve<'ctx>(&self, ctx: &'ctx Context, assertion: &Bool<'ctx>) -> SolveResult<'ctx>;

    /// Checks the declarations and assertions of an SMT-LIB2 `script` on
    /// `ctx`. Constants declared by the script are the same terms as
    /// `new_const` terms of equal name and sort, so the model can be read back
    /// through typed handles.
    fn solve_smtlib<'ctx>(&self, ctx: &'ctx Context, script: &str) -> SolveResult<'ctx>;
}
