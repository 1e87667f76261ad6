// SPDX-License-Identifier: Apache-2.0

//! Solver handle backed by the native Z3 library.

use std::collections::HashMap;

use z3::ast::Bool;
use z3::{Config, Context, Params, SatResult, Solver};

use crate::constraint_solver::{ConstraintSolver, SolveResult};
use crate::z3_options::{Z3SolverParams, NO_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeZ3Solver {
    timeout: i32,
    options: HashMap<String, String>,
}

impl NativeZ3Solver {
    /// `timeout` is in milliseconds; zero or negative means "no limit".
    pub fn new(timeout: i32, options: HashMap<String, String>) -> Self {
        log::debug!(
            "creating native z3 solver; timeout: {} options: {:?}",
            timeout,
            options
        );
        NativeZ3Solver { timeout, options }
    }

    pub fn from_params(params: Z3SolverParams) -> Self {
        Self::new(params.timeout, params.options)
    }

    fn make_config(&self) -> Config {
        let mut cfg = Config::new();
        cfg.set_model_generation(true);
        for (key, value) in self.options.iter() {
            cfg.set_param_value(key, value);
        }
        cfg
    }

    // A fresh solver per query; Z3 solvers cannot be reset to empty.
    fn make_solver<'ctx>(&self, ctx: &'ctx Context) -> Solver<'ctx> {
        let solver = Solver::new(ctx);
        if self.timeout > 0 {
            let mut params = Params::new(ctx);
            params.set_u32("timeout", self.timeout as u32);
            solver.set_params(&params);
        }
        solver
    }

    fn check<'ctx>(&self, solver: &Solver<'ctx>) -> SolveResult<'ctx> {
        match solver.check() {
            SatResult::Sat => match solver.get_model() {
                Some(model) => SolveResult::Sat(model),
                None => {
                    log::warn!("z3 reported sat but produced no model");
                    SolveResult::DontKnow
                }
            },
            SatResult::Unsat => SolveResult::Unsat,
            SatResult::Unknown => {
                log::info!("z3 returned unknown; timeout: {}", self.timeout);
                SolveResult::DontKnow
            }
        }
    }
}

impl Default for NativeZ3Solver {
    fn default() -> Self {
        NativeZ3Solver::new(NO_TIMEOUT, HashMap::new())
    }
}

impl ConstraintSolver for NativeZ3Solver {
    fn timeout(&self) -> i32 {
        self.timeout
    }

    fn options(&self) -> &HashMap<String, String> {
        &self.options
    }

    fn new_context(&self) -> Context {
        Context::new(&self.make_config())
    }

    fn solve<'ctx>(&self, ctx: &'ctx Context, assertion: &Bool<'ctx>) -> SolveResult<'ctx> {
        let solver = self.make_solver(ctx);
        solver.assert(assertion);
        self.check(&solver)
    }

    fn solve_smtlib<'ctx>(&self, ctx: &'ctx Context, script: &str) -> SolveResult<'ctx> {
        let solver = self.make_solver(ctx);
        solver.from_string(script);
        self.check(&solver)
    }
}
