// SPDX-License-Identifier: Apache-2.0

//! Example of solving from every core through one shared solver handle.

use constraints_z3::z3::ast::{Ast, Int};
use constraints_z3::{Configuration, ConstraintSolver, ConstraintSolverFactory, SolveStatus};
use lazy_static::lazy_static;
use rayon::prelude::*;

lazy_static! {
    // One handle for all threads; each thread solves on its own Z3 context.
    static ref SHARED_SOLVER: Box<dyn ConstraintSolver> = {
        let config = Configuration::new().with("z3.timeout", "10000");
        ConstraintSolverFactory::global()
            .create_solver("z3", &config)
            .expect("create_solver failed")
    };
}

/// Asks for `x` with `x - i == 1` on every core and checks `x == i + 1`.
pub fn validate_all_threads_solve_offsets() {
    let results: Vec<Option<i64>> = (0..num_cpus::get() as i64)
        .into_par_iter()
        .map(|i| {
            let ctx = SHARED_SOLVER.new_context();
            let x = Int::new_const(&ctx, "x");
            let diff = Int::sub(&ctx, &[&x, &Int::from_i64(&ctx, i)]);
            let assertion = diff._eq(&Int::from_i64(&ctx, 1));
            let result = SHARED_SOLVER.solve(&ctx, &assertion);
            assert_eq!(result.status(), SolveStatus::Sat);
            result
                .model()
                .and_then(|m| m.eval(&x, true))
                .and_then(|v| v.as_i64())
        })
        .collect();

    for (i, result) in results.iter().enumerate() {
        assert_eq!(*result, Some(i as i64 + 1));
    }
}
