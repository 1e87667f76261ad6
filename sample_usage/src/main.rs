// SPDX-License-Identifier: Apache-2.0

use constraints_z3::z3::ast::{Ast, String as Z3String};
use constraints_z3::{Configuration, ConstraintSolverFactory};

mod multithread;

const SESSION_PROPERTIES: &str = "src/session.properties";

/// Solves `a ++ b ++ "o" == "hallo"` with the solver described by
/// `session.properties` and checks the model.
fn validate_hallo() -> Result<(), Box<dyn std::error::Error>> {
    // Get the file relative to the cargo manifest.
    let filename = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(SESSION_PROPERTIES);
    log::info!("reading solver session from: {:?}", filename);
    let text = std::fs::read_to_string(filename)?;
    let config = Configuration::from_properties_str(&text);
    let solver = ConstraintSolverFactory::global().create_solver_from_config(&config)?;

    let ctx = solver.new_context();
    let a = Z3String::new_const(&ctx, "a");
    let b = Z3String::new_const(&ctx, "b");
    let o = Z3String::from_str(&ctx, "o")?;
    let hallo = Z3String::from_str(&ctx, "hallo")?;
    let assertion = Z3String::concat(&ctx, &[&a, &b, &o])._eq(&hallo);

    let result = solver.solve(&ctx, &assertion);
    let model = match result.model() {
        Some(model) => model,
        None => return Err(format!("expected SAT, got {}", result.status()).into()),
    };
    let a_val = model.eval(&a, true).and_then(|v| v.as_string());
    let b_val = model.eval(&b, true).and_then(|v| v.as_string());
    log::info!("model: a={:?} b={:?}", a_val, b_val);
    match (a_val, b_val) {
        (Some(a_val), Some(b_val)) if format!("{}{}o", a_val, b_val) == "hallo" => Ok(()),
        other => Err(format!("model does not satisfy the query: {:?}", other).into()),
    }
}

fn main() {
    let _ = env_logger::try_init();
    let result = validate_hallo();
    println!("hallo validation result: {:?}", result);
    multithread::validate_all_threads_solve_offsets();
    println!("multithreaded validation done");
}

#[test]
fn test_validate_hallo() {
    let _ = env_logger::try_init();
    validate_hallo().expect("validation should succeed");
}
