// SPDX-License-Identifier: Apache-2.0

//! String-theory queries solved through a factory-built Z3 solver.

use constraints_z3::z3::ast::{Ast, Bool, String as Z3String};
use constraints_z3::z3::Context;
use constraints_z3::{
    Configuration, ConstraintSolver, ConstraintSolverFactory, SolveStatus, OPTIONS_KEY,
    SOLVER_NAME_KEY,
};

fn make_solver(name: &str) -> Box<dyn ConstraintSolver> {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Configuration::new()
        .with(SOLVER_NAME_KEY, name)
        .with(OPTIONS_KEY, "smt.string_solver=seq");
    ConstraintSolverFactory::global()
        .create_solver_from_config(&config)
        .expect("solver construction should succeed")
}

fn string_lit<'ctx>(ctx: &'ctx Context, s: &str) -> Z3String<'ctx> {
    Z3String::from_str(ctx, s).expect("literal without NUL")
}

#[test]
fn test_equals_constant() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let x = Z3String::new_const(&ctx, "x1");
    let assertion = x._eq(&string_lit(&ctx, "Hallo"));

    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Sat);
    let model = result.model().unwrap();
    let value = model.eval(&x, true).and_then(|v| v.as_string());
    assert_eq!(value.as_deref(), Some("Hallo"));
}

#[test]
fn test_concat_of_variables() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let a = Z3String::new_const(&ctx, "a");
    let b = Z3String::new_const(&ctx, "b");
    let c = Z3String::new_const(&ctx, "c");
    let concat = Z3String::concat(&ctx, &[&a, &b, &c]);
    let assertion = concat._eq(&string_lit(&ctx, "hallo"));

    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Sat);
    let model = result.model().unwrap();
    let joined: String = [&a, &b, &c]
        .iter()
        .map(|v| model.eval(*v, true).and_then(|s| s.as_string()).unwrap())
        .collect();
    assert_eq!(joined, "hallo");
    assert_eq!(
        model.eval(&assertion, true).and_then(|v| v.as_bool()),
        Some(true)
    );
}

#[test]
fn test_concat_of_constants() {
    let solver = make_solver("Z3");
    let ctx = solver.new_context();
    let concat = Z3String::concat(
        &ctx,
        &[
            &string_lit(&ctx, "ha"),
            &string_lit(&ctx, "ll"),
            &string_lit(&ctx, "o"),
        ],
    );
    let assertion = concat._eq(&string_lit(&ctx, "hallo"));
    assert_eq!(solver.solve(&ctx, &assertion).status(), SolveStatus::Sat);
}

#[test]
fn test_concat_with_constant_suffix() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let a = Z3String::new_const(&ctx, "a");
    let b = Z3String::new_const(&ctx, "b");
    let concat = Z3String::concat(&ctx, &[&a, &b, &string_lit(&ctx, "o")]);
    let assertion = concat._eq(&string_lit(&ctx, "hallo"));

    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Sat);
    let model = result.model().unwrap();
    let a_val = model.eval(&a, true).and_then(|s| s.as_string()).unwrap();
    let b_val = model.eval(&b, true).and_then(|s| s.as_string()).unwrap();
    assert_eq!(format!("{}{}o", a_val, b_val), "hallo");
}

#[test]
fn test_conflicting_equalities_are_unsat() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let x = Z3String::new_const(&ctx, "x");
    let assertion = Bool::and(
        &ctx,
        &[
            &x._eq(&string_lit(&ctx, "av")),
            &x._eq(&string_lit(&ctx, "a")),
        ],
    );
    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Unsat);
    assert!(result.model().is_none());
}

#[test]
fn test_prefix_suffix_contains() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let x = Z3String::new_const(&ctx, "x");
    let assertion = Bool::and(
        &ctx,
        &[
            &string_lit(&ctx, "ha").prefix(&x),
            &string_lit(&ctx, "lo").suffix(&x),
            &x.contains(&string_lit(&ctx, "ll")),
        ],
    );

    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Sat);
    let value = result
        .model()
        .and_then(|m| m.eval(&x, true))
        .and_then(|v| v.as_string())
        .unwrap();
    assert!(value.starts_with("ha"), "{:?}", value);
    assert!(value.ends_with("lo"), "{:?}", value);
    assert!(value.contains("ll"), "{:?}", value);
}

#[test]
fn test_deprecated_name_solves_the_same() {
    let solver = make_solver("NativeZ3");
    assert_eq!(solver.options().get("smt.string_solver").map(|s| s.as_str()), Some("seq"));
    let ctx = solver.new_context();
    let x = Z3String::new_const(&ctx, "x");
    let assertion = x._eq(&string_lit(&ctx, "legacy"));
    let result = solver.solve(&ctx, &assertion);
    assert_eq!(result.status(), SolveStatus::Sat);
}

// Length, indexing, int conversion and regex membership go through SMT-LIB2
// text; the model is still read back through a typed constant.
fn eval_string(result: &constraints_z3::SolveResult<'_>, x: &Z3String<'_>) -> String {
    result
        .model()
        .and_then(|m| m.eval(x, true))
        .and_then(|v| v.as_string())
        .expect("string model value")
}

#[test]
fn test_length_constraint() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let script = "(declare-const x String)\n\
                  (assert (= (str.len x) 5))\n";
    let result = solver.solve_smtlib(&ctx, script);
    assert_eq!(result.status(), SolveStatus::Sat);
    let value = eval_string(&result, &Z3String::new_const(&ctx, "x"));
    assert_eq!(value.chars().count(), 5, "{:?}", value);
}

#[test]
fn test_length_with_fixed_value() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let script = "(declare-const x String)\n\
                  (assert (= (str.len x) 5))\n\
                  (assert (= x \"Hallo\"))\n";
    let result = solver.solve_smtlib(&ctx, script);
    assert_eq!(result.status(), SolveStatus::Sat);
    let value = eval_string(&result, &Z3String::new_const(&ctx, "x"));
    assert_eq!(value, "Hallo");

    let too_long = "(declare-const x String)\n\
                    (assert (= (str.len x) 4))\n\
                    (assert (= x \"Hallo\"))\n";
    assert_eq!(
        solver.solve_smtlib(&ctx, too_long).status(),
        SolveStatus::Unsat
    );
}

#[test]
fn test_character_at_index() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let script = "(declare-const x String)\n\
                  (assert (= (str.at x 5) \"c\"))\n";
    let result = solver.solve_smtlib(&ctx, script);
    assert_eq!(result.status(), SolveStatus::Sat);
    let value = eval_string(&result, &Z3String::new_const(&ctx, "x"));
    assert_eq!(value.chars().nth(5), Some('c'), "{:?}", value);
}

#[test]
fn test_int_conversion_round_trip() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let script = "(declare-const x String)\n\
                  (assert (= (str.from_int (str.to_int x)) \"10\"))\n";
    let result = solver.solve_smtlib(&ctx, script);
    assert_eq!(result.status(), SolveStatus::Sat);
    let value = eval_string(&result, &Z3String::new_const(&ctx, "x"));
    // Leading zeros are allowed by str.to_int, so only the numeric value is fixed.
    assert!(value.chars().all(|c| c.is_ascii_digit()), "{:?}", value);
    assert_eq!(value.parse::<i64>().ok(), Some(10), "{:?}", value);
}

#[test]
fn test_two_characters_are_not_one_allchar() {
    let solver = make_solver("z3");
    let ctx = solver.new_context();
    let script = "(assert (str.in_re \"av\" re.allchar))\n";
    let result = solver.solve_smtlib(&ctx, script);
    assert_eq!(result.status(), SolveStatus::Unsat);
    assert!(result.model().is_none());

    let one_char = "(assert (str.in_re \"a\" re.allchar))\n";
    assert_eq!(
        solver.solve_smtlib(&ctx, one_char).status(),
        SolveStatus::Sat
    );
}
