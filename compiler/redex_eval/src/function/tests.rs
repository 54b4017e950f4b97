use super::*;
use crate::errors::EvalError;
use crate::test_helpers::{
    call, define, eval, func, id, interpreter, list, num, object, pos, string, var, variadic_func,
};
use pretty_assertions::assert_eq;
use redex_ir::Name;

#[test]
fn call_binds_positional_arguments() {
    let program = list(vec![
        define("sub", func(&["a", "b"], call(":-:", vec![var("a"), var("b")]))),
        call("sub", vec![num(10), num(3)]),
    ]);
    assert_eq!(eval(&program), Ok(num(7)));
}

#[test]
fn arity_mismatch_names_the_callee() {
    let program = list(vec![
        define("f", func(&["a", "b"], var("a"))),
        call("f", vec![num(1)]),
    ]);
    assert_eq!(
        eval(&program),
        Err(EvalError::MissmatchArgument {
            expected: 2,
            got: 1,
            variadic: false,
            name: Some(Name::new("f")),
            pos: pos(),
        })
    );
}

#[test]
fn too_many_arguments_fail() {
    let program = list(vec![
        define("f", func(&["a"], var("a"))),
        call("f", vec![num(1), num(2)]),
    ]);
    assert!(matches!(
        eval(&program),
        Err(EvalError::MissmatchArgument { expected: 1, got: 2, .. })
    ));
}

#[test]
fn anonymous_callee_has_no_name() {
    let program = Expression::call(func(&["a"], var("a")), vec![], pos());
    assert!(matches!(
        eval(&program),
        Err(EvalError::MissmatchArgument { name: None, .. })
    ));
}

#[test]
fn immediate_call_of_function_literal() {
    let program = Expression::call(func(&["a"], var("a")), vec![num(9)], pos());
    assert_eq!(eval(&program), Ok(num(9)));
}

#[test]
fn variadic_collects_excess_arguments() {
    let program = list(vec![
        define("f", variadic_func(&["a"], "rest", var("rest"))),
        call("f", vec![num(1), num(2), num(3)]),
    ]);
    assert_eq!(eval(&program), Ok(object(vec![num(2), num(3)])));
}

#[test]
fn variadic_accepts_no_excess() {
    let program = list(vec![
        define("f", variadic_func(&["a"], "rest", var("rest"))),
        call("f", vec![num(1)]),
    ]);
    assert_eq!(eval(&program), Ok(object(vec![])));
}

#[test]
fn variadic_requires_positional_arguments() {
    let program = list(vec![
        define("f", variadic_func(&["a", "b"], "rest", var("rest"))),
        call("f", vec![num(1)]),
    ]);
    assert_eq!(
        eval(&program),
        Err(EvalError::MissmatchArgument {
            expected: 2,
            got: 1,
            variadic: true,
            name: Some(Name::new("f")),
            pos: pos(),
        })
    );
}

#[test]
fn variadic_arguments_are_reduced_in_caller() {
    let program = list(vec![
        define("x", num(5)),
        define("f", variadic_func(&[], "rest", var("rest"))),
        call("f", vec![var("x"), call(":+:", vec![var("x"), num(1)])]),
    ]);
    assert_eq!(eval(&program), Ok(object(vec![num(5), num(6)])));
}

#[test]
fn calling_a_number_fails() {
    let program = list(vec![define("n", num(1)), call("n", vec![])]);
    assert_eq!(
        eval(&program),
        Err(EvalError::NotFunction {
            value: "n".into(),
            pos: pos(),
        })
    );
}

#[test]
fn not_function_reports_callee_as_written() {
    let program = Expression::call(string("s"), vec![], pos());
    assert_eq!(
        eval(&program),
        Err(EvalError::NotFunction {
            value: "\"s\"".into(),
            pos: pos(),
        })
    );
}

#[test]
fn arguments_reduce_in_order() {
    let (interp, output) = interpreter();
    let program = list(vec![
        define("f", func(&["a", "b"], var("b"))),
        call(
            "f",
            vec![
                call("print", vec![string("a")]),
                call("print", vec![string("b")]),
            ],
        ),
    ]);
    assert_eq!(interp.eval(&program), Ok(string("b")));
    assert_eq!(output.get_output(), "ab");
}

#[test]
fn body_sees_caller_bindings() {
    // Free identifiers resolve in the caller's scope chain.
    let program = list(vec![
        define("show", func(&[], var("x"))),
        define(
            "outer",
            func(&[], list(vec![define("x", num(42)), call("show", vec![])])),
        ),
        call("outer", vec![]),
    ]);
    assert_eq!(eval(&program), Ok(num(42)));
}

#[test]
fn parameters_do_not_leak() {
    let program = list(vec![
        define("f", func(&["a"], var("a"))),
        call("f", vec![num(1)]),
        var("a"),
    ]);
    assert_eq!(eval(&program), Err(EvalError::NotDefined(id("a"))));
}

#[test]
fn definitions_in_body_stay_local() {
    let program = list(vec![
        define("f", func(&[], define("inner", num(1)))),
        call("f", vec![]),
        call("f", vec![]),
        var("inner"),
    ]);
    assert_eq!(eval(&program), Err(EvalError::NotDefined(id("inner"))));
}

#[test]
fn body_can_assign_outer_binding() {
    let program = list(vec![
        define("count", num(0)),
        define(
            "bump",
            func(
                &[],
                call(":=:", vec![var("count"), call(":+:", vec![var("count"), num(1)])]),
            ),
        ),
        call("bump", vec![]),
        call("bump", vec![]),
        var("count"),
    ]);
    assert_eq!(eval(&program), Ok(num(2)));
}
