use super::*;
use crate::errors::EvalError;
use crate::test_helpers::{
    call, define, eval, func, id, interpreter, list, method_call, num, object, pos, string, var,
};
use crate::Object;
use pretty_assertions::assert_eq;
use redex_ir::Name;

fn binary(op: &str, x: Expression, y: Expression) -> Expression {
    call(op, vec![x, y])
}

fn type_error(name: &str, expected: &[&'static str]) -> EvalError {
    EvalError::TypeError {
        name: name.into(),
        expected: expected.to_vec(),
        pos: pos(),
    }
}

#[test]
fn literals_are_bound() {
    assert_eq!(eval(&var("null")), Ok(Expression::Null));
    assert_eq!(eval(&var("true")), Ok(Expression::Boolean(true)));
    assert_eq!(eval(&var("false")), Ok(Expression::Boolean(false)));
}

#[test]
fn methods_are_not_bound_in_environment() {
    assert_eq!(eval(&var("push")), Err(EvalError::NotDefined(id("push"))));
    assert!(method("push").is_some());
    assert!(method("missing").is_none());
}

// Arithmetic

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(eval(&binary(":+:", num(2), num(3))), Ok(num(5)));
    assert_eq!(eval(&binary(":-:", num(2), num(3))), Ok(num(-1)));
    assert_eq!(eval(&binary(":*:", num(4), num(3))), Ok(num(12)));
    assert_eq!(eval(&binary(":/:", num(7), num(2))), Ok(num(3)));
    assert_eq!(eval(&binary(":/:", num(-7), num(2))), Ok(num(-3)));
    assert_eq!(eval(&call("-:", vec![num(4)])), Ok(num(-4)));
}

#[test]
fn add_concatenates_strings() {
    assert_eq!(
        eval(&binary(":+:", string("foo"), string("bar"))),
        Ok(string("foobar"))
    );
}

#[test]
fn add_type_errors() {
    assert_eq!(
        eval(&binary(":+:", num(1), string("a"))),
        Err(type_error("y", &["number"]))
    );
    assert_eq!(
        eval(&binary(":+:", string("a"), num(1))),
        Err(type_error("y", &["string"]))
    );
    assert_eq!(
        eval(&binary(":+:", Expression::boolean(true), num(1))),
        Err(type_error("x", &["number", "string"]))
    );
}

#[test]
fn sub_requires_numbers() {
    assert_eq!(
        eval(&binary(":-:", string("a"), num(1))),
        Err(type_error("x", &["number"]))
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(
        eval(&binary(":/:", num(1), num(0))),
        Err(EvalError::DivisionByZero { pos: pos() })
    );
}

#[test]
fn overflow_is_reported() {
    assert_eq!(
        eval(&binary(":+:", num(i64::MAX), num(1))),
        Err(EvalError::IntegerOverflow {
            operation: "addition",
            pos: pos(),
        })
    );
    assert_eq!(
        eval(&binary(":/:", num(i64::MIN), num(-1))),
        Err(EvalError::IntegerOverflow {
            operation: "division",
            pos: pos(),
        })
    );
    assert_eq!(
        eval(&call("-:", vec![num(i64::MIN)])),
        Err(EvalError::IntegerOverflow {
            operation: "negation",
            pos: pos(),
        })
    );
}

#[test]
fn not_requires_boolean() {
    assert_eq!(
        eval(&call("!:", vec![var("true")])),
        Ok(Expression::Boolean(false))
    );
    assert_eq!(
        eval(&call("!:", vec![num(0)])),
        Err(type_error("x", &["boolean"]))
    );
}

// Comparison

#[test]
fn ordering() {
    let cases = [
        (":<:", 1, 2, true),
        (":<:", 2, 2, false),
        (":<=:", 2, 2, true),
        (":<=:", 3, 2, false),
        (":>:", 3, 2, true),
        (":>=:", 2, 2, true),
        (":>=:", 1, 2, false),
    ];
    for (op, x, y, expected) in cases {
        assert_eq!(
            eval(&binary(op, num(x), num(y))),
            Ok(Expression::Boolean(expected)),
            "{x} {op} {y}"
        );
    }
}

#[test]
fn equality_is_structural() {
    let t = Ok(Expression::Boolean(true));
    let f = Ok(Expression::Boolean(false));
    assert_eq!(eval(&binary(":==:", num(1), num(1))), t);
    assert_eq!(eval(&binary(":==:", string("a"), string("a"))), t);
    assert_eq!(eval(&binary(":==:", num(1), string("1"))), f);
    assert_eq!(eval(&binary(":!=:", num(1), num(2))), t);
    assert_eq!(
        eval(&binary(":==:", object(vec![num(1)]), object(vec![num(1)]))),
        t
    );
}

#[test]
fn ordering_requires_numbers() {
    assert_eq!(
        eval(&binary(":<:", string("a"), string("b"))),
        Err(type_error("x", &["number"]))
    );
}

// Binding

#[test]
fn define_returns_value() {
    let program = list(vec![define("x", num(3)), var("x")]);
    assert_eq!(eval(&program), Ok(num(3)));
    assert_eq!(eval(&define("x", num(3))), Ok(num(3)));
}

#[test]
fn define_twice_fails() {
    let program = list(vec![define("x", num(1)), define("x", num(2))]);
    assert_eq!(eval(&program), Err(EvalError::AlreadyDefined(id("x"))));
}

#[test]
fn assign_requires_existing_binding() {
    assert_eq!(
        eval(&binary(":=:", var("x"), num(1))),
        Err(EvalError::NotDefined(id("x")))
    );
    let program = list(vec![
        define("x", num(1)),
        binary(":=:", var("x"), num(2)),
        var("x"),
    ]);
    assert_eq!(eval(&program), Ok(num(2)));
}

#[test]
fn binding_target_must_be_identifier() {
    assert_eq!(
        eval(&binary("::=:", num(1), num(2))),
        Err(type_error("identifier", &["identifier"]))
    );
}

// Object access

fn with_object(items: Vec<Expression>, rest: Vec<Expression>) -> Expression {
    let mut program = vec![define("o", object(items))];
    program.extend(rest);
    list(program)
}

#[test]
fn index_get_reduces_key() {
    let program = with_object(
        vec![num(10), num(20)],
        vec![
            define("i", num(1)),
            binary(":[]:", var("o"), var("i")),
        ],
    );
    assert_eq!(eval(&program), Ok(num(20)));
}

#[test]
fn index_get_out_of_bounds() {
    let program = with_object(
        vec![num(10), num(20), num(30)],
        vec![binary(":[]:", var("o"), num(3))],
    );
    assert_eq!(eval(&program), Err(EvalError::OutOfBounds { max: 2, got: 3 }));
}

#[test]
fn field_define_get_and_set() {
    let program = with_object(
        vec![],
        vec![
            call(":.:=:", vec![var("o"), var("k"), num(1)]),
            call(":.=:", vec![var("o"), var("k"), num(2)]),
            binary(":.:", var("o"), var("k")),
        ],
    );
    assert_eq!(eval(&program), Ok(num(2)));
}

#[test]
fn field_set_requires_existing_field() {
    let program = with_object(vec![], vec![call(":.=:", vec![var("o"), var("k"), num(2)])]);
    assert_eq!(eval(&program), Err(EvalError::NotDefined(id("k"))));
}

#[test]
fn field_define_twice_fails() {
    let program = with_object(
        vec![],
        vec![
            call(":.:=:", vec![var("o"), var("k"), num(1)]),
            call(":.:=:", vec![var("o"), var("k"), num(1)]),
        ],
    );
    assert_eq!(eval(&program), Err(EvalError::AlreadyDefined(id("k"))));
}

#[test]
fn field_key_is_not_evaluated() {
    // `k` is bound to a number but the field name is taken as written.
    let program = with_object(
        vec![],
        vec![
            define("k", num(0)),
            call(":.:=:", vec![var("o"), var("k"), string("v")]),
            binary(":.:", var("o"), var("k")),
        ],
    );
    assert_eq!(eval(&program), Ok(string("v")));
}

#[test]
fn field_get_on_non_object() {
    assert_eq!(
        eval(&binary(":.:", num(1), var("k"))),
        Err(type_error("object", &["object"]))
    );
}

#[test]
fn index_set_in_place() {
    let program = with_object(
        vec![num(1), num(2)],
        vec![
            call(":[]=:", vec![var("o"), num(0), num(9)]),
            var("o"),
        ],
    );
    assert_eq!(eval(&program), Ok(object(vec![num(9), num(2)])));
}

#[test]
fn index_set_out_of_bounds() {
    let program = with_object(
        vec![num(1)],
        vec![call(":[]=:", vec![var("o"), num(-1), num(9)])],
    );
    assert_eq!(eval(&program), Err(EvalError::OutOfBounds { max: 0, got: -1 }));
}

#[test]
fn index_define_is_rejected() {
    let program = with_object(
        vec![num(1)],
        vec![call(":[]:=:", vec![var("o"), num(0), num(9)])],
    );
    assert_eq!(eval(&program), Err(type_error("index", &["string"])));
}

// Methods

#[test]
fn length_and_size() {
    let mut obj = Object::from_indexed(vec![num(1), num(2)]);
    obj.named.insert(Name::new("k"), num(3));
    let program = list(vec![
        define("o", Expression::object(obj)),
        method_call(var("o"), "size", vec![]),
    ]);
    assert_eq!(eval(&program), Ok(num(3)));

    let program = with_object(vec![num(1), num(2)], vec![method_call(var("o"), "length", vec![])]);
    assert_eq!(eval(&program), Ok(num(2)));
}

#[test]
fn push_mutates_every_alias() {
    let program = with_object(
        vec![num(1)],
        vec![
            define("alias", var("o")),
            method_call(var("alias"), "push", vec![num(2)]),
            var("o"),
        ],
    );
    assert_eq!(eval(&program), Ok(object(vec![num(1), num(2)])));
}

#[test]
fn push_returns_the_same_object() {
    let program = with_object(
        vec![],
        vec![
            define("p", method_call(var("o"), "push", vec![num(1)])),
            binary(":==:", var("p"), var("o")),
        ],
    );
    assert_eq!(eval(&program), Ok(Expression::Boolean(true)));
}

#[test]
fn pop_removes_last() {
    let program = with_object(
        vec![num(1), num(2)],
        vec![method_call(var("o"), "pop", vec![]), var("o")],
    );
    assert_eq!(eval(&program), Ok(object(vec![num(1)])));
}

#[test]
fn pop_empty_fails() {
    let program = with_object(vec![], vec![method_call(var("o"), "pop", vec![])]);
    assert_eq!(eval(&program), Err(EvalError::OutOfBounds { max: 0, got: -1 }));
}

#[test]
fn method_arity_is_checked() {
    let program = with_object(vec![], vec![method_call(var("o"), "push", vec![])]);
    assert!(matches!(
        eval(&program),
        Err(EvalError::MissmatchArgument { expected: 2, got: 1, .. })
    ));
}

#[test]
fn method_receiver_is_evaluated_once() {
    let (interp, output) = interpreter();
    let receiver = list(vec![call("print", vec![string("r")]), var("o")]);
    let program = with_object(
        vec![],
        vec![
            method_call(receiver, "push", vec![num(1)]),
            method_call(var("o"), "length", vec![]),
        ],
    );
    assert_eq!(interp.eval(&program), Ok(num(1)));
    assert_eq!(output.get_output(), "r");
}

#[test]
fn function_fields_are_called_as_methods() {
    let mut obj = Object::new();
    obj.named.insert(Name::new("second"), func(&["self", "x"], var("x")));
    let program = list(vec![
        define("o", Expression::object(obj)),
        method_call(var("o"), "second", vec![num(7)]),
    ]);
    assert_eq!(eval(&program), Ok(num(7)));
}

#[test]
fn method_call_requires_an_object() {
    assert_eq!(
        eval(&method_call(num(5), "length", vec![])),
        Err(type_error("object", &["object"]))
    );
}

// Output

#[test]
fn print_joins_arguments() {
    let (interp, output) = interpreter();
    let program = call("print", vec![string("a"), num(1), Expression::Null]);
    assert_eq!(interp.eval(&program), Ok(string("a 1 null")));
    assert_eq!(output.get_output(), "a 1 null");
}

#[test]
fn println_appends_newline() {
    let (interp, output) = interpreter();
    let program = list(vec![
        call("println", vec![string("x")]),
        call("println", vec![object(vec![num(1), string("s")])]),
    ]);
    assert_eq!(interp.eval(&program), Ok(string("[1, \"s\"]\n")));
    assert_eq!(output.get_output(), "x\n[1, \"s\"]\n");
}

#[test]
fn print_without_arguments() {
    let (interp, output) = interpreter();
    assert_eq!(interp.eval(&call("println", vec![])), Ok(string("\n")));
    assert_eq!(output.get_output(), "\n");
}
