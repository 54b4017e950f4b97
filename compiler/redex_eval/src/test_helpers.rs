//! AST construction helpers for unit tests.

use redex_ir::{Identifier, Name, Position};

use crate::{
    buffer_handler, Environment, EvalResult, Expression, Interpreter, InterpreterBuilder, Object,
    SharedPrintHandler,
};

pub(crate) fn pos() -> Position {
    Position::new(Name::new("test.rdx"), 0, 0)
}

pub(crate) fn id(name: &str) -> Identifier {
    Identifier::new(name, pos())
}

pub(crate) fn var(name: &str) -> Expression {
    Expression::identifier(id(name))
}

pub(crate) fn num(n: i64) -> Expression {
    Expression::number(n)
}

pub(crate) fn string(text: &str) -> Expression {
    Expression::string(text)
}

/// `name(args...)`.
pub(crate) fn call(name: &str, args: Vec<Expression>) -> Expression {
    Expression::call(var(name), args, pos())
}

/// `name := value`.
pub(crate) fn define(name: &str, value: Expression) -> Expression {
    call("::=:", vec![var(name), value])
}

/// `(params...){ body }`.
pub(crate) fn func(params: &[&str], body: Expression) -> Expression {
    Expression::function(params.iter().map(|p| id(p)).collect(), None, body, pos())
}

/// `(params..., rest...){ body }`.
pub(crate) fn variadic_func(params: &[&str], rest: &str, body: Expression) -> Expression {
    Expression::function(params.iter().map(|p| id(p)).collect(), Some(id(rest)), body, pos())
}

pub(crate) fn list(items: Vec<Expression>) -> Expression {
    Expression::list(items)
}

pub(crate) fn object(items: Vec<Expression>) -> Expression {
    Expression::object(Object::from_indexed(items))
}

/// `o.m(args...)`, desugared the way the parser does it.
pub(crate) fn method_call(receiver: Expression, method: &str, args: Vec<Expression>) -> Expression {
    let mut all = vec![receiver, var(method)];
    all.extend(args);
    call(":.():", all)
}

/// Interpreter capturing output.
pub(crate) fn interpreter() -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interp = InterpreterBuilder::new()
        .print_handler(output.clone())
        .max_depth(1_000)
        .build();
    (interp, output)
}

/// Evaluate in a fresh interpreter.
pub(crate) fn eval(expr: &Expression) -> EvalResult {
    interpreter().0.eval(expr)
}

/// A top-level scope of a fresh interpreter.
pub(crate) fn scope() -> Environment {
    interpreter().0.new_scope()
}
