//! Object methods. They take the object as an explicit `self` argument.

use redex_ir::builtin_names::{METHOD_LENGTH, METHOD_POP, METHOD_PUSH, METHOD_SIZE};
use rustc_hash::FxHashMap;

use crate::errors::EvalResult;
use crate::native::{BuiltInFunction, NativeCall};
use crate::Expression;

pub(super) fn table() -> FxHashMap<&'static str, Expression> {
    let mut table = FxHashMap::default();
    table.insert(
        METHOD_LENGTH,
        Expression::builtin(BuiltInFunction::new(METHOD_LENGTH, &["self"], length)),
    );
    table.insert(
        METHOD_SIZE,
        Expression::builtin(BuiltInFunction::new(METHOD_SIZE, &["self"], size)),
    );
    table.insert(
        METHOD_PUSH,
        Expression::builtin(BuiltInFunction::new(METHOD_PUSH, &["self", "value"], push)),
    );
    table.insert(
        METHOD_POP,
        Expression::builtin(BuiltInFunction::new(METHOD_POP, &["self"], pop)),
    );
    table
}

fn count(n: usize) -> Expression {
    Expression::Number(i64::try_from(n).unwrap_or(i64::MAX))
}

/// Number of indexed elements.
fn length(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("self")?;
    let n = obj.borrow().length();
    Ok(count(n))
}

/// Number of indexed and named elements.
fn size(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("self")?;
    let n = obj.borrow().size();
    Ok(count(n))
}

/// Append in place; returns the same object.
fn push(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("self")?;
    let value = call.value("value")?;
    obj.borrow_mut().push(value);
    Ok(Expression::Object(obj))
}

/// Remove the last indexed element in place; returns the same object.
fn pop(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("self")?;
    obj.borrow_mut().pop()?;
    Ok(Expression::Object(obj))
}
