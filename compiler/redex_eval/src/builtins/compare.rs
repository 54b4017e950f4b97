//! Equality and number ordering.

use crate::errors::EvalResult;
use crate::native::NativeCall;
use crate::Expression;

/// Structural equality of the reduced operands.
pub(super) fn eq(call: &NativeCall<'_>) -> EvalResult {
    let x = call.value("x")?;
    let y = call.value("y")?;
    Ok(Expression::Boolean(x == y))
}

pub(super) fn ne(call: &NativeCall<'_>) -> EvalResult {
    let x = call.value("x")?;
    let y = call.value("y")?;
    Ok(Expression::Boolean(x != y))
}

fn ordering(call: &NativeCall<'_>, test: fn(i64, i64) -> bool) -> EvalResult {
    let x = call.number("x")?;
    let y = call.number("y")?;
    Ok(Expression::Boolean(test(x, y)))
}

pub(super) fn lt(call: &NativeCall<'_>) -> EvalResult {
    ordering(call, |x, y| x < y)
}

pub(super) fn le(call: &NativeCall<'_>) -> EvalResult {
    ordering(call, |x, y| x <= y)
}

pub(super) fn gt(call: &NativeCall<'_>) -> EvalResult {
    ordering(call, |x, y| x > y)
}

pub(super) fn ge(call: &NativeCall<'_>) -> EvalResult {
    ordering(call, |x, y| x >= y)
}
