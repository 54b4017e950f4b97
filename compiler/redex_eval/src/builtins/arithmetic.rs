//! Arithmetic and boolean negation. Numbers are checked `i64`.

use crate::errors::{division_by_zero, integer_overflow, type_error, EvalResult};
use crate::native::NativeCall;
use crate::Expression;

/// Number addition or string concatenation.
pub(super) fn add(call: &NativeCall<'_>) -> EvalResult {
    let x = call.value("x")?;
    let y = call.value("y")?;
    match (&x, &y) {
        (Expression::Number(a), Expression::Number(b)) => a
            .checked_add(*b)
            .map(Expression::Number)
            .ok_or_else(|| integer_overflow("addition", call.pos)),
        (Expression::String(a), Expression::String(b)) => {
            let mut text = String::with_capacity(a.len() + b.len());
            text.push_str(a);
            text.push_str(b);
            Ok(Expression::string(text))
        }
        (Expression::Number(_), _) => Err(type_error("y", &["number"], call.pos)),
        (Expression::String(_), _) => Err(type_error("y", &["string"], call.pos)),
        _ => Err(type_error("x", &["number", "string"], call.pos)),
    }
}

pub(super) fn sub(call: &NativeCall<'_>) -> EvalResult {
    let x = call.number("x")?;
    let y = call.number("y")?;
    x.checked_sub(y)
        .map(Expression::Number)
        .ok_or_else(|| integer_overflow("subtraction", call.pos))
}

pub(super) fn mul(call: &NativeCall<'_>) -> EvalResult {
    let x = call.number("x")?;
    let y = call.number("y")?;
    x.checked_mul(y)
        .map(Expression::Number)
        .ok_or_else(|| integer_overflow("multiplication", call.pos))
}

/// Truncating division.
pub(super) fn div(call: &NativeCall<'_>) -> EvalResult {
    let x = call.number("x")?;
    let y = call.number("y")?;
    if y == 0 {
        return Err(division_by_zero(call.pos));
    }
    x.checked_div(y)
        .map(Expression::Number)
        .ok_or_else(|| integer_overflow("division", call.pos))
}

pub(super) fn neg(call: &NativeCall<'_>) -> EvalResult {
    let x = call.number("x")?;
    x.checked_neg()
        .map(Expression::Number)
        .ok_or_else(|| integer_overflow("negation", call.pos))
}

pub(super) fn not(call: &NativeCall<'_>) -> EvalResult {
    Ok(Expression::Boolean(!call.boolean("x")?))
}
