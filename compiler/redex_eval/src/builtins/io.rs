//! `print` and `println`.

use crate::errors::EvalResult;
use crate::native::NativeCall;
use crate::Expression;

/// Reduced arguments in print form, joined by single spaces.
fn joined(call: &NativeCall<'_>) -> EvalResult<String> {
    let values = call.variadic_values()?;
    Ok(values
        .iter()
        .map(Expression::printed)
        .collect::<Vec<_>>()
        .join(" "))
}

pub(super) fn print(call: &NativeCall<'_>) -> EvalResult {
    let text = joined(call)?;
    call.env.print_handler().print(&text);
    Ok(Expression::string(text))
}

pub(super) fn println(call: &NativeCall<'_>) -> EvalResult {
    let mut text = joined(call)?;
    call.env.print_handler().println(&text);
    text.push('\n');
    Ok(Expression::string(text))
}
