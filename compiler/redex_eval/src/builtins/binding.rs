//! Assignment and definition.
//!
//! Both take the target identifier unevaluated and the value reduced in the
//! caller's environment, and return the value.

use crate::errors::EvalResult;
use crate::native::NativeCall;

/// `x = e`: overwrite the nearest existing binding of `x`.
pub(super) fn assign(call: &NativeCall<'_>) -> EvalResult {
    let id = call.identifier("identifier")?;
    let value = call.value("expression")?;
    call.env.put(&id, value.clone())?;
    Ok(value)
}

/// `x := e`: bind `x` in the caller's local scope.
pub(super) fn define(call: &NativeCall<'_>) -> EvalResult {
    let id = call.identifier("identifier")?;
    let value = call.value("expression")?;
    call.env.define(&id, value.clone())?;
    Ok(value)
}
