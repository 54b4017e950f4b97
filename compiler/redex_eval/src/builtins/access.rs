//! Field and index access and mutation.

use crate::errors::{already_defined, not_defined, type_error, EvalResult};
use crate::native::NativeCall;
use crate::Expression;

/// `o.k`: the key is taken as written.
pub(super) fn field_get(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let key = Expression::Identifier(call.identifier("identifier")?);
    let value = obj.borrow().get(&key, call.pos)?;
    Ok(value)
}

/// `o.m(a...)`: the receiver is reduced once, and the method found on it
/// is called with the receiver as `self`. The call itself is the next
/// step, so its arguments are reduced by the method, not here.
pub(super) fn method_call(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let key = Expression::Identifier(call.identifier("identifier")?);
    let method = obj.borrow().get(&key, call.pos)?;

    let mut args = vec![Expression::Object(obj)];
    args.extend(call.variadic_args());
    Ok(Expression::call(method, args, call.pos.clone()))
}

/// `o[i]`: the key is reduced.
pub(super) fn index_get(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let key = call.value("index")?;
    let value = obj.borrow().get(&key, call.pos)?;
    Ok(value)
}

/// `o.k = v`: the field must already exist.
pub(super) fn field_set(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let id = call.identifier("identifier")?;
    let value = call.value("value")?;

    let mut object = obj.borrow_mut();
    let Some(slot) = object.named.get_mut(&id.name) else {
        return Err(not_defined(&id));
    };
    *slot = value.clone();
    Ok(value)
}

/// `o.k := v`: the field must not exist yet.
pub(super) fn field_define(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let id = call.identifier("identifier")?;
    let value = call.value("value")?;

    let mut object = obj.borrow_mut();
    if object.named.contains_key(&id.name) {
        return Err(already_defined(&id));
    }
    object.named.insert(id.name, value.clone());
    Ok(value)
}

/// `o[i] = v`: the slot must be in range.
pub(super) fn index_set(call: &NativeCall<'_>) -> EvalResult {
    let obj = call.object("object")?;
    let index = call.number("index")?;
    let value = call.value("value")?;
    obj.borrow_mut().set_index(index, value.clone())?;
    Ok(value)
}

/// `o[i] := v`: indexed slots can only be set, never defined.
pub(super) fn index_define(call: &NativeCall<'_>) -> EvalResult {
    call.object("object")?;
    call.value("value")?;
    Err(type_error("index", &["string"], call.pos))
}
