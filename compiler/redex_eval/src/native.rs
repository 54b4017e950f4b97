//! Builtin (native) functions.
//!
//! A builtin declares named parameter *slots*. Its positional parameters are
//! internal identifiers derived from the slot names, so user code can never
//! refer to them; on call the bound arguments are mapped back to slots and
//! handed, unevaluated, to the native operation.

use redex_ir::{Identifier, Name, Position};
use rustc_hash::FxHashMap;

use crate::errors::{not_defined, type_error, EvalResult};
use crate::function::{BoundArgs, Callable};
use crate::object::ObjectRef;
use crate::reduce::{reduce, Step};
use crate::{Environment, Expression};

/// Host operation behind a builtin.
pub type NativeFn = fn(&NativeCall<'_>) -> EvalResult;

const PARAM_PREFIX: &str = "__builtin_";
const PARAM_SUFFIX: &str = "__";

pub struct BuiltInFunction {
    name: &'static str,
    params: Vec<Identifier>,
    variadic: Option<Identifier>,
    op: NativeFn,
}

impl BuiltInFunction {
    /// A builtin taking exactly the given slots.
    pub fn new(name: &'static str, slots: &[&str], op: NativeFn) -> Self {
        BuiltInFunction {
            name,
            params: slots.iter().map(|slot| param_identifier(slot)).collect(),
            variadic: None,
            op,
        }
    }

    /// A builtin collecting all of its arguments under one variadic slot.
    pub fn variadic(name: &'static str, slot: &str, op: NativeFn) -> Self {
        BuiltInFunction::with_rest(name, &[], slot, op)
    }

    /// A builtin taking the given slots, then any number of arguments
    /// under the variadic slot `rest`.
    pub fn with_rest(name: &'static str, slots: &[&str], rest: &str, op: NativeFn) -> Self {
        BuiltInFunction {
            name,
            params: slots.iter().map(|slot| param_identifier(slot)).collect(),
            variadic: Some(Identifier::builtin(rest)),
            op,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn param_identifier(slot: &str) -> Identifier {
    Identifier::builtin(format!("{PARAM_PREFIX}{slot}{PARAM_SUFFIX}"))
}

fn slot_name(param: &Identifier) -> &str {
    let name = param.as_str();
    name.strip_prefix(PARAM_PREFIX)
        .and_then(|rest| rest.strip_suffix(PARAM_SUFFIX))
        .unwrap_or(name)
}

impl Callable for BuiltInFunction {
    fn positional_params(&self) -> &[Identifier] {
        &self.params
    }

    fn variadic_param(&self) -> Option<&Identifier> {
        self.variadic.as_ref()
    }

    /// Runs in the caller's environment; no scope is created.
    fn call(
        &self,
        env: &Environment,
        args: BoundArgs,
        variadic: Option<ObjectRef>,
        pos: &Position,
    ) -> EvalResult<Step> {
        let args = args
            .into_iter()
            .map(|(param, arg)| (Name::new(slot_name(&param)), arg))
            .collect();
        let call = NativeCall {
            env,
            args,
            variadic,
            pos,
        };
        tracing::trace!(builtin = self.name, "native call");
        (self.op)(&call).map(Step::next)
    }
}

/// Arguments of one native call, addressed by slot name.
pub struct NativeCall<'a> {
    /// The caller's environment.
    pub env: &'a Environment,
    args: FxHashMap<Name, Expression>,
    variadic: Option<ObjectRef>,
    /// The call site.
    pub pos: &'a Position,
}

impl NativeCall<'_> {
    /// The unevaluated argument in `slot`.
    pub fn arg(&self, slot: &str) -> EvalResult<&Expression> {
        self.args
            .get(slot)
            .ok_or_else(|| not_defined(&Identifier::new(slot, self.pos.clone())))
    }

    /// The argument in `slot`, reduced in the caller's environment.
    pub fn value(&self, slot: &str) -> EvalResult {
        reduce(self.arg(slot)?, self.env)
    }

    pub fn number(&self, slot: &str) -> EvalResult<i64> {
        let value = self.value(slot)?;
        value
            .as_number()
            .ok_or_else(|| type_error(slot, &["number"], self.pos))
    }

    pub fn boolean(&self, slot: &str) -> EvalResult<bool> {
        let value = self.value(slot)?;
        value
            .as_bool()
            .ok_or_else(|| type_error(slot, &["boolean"], self.pos))
    }

    pub fn object(&self, slot: &str) -> EvalResult<ObjectRef> {
        match self.value(slot)? {
            Expression::Object(obj) => Ok(obj),
            _ => Err(type_error(slot, &["object"], self.pos)),
        }
    }

    /// The argument in `slot`, which must be written as an identifier.
    pub fn identifier(&self, slot: &str) -> EvalResult<Identifier> {
        self.arg(slot)?
            .as_identifier()
            .cloned()
            .ok_or_else(|| type_error(slot, &["identifier"], self.pos))
    }

    /// The variadic arguments as written, unevaluated.
    pub fn variadic_args(&self) -> Vec<Expression> {
        self.variadic
            .as_ref()
            .map(|bundle| bundle.borrow().indexed.clone())
            .unwrap_or_default()
    }

    /// The variadic arguments, reduced in order.
    pub fn variadic_values(&self) -> EvalResult<Vec<Expression>> {
        let Some(bundle) = &self.variadic else {
            return Ok(Vec::new());
        };
        let reduced = reduce(&Expression::Object(bundle.clone()), self.env)?;
        Ok(reduced
            .as_object()
            .map(|obj| obj.borrow().indexed.clone())
            .unwrap_or_default())
    }
}
