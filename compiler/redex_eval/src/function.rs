//! Functions and calls.
//!
//! User functions (`FunctionDefine`) and builtins (`BuiltInFunction`) share
//! the `Callable` capability. `FunctionCall::compute` checks arity and binds
//! call-site arguments, unevaluated, to parameters; when to evaluate them is
//! the callee's business.

use redex_ir::{Identifier, Position};

use crate::errors::{arity_mismatch, not_function, EvalResult};
use crate::object::{Object, ObjectRef};
use crate::reduce::{reduce, Step};
use crate::{Environment, Expression};

/// Call-site arguments bound to positional parameters, in parameter order.
pub type BoundArgs = Vec<(Identifier, Expression)>;

/// Something that can be called.
pub trait Callable {
    fn positional_params(&self) -> &[Identifier];

    fn variadic_param(&self) -> Option<&Identifier>;

    /// Invoke with arguments bound to positional parameters.
    ///
    /// `variadic` holds the excess arguments when the callee declares a
    /// variadic parameter. `env` is the caller's environment and `pos` the
    /// call site.
    fn call(
        &self,
        env: &Environment,
        args: BoundArgs,
        variadic: Option<ObjectRef>,
        pos: &Position,
    ) -> EvalResult<Step>;
}

/// A user function value.
///
/// No environment is captured: the body runs in a child of the *caller's*
/// environment, so free identifiers in the body resolve dynamically.
pub struct FunctionDefine {
    pub params: Vec<Identifier>,
    pub variadic: Option<Identifier>,
    pub body: Expression,
    pub pos: Position,
}

impl Callable for FunctionDefine {
    fn positional_params(&self) -> &[Identifier] {
        &self.params
    }

    fn variadic_param(&self) -> Option<&Identifier> {
        self.variadic.as_ref()
    }

    /// Arguments are reduced in the caller's environment, in parameter
    /// order, and defined in a fresh child of it; the body then continues
    /// in that child.
    fn call(
        &self,
        env: &Environment,
        args: BoundArgs,
        variadic: Option<ObjectRef>,
        _pos: &Position,
    ) -> EvalResult<Step> {
        let scope = env.make_child();
        for (param, arg) in &args {
            let value = reduce(arg, env)?;
            scope.define(param, value)?;
        }
        if let (Some(param), Some(bundle)) = (&self.variadic, variadic) {
            let value = reduce(&Expression::Object(bundle), env)?;
            scope.define(param, value)?;
        }
        Ok(Step::enter(self.body.clone(), scope))
    }
}

/// `callee(args...)`.
pub struct FunctionCall {
    pub callee: Expression,
    pub args: Vec<Expression>,
    pub pos: Position,
}

impl FunctionCall {
    /// Reduce the callee, check arity, bind arguments and invoke.
    #[tracing::instrument(level = "trace", skip_all, fields(pos = %self.pos))]
    pub fn compute(&self, env: &Environment) -> EvalResult<Step> {
        let callee = reduce(&self.callee, env)?;
        let Some(function) = callee.as_callable() else {
            return Err(not_function(&self.callee, &self.pos));
        };

        let params = function.positional_params();
        let variadic = function.variadic_param().is_some();
        let arity_ok = if variadic {
            self.args.len() >= params.len()
        } else {
            self.args.len() == params.len()
        };
        if !arity_ok {
            return Err(arity_mismatch(
                params.len(),
                self.args.len(),
                variadic,
                self.callee.as_identifier().map(|id| &id.name),
                &self.pos,
            ));
        }

        let (positional, rest) = self.args.split_at(params.len());
        let bound: BoundArgs = params.iter().cloned().zip(positional.iter().cloned()).collect();
        let bundle = variadic.then(|| Object::from_indexed(rest.to_vec()).into_ref());

        function.call(env, bound, bundle, &self.pos)
    }
}

#[cfg(test)]
mod tests;
