//! The reduction engine.
//!
//! `compute` performs one semantic step; `reduce` drives an expression to
//! normal form by looping over steps (a trampoline). Tail positions (the
//! last element of a list, the chosen branch of a condition, a user
//! function body) come back as the next step instead of a nested call, so
//! interpreted call chains do not grow the host stack. Non-tail positions
//! (callees, arguments, conditions, object children) reduce through a nested
//! `reduce`, which is counted against the interpreter's depth limit.

use redex_stack::ensure_sufficient_stack;

use crate::errors::EvalResult;
use crate::object::reduce_children;
use crate::{Environment, Expression};

/// Result of one `compute` step.
pub struct Step {
    /// The next expression.
    pub expr: Expression,
    /// Scope the next expression continues in, when it differs from the
    /// current one (a user function body).
    pub scope: Option<Environment>,
}

impl Step {
    /// Continue with `expr` in the current scope.
    #[inline]
    pub fn next(expr: Expression) -> Self {
        Step { expr, scope: None }
    }

    /// Continue with `expr` in `scope`.
    #[inline]
    pub fn enter(expr: Expression, scope: Environment) -> Self {
        Step {
            expr,
            scope: Some(scope),
        }
    }
}

impl Expression {
    /// Perform one reduction step in `env`.
    ///
    /// Irreducible expressions step to themselves.
    pub fn compute(&self, env: &Environment) -> EvalResult<Step> {
        match self {
            Expression::Number(_)
            | Expression::Boolean(_)
            | Expression::Null
            | Expression::String(_)
            | Expression::FunctionDefine(_)
            | Expression::BuiltIn(_) => Ok(Step::next(self.clone())),
            Expression::Identifier(id) => env.get(id).map(Step::next),
            Expression::List(items) => match items.split_last() {
                Some((last, init)) => {
                    for item in init {
                        reduce(item, env)?;
                    }
                    Ok(Step::next(last.clone()))
                }
                None => Ok(Step::next(Expression::Null)),
            },
            Expression::Object(obj) => reduce_children(obj, env).map(Step::next),
            Expression::Condition(condition) => condition.compute(env),
            Expression::FunctionCall(call) => call.compute(env),
        }
    }
}

/// Reduce `expr` in `env` to normal form.
///
/// Returns the value unchanged, in zero steps, when it is already
/// irreducible. Fails with `StackOverflow` when nesting exceeds the
/// environment's depth limit.
#[tracing::instrument(level = "trace", skip_all, fields(expr = %expr))]
pub fn reduce(expr: &Expression, env: &Environment) -> EvalResult {
    if !expr.is_reducible() {
        return Ok(expr.clone());
    }
    let _guard = env.enter()?;
    ensure_sufficient_stack(|| trampoline(expr.clone(), env))
}

fn trampoline(mut current: Expression, env: &Environment) -> EvalResult {
    let mut scope: Option<Environment> = None;
    let mut steps: usize = 0;
    while current.is_reducible() {
        let step = current.compute(scope.as_ref().unwrap_or(env))?;
        current = step.expr;
        if step.scope.is_some() {
            scope = step.scope;
        }
        steps += 1;
    }
    tracing::trace!(steps, depth = env.depth(), "reduced");
    Ok(current)
}
