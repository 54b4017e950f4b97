//! Conditional expressions.

use redex_ir::Position;

use crate::errors::{condition_type, EvalResult};
use crate::reduce::{reduce, Step};
use crate::{Environment, Expression};

/// `if(condition, then_branch[, else_branch])`.
pub struct Condition {
    pub condition: Expression,
    pub then_branch: Expression,
    pub else_branch: Option<Expression>,
    pub pos: Position,
}

impl Condition {
    /// Reduce the condition and step to the selected branch.
    ///
    /// A false condition without an else branch steps to `Null`.
    pub fn compute(&self, env: &Environment) -> EvalResult<Step> {
        match reduce(&self.condition, env)? {
            Expression::Boolean(true) => Ok(Step::next(self.then_branch.clone())),
            Expression::Boolean(false) => Ok(Step::next(
                self.else_branch.clone().unwrap_or(Expression::Null),
            )),
            _ => Err(condition_type(&self.pos)),
        }
    }
}
