//! Interpreter: the root environment plus top-level evaluation.
//!
//! The root environment holds the literals and the builtin library. Every
//! top-level evaluation runs in a fresh child of it, so program-level
//! definitions never collide with builtins and never leak between runs.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_DEPTH};

use crate::errors::EvalResult;
use crate::print_handler::SharedPrintHandler;
use crate::reduce::reduce;
use crate::{Environment, Expression};

pub struct Interpreter {
    root: Environment,
}

impl Interpreter {
    /// Interpreter writing to stdout with the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The builtin environment.
    pub fn builtins(&self) -> &Environment {
        &self.root
    }

    /// A fresh top-level scope, child of the builtin environment.
    pub fn new_scope(&self) -> Environment {
        self.root.make_child()
    }

    /// Evaluate `expr` in a fresh top-level scope.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval(&self, expr: &Expression) -> EvalResult {
        self.eval_in(expr, &self.new_scope())
    }

    /// Evaluate `expr` in `scope`, keeping its definitions for later runs.
    pub fn eval_in(&self, expr: &Expression, scope: &Environment) -> EvalResult {
        let result = reduce(expr, scope);
        match &result {
            Ok(value) => tracing::debug!(kind = value.kind_name(), "evaluated"),
            Err(err) => tracing::debug!(%err, "evaluation failed"),
        }
        result
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        self.root.print_handler()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
