//! `InterpreterBuilder` for configuring an `Interpreter`.

use super::Interpreter;
use crate::builtins::register;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Environment;

/// Default limit on nested reductions.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Builder for `Interpreter`.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the output sink of `print`/`println`. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the limit on nested reductions.
    ///
    /// Tail positions do not count, so this bounds non-tail recursion in
    /// the interpreted program.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Build the interpreter and its builtin environment.
    pub fn build(self) -> Interpreter {
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        let root = Environment::new(print_handler, self.max_depth);
        register(&root);
        tracing::debug!(max_depth = self.max_depth, "interpreter built");
        Interpreter { root }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
