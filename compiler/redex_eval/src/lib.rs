//! Redex Eval - the reduction engine of the redex interpreter.
//!
//! # Architecture
//!
//! - `Expression`: one type for syntax and values
//! - `Environment`: the scope chain (`get`, `put`, `define`, `make_child`)
//! - `reduce`/`Expression::compute`: a trampoline driving expressions to
//!   normal form one step at a time
//! - `Callable`: the call capability of `FunctionDefine` and
//!   `BuiltInFunction`
//! - `Object`: shared, mutable composite values
//! - `builtins`: the operator library bound in the root environment
//! - `EvalError`: the error taxonomy, with constructors in `errors`
//!
//! The lexer and parser live in other crates; this crate only consumes the
//! root `Expression` they produce.

mod builtins;
mod condition;
mod environment;
pub mod errors;
mod expression;
mod function;
mod heap;
mod interpreter;
mod native;
mod object;
mod print_handler;
mod reduce;

#[cfg(test)]
mod test_helpers;

pub use condition::Condition;
pub use environment::Environment;
pub use errors::{EvalError, EvalResult};
pub use expression::Expression;
pub use function::{BoundArgs, Callable, FunctionCall, FunctionDefine};
pub use heap::Heap;
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_DEPTH};
pub use native::{BuiltInFunction, NativeCall, NativeFn};
pub use object::{Object, ObjectRef};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use reduce::{reduce, Step};
pub use redex_stack::ensure_sufficient_stack;
