//! Evaluation errors and their constructors.
//!
//! Every failure is an `EvalError` value, propagated by early return through
//! `compute`/`call`. The factory functions below are the construction API;
//! they keep message formats in one place.

use redex_ir::{Identifier, Name, Position};

use crate::Expression;

/// Result of evaluation.
pub type EvalResult<T = Expression> = Result<T, EvalError>;

/// Evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// `get`/`put` found no binding.
    #[error("{}: {} is not defined", .0.pos, .0.name)]
    NotDefined(Identifier),

    /// `define` found an existing local binding.
    #[error("{}: {} is already defined", .0.pos, .0.name)]
    AlreadyDefined(Identifier),

    /// Call target did not reduce to a function.
    #[error("{pos}: {value} is not function")]
    NotFunction { value: String, pos: Position },

    /// Wrong number of arguments at a call site.
    #[error("{pos}: {}", arity_message(.name, .expected, .got, .variadic))]
    MissmatchArgument {
        expected: usize,
        got: usize,
        /// The callee declares a variadic parameter.
        variadic: bool,
        /// Callee name, when the callee was written as an identifier.
        name: Option<Name>,
        pos: Position,
    },

    /// Indexed access outside `[0, max]`.
    #[error("index out of bounds: max {max}, got {got}")]
    OutOfBounds { max: i64, got: i64 },

    /// A condition did not reduce to a boolean.
    #[error("{pos}: condition must be boolean")]
    ConditionType { pos: Position },

    /// An operand had the wrong kind.
    #[error("{pos}: {name} must be {}", .expected.join(" or "))]
    TypeError {
        name: String,
        expected: Vec<&'static str>,
        pos: Position,
    },

    /// Produced by the lexer or parser.
    #[error("{pos}: syntax error near {literal:?}")]
    Syntax { pos: Position, literal: String },

    #[error("{pos}: division by zero")]
    DivisionByZero { pos: Position },

    #[error("{pos}: integer overflow in {operation}")]
    IntegerOverflow {
        operation: &'static str,
        pos: Position,
    },

    /// Nested reductions exceeded the configured limit.
    #[error("maximum reduction depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
}

impl EvalError {
    /// Source position of the failure, when the kind carries one.
    pub fn position(&self) -> Option<&Position> {
        match self {
            EvalError::NotDefined(id) | EvalError::AlreadyDefined(id) => Some(&id.pos),
            EvalError::NotFunction { pos, .. }
            | EvalError::MissmatchArgument { pos, .. }
            | EvalError::ConditionType { pos }
            | EvalError::TypeError { pos, .. }
            | EvalError::Syntax { pos, .. }
            | EvalError::DivisionByZero { pos }
            | EvalError::IntegerOverflow { pos, .. } => Some(pos),
            EvalError::OutOfBounds { .. } | EvalError::StackOverflow { .. } => None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn arity_message(name: &Option<Name>, expected: &usize, got: &usize, variadic: &bool) -> String {
    let at_least = if *variadic { "at least " } else { "" };
    match name {
        Some(name) => format!("{name}: expected {at_least}{expected} arguments, got {got}"),
        None => format!("expected {at_least}{expected} arguments, got {got}"),
    }
}

// Binding Errors

#[cold]
pub fn not_defined(id: &Identifier) -> EvalError {
    EvalError::NotDefined(id.clone())
}

#[cold]
pub fn already_defined(id: &Identifier) -> EvalError {
    EvalError::AlreadyDefined(id.clone())
}

// Call Errors

/// The callee expression, as written, is reported rather than its value.
#[cold]
pub fn not_function(callee: &Expression, pos: &Position) -> EvalError {
    EvalError::NotFunction {
        value: callee.to_string(),
        pos: pos.clone(),
    }
}

#[cold]
pub fn arity_mismatch(
    expected: usize,
    got: usize,
    variadic: bool,
    name: Option<&Name>,
    pos: &Position,
) -> EvalError {
    EvalError::MissmatchArgument {
        expected,
        got,
        variadic,
        name: name.cloned(),
        pos: pos.clone(),
    }
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::StackOverflow { depth }
}

// Operand Errors

/// Out of bounds access on a sequence of `len` elements.
///
/// `max` is the last valid index, or 0 when the sequence is empty.
#[cold]
pub fn out_of_bounds(len: usize, got: i64) -> EvalError {
    let max = i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1).max(0);
    EvalError::OutOfBounds { max, got }
}

#[cold]
pub fn condition_type(pos: &Position) -> EvalError {
    EvalError::ConditionType { pos: pos.clone() }
}

#[cold]
pub fn type_error(name: &str, expected: &[&'static str], pos: &Position) -> EvalError {
    EvalError::TypeError {
        name: name.to_string(),
        expected: expected.to_vec(),
        pos: pos.clone(),
    }
}

#[cold]
pub fn division_by_zero(pos: &Position) -> EvalError {
    EvalError::DivisionByZero { pos: pos.clone() }
}

#[cold]
pub fn integer_overflow(operation: &'static str, pos: &Position) -> EvalError {
    EvalError::IntegerOverflow {
        operation,
        pos: pos.clone(),
    }
}

// Syntax Errors

#[cold]
pub fn syntax_error(pos: &Position, literal: impl Into<String>) -> EvalError {
    EvalError::Syntax {
        pos: pos.clone(),
        literal: literal.into(),
    }
}
