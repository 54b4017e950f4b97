//! Lexer errors.

use redex_ir::Position;

/// Source text the lexer could not turn into a token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pos}: syntax error near {literal:?}")]
pub struct LexError {
    pub pos: Position,
    pub literal: String,
}
