//! Recursive descent parser for redex.
//!
//! Produces the root `Expression` of a program: an expression list whose
//! elements are separated by newlines or `;`. Operator syntax is desugared
//! into calls of the builtin operator identifiers, so the evaluator only
//! ever sees identifiers, literals, conditions, function literals, object
//! literals and calls.

mod cursor;
mod grammar;

use redex_eval::errors::{syntax_error, EvalResult};
use redex_eval::Expression;
use redex_ir::TokenList;

use cursor::Cursor;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole token stream as a program.
    pub fn parse_program(mut self) -> EvalResult<Expression> {
        let items = self.parse_sequence(None)?;
        tracing::trace!(expressions = items.len(), "parsed program");
        Ok(Expression::list(items))
    }
}

/// Lex and parse `source`. `file` names the source in positions.
///
/// Lexer failures surface as `EvalError::Syntax`, like parse failures.
#[tracing::instrument(level = "debug", skip(source))]
pub fn parse(source: &str, file: &str) -> EvalResult<Expression> {
    let tokens =
        redex_lexer::lex(source, file).map_err(|err| syntax_error(&err.pos, err.literal))?;
    parse_tokens(&tokens)
}

/// Parse an already lexed program.
pub fn parse_tokens(tokens: &TokenList) -> EvalResult<Expression> {
    Parser::new(tokens).parse_program()
}
