//! Assignment and the binary operator precedence chain.
//!
//! Every operator becomes a call of its builtin identifier, positioned at
//! the operator token.

use redex_eval::errors::{syntax_error, EvalResult};
use redex_eval::Expression;
use redex_ir::builtin_names::{
    ADD, ASSIGN, DEFINE, DIV, EQ, FIELD_DEFINE, FIELD_GET, FIELD_SET, GE, GT, INDEX_DEFINE,
    INDEX_GET, INDEX_SET, LE, LT, MUL, NE, NEG, NOT, SUB,
};
use redex_ir::{Identifier, Position, TokenKind};
use redex_stack::ensure_sufficient_stack;

use crate::Parser;

/// `name(args...)` positioned at `pos`.
pub(crate) fn builtin_call(name: &str, args: Vec<Expression>, pos: &Position) -> Expression {
    let callee = Expression::identifier(Identifier::new(name, pos.clone()));
    Expression::call(callee, args, pos.clone())
}

/// Assignment operator forms.
#[derive(Clone, Copy)]
enum Assign {
    /// `=`
    Set,
    /// `:=`
    Define,
    /// `+=`, `-=`, `*=`, `/=`: set to the result of the operator.
    Update(&'static str),
}

fn assign_op(kind: &TokenKind) -> Option<Assign> {
    Some(match kind {
        TokenKind::Eq => Assign::Set,
        TokenKind::ColonEq => Assign::Define,
        TokenKind::PlusEq => Assign::Update(ADD),
        TokenKind::MinusEq => Assign::Update(SUB),
        TokenKind::StarEq => Assign::Update(MUL),
        TokenKind::SlashEq => Assign::Update(DIV),
        _ => return None,
    })
}

fn comparison_op(kind: &TokenKind) -> Option<&'static str> {
    Some(match kind {
        TokenKind::EqEq => EQ,
        TokenKind::NotEq => NE,
        TokenKind::Lt => LT,
        TokenKind::LtEq => LE,
        TokenKind::Gt => GT,
        TokenKind::GtEq => GE,
        _ => return None,
    })
}

fn additive_op(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Plus => Some(ADD),
        TokenKind::Minus => Some(SUB),
        _ => None,
    }
}

fn multiplicative_op(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Star => Some(MUL),
        TokenKind::Slash => Some(DIV),
        _ => None,
    }
}

/// Assignable shapes of a parsed left-hand side.
enum Place {
    Variable(Expression),
    Field(Expression, Expression),
    Index(Expression, Expression),
}

/// Recognize `x`, `o.k` and `o[i]` in their desugared form.
fn place(target: &Expression) -> Option<Place> {
    match target {
        Expression::Identifier(_) => Some(Place::Variable(target.clone())),
        Expression::FunctionCall(call) => {
            let name = call.callee.as_identifier()?.as_str();
            match (name, call.args.as_slice()) {
                (FIELD_GET, [object, key]) => Some(Place::Field(object.clone(), key.clone())),
                (INDEX_GET, [object, index]) => Some(Place::Index(object.clone(), index.clone())),
                _ => None,
            }
        }
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested source cannot
    /// overflow the native stack.
    pub(crate) fn parse_expr(&mut self) -> EvalResult<Expression> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Right associative: `a = b = c` assigns `c` to both.
    fn parse_assignment(&mut self) -> EvalResult<Expression> {
        let target = self.parse_comparison()?;
        let Some(op) = assign_op(self.cursor.current_kind()) else {
            return Ok(target);
        };
        let pos = self.cursor.current_pos();
        let Some(place) = place(&target) else {
            return Err(syntax_error(&pos, self.cursor.current_kind().to_string()));
        };
        self.cursor.advance();
        self.cursor.skip_newlines();
        let value = self.parse_expr()?;

        Ok(match (place, op) {
            (Place::Variable(x), Assign::Set) => builtin_call(ASSIGN, vec![x, value], &pos),
            (Place::Variable(x), Assign::Define) => builtin_call(DEFINE, vec![x, value], &pos),
            (Place::Variable(x), Assign::Update(name)) => {
                let updated = builtin_call(name, vec![x.clone(), value], &pos);
                builtin_call(ASSIGN, vec![x, updated], &pos)
            }
            (Place::Field(o, k), Assign::Set) => builtin_call(FIELD_SET, vec![o, k, value], &pos),
            (Place::Field(o, k), Assign::Define) => {
                builtin_call(FIELD_DEFINE, vec![o, k, value], &pos)
            }
            (Place::Field(o, k), Assign::Update(name)) => {
                let current = builtin_call(FIELD_GET, vec![o.clone(), k.clone()], &pos);
                let updated = builtin_call(name, vec![current, value], &pos);
                builtin_call(FIELD_SET, vec![o, k, updated], &pos)
            }
            (Place::Index(o, i), Assign::Set) => builtin_call(INDEX_SET, vec![o, i, value], &pos),
            (Place::Index(o, i), Assign::Define) => {
                builtin_call(INDEX_DEFINE, vec![o, i, value], &pos)
            }
            (Place::Index(o, i), Assign::Update(name)) => {
                let current = builtin_call(INDEX_GET, vec![o.clone(), i.clone()], &pos);
                let updated = builtin_call(name, vec![current, value], &pos);
                builtin_call(INDEX_SET, vec![o, i, updated], &pos)
            }
        })
    }

    fn parse_comparison(&mut self) -> EvalResult<Expression> {
        self.parse_binary(comparison_op, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> EvalResult<Expression> {
        self.parse_binary(additive_op, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> EvalResult<Expression> {
        self.parse_binary(multiplicative_op, Self::parse_unary)
    }

    /// Left associative binary level: `operand (op operand)*`.
    fn parse_binary(
        &mut self,
        op: fn(&TokenKind) -> Option<&'static str>,
        operand: fn(&mut Self) -> EvalResult<Expression>,
    ) -> EvalResult<Expression> {
        let mut left = operand(self)?;
        while let Some(name) = op(self.cursor.current_kind()) {
            let pos = self.cursor.current_pos();
            self.cursor.advance();
            self.cursor.skip_newlines();
            let right = operand(self)?;
            left = builtin_call(name, vec![left, right], &pos);
        }
        Ok(left)
    }

    /// `-x` and `!x`.
    fn parse_unary(&mut self) -> EvalResult<Expression> {
        let name = match self.cursor.current_kind() {
            TokenKind::Minus => NEG,
            TokenKind::Bang => NOT,
            _ => return self.parse_postfix(),
        };
        let pos = self.cursor.current_pos();
        self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(builtin_call(name, vec![operand], &pos))
    }
}
