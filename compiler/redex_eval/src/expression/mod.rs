//! The expression model.
//!
//! Unevaluated syntax and fully-reduced values share one type: a value is
//! simply an expression for which `is_reducible` is false. Payloads live
//! behind `Heap` handles, so cloning an expression never copies a tree.

mod display;
mod equality;
mod teardown;

use redex_ir::{Identifier, Position};

use crate::condition::Condition;
use crate::function::{Callable, FunctionCall, FunctionDefine};
use crate::native::BuiltInFunction;
use crate::object::{self, Object, ObjectRef};
use crate::Heap;

/// An expression: AST node and runtime value at once.
#[derive(Clone)]
pub enum Expression {
    Number(i64),
    Boolean(bool),
    Null,
    String(Heap<str>),
    /// Reference to a binding; reduces to the bound value.
    Identifier(Identifier),
    /// Sequence evaluated left to right; reduces to its last element.
    List(Heap<[Expression]>),
    /// Mutable composite, shared by every binding that holds it.
    Object(ObjectRef),
    Condition(Heap<Condition>),
    /// User function. Captures no environment.
    FunctionDefine(Heap<FunctionDefine>),
    BuiltIn(Heap<BuiltInFunction>),
    FunctionCall(Heap<FunctionCall>),
}

impl Expression {
    #[inline]
    pub fn number(n: i64) -> Self {
        Expression::Number(n)
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Expression::Boolean(b)
    }

    pub fn string(text: impl Into<Heap<str>>) -> Self {
        Expression::String(text.into())
    }

    pub fn identifier(id: Identifier) -> Self {
        Expression::Identifier(id)
    }

    /// Expression list. An empty list is `Null`.
    pub fn list(items: Vec<Expression>) -> Self {
        if items.is_empty() {
            Expression::Null
        } else {
            Expression::List(items.into())
        }
    }

    /// A fresh object, not shared with any other.
    pub fn object(object: Object) -> Self {
        Expression::Object(object.into_ref())
    }

    pub fn condition(
        condition: Expression,
        then_branch: Expression,
        else_branch: Option<Expression>,
        pos: Position,
    ) -> Self {
        Expression::Condition(Heap::new(Condition {
            condition,
            then_branch,
            else_branch,
            pos,
        }))
    }

    pub fn function(
        params: Vec<Identifier>,
        variadic: Option<Identifier>,
        body: Expression,
        pos: Position,
    ) -> Self {
        Expression::FunctionDefine(Heap::new(FunctionDefine {
            params,
            variadic,
            body,
            pos,
        }))
    }

    pub fn call(callee: Expression, args: Vec<Expression>, pos: Position) -> Self {
        Expression::FunctionCall(Heap::new(FunctionCall { callee, args, pos }))
    }

    pub fn builtin(function: BuiltInFunction) -> Self {
        Expression::BuiltIn(Heap::new(function))
    }

    /// Whether at least one more `compute` step applies.
    pub fn is_reducible(&self) -> bool {
        match self {
            Expression::Number(_)
            | Expression::Boolean(_)
            | Expression::Null
            | Expression::String(_)
            | Expression::FunctionDefine(_)
            | Expression::BuiltIn(_) => false,
            Expression::Identifier(_) | Expression::Condition(_) | Expression::FunctionCall(_) => {
                true
            }
            Expression::List(items) => !items.is_empty(),
            Expression::Object(obj) => object::is_reducible(obj),
        }
    }

    /// The call capability of user and builtin functions.
    pub fn as_callable(&self) -> Option<&dyn Callable> {
        match self {
            Expression::FunctionDefine(f) => Some(&**f),
            Expression::BuiltIn(f) => Some(&**f),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Expression::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Expression::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Expression::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Lower-case kind name, as used in type errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Number(_) => "number",
            Expression::Boolean(_) => "boolean",
            Expression::Null => "null",
            Expression::String(_) => "string",
            Expression::Identifier(_) => "identifier",
            Expression::List(_) => "list",
            Expression::Object(_) => "object",
            Expression::Condition(_) => "condition",
            Expression::FunctionDefine(_) | Expression::BuiltIn(_) => "function",
            Expression::FunctionCall(_) => "call",
        }
    }

    /// Source position, for the variants that are written in source.
    pub fn position(&self) -> Option<&Position> {
        match self {
            Expression::Identifier(id) => Some(&id.pos),
            Expression::Condition(c) => Some(&c.pos),
            Expression::FunctionDefine(f) => Some(&f.pos),
            Expression::FunctionCall(c) => Some(&c.pos),
            _ => None,
        }
    }

    /// Text written by `print`: strings unquoted, everything else in
    /// display form.
    pub fn printed(&self) -> String {
        match self {
            Expression::String(s) => s.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        Expression::Number(n)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Boolean(b)
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::string(text)
    }
}
