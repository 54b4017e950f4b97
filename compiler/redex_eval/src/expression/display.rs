//! Display (printable form) and Debug for expressions.
//!
//! Objects can contain themselves once mutated; a cycle prints as `[...]`.

use std::fmt::{self, Write};

use redex_ir::Name;
use rustc_hash::FxHashSet;

use super::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "Number({n})"),
            Expression::Boolean(b) => write!(f, "Boolean({b})"),
            Expression::Null => f.write_str("Null"),
            Expression::String(s) => write!(f, "String({:?})", &**s),
            Expression::Identifier(_) => write!(f, "Identifier({self})"),
            Expression::List(_) => write!(f, "List({self})"),
            Expression::Object(_) => write!(f, "Object({self})"),
            Expression::Condition(_) => write!(f, "Condition({self})"),
            Expression::FunctionDefine(_) => write!(f, "FunctionDefine({self})"),
            Expression::BuiltIn(_) => write!(f, "BuiltIn({self})"),
            Expression::FunctionCall(_) => write!(f, "FunctionCall({self})"),
        }
    }
}

/// A unit of pending output. Display walks the tree with an explicit stack
/// of these, so deeply nested values never recurse on the native stack.
enum Piece {
    Expr(Expression),
    Text(&'static str),
    Key(Name),
    /// End of an object; it leaves the path used to detect cycles.
    Close(*const ()),
}

fn write_expr(f: &mut fmt::Formatter<'_>, root: &Expression) -> fmt::Result {
    let mut pending = vec![Piece::Expr(root.clone())];
    let mut open: FxHashSet<*const ()> = FxHashSet::default();

    while let Some(piece) = pending.pop() {
        match piece {
            Piece::Expr(expr) => write_node(f, &expr, &mut pending, &mut open)?,
            Piece::Text(text) => f.write_str(text)?,
            Piece::Key(key) => write!(f, "{key}: ")?,
            Piece::Close(addr) => {
                open.remove(&addr);
                f.write_char(']')?;
            }
        }
    }
    Ok(())
}

/// Write the leading text of `expr` and schedule the rest, last piece first.
fn write_node(
    f: &mut fmt::Formatter<'_>,
    expr: &Expression,
    pending: &mut Vec<Piece>,
    open: &mut FxHashSet<*const ()>,
) -> fmt::Result {
    match expr {
        Expression::Number(n) => write!(f, "{n}"),
        Expression::Boolean(b) => write!(f, "{b}"),
        Expression::Null => f.write_str("null"),
        Expression::String(s) => write_quoted(f, s),
        Expression::Identifier(id) => write!(f, "{id}"),
        Expression::List(items) => {
            if items.is_empty() {
                return f.write_str("null");
            }
            schedule_joined(pending, items, "; ");
            Ok(())
        }
        Expression::Object(obj) => {
            let addr = obj.addr();
            if !open.insert(addr) {
                return f.write_str("[...]");
            }
            f.write_char('[')?;
            pending.push(Piece::Close(addr));

            let object = obj.borrow();
            let mut ordered = Vec::with_capacity(2 * object.size());
            for item in &object.indexed {
                if !ordered.is_empty() {
                    ordered.push(Piece::Text(", "));
                }
                ordered.push(Piece::Expr(item.clone()));
            }
            for (key, value) in object.sorted_named() {
                if !ordered.is_empty() {
                    ordered.push(Piece::Text(", "));
                }
                ordered.push(Piece::Key(key.clone()));
                ordered.push(Piece::Expr(value.clone()));
            }
            pending.extend(ordered.into_iter().rev());
            Ok(())
        }
        Expression::Condition(c) => {
            f.write_str("if(")?;
            pending.push(Piece::Text(")"));
            if let Some(else_branch) = &c.else_branch {
                pending.push(Piece::Expr(else_branch.clone()));
                pending.push(Piece::Text(", "));
            }
            pending.push(Piece::Expr(c.then_branch.clone()));
            pending.push(Piece::Text(", "));
            pending.push(Piece::Expr(c.condition.clone()));
            Ok(())
        }
        Expression::FunctionDefine(func) => {
            f.write_char('(')?;
            for (i, param) in func.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{param}")?;
            }
            if let Some(variadic) = &func.variadic {
                if !func.params.is_empty() {
                    f.write_str(", ")?;
                }
                write!(f, "{variadic}...")?;
            }
            f.write_str("){")?;
            pending.push(Piece::Text("}"));
            pending.push(Piece::Expr(func.body.clone()));
            Ok(())
        }
        Expression::BuiltIn(builtin) => write!(f, "<builtin {}>", builtin.name()),
        Expression::FunctionCall(call) => {
            pending.push(Piece::Text(")"));
            schedule_joined(pending, &call.args, ", ");
            pending.push(Piece::Text("("));
            pending.push(Piece::Expr(call.callee.clone()));
            Ok(())
        }
    }
}

/// Schedule `items` separated by `separator`.
fn schedule_joined(pending: &mut Vec<Piece>, items: &[Expression], separator: &'static str) {
    for (i, item) in items.iter().enumerate().rev() {
        pending.push(Piece::Expr(item.clone()));
        if i > 0 {
            pending.push(Piece::Text(separator));
        }
    }
}

/// Double-quoted, escaping `\`, newline, carriage return, tab and `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '"' => f.write_str("\\\"")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
