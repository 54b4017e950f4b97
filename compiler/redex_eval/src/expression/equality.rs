//! Structural equality over reduced values.
//!
//! Numbers, booleans, strings and null compare by value, objects
//! structurally, and functions and unreduced syntax by identity.

use rustc_hash::FxHashSet;

use super::Expression;
use crate::Heap;

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match shallow_eq(self, other) {
            Some(result) => result,
            None => structural_eq(self, other),
        }
    }
}

/// Equality of everything but lists and objects; `None` when both sides
/// are lists or both are objects.
fn shallow_eq(a: &Expression, b: &Expression) -> Option<bool> {
    let result = match (a, b) {
        (Expression::Number(x), Expression::Number(y)) => x == y,
        (Expression::Boolean(x), Expression::Boolean(y)) => x == y,
        (Expression::Null, Expression::Null) => true,
        (Expression::String(x), Expression::String(y)) => **x == **y,
        (Expression::Identifier(x), Expression::Identifier(y)) => x == y,
        (Expression::List(_), Expression::List(_))
        | (Expression::Object(_), Expression::Object(_)) => return None,
        (Expression::Condition(x), Expression::Condition(y)) => Heap::ptr_eq(x, y),
        (Expression::FunctionDefine(x), Expression::FunctionDefine(y)) => Heap::ptr_eq(x, y),
        (Expression::BuiltIn(x), Expression::BuiltIn(y)) => Heap::ptr_eq(x, y),
        (Expression::FunctionCall(x), Expression::FunctionCall(y)) => Heap::ptr_eq(x, y),
        _ => false,
    };
    Some(result)
}

/// Compare with a worklist of pending pairs. An object pair met a second
/// time is assumed equal, so cycles compare equal and every pair is
/// expanded once.
fn structural_eq(a: &Expression, b: &Expression) -> bool {
    let mut pending = vec![(a.clone(), b.clone())];
    let mut assumed: FxHashSet<(*const (), *const ())> = FxHashSet::default();

    while let Some((a, b)) = pending.pop() {
        match (&a, &b) {
            (Expression::List(x), Expression::List(y)) => {
                if x.len() != y.len() {
                    return false;
                }
                pending.extend(x.iter().cloned().zip(y.iter().cloned()));
            }
            (Expression::Object(x), Expression::Object(y)) => {
                if Heap::ptr_eq(x, y) || !assumed.insert((x.addr(), y.addr())) {
                    continue;
                }
                let (l, r) = (x.borrow(), y.borrow());
                if l.indexed.len() != r.indexed.len() || l.named.len() != r.named.len() {
                    return false;
                }
                pending.extend(l.indexed.iter().cloned().zip(r.indexed.iter().cloned()));
                for (key, value) in &l.named {
                    let Some(other) = r.named.get(key) else {
                        return false;
                    };
                    pending.push((value.clone(), other.clone()));
                }
            }
            _ => {
                if shallow_eq(&a, &b) != Some(true) {
                    return false;
                }
            }
        }
    }
    true
}
