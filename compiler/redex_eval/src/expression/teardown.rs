//! Iterative teardown of deep expression trees.
//!
//! A program can build values nested far deeper than a recursive drop can
//! walk on the native stack: long operator chains, or objects pushed into
//! objects. Each payload's `Drop` hands its children to `dismantle`, which
//! empties every descendant it owns alone before releasing it. No drop then
//! recurses more than one level.

use std::mem;

use super::Expression;
use crate::condition::Condition;
use crate::function::{FunctionCall, FunctionDefine};
use crate::object::Object;
use crate::Heap;

fn dismantle(mut pending: Vec<Expression>) {
    while let Some(mut expr) = pending.pop() {
        take_children(&mut expr, &mut pending);
    }
}

fn take(slot: &mut Expression) -> Expression {
    mem::replace(slot, Expression::Null)
}

/// Move the children of `expr` into `out` if no other handle shares its
/// payload. A shared payload is left intact for its last owner.
fn take_children(expr: &mut Expression, out: &mut Vec<Expression>) {
    match expr {
        Expression::List(items) => {
            if let Some(items) = Heap::get_mut(items) {
                out.extend(items.iter_mut().map(take));
            }
        }
        Expression::Object(obj) => {
            if let Some(cell) = Heap::get_mut(obj) {
                cell.get_mut().drain_into(out);
            }
        }
        Expression::Condition(condition) => {
            if let Some(condition) = Heap::get_mut(condition) {
                condition.drain_into(out);
            }
        }
        Expression::FunctionDefine(function) => {
            if let Some(function) = Heap::get_mut(function) {
                function.drain_into(out);
            }
        }
        Expression::FunctionCall(call) => {
            if let Some(call) = Heap::get_mut(call) {
                call.drain_into(out);
            }
        }
        Expression::Number(_)
        | Expression::Boolean(_)
        | Expression::Null
        | Expression::String(_)
        | Expression::Identifier(_)
        | Expression::BuiltIn(_) => {}
    }
}

impl Object {
    fn drain_into(&mut self, out: &mut Vec<Expression>) {
        out.append(&mut self.indexed);
        out.extend(self.named.drain().map(|(_, value)| value));
    }
}

impl Condition {
    fn drain_into(&mut self, out: &mut Vec<Expression>) {
        out.push(take(&mut self.condition));
        out.push(take(&mut self.then_branch));
        out.extend(self.else_branch.take());
    }
}

impl FunctionDefine {
    fn drain_into(&mut self, out: &mut Vec<Expression>) {
        out.push(take(&mut self.body));
    }
}

impl FunctionCall {
    fn drain_into(&mut self, out: &mut Vec<Expression>) {
        out.push(take(&mut self.callee));
        out.append(&mut self.args);
    }
}

macro_rules! drop_iteratively {
    ($($payload:ty),* $(,)?) => {$(
        impl Drop for $payload {
            fn drop(&mut self) {
                let mut children = Vec::new();
                self.drain_into(&mut children);
                dismantle(children);
            }
        }
    )*};
}

drop_iteratively!(Object, Condition, FunctionDefine, FunctionCall);
