//! Composite objects: an ordered indexed part and a named part.
//!
//! Objects are shared by reference (`ObjectRef`). Reduction never mutates
//! an object; it builds a new one from reduced children. Only the mutation
//! builtins (`push`, `pop`, field and index setters) change one in place,
//! and every binding holding the same object observes the change.

use std::cell::RefCell;

use redex_ir::{Name, Position};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::builtins::method;
use crate::errors::{not_defined, out_of_bounds, type_error, EvalResult};
use crate::reduce::reduce;
use crate::{Environment, Expression, Heap};

/// Shared handle to an object.
pub type ObjectRef = Heap<RefCell<Object>>;

#[derive(Clone, Default)]
pub struct Object {
    pub indexed: Vec<Expression>,
    pub named: FxHashMap<Name, Expression>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    pub fn from_indexed(indexed: Vec<Expression>) -> Self {
        Object {
            indexed,
            named: FxHashMap::default(),
        }
    }

    /// Move into a new shared handle.
    pub fn into_ref(self) -> ObjectRef {
        Heap::new(RefCell::new(self))
    }

    /// Count of indexed elements.
    pub fn length(&self) -> usize {
        self.indexed.len()
    }

    /// Count of indexed and named elements.
    pub fn size(&self) -> usize {
        self.indexed.len() + self.named.len()
    }

    /// Named entries in key order.
    pub fn sorted_named(&self) -> Vec<(&Name, &Expression)> {
        let mut entries: Vec<_> = self.named.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Look up a reduced key.
    ///
    /// Identifiers select a named entry, falling back to the builtin
    /// methods (`length`, `size`, `push`, `pop`). Numbers select an indexed
    /// element. `pos` locates the access for type errors.
    pub fn get(&self, key: &Expression, pos: &Position) -> EvalResult {
        match key {
            Expression::Identifier(id) => match self.named.get(&id.name) {
                Some(value) => Ok(value.clone()),
                None => method(id.as_str()).ok_or_else(|| not_defined(id)),
            },
            Expression::Number(i) => self.index(*i),
            _ => Err(type_error(
                "index of object",
                &["identifier", "number"],
                pos,
            )),
        }
    }

    /// Indexed element `i`.
    pub fn index(&self, i: i64) -> EvalResult {
        usize::try_from(i)
            .ok()
            .and_then(|slot| self.indexed.get(slot))
            .cloned()
            .ok_or_else(|| out_of_bounds(self.indexed.len(), i))
    }

    /// Overwrite indexed element `i`.
    pub fn set_index(&mut self, i: i64, value: Expression) -> EvalResult<()> {
        let len = self.indexed.len();
        match usize::try_from(i).ok().and_then(|slot| self.indexed.get_mut(slot)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(out_of_bounds(len, i)),
        }
    }

    pub fn push(&mut self, value: Expression) {
        self.indexed.push(value);
    }

    /// Remove the last indexed element.
    ///
    /// Fails with `OutOfBounds { max: 0, got: -1 }` when there is none.
    pub fn pop(&mut self) -> EvalResult {
        self.indexed.pop().ok_or_else(|| out_of_bounds(0, -1))
    }
}

/// Whether any child, at any depth, is reducible. Cycles count as reduced.
///
/// Walks nested objects with a worklist, so arbitrarily deep values are
/// safe to inspect.
pub(crate) fn is_reducible(obj: &ObjectRef) -> bool {
    let mut visited: FxHashSet<*const ()> = FxHashSet::default();
    visited.insert(obj.addr());
    let mut pending = vec![obj.clone()];

    while let Some(current) = pending.pop() {
        let object = current.borrow();
        for child in object.indexed.iter().chain(object.named.values()) {
            match child {
                Expression::Object(inner) => {
                    if visited.insert(inner.addr()) {
                        pending.push(inner.clone());
                    }
                }
                other => {
                    if other.is_reducible() {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Reduce every child and build a new object from the results.
///
/// Indexed children are reduced in order, then named children in key order.
pub(crate) fn reduce_children(obj: &ObjectRef, env: &Environment) -> EvalResult {
    let (indexed, named) = {
        let object = obj.borrow();
        let named: Vec<(Name, Expression)> = object
            .sorted_named()
            .into_iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        (object.indexed.clone(), named)
    };

    let mut result = Object {
        indexed: Vec::with_capacity(indexed.len()),
        named: FxHashMap::default(),
    };
    for item in &indexed {
        result.indexed.push(reduce(item, env)?);
    }
    for (key, value) in named {
        let value = reduce(&value, env)?;
        result.named.insert(key, value);
    }
    Ok(Expression::object(result))
}
