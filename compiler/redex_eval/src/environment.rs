//! Environment: the scope chain.
//!
//! Each environment owns one local mapping and a shared link to its parent.
//! `put` assigns to the nearest scope that already binds a name; `define`
//! only ever touches the local mapping. Every environment of one interpreter
//! also shares a `Runtime` (output sink and reduction depth accounting).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use redex_ir::{Identifier, Name};
use rustc_hash::FxHashMap;

use crate::errors::{already_defined, not_defined, stack_overflow, EvalResult};
use crate::{Expression, SharedPrintHandler};

/// A single-threaded, reference-counted scope.
///
/// `#[repr(transparent)]` keeps it the same size as `Rc<RefCell<T>>`.
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// A single scope containing bindings.
struct Scope {
    bindings: FxHashMap<Name, Expression>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    fn with_parent(parent: Option<LocalScope<Scope>>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

impl Drop for Scope {
    // Call chains build long parent chains; unlink them iteratively so the
    // recursive drop does not exhaust the native stack.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(scope) = next {
            next = match Rc::try_unwrap(scope.0) {
                Ok(cell) => cell.into_inner().parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// State shared by every environment of one interpreter.
struct Runtime {
    output: SharedPrintHandler,
    max_depth: usize,
    depth: Cell<usize>,
}

/// A node in the binding chain.
///
/// Cloning yields another handle to the same scope.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
    runtime: Rc<Runtime>,
}

impl Environment {
    /// Create an empty root environment.
    ///
    /// `max_depth` bounds the number of nested reductions.
    pub fn new(output: SharedPrintHandler, max_depth: usize) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(None)),
            runtime: Rc::new(Runtime {
                output,
                max_depth,
                depth: Cell::new(0),
            }),
        }
    }

    /// A new empty environment whose parent is `self`.
    pub fn make_child(&self) -> Environment {
        Environment {
            scope: LocalScope::new(Scope::with_parent(Some(self.scope.clone()))),
            runtime: Rc::clone(&self.runtime),
        }
    }

    /// Look `id` up here, then in each ancestor; the first match wins.
    pub fn get(&self, id: &Identifier) -> EvalResult {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let current = scope.borrow();
                if let Some(value) = current.bindings.get(&id.name) {
                    return Ok(value.clone());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(not_defined(id)),
            }
        }
    }

    /// Overwrite the binding of `id` in the nearest scope that has one.
    ///
    /// Never creates a binding.
    pub fn put(&self, id: &Identifier, value: Expression) -> EvalResult<()> {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let mut current = scope.borrow_mut();
                if let Some(slot) = current.bindings.get_mut(&id.name) {
                    *slot = value;
                    return Ok(());
                }
                current.parent.clone()
            };
            match parent {
                Some(parent) => scope = parent,
                None => return Err(not_defined(id)),
            }
        }
    }

    /// Bind `id` in the local scope.
    ///
    /// Shadowing an ancestor's binding is allowed; rebinding a local is not.
    pub fn define(&self, id: &Identifier, value: Expression) -> EvalResult<()> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(&id.name) {
            return Err(already_defined(id));
        }
        scope.bindings.insert(id.name.clone(), value);
        Ok(())
    }

    /// Whether the local scope binds `name`.
    pub fn has_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Bind without checking for an existing local binding.
    pub(crate) fn bind(&self, name: &str, value: Expression) {
        self.scope.borrow_mut().bindings.insert(Name::new(name), value);
    }

    /// Output sink for `print`/`println`.
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.runtime.output
    }

    pub fn max_depth(&self) -> usize {
        self.runtime.max_depth
    }

    /// Current number of nested reductions.
    pub fn depth(&self) -> usize {
        self.runtime.depth.get()
    }

    /// Count one nested reduction until the guard drops.
    pub(crate) fn enter(&self) -> EvalResult<DepthGuard> {
        let depth = self.runtime.depth.get() + 1;
        if depth > self.runtime.max_depth {
            return Err(stack_overflow(self.runtime.max_depth));
        }
        self.runtime.depth.set(depth);
        Ok(DepthGuard {
            runtime: Rc::clone(&self.runtime),
        })
    }
}

/// Releases one level of reduction depth on drop, including on error paths.
pub(crate) struct DepthGuard {
    runtime: Rc<Runtime>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let depth = self.runtime.depth.get();
        self.runtime.depth.set(depth.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests;
