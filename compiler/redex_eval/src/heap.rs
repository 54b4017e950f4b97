//! Shared, reference-counted storage for expression payloads.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted pointer to an expression payload.
///
/// Cloning an `Expression` clones one of these, never the payload. Two
/// handles are *the same value* when `Heap::ptr_eq` holds; objects rely on
/// this for aliasing, functions for identity equality.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// The payload, when no other handle shares it.
    #[inline]
    pub(crate) fn get_mut(this: &mut Self) -> Option<&mut T> {
        Rc::get_mut(&mut this.0)
    }

    /// Address of the payload, for cycle detection.
    #[inline]
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl<T> From<Vec<T>> for Heap<[T]> {
    fn from(items: Vec<T>) -> Self {
        Heap(Rc::from(items))
    }
}

impl From<&str> for Heap<str> {
    fn from(text: &str) -> Self {
        Heap(Rc::from(text))
    }
}

impl From<String> for Heap<str> {
    fn from(text: String) -> Self {
        Heap(Rc::from(text))
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
