//! Stack safety for nested reduction.
//!
//! Tail positions of a program are reduced by the trampoline loop and never
//! touch the native stack, but arguments, conditions and object children are
//! reduced by a nested call. A deeply nested program (or a non-tail recursive
//! function) can therefore still recurse on the host. Every nested reduction
//! goes through [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new segment when the red zone is hit.
//! - **WASM targets**: plain call (the runtime owns the stack).

/// Minimum stack space to keep available (128KB red zone).
///
/// One nested reduction of a builtin call keeps several frames alive
/// (reduce, compute, call, native op).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the native stack if less than the red zone remains.
///
/// # Example
///
/// ```
/// use redex_stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(1_000), 1_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Remaining native stack in bytes, when the platform can tell.
///
/// Used by tracing output only; never for control flow.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// WASM version - unknown.
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
