//! Stack growth guard for the parts of EScript that recurse natively.
//!
//! Evaluation never recurses on the host stack: the machine walks an explicit
//! frame chain. Two places still do: the precedence-climbing parser (one
//! native call per nesting level or chained `;`) and the textual rendering of
//! terms used in diagnostics. Both wrap their recursive step in
//! [`with_stack_headroom`] so long programs and deep nesting do not abort the
//! host with a stack overflow.
//!
//! On `wasm32` the guard is a plain call; the runtime owns the stack there.

/// Grow when fewer than this many bytes remain.
const HEADROOM: usize = 128 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(HEADROOM, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
