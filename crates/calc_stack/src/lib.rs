//! Stack growth for deeply nested expression trees.
//!
//! Evaluating a tree node recurses once per nesting level. A payload can nest
//! nodes far deeper than the default thread stack tolerates, so every
//! recursive step goes through [`ensure_sufficient_stack`], which moves the
//! computation onto a freshly allocated segment when the current one runs low.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: direct call (the runtime owns the stack).
//!
//! # Configuration
//!
//! - **Red zone**: 64KB left on the current segment triggers growth
//! - **Segment size**: 1MB per growth

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn depth(value: &Value) -> usize {
///     ensure_sufficient_stack(|| match value {
///         Value::Mapping(m) => 1 + m.values().map(depth).max().unwrap_or(0),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: no growth, just call `f`.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
