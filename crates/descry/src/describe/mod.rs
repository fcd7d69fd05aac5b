//! Value description.
//!
//! [`Describe`] classifies a value into a [`Shape`]. There is no runtime
//! reflection: the closed set of shape variants is populated by adapter
//! impls. Std types are covered in this module; [`Opaque`] wraps anything
//! else that is `Debug`; user records implement the trait by hand through
//! the [`record_of`]/[`sequence_of`]/[`mapping_of`] helpers, which also
//! honor the depth guard.
//!
//! # Example
//!
//! ```
//! use descry::describe::record_of;
//! use descry::{Describe, DescribeContext, Shape};
//!
//! struct Point { x: i32, y: i32 }
//!
//! impl Describe for Point {
//!     fn describe(&self, ctx: DescribeContext) -> Shape {
//!         record_of("Point", ctx, |child| [
//!             ("x", self.x.describe(child)),
//!             ("y", self.y.describe(child)),
//!         ])
//!     }
//! }
//!
//! let shape = Point { x: 1, y: 2 }.describe(DescribeContext::new(false));
//! assert!(!shape.is_scalar());
//! ```

use crate::shape::Shape;

mod impls;

pub use impls::{mapping_of, record_of, sequence_of, Opaque, Preformatted};


/// Recursion guard: children at this depth describe as [`TRUNCATED`].
///
/// The source value graph may contain cycles or pathological nesting; there
/// is no universal identity over `&dyn Describe` to key a visited set on,
/// so the guard is a hard depth cap instead.
pub const MAX_DESCRIBE_DEPTH: usize = 64;

/// Marker emitted when the depth guard trips.
pub const TRUNCATED: &str = "...";

/// Rendering mode and recursion depth for one describe pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeContext {
    debug: bool,
    depth: usize,
}

impl DescribeContext {
    /// Context for a fresh top-level pass.
    pub fn new(debug: bool) -> Self {
        Self { debug, depth: 0 }
    }

    /// Whether debug markup (quoting, escapes) is requested.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Context for a child one nesting level deeper.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            debug: self.debug,
            depth: self.depth + 1,
        }
    }

    /// Same depth with debug markup off. Mapping keys describe through
    /// this, so a key stays unquoted even in a debug pass.
    #[must_use]
    pub fn without_debug(&self) -> Self {
        Self {
            debug: false,
            depth: self.depth,
        }
    }

    /// True once [`MAX_DESCRIBE_DEPTH`] has been reached.
    pub fn at_depth_limit(&self) -> bool {
        self.depth >= MAX_DESCRIBE_DEPTH
    }
}

/// Classify a value into a [`Shape`].
///
/// Implementations must be pure functions of `(self, ctx)` and must not
/// fail: anything that cannot be classified renders as a best-effort scalar
/// (see [`Opaque`]). Container impls describe children one level deeper via
/// [`DescribeContext::child`] and honor the depth guard.
pub trait Describe {
    /// Produce the structural description of `self`.
    fn describe(&self, ctx: DescribeContext) -> Shape;
}
