//! `Describe` adapters for std types, plus the helpers adapter authors use.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use super::{Describe, DescribeContext, TRUNCATED};
use crate::layout::{Layout, SingleLine};
use crate::shape::Shape;

// ============================================================================
// Scalars
// ============================================================================

macro_rules! describe_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Describe for $ty {
            fn describe(&self, _ctx: DescribeContext) -> Shape {
                Shape::Scalar(self.to_string())
            }
        }
    )*};
}

describe_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! describe_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Describe for $ty {
            fn describe(&self, _ctx: DescribeContext) -> Shape {
                // Whole finite floats keep a trailing `.0` so they still
                // read as floats.
                if self.is_finite() && self.fract() == 0.0 {
                    Shape::Scalar(format!("{self:.1}"))
                } else {
                    Shape::Scalar(self.to_string())
                }
            }
        }
    )*};
}

describe_float!(f32, f64);

impl Describe for bool {
    fn describe(&self, _ctx: DescribeContext) -> Shape {
        Shape::Scalar(if *self { "true" } else { "false" }.to_string())
    }
}

impl Describe for char {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        if ctx.debug() {
            let mut out = String::from('\'');
            push_escaped(&mut out, *self, '\'');
            out.push('\'');
            Shape::Scalar(out)
        } else {
            Shape::Scalar(self.to_string())
        }
    }
}

impl Describe for str {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        Shape::Scalar(render_text(self, ctx.debug()))
    }
}

impl Describe for String {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        self.as_str().describe(ctx)
    }
}

impl Describe for Cow<'_, str> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        self.as_ref().describe(ctx)
    }
}

/// Quote and escape text in debug mode; raw otherwise.
fn render_text(text: &str, debug: bool) -> String {
    if !debug {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        push_escaped(&mut out, c, '"');
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char, quote: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c => out.push(c),
    }
}

// ============================================================================
// Optionals and indirection
// ============================================================================

impl<T: Describe> Describe for Option<T> {
    /// `None` is the `nil` marker in both modes; `Some` is transparent.
    fn describe(&self, ctx: DescribeContext) -> Shape {
        match self {
            Some(value) => value.describe(ctx),
            None => Shape::Scalar("nil".to_string()),
        }
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        (**self).describe(ctx)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        (**self).describe(ctx)
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        (**self).describe(ctx)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        (**self).describe(ctx)
    }
}

// ============================================================================
// Collections
// ============================================================================

/// Describe an ordered collection as a `Sequence`, honoring the depth guard
/// and preserving iteration order.
pub fn sequence_of<I>(items: I, ctx: DescribeContext) -> Shape
where
    I: IntoIterator,
    I::Item: Describe,
{
    if ctx.at_depth_limit() {
        return Shape::Scalar(TRUNCATED.to_string());
    }
    let child = ctx.child();
    Shape::Sequence(items.into_iter().map(|item| item.describe(child)).collect())
}

/// Describe key/value pairs as a `Mapping`, sorted stably by the textual
/// (single-line rendered) form of each key so output is independent of the
/// source map's iteration order.
pub fn mapping_of<I, K, V>(pairs: I, ctx: DescribeContext) -> Shape
where
    I: IntoIterator<Item = (K, V)>,
    K: Describe,
    V: Describe,
{
    if ctx.at_depth_limit() {
        return Shape::Scalar(TRUNCATED.to_string());
    }
    let child = ctx.child();
    // Keys render unquoted even in debug mode; only values carry debug
    // markup.
    let key_child = child.without_debug();
    let mut described: Vec<(String, Shape, Shape)> = pairs
        .into_iter()
        .map(|(key, value)| {
            let key_shape = key.describe(key_child);
            let key_text = SingleLine.render(&key_shape);
            (key_text, key_shape, value.describe(child))
        })
        .collect();
    // Stable sort: equal keys keep encounter order.
    described.sort_by(|a, b| a.0.cmp(&b.0));
    Shape::Mapping(
        described
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .collect(),
    )
}

/// Describe a composite value as a `Record`, honoring the depth guard.
///
/// Fields are produced by a closure so that a cyclic value graph stops at
/// the guard instead of recursing first: the closure only runs below the
/// depth limit, and receives the child context to describe field values
/// with.
pub fn record_of<N, I, F>(type_name: impl Into<String>, ctx: DescribeContext, fields: F) -> Shape
where
    N: Into<String>,
    I: IntoIterator<Item = (N, Shape)>,
    F: FnOnce(DescribeContext) -> I,
{
    if ctx.at_depth_limit() {
        return Shape::Scalar(TRUNCATED.to_string());
    }
    Shape::record(type_name, fields(ctx.child()))
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        sequence_of(self, ctx)
    }
}

impl<T: Describe> Describe for [T] {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        sequence_of(self, ctx)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        sequence_of(self, ctx)
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        sequence_of(self, ctx)
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        mapping_of(self, ctx)
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        mapping_of(self, ctx)
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe(&self, ctx: DescribeContext) -> Shape {
        sequence_of(self, ctx)
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    /// Hash iteration order is unstable, so elements are sorted by their
    /// rendered text to keep output stable across runs.
    fn describe(&self, ctx: DescribeContext) -> Shape {
        if ctx.at_depth_limit() {
            return Shape::Scalar(TRUNCATED.to_string());
        }
        let child = ctx.child();
        let mut elements: Vec<(String, Shape)> = self
            .iter()
            .map(|item| {
                let shape = item.describe(child);
                (SingleLine.render(&shape), shape)
            })
            .collect();
        elements.sort_by(|a, b| a.0.cmp(&b.0));
        Shape::Sequence(elements.into_iter().map(|(_, shape)| shape).collect())
    }
}

// ============================================================================
// Fallbacks
// ============================================================================

/// Pre-rendered free text: described as-is, never quoted, escaped, or
/// recursed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preformatted(pub String);

impl Preformatted {
    /// Wrap already-formatted text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Describe for Preformatted {
    fn describe(&self, _ctx: DescribeContext) -> Shape {
        Shape::Scalar(self.0.clone())
    }
}

/// Best-effort fallback for values with no `Describe` adapter: renders the
/// wrapped value's `Debug` text as a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque<T>(pub T);

impl<T: fmt::Debug> Describe for Opaque<T> {
    fn describe(&self, _ctx: DescribeContext) -> Shape {
        Shape::Scalar(format!("{:?}", self.0))
    }
}
