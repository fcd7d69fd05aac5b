//! Shape variants and constructors.

/// Structural description of a value, prior to text rendering.
///
/// A `Shape` tree is built fresh for every rendering call, consumed
/// immediately by a layout strategy, and discarded. Ownership is strictly
/// tree-shaped: no sharing, no cycles, even when the source value graph has
/// both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Already-final leaf text: a quoted string, a numeric literal, `nil`.
    Scalar(String),

    /// Ordered elements in original traversal order, never reordered.
    Sequence(Vec<Shape>),

    /// Key/value pairs, sorted at describe time by the textual form of the
    /// rendered key (stable, so equal keys keep encounter order).
    Mapping(Vec<(Shape, Shape)>),

    /// A type name plus fields in declaration order, not sorted.
    Record {
        /// Declared name of the composite type.
        type_name: String,
        /// Field name/value pairs in declaration order.
        fields: Vec<(String, Shape)>,
    },
}

impl Shape {
    /// Scalar from already-final text.
    pub fn scalar(text: impl Into<String>) -> Self {
        Shape::Scalar(text.into())
    }

    /// Record with named fields in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use descry::Shape;
    ///
    /// let shape = Shape::record("Point", [
    ///     ("x", Shape::scalar("1")),
    ///     ("y", Shape::scalar("2")),
    /// ]);
    /// assert!(!shape.is_scalar());
    /// ```
    pub fn record<N: Into<String>>(
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = (N, Shape)>,
    ) -> Self {
        Shape::Record {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// True for leaf shapes.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Shape::Scalar(_))
    }
}
