//! Single-line layout.

use super::Layout;
use crate::shape::Shape;

/// Renders any shape as one line: comma-joined lists, no indentation, no
/// trailing whitespace.
///
/// An empty mapping renders as `[:]` so it stays distinguishable from an
/// empty sequence's `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleLine;

impl Layout for SingleLine {
    fn render(&self, shape: &Shape) -> String {
        match shape {
            Shape::Scalar(text) => text.clone(),
            Shape::Sequence(elements) => {
                let inner = elements
                    .iter()
                    .map(|element| self.render(element))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{inner}]")
            }
            Shape::Mapping(pairs) if pairs.is_empty() => "[:]".to_string(),
            Shape::Mapping(pairs) => {
                let inner = pairs
                    .iter()
                    .map(|(key, value)| format!("{}: {}", self.render(key), self.render(value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{inner}]")
            }
            Shape::Record { type_name, fields } => {
                let inner = fields
                    .iter()
                    .map(|(name, value)| format!("{name}: {}", self.render(value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{type_name}({inner})")
            }
        }
    }
}
