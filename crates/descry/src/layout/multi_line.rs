//! Multi-line layout.
//!
//! Rendering is relative: every shape renders with its own first character
//! at column zero and internal continuation lines already aligned to that
//! origin. Embedding a child then means prefixing each of its lines after
//! the first with the child's start column — the column right after
//! `key: `/`name: `, or the element indent itself.
//!
//! The closing bracket of sequences and mappings gets its own line at the
//! parent's origin; the closing parenthesis of a record hugs its last field
//! instead. The asymmetry is deliberate, observable behavior.

use super::{Layout, SingleLine};
use crate::shape::Shape;

/// Renders each child on its own line, one indent level deeper than its
/// parent, with continuation lines aligned under the child's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiLine {
    indent_width: usize,
}

impl MultiLine {
    /// Layout with the given spaces-per-level.
    ///
    /// Widths below 1 are a configuration error rejected upstream by
    /// `FormatOption`; this constructor trusts its caller.
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    fn pad(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Layout for MultiLine {
    fn render(&self, shape: &Shape) -> String {
        match shape {
            Shape::Scalar(text) => text.clone(),
            Shape::Sequence(elements) if elements.is_empty() => "[]".to_string(),
            Shape::Sequence(elements) => {
                let pad = self.pad();
                let body = elements
                    .iter()
                    .map(|element| {
                        let rendered = self.render(element);
                        format!("{pad}{}", indent_tail(&rendered, self.indent_width))
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("[\n{body}\n]")
            }
            Shape::Mapping(pairs) if pairs.is_empty() => "[:]".to_string(),
            Shape::Mapping(pairs) => {
                let pad = self.pad();
                let body = pairs
                    .iter()
                    .map(|(key, value)| {
                        // Keys are single-line by contract; the value starts
                        // in the column right after `key: `.
                        let head = format!("{pad}{}: ", SingleLine.render(key));
                        let column = head.len();
                        format!("{head}{}", indent_tail(&self.render(value), column))
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                format!("[\n{body}\n]")
            }
            Shape::Record { type_name, fields } if fields.is_empty() => {
                format!("{type_name}()")
            }
            Shape::Record { type_name, fields } => {
                let pad = self.pad();
                let body = fields
                    .iter()
                    .map(|(name, value)| {
                        let head = format!("{pad}{name}: ");
                        let column = head.len();
                        format!("{head}{}", indent_tail(&self.render(value), column))
                    })
                    .collect::<Vec<_>>()
                    .join(",\n");
                // Closing parenthesis hugs the last field.
                format!("{type_name}(\n{body})")
            }
        }
    }
}

/// Re-indent every line after the first so the whole block stays aligned
/// under the column where the first character was placed.
fn indent_tail(text: &str, column: usize) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let pad = " ".repeat(column);
    let mut lines = text.split('\n');
    let mut out = String::with_capacity(text.len());
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        // Blank lines stay blank rather than picking up trailing spaces.
        if !line.is_empty() {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}
