//! Layout strategies.
//!
//! A layout turns a [`Shape`] into final text. [`SingleLine`] renders
//! comma-joined inline lists with no indentation; [`MultiLine`] puts each
//! child on its own line, one indent level deeper than its parent, and keeps
//! a child's continuation lines aligned under the child's own first
//! character.
//!
//! Both strategies render bottom-up: a child's complete text is known before
//! the parent embeds it, which keeps the multi-line re-indentation
//! arithmetic local to each embedding site.

mod multi_line;
mod single_line;

pub use multi_line::MultiLine;
pub use single_line::SingleLine;


use crate::shape::Shape;

/// Strategy selector for [`crate::render_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Compact, no newlines.
    SingleLine,
    /// Indented, one child per line.
    MultiLine,
}

/// A rendering strategy from shapes to text.
pub trait Layout {
    /// Render `shape` to its final text.
    fn render(&self, shape: &Shape) -> String;
}
