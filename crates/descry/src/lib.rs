//! Descry
//!
//! Debug-oriented value describer and pretty-printer.
//!
//! # Architecture
//!
//! Rendering is a two-pass pipeline:
//!
//! 1. **Describe pass**: bottom-up traversal classifying a value into a
//!    [`Shape`] tree (scalar, sequence, mapping, or record)
//! 2. **Layout pass**: a strategy renders the tree to text, either compact
//!    ([`SingleLine`]) or indented ([`MultiLine`])
//!
//! Both passes are pure; a `Shape` tree lives for exactly one call.
//!
//! # Modules
//!
//! - [`shape`]: the structural description produced by the describe pass
//! - [`describe`]: the [`Describe`] trait and adapters for std types
//! - [`layout`]: single-line and multi-line layout strategies
//! - [`option`]: formatting options and the process-wide default
//! - [`output`]: output sink abstraction
//! - [`printer`]: console/sink printing surface
//!
//! # Example
//!
//! ```
//! use descry::{render_value, FormatOption, LayoutKind};
//!
//! let option = FormatOption::default();
//! let values = vec![Some("hello"), None];
//! let text = render_value(&values, LayoutKind::SingleLine, true, &option);
//! assert_eq!(text, r#"["hello", nil]"#);
//! ```

pub mod describe;
pub mod layout;
pub mod option;
pub mod output;
pub mod printer;
pub mod shape;

pub use describe::{Describe, DescribeContext, Opaque, Preformatted};
pub use layout::{Layout, LayoutKind, MultiLine, SingleLine};
pub use option::{set_shared_option, shared_option, FormatOption, OptionError};
pub use output::{ConsoleOutput, Output, StringOutput, WriterOutput};
pub use printer::{debug_pretty_print, debug_print, pretty_print, print, Printer};
pub use shape::Shape;

/// Render one value with an explicit layout, mode, and option.
///
/// This is the core entry point. The printing surface in [`printer`] is a
/// thin wrapper that adds labels, separators, the shared default option,
/// and sink selection on top of this function.
pub fn render_value(
    value: &dyn Describe,
    layout: LayoutKind,
    debug: bool,
    option: &FormatOption,
) -> String {
    let shape = value.describe(DescribeContext::new(debug));
    match layout {
        LayoutKind::SingleLine => SingleLine.render(&shape),
        LayoutKind::MultiLine => MultiLine::new(option.indent_width()).render(&shape),
    }
}
