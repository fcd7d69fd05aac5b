//! Printing surface.
//!
//! A thin wrapper over [`render_value`]: adds labels, separators, the
//! shared default option, and sink selection. Four rendering intents are
//! exposed — compact/normal, compact/debug, multi-line/normal,
//! multi-line/debug — each with a console variant and a `*_to` sink
//! variant.

use std::io;

use crate::describe::Describe;
use crate::layout::LayoutKind;
use crate::option::{shared_option, FormatOption};
use crate::output::{ConsoleOutput, Output};
use crate::render_value;

/// Default separator between values for compact printing.
const SINGLE_LINE_SEPARATOR: &str = " ";

/// Default separator between values for pretty printing.
const MULTI_LINE_SEPARATOR: &str = "\n";

/// Builder for print calls: label, separator, and option overrides.
///
/// Unset knobs resolve at call time: the separator defaults per intent and
/// the option defaults to the process-wide shared option.
///
/// # Example
///
/// ```
/// use descry::{Printer, StringOutput};
///
/// let mut out = StringOutput::new();
/// let result = Printer::new()
///     .label("value")
///     .debug_print_to(&[&Some("hello")], &mut out);
/// assert!(result.is_ok());
/// assert_eq!(out.as_str(), "value: \"hello\"\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Printer {
    label: Option<String>,
    separator: Option<String>,
    option: Option<FormatOption>,
}

impl Printer {
    /// Printer with every knob left at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label written before the rendered values.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Separator between values; defaults to a space for compact calls and
    /// a newline for pretty calls.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Per-call option override; defaults to the shared option, read once
    /// at call time.
    #[must_use]
    pub fn option(mut self, option: FormatOption) -> Self {
        self.option = Some(option);
        self
    }

    /// Render without writing: heading plus separator-joined values.
    pub fn render(&self, values: &[&dyn Describe], layout: LayoutKind, debug: bool) -> String {
        let option = self.option.clone().unwrap_or_else(shared_option);
        let heading = match layout {
            LayoutKind::SingleLine => heading(option.prefix(), self.label.as_deref()),
            LayoutKind::MultiLine => heading_pretty(option.prefix(), self.label.as_deref()),
        };
        let separator = self.separator.as_deref().unwrap_or(match layout {
            LayoutKind::SingleLine => SINGLE_LINE_SEPARATOR,
            LayoutKind::MultiLine => MULTI_LINE_SEPARATOR,
        });
        let rendered = values
            .iter()
            .map(|value| render_value(*value, layout, debug, &option))
            .collect::<Vec<_>>()
            .join(separator);
        format!("{heading}{rendered}")
    }

    // --- sink variants ---

    /// Compact, normal mode, to `out`.
    pub fn print_to<O: Output>(&self, values: &[&dyn Describe], out: &mut O) -> io::Result<()> {
        out.write_rendered(&self.render(values, LayoutKind::SingleLine, false))
    }

    /// Multi-line, normal mode, to `out`.
    pub fn pretty_print_to<O: Output>(
        &self,
        values: &[&dyn Describe],
        out: &mut O,
    ) -> io::Result<()> {
        out.write_rendered(&self.render(values, LayoutKind::MultiLine, false))
    }

    /// Compact, debug mode, to `out`.
    pub fn debug_print_to<O: Output>(
        &self,
        values: &[&dyn Describe],
        out: &mut O,
    ) -> io::Result<()> {
        out.write_rendered(&self.render(values, LayoutKind::SingleLine, true))
    }

    /// Multi-line, debug mode, to `out`.
    pub fn debug_pretty_print_to<O: Output>(
        &self,
        values: &[&dyn Describe],
        out: &mut O,
    ) -> io::Result<()> {
        out.write_rendered(&self.render(values, LayoutKind::MultiLine, true))
    }

    // --- console variants ---
    //
    // Console writes are fire-and-forget, like any debug print.

    /// Compact, normal mode, to stdout.
    pub fn print(&self, values: &[&dyn Describe]) {
        let _ = self.print_to(values, &mut ConsoleOutput::new());
    }

    /// Multi-line, normal mode, to stdout.
    pub fn pretty_print(&self, values: &[&dyn Describe]) {
        let _ = self.pretty_print_to(values, &mut ConsoleOutput::new());
    }

    /// Compact, debug mode, to stdout.
    pub fn debug_print(&self, values: &[&dyn Describe]) {
        let _ = self.debug_print_to(values, &mut ConsoleOutput::new());
    }

    /// Multi-line, debug mode, to stdout.
    pub fn debug_pretty_print(&self, values: &[&dyn Describe]) {
        let _ = self.debug_pretty_print_to(values, &mut ConsoleOutput::new());
    }
}

/// `"{prefix} {label}: "` heading for compact output.
fn heading(prefix: Option<&str>, label: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(prefix) = prefix {
        out.push_str(prefix);
        out.push(' ');
    }
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(": ");
    }
    out
}

/// Prefix and label each on their own line for pretty output.
fn heading_pretty(prefix: Option<&str>, label: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(prefix) = prefix {
        out.push_str(prefix);
        out.push('\n');
    }
    if let Some(label) = label {
        out.push_str(label);
        out.push_str(":\n");
    }
    out
}

/// Compact, normal mode, to stdout with the shared option.
pub fn print(values: &[&dyn Describe]) {
    Printer::new().print(values);
}

/// Multi-line, normal mode, to stdout with the shared option.
pub fn pretty_print(values: &[&dyn Describe]) {
    Printer::new().pretty_print(values);
}

/// Compact, debug mode, to stdout with the shared option.
pub fn debug_print(values: &[&dyn Describe]) {
    Printer::new().debug_print(values);
}

/// Multi-line, debug mode, to stdout with the shared option.
pub fn debug_pretty_print(values: &[&dyn Describe]) {
    Printer::new().debug_pretty_print(values);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Printer;
    use crate::option::FormatOption;
    use crate::output::StringOutput;

    fn option(indent_width: usize) -> FormatOption {
        match FormatOption::with_indent_width(indent_width) {
            Ok(option) => option,
            Err(err) => panic!("valid width rejected: {err}"),
        }
    }

    fn labeled_option(prefix: &str, indent_width: usize) -> FormatOption {
        match FormatOption::new(Some(prefix.to_string()), indent_width) {
            Ok(option) => option,
            Err(err) => panic!("valid option rejected: {err}"),
        }
    }

    #[test]
    fn print_joins_values_with_spaces() {
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(option(4))
            .print_to(&[&1, &"two", &3.0], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "1 two 3.0\n");
    }

    #[test]
    fn debug_print_quotes_text() {
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(option(4))
            .debug_print_to(&[&1, &"two"], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "1 \"two\"\n");
    }

    #[test]
    fn pretty_print_joins_values_with_newlines() {
        let one = vec![1, 2];
        let two = vec![3];
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(option(2))
            .pretty_print_to(&[&one, &two], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "[\n  1,\n  2\n]\n[\n  3\n]\n");
    }

    #[test]
    fn custom_separator_overrides_the_default() {
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(option(4))
            .separator(" | ")
            .print_to(&[&1, &2], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "1 | 2\n");
    }

    #[test]
    fn label_and_prefix_head_compact_output() {
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(labeled_option("[app]", 4))
            .label("pos")
            .print_to(&[&7], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "[app] pos: 7\n");
    }

    #[test]
    fn label_and_prefix_get_own_lines_in_pretty_output() {
        let values = vec![1];
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(labeled_option("[app]", 2))
            .label("pos")
            .pretty_print_to(&[&values], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "[app]\npos:\n[\n  1\n]\n");
    }

    #[test]
    fn per_call_option_controls_indent_width() {
        let values = vec!["Hello", "World"];
        let mut out = StringOutput::new();
        let result = Printer::new()
            .option(option(4))
            .debug_pretty_print_to(&[&values], &mut out);
        assert!(result.is_ok());
        assert_eq!(out.as_str(), "[\n    \"Hello\",\n    \"World\"\n]\n");
    }

    #[test]
    fn render_without_sink() {
        let printer = Printer::new().option(option(4));
        let rendered = printer.render(
            &[&Option::<i32>::None],
            crate::layout::LayoutKind::SingleLine,
            false,
        );
        assert_eq!(rendered, "nil");
    }
}
