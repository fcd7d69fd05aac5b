//! Formatting options.
//!
//! [`FormatOption`] is pure data: an indent width and an optional prefix
//! label. A process-wide default can be replaced wholesale with
//! [`set_shared_option`]; the printing surface reads it once per call, and
//! the core rendering functions never touch it.

use parking_lot::RwLock;
use thiserror::Error;

/// Spaces per indentation level in the default option.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Error raised for malformed options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    /// Indent width below the minimum of one space per level.
    #[error("indent width must be at least 1, got {0}")]
    InvalidIndentWidth(usize),
}

/// Immutable formatting configuration.
///
/// Construction validates the indent width; a zero width is rejected
/// outright rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOption {
    prefix: Option<String>,
    indent_width: usize,
}

impl FormatOption {
    /// Create an option, rejecting `indent_width < 1`.
    pub fn new(prefix: Option<String>, indent_width: usize) -> Result<Self, OptionError> {
        if indent_width < 1 {
            return Err(OptionError::InvalidIndentWidth(indent_width));
        }
        Ok(Self {
            prefix,
            indent_width,
        })
    }

    /// Option with the given indent width and no prefix.
    pub fn with_indent_width(indent_width: usize) -> Result<Self, OptionError> {
        Self::new(None, indent_width)
    }

    /// Label marker prepended to every rendered line group.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Spaces per nesting level. Always at least 1.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Default for FormatOption {
    fn default() -> Self {
        Self {
            prefix: None,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Process-wide default option. `None` means "never replaced": callers see
/// `FormatOption::default()` until the first `set_shared_option`.
static SHARED_OPTION: RwLock<Option<FormatOption>> = RwLock::new(None);

/// Current process-wide default option.
pub fn shared_option() -> FormatOption {
    SHARED_OPTION.read().clone().unwrap_or_default()
}

/// Replace the process-wide default option.
pub fn set_shared_option(option: FormatOption) {
    *SHARED_OPTION.write() = Some(option);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_indent_width_rejected() {
        assert_eq!(
            FormatOption::new(None, 0),
            Err(OptionError::InvalidIndentWidth(0))
        );
        assert_eq!(
            FormatOption::with_indent_width(0),
            Err(OptionError::InvalidIndentWidth(0))
        );
    }

    #[test]
    fn one_is_a_valid_indent_width() {
        let option = FormatOption::with_indent_width(1);
        assert_eq!(option.map(|o| o.indent_width()), Ok(1));
    }

    #[test]
    fn default_option() {
        let option = FormatOption::default();
        assert_eq!(option.prefix(), None);
        assert_eq!(option.indent_width(), DEFAULT_INDENT_WIDTH);
    }

    #[test]
    fn prefix_is_kept() {
        let option = FormatOption::new(Some("[debug]".to_string()), 2);
        assert_eq!(option.map(|o| o.prefix().map(str::to_string)), Ok(Some("[debug]".to_string())));
    }

    // Single test for the global so parallel tests never race on it.
    #[test]
    fn shared_option_replace_and_read() {
        assert_eq!(shared_option(), FormatOption::default());

        let replaced = FormatOption {
            prefix: Some("app".to_string()),
            indent_width: 2,
        };
        set_shared_option(replaced.clone());
        assert_eq!(shared_option(), replaced);

        set_shared_option(FormatOption::default());
        assert_eq!(shared_option(), FormatOption::default());
    }
}
