//! tagtidy Formatter
//!
//! Three independent operations over raw HTML text:
//!
//! ```text
//! prettify(html, indent_size, use_tabs) → String       one tag segment per line
//! minify(html, remove_comments)         → String       comments and whitespace stripped
//! validate(html)                        → ValidationReport { valid, errors }
//! ```
//!
//! All three are total: any input produces some output and nothing panics.
//! Structural problems only ever show up as data in a [`ValidationReport`].
//!
//! ```
//! let report = tagtidy_format::validate("<div><span>");
//! assert!(!report.valid);
//! assert_eq!(report.messages(), ["Unclosed tag: <span>", "Unclosed tag: <div>"]);
//! ```

pub mod minify;
pub mod pretty;
pub mod validate;

use std::fmt;
use std::str::FromStr;

pub use minify::minify;
pub use pretty::{prettify, prettify_with};
pub use tagtidy_lexer::VOID_ELEMENTS;
pub use validate::{validate, ValidationError, ValidationReport};

/// Widest indent accepted when parsing an [`Indent`] from text.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Indentation unit used by the pretty-printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// This many spaces per level. Zero is allowed and flattens the output.
    Spaces(usize),
    /// One tab character per level.
    Tab,
}

impl Indent {
    /// Build from the `(indent_size, use_tabs)` pair; `use_tabs` wins.
    pub fn new(indent_size: usize, use_tabs: bool) -> Self {
        if use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(indent_size)
        }
    }

    /// The text emitted once per nesting level.
    pub fn unit(&self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(*n),
            Indent::Tab => "\t".into(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indent::Spaces(n) => write!(f, "{n}"),
            Indent::Tab => f.write_str("tab"),
        }
    }
}

/// Error parsing an indent specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndentError {
    #[error("Invalid indent '{0}': expected a number of spaces or 'tab'")]
    Invalid(String),
    #[error("Indent of {0} spaces is too wide (maximum is {max})", max = MAX_INDENT_WIDTH)]
    TooWide(usize),
}

impl FromStr for Indent {
    type Err = IndentError;

    /// Accepts `tab`, `tabs` (any case) or a space count up to
    /// [`MAX_INDENT_WIDTH`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") || s.eq_ignore_ascii_case("tabs") {
            return Ok(Indent::Tab);
        }
        let width: usize = s.parse().map_err(|_| IndentError::Invalid(s.to_string()))?;
        if width > MAX_INDENT_WIDTH {
            return Err(IndentError::TooWide(width));
        }
        Ok(Indent::Spaces(width))
    }
}
