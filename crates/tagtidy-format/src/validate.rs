//! Structural validator.
//!
//! Walks every tag in document order with a stack of open element names and
//! reports closing tags that match nothing, closing tags that match the
//! wrong element, and elements still open at the end. Content models are
//! not checked: `<tr>` outside a `<table>` is fine here.

use serde::{Serialize, Serializer};
use tagtidy_lexer::{Scanner, Span, TagKind};
use tracing::{debug, trace};

/// A structural problem found by [`validate`].
///
/// The `Display` output is the human-readable message reported to users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unexpected closing tag </{name}> with no matching opening tag")]
    UnexpectedClose { name: String, span: Span },

    #[error("Mismatched tags: expected </{expected}> but found </{found}>")]
    Mismatched {
        expected: String,
        found: String,
        span: Span,
    },

    /// `span` points at the opening tag that was never closed.
    #[error("Unclosed tag: <{name}>")]
    Unclosed { name: String, span: Span },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::UnexpectedClose { span, .. }
            | ValidationError::Mismatched { span, .. }
            | ValidationError::Unclosed { span, .. } => *span,
        }
    }
}

/// Outcome of [`validate`]. `valid` is true iff `errors` is empty.
///
/// Serializes as `{ "valid": bool, "errors": [message, ...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(serialize_with = "serialize_messages")]
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// The error messages, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

fn serialize_messages<S: Serializer>(
    errors: &[ValidationError],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}

/// An element waiting for its close tag.
struct OpenElement {
    name: String,
    span: Span,
}

/// Check that every non-void tag in `html` is closed in the right order.
///
/// `<!--` and `<!DOCTYPE` never count as tags, but a tag written inside a
/// comment or a declaration does. Tags written with `/>`
/// and void elements (`<br>`, `<img>`, ...) never touch the stack, and
/// neither do close tags of void elements. A mismatched close still
/// consumes the element on top of the stack.
///
/// Errors are ordered by position, followed by the unclosed elements from
/// innermost to outermost.
pub fn validate(html: &str) -> ValidationReport {
    let mut errors = Vec::new();
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut tags = 0usize;

    for tag in Scanner::tags(html) {
        tags += 1;
        if tag.is_self_contained() {
            continue;
        }

        match tag.kind {
            TagKind::Close => match stack.pop() {
                None => errors.push(ValidationError::UnexpectedClose {
                    name: tag.name,
                    span: tag.span,
                }),
                Some(open) if open.name != tag.name => errors.push(ValidationError::Mismatched {
                    expected: open.name,
                    found: tag.name,
                    span: tag.span,
                }),
                Some(_) => {}
            },
            TagKind::Open => stack.push(OpenElement {
                name: tag.name,
                span: tag.span,
            }),
            // filtered by is_self_contained
            TagKind::SelfClosing => {}
        }
    }

    errors.extend(stack.into_iter().rev().map(|open| ValidationError::Unclosed {
        name: open.name,
        span: open.span,
    }));

    for error in &errors {
        let span = error.span();
        trace!(line = span.line, column = span.column, "{error}");
    }
    debug!(tags, errors = errors.len(), "validated markup");

    ValidationReport::from_errors(errors)
}
