//! Pretty-printer.
//!
//! Cuts the markup at tag boundaries (see [`tagtidy_lexer::Segments`]) and
//! writes each segment on its own line, indented by the current nesting
//! level. Text stays on the line of the tag it touches.

use crate::Indent;
use tagtidy_lexer::{Scanner, Segments, Tag, TagKind, Token};
use tracing::debug;

/// How a line moves the nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Close or self-closing tag: drop a level before writing the line.
    Outdent,
    /// Open tag left open on this line: add a level after writing it.
    Indent,
    Stay,
}

/// Reformat `html` with one segment per line.
///
/// The indent unit is a tab when `use_tabs` is set, otherwise `indent_size`
/// spaces. Lines are joined with `\n` and there is no trailing newline.
pub fn prettify(html: &str, indent_size: usize, use_tabs: bool) -> String {
    prettify_with(html, Indent::new(indent_size, use_tabs))
}

/// Reformat `html` using an explicit [`Indent`].
pub fn prettify_with(html: &str, indent: Indent) -> String {
    let unit = indent.unit();
    let mut lines: Vec<String> = Vec::new();
    let mut level: usize = 0;

    for segment in Segments::new(html) {
        let Some(line) = segment.restored() else {
            continue;
        };

        let step = classify(&line);
        if step == Step::Outdent {
            level = level.saturating_sub(1);
        }

        lines.push(format!("{}{line}", unit.repeat(level)));

        if step == Step::Indent {
            level += 1;
        }
    }

    debug!(lines = lines.len(), final_level = level, "prettified markup");
    lines.join("\n")
}

/// Decide the level change for one restored segment from its leading tag.
fn classify(line: &str) -> Step {
    if line.starts_with("</") {
        return Step::Outdent;
    }

    let mut tokens = Scanner::new(line);
    let Some(Token::Tag(lead)) = tokens.next() else {
        // text first, comments and doctypes included
        return Step::Stay;
    };

    match lead.kind {
        TagKind::SelfClosing | TagKind::Close => Step::Outdent,
        TagKind::Open => {
            if lead.mentions_void() || closes_inline(&lead, tokens) {
                Step::Stay
            } else {
                Step::Indent
            }
        }
    }
}

/// True when the rest of the line closes `lead` again, as in
/// `<span>text</span>`.
fn closes_inline(lead: &Tag<'_>, mut rest: Scanner<'_>) -> bool {
    rest.any(|token| {
        token
            .as_tag()
            .is_some_and(|t| t.kind == TagKind::Close && t.name == lead.name)
    })
}
