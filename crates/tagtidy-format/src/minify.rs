//! Minifier.
//!
//! Runs four passes in a fixed order: comment removal, whitespace removal
//! between tags, outer trim, and collapsing of every remaining whitespace run
//! to one space. The collapse does not look at content, so `<pre>` blocks and
//! attribute values like `class="a  b"` are squeezed too.

use tracing::debug;

/// Minify `html`, optionally dropping `<!-- ... -->` comments first.
pub fn minify(html: &str, remove_comments: bool) -> String {
    let stripped = if remove_comments {
        strip_comments(html)
    } else {
        html.to_string()
    };
    let joined = join_adjacent_tags(&stripped);
    let out = collapse_whitespace(joined.trim());

    debug!(
        before = html.len(),
        after = out.len(),
        remove_comments,
        "minified markup"
    );
    out
}

/// Remove every `<!--` through the nearest following `-->`.
///
/// Repeats until nothing is removed: deleting `<!-- a -->` out of
/// `<!<!-- a -->-- b -->` leaves a fresh comment behind.
fn strip_comments(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let (next, removed) = strip_comments_once(&current);
        if removed == 0 {
            return current;
        }
        current = next;
    }
}

fn strip_comments_once(html: &str) -> (String, usize) {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    let mut removed = 0;

    while let Some(start) = rest.find("<!--") {
        let body = &rest[start + 4..];
        let Some(end) = body.find("-->") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &body[end + 3..];
        removed += 1;
    }

    out.push_str(rest);
    (out, removed)
}

/// Delete whitespace that sits directly between a `>` and a `<`.
fn join_adjacent_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(at) = rest.find('>') {
        out.push_str(&rest[..=at]);
        let after = &rest[at + 1..];
        let trimmed = after.trim_start();
        rest = if trimmed.starts_with('<') { trimmed } else { after };
    }

    out.push_str(rest);
    out
}

/// Replace each run of two or more whitespace characters with one space.
/// A single whitespace character, newline included, is left as it is.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if !ch.is_whitespace() {
            out.push(ch);
            continue;
        }
        let mut run = 1;
        while chars.next_if(|c| c.is_whitespace()).is_some() {
            run += 1;
        }
        out.push(if run > 1 { ' ' } else { ch });
    }

    out
}
