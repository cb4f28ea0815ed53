//! Boundary splitting for line-per-tag output.
//!
//! The source is cut at every `>` followed by optional whitespace and a `<`.
//! The delimiters themselves are consumed by the cut; [`Segment::restored`]
//! puts them back.

/// One chunk of source between two tag boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The chunk without the consumed `<`/`>` delimiters, untrimmed.
    pub text: &'a str,
    pub is_first: bool,
    pub is_last: bool,
}

impl Segment<'_> {
    /// The trimmed chunk with its delimiters restored: `<` unless it is the
    /// first segment, `>` unless it is the last. `None` when the chunk is
    /// only whitespace.
    pub fn restored(&self) -> Option<String> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }

        let mut out = String::with_capacity(text.len() + 2);
        if !self.is_first {
            out.push('<');
        }
        out.push_str(text);
        if !self.is_last {
            out.push('>');
        }
        Some(out)
    }
}

/// Lazy iterator over the segments of a source string.
///
/// Always yields at least one segment, even for empty input.
pub struct Segments<'a> {
    rest: Option<&'a str>,
    is_first: bool,
}

impl<'a> Segments<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            rest: Some(source),
            is_first: true,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = self.rest.take()?;
        let is_first = std::mem::replace(&mut self.is_first, false);

        match find_boundary(rest) {
            Some((start, end)) => {
                self.rest = Some(&rest[end..]);
                Some(Segment {
                    text: &rest[..start],
                    is_first,
                    is_last: false,
                })
            }
            None => Some(Segment {
                text: rest,
                is_first,
                is_last: true,
            }),
        }
    }
}

/// Locate the first `>` `\s*` `<` in `source`, returning the byte range it
/// covers (from the `>` through the `<`).
fn find_boundary(source: &str) -> Option<(usize, usize)> {
    source.match_indices('>').find_map(|(at, _)| {
        let after = &source[at + 1..];
        let trimmed = after.trim_start();
        trimmed
            .starts_with('<')
            .then(|| (at, source.len() - trimmed.len() + 1))
    })
}
