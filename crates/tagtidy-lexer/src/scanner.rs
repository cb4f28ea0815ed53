use crate::token::{Span, Tag, TagKind, Token};

/// Extent of a tag starting at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Markup {
    len: usize,
    name_start: usize,
    name_end: usize,
    closing: bool,
}

/// Markup scanner.
///
/// Walks the source once, left to right, yielding tags and the text
/// between them. Tokens never overlap and the scanner resumes immediately
/// after each one. It never fails: anything that does not form a complete
/// tag is returned as text.
///
/// A tag is `<`, an optional `/`, an ASCII letter followed by letters and
/// digits (the name), then everything up to and including the next `>`.
/// `<!--` and `<!DOCTYPE` never start a tag, so they stay text, and a tag
/// written inside a comment is still found.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    /// Byte offset of the last `>`; no tag can start at or after it.
    last_close: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            last_close: source.rfind('>'),
        }
    }

    /// Scan the entire source into a vector of tokens.
    pub fn tokenize(source: &'a str) -> Vec<Token<'a>> {
        Scanner::new(source).collect()
    }

    /// Only the tags of the source, in document order.
    pub fn tags(source: &'a str) -> impl Iterator<Item = Tag<'a>> {
        Scanner::new(source).filter_map(|token| match token {
            Token::Tag(tag) => Some(tag),
            _ => None,
        })
    }

    // --- Scanners ---

    fn scan_markup(&mut self) -> Option<Token<'a>> {
        let markup = self.markup_at(self.pos)?;
        let raw = &self.source[self.pos..self.pos + markup.len];

        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;

        // `/>` wins over a leading `</`
        let kind = if raw.ends_with("/>") {
            TagKind::SelfClosing
        } else if markup.closing {
            TagKind::Close
        } else {
            TagKind::Open
        };
        self.advance_by(markup.len);

        Some(Token::Tag(Tag {
            name: raw[markup.name_start..markup.name_end].to_ascii_lowercase(),
            kind,
            raw,
            span: Span::new(start_pos, self.pos, start_line, start_col),
        }))
    }

    /// Scan text up to the next `<` that starts markup, or to the end.
    fn scan_text(&mut self) -> Token<'a> {
        let start_line = self.line;
        let start_col = self.column;
        let start_pos = self.pos;

        let first = self.source[self.pos..].chars().next().map_or(1, char::len_utf8);
        let mut search = self.pos + first;
        let end = loop {
            match self.source[search..].find('<') {
                Some(offset) => {
                    let at = search + offset;
                    if !self.last_close.is_some_and(|gt| gt > at) {
                        break self.source.len();
                    }
                    if self.markup_at(at).is_some() {
                        break at;
                    }
                    search = at + 1;
                }
                None => break self.source.len(),
            }
        };

        let raw = &self.source[start_pos..end];
        self.advance_by(end - start_pos);
        Token::Text {
            raw,
            span: Span::new(start_pos, self.pos, start_line, start_col),
        }
    }

    // --- Helpers ---

    fn markup_at(&self, at: usize) -> Option<Markup> {
        if !self.last_close.is_some_and(|gt| gt > at) {
            return None;
        }
        match_markup(&self.source[at..])
    }

    fn advance_by(&mut self, len: usize) {
        let end = self.pos + len;
        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.is_at_end() {
            return None;
        }
        if let Some(token) = self.scan_markup() {
            return Some(token);
        }
        Some(self.scan_text())
    }
}

/// Match a tag at the beginning of `rest`, if one starts there.
///
/// A tag without a closing `>` is not a tag.
fn match_markup(rest: &str) -> Option<Markup> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }

    let closing = bytes.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };
    if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let name_end = name_start
        + bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();

    let close = rest[name_end..].find('>')?;
    Some(Markup {
        len: name_end + close + 1,
        name_start,
        name_end,
        closing,
    })
}
