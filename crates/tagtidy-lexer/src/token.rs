/// A position in source text, tracking line and column for diagnostics.
///
/// `start` and `end` are byte offsets; `line` and `column` are 1-based and
/// point at the first character of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// How a tag participates in nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<div>`, `<img src="x">`
    Open,
    /// `</div>`
    Close,
    /// Anything whose raw text ends in `/>`, including `</div/>`.
    SelfClosing,
}

/// A start, end or self-closing tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    /// Lowercased tag name (letters and digits only).
    pub name: String,
    pub kind: TagKind,
    /// The tag exactly as written, attributes included.
    pub raw: &'a str,
    pub span: Span,
}

impl Tag<'_> {
    /// True for void elements like `br` and `img`, whatever the syntax used.
    pub fn is_void(&self) -> bool {
        is_void_element(&self.name)
    }

    /// True when a void element name appears anywhere in the raw text,
    /// attributes included (`<abbr>`, `<div class="hr">`). Case-insensitive.
    pub fn mentions_void(&self) -> bool {
        let raw = self.raw.to_ascii_lowercase();
        VOID_ELEMENTS.iter().any(|v| raw.contains(v))
    }

    /// True when the tag never needs a matching close tag.
    pub fn is_self_contained(&self) -> bool {
        self.kind == TagKind::SelfClosing || self.is_void()
    }
}

/// Token classification for markup.
///
/// Data-carrying variants borrow directly from the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Tag(Tag<'a>),
    /// Everything between tags, comments and doctypes included.
    Text { raw: &'a str, span: Span },
}

impl<'a> Token<'a> {
    pub fn span(&self) -> Span {
        match self {
            Token::Tag(tag) => tag.span,
            Token::Text { span, .. } => *span,
        }
    }

    pub fn raw(&self) -> &'a str {
        match self {
            Token::Tag(tag) => tag.raw,
            Token::Text { raw, .. } => *raw,
        }
    }

    pub fn as_tag(&self) -> Option<&Tag<'a>> {
        match self {
            Token::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

/// HTML5 void elements (never take children, never need a close tag).
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag name is an HTML5 void element. Case-insensitive.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements_case_insensitive() {
        assert!(is_void_element("br"));
        assert!(is_void_element("IMG"));
        assert!(is_void_element("Wbr"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("abbr"));
        assert!(!is_void_element(""));
    }

    #[test]
    fn test_mentions_void() {
        let tag = |raw| Tag {
            name: String::new(),
            kind: TagKind::Open,
            raw,
            span: Span::new(0, 0, 1, 1),
        };
        assert!(tag("<IMG src=x>").mentions_void());
        assert!(tag("<abbr>").mentions_void());
        assert!(tag(r#"<div class="hr">"#).mentions_void());
        assert!(tag(r#"<a href="/source">"#).mentions_void());
        assert!(!tag("<div>").mentions_void());
        assert!(!tag("<span>").mentions_void());
        assert!(!tag("<b>").mentions_void());
    }

    #[test]
    fn test_self_contained() {
        let span = Span::new(0, 0, 1, 1);
        let img = Tag {
            name: "img".into(),
            kind: TagKind::Open,
            raw: "<img>",
            span,
        };
        let div = Tag {
            name: "div".into(),
            kind: TagKind::SelfClosing,
            raw: "<div/>",
            span,
        };
        let p = Tag {
            name: "p".into(),
            kind: TagKind::Open,
            raw: "<p>",
            span,
        };
        assert!(img.is_self_contained());
        assert!(div.is_self_contained());
        assert!(!p.is_self_contained());
    }
}
