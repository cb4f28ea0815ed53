//! tagtidy Lexer
//!
//! Splits raw HTML markup into tags and the text between them with a
//! single forward pass, and cuts markup into line-sized segments at tag
//! boundaries. No DOM is built and attributes are not parsed; a tag is
//! reduced to its lowercased name, its kind and its raw text.
//!
//! # Example
//!
//! ```
//! use tagtidy_lexer::{Scanner, TagKind};
//!
//! let tags: Vec<_> = Scanner::tags("<p>hi</p>").collect();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[1].kind, TagKind::Close);
//! ```

pub mod scanner;
pub mod segments;
pub mod token;

pub use scanner::Scanner;
pub use segments::{Segment, Segments};
pub use token::{is_void_element, Span, Tag, TagKind, Token, VOID_ELEMENTS};
