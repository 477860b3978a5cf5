//! # mdsite
//!
//! Convert Markdown documents to HTML for a static site.
//!
//! The pipeline is a single synchronous pass with no shared state:
//!
//! ```text
//! document ──▶ blocks ──▶ classify + convert ──▶ <div> root ──▶ HTML string
//!                              │
//!                              └── inline runs (bold, italic, code, images, links)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mdsite::markdown_to_html;
//!
//! let root = markdown_to_html("# Title\n\nBody **bold**.").unwrap();
//! assert_eq!(
//!     root.render().unwrap(),
//!     "<div><h1>Title</h1><p>Body <b>bold</b>.</p></div>"
//! );
//! ```
//!
//! ## Pages
//!
//! ```rust
//! use mdsite::{extract_title, generate_page};
//!
//! let markdown = "# Hello\n\nWorld";
//! assert_eq!(extract_title(markdown).unwrap(), "Hello");
//!
//! let page = generate_page(markdown, "<title>{{ Title }}</title>{{ Content }}").unwrap();
//! assert_eq!(page, "<title>Hello</title><div><h1>Hello</h1><p>World</p></div>");
//! ```

pub mod block;
mod convert;
pub mod inline;
mod page;
mod text;

pub use block::{markdown_to_blocks, Block, BlockKind};
pub use convert::{block_to_html, markdown_to_html, render_markdown};
pub use inline::text_to_runs;
pub use mdsite_core::{HtmlNode, RenderError};
pub use page::{extract_title, generate_page, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use text::{TextKind, TextRun};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("invalid markdown: `{delimiter}` section not closed")]
    MalformedInline { delimiter: &'static str },

    #[error("invalid markdown: code block is missing its closing fence")]
    UnterminatedCodeFence,

    #[error("invalid markdown: heading level {0} has no text")]
    InvalidHeadingLevel(usize),

    #[error("invalid markdown: quote line does not start with `>`: {line:?}")]
    InvalidQuoteBlock { line: String },

    #[error("invalid markdown: missing level 1 heading")]
    MissingTitle,

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
