//! mdsite-core - HTML node tree and serialization
//!
//! This crate provides the HTML node tree produced by the `mdsite` Markdown
//! pipeline, and the rules for turning that tree into an HTML string.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──mdsite──▶ ┌───────────┐
//!                             │           │
//!                             │ HtmlNode  │ ──render──▶ HTML String
//!                             │   tree    │
//!                             └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::HtmlNode;
//!
//! let tree = HtmlNode::parent(
//!     "div",
//!     vec![
//!         HtmlNode::parent("h1", vec![HtmlNode::text("Hello World")]),
//!         HtmlNode::parent(
//!             "p",
//!             vec![
//!                 HtmlNode::text("This is "),
//!                 HtmlNode::leaf("b", "bold"),
//!                 HtmlNode::text(" text."),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let html = tree.render().unwrap();
//! assert_eq!(html, "<div><h1>Hello World</h1><p>This is <b>bold</b> text.</p></div>");
//! ```

mod node;
mod render;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};

/// Error type for rendering a node tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid HTML: parent node has no tag")]
    MissingTag,

    #[error("invalid HTML: leaf node has no value")]
    MissingLeafValue,
}

pub type Result<T> = std::result::Result<T, RenderError>;
