//! HTML tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string. Text and attribute values are
//! written as-is; no entity escaping is performed.

use crate::node::{Attributes, HtmlNode, LeafNode, ParentNode};
use crate::{RenderError, Result};

impl HtmlNode {
    /// Render this node and its descendants to an HTML string.
    ///
    /// Fails if any node in the tree is structurally invalid. Nothing is
    /// returned for a partially rendered tree.
    pub fn render(&self) -> Result<String> {
        let mut output = String::with_capacity(256);
        render_node(self, &mut output)?;
        Ok(output)
    }
}

impl LeafNode {
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        render_leaf(self, &mut output)?;
        Ok(output)
    }
}

impl ParentNode {
    pub fn render(&self) -> Result<String> {
        let mut output = String::with_capacity(256);
        render_parent(self, &mut output)?;
        Ok(output)
    }
}

fn render_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) -> Result<()> {
    let value = leaf.value.as_deref().ok_or(RenderError::MissingLeafValue)?;

    match leaf.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, &leaf.attrs, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn render_parent(parent: &ParentNode, out: &mut String) -> Result<()> {
    let tag = parent.tag.as_deref().ok_or(RenderError::MissingTag)?;

    open_tag(tag, &parent.attrs, out);
    for child in &parent.children {
        render_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    render_attributes(attrs, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write ` key="value"` for each attribute in insertion order.
// Quotes inside values are not escaped.
fn render_attributes(attrs: &Attributes, out: &mut String) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
