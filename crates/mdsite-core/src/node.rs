//! HTML node tree
//!
//! A node is either a leaf carrying text or a parent carrying children, never both.
//! Trees are built once per conversion and not mutated afterwards.

use indexmap::IndexMap;

/// Element attributes, kept in insertion order.
///
/// The order is observable: attributes are rendered in the order they were added.
pub type Attributes = IndexMap<String, String>;

/// A node in the HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Terminal node carrying text
    Leaf(LeafNode),

    /// Composite node carrying child nodes
    Parent(ParentNode),
}

/// A text-bearing node.
///
/// Without a tag the value is rendered verbatim, which is how plain inline text is represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attrs: Attributes,
}

/// A children-bearing node. An empty child list is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attrs: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.to_string()),
            attrs: Attributes::new(),
        }
    }
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children,
            attrs: Attributes::new(),
        }
    }
}

impl HtmlNode {
    /// Create an untagged leaf that renders its text verbatim
    pub fn text(value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(None, value))
    }

    /// Create a tagged leaf, e.g. `<b>value</b>`
    pub fn leaf(tag: &str, value: &str) -> Self {
        HtmlNode::Leaf(LeafNode::new(Some(tag), value))
    }

    /// Create a parent node with the given children
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode::new(tag, children))
    }

    /// Append an attribute, replacing the value if the name is already present.
    ///
    /// A replaced attribute keeps its original position.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs_mut().insert(name.to_string(), value.to_string());
        self
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().get(name).map(String::as_str)
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attrs,
            HtmlNode::Parent(parent) => &parent.attrs,
        }
    }

    fn attrs_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attrs,
            HtmlNode::Parent(parent) => &mut parent.attrs,
        }
    }

    /// Get the child nodes. Leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }

    /// Get all text from this node and its descendants, in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => {
                if let Some(value) = &leaf.value {
                    out.push_str(value);
                }
            }
            HtmlNode::Parent(parent) => {
                for child in &parent.children {
                    child.collect_text(out);
                }
            }
        }
    }
}
