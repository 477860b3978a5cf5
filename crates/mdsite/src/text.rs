//! Inline text runs.
//!
//! A [`TextRun`] is the intermediate form between Markdown inline syntax and HTML:
//! one contiguous piece of text tagged with how it should be rendered.

use mdsite_core::HtmlNode;

/// How an inline run is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Plain text, rendered verbatim
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TextKind {
    /// Whether runs of this kind carry a URL
    pub fn has_url(self) -> bool {
        matches!(self, TextKind::Link | TextKind::Image)
    }
}

/// One inline run of text.
///
/// The URL is present exactly when the kind is [`TextKind::Link`] or [`TextKind::Image`];
/// the constructors are the only way to build a run, so this always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    text: String,
    kind: TextKind,
    url: Option<String>,
}

impl TextRun {
    pub fn plain(text: &str) -> Self {
        Self::styled(text, TextKind::Plain)
    }

    pub fn bold(text: &str) -> Self {
        Self::styled(text, TextKind::Bold)
    }

    pub fn italic(text: &str) -> Self {
        Self::styled(text, TextKind::Italic)
    }

    pub fn code(text: &str) -> Self {
        Self::styled(text, TextKind::Code)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: TextKind::Link,
            url: Some(url.to_string()),
        }
    }

    /// Create an image run; `alt` becomes the run's text
    pub fn image(alt: &str, url: &str) -> Self {
        Self {
            text: alt.to_string(),
            kind: TextKind::Image,
            url: Some(url.to_string()),
        }
    }

    pub(crate) fn styled(text: &str, kind: TextKind) -> Self {
        debug_assert!(!kind.has_url(), "{kind:?} runs need a url");
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TextKind::Plain
    }

    /// Convert this run into an HTML leaf node
    pub fn to_html(&self) -> HtmlNode {
        let url = self.url.as_deref().unwrap_or_default();
        match self.kind {
            TextKind::Plain => HtmlNode::text(&self.text),
            TextKind::Bold => HtmlNode::leaf("b", &self.text),
            TextKind::Italic => HtmlNode::leaf("i", &self.text),
            TextKind::Code => HtmlNode::leaf("code", &self.text),
            TextKind::Link => HtmlNode::leaf("a", &self.text).with_attr("href", url),
            TextKind::Image => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", &self.text),
        }
    }
}
