//! Page assembly: title extraction and template substitution.

use mdsite_core::HtmlNode;
use tracing::debug;

use crate::convert::markdown_to_html;
use crate::{MarkdownError, Result};

/// Replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Replaced by the rendered page body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Get the title of a document: the text of its first top-level `# heading`.
///
/// Inline markup is dropped, so `# A *big* day` gives `A big day`. Headings
/// nested in other blocks are not considered.
pub fn extract_title(markdown: &str) -> Result<String> {
    title_of(&markdown_to_html(markdown)?)
}

fn title_of(root: &HtmlNode) -> Result<String> {
    root.children()
        .iter()
        .find(|node| node.tag() == Some("h1"))
        .map(HtmlNode::text_content)
        .ok_or(MarkdownError::MissingTitle)
}

/// Render a document into a page template.
///
/// Every `{{ Title }}` in the template is replaced with the document title, and
/// every `{{ Content }}` with the rendered HTML.
pub fn generate_page(markdown: &str, template: &str) -> Result<String> {
    let root = markdown_to_html(markdown)?;
    let content = root.render()?;
    let title = title_of(&root)?;
    debug!(%title, bytes = content.len(), "generated page");

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
