//! Convert Markdown blocks to HTML nodes
//!
//! Each block kind has one converter producing one subtree. The inline
//! content of every subtree comes from [`text_to_runs`].

use mdsite_core::HtmlNode;
use tracing::debug;

use crate::block::{heading_level, markdown_to_blocks, Block, BlockKind, FENCE};
use crate::inline::text_to_runs;
use crate::{MarkdownError, Result};

/// Convert a whole document into a `<div>` holding one node per block, in source order.
///
/// Any error aborts the conversion; no partial tree is returned.
pub fn markdown_to_html(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    debug!(blocks = blocks.len(), "converting markdown document");

    let children = blocks
        .into_iter()
        .map(|text| Block::parse(text).and_then(|block| block_to_html(&block)))
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Convert a document and render it to an HTML string
pub fn render_markdown(markdown: &str) -> Result<String> {
    Ok(markdown_to_html(markdown)?.render()?)
}

/// Convert one classified block to its HTML subtree
pub fn block_to_html(block: &Block) -> Result<HtmlNode> {
    match block.kind {
        BlockKind::Heading => heading_to_html(block.text),
        BlockKind::Paragraph => paragraph_to_html(block.text),
        BlockKind::UnorderedList => unordered_list_to_html(block.text),
        BlockKind::OrderedList => ordered_list_to_html(block.text),
        BlockKind::CodeBlock => code_to_html(block.text),
        BlockKind::Quote => quote_to_html(block.text),
    }
}

/// Parse inline Markdown into leaf nodes
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_runs(text)?.iter().map(|run| run.to_html()).collect())
}

/// `# Title` becomes `<h1>Title</h1>`
fn heading_to_html(block: &str) -> Result<HtmlNode> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if heading_level(block).is_none() {
        return Err(MarkdownError::InvalidHeadingLevel(level));
    }

    // Skip the markers and the space after them
    let text = skip_chars(block, level + 1);
    if text.is_empty() {
        return Err(MarkdownError::InvalidHeadingLevel(level));
    }

    Ok(HtmlNode::parent(
        &format!("h{level}"),
        text_to_children(text)?,
    ))
}

fn paragraph_to_html(block: &str) -> Result<HtmlNode> {
    let paragraph = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&paragraph)?))
}

fn unordered_list_to_html(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| list_item(skip_chars(line, 2)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_html(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .filter_map(|line| line.split_once('.'))
        .map(|(_, rest)| list_item(skip_chars(rest, 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", text_to_children(text)?))
}

/// A fenced block becomes `<pre><code>...</code></pre>`.
///
/// The opening line, including any info string, is dropped. The first word of
/// the info string becomes a `language-*` class on the `code` element.
fn code_to_html(block: &str) -> Result<HtmlNode> {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .ok_or(MarkdownError::UnterminatedCodeFence)?;

    let (info, body) = inner.split_once('\n').unwrap_or(("", inner));

    let mut code = HtmlNode::parent("code", text_to_children(body)?);
    if let Some(language) = info.split_whitespace().next() {
        code = code.with_attr("class", &format!("language-{language}"));
    }

    Ok(HtmlNode::parent("pre", vec![code]))
}

/// Quote lines are joined into a single run of text inside `<blockquote>`
fn quote_to_html(block: &str) -> Result<HtmlNode> {
    let lines = block
        .lines()
        .map(|line| {
            if line.starts_with('>') {
                Ok(line.trim_start_matches('>').trim())
            } else {
                Err(MarkdownError::InvalidQuoteBlock {
                    line: line.to_string(),
                })
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent(
        "blockquote",
        text_to_children(&lines.join(" "))?,
    ))
}

/// Drop the first `n` characters of `s`
fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or("", |(i, _)| &s[i..])
}
