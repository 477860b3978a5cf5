//! Block segmentation and classification.
//!
//! A document is cut into blocks on blank lines, and each block is given
//! exactly one [`BlockKind`] by looking at its prefix and shape.

use tracing::trace;

use crate::{MarkdownError, Result};

/// Separator between blocks: one blank line
const BLOCK_SEPARATOR: &str = "\n\n";

/// Code block fence
pub(crate) const FENCE: &str = "```";

/// Maximum heading level (`######`)
const MAX_HEADING_LEVEL: usize = 6;

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    UnorderedList,
    OrderedList,
    CodeBlock,
    Quote,
}

/// A classified block of source text, borrowed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub text: &'a str,
    pub kind: BlockKind,
}

impl<'a> Block<'a> {
    /// Classify a single block of text
    pub fn parse(text: &'a str) -> Result<Self> {
        let kind = BlockKind::classify(text)?;
        trace!(?kind, len = text.len(), "classified block");
        Ok(Self { text, kind })
    }
}

/// Split a document into trimmed, non-empty blocks in source order
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

impl BlockKind {
    /// Classify a block. The first matching rule wins:
    ///
    /// 1. `#` to `######` followed by a space
    /// 2. every line starts with `* `, or every line starts with `- `
    /// 3. lines start with `1. `, `2. `, `3. `, ... in order
    /// 4. more than one line, opened and closed with a fence
    /// 5. every line starts with `>`
    /// 6. anything else is a paragraph
    ///
    /// A multi-line block that opens with a fence but does not end with one fails
    /// with [`MarkdownError::UnterminatedCodeFence`].
    pub fn classify(block: &str) -> Result<Self> {
        if block.is_empty() {
            return Ok(BlockKind::Paragraph);
        }
        if heading_level(block).is_some() {
            return Ok(BlockKind::Heading);
        }
        if is_unordered_list(block) {
            return Ok(BlockKind::UnorderedList);
        }
        if is_ordered_list(block) {
            return Ok(BlockKind::OrderedList);
        }
        if block.lines().nth(1).is_some() && block.starts_with(FENCE) {
            if block.ends_with(FENCE) {
                return Ok(BlockKind::CodeBlock);
            }
            return Err(MarkdownError::UnterminatedCodeFence);
        }
        if block.lines().all(|line| line.starts_with('>')) {
            return Ok(BlockKind::Quote);
        }
        Ok(BlockKind::Paragraph)
    }
}

/// Level of an ATX heading marker (`## Title` is 2), if the block starts with one
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    let valid = (1..=MAX_HEADING_LEVEL).contains(&level) && block[level..].starts_with(' ');
    valid.then_some(level)
}

fn is_unordered_list(block: &str) -> bool {
    ["* ", "- "]
        .iter()
        .any(|bullet| block.lines().all(|line| line.starts_with(bullet)))
}

fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_to_blocks() {
        let markdown = "This is **bolded** paragraph\n\nThis is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line\n\n* This is a list\n* with items";
        assert_eq!(
            markdown_to_blocks(markdown),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with *italic* text and `code` here\nThis is the same paragraph on a new line",
                "* This is a list\n* with items",
            ]
        );
    }

    #[test]
    fn test_blocks_keep_order() {
        assert_eq!(markdown_to_blocks("A\n\nB\n\nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_blocks_trim_and_drop_empty() {
        assert_eq!(markdown_to_blocks("   X  "), vec!["X"]);
        assert_eq!(markdown_to_blocks("\n\n\n\nA\n\n   \n\n\n\nB\n"), vec!["A", "B"]);
        assert!(markdown_to_blocks("").is_empty());
    }

    #[test]
    fn test_classify_heading() {
        assert_eq!(BlockKind::classify("# heading").unwrap(), BlockKind::Heading);
        assert_eq!(BlockKind::classify("###### six").unwrap(), BlockKind::Heading);
        assert_eq!(BlockKind::classify("####### seven").unwrap(), BlockKind::Paragraph);
        assert_eq!(BlockKind::classify("#nospace").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(BlockKind::classify("* a\n* b").unwrap(), BlockKind::UnorderedList);
        assert_eq!(BlockKind::classify("- a\n- b").unwrap(), BlockKind::UnorderedList);
        assert_eq!(BlockKind::classify("* a\n- b").unwrap(), BlockKind::Paragraph);
        assert_eq!(BlockKind::classify("* a\nb").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(BlockKind::classify("1. a\n2. b\n3. c").unwrap(), BlockKind::OrderedList);
        assert_eq!(BlockKind::classify("1. a\n3. b").unwrap(), BlockKind::Paragraph);
        assert_eq!(BlockKind::classify("2. a\n3. b").unwrap(), BlockKind::Paragraph);
        assert_eq!(BlockKind::classify("1.a").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list_past_nine() {
        let block: Vec<String> = (1..=12).map(|i| format!("{i}. item")).collect();
        assert_eq!(
            BlockKind::classify(&block.join("\n")).unwrap(),
            BlockKind::OrderedList
        );
    }

    #[test]
    fn test_classify_code_block() {
        assert_eq!(BlockKind::classify("```\ncode\n```").unwrap(), BlockKind::CodeBlock);
        assert_eq!(BlockKind::classify("```\n```").unwrap(), BlockKind::CodeBlock);
        assert_eq!(BlockKind::classify("```inline```").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unterminated_code_block() {
        assert_eq!(
            BlockKind::classify("```\ncode"),
            Err(MarkdownError::UnterminatedCodeFence)
        );
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(BlockKind::classify("> a\n> b").unwrap(), BlockKind::Quote);
        assert_eq!(BlockKind::classify(">a\n>b").unwrap(), BlockKind::Quote);
        assert_eq!(BlockKind::classify("> a\nb").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(BlockKind::classify("just text").unwrap(), BlockKind::Paragraph);
        assert_eq!(BlockKind::classify("").unwrap(), BlockKind::Paragraph);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("### three"), Some(3));
        assert_eq!(heading_level("no"), None);
        assert_eq!(heading_level("#"), None);
    }

    #[test]
    fn test_block_parse() {
        let block = Block::parse("- item").unwrap();
        assert_eq!(block.kind, BlockKind::UnorderedList);
        assert_eq!(block.text, "- item");
    }
}
