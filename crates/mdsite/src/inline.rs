//! Inline splitting.
//!
//! Turns the text of one block into a sequence of [`TextRun`]s. Each stage only
//! looks at plain runs and passes every other run through untouched:
//!
//! 1. `**bold**`
//! 2. `*italic*`
//! 3. `` `code` ``
//! 4. `![alt](url)`
//! 5. `[text](url)`
//!
//! Images must be extracted before links: `![alt](url)` also matches the link
//! pattern, and would otherwise become a link preceded by a stray `!`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{TextKind, TextRun};
use crate::{MarkdownError, Result};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("invalid image regex"));

// Does not exclude a leading `!`; relies on images being extracted first.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("invalid link regex"));

/// A fixed marker bounding an inline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `**`
    Bold,
    /// `*`
    Italic,
    /// `` ` ``
    Code,
}

impl Delimiter {
    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    fn kind(self) -> TextKind {
        match self {
            Delimiter::Bold => TextKind::Bold,
            Delimiter::Italic => TextKind::Italic,
            Delimiter::Code => TextKind::Code,
        }
    }
}

/// An `[text](url)`-shaped inline pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Image,
    Link,
}

impl Pattern {
    fn regex(self) -> &'static Regex {
        match self {
            Pattern::Image => &*IMAGE_PATTERN,
            Pattern::Link => &*LINK_PATTERN,
        }
    }

    fn run(self, text: &str, url: &str) -> TextRun {
        match self {
            Pattern::Image => TextRun::image(text, url),
            Pattern::Link => TextRun::link(text, url),
        }
    }
}

/// Split a piece of inline Markdown into text runs.
///
/// Fails with [`MarkdownError::MalformedInline`] if a `**`, `*` or `` ` `` section is not closed.
/// Empty input yields no runs.
pub fn text_to_runs(text: &str) -> Result<Vec<TextRun>> {
    let runs = vec![TextRun::plain(text)];
    let runs = split_delimiter(runs, Delimiter::Bold)?;
    let runs = split_delimiter(runs, Delimiter::Italic)?;
    let runs = split_delimiter(runs, Delimiter::Code)?;
    let runs = split_pattern(runs, Pattern::Image);
    Ok(split_pattern(runs, Pattern::Link))
}

/// Split every plain run on `delimiter`.
///
/// Segments alternate plain and delimited, starting with plain. An even segment
/// count means a delimiter was left open. Empty segments are dropped.
pub fn split_delimiter(runs: Vec<TextRun>, delimiter: Delimiter) -> Result<Vec<TextRun>> {
    let marker = delimiter.marker();
    let mut output = Vec::with_capacity(runs.len());

    for run in runs {
        if !run.is_plain() {
            output.push(run);
            continue;
        }

        let sections: Vec<&str> = run.text().split(marker).collect();
        if sections.len() % 2 == 0 {
            return Err(MarkdownError::MalformedInline { delimiter: marker });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                TextKind::Plain
            } else {
                delimiter.kind()
            };
            output.push(TextRun::styled(section, kind));
        }
    }

    Ok(output)
}

/// Extract every `pattern` occurrence from the plain runs, left to right.
///
/// Text between matches stays plain. A run with no match passes through unchanged.
pub fn split_pattern(runs: Vec<TextRun>, pattern: Pattern) -> Vec<TextRun> {
    let regex = pattern.regex();
    let mut output = Vec::with_capacity(runs.len());

    for run in runs {
        if !run.is_plain() {
            output.push(run);
            continue;
        }

        let mut rest = run.text();
        while let Some(captures) = regex.captures(rest) {
            let (Some(whole), Some(text), Some(url)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                break;
            };

            let before = &rest[..whole.start()];
            if !before.is_empty() {
                output.push(TextRun::plain(before));
            }
            output.push(pattern.run(text.as_str(), url.as_str()));
            rest = &rest[whole.end()..];
        }

        if !rest.is_empty() {
            output.push(TextRun::plain(rest));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_bold() {
        let runs = split_delimiter(
            vec![TextRun::plain("This is text with a **bolded** word")],
            Delimiter::Bold,
        )
        .unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::plain("This is text with a "),
                TextRun::bold("bolded"),
                TextRun::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_bold_multiple() {
        let runs = split_delimiter(
            vec![TextRun::plain("**one** and **two**")],
            Delimiter::Bold,
        )
        .unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::bold("one"),
                TextRun::plain(" and "),
                TextRun::bold("two"),
            ]
        );
    }

    #[test]
    fn test_split_italic() {
        let runs =
            split_delimiter(vec![TextRun::plain("an *italic* word")], Delimiter::Italic).unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::plain("an "),
                TextRun::italic("italic"),
                TextRun::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_code() {
        let runs =
            split_delimiter(vec![TextRun::plain("a `code block` word")], Delimiter::Code).unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::plain("a "),
                TextRun::code("code block"),
                TextRun::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_skips_non_plain_runs() {
        let runs = split_delimiter(
            vec![TextRun::code("*not italic*"), TextRun::plain("*yes*")],
            Delimiter::Italic,
        )
        .unwrap();
        assert_eq!(runs, vec![TextRun::code("*not italic*"), TextRun::italic("yes")]);
    }

    #[test]
    fn test_split_unclosed_delimiter() {
        let err = split_delimiter(vec![TextRun::plain("a **b c")], Delimiter::Bold).unwrap_err();
        assert_eq!(err, MarkdownError::MalformedInline { delimiter: "**" });
    }

    #[test]
    fn test_split_unclosed_code() {
        assert_eq!(
            text_to_runs("a `b c"),
            Err(MarkdownError::MalformedInline { delimiter: "`" })
        );
    }

    #[test]
    fn test_split_images() {
        let runs = split_pattern(
            vec![TextRun::plain(
                "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
            )],
            Pattern::Image,
        );
        assert_eq!(
            runs,
            vec![
                TextRun::plain("This is text with an "),
                TextRun::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                TextRun::plain(" and another "),
                TextRun::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_links() {
        let runs = split_pattern(
            vec![TextRun::plain("Go [here](a.html) or [there](b.html) now")],
            Pattern::Link,
        );
        assert_eq!(
            runs,
            vec![
                TextRun::plain("Go "),
                TextRun::link("here", "a.html"),
                TextRun::plain(" or "),
                TextRun::link("there", "b.html"),
                TextRun::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_link_pattern_leaves_bang_before_image_syntax() {
        // Only reachable when the image stage is skipped
        let runs = split_pattern(vec![TextRun::plain("see ![x](u)")], Pattern::Link);
        assert_eq!(
            runs,
            vec![TextRun::plain("see !"), TextRun::link("x", "u")]
        );
    }

    #[test]
    fn test_split_pattern_no_match() {
        let runs = split_pattern(vec![TextRun::plain("no links here")], Pattern::Link);
        assert_eq!(runs, vec![TextRun::plain("no links here")]);
    }

    #[test]
    fn test_split_many_sequential_images() {
        let text = "![i](u)".repeat(10_000);
        let runs = split_pattern(vec![TextRun::plain(&text)], Pattern::Image);
        assert_eq!(runs.len(), 10_000);
        assert!(runs.iter().all(|r| r.kind() == TextKind::Image));
    }

    #[test]
    fn test_text_to_runs_delimiters() {
        assert_eq!(
            text_to_runs("a **b** c").unwrap(),
            vec![TextRun::plain("a "), TextRun::bold("b"), TextRun::plain(" c")]
        );
    }

    #[test]
    fn test_text_to_runs_unclosed() {
        assert!(matches!(
            text_to_runs("a **b c"),
            Err(MarkdownError::MalformedInline { .. })
        ));
    }

    #[test]
    fn test_text_to_runs_image_before_link() {
        assert_eq!(
            text_to_runs("![x](u1) and [y](u2)").unwrap(),
            vec![
                TextRun::image("x", "u1"),
                TextRun::plain(" and "),
                TextRun::link("y", "u2"),
            ]
        );
    }

    #[test]
    fn test_text_to_runs_everything() {
        let runs = text_to_runs(
            "This is **text** with an *italic* word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            runs,
            vec![
                TextRun::plain("This is "),
                TextRun::bold("text"),
                TextRun::plain(" with an "),
                TextRun::italic("italic"),
                TextRun::plain(" word and a "),
                TextRun::code("code block"),
                TextRun::plain(" and an "),
                TextRun::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextRun::plain(" and a "),
                TextRun::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_text_to_runs_empty() {
        assert!(text_to_runs("").unwrap().is_empty());
    }
}
