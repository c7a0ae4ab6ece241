//! The `!image!caption` figure block syntax.

use dw_events::Sink;

use crate::error::ParseError;

/// A parsed figure block: an image reference and an optional caption.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FigureBlock {
    source: String,
    caption: Option<String>,
}

impl FigureBlock {
    /// The image reference between the two `!` markers.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The caption, if the block carried a non-blank one.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Replay this block as figure events on a sink.
    pub fn emit(&self, sink: &mut impl Sink) {
        sink.figure(None);
        sink.figure_graphics(&self.source, None);
        if let Some(caption) = &self.caption {
            sink.figure_caption(None);
            sink.text(caption);
            sink.figure_caption_end();
        }
        sink.figure_end();
    }
}

/// Parser for figure blocks.
///
/// A figure block starts with `!` and contains a second `!` beyond
/// position 1. The text between the markers is the image reference;
/// everything after the second marker, plus all following lines up to the
/// first blank line, is caption content. A `\\` line-break escape at the
/// start of the caption is stripped.
#[derive(Clone, Copy, Debug, Default)]
pub struct FigureBlockParser;

impl FigureBlockParser {
    /// Whether `line` opens a figure block.
    #[must_use]
    pub fn accepts(line: &str) -> bool {
        line.starts_with('!') && line.rfind('!').is_some_and(|index| index > 1)
    }

    /// Parse a figure block from its opening line, consuming caption
    /// continuation lines from `source` up to (and including) the first
    /// blank line.
    pub fn parse<'a, I>(line: &str, source: &mut I) -> Result<FigureBlock, ParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let marker = line
            .rfind('!')
            .filter(|&index| index > 1 && line.starts_with('!'));
        let Some(marker) = marker else {
            return Err(ParseError::NotAFigureBlock {
                line: line.to_owned(),
            });
        };

        let image = &line[1..marker];
        let mut rest = line[marker + 1..].trim();
        // ignore a line break at the start of the caption
        if let Some(stripped) = rest.strip_prefix("\\\\") {
            rest = stripped;
        }

        let mut caption = rest.to_owned();
        for next in source {
            if next.trim().is_empty() {
                break;
            }
            if !caption.is_empty() {
                caption.push(' ');
            }
            caption.push_str(next.trim());
        }

        let caption = if caption.trim().is_empty() {
            None
        } else {
            Some(caption)
        };
        tracing::debug!(image = %image, has_caption = caption.is_some(), "parsed figure block");

        Ok(FigureBlock {
            source: image.to_owned(),
            caption,
        })
    }
}

#[cfg(test)]
mod tests {
    use dw_xhtml::XhtmlSink;
    use pretty_assertions::assert_eq;

    use super::{FigureBlock, FigureBlockParser};

    fn parse(line: &str, following: &[&str]) -> FigureBlock {
        let mut source = following.iter().copied();
        FigureBlockParser::parse(line, &mut source).unwrap()
    }

    #[test]
    fn test_accepts() {
        assert!(FigureBlockParser::accepts("!image.png!"));
        assert!(FigureBlockParser::accepts("!image.png! caption"));
        assert!(!FigureBlockParser::accepts("plain text"));
        assert!(!FigureBlockParser::accepts("!"));
        assert!(!FigureBlockParser::accepts("!!"));
        assert!(!FigureBlockParser::accepts("not!first"));
    }

    #[test]
    fn test_rejects_non_figure_line() {
        let mut source = std::iter::empty();
        let err = FigureBlockParser::parse("plain", &mut source).unwrap_err();
        assert!(err.to_string().contains("not a figure block"));
    }

    #[test]
    fn test_image_without_caption() {
        let block = parse("!img/chart.png!", &[]);
        assert_eq!(block.source(), "img/chart.png");
        assert_eq!(block.caption(), None);
    }

    #[test]
    fn test_blank_caption_is_none() {
        let block = parse("!a.png!   ", &["", "after the gap"]);
        assert_eq!(block.caption(), None);
    }

    #[test]
    fn test_caption_on_same_line() {
        let block = parse("!a.png! The caption", &[]);
        assert_eq!(block.caption(), Some("The caption"));
    }

    #[test]
    fn test_caption_linebreak_escape_is_stripped() {
        let block = parse(r"!a.png! \\Starts here", &[]);
        assert_eq!(block.caption(), Some("Starts here"));
    }

    #[test]
    fn test_caption_accumulates_until_blank_line() {
        let block = parse(
            "!a.png! First line",
            &["second line", "third line", "", "not caption"],
        );
        assert_eq!(block.caption(), Some("First line second line third line"));
    }

    #[test]
    fn test_emit_renders_figure_events() {
        let block = parse("!img/chart.png! Quarterly results", &[]);
        let mut sink = XhtmlSink::new(Vec::new());
        block.emit(&mut sink);
        let html = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<div class="figure">"#,
                r#"<p align="center"><img src="img/chart.png" /></p>"#,
                r#"<p align="center"><i>Quarterly results</i></p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_emit_without_caption_skips_caption_events() {
        let block = parse("!a.png!", &[]);
        let mut sink = XhtmlSink::new(Vec::new());
        block.emit(&mut sink);
        let html = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            html,
            r#"<div class="figure"><p align="center"><img src="a.png" /></p></div>"#
        );
    }
}
