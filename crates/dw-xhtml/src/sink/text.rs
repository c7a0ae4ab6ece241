//! Text routing, inline spans and decorations.

use std::io::Write;

use dw_events::{AttributeSet, filter_attributes, names};

use super::XhtmlSink;

impl<W: Write> XhtmlSink<W> {
    /// Route a text event: head mode buffers it unescaped, verbatim and
    /// normal mode escape it exactly once and write it.
    pub(super) fn on_text(&mut self, text: &str) {
        if self.state.head {
            self.state.head_buffer.push_str(text);
        } else {
            self.content(text);
        }
    }

    /// Text wrapped in inline decorations, opened outer to inner in fixed
    /// order: underline, strikethrough, then sub- or superscript.
    pub(super) fn on_styled_text(&mut self, text: &str, attrs: Option<&AttributeSet>) {
        let Some(attrs) = attrs else {
            self.on_text(text);
            return;
        };

        let underline = attrs.contains_value(names::DECORATION, "underline");
        let line_through = attrs.contains_value(names::DECORATION, "line-through");
        let sub = attrs.contains_value(names::VALIGN, "sub");
        let sup = attrs.contains_value(names::VALIGN, "sup");

        if underline {
            self.on_inline("u");
        }
        if line_through {
            self.on_inline("s");
        }
        if sub {
            self.on_inline("sub");
        }
        if sup {
            self.on_inline("sup");
        }

        self.on_text(text);

        if sup {
            self.on_inline_end("sup");
        }
        if sub {
            self.on_inline_end("sub");
        }
        if line_through {
            self.on_inline_end("s");
        }
        if underline {
            self.on_inline_end("u");
        }
    }

    /// Open a bare inline span. No-op in head mode.
    pub(super) fn on_inline(&mut self, tag: &str) {
        if !self.state.head {
            self.write_start_tag(tag, &AttributeSet::new());
        }
    }

    /// Close a bare inline span. No-op in head mode.
    pub(super) fn on_inline_end(&mut self, tag: &str) {
        if !self.state.head {
            self.write_end_tag(tag);
        }
    }

    pub(super) fn on_line_break(&mut self, attrs: Option<&AttributeSet>) {
        if self.state.head {
            self.state.head_buffer.push('\n');
        } else {
            let atts = filter_attributes(attrs, names::BR_ATTRIBUTES);
            self.write_simple_tag("br", &atts);
        }
    }

    pub(super) fn on_non_breaking_space(&mut self) {
        if self.state.head {
            self.state.head_buffer.push(' ');
        } else {
            self.write("&#160;");
        }
    }

    pub(super) fn on_comment(&mut self, comment: &str) {
        let text = format!("<!-- {comment} -->");
        self.write(&text);
    }
}

#[cfg(test)]
mod tests {
    use dw_events::{AttributeSet, Sink};
    use pretty_assertions::assert_eq;

    use super::super::XhtmlSink;
    use super::super::test_util::rendered;

    #[test]
    fn test_text_is_escaped_exactly_once() {
        let out = rendered(|sink| sink.text(r#"1 < 2 & "three""#));
        assert_eq!(out, "1 &lt; 2 &amp; &quot;three&quot;");
    }

    #[test]
    fn test_verbatim_text_is_escaped_but_not_decorated() {
        let out = rendered(|sink| {
            sink.verbatim(None);
            sink.text("if a < b { }");
            sink.verbatim_end();
        });
        assert_eq!(out, "<div><pre>if a &lt; b { }</pre></div>");
    }

    #[test]
    fn test_head_mode_buffers_text_without_output() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.set_head_mode(true);
        sink.text("My Title");
        sink.line_break(None);
        sink.non_breaking_space();
        sink.text("& more");

        assert_eq!(sink.head_buffer(), "My Title\n & more");
        let out = sink.into_inner().unwrap();
        assert_eq!(out, b"");
    }

    #[test]
    fn test_inline_spans_are_noops_in_head_mode() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.set_head_mode(true);
        sink.italic();
        sink.bold();
        sink.monospaced();
        sink.monospaced_end();
        sink.bold_end();
        sink.italic_end();
        let out = sink.into_inner().unwrap();
        assert_eq!(out, b"");
    }

    #[test]
    fn test_inline_spans() {
        let out = rendered(|sink| {
            sink.italic();
            sink.text("i");
            sink.italic_end();
            sink.bold();
            sink.text("b");
            sink.bold_end();
            sink.monospaced();
            sink.text("m");
            sink.monospaced_end();
        });
        assert_eq!(out, "<i>i</i><b>b</b><tt>m</tt>");
    }

    #[test]
    fn test_styled_text_nesting_order() {
        let attrs = AttributeSet::new()
            .with("decoration", "underline")
            .with("valign", "sub");
        let out = rendered(|sink| sink.styled_text("x", Some(&attrs)));
        assert_eq!(out, "<u><sub>x</sub></u>");
    }

    #[test]
    fn test_styled_text_line_through() {
        let attrs = AttributeSet::new().with("decoration", "line-through");
        let out = rendered(|sink| sink.styled_text("gone", Some(&attrs)));
        assert_eq!(out, "<s>gone</s>");
    }

    #[test]
    fn test_styled_text_superscript() {
        let attrs = AttributeSet::new().with("valign", "sup");
        let out = rendered(|sink| sink.styled_text("2", Some(&attrs)));
        assert_eq!(out, "<sup>2</sup>");
    }

    #[test]
    fn test_styled_text_without_attrs_is_plain() {
        let out = rendered(|sink| sink.styled_text("plain", None));
        assert_eq!(out, "plain");
    }

    #[test]
    fn test_line_break_and_nbsp() {
        let out = rendered(|sink| {
            sink.text("a");
            sink.line_break(None);
            sink.non_breaking_space();
            sink.text("b");
        });
        assert_eq!(out, "a<br />&#160;b");
    }
}
