//! Sections, titles, lists, paragraphs, verbatim blocks and rules.

use std::io::Write;

use dw_events::{AttributeSet, Numbering, filter_attributes, names};

use super::XhtmlSink;

/// Shallowest supported section depth.
const MIN_SECTION_DEPTH: usize = 1;
/// Deepest supported section depth.
const MAX_SECTION_DEPTH: usize = 5;

/// Heading tag for a section-title depth. Depth 1 maps to `h2`: `h1` is
/// reserved for the document title.
fn heading_tag(depth: usize) -> Option<&'static str> {
    match depth {
        1 => Some("h2"),
        2 => Some("h3"),
        3 => Some("h4"),
        4 => Some("h5"),
        5 => Some("h6"),
        _ => None,
    }
}

fn list_style_token(numbering: Numbering) -> &'static str {
    match numbering {
        Numbering::UpperAlpha => "upper-alpha",
        Numbering::LowerAlpha => "lower-alpha",
        Numbering::UpperRoman => "upper-roman",
        Numbering::LowerRoman => "lower-roman",
        Numbering::Decimal => "decimal",
    }
}

impl<W: Write> XhtmlSink<W> {
    /// Open a section container. The default class is `section`; a caller
    /// class wins. Depths outside the supported range emit nothing.
    pub(super) fn on_section(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        if (MIN_SECTION_DEPTH..=MAX_SECTION_DEPTH).contains(&depth) {
            let mut att = AttributeSet::new().with(names::CLASS, "section");
            att.merge(&filter_attributes(attrs, names::BASE_ATTRIBUTES));
            self.write_start_tag("div", &att);
        }
    }

    pub(super) fn on_section_end(&mut self, depth: usize) {
        if (MIN_SECTION_DEPTH..=MAX_SECTION_DEPTH).contains(&depth) {
            self.write_end_tag("div");
        }
    }

    pub(super) fn on_section_title(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        if let Some(tag) = heading_tag(depth) {
            let atts = filter_attributes(attrs, names::SECTION_ATTRIBUTES);
            self.write_start_tag(tag, &atts);
        }
    }

    pub(super) fn on_section_title_end(&mut self, depth: usize) {
        if let Some(tag) = heading_tag(depth) {
            self.write_end_tag(tag);
        }
    }

    pub(super) fn on_list(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        self.write_start_tag("ul", &atts);
    }

    pub(super) fn on_list_item(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        self.write_start_tag("li", &atts);
    }

    /// Open an ordered list. The numbering style is injected as a
    /// `list-style-type` style token, overriding any caller style.
    pub(super) fn on_numbered_list(&mut self, numbering: Numbering, attrs: Option<&AttributeSet>) {
        let mut atts = filter_attributes(attrs, names::SECTION_ATTRIBUTES);
        atts.set(
            names::STYLE,
            format!("list-style-type: {}", list_style_token(numbering)),
        );
        self.write_start_tag("ol", &atts);
    }

    pub(super) fn on_definition_list(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        self.write_start_tag("dl", &atts);
    }

    pub(super) fn on_defined_term(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        self.write_start_tag("dt", &atts);
    }

    pub(super) fn on_definition(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        self.write_start_tag("dd", &atts);
    }

    pub(super) fn on_paragraph(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::SECTION_ATTRIBUTES);
        self.write_start_tag("p", &atts);
    }

    /// Open a preformatted block: an outer container plus a `pre` tag.
    /// `decoration=boxed` becomes `class="source"` on the container. The
    /// width attribute belongs to the `pre` tag, class and align to the
    /// container, so the filtered set is redistributed between the two.
    pub(super) fn on_verbatim(&mut self, attrs: Option<&AttributeSet>) {
        self.state.verbatim = true;

        let mut atts = filter_attributes(attrs, names::VERBATIM_ATTRIBUTES);
        if atts.contains_value(names::DECORATION, "boxed") {
            atts.set(names::CLASS, "source");
        }
        atts.remove(names::DECORATION);

        let width = atts.remove(names::WIDTH);
        self.write_start_tag("div", &atts);

        if let Some(width) = width {
            atts.set(names::WIDTH, width);
        }
        atts.remove(names::ALIGN);
        atts.remove(names::CLASS);
        self.write_start_tag("pre", &atts);
    }

    pub(super) fn on_verbatim_end(&mut self) {
        self.write_end_tag("pre");
        self.write_end_tag("div");
        self.state.verbatim = false;
    }

    pub(super) fn on_horizontal_rule(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::HR_ATTRIBUTES);
        self.write_simple_tag("hr", &atts);
    }
}
