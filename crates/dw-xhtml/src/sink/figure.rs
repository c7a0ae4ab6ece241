//! Figures: the current container convention and the legacy raw-fragment
//! convention, selected per call and carried to the matching close.

use std::io::Write;

use dw_events::{AttributeSet, filter_attributes, names};

use crate::escape::escape_html;
use crate::state::FigureMode;

use super::XhtmlSink;

impl<W: Write> XhtmlSink<W> {
    /// Open a figure container (current convention). Default class is
    /// `figure` unless the caller set one.
    pub(super) fn on_figure(&mut self, attrs: Option<&AttributeSet>) {
        self.state.figure = Some(FigureMode::Current);

        let mut atts = filter_attributes(attrs, names::BASE_ATTRIBUTES);
        if !atts.contains(names::CLASS) {
            atts.set(names::CLASS, "figure");
        }
        self.write_start_tag("div", &atts);
    }

    /// Open a figure the legacy way: a raw, unclosed start-of-image-tag
    /// fragment, completed piecewise by the legacy graphics/caption events
    /// and closed self-closing by the figure end.
    pub(super) fn on_figure_legacy(&mut self) {
        self.state.figure = Some(FigureMode::Legacy);
        self.write("<img");
    }

    pub(super) fn on_figure_end(&mut self) {
        match self.state.figure.take() {
            Some(FigureMode::Legacy) => self.write(" />"),
            _ => self.write_end_tag("div"),
        }
    }

    /// Write the image tag (current convention). Inside a figure container
    /// the image is wrapped in a centered paragraph.
    pub(super) fn on_figure_graphics(&mut self, src: &str, attrs: Option<&AttributeSet>) {
        let in_figure = self.state.figure == Some(FigureMode::Current);

        if in_figure {
            let wrapper = AttributeSet::new().with(names::ALIGN, "center");
            self.write_start_tag("p", &wrapper);
        }

        let mut atts = AttributeSet::new().with(names::SRC, src);
        atts.merge(&filter_attributes(attrs, names::IMG_ATTRIBUTES));
        self.write_simple_tag("img", &atts);

        if in_figure {
            self.write_end_tag("p");
        }
    }

    /// Write only the source fragment of the pending legacy image tag.
    pub(super) fn on_figure_graphics_legacy(&mut self, name: &str) {
        let fragment = format!(" src=\"{}\"", escape_html(name));
        self.write(&fragment);
    }

    /// Open a caption (current convention): a centered paragraph plus
    /// italic emphasis.
    pub(super) fn on_figure_caption(&mut self, attrs: Option<&AttributeSet>) {
        self.state.caption = Some(FigureMode::Current);

        let mut atts = AttributeSet::new().with(names::ALIGN, "center");
        atts.merge(&filter_attributes(attrs, names::BASE_ATTRIBUTES));
        self.on_paragraph(Some(&atts));
        self.on_inline("i");
    }

    /// Open a caption the legacy way: an unclosed alternate-text fragment
    /// of the pending image tag.
    pub(super) fn on_figure_caption_legacy(&mut self) {
        self.state.caption = Some(FigureMode::Legacy);
        self.write(" alt=\"");
    }

    pub(super) fn on_figure_caption_end(&mut self) {
        match self.state.caption.take() {
            Some(FigureMode::Legacy) => self.write("\""),
            _ => {
                self.on_inline_end("i");
                self.write_end_tag("p");
            }
        }
    }
}
