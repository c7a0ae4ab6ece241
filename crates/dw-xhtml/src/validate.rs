//! Optional producer-contract validation.
//!
//! Sinks trust their producers: malformed event ordering silently yields
//! malformed output. [`ValidatingSink`] makes that failure mode explicit.
//! It forwards every event unchanged to the wrapped sink (garbage in,
//! garbage out) while recording each contract violation as a warning.

use std::io;

use dw_events::{AttributeSet, Justification, Numbering, Sink};

use crate::state::FigureMode;

/// Position in the table call protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TableStage {
    Idle,
    Opened,
    Rows,
    Row,
    Cell,
}

/// A forwarding wrapper that checks the producer-side event contract.
///
/// Checked: section depth range, the documented table call order (see
/// [`Sink`]) and figure-convention mixing. Violations are recorded (and
/// logged at warn level) but never block the stream.
///
/// # Example
///
/// ```
/// use dw_events::Sink;
/// use dw_xhtml::{ValidatingSink, XhtmlSink};
///
/// let mut sink = ValidatingSink::new(XhtmlSink::new(Vec::new()));
/// sink.section(9, None);
/// assert_eq!(sink.warnings().len(), 1);
/// ```
pub struct ValidatingSink<S> {
    inner: S,
    warnings: Vec<String>,
    table: TableStage,
    figure: Option<FigureMode>,
    caption: Option<FigureMode>,
}

impl<S: Sink> ValidatingSink<S> {
    /// Wrap a sink.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            warnings: Vec::new(),
            table: TableStage::Idle,
            figure: None,
            caption: None,
        }
    }

    /// Contract violations recorded so far, in event order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Unwrap, returning the inner sink and the recorded warnings.
    pub fn into_parts(self) -> (S, Vec<String>) {
        (self.inner, self.warnings)
    }

    fn warn(&mut self, message: String) {
        tracing::warn!(warning = %message, "event contract violation");
        self.warnings.push(message);
    }

    fn check_depth(&mut self, event: &str, depth: usize) {
        if !(1..=5).contains(&depth) {
            self.warn(format!("{event}: depth {depth} outside 1..=5, ignored"));
        }
    }

    fn expect_table(&mut self, event: &str, expected: &[TableStage], next: TableStage) {
        if !expected.contains(&self.table) {
            self.warn(format!("{event}: out of order (state {:?})", self.table));
        }
        self.table = next;
    }
}

impl<S: Sink> Sink for ValidatingSink<S> {
    fn section(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        self.check_depth("section", depth);
        self.inner.section(depth, attrs);
    }

    fn section_end(&mut self, depth: usize) {
        self.check_depth("section_end", depth);
        self.inner.section_end(depth);
    }

    fn section_title(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        self.check_depth("section_title", depth);
        self.inner.section_title(depth, attrs);
    }

    fn section_title_end(&mut self, depth: usize) {
        self.check_depth("section_title_end", depth);
        self.inner.section_title_end(depth);
    }

    fn list(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.list(attrs);
    }

    fn list_end(&mut self) {
        self.inner.list_end();
    }

    fn list_item(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.list_item(attrs);
    }

    fn list_item_end(&mut self) {
        self.inner.list_item_end();
    }

    fn numbered_list(&mut self, numbering: Numbering, attrs: Option<&AttributeSet>) {
        self.inner.numbered_list(numbering, attrs);
    }

    fn numbered_list_end(&mut self) {
        self.inner.numbered_list_end();
    }

    fn numbered_list_item(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.numbered_list_item(attrs);
    }

    fn numbered_list_item_end(&mut self) {
        self.inner.numbered_list_item_end();
    }

    fn definition_list(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.definition_list(attrs);
    }

    fn definition_list_end(&mut self) {
        self.inner.definition_list_end();
    }

    fn defined_term(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.defined_term(attrs);
    }

    fn defined_term_end(&mut self) {
        self.inner.defined_term_end();
    }

    fn definition(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.definition(attrs);
    }

    fn definition_end(&mut self) {
        self.inner.definition_end();
    }

    fn paragraph(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.paragraph(attrs);
    }

    fn paragraph_end(&mut self) {
        self.inner.paragraph_end();
    }

    fn verbatim(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.verbatim(attrs);
    }

    fn verbatim_end(&mut self) {
        self.inner.verbatim_end();
    }

    fn horizontal_rule(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.horizontal_rule(attrs);
    }

    fn page_break(&mut self) {
        self.inner.page_break();
    }

    fn table(&mut self, attrs: Option<&AttributeSet>) {
        self.expect_table("table", &[TableStage::Idle], TableStage::Opened);
        self.inner.table(attrs);
    }

    fn table_end(&mut self) {
        self.expect_table("table_end", &[TableStage::Opened], TableStage::Idle);
        self.inner.table_end();
    }

    fn table_rows(&mut self, justification: Option<&[Justification]>, grid: bool) {
        self.expect_table("table_rows", &[TableStage::Opened], TableStage::Rows);
        self.inner.table_rows(justification, grid);
    }

    fn table_rows_end(&mut self) {
        self.expect_table("table_rows_end", &[TableStage::Rows], TableStage::Opened);
        self.inner.table_rows_end();
    }

    fn table_row(&mut self, attrs: Option<&AttributeSet>) {
        self.expect_table("table_row", &[TableStage::Rows], TableStage::Row);
        self.inner.table_row(attrs);
    }

    fn table_row_end(&mut self) {
        self.expect_table("table_row_end", &[TableStage::Row], TableStage::Rows);
        self.inner.table_row_end();
    }

    fn table_cell(&mut self, attrs: Option<&AttributeSet>) {
        self.expect_table("table_cell", &[TableStage::Row], TableStage::Cell);
        self.inner.table_cell(attrs);
    }

    fn table_cell_end(&mut self) {
        self.expect_table("table_cell_end", &[TableStage::Cell], TableStage::Row);
        self.inner.table_cell_end();
    }

    fn table_header_cell(&mut self, attrs: Option<&AttributeSet>) {
        self.expect_table("table_header_cell", &[TableStage::Row], TableStage::Cell);
        self.inner.table_header_cell(attrs);
    }

    fn table_header_cell_end(&mut self) {
        self.expect_table("table_header_cell_end", &[TableStage::Cell], TableStage::Row);
        self.inner.table_header_cell_end();
    }

    fn table_caption(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.table_caption(attrs);
    }

    fn table_caption_end(&mut self) {
        self.inner.table_caption_end();
    }

    fn figure(&mut self, attrs: Option<&AttributeSet>) {
        if self.figure.is_some() {
            self.warn("figure: previous figure not closed".to_owned());
        }
        self.figure = Some(FigureMode::Current);
        self.inner.figure(attrs);
    }

    fn figure_legacy(&mut self) {
        if self.figure.is_some() {
            self.warn("figure_legacy: previous figure not closed".to_owned());
        }
        self.figure = Some(FigureMode::Legacy);
        self.inner.figure_legacy();
    }

    fn figure_end(&mut self) {
        if self.figure.take().is_none() {
            self.warn("figure_end: no open figure".to_owned());
        }
        self.inner.figure_end();
    }

    fn figure_graphics(&mut self, src: &str, attrs: Option<&AttributeSet>) {
        if self.figure == Some(FigureMode::Legacy) {
            self.warn("figure_graphics: current-convention call inside legacy figure".to_owned());
        }
        self.inner.figure_graphics(src, attrs);
    }

    fn figure_graphics_legacy(&mut self, name: &str) {
        if self.figure == Some(FigureMode::Current) {
            self.warn(
                "figure_graphics_legacy: legacy-convention call inside current figure".to_owned(),
            );
        }
        self.inner.figure_graphics_legacy(name);
    }

    fn figure_caption(&mut self, attrs: Option<&AttributeSet>) {
        if self.figure == Some(FigureMode::Legacy) {
            self.warn("figure_caption: current-convention call inside legacy figure".to_owned());
        }
        self.caption = Some(FigureMode::Current);
        self.inner.figure_caption(attrs);
    }

    fn figure_caption_legacy(&mut self) {
        if self.figure == Some(FigureMode::Current) {
            self.warn(
                "figure_caption_legacy: legacy-convention call inside current figure".to_owned(),
            );
        }
        self.caption = Some(FigureMode::Legacy);
        self.inner.figure_caption_legacy();
    }

    fn figure_caption_end(&mut self) {
        if self.caption.take().is_none() {
            self.warn("figure_caption_end: no open caption".to_owned());
        }
        self.inner.figure_caption_end();
    }

    fn anchor(&mut self, name: &str, attrs: Option<&AttributeSet>) {
        self.inner.anchor(name, attrs);
    }

    fn anchor_end(&mut self) {
        self.inner.anchor_end();
    }

    fn link(&mut self, href: &str, target: Option<&str>, attrs: Option<&AttributeSet>) {
        self.inner.link(href, target, attrs);
    }

    fn link_end(&mut self) {
        self.inner.link_end();
    }

    fn italic(&mut self) {
        self.inner.italic();
    }

    fn italic_end(&mut self) {
        self.inner.italic_end();
    }

    fn bold(&mut self) {
        self.inner.bold();
    }

    fn bold_end(&mut self) {
        self.inner.bold_end();
    }

    fn monospaced(&mut self) {
        self.inner.monospaced();
    }

    fn monospaced_end(&mut self) {
        self.inner.monospaced_end();
    }

    fn line_break(&mut self, attrs: Option<&AttributeSet>) {
        self.inner.line_break(attrs);
    }

    fn non_breaking_space(&mut self) {
        self.inner.non_breaking_space();
    }

    fn text(&mut self, text: &str) {
        self.inner.text(text);
    }

    fn styled_text(&mut self, text: &str, attrs: Option<&AttributeSet>) {
        self.inner.styled_text(text, attrs);
    }

    fn raw_text(&mut self, text: &str) {
        self.inner.raw_text(text);
    }

    fn comment(&mut self, comment: &str) {
        self.inner.comment(comment);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use dw_events::{Justification, Sink};
    use pretty_assertions::assert_eq;

    use super::ValidatingSink;
    use crate::XhtmlSink;

    fn validating() -> ValidatingSink<XhtmlSink<Vec<u8>>> {
        ValidatingSink::new(XhtmlSink::new(Vec::new()))
    }

    #[test]
    fn test_well_formed_table_has_no_warnings() {
        let mut sink = validating();
        sink.table(None);
        sink.table_rows(Some(&[Justification::Center]), false);
        sink.table_row(None);
        sink.table_cell(None);
        sink.text("x");
        sink.table_cell_end();
        sink.table_row_end();
        sink.table_rows_end();
        sink.table_end();

        assert_eq!(sink.warnings(), &[] as &[String]);
    }

    #[test]
    fn test_out_of_range_depth_is_reported() {
        let mut sink = validating();
        sink.section(0, None);
        sink.section(6, None);
        assert_eq!(sink.warnings().len(), 2);
    }

    #[test]
    fn test_cell_outside_row_is_reported_but_forwarded() {
        let mut sink = validating();
        sink.table_cell(None);
        sink.table_cell_end();

        assert_eq!(sink.warnings().len(), 1);
        let (inner, warnings) = sink.into_parts();
        // the event still reached the wrapped sink
        let out = inner.into_inner().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<td></td>");
        assert!(warnings[0].contains("table_cell"));
    }

    #[test]
    fn test_mixed_figure_conventions_are_reported() {
        let mut sink = validating();
        sink.figure(None);
        sink.figure_graphics_legacy("a.png");
        sink.figure_end();

        assert_eq!(sink.warnings().len(), 1);
        assert!(sink.warnings()[0].contains("legacy-convention"));
    }

    #[test]
    fn test_unmatched_figure_end_is_reported() {
        let mut sink = validating();
        sink.figure_end();
        assert_eq!(sink.warnings().len(), 1);
    }
}
