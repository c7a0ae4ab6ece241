//! The XHTML sink: document events in, escaped markup fragments out.

mod figure;
mod link;
mod structure;
mod table;
mod text;

use std::io;
use std::io::Write;

use dw_events::{AttributeSet, Justification, Numbering, Sink};

use crate::state::SinkState;
use crate::tag;

/// Event-driven XHTML renderer.
///
/// Each event appends markup fragments to an internal buffer; nothing
/// reaches the destination until [`flush`](Sink::flush). The sink owns its
/// destination for the whole render session: [`close`](Sink::close) flushes
/// and releases it, and no event is valid afterwards. Discarding the sink
/// without closing leaves the destination in an undefined state.
///
/// The sink trusts its producer (see [`Sink`]); wrap it in
/// [`ValidatingSink`](crate::ValidatingSink) to surface contract violations.
///
/// # Example
///
/// ```
/// use dw_events::Sink;
/// use dw_xhtml::XhtmlSink;
///
/// let mut sink = XhtmlSink::new(Vec::new());
/// sink.paragraph(None);
/// sink.text("Hello & goodbye");
/// sink.paragraph_end();
/// let out = sink.into_inner().unwrap();
/// assert_eq!(out, b"<p>Hello &amp; goodbye</p>");
/// ```
pub struct XhtmlSink<W> {
    dest: W,
    out: String,
    state: SinkState,
}

impl<W: Write> XhtmlSink<W> {
    /// Create a sink writing to the given destination.
    pub fn new(dest: W) -> Self {
        Self {
            dest,
            out: String::with_capacity(4096),
            state: SinkState::default(),
        }
    }

    /// Enter or leave head mode. While in head mode text events accumulate
    /// in the head buffer and inline markup events are no-ops.
    pub fn set_head_mode(&mut self, head: bool) {
        self.state.head = head;
    }

    /// Whether the sink is currently in head mode.
    #[must_use]
    pub fn is_head_mode(&self) -> bool {
        self.state.head
    }

    /// Whether the sink is currently inside a preformatted block.
    #[must_use]
    pub fn is_verbatim_mode(&self) -> bool {
        self.state.verbatim
    }

    /// Text accumulated while in head mode.
    #[must_use]
    pub fn head_buffer(&self) -> &str {
        &self.state.head_buffer
    }

    /// Take the accumulated head text, leaving the buffer empty.
    pub fn take_head_buffer(&mut self) -> String {
        std::mem::take(&mut self.state.head_buffer)
    }

    /// Reset all render state for a fresh document. Buffered output is
    /// kept; pending head text is discarded.
    pub fn reset_state(&mut self) {
        self.state.reset();
    }

    /// Flush pending fragments and return the destination.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush_out()?;
        Ok(self.dest)
    }

    fn flush_out(&mut self) -> io::Result<()> {
        if !self.out.is_empty() {
            self.dest.write_all(self.out.as_bytes())?;
            self.out.clear();
        }
        Ok(())
    }

    /// Append raw markup, unifying line endings to `\n`.
    pub(crate) fn write(&mut self, text: &str) {
        if text.contains('\r') {
            self.out.push_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        } else {
            self.out.push_str(text);
        }
    }

    pub(crate) fn write_start_tag(&mut self, name: &str, attrs: &AttributeSet) {
        tag::start_tag(&mut self.out, name, attrs);
    }

    pub(crate) fn write_end_tag(&mut self, name: &str) {
        tag::end_tag(&mut self.out, name);
    }

    pub(crate) fn write_simple_tag(&mut self, name: &str, attrs: &AttributeSet) {
        tag::simple_tag(&mut self.out, name, attrs);
    }

    /// Escape and append text content.
    pub(crate) fn content(&mut self, text: &str) {
        let escaped = crate::escape::escape_html(text);
        self.write(&escaped);
    }
}

impl<W: Write> Sink for XhtmlSink<W> {
    fn section(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        self.on_section(depth, attrs);
    }

    fn section_end(&mut self, depth: usize) {
        self.on_section_end(depth);
    }

    fn section_title(&mut self, depth: usize, attrs: Option<&AttributeSet>) {
        self.on_section_title(depth, attrs);
    }

    fn section_title_end(&mut self, depth: usize) {
        self.on_section_title_end(depth);
    }

    fn list(&mut self, attrs: Option<&AttributeSet>) {
        self.on_list(attrs);
    }

    fn list_end(&mut self) {
        self.write_end_tag("ul");
    }

    fn list_item(&mut self, attrs: Option<&AttributeSet>) {
        self.on_list_item(attrs);
    }

    fn list_item_end(&mut self) {
        self.write_end_tag("li");
    }

    fn numbered_list(&mut self, numbering: Numbering, attrs: Option<&AttributeSet>) {
        self.on_numbered_list(numbering, attrs);
    }

    fn numbered_list_end(&mut self) {
        self.write_end_tag("ol");
    }

    fn numbered_list_item(&mut self, attrs: Option<&AttributeSet>) {
        self.on_list_item(attrs);
    }

    fn numbered_list_item_end(&mut self) {
        self.write_end_tag("li");
    }

    fn definition_list(&mut self, attrs: Option<&AttributeSet>) {
        self.on_definition_list(attrs);
    }

    fn definition_list_end(&mut self) {
        self.write_end_tag("dl");
    }

    fn defined_term(&mut self, attrs: Option<&AttributeSet>) {
        self.on_defined_term(attrs);
    }

    fn defined_term_end(&mut self) {
        self.write_end_tag("dt");
    }

    fn definition(&mut self, attrs: Option<&AttributeSet>) {
        self.on_definition(attrs);
    }

    fn definition_end(&mut self) {
        self.write_end_tag("dd");
    }

    fn paragraph(&mut self, attrs: Option<&AttributeSet>) {
        self.on_paragraph(attrs);
    }

    fn paragraph_end(&mut self) {
        self.write_end_tag("p");
    }

    fn verbatim(&mut self, attrs: Option<&AttributeSet>) {
        self.on_verbatim(attrs);
    }

    fn verbatim_end(&mut self) {
        self.on_verbatim_end();
    }

    fn horizontal_rule(&mut self, attrs: Option<&AttributeSet>) {
        self.on_horizontal_rule(attrs);
    }

    fn page_break(&mut self) {
        self.on_comment("PB");
    }

    fn table(&mut self, attrs: Option<&AttributeSet>) {
        self.on_table(attrs);
    }

    fn table_end(&mut self) {
        self.write_end_tag("table");
    }

    fn table_rows(&mut self, justification: Option<&[Justification]>, grid: bool) {
        self.on_table_rows(justification, grid);
    }

    fn table_rows_end(&mut self) {
        self.on_table_rows_end();
    }

    fn table_row(&mut self, attrs: Option<&AttributeSet>) {
        self.on_table_row(attrs);
    }

    fn table_row_end(&mut self) {
        self.on_table_row_end();
    }

    fn table_cell(&mut self, attrs: Option<&AttributeSet>) {
        self.on_cell(false, attrs);
    }

    fn table_cell_end(&mut self) {
        self.on_cell_end(false);
    }

    fn table_header_cell(&mut self, attrs: Option<&AttributeSet>) {
        self.on_cell(true, attrs);
    }

    fn table_header_cell_end(&mut self) {
        self.on_cell_end(true);
    }

    fn table_caption(&mut self, attrs: Option<&AttributeSet>) {
        self.on_table_caption(attrs);
    }

    fn table_caption_end(&mut self) {
        self.write_end_tag("caption");
    }

    fn figure(&mut self, attrs: Option<&AttributeSet>) {
        self.on_figure(attrs);
    }

    fn figure_legacy(&mut self) {
        self.on_figure_legacy();
    }

    fn figure_end(&mut self) {
        self.on_figure_end();
    }

    fn figure_graphics(&mut self, src: &str, attrs: Option<&AttributeSet>) {
        self.on_figure_graphics(src, attrs);
    }

    fn figure_graphics_legacy(&mut self, name: &str) {
        self.on_figure_graphics_legacy(name);
    }

    fn figure_caption(&mut self, attrs: Option<&AttributeSet>) {
        self.on_figure_caption(attrs);
    }

    fn figure_caption_legacy(&mut self) {
        self.on_figure_caption_legacy();
    }

    fn figure_caption_end(&mut self) {
        self.on_figure_caption_end();
    }

    fn anchor(&mut self, name: &str, attrs: Option<&AttributeSet>) {
        self.on_anchor(name, attrs);
    }

    fn anchor_end(&mut self) {
        self.on_anchor_end();
    }

    fn link(&mut self, href: &str, target: Option<&str>, attrs: Option<&AttributeSet>) {
        self.on_link(href, target, attrs);
    }

    fn link_end(&mut self) {
        self.on_link_end();
    }

    fn italic(&mut self) {
        self.on_inline("i");
    }

    fn italic_end(&mut self) {
        self.on_inline_end("i");
    }

    fn bold(&mut self) {
        self.on_inline("b");
    }

    fn bold_end(&mut self) {
        self.on_inline_end("b");
    }

    fn monospaced(&mut self) {
        self.on_inline("tt");
    }

    fn monospaced_end(&mut self) {
        self.on_inline_end("tt");
    }

    fn line_break(&mut self, attrs: Option<&AttributeSet>) {
        self.on_line_break(attrs);
    }

    fn non_breaking_space(&mut self) {
        self.on_non_breaking_space();
    }

    fn text(&mut self, text: &str) {
        self.on_text(text);
    }

    fn styled_text(&mut self, text: &str, attrs: Option<&AttributeSet>) {
        self.on_styled_text(text, attrs);
    }

    fn raw_text(&mut self, text: &str) {
        self.write(text);
    }

    fn comment(&mut self, comment: &str) {
        self.on_comment(comment);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_out()?;
        self.dest.flush()
    }

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::XhtmlSink;

    /// Run events against a fresh sink and return everything it wrote.
    pub(crate) fn rendered(events: impl FnOnce(&mut XhtmlSink<Vec<u8>>)) -> String {
        let mut sink = XhtmlSink::new(Vec::new());
        events(&mut sink);
        let out = sink.into_inner().expect("write to Vec cannot fail");
        String::from_utf8(out).expect("sink output is UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use dw_events::{AttributeSet, Justification, Sink};
    use pretty_assertions::assert_eq;

    use super::XhtmlSink;
    use super::test_util::rendered;

    #[test]
    fn test_events_buffer_until_flush() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.paragraph(None);
        sink.text("x");
        sink.paragraph_end();

        let out = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_flush_and_close_reach_a_file() {
        let mut file = tempfile::tempfile().unwrap();
        {
            let mut sink = XhtmlSink::new(&mut file);
            sink.paragraph(None);
            sink.text("persisted");
            sink.paragraph_end();
            sink.flush().unwrap();
            sink.close().unwrap();
        }

        use std::io::{Read, Seek, SeekFrom};
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "<p>persisted</p>");
    }

    #[test]
    fn test_raw_text_bypasses_escaping() {
        let out = rendered(|sink| sink.raw_text("<custom>&</custom>"));
        assert_eq!(out, "<custom>&</custom>");
    }

    #[test]
    fn test_comment() {
        let out = rendered(|sink| sink.comment("note"));
        assert_eq!(out, "<!-- note -->");
    }

    #[test]
    fn test_page_break_is_a_comment() {
        let out = rendered(|sink| sink.page_break());
        assert_eq!(out, "<!-- PB -->");
    }

    #[test]
    fn test_written_line_endings_are_unified() {
        let out = rendered(|sink| sink.raw_text("a\r\nb\rc\n"));
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn test_reset_state_clears_head_mode_and_buffer() {
        let mut sink = XhtmlSink::new(Vec::new());
        sink.set_head_mode(true);
        sink.text("title text");
        sink.reset_state();

        assert!(!sink.is_head_mode());
        assert_eq!(sink.head_buffer(), "");
    }

    // The end-to-end scenario: a two-column table with declared
    // justification, default attributes and row striping.
    #[test]
    fn test_table_scenario() {
        let out = rendered(|sink| {
            sink.table(None);
            sink.table_rows(Some(&[Justification::Center, Justification::Left]), true);
            sink.table_row(None);
            sink.table_cell(None);
            sink.text("A");
            sink.table_cell_end();
            sink.table_cell(None);
            sink.text("B");
            sink.table_cell_end();
            sink.table_row_end();
            sink.table_rows_end();
            sink.table_end();
        });

        assert_eq!(
            out,
            concat!(
                r#"<table align="center" border="1" class="bodyTable">"#,
                r#"<tr class="a">"#,
                r#"<td align="center">A</td>"#,
                r#"<td align="left">B</td>"#,
                "</tr></table>"
            )
        );
    }

    #[test]
    fn test_full_document_fragment() {
        let out = rendered(|sink| {
            sink.section(1, None);
            sink.section_title(1, None);
            sink.text("Overview");
            sink.section_title_end(1);
            sink.paragraph(None);
            sink.text("Intro");
            sink.link("https://example.com", None, None);
            sink.text("site");
            sink.link_end();
            sink.paragraph_end();
            sink.section_end(1);
        });

        assert_eq!(
            out,
            concat!(
                r#"<div class="section">"#,
                "<h2>Overview</h2>",
                "<p>Intro",
                r#"<a class="externalLink" href="https://example.com">site</a>"#,
                "</p></div>"
            )
        );
    }

    #[test]
    fn test_attribute_set_is_not_retained_between_events() {
        let attrs = AttributeSet::new().with("class", "once");
        let out = rendered(|sink| {
            sink.paragraph(Some(&attrs));
            sink.paragraph_end();
            sink.paragraph(None);
            sink.paragraph_end();
        });
        assert_eq!(out, r#"<p class="once"></p><p></p>"#);
    }
}
