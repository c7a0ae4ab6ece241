//! The sink side of the event protocol.

use std::io;

use crate::{AttributeSet, Justification, Numbering};

/// Consumer of a linear stream of abstract document events.
///
/// A producer (typically a dialect parser) calls one method per document
/// construct, in document order, with start and end calls correctly nested
/// per construct. Every method has a default no-op body, so a sink only
/// implements the events it renders.
///
/// # Producer contract
///
/// Sinks do not validate call order. Producers must guarantee:
///
/// - every `*_end` call matches, LIFO, the start call that opened it;
/// - table calls follow `table`, `table_rows`, any number of rows (each a
///   `table_row`, its cells, `table_row_end`), `table_rows_end`, `table_end`;
/// - figure calls use exactly one of the two figure conventions (see
///   [`figure`](Self::figure) vs [`figure_legacy`](Self::figure_legacy))
///   within a single figure.
///
/// Violations are not detected and produce malformed output.
#[allow(unused_variables)]
pub trait Sink {
    /// Start a section at `depth` (1-based). Depths outside the supported
    /// range are ignored.
    fn section(&mut self, depth: usize, attrs: Option<&AttributeSet>) {}

    /// End a section at `depth`.
    fn section_end(&mut self, depth: usize) {}

    /// Start a section title at `depth`.
    fn section_title(&mut self, depth: usize, attrs: Option<&AttributeSet>) {}

    /// End a section title at `depth`.
    fn section_title_end(&mut self, depth: usize) {}

    /// Start an unordered list.
    fn list(&mut self, attrs: Option<&AttributeSet>) {}

    /// End an unordered list.
    fn list_end(&mut self) {}

    /// Start a list item.
    fn list_item(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a list item.
    fn list_item_end(&mut self) {}

    /// Start an ordered list with the given numbering style.
    fn numbered_list(&mut self, numbering: Numbering, attrs: Option<&AttributeSet>) {}

    /// End an ordered list.
    fn numbered_list_end(&mut self) {}

    /// Start an ordered list item.
    fn numbered_list_item(&mut self, attrs: Option<&AttributeSet>) {}

    /// End an ordered list item.
    fn numbered_list_item_end(&mut self) {}

    /// Start a definition list.
    fn definition_list(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a definition list.
    fn definition_list_end(&mut self) {}

    /// Start a defined term.
    fn defined_term(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a defined term.
    fn defined_term_end(&mut self) {}

    /// Start a definition.
    fn definition(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a definition.
    fn definition_end(&mut self) {}

    /// Start a paragraph.
    fn paragraph(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a paragraph.
    fn paragraph_end(&mut self) {}

    /// Start a preformatted block. Text events inside are escaped but not
    /// decorated.
    fn verbatim(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a preformatted block.
    fn verbatim_end(&mut self) {}

    /// Emit a horizontal rule.
    fn horizontal_rule(&mut self, attrs: Option<&AttributeSet>) {}

    /// Emit a page break.
    fn page_break(&mut self) {}

    /// Start a table. Attributes are held until [`table_rows`](Self::table_rows)
    /// decides the final table attributes; nothing is written yet.
    fn table(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a table.
    fn table_end(&mut self) {}

    /// Start the row group of the current table, declaring the per-column
    /// justification (if any) and whether the table has a visible grid.
    fn table_rows(&mut self, justification: Option<&[Justification]>, grid: bool) {}

    /// End the row group of the current table.
    fn table_rows_end(&mut self) {}

    /// Start a table row.
    fn table_row(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a table row.
    fn table_row_end(&mut self) {}

    /// Start a body cell.
    fn table_cell(&mut self, attrs: Option<&AttributeSet>) {}

    /// Start a body cell with a width override.
    fn table_cell_width(&mut self, width: &str) {
        let attrs = AttributeSet::new().with(crate::names::WIDTH, width);
        self.table_cell(Some(&attrs));
    }

    /// End a body cell.
    fn table_cell_end(&mut self) {}

    /// Start a header cell.
    fn table_header_cell(&mut self, attrs: Option<&AttributeSet>) {}

    /// Start a header cell with a width override.
    fn table_header_cell_width(&mut self, width: &str) {
        let attrs = AttributeSet::new().with(crate::names::WIDTH, width);
        self.table_header_cell(Some(&attrs));
    }

    /// End a header cell.
    fn table_header_cell_end(&mut self) {}

    /// Start a table caption.
    fn table_caption(&mut self, attrs: Option<&AttributeSet>) {}

    /// End a table caption.
    fn table_caption_end(&mut self) {}

    /// Start a figure (current convention).
    fn figure(&mut self, attrs: Option<&AttributeSet>) {}

    /// Start a figure (legacy convention). The legacy convention writes an
    /// unclosed image-tag fragment completed by
    /// [`figure_graphics_legacy`](Self::figure_graphics_legacy),
    /// [`figure_caption_legacy`](Self::figure_caption_legacy) and
    /// [`figure_end`](Self::figure_end).
    fn figure_legacy(&mut self) {}

    /// End a figure; closes whichever convention opened it.
    fn figure_end(&mut self) {}

    /// Emit figure graphics (current convention).
    fn figure_graphics(&mut self, src: &str, attrs: Option<&AttributeSet>) {}

    /// Emit figure graphics (legacy convention): only the source reference
    /// fragment of the pending image tag.
    fn figure_graphics_legacy(&mut self, name: &str) {}

    /// Start a figure caption (current convention).
    fn figure_caption(&mut self, attrs: Option<&AttributeSet>) {}

    /// Start a figure caption (legacy convention): an unclosed alternate-text
    /// fragment of the pending image tag.
    fn figure_caption_legacy(&mut self) {}

    /// End a figure caption; closes whichever convention opened it.
    fn figure_caption_end(&mut self) {}

    /// Start an anchor with the given name.
    fn anchor(&mut self, name: &str, attrs: Option<&AttributeSet>) {}

    /// End an anchor.
    fn anchor_end(&mut self) {}

    /// Start a link to `href` with an optional window target.
    fn link(&mut self, href: &str, target: Option<&str>, attrs: Option<&AttributeSet>) {}

    /// End a link.
    fn link_end(&mut self) {}

    /// Start an italic span.
    fn italic(&mut self) {}

    /// End an italic span.
    fn italic_end(&mut self) {}

    /// Start a bold span.
    fn bold(&mut self) {}

    /// End a bold span.
    fn bold_end(&mut self) {}

    /// Start a monospaced span.
    fn monospaced(&mut self) {}

    /// End a monospaced span.
    fn monospaced_end(&mut self) {}

    /// Emit a line break.
    fn line_break(&mut self, attrs: Option<&AttributeSet>) {}

    /// Emit a non-breaking space.
    fn non_breaking_space(&mut self) {}

    /// Emit text.
    fn text(&mut self, text: &str) {}

    /// Emit text wrapped in the inline decorations requested by `attrs`
    /// (`decoration=underline`, `decoration=line-through`, `valign=sub`,
    /// `valign=sup`).
    fn styled_text(&mut self, text: &str, attrs: Option<&AttributeSet>) {
        self.text(text);
    }

    /// Emit raw, unescaped output.
    fn raw_text(&mut self, text: &str) {}

    /// Emit a markup comment.
    fn comment(&mut self, comment: &str) {}

    /// Force buffered output to the destination.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Flush and release the destination. No event may follow.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}
