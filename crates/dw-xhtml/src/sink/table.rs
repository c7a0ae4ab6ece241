//! Tables: pending attributes, defaults, row striping and justification.

use std::io::Write;

use dw_events::{AttributeSet, Justification, filter_attributes, names};

use super::XhtmlSink;

fn align_value(justification: Justification) -> &'static str {
    match justification {
        Justification::Left => "left",
        Justification::Right => "right",
        Justification::Center => "center",
    }
}

impl<W: Write> XhtmlSink<W> {
    /// Capture table attributes. No tag is written until the row group
    /// opens: the final attribute set is only decidable there.
    pub(super) fn on_table(&mut self, attrs: Option<&AttributeSet>) {
        self.state.pending_table_attrs = filter_attributes(attrs, names::TABLE_ATTRIBUTES);
    }

    /// Open the table tag. Defaults are `align=center`, `border` per the
    /// grid flag and `class=bodyTable`; attributes captured by the table
    /// event win over defaults, key by key. The pending set is consumed.
    pub(super) fn on_table_rows(
        &mut self,
        justification: Option<&[Justification]>,
        grid: bool,
    ) {
        self.state.cell_justification = justification.map(<[Justification]>::to_vec);
        self.state.has_justification = true;

        let pending = std::mem::take(&mut self.state.pending_table_attrs);

        let mut att = AttributeSet::new();
        if !pending.contains(names::ALIGN) {
            att.set(names::ALIGN, "center");
        }
        if !pending.contains(names::BORDER) {
            att.set(names::BORDER, if grid { "1" } else { "0" });
        }
        if !pending.contains(names::CLASS) {
            att.set(names::CLASS, "bodyTable");
        }
        att.merge(&pending);

        self.write_start_tag("table", &att);
    }

    pub(super) fn on_table_rows_end(&mut self) {
        self.state.cell_justification = None;
        self.state.has_justification = false;
        self.state.even_row = true;
    }

    /// Open a row. Successive rows alternate the style classes `a` and `b`
    /// regardless of attribute filtering; the cell index restarts.
    pub(super) fn on_table_row(&mut self, attrs: Option<&AttributeSet>) {
        let class = if self.state.even_row { "a" } else { "b" };
        let mut att = AttributeSet::new().with(names::CLASS, class);
        att.merge(&filter_attributes(attrs, names::TR_ATTRIBUTES));

        self.write_start_tag("tr", &att);

        self.state.even_row = !self.state.even_row;
        self.state.cell_index = 0;
    }

    pub(super) fn on_table_row_end(&mut self) {
        self.write_end_tag("tr");
        self.state.cell_index = 0;
    }

    /// Open a body or header cell. With justification active, the cell
    /// takes the alignment at the current index, clamped to the last entry
    /// of the declared array for any overflow cells.
    pub(super) fn on_cell(&mut self, header: bool, attrs: Option<&AttributeSet>) {
        let align = match &self.state.cell_justification {
            Some(justification) if self.state.has_justification && !justification.is_empty() => {
                let index = self.state.cell_index.min(justification.len() - 1);
                Some(align_value(justification[index]))
            }
            _ => None,
        };

        let mut att = AttributeSet::new();
        if let Some(align) = align {
            att.set(names::ALIGN, align);
        }
        att.merge(&filter_attributes(attrs, names::TD_ATTRIBUTES));

        self.write_start_tag(if header { "th" } else { "td" }, &att);
    }

    /// Close a cell. The cell index advances only while justification is
    /// active: it tracks the position within the declared justification
    /// array, not a per-row cell count.
    pub(super) fn on_cell_end(&mut self, header: bool) {
        self.write_end_tag(if header { "th" } else { "td" });
        if self.state.has_justification {
            self.state.cell_index += 1;
        }
    }

    pub(super) fn on_table_caption(&mut self, attrs: Option<&AttributeSet>) {
        let atts = filter_attributes(attrs, names::SECTION_ATTRIBUTES);
        self.write_start_tag("caption", &atts);
    }
}
