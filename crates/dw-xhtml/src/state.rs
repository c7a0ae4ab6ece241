//! Per-render mutable state.

use dw_events::{AttributeSet, Justification};

/// Which calling convention opened the figure or caption in progress.
///
/// The legacy convention writes raw image-tag fragments that the matching
/// close call must complete; the current convention nests real container
/// tags. The mode is selected by the opening event and consumed by the
/// matching close event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FigureMode {
    /// Raw-fragment convention kept for backward compatibility.
    Legacy,
    /// Attribute-based container convention.
    Current,
}

/// Bookkeeping for one in-progress render.
///
/// Owned exclusively by a single sink. Concurrent renders need independent
/// state instances and output destinations; nothing here is shareable.
#[derive(Debug)]
pub(crate) struct SinkState {
    /// Rendering document metadata: text is buffered, inline events are
    /// no-ops.
    pub head: bool,
    /// Inside a preformatted block: text is escaped but not decorated.
    pub verbatim: bool,
    /// Text accumulated while in head mode, consumed by the head-rendering
    /// collaborator.
    pub head_buffer: String,
    /// Per-column justification declared by the current table's row group.
    pub cell_justification: Option<Vec<Justification>>,
    /// Whether a row group declared justification. Tracked separately from
    /// the array so cell counting stays active for a `None` declaration.
    pub has_justification: bool,
    /// Position within the declared justification array. Reset at each row
    /// boundary, advanced per closed cell only while justification is
    /// active.
    pub cell_index: usize,
    /// Row-striping parity; flips at every row start.
    pub even_row: bool,
    /// Attributes captured by the table event, consumed by the following
    /// row-group event.
    pub pending_table_attrs: AttributeSet,
    /// Convention of the open figure, if any.
    pub figure: Option<FigureMode>,
    /// Convention of the open figure caption, if any.
    pub caption: Option<FigureMode>,
}

impl Default for SinkState {
    fn default() -> Self {
        Self {
            head: false,
            verbatim: false,
            head_buffer: String::new(),
            cell_justification: None,
            has_justification: false,
            cell_index: 0,
            even_row: true,
            pending_table_attrs: AttributeSet::new(),
            figure: None,
            caption: None,
        }
    }
}

impl SinkState {
    /// Reset everything for a fresh render.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
