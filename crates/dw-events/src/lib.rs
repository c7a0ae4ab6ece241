//! Document event protocol and attribute types.
//!
//! This crate defines the contract between event producers (dialect parsers
//! that turn raw markup into abstract document events) and event consumers
//! (sinks that turn those events into an output markup). The two sides only
//! share what lives here:
//!
//! - [`Sink`]: one method per document event, called in document order.
//! - [`AttributeSet`]: the ordered attribute mapping carried by most events.
//! - [`names`]: attribute-name constants and per-construct whitelists.
//! - [`Justification`] / [`Numbering`]: table and list enumerations.
//!
//! Sinks trust their producers: start/end events must be correctly nested
//! per construct and table/figure events must follow the documented call
//! order. Nothing here enforces that; see the sink implementations for
//! optional validation support.

mod attrs;
pub mod names;
mod sink;

pub use attrs::{AttributeSet, Iter, filter_attributes};
pub use sink::Sink;

/// Horizontal alignment of table cells, declared once per table and applied
/// per column.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Justification {
    /// Left-aligned cell content.
    Left,
    /// Centered cell content.
    Center,
    /// Right-aligned cell content.
    Right,
}

/// Numbering style of an ordered list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numbering {
    /// `A.`, `B.`, `C.` ...
    UpperAlpha,
    /// `a.`, `b.`, `c.` ...
    LowerAlpha,
    /// `I.`, `II.`, `III.` ...
    UpperRoman,
    /// `i.`, `ii.`, `iii.` ...
    LowerRoman,
    /// `1.`, `2.`, `3.` ...
    #[default]
    Decimal,
}
