//! Confluence-dialect block parsers producing docwire events.
//!
//! Parsers in this crate recognize Confluence wiki constructs in raw source
//! lines and replay them as abstract document events on any
//! [`Sink`](dw_events::Sink). Currently covered: the `!image!caption`
//! figure syntax.

mod error;
mod figure;

pub use error::ParseError;
pub use figure::{FigureBlock, FigureBlockParser};
