//! XHTML sink for docwire document events.
//!
//! This crate is the consuming half of a document-processing pipeline:
//! dialect parsers produce a linear stream of abstract document events
//! (sections, lists, tables, figures, inline text), and [`XhtmlSink`] turns
//! that stream into well-formed, properly nested, escaped XHTML fragments.
//!
//! The sink is a state machine over a handful of flags and counters rather
//! than a parse tree: head and verbatim modes, table justification and
//! row-striping bookkeeping, pending table attributes and the dual figure
//! calling convention. It trusts its producer to order events correctly;
//! wrap it in [`ValidatingSink`] to surface contract violations instead.
//!
//! # Example
//!
//! ```
//! use dw_events::Sink;
//! use dw_xhtml::XhtmlSink;
//!
//! let mut sink = XhtmlSink::new(Vec::new());
//! sink.section(1, None);
//! sink.section_title(1, None);
//! sink.text("Overview");
//! sink.section_title_end(1);
//! sink.section_end(1);
//!
//! let html = String::from_utf8(sink.into_inner().unwrap()).unwrap();
//! assert_eq!(html, r#"<div class="section"><h2>Overview</h2></div>"#);
//! ```

mod escape;
mod sink;
mod state;
mod tag;
mod validate;

pub use escape::{encode_id, encode_url, escape_html, is_id};
pub use sink::XhtmlSink;
pub use validate::ValidatingSink;
