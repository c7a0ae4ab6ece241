//! Links and anchors.

use std::io::Write;

use dw_events::{AttributeSet, filter_attributes, names};

use crate::escape::{encode_id, is_id};

use super::XhtmlSink;

/// Whether the href points outside the rendered document set: `http:/`,
/// `https:/`, `ftp:/`, `mailto:` or `file:/`, case-insensitively.
fn is_external_link(href: &str) -> bool {
    let text = href.to_lowercase();
    text.starts_with("http:/")
        || text.starts_with("https:/")
        || text.starts_with("ftp:/")
        || text.starts_with("mailto:")
        || text.starts_with("file:/")
}

/// Whether the href points at another rendered document. Kept for backward
/// compatibility: such links get the external treatment (href emitted as
/// given) but not the external style class. Anything that is not a valid
/// fragment identifier lands here too.
fn is_external_html(href: &str) -> bool {
    let text = href.to_lowercase();
    text.contains(".html#")
        || text.contains(".htm#")
        || text.ends_with(".htm")
        || text.ends_with(".html")
        || !is_id(&text)
}

impl<W: Write> XhtmlSink<W> {
    /// Open an anchor. The name is encoded into a valid fragment
    /// identifier. No-op in head mode.
    pub(super) fn on_anchor(&mut self, name: &str, attrs: Option<&AttributeSet>) {
        if self.state.head {
            return;
        }

        let mut att = AttributeSet::new().with(names::NAME, encode_id(name));
        att.merge(&filter_attributes(attrs, names::BASE_ATTRIBUTES));
        self.write_start_tag("a", &att);
    }

    pub(super) fn on_anchor_end(&mut self) {
        if !self.state.head {
            self.write_end_tag("a");
        }
    }

    /// Open a link. External and external-html targets keep their href as
    /// given; anything else is an internal fragment and gets a `#` prefix.
    /// Strict-external links additionally get the `externalLink` class.
    /// The computed href and the target parameter supersede any `href` or
    /// `target` in the caller's attribute set. No-op in head mode.
    pub(super) fn on_link(
        &mut self,
        href: &str,
        target: Option<&str>,
        attrs: Option<&AttributeSet>,
    ) {
        if self.state.head {
            return;
        }

        let mut att = AttributeSet::new();

        if is_external_link(href) || is_external_html(href) {
            if is_external_link(href) {
                att.set(names::CLASS, "externalLink");
            }
            att.set(names::HREF, href);
        } else {
            att.set(names::HREF, format!("#{href}"));
        }

        if let Some(target) = target {
            att.set(names::TARGET, target);
        }

        let mut filtered = filter_attributes(attrs, names::LINK_ATTRIBUTES);
        filtered.remove(names::HREF);
        filtered.remove(names::TARGET);
        att.merge(&filtered);

        self.write_start_tag("a", &att);
    }

    pub(super) fn on_link_end(&mut self) {
        if !self.state.head {
            self.write_end_tag("a");
        }
    }
}
