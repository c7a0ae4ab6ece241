//! Markup tag emission.
//!
//! These functions serialize tags and attribute sets into an output buffer.
//! They carry no semantic logic: attribute filtering, defaults and context
//! tracking all happen in the sink before a set reaches this point.

use std::fmt::Write;

use dw_events::AttributeSet;

use crate::escape::escape_html;

/// Write `<tag attr="value" ...>`.
pub(crate) fn start_tag(out: &mut String, tag: &str, attrs: &AttributeSet) {
    out.push('<');
    out.push_str(tag);
    write_attributes(out, attrs);
    out.push('>');
}

/// Write `</tag>`.
pub(crate) fn end_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Write `<tag attr="value" ... />`.
pub(crate) fn simple_tag(out: &mut String, tag: &str, attrs: &AttributeSet) {
    out.push('<');
    out.push_str(tag);
    write_attributes(out, attrs);
    out.push_str(" />");
}

fn write_attributes(out: &mut String, attrs: &AttributeSet) {
    for (name, value) in attrs.iter() {
        write!(out, " {name}=\"{}\"", escape_html(value)).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_tag_serializes_attributes_in_order() {
        let attrs = AttributeSet::new().with("class", "a").with("id", "x");
        let mut out = String::new();
        start_tag(&mut out, "tr", &attrs);
        assert_eq!(out, r#"<tr class="a" id="x">"#);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs = AttributeSet::new().with("title", r#"a "quoted" <value>"#);
        let mut out = String::new();
        start_tag(&mut out, "p", &attrs);
        assert_eq!(
            out,
            r#"<p title="a &quot;quoted&quot; &lt;value&gt;">"#
        );
    }

    #[test]
    fn test_simple_tag() {
        let mut out = String::new();
        simple_tag(&mut out, "hr", &AttributeSet::new());
        assert_eq!(out, "<hr />");
    }

    #[test]
    fn test_end_tag() {
        let mut out = String::new();
        end_tag(&mut out, "table");
        assert_eq!(out, "</table>");
    }
}
