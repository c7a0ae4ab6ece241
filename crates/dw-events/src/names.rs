//! Attribute-name constants and per-construct whitelists.
//!
//! The whitelists are configuration data, not algorithm: each sink event
//! filters caller-supplied attributes against the whitelist of its
//! construct before serializing anything.

/// The `align` attribute.
pub const ALIGN: &str = "align";
/// The `alt` attribute.
pub const ALT: &str = "alt";
/// The `border` attribute.
pub const BORDER: &str = "border";
/// The `class` attribute.
pub const CLASS: &str = "class";
/// The `decoration` pseudo-attribute (`underline`, `line-through`, `boxed`).
pub const DECORATION: &str = "decoration";
/// The `href` attribute.
pub const HREF: &str = "href";
/// The `id` attribute.
pub const ID: &str = "id";
/// The `name` attribute.
pub const NAME: &str = "name";
/// The `src` attribute.
pub const SRC: &str = "src";
/// The `style` attribute.
pub const STYLE: &str = "style";
/// The `target` attribute.
pub const TARGET: &str = "target";
/// The `valign` attribute (`sub`/`sup` select vertical text alignment).
pub const VALIGN: &str = "valign";
/// The `width` attribute.
pub const WIDTH: &str = "width";

/// Attributes accepted by every construct.
pub const BASE_ATTRIBUTES: &[&str] = &["class", "id", "lang", "style", "title"];

/// Attributes accepted by line breaks.
pub const BR_ATTRIBUTES: &[&str] = &["class", "id", "lang", "style", "title", "clear"];

/// Attributes accepted by horizontal rules.
pub const HR_ATTRIBUTES: &[&str] = &[
    "class", "id", "lang", "style", "title", "align", "noshade", "size", "width",
];

/// Attributes accepted by images.
pub const IMG_ATTRIBUTES: &[&str] = &[
    "class", "id", "lang", "style", "title", "align", "alt", "border", "height", "hspace",
    "ismap", "longdesc", "src", "usemap", "vspace", "width",
];

/// Attributes accepted by links.
pub const LINK_ATTRIBUTES: &[&str] = &[
    "class", "id", "lang", "style", "title", "charset", "coords", "href", "hreflang", "rel",
    "rev", "shape", "target", "type",
];

/// Attributes accepted by sections, titles and paragraphs.
pub const SECTION_ATTRIBUTES: &[&str] = &["class", "id", "lang", "style", "title", "align"];

/// Attributes accepted by tables.
pub const TABLE_ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "lang",
    "style",
    "title",
    "align",
    "bgcolor",
    "border",
    "cellpadding",
    "cellspacing",
    "frame",
    "rules",
    "summary",
    "width",
];

/// Attributes accepted by table cells.
pub const TD_ATTRIBUTES: &[&str] = &[
    "class", "id", "lang", "style", "title", "abbr", "align", "axis", "bgcolor", "colspan",
    "headers", "height", "nowrap", "rowspan", "scope", "valign", "width",
];

/// Attributes accepted by table rows.
pub const TR_ATTRIBUTES: &[&str] = &[
    "class", "id", "lang", "style", "title", "align", "bgcolor", "valign",
];

/// Attributes accepted by verbatim blocks.
pub const VERBATIM_ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "lang",
    "style",
    "title",
    "align",
    "decoration",
    "width",
];
