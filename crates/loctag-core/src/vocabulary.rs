//! Primitive markup vocabulary.
//!
//! The closed set of HTML element names the taggers will instrument.
//! Anything outside this set (custom components, web components with
//! project-specific names) is never rewritten.

/// Primitive HTML element names, grouped roughly by role.
pub const MARKUP_ELEMENTS: &[&str] = &[
    // Document structure
    "html", "head", "body", "title", "meta", "link", "style", "script", "noscript", "base",
    // Sectioning
    "header", "nav", "main", "article", "section", "aside", "footer", "h1", "h2", "h3", "h4",
    "h5", "h6",
    // Block text
    "div", "p", "hr", "pre", "blockquote", "ol", "ul", "li", "dl", "dt", "dd", "figure",
    "figcaption",
    // Inline text
    "a", "em", "strong", "small", "cite", "q", "dfn", "abbr", "ruby", "rt", "rp", "data",
    "time", "code", "var", "samp", "kbd", "sub", "sup", "i", "b", "u", "s", "mark", "bdi",
    "bdo", "span", "br", "wbr",
    // Media and embedding
    "img", "picture", "source", "iframe", "embed", "object", "param", "video", "audio",
    "track", "map", "area",
    // Tables
    "table", "caption", "colgroup", "col", "tbody", "thead", "tfoot", "tr", "td", "th",
    // Forms
    "form", "label", "input", "button", "select", "datalist", "optgroup", "option",
    "textarea", "keygen", "output", "progress", "meter", "fieldset", "legend",
    // Interactive
    "details", "summary", "dialog",
    // Web components
    "slot", "template",
];

/// Check whether a tag name is a primitive markup element.
/// Membership is case-insensitive.
pub fn is_markup_element(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();
    MARKUP_ELEMENTS.contains(&lower.as_str())
}
