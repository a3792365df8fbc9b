//! Element-node adapters.
//!
//! The tagger never sees a host's real tree type; it works against the
//! narrow [`ElementNode`] capability trait. Hosts adapt their own node
//! shapes behind it, and [`Element`] is the reference implementation
//! used by tests and simple embedders.

use loctag_core::SourcePosition;

/// Narrow view of one node in a host's parsed element tree.
pub trait ElementNode {
    /// The element's tag name, as written in source.
    fn tag_name(&self) -> &str;

    /// Whether the element already carries an attribute with this name.
    fn has_attribute(&self, name: &str) -> bool;

    /// The element's source position: 1-based line, 0-based column
    /// (the convention of common host trees).
    fn position(&self) -> SourcePosition;

    /// Append an attribute to the element.
    fn push_attribute(&mut self, name: &str, value: &str);

    /// Whether the element is written self-closing. Informational;
    /// hosts that don't track it can leave the default.
    fn self_closing(&self) -> bool {
        false
    }
}

/// A plain owned element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    /// 1-based source line.
    pub line: usize,
    /// 0-based source column.
    pub column: usize,
    pub self_closing: bool,
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Element {
    pub fn new(tag: &str, line: usize, column: usize) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            line,
            column,
            self_closing: false,
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }
}

impl ElementNode for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column)
    }

    fn push_attribute(&mut self, name: &str, value: &str) {
        self.attributes.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn self_closing(&self) -> bool {
        self.self_closing
    }
}
