//! loctag structural tagger
//!
//! Tags one element node from an already-parsed tree. The host walker
//! visits each element exactly once and calls [`tag_element`]; every
//! rejection path is a silent no-op, so the walk is never interrupted.
//!
//! # Example
//!
//! ```
//! use loctag_core::TagConfig;
//! use loctag_structural::{tag_element, Element, ElementNode};
//!
//! let config = TagConfig {
//!     enabled: Some(true),
//!     filename: "/proj/app/page.tsx".to_string(),
//!     project_root: Some("/proj".into()),
//!     ..TagConfig::default()
//! };
//! let mut node = Element::new("div", 2, 2);
//! assert!(tag_element(&mut node, &config));
//! assert_eq!(node.attributes[0].value, "app/page.tsx:2:3");
//! ```

pub mod element;

pub use element::{Attribute, Element, ElementNode};

use loctag_core::{
    admits_element, admits_file, location_id, relative_path, ElementOccurrence, TagConfig,
};

/// Fragment marker tag name, never tagged.
const FRAGMENT: &str = "Fragment";

/// Tag a single element node in place.
///
/// Returns `true` when an attribute was appended. Ineligible files and
/// elements pass through untouched; nothing here panics or errors.
pub fn tag_element<N: ElementNode>(node: &mut N, config: &TagConfig) -> bool {
    if !admits_file(config) {
        return false;
    }

    let tag = node.tag_name().to_string();
    if tag.is_empty() || tag == FRAGMENT {
        return false;
    }
    // A capitalized name is a custom component, not markup.
    if tag.chars().next().is_some_and(|c| c.is_uppercase()) {
        return false;
    }

    let attribute = config.attribute_name();
    let position = node.position();
    let mut attribute_names = Vec::new();
    if node.has_attribute(&attribute) {
        attribute_names.push(attribute.clone());
    }
    let occurrence = ElementOccurrence {
        tag_name: tag.clone(),
        attribute_names,
        position,
        self_closing: node.self_closing(),
    };
    if !admits_element(config, &occurrence) {
        return false;
    }

    let rel = relative_path(&config.filename, config.project_root.as_deref());
    // Host trees report 0-based columns; the identifier is 1-based.
    let id = location_id(&rel, position.line, position.column + 1);
    node.push_attribute(&attribute, &id);
    if config.debug {
        tracing::debug!(tag = %tag, %id, "tagged element");
    }
    true
}
