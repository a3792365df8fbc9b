//! loctag lexical tagger
//!
//! Rewrites raw JSX/TSX source text without a parse tree: scans each
//! line for probable opening tags of primitive markup elements,
//! classifies each candidate by its surrounding lexical context
//! (strings, comments, type expressions), and splices a
//! location-identifier attribute in after the tag name.
//!
//! The scan over-rejects ambiguous candidates: a missed tag is
//! cosmetic, a corrupted tag breaks the build.
//!
//! # Example
//!
//! ```
//! use loctag_core::TagConfig;
//! use loctag_lexical::tag_source;
//!
//! let config = TagConfig {
//!     enabled: Some(true),
//!     filename: "/proj/app/page.tsx".to_string(),
//!     project_root: Some("/proj".into()),
//!     ..TagConfig::default()
//! };
//! let out = tag_source("<div>hi</div>\n", &config);
//! assert_eq!(out, "<div data-loc-id=\"app/page.tsx:1:1\">hi</div>\n");
//! ```

pub mod scanner;

pub use scanner::{scan_source, tag_source, Scanner, TaggedElement};
