//! loctag core
//!
//! Shared model for the loctag markup instrumenter: per-invocation
//! configuration, the primitive-element vocabulary, the location
//! resolver, and the eligibility policy that both tagging strategies
//! consult.
//!
//! # Example
//!
//! ```
//! use loctag_core::TagConfig;
//!
//! let config = TagConfig::default();
//! assert_eq!(config.attribute_name(), "data-loc-id");
//! ```

pub mod config;
pub mod location;
pub mod policy;
pub mod vocabulary;

pub use config::{dev_mode_from_env, ExcludePattern, PatternError, TagConfig};
pub use location::{location_id, relative_path, SourcePosition, UNKNOWN_LOCATION};
pub use policy::{admits_element, admits_file, ElementOccurrence};
pub use vocabulary::{is_markup_element, MARKUP_ELEMENTS};
