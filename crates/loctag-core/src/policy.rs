//! Eligibility policy.
//!
//! File-level and element-level admission rules shared by both tagging
//! strategies. Every rejection is a silent no-op: the caller passes the
//! input through unmodified and nothing is raised.

use crate::config::TagConfig;
use crate::location::SourcePosition;
use crate::vocabulary::is_markup_element;

/// One element occurrence, as seen by either strategy.
///
/// Constructed from a tree node or a lexical match, consulted for the
/// admission decision, then discarded.
#[derive(Debug, Clone)]
pub struct ElementOccurrence {
    pub tag_name: String,
    pub attribute_names: Vec<String>,
    pub position: SourcePosition,
    pub self_closing: bool,
}

/// File-level admission: enabled, then extension, then exclude,
/// short-circuiting on the first rejection.
pub fn admits_file(config: &TagConfig) -> bool {
    if !config.is_enabled() {
        return false;
    }
    let filename = config.filename.as_str();
    if filename.is_empty() {
        return false;
    }
    if !config
        .include
        .iter()
        .any(|ext| filename.ends_with(ext.as_str()))
    {
        return false;
    }
    if config.exclude.iter().any(|pattern| pattern.matches(filename)) {
        return false;
    }
    true
}

/// Element-level admission, applied only after the file is admitted:
/// the tag must be a primitive markup name and must not already carry
/// the identifier attribute.
pub fn admits_element(config: &TagConfig, occurrence: &ElementOccurrence) -> bool {
    if !is_markup_element(&occurrence.tag_name) {
        return false;
    }
    let attribute = config.attribute_name();
    occurrence
        .attribute_names
        .iter()
        .all(|name| name != &attribute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExcludePattern;

    fn enabled_config(filename: &str) -> TagConfig {
        TagConfig {
            enabled: Some(true),
            filename: filename.to_string(),
            ..TagConfig::default()
        }
    }

    fn occurrence(tag: &str, attributes: &[&str]) -> ElementOccurrence {
        ElementOccurrence {
            tag_name: tag.to_string(),
            attribute_names: attributes.iter().map(|a| a.to_string()).collect(),
            position: SourcePosition::new(1, 1),
            self_closing: false,
        }
    }

    // =========================================================================
    // File-level admission
    // =========================================================================

    #[test]
    fn test_admits_eligible_file() {
        assert!(admits_file(&enabled_config("/proj/app/page.tsx")));
        assert!(admits_file(&enabled_config("/proj/app/page.jsx")));
    }

    #[test]
    fn test_rejects_disabled() {
        let config = TagConfig {
            enabled: Some(false),
            ..enabled_config("/proj/app/page.tsx")
        };
        assert!(!admits_file(&config));
    }

    #[test]
    fn test_unset_enabled_uses_dev_mode() {
        let mut config = TagConfig {
            enabled: None,
            ..enabled_config("/proj/app/page.tsx")
        };
        assert!(!admits_file(&config));
        config.dev_mode = true;
        assert!(admits_file(&config));
    }

    #[test]
    fn test_rejects_missing_filename() {
        assert!(!admits_file(&enabled_config("")));
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(!admits_file(&enabled_config("/proj/app/page.ts")));
        assert!(!admits_file(&enabled_config("/proj/app/style.css")));
    }

    #[test]
    fn test_rejects_excluded_substring() {
        assert!(!admits_file(&enabled_config(
            "/proj/node_modules/lib/index.tsx"
        )));
    }

    #[test]
    fn test_rejects_excluded_regex() {
        let mut config = enabled_config("/proj/src/page.stories.tsx");
        config
            .exclude
            .push(ExcludePattern::regex(r"\.stories\.tsx$").unwrap());
        assert!(!admits_file(&config));
    }

    #[test]
    fn test_custom_include_extension() {
        let mut config = enabled_config("/proj/src/widget.vue");
        config.include = vec![".vue".to_string()];
        assert!(admits_file(&config));
    }

    // =========================================================================
    // Element-level admission
    // =========================================================================

    #[test]
    fn test_admits_primitive_element() {
        let config = enabled_config("/proj/app/page.tsx");
        assert!(admits_element(&config, &occurrence("div", &[])));
        assert!(admits_element(&config, &occurrence("input", &["type"])));
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let config = enabled_config("/proj/app/page.tsx");
        assert!(!admits_element(&config, &occurrence("MyComponent", &[])));
        assert!(!admits_element(&config, &occurrence("my-widget", &[])));
    }

    #[test]
    fn test_rejects_already_tagged() {
        let config = enabled_config("/proj/app/page.tsx");
        assert!(!admits_element(
            &config,
            &occurrence("div", &["data-loc-id"])
        ));
    }

    #[test]
    fn test_already_tagged_respects_prefix() {
        let config = TagConfig {
            prefix_name: "trace".to_string(),
            ..enabled_config("/proj/app/page.tsx")
        };
        // A foreign prefix does not block tagging.
        assert!(admits_element(&config, &occurrence("div", &["data-loc-id"])));
        assert!(!admits_element(
            &config,
            &occurrence("div", &["data-trace-id"])
        ));
    }
}
