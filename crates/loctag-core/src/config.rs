//! Per-invocation tagger configuration.
//!
//! One `TagConfig` describes a single file's transform: whether tagging
//! is on, which attribute to inject, and which files are in scope.
//! Ambient process state (working directory, development flag) is
//! injected as explicit fields so the transform stays a pure function
//! of its inputs.

use std::path::PathBuf;

use regex::Regex;

/// Default file extensions eligible for tagging.
pub const DEFAULT_INCLUDE: &[&str] = &[".tsx", ".jsx"];

/// Default exclude substring.
pub const DEFAULT_EXCLUDE: &str = "node_modules";

/// An entry in the exclude list.
///
/// String entries match by substring containment; regex entries match
/// by pattern test. These are the two forms hosts conventionally pass.
#[derive(Debug, Clone)]
pub enum ExcludePattern {
    Substring(String),
    Pattern(Regex),
}

impl ExcludePattern {
    /// Compile a regex exclude entry.
    pub fn regex(source: &str) -> Result<Self, PatternError> {
        let re = Regex::new(source).map_err(|e| PatternError {
            pattern: source.to_string(),
            message: e.to_string(),
        })?;
        Ok(ExcludePattern::Pattern(re))
    }

    /// Test whether this entry matches the given file path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            ExcludePattern::Substring(s) => path.contains(s.as_str()),
            ExcludePattern::Pattern(re) => re.is_match(path),
        }
    }
}

impl From<&str> for ExcludePattern {
    fn from(s: &str) -> Self {
        ExcludePattern::Substring(s.to_string())
    }
}

impl From<String> for ExcludePattern {
    fn from(s: String) -> Self {
        ExcludePattern::Substring(s)
    }
}

/// Invalid exclude pattern supplied by the host.
///
/// Raised only while building configuration, never during a transform.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid exclude pattern '{pattern}': {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

/// Configuration for one transform invocation.
///
/// Read-only per call; nothing here is shared or mutated across files.
#[derive(Debug, Clone)]
pub struct TagConfig {
    /// Explicit on/off switch. `None` defers to `dev_mode`.
    pub enabled: Option<bool>,

    /// Middle segment of the injected attribute name.
    pub prefix_name: String,

    /// Emit one log line per tagged element.
    pub debug: bool,

    /// File-extension suffixes eligible for tagging.
    pub include: Vec<String>,

    /// Paths matching any entry are never touched.
    pub exclude: Vec<ExcludePattern>,

    /// Absolute path of the file being transformed.
    pub filename: String,

    /// Project root for relative-path computation.
    /// `None` falls back to the process current directory.
    pub project_root: Option<PathBuf>,

    /// Ambient development flag, injected by the host.
    pub dev_mode: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            prefix_name: "loc".to_string(),
            debug: false,
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude: vec![ExcludePattern::from(DEFAULT_EXCLUDE)],
            filename: String::new(),
            project_root: None,
            dev_mode: false,
        }
    }
}

impl TagConfig {
    /// The canonical injected attribute name: `data-<prefix>-id`.
    ///
    /// The `data-` and `-id` segments are fixed; only the middle comes
    /// from configuration. The default is `data-loc-id`.
    pub fn attribute_name(&self) -> String {
        format!("data-{}-id", self.prefix_name)
    }

    /// Resolve the on/off switch: explicit `enabled` wins, otherwise
    /// the injected development flag decides.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(self.dev_mode)
    }
}

/// Conventional development flag: `NODE_ENV == "development"`.
///
/// Provided for hosts that want the bundler convention; the transform
/// itself only reads `TagConfig::dev_mode`.
pub fn dev_mode_from_env() -> bool {
    std::env::var("NODE_ENV")
        .map(|v| v == "development")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attribute_name() {
        assert_eq!(TagConfig::default().attribute_name(), "data-loc-id");
    }

    #[test]
    fn test_custom_prefix() {
        let config = TagConfig {
            prefix_name: "trace".to_string(),
            ..TagConfig::default()
        };
        assert_eq!(config.attribute_name(), "data-trace-id");
    }

    #[test]
    fn test_enabled_explicit_wins_over_dev_mode() {
        let config = TagConfig {
            enabled: Some(false),
            dev_mode: true,
            ..TagConfig::default()
        };
        assert!(!config.is_enabled());

        let config = TagConfig {
            enabled: Some(true),
            dev_mode: false,
            ..TagConfig::default()
        };
        assert!(config.is_enabled());
    }

    #[test]
    fn test_enabled_unset_defers_to_dev_mode() {
        let config = TagConfig {
            dev_mode: true,
            ..TagConfig::default()
        };
        assert!(config.is_enabled());
        assert!(!TagConfig::default().is_enabled());
    }

    #[test]
    fn test_default_include_and_exclude() {
        let config = TagConfig::default();
        assert_eq!(config.include, vec![".tsx", ".jsx"]);
        assert_eq!(config.exclude.len(), 1);
        assert!(config.exclude[0].matches("/proj/node_modules/x/index.tsx"));
    }

    #[test]
    fn test_substring_pattern() {
        let pattern = ExcludePattern::from("generated");
        assert!(pattern.matches("/proj/generated/page.tsx"));
        assert!(!pattern.matches("/proj/src/page.tsx"));
    }

    #[test]
    fn test_regex_pattern() {
        let pattern = ExcludePattern::regex(r"\.test\.tsx$").unwrap();
        assert!(pattern.matches("/proj/src/page.test.tsx"));
        assert!(!pattern.matches("/proj/src/page.tsx"));
    }

    #[test]
    fn test_invalid_regex_pattern() {
        let err = ExcludePattern::regex("(unclosed").unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_dev_mode_from_env() {
        std::env::set_var("NODE_ENV", "development");
        assert!(dev_mode_from_env());
        std::env::set_var("NODE_ENV", "production");
        assert!(!dev_mode_from_env());
        std::env::remove_var("NODE_ENV");
        assert!(!dev_mode_from_env());
    }
}
