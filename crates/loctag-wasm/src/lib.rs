//! WASM bindings for the lexical tagger.
//!
//! Exposes `transform()` to a JavaScript build pipeline via
//! wasm-bindgen. Options arrive as a plain JS object; a result object
//! `{ code }` comes back. Any failure to read the options falls back
//! to the original source, because instrumentation must never break a
//! build.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use loctag_core::{ExcludePattern, TagConfig};

/// Wire format of the JS options object. All keys are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagOptions {
    pub enabled: Option<bool>,
    pub prefix_name: Option<String>,
    pub debug: Option<bool>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub filename: Option<String>,
    pub project_root: Option<String>,
    pub dev_mode: Option<bool>,
}

impl TagOptions {
    /// Convert wire options into a full config, filling defaults.
    /// Exclude entries arriving over the wire are substring patterns.
    pub fn into_config(self) -> TagConfig {
        let mut config = TagConfig {
            enabled: self.enabled,
            ..TagConfig::default()
        };
        if let Some(prefix) = self.prefix_name {
            config.prefix_name = prefix;
        }
        if let Some(debug) = self.debug {
            config.debug = debug;
        }
        if let Some(include) = self.include {
            config.include = include;
        }
        if let Some(exclude) = self.exclude {
            config.exclude = exclude.into_iter().map(ExcludePattern::from).collect();
        }
        if let Some(filename) = self.filename {
            config.filename = filename;
        }
        if let Some(root) = self.project_root {
            config.project_root = Some(root.into());
        }
        if let Some(dev_mode) = self.dev_mode {
            config.dev_mode = dev_mode;
        }
        config
    }
}

/// Transform JSX/TSX source, injecting location attributes.
///
/// Returns a JS object `{ code: string }`. `code` is the input
/// unchanged when the file is not eligible or the options cannot be
/// read.
#[wasm_bindgen]
pub fn transform(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let options: TagOptions = if options.is_undefined() || options.is_null() {
        TagOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(parsed) => parsed,
            Err(_) => TagOptions {
                // Unreadable options disable the transform entirely.
                enabled: Some(false),
                ..TagOptions::default()
            },
        }
    };

    let code = loctag_lexical::tag_source(source, &options.into_config());

    let result = js_sys::Object::new();
    js_sys::Reflect::set(&result, &"code".into(), &code.into())
        .map_err(|_| JsError::new("Failed to set code property"))?;
    Ok(result.into())
}

/// Get the tagger version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM) — options conversion and the transform
    // pipeline behind the binding
    // =========================================================================

    #[test]
    fn test_default_options() {
        let config = TagOptions::default().into_config();
        assert_eq!(config.enabled, None);
        assert_eq!(config.attribute_name(), "data-loc-id");
        assert_eq!(config.include, vec![".tsx", ".jsx"]);
    }

    #[test]
    fn test_options_override_defaults() {
        let options = TagOptions {
            enabled: Some(true),
            prefix_name: Some("trace".to_string()),
            include: Some(vec![".vue".to_string()]),
            exclude: Some(vec!["dist".to_string()]),
            filename: Some("/proj/src/widget.vue".to_string()),
            project_root: Some("/proj".to_string()),
            ..TagOptions::default()
        };
        let config = options.into_config();
        assert_eq!(config.enabled, Some(true));
        assert_eq!(config.attribute_name(), "data-trace-id");
        assert_eq!(config.include, vec![".vue"]);
        assert!(config.exclude[0].matches("/proj/dist/widget.vue"));
        assert_eq!(config.filename, "/proj/src/widget.vue");
    }

    #[test]
    fn test_pipeline_tags_through_options() {
        let options = TagOptions {
            enabled: Some(true),
            filename: Some("/proj/app/page.tsx".to_string()),
            project_root: Some("/proj".to_string()),
            ..TagOptions::default()
        };
        let out = loctag_lexical::tag_source("<div>hi</div>\n", &options.into_config());
        assert_eq!(out, "<div data-loc-id=\"app/page.tsx:1:1\">hi</div>\n");
    }

    #[test]
    fn test_pipeline_disabled_without_dev_mode() {
        let options = TagOptions {
            filename: Some("/proj/app/page.tsx".to_string()),
            project_root: Some("/proj".to_string()),
            ..TagOptions::default()
        };
        let source = "<div>hi</div>\n";
        let out = loctag_lexical::tag_source(source, &options.into_config());
        assert_eq!(out, source);
    }

    #[test]
    fn test_pipeline_dev_mode_enables() {
        let options = TagOptions {
            dev_mode: Some(true),
            filename: Some("/proj/app/page.tsx".to_string()),
            project_root: Some("/proj".to_string()),
            ..TagOptions::default()
        };
        let out = loctag_lexical::tag_source("<div>hi</div>\n", &options.into_config());
        assert!(out.contains("data-loc-id=\"app/page.tsx:1:1\""));
    }
}
