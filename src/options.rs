use std::collections::BTreeMap;

use tera::Value;

use crate::error::{Result, StencilError};

/// Options for a single `generate` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Emit the stylesheet for components.
    pub style: bool,
    /// Emit a test file next to the generated unit.
    pub test: bool,
    /// Capitalize the first character of the base name.
    pub format: bool,
    /// Report what would be written without touching the filesystem.
    pub dry_run: bool,
    /// Presentational component linked to a container. Only seen by templates.
    pub component: Option<String>,
    /// Unrecognized options, passed to templates unchanged.
    pub extra: BTreeMap<String, Value>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            style: true,
            test: false,
            format: true,
            dry_run: false,
            component: None,
            extra: BTreeMap::new(),
        }
    }
}

impl GenerationOptions {
    /// Template-facing view of the options, keyed the way templates spell them.
    pub fn context_values(&self) -> BTreeMap<String, Value> {
        let mut values = self.extra.clone();
        values.insert("style".into(), Value::Bool(self.style));
        values.insert("test".into(), Value::Bool(self.test));
        values.insert("format".into(), Value::Bool(self.format));
        values.insert("dryRun".into(), Value::Bool(self.dry_run));
        if let Some(component) = &self.component {
            values.insert("component".into(), Value::String(component.clone()));
        }
        values
    }
}

/// Parse `key=value` pairs into pass-through options.
///
/// Values that parse as JSON scalars (`true`, `42`, `null`) keep their type;
/// anything else is a string.
pub fn parse_extra_options(pairs: &[String]) -> Result<BTreeMap<String, Value>> {
    let mut extra = BTreeMap::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| StencilError::InvalidOption {
                input: pair.clone(),
            })?;
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(v) if !v.is_object() && !v.is_array() => v,
            _ => Value::String(raw.to_string()),
        };
        extra.insert(key.trim().to_string(), value);
    }
    Ok(extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_cli_defaults() {
        let options = GenerationOptions::default();
        assert!(options.style);
        assert!(options.format);
        assert!(!options.test);
        assert!(!options.dry_run);
        assert!(options.component.is_none());
    }

    #[test]
    fn context_uses_template_spelling() {
        let options = GenerationOptions {
            dry_run: true,
            component: Some("UserCard".into()),
            ..Default::default()
        };
        let values = options.context_values();
        assert_eq!(values["dryRun"], Value::Bool(true));
        assert_eq!(values["component"], Value::String("UserCard".into()));
        assert!(!values.contains_key("dry_run"));
    }

    #[test]
    fn recognized_options_override_extras() {
        let mut extra = BTreeMap::new();
        extra.insert("style".to_string(), Value::String("nope".into()));
        extra.insert("author".to_string(), Value::String("jane".into()));
        let options = GenerationOptions {
            extra,
            ..Default::default()
        };
        let values = options.context_values();
        assert_eq!(values["style"], Value::Bool(true));
        assert_eq!(values["author"], Value::String("jane".into()));
    }

    #[rstest]
    #[case("flag=true", "flag", Value::Bool(true))]
    #[case("count=3", "count", Value::from(3))]
    #[case("title=Hello world", "title", Value::String("Hello world".into()))]
    #[case("list=[1,2]", "list", Value::String("[1,2]".into()))]
    #[case("empty=", "empty", Value::String(String::new()))]
    fn parses_extra_values(#[case] input: &str, #[case] key: &str, #[case] expected: Value) {
        let extra = parse_extra_options(&[input.to_string()]).unwrap();
        assert_eq!(extra[key], expected);
    }

    #[rstest]
    #[case("novalue")]
    #[case("=value")]
    fn rejects_malformed_pairs(#[case] input: &str) {
        let result = parse_extra_options(&[input.to_string()]);
        assert!(matches!(result, Err(StencilError::InvalidOption { .. })));
    }
}
