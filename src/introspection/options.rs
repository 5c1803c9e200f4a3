//! Configuration types for introspection calls.
//!
//! Options can be built in code with the `with_*` setters or deserialized from
//! the JSON argument object a tool-invocation layer receives.

use serde::{Deserialize, Serialize};

use crate::common::Result;

/// Options controlling a [`to_dict`](super::to_dict) call.
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::introspection::IntrospectionOptions;
///
/// // Create with defaults
/// let options = IntrospectionOptions::default();
/// assert_eq!(options.max_depth, 3);
///
/// // Or customize
/// let options = IntrospectionOptions::new()
///     .with_max_depth(1)
///     .with_relationships(false)
///     .with_fields(["properties.fill.*"]);
///
/// // Or read the arguments of a tool call
/// let options = IntrospectionOptions::from_json(r#"{"max_depth": 2, "format_for_ai": false}"#).unwrap();
/// assert!(!options.summarize_for_ai);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectionOptions {
    /// Whether to emit the relationships block of the top-level object
    pub include_relationships: bool,
    /// Maximum number of property descents
    pub max_depth: usize,
    /// Whether to emit fields marked internal
    pub include_private: bool,
    /// Whether to expand collections element by element
    pub expand_collections: bool,
    /// Whether to attach the AI-facing summary block
    #[serde(alias = "format_for_ai", alias = "format_for_llm")]
    pub summarize_for_ai: bool,
    /// Dotted field paths restricting the output
    pub fields: Option<Vec<String>>,
}

impl Default for IntrospectionOptions {
    fn default() -> Self {
        Self {
            include_relationships: true,
            max_depth: 3,
            include_private: false,
            expand_collections: true,
            summarize_for_ai: true,
            fields: None,
        }
    }
}

impl IntrospectionOptions {
    /// Create a new `IntrospectionOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn with_relationships(mut self, include: bool) -> Self {
        self.include_relationships = include;
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn with_private(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    /// Set whether collections are expanded.
    ///
    /// When disabled, every list or mapping is replaced by a collection
    /// summary carrying its element count and element type.
    #[inline]
    pub fn with_expand_collections(mut self, expand: bool) -> Self {
        self.expand_collections = expand;
        self
    }

    #[inline]
    pub fn with_ai_summary(mut self, summarize: bool) -> Self {
        self.summarize_for_ai = summarize;
        self
    }

    /// Restrict the output to the given dotted field paths.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
}

/// Options controlling a [`get_tree`](super::get_tree) call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Maximum tree depth; `None` uses the root object's default
    pub max_depth: Option<usize>,
}

impl TreeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_options_default() {
        let options = IntrospectionOptions::default();
        assert!(options.include_relationships);
        assert_eq!(options.max_depth, 3);
        assert!(!options.include_private);
        assert!(options.expand_collections);
        assert!(options.summarize_for_ai);
        assert_eq!(options.fields, None);
    }

    #[test]
    fn test_introspection_options_builder() {
        let options = IntrospectionOptions::new()
            .with_relationships(false)
            .with_max_depth(5)
            .with_private(true)
            .with_expand_collections(false)
            .with_ai_summary(false)
            .with_fields(["properties.name"]);

        assert!(!options.include_relationships);
        assert_eq!(options.max_depth, 5);
        assert!(options.include_private);
        assert!(!options.expand_collections);
        assert!(!options.summarize_for_ai);
        assert_eq!(options.fields, Some(vec!["properties.name".to_string()]));
    }

    #[test]
    fn test_introspection_options_from_json() {
        let options = IntrospectionOptions::from_json(
            r#"{"max_depth": 1, "format_for_llm": false, "fields": ["_identity"]}"#,
        )
        .unwrap();
        assert_eq!(options.max_depth, 1);
        assert!(!options.summarize_for_ai);
        assert!(options.include_relationships);
        assert_eq!(options.fields, Some(vec!["_identity".to_string()]));

        assert!(IntrospectionOptions::from_json(r#"{"max_depth": -1}"#).is_err());
    }

    #[test]
    fn test_tree_options_from_json() {
        assert_eq!(TreeOptions::from_json("{}").unwrap().max_depth, None);
        assert_eq!(
            TreeOptions::from_json(r#"{"max_depth": 1}"#).unwrap(),
            TreeOptions::new().with_max_depth(1)
        );
    }
}
