//! Depth-limited, cycle-safe serialization of one object graph.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::common::Result;

use super::context::SerializationContext;
use super::extract::{AiSummary, Fields, Introspect};
use super::fields::SelectorNode;
use super::format::{format_value, narrow};
use super::node::{
    self, AI_SUMMARY_KEY, IDENTITY_KEY, OBJECT_TYPE_KEY, PROPERTIES_KEY, RELATIONSHIPS_KEY,
    SerializedNode,
};

type Branch = BTreeMap<String, SelectorNode>;

/// Which blocks of an object's output are selected.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Selection<'s> {
    /// No restriction.
    All,
    /// A top-level selector: keys name output blocks.
    Blocks(&'s Branch),
    /// A selector met below a property: keys name the nested object's
    /// properties and the other blocks are dropped.
    Properties(&'s Branch),
}

/// How the fields of one block are filtered.
#[derive(Debug, Clone, Copy)]
enum BlockFilter<'s> {
    Excluded,
    All,
    Only(&'s Branch),
}

impl<'s> Selection<'s> {
    pub(crate) fn top_level(node: Option<&'s SelectorNode>) -> Self {
        match node {
            Some(SelectorNode::Branch(children)) => Selection::Blocks(children),
            _ => Selection::All,
        }
    }

    pub(crate) fn nested(node: Option<&'s SelectorNode>) -> Self {
        match node {
            Some(SelectorNode::Branch(children)) => Selection::Properties(children),
            _ => Selection::All,
        }
    }

    fn block(self, key: &str) -> BlockFilter<'s> {
        match self {
            Selection::All => BlockFilter::All,
            Selection::Blocks(children) => match children.get(key) {
                None => BlockFilter::Excluded,
                Some(SelectorNode::Branch(inner)) => BlockFilter::Only(inner),
                Some(_) => BlockFilter::All,
            },
            Selection::Properties(children) if key == PROPERTIES_KEY => {
                BlockFilter::Only(children)
            },
            Selection::Properties(_) => BlockFilter::Excluded,
        }
    }
}

impl<'s> BlockFilter<'s> {
    /// `None` when the field is excluded, `Some(sub)` with its sub-selector
    /// otherwise.
    fn field(self, name: &str) -> Option<Option<&'s SelectorNode>> {
        match self {
            BlockFilter::Excluded => None,
            BlockFilter::All => Some(None),
            BlockFilter::Only(children) => children.get(name).map(narrow),
        }
    }

    #[inline]
    fn is_excluded(self) -> bool {
        matches!(self, BlockFilter::Excluded)
    }
}

/// Serialize `object` and everything reachable from it within the budget
/// held by `ctx`.
///
/// Order of checks: an object already visited in this call yields a circular
/// stub, an exhausted budget yields a truncation stub (and the object is not
/// marked), otherwise the object is marked and its blocks are emitted.
pub(crate) fn serialize_object(
    object: &dyn Introspect,
    ctx: &mut SerializationContext,
    include_relationships: bool,
    selection: Selection<'_>,
) -> SerializedNode {
    let type_name = object.type_name();
    let id = ctx.object_id(object);

    if ctx.is_visited(id) {
        trace!(type_name, id, "circular reference");
        ctx.stats_mut().circular += 1;
        return into_map(node::circular_reference(type_name, id));
    }
    if ctx.remaining_depth() == 0 {
        trace!(type_name, "depth budget exhausted");
        ctx.stats_mut().truncated += 1;
        return into_map(node::truncated(type_name));
    }

    ctx.mark_visited(id);
    ctx.stats_mut().objects += 1;

    let mut out = Map::new();
    out.insert(OBJECT_TYPE_KEY.into(), type_name.into());

    let filter = selection.block(IDENTITY_KEY);
    if !filter.is_excluded() {
        let block = ctx.descend(|ctx| render_block(IDENTITY_KEY, object.identity(), filter, ctx));
        out.insert(IDENTITY_KEY.into(), block);
    }

    let filter = selection.block(PROPERTIES_KEY);
    if !filter.is_excluded() {
        let block =
            ctx.descend(|ctx| render_block(PROPERTIES_KEY, object.properties(), filter, ctx));
        out.insert(PROPERTIES_KEY.into(), block);
    }

    if include_relationships {
        let filter = selection.block(RELATIONSHIPS_KEY);
        if !filter.is_excluded() {
            let block = ctx.descend(|ctx| {
                render_block(RELATIONSHIPS_KEY, object.relationships(), filter, ctx)
            });
            out.insert(RELATIONSHIPS_KEY.into(), block);
        }
    }

    if ctx.summarize_for_ai() {
        let filter = selection.block(AI_SUMMARY_KEY);
        if !filter.is_excluded() {
            let block = render_summary(object.ai_summary(), filter, ctx);
            out.insert(AI_SUMMARY_KEY.into(), block);
        }
    }

    out
}

fn render_block(
    block: &'static str,
    fields: Result<Fields<'_>>,
    filter: BlockFilter<'_>,
    ctx: &mut SerializationContext,
) -> Value {
    let fields = match fields {
        Ok(fields) => fields,
        Err(e) => {
            debug!(block, error = %e, "failed to extract block");
            ctx.stats_mut().errors += 1;
            return node::error_stub(block, e);
        },
    };

    let mut map = Map::new();
    for field in fields {
        if field.private && !ctx.include_private() {
            continue;
        }
        let Some(selector) = filter.field(&field.name) else {
            continue;
        };
        let value = match field.value {
            Ok(value) => format_value(value, ctx, selector),
            Err(e) => {
                debug!(block, field = %field.name, error = %e, "failed to extract field");
                ctx.stats_mut().errors += 1;
                node::error_stub(&field.name, e)
            },
        };
        map.insert(field.name.into_owned(), value);
    }
    Value::Object(map)
}

fn render_summary(
    summary: Result<AiSummary>,
    filter: BlockFilter<'_>,
    ctx: &mut SerializationContext,
) -> Value {
    let rendered = summary.and_then(|s| Ok(serde_json::to_value(s)?));
    match rendered {
        Ok(Value::Object(mut map)) => {
            if let BlockFilter::Only(children) = filter {
                map.retain(|key, _| children.contains_key(key));
            }
            Value::Object(map)
        },
        Ok(other) => other,
        Err(e) => {
            debug!(error = %e, "failed to build AI summary");
            ctx.stats_mut().errors += 1;
            node::error_stub(AI_SUMMARY_KEY, e)
        },
    }
}

fn into_map(value: Value) -> SerializedNode {
    match value {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".into(), other);
            map
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Error, Length};
    use crate::introspection::{FieldSelector, IntrospectionOptions, PropertyValue};
    use serde_json::json;

    struct Box2 {
        name: &'static str,
        width: Length,
        inner: Option<Box<Box2>>,
    }

    impl Introspect for Box2 {
        fn type_name(&self) -> &'static str {
            "Box2"
        }

        fn identity(&self) -> Result<Fields<'_>> {
            Ok(Fields::new().with("name", self.name))
        }

        fn properties(&self) -> Result<Fields<'_>> {
            Ok(Fields::new()
                .with("width", self.width)
                .with("inner", self.inner.as_deref().map(|b| b as &dyn Introspect))
                .with_private("_secret", 42))
        }

        fn relationships(&self) -> Result<Fields<'_>> {
            Err(Error::Other("detached".into()))
        }
    }

    fn nested() -> Box2 {
        Box2 {
            name: "outer",
            width: Length::from_inches(1.0),
            inner: Some(Box::new(Box2 {
                name: "inner",
                width: Length::from_inches(2.0),
                inner: None,
            })),
        }
    }

    fn run(object: &dyn Introspect, options: &IntrospectionOptions) -> SerializedNode {
        let selector = options
            .fields
            .as_ref()
            .map(|f| FieldSelector::parse(f))
            .transpose()
            .unwrap();
        let mut ctx = SerializationContext::new(options);
        serialize_object(
            object,
            &mut ctx,
            options.include_relationships,
            Selection::top_level(selector.as_ref().map(FieldSelector::root)),
        )
    }

    #[test]
    fn test_block_layout() {
        let out = run(&nested(), &IntrospectionOptions::new().with_ai_summary(false));
        assert_eq!(out["_object_type"], json!("Box2"));
        assert_eq!(out["_identity"], json!({"name": "outer"}));
        assert_eq!(out["properties"]["inner"]["_identity"]["name"], json!("inner"));
        assert!(out["properties"]["inner"].get("relationships").is_none());
        assert!(out["properties"].get("_secret").is_none());
        assert!(out.get("_llm_context").is_none());
    }

    #[test]
    fn test_private_fields_included_on_request() {
        let out = run(&nested(), &IntrospectionOptions::new().with_private(true));
        assert_eq!(out["properties"]["_secret"], json!(42));
    }

    #[test]
    fn test_failing_block_becomes_error_stub() {
        let out = run(&nested(), &IntrospectionOptions::default());
        assert_eq!(
            out["relationships"],
            json!({"error_in": "relationships", "message": "detached"})
        );
    }

    #[test]
    fn test_nested_selector_filters_nested_properties() {
        let options = IntrospectionOptions::new().with_fields(["properties.inner.width"]);
        let out = run(&nested(), &options);
        assert!(out.get("_identity").is_none());
        let inner = out["properties"]["inner"].as_object().unwrap();
        assert_eq!(inner["_object_type"], json!("Box2"));
        assert!(inner.get("_identity").is_none());
        assert_eq!(
            inner["properties"].as_object().unwrap().keys().collect::<Vec<_>>(),
            vec!["width"]
        );
        assert!(out["properties"].get("width").is_none());
    }

    #[test]
    fn test_ai_summary_can_be_selected_alone() {
        let options = IntrospectionOptions::new().with_fields(["_llm_context"]);
        let out = run(&nested(), &options);
        assert_eq!(
            out.keys().collect::<Vec<_>>(),
            vec!["_object_type", "_llm_context"]
        );
        assert!(out["_llm_context"]["description"].is_string());
    }

    #[test]
    fn test_scalar_under_deeper_selector_is_emitted() {
        let options = IntrospectionOptions::new().with_fields(["_identity.name.first"]);
        let out = run(&nested(), &options);
        assert_eq!(out["_identity"]["name"], json!("outer"));
    }

    #[test]
    fn test_sequence_passes_selector_to_elements() {
        struct Holder(Vec<Box2>);
        impl Introspect for Holder {
            fn type_name(&self) -> &'static str {
                "Holder"
            }
            fn properties(&self) -> Result<Fields<'_>> {
                Ok(Fields::new().with("items", PropertyValue::objects(&self.0)))
            }
        }

        let holder = Holder(vec![nested(), nested()]);
        let options = IntrospectionOptions::new().with_fields(["properties.items.width"]);
        let out = run(&holder, &options);
        let items = out["properties"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item["properties"].get("width").is_some());
            assert!(item["properties"].get("inner").is_none());
        }
    }
}
