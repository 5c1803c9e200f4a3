//! Type formatters.
//!
//! Values are rendered most specific first: scalar wrappers (lengths,
//! enumeration members, RGB colors), then introspectable objects, then
//! collections, with the pre-rendered string fallback last. Every formatter
//! is total.

use serde_json::{Map, Number, Value, json};

use crate::common::unit::round_to;
use crate::common::{Length, RGBColor};

use super::context::SerializationContext;
use super::extract::{EnumValue, Introspect, PropertyValue};
use super::fields::SelectorNode;
use super::node::{CollectionKind, CollectionSummary, OBJECT_TYPE_KEY};
use super::serialize::{Selection, serialize_object};

/// Format one property value under the current context.
///
/// `selector` is `None` when everything below this value is selected.
pub(crate) fn format_value(
    value: PropertyValue<'_>,
    ctx: &mut SerializationContext,
    selector: Option<&SelectorNode>,
) -> Value {
    match value {
        PropertyValue::Null => Value::Null,
        PropertyValue::Bool(v) => Value::Bool(v),
        PropertyValue::Int(v) => Value::Number(v.into()),
        PropertyValue::Float(v) => format_float(v),
        PropertyValue::Str(v) => Value::String(v.into_owned()),
        PropertyValue::Length(v) => restrict(format_length(v), selector),
        PropertyValue::Enum(v) => restrict(format_enum(&v), selector),
        PropertyValue::Color(v) => restrict(format_rgb(v), selector),
        PropertyValue::Object(obj) => format_object(obj, ctx, selector),
        PropertyValue::Shared(obj) => format_object(&*obj, ctx, selector),
        PropertyValue::Sequence(items) => format_sequence(items, ctx, selector),
        PropertyValue::Mapping(entries) => format_mapping(entries, ctx, selector),
        PropertyValue::Opaque(text) => Value::String(text),
    }
}

/// Floats that JSON cannot carry (NaN, infinities) fall back to text.
pub(crate) fn format_float(v: f64) -> Value {
    Number::from_f64(v).map_or_else(|| Value::String(v.to_string()), Value::Number)
}

pub(crate) fn format_length(length: Length) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(OBJECT_TYPE_KEY.into(), "Length".into());
    map.insert("emu".into(), length.emus().into());
    map.insert("inches".into(), format_float(round_to(length.inches(), 4)));
    map.insert("pt".into(), format_float(round_to(length.points(), 2)));
    map.insert("cm".into(), format_float(round_to(length.cm(), 4)));
    map.insert("mm".into(), format_float(round_to(length.mm(), 3)));
    map
}

pub(crate) fn format_enum(member: &EnumValue) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(OBJECT_TYPE_KEY.into(), member.enum_type.into());
    map.insert("name".into(), member.name.into());
    map.insert("value".into(), member.value.into());
    map.insert("description".into(), member.description.into());
    if let Some(xml) = member.xml_value {
        map.insert("xml_value".into(), xml.into());
    }
    map
}

pub(crate) fn format_rgb(color: RGBColor) -> Map<String, Value> {
    let value = json!({
        OBJECT_TYPE_KEY: "RGBColor",
        "r": color.r,
        "g": color.g,
        "b": color.b,
        "hex": color.to_hex(),
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn format_object(
    object: &dyn Introspect,
    ctx: &mut SerializationContext,
    selector: Option<&SelectorNode>,
) -> Value {
    Value::Object(serialize_object(object, ctx, false, Selection::nested(selector)))
}

fn format_sequence(
    items: Vec<PropertyValue<'_>>,
    ctx: &mut SerializationContext,
    selector: Option<&SelectorNode>,
) -> Value {
    if ctx.expand_collections() && ctx.remaining_depth() > 0 {
        Value::Array(
            items
                .into_iter()
                .map(|item| format_value(item, ctx, selector))
                .collect(),
        )
    } else {
        CollectionSummary::from_labels(CollectionKind::List, items.iter().map(|i| i.type_label()))
            .to_value()
    }
}

fn format_mapping(
    entries: Vec<(String, PropertyValue<'_>)>,
    ctx: &mut SerializationContext,
    selector: Option<&SelectorNode>,
) -> Value {
    if !(ctx.expand_collections() && ctx.remaining_depth() > 0) {
        return CollectionSummary::from_labels(
            CollectionKind::Dict,
            entries.iter().map(|(_, v)| v.type_label()),
        )
        .to_value();
    }

    let mut map = Map::new();
    for (key, value) in entries {
        let sub = match selector {
            None => None,
            Some(node) => match node.child(&key) {
                Some(child) => narrow(child),
                None => continue,
            },
        };
        let formatted = format_value(value, ctx, sub);
        map.insert(key, formatted);
    }
    Value::Object(map)
}

/// Drop the total selectors so `None` uniformly means "everything below".
#[inline]
pub(crate) fn narrow(node: &SelectorNode) -> Option<&SelectorNode> {
    if node.is_total() { None } else { Some(node) }
}

/// Apply a branch selector to a leaf mapping, keeping its type marker.
fn restrict(mut map: Map<String, Value>, selector: Option<&SelectorNode>) -> Value {
    if let Some(SelectorNode::Branch(children)) = selector {
        map.retain(|key, _| key == OBJECT_TYPE_KEY || children.contains_key(key));
    }
    Value::Object(map)
}
