//! Extension points implemented by every introspectable object.
//!
//! An object describes itself through four blocks: identity, properties,
//! relationships and an AI-facing summary. Each block is produced
//! independently, so a failure in one never hides the others. Discovery-mode
//! hooks (`tree_*`) feed the tree builder and have total, infallible
//! signatures.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::common::{EnumMember, Length, RGBColor, Result};

use super::path::PathSegment;
use super::tree::Geometry;

/// An object that can be walked by the introspection engine.
///
/// Only [`type_name`](Introspect::type_name) and
/// [`properties`](Introspect::properties) are required; every other hook has a
/// sensible default.
pub trait Introspect {
    /// Declared type name, emitted as `_object_type`.
    fn type_name(&self) -> &'static str;

    /// Stable identifying attributes.
    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new().with("class_name", self.type_name()))
    }

    /// The object's formattable state.
    fn properties(&self) -> Result<Fields<'_>>;

    /// Named references to other objects.
    fn relationships(&self) -> Result<Fields<'_>> {
        Ok(Fields::new())
    }

    /// Natural-language description and suggested operations.
    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new(format!("A {} object.", self.type_name())))
    }

    /// Compact identity shown in tree nodes.
    fn tree_identity(&self) -> Map<String, Value> {
        let mut identity = Map::new();
        identity.insert("class_name".into(), self.type_name().into());
        identity
    }

    /// Spatial bounding box, for positioned objects.
    fn tree_geometry(&self) -> Option<Geometry> {
        None
    }

    /// One-line description of the object's content.
    fn content_summary(&self) -> String {
        format!("{} object", self.type_name())
    }

    /// Children listed in discovery mode, each with its access-path segment.
    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        Vec::new()
    }

    /// Access path used when a tree is built with this object as the root.
    fn root_access_path(&self) -> String {
        String::new()
    }

    /// Default depth for [`get_tree`](super::IntrospectExt::get_tree).
    fn default_tree_depth(&self) -> usize {
        2
    }
}

/// A child object reachable in discovery mode.
pub struct TreeChild<'a> {
    pub segment: PathSegment,
    pub object: &'a dyn Introspect,
}

impl<'a> TreeChild<'a> {
    /// Child addressed as `collection[index]`.
    pub fn indexed(collection: &'static str, index: usize, object: &'a dyn Introspect) -> Self {
        Self {
            segment: PathSegment::Index {
                name: collection.into(),
                index,
            },
            object,
        }
    }

    /// Child addressed by a bare name.
    pub fn named(name: &'static str, object: &'a dyn Introspect) -> Self {
        Self {
            segment: PathSegment::Field(name.into()),
            object,
        }
    }
}

impl fmt::Debug for TreeChild<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeChild")
            .field("segment", &self.segment)
            .field("object", &self.object.type_name())
            .finish()
    }
}

/// Snapshot of an enumeration member's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub enum_type: &'static str,
    pub name: &'static str,
    pub value: i32,
    pub description: &'static str,
    pub xml_value: Option<&'static str>,
}

impl EnumValue {
    pub fn of(member: &dyn EnumMember) -> Self {
        Self {
            enum_type: member.enum_type(),
            name: member.name(),
            value: member.value(),
            description: member.description(),
            xml_value: member.xml_value(),
        }
    }
}

/// A property value as handed to the type formatters.
pub enum PropertyValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Cow<'a, str>),
    Length(Length),
    Color(RGBColor),
    Enum(EnumValue),
    /// Borrowed introspectable object
    Object(&'a dyn Introspect),
    /// Reference-counted introspectable object
    Shared(Rc<dyn Introspect>),
    Sequence(Vec<PropertyValue<'a>>),
    Mapping(Vec<(String, PropertyValue<'a>)>),
    /// Value of a type no formatter knows, pre-rendered as text
    Opaque(String),
}

impl<'a> PropertyValue<'a> {
    /// Wrap an enumeration member.
    pub fn enumeration(member: &dyn EnumMember) -> Self {
        PropertyValue::Enum(EnumValue::of(member))
    }

    /// Wrap an optional enumeration member, `None` becoming `Null`.
    pub fn enumeration_opt<E: EnumMember>(member: Option<E>) -> Self {
        member.map_or(PropertyValue::Null, |m| Self::enumeration(&m))
    }

    /// Sequence of borrowed objects.
    pub fn objects<T: Introspect>(items: &'a [T]) -> Self {
        PropertyValue::Sequence(
            items
                .iter()
                .map(|item| PropertyValue::Object(item as &dyn Introspect))
                .collect(),
        )
    }

    /// Sequence of shared objects.
    pub fn shared_objects<T: Introspect + 'static>(items: &[Rc<T>]) -> Self {
        PropertyValue::Sequence(
            items
                .iter()
                .map(|item| PropertyValue::Shared(item.clone() as Rc<dyn Introspect>))
                .collect(),
        )
    }

    /// Render any `Debug` value through the string fallback.
    pub fn opaque(value: &dyn fmt::Debug) -> Self {
        PropertyValue::Opaque(format!("{value:?}"))
    }

    /// Type name reported in collection summaries.
    pub fn type_label(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Int(_) => "int",
            PropertyValue::Float(_) => "float",
            PropertyValue::Str(_) => "str",
            PropertyValue::Length(_) => "Length",
            PropertyValue::Color(_) => "RGBColor",
            PropertyValue::Enum(e) => e.enum_type,
            PropertyValue::Object(obj) => obj.type_name(),
            PropertyValue::Shared(obj) => obj.type_name(),
            PropertyValue::Sequence(_) => "list",
            PropertyValue::Mapping(_) => "dict",
            PropertyValue::Opaque(_) => "object",
        }
    }
}

impl fmt::Debug for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => f.write_str("Null"),
            PropertyValue::Bool(v) => write!(f, "Bool({v})"),
            PropertyValue::Int(v) => write!(f, "Int({v})"),
            PropertyValue::Float(v) => write!(f, "Float({v})"),
            PropertyValue::Str(v) => write!(f, "Str({v:?})"),
            PropertyValue::Length(v) => write!(f, "Length({})", v.emus()),
            PropertyValue::Color(v) => write!(f, "Color({v})"),
            PropertyValue::Enum(v) => write!(f, "Enum({}.{})", v.enum_type, v.name),
            PropertyValue::Object(obj) => write!(f, "Object({})", obj.type_name()),
            PropertyValue::Shared(obj) => write!(f, "Shared({})", obj.type_name()),
            PropertyValue::Sequence(items) => f.debug_list().entries(items).finish(),
            PropertyValue::Mapping(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            PropertyValue::Opaque(v) => write!(f, "Opaque({v:?})"),
        }
    }
}

impl From<bool> for PropertyValue<'_> {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

macro_rules! int_property {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for PropertyValue<'_> {
                fn from(v: $ty) -> Self {
                    PropertyValue::Int(i64::from(v))
                }
            }
        )+
    };
}

int_property!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for PropertyValue<'_> {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or_else(|_| PropertyValue::Opaque(v.to_string()), PropertyValue::Int)
    }
}

impl From<f64> for PropertyValue<'_> {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl<'a> From<&'a str> for PropertyValue<'a> {
    fn from(v: &'a str) -> Self {
        PropertyValue::Str(Cow::Borrowed(v))
    }
}

impl From<String> for PropertyValue<'_> {
    fn from(v: String) -> Self {
        PropertyValue::Str(Cow::Owned(v))
    }
}

impl From<Length> for PropertyValue<'_> {
    fn from(v: Length) -> Self {
        PropertyValue::Length(v)
    }
}

impl From<RGBColor> for PropertyValue<'_> {
    fn from(v: RGBColor) -> Self {
        PropertyValue::Color(v)
    }
}

impl From<EnumValue> for PropertyValue<'_> {
    fn from(v: EnumValue) -> Self {
        PropertyValue::Enum(v)
    }
}

impl<'a> From<&'a dyn Introspect> for PropertyValue<'a> {
    fn from(v: &'a dyn Introspect) -> Self {
        PropertyValue::Object(v)
    }
}

impl From<Rc<dyn Introspect>> for PropertyValue<'_> {
    fn from(v: Rc<dyn Introspect>) -> Self {
        PropertyValue::Shared(v)
    }
}

impl<'a, T: Into<PropertyValue<'a>>> From<Option<T>> for PropertyValue<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(PropertyValue::Null, Into::into)
    }
}

impl<'a, T: Into<PropertyValue<'a>>> From<Vec<T>> for PropertyValue<'a> {
    fn from(v: Vec<T>) -> Self {
        PropertyValue::Sequence(v.into_iter().map(Into::into).collect())
    }
}

/// One named entry of an identity, property or relationship block.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: Cow<'static, str>,
    /// Internal field, emitted only when private fields are requested
    pub private: bool,
    pub value: Result<PropertyValue<'a>>,
}

/// Ordered list of named fields making up one block.
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::introspection::Fields;
///
/// let fields = Fields::new()
///     .with("name", "Title 1")
///     .with("shape_id", 2)
///     .with_private("_rel_id", "rId3");
/// assert_eq!(fields.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Fields<'a> {
    entries: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a public field.
    pub fn with(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<PropertyValue<'a>>,
    ) -> Self {
        self.push(name, value);
        self
    }

    /// Add a field whose accessor may have failed.
    pub fn with_result<T: Into<PropertyValue<'a>>>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: Result<T>,
    ) -> Self {
        self.entries.push(Field {
            name: name.into(),
            private: false,
            value: value.map(Into::into),
        });
        self
    }

    /// Add an internal field.
    pub fn with_private(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<PropertyValue<'a>>,
    ) -> Self {
        self.entries.push(Field {
            name: name.into(),
            private: true,
            value: Ok(value.into()),
        });
        self
    }

    /// Add a public field in place.
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropertyValue<'a>>) {
        self.entries.push(Field {
            name: name.into(),
            private: false,
            value: Ok(value.into()),
        });
    }

    /// Append every field of `other`, keeping order.
    pub fn extend(mut self, other: Fields<'a>) -> Self {
        self.entries.extend(other.entries);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field<'a>> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = Field<'a>;
    type IntoIter = std::vec::IntoIter<Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// AI-facing summary block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiSummary {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub common_operations: Vec<String>,
}

impl AiSummary {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            summary: None,
            common_operations: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_operations<I, S>(mut self, operations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.common_operations
            .extend(operations.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::common::enums::MsoFillType;

    #[test]
    fn test_fields_keep_insertion_order() {
        let fields = Fields::new().with("b", 1).with("a", 2).with("c", true);
        let names: Vec<_> = fields.iter().map(|f| f.name.as_ref()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_fields_capture_failed_accessors() {
        let fields = Fields::new()
            .with_result("ok", Ok::<_, Error>(5))
            .with_result::<i64>("bad", Err(Error::unavailable("bad", "not here")));
        let entries: Vec<_> = fields.into_iter().collect();
        assert!(entries[0].value.is_ok());
        assert!(entries[1].value.is_err());
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(PropertyValue::from("x").type_label(), "str");
        assert_eq!(PropertyValue::from(3_i32).type_label(), "int");
        assert_eq!(
            PropertyValue::enumeration(&MsoFillType::Solid).type_label(),
            "MSO_FILL_TYPE"
        );
        assert_eq!(PropertyValue::from(None::<bool>).type_label(), "null");
    }

    #[test]
    fn test_ai_summary_serialization_skips_empty_summary() {
        let summary = AiSummary::new("A shape.").with_operations(["move", "resize"]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "description": "A shape.",
                "common_operations": ["move", "resize"],
            })
        );
    }
}
