//! Data and introspection scaffolding shared by every shape kind.

use serde_json::{Map, Value};

use crate::common::enums::{MsoShapeType, PpPlaceholderType};
use crate::common::{EnumMember, Length, Result};
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, PropertyValue};
use crate::text::abbreviate;

/// Text longer than this is abbreviated in tree summaries.
const SUMMARY_TEXT_LIMIT: usize = 30;

/// Placeholder attributes of a shape inheriting from a layout or master.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderFormat {
    idx: u32,
    ph_type: Option<PpPlaceholderType>,
}

impl PlaceholderFormat {
    pub fn new(idx: u32, ph_type: PpPlaceholderType) -> Self {
        Self {
            idx,
            ph_type: Some(ph_type),
        }
    }

    /// Placeholder with no explicit type, treated as an object placeholder by
    /// PowerPoint.
    pub fn untyped(idx: u32) -> Self {
        Self { idx, ph_type: None }
    }

    #[inline]
    pub fn idx(&self) -> u32 {
        self.idx
    }

    #[inline]
    pub fn ph_type(&self) -> Option<PpPlaceholderType> {
        self.ph_type
    }

    fn type_label(&self) -> &'static str {
        self.ph_type.map_or("UNDEFINED_TYPE", |t| t.name())
    }
}

impl Introspect for PlaceholderFormat {
    fn type_name(&self) -> &'static str {
        "_PlaceholderFormat"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with(
                "description",
                format!(
                    "Details for a {} placeholder (idx: {}).",
                    self.type_label(),
                    self.idx
                ),
            ))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("idx", self.idx)
            .with("type", PropertyValue::enumeration_opt(self.ph_type)))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let description = format!(
            "Placeholder attributes: Type is {}, Index is {}.",
            self.type_label(),
            self.idx
        );
        Ok(AiSummary::new(description.clone())
            .with_summary(description)
            .with_operations([
                "identify placeholder role (e.g., TITLE, BODY, PICTURE)",
                "get unique index (idx) for matching with layout/master",
            ]))
    }
}

/// Attributes common to every shape: id, name, position, size and rotation.
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::common::Length;
/// use pptx_introspect::shapes::BaseShape;
///
/// let base = BaseShape::new(2, "Title 1")
///     .with_position(Length::from_inches(0.5), Length::from_inches(0.5))
///     .with_size(Length::from_inches(9.0), Length::from_inches(1.25));
/// assert_eq!(base.name(), "Title 1");
/// assert_eq!(base.width().inches(), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseShape {
    shape_id: u32,
    name: String,
    left: Length,
    top: Length,
    width: Length,
    height: Length,
    /// Clockwise rotation in degrees
    rotation: f64,
    placeholder: Option<PlaceholderFormat>,
}

impl BaseShape {
    pub fn new(shape_id: u32, name: impl Into<String>) -> Self {
        Self {
            shape_id,
            name: name.into(),
            left: Length::ZERO,
            top: Length::ZERO,
            width: Length::ZERO,
            height: Length::ZERO,
            rotation: 0.0,
            placeholder: None,
        }
    }

    pub fn with_position(mut self, left: Length, top: Length) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn with_size(mut self, width: Length, height: Length) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the rotation, normalized into `0.0..360.0`.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees.rem_euclid(360.0);
        self
    }

    pub fn with_placeholder(mut self, placeholder: PlaceholderFormat) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn left(&self) -> Length {
        self.left
    }

    #[inline]
    pub fn top(&self) -> Length {
        self.top
    }

    #[inline]
    pub fn width(&self) -> Length {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Length {
        self.height
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn placeholder(&self) -> Option<&PlaceholderFormat> {
        self.placeholder.as_ref()
    }

    /// Identity block shared by all shapes.
    pub(crate) fn identity_fields(
        &self,
        class_name: &'static str,
        shape_type: MsoShapeType,
    ) -> Fields<'_> {
        Fields::new()
            .with("class_name", class_name)
            .with("shape_id", self.shape_id)
            .with("name", self.name.as_str())
            .with("is_placeholder", self.is_placeholder())
            .with("shape_type", PropertyValue::enumeration(&shape_type))
            .with(
                "placeholder_details",
                self.placeholder.as_ref().map(|p| p as &dyn Introspect),
            )
    }

    /// Position and size fields that open every shape's property block.
    pub(crate) fn geometry_fields(&self) -> Fields<'_> {
        Fields::new()
            .with("left", self.left)
            .with("top", self.top)
            .with("width", self.width)
            .with("height", self.height)
            .with("rotation", self.rotation)
    }

    /// Opening sentence of a shape's AI description, e.g.
    /// `A PLACEHOLDER shape named 'Title 1' (ID: 2) serving as a TITLE placeholder.`
    pub(crate) fn describe(&self, lead: &str) -> String {
        let mut description = format!("{lead} named '{}' (ID: {})", self.name, self.shape_id);
        if let Some(placeholder) = &self.placeholder {
            match placeholder.ph_type {
                Some(ph_type) => {
                    description.push_str(&format!(" serving as a {} placeholder", ph_type.name()))
                },
                None => description.push_str(" serving as a placeholder"),
            }
        }
        description.push('.');
        description
    }

    /// AI summary shared by all shapes; kinds extend the operation list.
    pub(crate) fn ai_summary(&self, lead: &str) -> AiSummary {
        let summary = AiSummary::new(self.describe(lead))
            .with_operations([
                "access geometry (left, top, width, height, rotation)",
                "modify position and size",
                "change name",
                "access shape type information",
            ]);
        if self.is_placeholder() {
            summary.with_operations(["access placeholder format details"])
        } else {
            summary
        }
    }

    pub(crate) fn tree_identity(
        &self,
        class_name: &'static str,
        shape_type: MsoShapeType,
    ) -> Map<String, Value> {
        let mut identity = Map::new();
        identity.insert("shape_id".into(), self.shape_id.into());
        identity.insert("name".into(), self.name.clone().into());
        identity.insert("class_name".into(), class_name.into());
        identity.insert("shape_type".into(), shape_type.name().into());
        if let Some(placeholder) = &self.placeholder {
            identity.insert("placeholder_type".into(), placeholder.type_label().into());
            identity.insert("placeholder_idx".into(), placeholder.idx.into());
        }
        identity
    }

    pub(crate) fn geometry(&self) -> Geometry {
        Geometry::new(self.left, self.top, self.width, self.height).with_rotation(self.rotation)
    }

    /// One-line tree summary, e.g. `PLACEHOLDER (TITLE placeholder) Text: 'Quarterly results'`.
    ///
    /// The name is left out when it only repeats the default naming pattern.
    pub(crate) fn content_summary(
        &self,
        class_name: &str,
        shape_type: MsoShapeType,
        content: ShapeContent<'_>,
    ) -> String {
        let mut parts = vec![shape_type.name().to_string()];
        if !self.name.is_empty()
            && !self.name.starts_with(class_name)
            && !self.name.starts_with("Shape")
        {
            parts.push(format!("'{}'", self.name));
        }
        if let Some(placeholder) = &self.placeholder {
            match placeholder.ph_type {
                Some(ph_type) => parts.push(format!("({} placeholder)", ph_type.name())),
                None => parts.push("(placeholder)".to_string()),
            }
        }
        match content {
            ShapeContent::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    parts.push("(empty text)".to_string());
                } else {
                    let flat = text.replace(['\n', '\u{b}'], " ");
                    parts.push(format!("Text: '{}'", abbreviate(&flat, SUMMARY_TEXT_LIMIT)));
                }
            },
            ShapeContent::Table => parts.push("(contains table)".to_string()),
            ShapeContent::None => {},
        }
        parts.join(" ")
    }
}

/// What a shape holds, as reported in its tree summary.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ShapeContent<'a> {
    None,
    Text(&'a str),
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> BaseShape {
        BaseShape::new(2, "Title 1").with_placeholder(PlaceholderFormat::new(0, PpPlaceholderType::Title))
    }

    #[test]
    fn test_rotation_is_normalized() {
        assert_eq!(BaseShape::new(1, "x").with_rotation(-90.0).rotation(), 270.0);
        assert_eq!(BaseShape::new(1, "x").with_rotation(360.0).rotation(), 0.0);
    }

    #[test]
    fn test_describe_placeholder() {
        assert_eq!(
            title().describe("A PLACEHOLDER shape"),
            "A PLACEHOLDER shape named 'Title 1' (ID: 2) serving as a TITLE placeholder."
        );
        let untyped = BaseShape::new(4, "Content").with_placeholder(PlaceholderFormat::untyped(1));
        assert!(untyped.describe("A shape").ends_with("serving as a placeholder."));
    }

    #[test]
    fn test_content_summary() {
        let text = "Quarterly results for the northern region";
        assert_eq!(
            title().content_summary("AutoShape", MsoShapeType::Placeholder, ShapeContent::Text(text)),
            "PLACEHOLDER 'Title 1' (TITLE placeholder) Text: 'Quarterly results for the n...'"
        );
        assert_eq!(
            BaseShape::new(3, "Shape 3").content_summary("AutoShape", MsoShapeType::AutoShape, ShapeContent::Text("")),
            "AUTO_SHAPE (empty text)"
        );
        assert_eq!(
            BaseShape::new(5, "Table 4").content_summary("GraphicFrame", MsoShapeType::Table, ShapeContent::Table),
            "TABLE 'Table 4' (contains table)"
        );
    }

    #[test]
    fn test_tree_identity_includes_placeholder() {
        let identity = title().tree_identity("AutoShape", MsoShapeType::Placeholder);
        assert_eq!(identity["placeholder_type"], "TITLE");
        assert_eq!(identity["placeholder_idx"], 0);
        assert_eq!(identity["shape_type"], "PLACEHOLDER");
    }
}
