//! Group shapes.

use serde_json::{Map, Value};

use crate::common::enums::MsoShapeType;
use crate::common::{EnumMember, Result};
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, PropertyValue, TreeChild};

use super::Shape;
use super::base::BaseShape;

/// Shape containing other shapes, moved and sized as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupShape {
    base: BaseShape,
    shapes: Vec<Shape>,
}

impl GroupShape {
    pub fn new(base: BaseShape) -> Self {
        Self {
            base,
            shapes: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    #[inline]
    pub fn base(&self) -> &BaseShape {
        &self.base
    }

    #[inline]
    pub fn shape_type(&self) -> MsoShapeType {
        MsoShapeType::Group
    }

    /// Member shapes in z-order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Introspect for GroupShape {
    fn type_name(&self) -> &'static str {
        "GroupShape"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(self.base.identity_fields(self.type_name(), self.shape_type()))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(self
            .base
            .geometry_fields()
            .with("shapes", PropertyValue::objects(&self.shapes)))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let summary = self
            .base
            .ai_summary(&format!("A {} shape", self.shape_type().name()));
        Ok(summary
            .with_summary(format!("Group of {} shape(s).", self.shapes.len()))
            .with_operations(["iterate member shapes (group.shapes)", "ungroup or regroup shapes"]))
    }

    fn tree_identity(&self) -> Map<String, Value> {
        self.base.tree_identity(self.type_name(), self.shape_type())
    }

    fn tree_geometry(&self) -> Option<Geometry> {
        Some(self.base.geometry())
    }

    fn content_summary(&self) -> String {
        let mut parts = vec!["Group".to_string()];
        let name = self.base.name();
        if !name.is_empty() && !name.starts_with("Group") && !name.starts_with("Grouped") {
            parts.push(format!("'{name}'"));
        }
        match self.shapes.len() {
            0 => parts.push("(empty)".to_string()),
            1 => parts.push("(1 shape)".to_string()),
            n => parts.push(format!("({n} shapes)")),
        }
        parts.join(" ")
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| TreeChild::indexed("shapes", i, shape as &dyn Introspect))
            .collect()
    }

    fn root_access_path(&self) -> String {
        format!("group_shape_{}", self.base.shape_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;
    use crate::common::enums::MsoAutoShapeType;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use crate::shapes::{AutoShape, Image, Picture};
    use crate::text::TextFrame;
    use serde_json::json;

    fn chart_group() -> GroupShape {
        GroupShape::new(
            BaseShape::new(10, "Chart Group")
                .with_size(Length::from_inches(4.0), Length::from_inches(3.0)),
        )
        .with_shape(
            AutoShape::new(BaseShape::new(11, "Bar 1"), MsoAutoShapeType::Rectangle)
                .with_text_frame(TextFrame::from_text("Q1")),
        )
        .with_shape(AutoShape::new(BaseShape::new(12, "Bar 2"), MsoAutoShapeType::Rectangle))
        .with_shape(Picture::new(
            BaseShape::new(13, "Legend"),
            Image::new("image/png", "png", 100, 40),
        ))
    }

    #[test]
    fn test_group_tree() {
        let tree = chart_group().get_tree(None);
        assert_eq!(tree.access_path, "group_shape_10");
        assert_eq!(tree.content_summary, "Group 'Chart Group' (3 shapes)");
        let children = tree.children.as_ref().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].access_path, "group_shape_10.shapes[2]");
        assert_eq!(children[0].content_summary, "AUTO_SHAPE 'Bar 1' Text: 'Q1'");
    }

    #[test]
    fn test_group_content_summary_variants() {
        assert_eq!(GroupShape::new(BaseShape::new(1, "Group 1")).content_summary(), "Group (empty)");
        let single = GroupShape::new(BaseShape::new(1, "Icons"))
            .with_shape(AutoShape::new(BaseShape::new(2, "Star"), MsoAutoShapeType::Star5Point));
        assert_eq!(single.content_summary(), "Group 'Icons' (1 shape)");
    }

    #[test]
    fn test_resolve_member_by_group_path() {
        let group = chart_group();
        let legend = group.resolve_path("group_shape_10.shapes[2]").unwrap().unwrap();
        assert_eq!(legend.type_name(), "Picture");
        assert!(group.resolve_path("group_shape_10.shapes[7]").unwrap().is_none());
    }

    #[test]
    fn test_group_introspection() {
        let out = chart_group().to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["_identity"]["shape_type"]["name"], json!("GROUP"));
        let shapes = out["properties"]["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[2]["_object_type"], json!("Picture"));
        assert_eq!(out["_llm_context"]["summary"], json!("Group of 3 shape(s)."));
    }
}
