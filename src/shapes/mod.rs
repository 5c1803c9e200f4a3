//! Shapes placed on slides, layouts and masters.
//!
//! Every concrete kind shares a [`BaseShape`] carrying id, name and geometry.
//! [`Shape`] is the closed set of kinds a shape tree can hold.

pub mod autoshape;
pub mod base;
pub mod group;
pub mod picture;
pub mod table;

pub use autoshape::AutoShape;
pub use base::{BaseShape, PlaceholderFormat};
pub use group::GroupShape;
pub use picture::{Crop, Image, Picture};
pub use table::{GraphicFrame, Table, TableCell, TableRow};

use serde_json::{Map, Value};

use crate::common::enums::MsoShapeType;
use crate::common::{Error, Result};
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, TreeChild};
use crate::text::TextFrame;

/// A shape of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    AutoShape(AutoShape),
    Picture(Picture),
    Group(GroupShape),
    GraphicFrame(GraphicFrame),
}

impl Shape {
    fn as_introspect(&self) -> &dyn Introspect {
        match self {
            Shape::AutoShape(s) => s,
            Shape::Picture(s) => s,
            Shape::Group(s) => s,
            Shape::GraphicFrame(s) => s,
        }
    }

    pub fn base(&self) -> &BaseShape {
        match self {
            Shape::AutoShape(s) => s.base(),
            Shape::Picture(s) => s.base(),
            Shape::Group(s) => s.base(),
            Shape::GraphicFrame(s) => s.base(),
        }
    }

    pub fn shape_type(&self) -> MsoShapeType {
        match self {
            Shape::AutoShape(s) => s.shape_type(),
            Shape::Picture(s) => s.shape_type(),
            Shape::Group(s) => s.shape_type(),
            Shape::GraphicFrame(s) => s.shape_type(),
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.base().shape_id()
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.base().name()
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.base().is_placeholder()
    }

    #[inline]
    pub fn has_text_frame(&self) -> bool {
        matches!(self, Shape::AutoShape(_))
    }

    /// Text frame of the shape.
    ///
    /// Only autoshapes carry text; other kinds fail.
    pub fn text_frame(&self) -> Result<&TextFrame> {
        match self {
            Shape::AutoShape(s) => Ok(s.text_frame()),
            other => Err(Error::unavailable(
                "text_frame",
                format!("{} shapes have no text frame", other.shape_type_label()),
            )),
        }
    }

    fn shape_type_label(&self) -> &'static str {
        match self {
            Shape::AutoShape(_) => "auto",
            Shape::Picture(_) => "picture",
            Shape::Group(_) => "group",
            Shape::GraphicFrame(_) => "graphic frame",
        }
    }
}

impl Introspect for Shape {
    fn type_name(&self) -> &'static str {
        self.as_introspect().type_name()
    }

    fn identity(&self) -> Result<Fields<'_>> {
        self.as_introspect().identity()
    }

    fn properties(&self) -> Result<Fields<'_>> {
        self.as_introspect().properties()
    }

    fn relationships(&self) -> Result<Fields<'_>> {
        self.as_introspect().relationships()
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        self.as_introspect().ai_summary()
    }

    fn tree_identity(&self) -> Map<String, Value> {
        self.as_introspect().tree_identity()
    }

    fn tree_geometry(&self) -> Option<Geometry> {
        self.as_introspect().tree_geometry()
    }

    fn content_summary(&self) -> String {
        self.as_introspect().content_summary()
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        self.as_introspect().tree_children()
    }

    fn root_access_path(&self) -> String {
        self.as_introspect().root_access_path()
    }
}

impl From<AutoShape> for Shape {
    fn from(shape: AutoShape) -> Self {
        Shape::AutoShape(shape)
    }
}

impl From<Picture> for Shape {
    fn from(shape: Picture) -> Self {
        Shape::Picture(shape)
    }
}

impl From<GroupShape> for Shape {
    fn from(shape: GroupShape) -> Self {
        Shape::Group(shape)
    }
}

impl From<GraphicFrame> for Shape {
    fn from(shape: GraphicFrame) -> Self {
        Shape::GraphicFrame(shape)
    }
}
