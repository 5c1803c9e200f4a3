//! Autoshapes: preset geometry, text boxes and freeforms.

use serde_json::{Map, Value};

use crate::common::enums::{MsoAutoShapeType, MsoShapeType};
use crate::common::{EnumMember, Error, Result};
use crate::dml::{FillFormat, LineFormat};
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, PropertyValue};
use crate::text::TextFrame;

use super::base::{BaseShape, ShapeContent};

/// Characters of text quoted in an autoshape's AI summary.
const SUMMARY_PREVIEW_CHARS: usize = 30;

/// Shape drawn from preset or custom geometry, with fill, outline and text.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoShape {
    base: BaseShape,
    /// Preset geometry; `None` for a freeform with custom geometry
    auto_shape_type: Option<MsoAutoShapeType>,
    is_text_box: bool,
    fill: FillFormat,
    line: LineFormat,
    text_frame: TextFrame,
    adjustments: Vec<f64>,
}

impl AutoShape {
    /// Shape with preset geometry.
    pub fn new(base: BaseShape, auto_shape_type: MsoAutoShapeType) -> Self {
        Self::with_geometry(base, Some(auto_shape_type), false)
    }

    /// Rectangle flagged as a text box.
    pub fn text_box(base: BaseShape) -> Self {
        Self::with_geometry(base, Some(MsoAutoShapeType::Rectangle), true)
    }

    /// Shape with custom geometry.
    pub fn freeform(base: BaseShape) -> Self {
        Self::with_geometry(base, None, false)
    }

    fn with_geometry(
        base: BaseShape,
        auto_shape_type: Option<MsoAutoShapeType>,
        is_text_box: bool,
    ) -> Self {
        Self {
            base,
            auto_shape_type,
            is_text_box,
            fill: FillFormat::default(),
            line: LineFormat::default(),
            text_frame: TextFrame::default(),
            adjustments: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: FillFormat) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_line(mut self, line: LineFormat) -> Self {
        self.line = line;
        self
    }

    pub fn with_text_frame(mut self, text_frame: TextFrame) -> Self {
        self.text_frame = text_frame;
        self
    }

    /// Set the adjustment handle values, each normally within `0.0..=1.0`.
    pub fn with_adjustments(mut self, adjustments: impl IntoIterator<Item = f64>) -> Self {
        self.adjustments = adjustments.into_iter().collect();
        self
    }

    #[inline]
    pub fn base(&self) -> &BaseShape {
        &self.base
    }

    /// Shape category, derived from placeholder status and geometry.
    pub fn shape_type(&self) -> MsoShapeType {
        if self.base.is_placeholder() {
            MsoShapeType::Placeholder
        } else if self.is_text_box {
            MsoShapeType::TextBox
        } else if self.auto_shape_type.is_none() {
            MsoShapeType::Freeform
        } else {
            MsoShapeType::AutoShape
        }
    }

    /// Preset geometry.
    ///
    /// Fails for freeform shapes, which have no preset.
    pub fn auto_shape_type(&self) -> Result<MsoAutoShapeType> {
        self.auto_shape_type.ok_or_else(|| {
            Error::unavailable("auto_shape_type", "shape has custom geometry (freeform)")
        })
    }

    #[inline]
    pub fn fill(&self) -> &FillFormat {
        &self.fill
    }

    #[inline]
    pub fn line(&self) -> &LineFormat {
        &self.line
    }

    #[inline]
    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    #[inline]
    pub fn adjustments(&self) -> &[f64] {
        &self.adjustments
    }

    fn lead(&self) -> String {
        match (self.shape_type(), self.auto_shape_type) {
            (MsoShapeType::AutoShape, Some(preset)) => {
                format!("An AutoShape of type {}", preset.name())
            },
            (MsoShapeType::TextBox, _) => "A Text Box shape".to_string(),
            (MsoShapeType::Placeholder, _) => "A placeholder shape".to_string(),
            (MsoShapeType::Freeform, _) => "A Freeform shape".to_string(),
            _ => "A shape".to_string(),
        }
    }
}

impl Introspect for AutoShape {
    fn type_name(&self) -> &'static str {
        "Shape"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        let mut identity = self.base.identity_fields(self.type_name(), self.shape_type());
        if let (MsoShapeType::AutoShape, Some(preset)) = (self.shape_type(), self.auto_shape_type) {
            identity.push("auto_shape_type_details", PropertyValue::enumeration(&preset));
        }
        Ok(identity)
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let adjustments: PropertyValue<'_> = if self.adjustments.is_empty() {
            PropertyValue::Null
        } else {
            self.adjustments.clone().into()
        };
        Ok(self
            .base
            .geometry_fields()
            .with_result(
                "auto_shape_type",
                self.auto_shape_type().map(|t| PropertyValue::enumeration(&t)),
            )
            .with("adjustments", adjustments)
            .with("fill", &self.fill as &dyn Introspect)
            .with("line", &self.line as &dyn Introspect)
            .with("text_frame", &self.text_frame as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut summary = self.base.ai_summary(&self.lead());

        let mut parts = vec![summary.description.trim_end_matches('.').to_string()];
        let text = self.text_frame.text();
        if !text.is_empty() {
            let mut preview: String = text
                .chars()
                .take(SUMMARY_PREVIEW_CHARS)
                .map(|c| if c == '\n' || c == '\u{b}' { ' ' } else { c })
                .collect();
            if text.chars().count() > SUMMARY_PREVIEW_CHARS {
                preview.push_str("...");
            }
            parts.push(format!("Contains text: \"{preview}\""));
        }
        if !self.adjustments.is_empty() {
            parts.push(format!("Has {} adjustment handle(s)", self.adjustments.len()));
        }
        summary.summary = Some(format!("{}.", parts.join(". ")));

        summary = summary.with_operations([
            "access/modify text_frame",
            "change fill properties",
            "change line properties",
        ]);
        if !self.adjustments.is_empty() {
            summary = summary.with_operations(["modify adjustment values"]);
        }
        Ok(summary)
    }

    fn tree_identity(&self) -> Map<String, Value> {
        self.base.tree_identity(self.type_name(), self.shape_type())
    }

    fn tree_geometry(&self) -> Option<Geometry> {
        Some(self.base.geometry())
    }

    fn content_summary(&self) -> String {
        let text = self.text_frame.text();
        self.base
            .content_summary(self.type_name(), self.shape_type(), ShapeContent::Text(&text))
    }
}
