//! Fill format and gradient stops.

use crate::common::EnumMember;
use crate::common::enums::{MsoFillType, MsoPatternType};
use crate::common::{Error, Result};
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue};

use super::color::ColorFormat;

/// Color stop of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    position: f64,
    color: ColorFormat,
}

impl GradientStop {
    /// Create a stop at `position`, a fraction from 0.0 to 1.0.
    pub fn new(position: f64, color: ColorFormat) -> Result<Self> {
        if !(0.0..=1.0).contains(&position) {
            return Err(Error::InvalidValue(format!(
                "gradient stop position must be between 0.0 and 1.0, got {position}"
            )));
        }
        Ok(Self { position, color })
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> &ColorFormat {
        &self.color
    }
}

impl Introspect for GradientStop {
    fn type_name(&self) -> &'static str {
        "GradientStop"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Represents a color stop in a gradient."))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("position", self.position)
            .with("color", &self.color as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new("Represents a color stop in a gradient.")
            .with_summary(format!(
                "Gradient stop at {:.0}% position with {}",
                self.position * 100.0,
                self.color.describe()
            ))
            .with_operations([
                "adjust position (stop.position = 0.5)",
                "change color (stop.color.rgb = RGBColor(...))",
            ]))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Fill {
    Inherited,
    Background,
    Solid {
        fore_color: ColorFormat,
    },
    Patterned {
        pattern: Option<MsoPatternType>,
        fore_color: ColorFormat,
        back_color: ColorFormat,
    },
    Gradient {
        stops: Vec<GradientStop>,
        /// `None` for path (non-linear) gradients
        angle: Option<f64>,
    },
    Picture {
        r_id: String,
    },
    Group,
}

/// Fill of a shape, line, table cell or background.
#[derive(Debug, Clone, PartialEq)]
pub struct FillFormat {
    fill: Fill,
}

impl Default for FillFormat {
    fn default() -> Self {
        Self::inherited()
    }
}

impl FillFormat {
    /// No fill defined at this level; the effective fill is inherited.
    pub fn inherited() -> Self {
        Self {
            fill: Fill::Inherited,
        }
    }

    /// Transparent fill.
    pub fn background() -> Self {
        Self {
            fill: Fill::Background,
        }
    }

    pub fn solid(fore_color: ColorFormat) -> Self {
        Self {
            fill: Fill::Solid { fore_color },
        }
    }

    pub fn patterned(
        pattern: Option<MsoPatternType>,
        fore_color: ColorFormat,
        back_color: ColorFormat,
    ) -> Self {
        Self {
            fill: Fill::Patterned {
                pattern,
                fore_color,
                back_color,
            },
        }
    }

    /// Linear gradient at `angle` degrees.
    pub fn linear_gradient(angle: f64, stops: Vec<GradientStop>) -> Self {
        Self {
            fill: Fill::Gradient {
                stops,
                angle: Some(angle),
            },
        }
    }

    /// Radial, rectangular or shape-following gradient.
    pub fn path_gradient(stops: Vec<GradientStop>) -> Self {
        Self {
            fill: Fill::Gradient { stops, angle: None },
        }
    }

    /// Picture fill referencing an image relationship.
    pub fn picture(r_id: impl Into<String>) -> Self {
        Self {
            fill: Fill::Picture { r_id: r_id.into() },
        }
    }

    /// Fill taken from the enclosing group.
    pub fn group() -> Self {
        Self { fill: Fill::Group }
    }

    /// Fill type, `None` when the fill is inherited.
    pub fn fill_type(&self) -> Option<MsoFillType> {
        match self.fill {
            Fill::Inherited => None,
            Fill::Background => Some(MsoFillType::Background),
            Fill::Solid { .. } => Some(MsoFillType::Solid),
            Fill::Patterned { .. } => Some(MsoFillType::Patterned),
            Fill::Gradient { .. } => Some(MsoFillType::Gradient),
            Fill::Picture { .. } => Some(MsoFillType::Picture),
            Fill::Group => Some(MsoFillType::Group),
        }
    }

    /// Foreground color of a solid or patterned fill.
    pub fn fore_color(&self) -> Result<&ColorFormat> {
        match &self.fill {
            Fill::Solid { fore_color } | Fill::Patterned { fore_color, .. } => Ok(fore_color),
            _ => Err(Error::unavailable(
                "fore_color",
                format!("fill type {} has no foreground color", self.type_label()),
            )),
        }
    }

    /// Background color of a patterned fill.
    pub fn back_color(&self) -> Result<&ColorFormat> {
        match &self.fill {
            Fill::Patterned { back_color, .. } => Ok(back_color),
            _ => Err(Error::unavailable(
                "back_color",
                format!("fill type {} has no background color", self.type_label()),
            )),
        }
    }

    pub fn pattern(&self) -> Result<Option<MsoPatternType>> {
        match &self.fill {
            Fill::Patterned { pattern, .. } => Ok(*pattern),
            _ => Err(Error::unavailable("pattern", "fill is not patterned")),
        }
    }

    pub fn gradient_stops(&self) -> Result<&[GradientStop]> {
        match &self.fill {
            Fill::Gradient { stops, .. } => Ok(stops),
            _ => Err(Error::unavailable("gradient_stops", "fill is not a gradient")),
        }
    }

    /// Angle of a linear gradient in degrees.
    ///
    /// Fails for non-gradient fills and for path gradients, which have no
    /// single direction.
    pub fn gradient_angle(&self) -> Result<f64> {
        match &self.fill {
            Fill::Gradient {
                angle: Some(angle), ..
            } => Ok(*angle),
            Fill::Gradient { angle: None, .. } => Err(Error::unavailable(
                "gradient_angle",
                "not a linear gradient",
            )),
            _ => Err(Error::unavailable("gradient_angle", "fill is not a gradient")),
        }
    }

    /// Relationship id of a picture fill's image.
    pub fn r_id(&self) -> Result<&str> {
        match &self.fill {
            Fill::Picture { r_id } => Ok(r_id),
            _ => Err(Error::unavailable("r_id", "fill is not a picture fill")),
        }
    }

    fn type_label(&self) -> &'static str {
        self.fill_type().map_or("None", |t| t.name())
    }

    /// One-line description used in AI summaries of owning objects.
    pub(crate) fn describe(&self) -> String {
        match &self.fill {
            Fill::Inherited => "No explicit fill defined (fill is inherited)".to_string(),
            Fill::Background => "Background fill (transparent)".to_string(),
            Fill::Solid { fore_color } => format!("Solid fill with {}", fore_color.describe()),
            Fill::Patterned { pattern, .. } => format!(
                "Patterned fill: {}",
                pattern.map_or("Default", |p| p.name())
            ),
            Fill::Gradient { stops, angle } => match angle {
                Some(angle) => format!("{}-stop gradient at {angle:.0} degrees", stops.len()),
                None => format!("{}-stop gradient (non-linear)", stops.len()),
            },
            Fill::Picture { r_id } => format!("Picture fill (rId: {r_id})"),
            Fill::Group => "Group fill (inherits from group)".to_string(),
        }
    }
}

impl Introspect for FillFormat {
    fn type_name(&self) -> &'static str {
        "FillFormat"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Represents the fill formatting of an object."))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let mut fields =
            Fields::new().with("type", PropertyValue::enumeration_opt(self.fill_type()));

        let (fore, back, pattern, stops, angle, r_id) = match &self.fill {
            Fill::Solid { fore_color } => (
                PropertyValue::Object(fore_color),
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                Ok(PropertyValue::Null),
                PropertyValue::Null,
            ),
            Fill::Patterned {
                pattern,
                fore_color,
                back_color,
            } => (
                PropertyValue::Object(fore_color),
                PropertyValue::Object(back_color),
                PropertyValue::enumeration_opt(*pattern),
                PropertyValue::Null,
                Ok(PropertyValue::Null),
                PropertyValue::Null,
            ),
            Fill::Gradient { stops, .. } => (
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::objects(stops),
                self.gradient_angle().map(PropertyValue::Float),
                PropertyValue::Null,
            ),
            Fill::Picture { r_id } => (
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                Ok(PropertyValue::Null),
                PropertyValue::from(r_id.as_str()),
            ),
            Fill::Inherited | Fill::Background | Fill::Group => (
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                PropertyValue::Null,
                Ok(PropertyValue::Null),
                PropertyValue::Null,
            ),
        };

        fields.push("fore_color", fore);
        fields.push("back_color", back);
        fields.push("pattern", pattern);
        fields.push("gradient_stops", stops);
        fields = fields.with_result("gradient_angle", angle);
        fields.push("image_rId", r_id);
        Ok(fields)
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new("Describes the fill style of an element.")
            .with_summary(format!("{}.", self.describe()))
            .with_operations([
                "set solid color (fill.solid(), fill.fore_color = ...)",
                "set gradient (fill.gradient(), access fill.gradient_stops)",
                "set pattern (fill.patterned(), set fill.pattern)",
                "set picture (fill.blip(), set fill.rId)",
                "set no fill (fill.background())",
            ]))
    }
}
