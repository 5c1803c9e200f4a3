//! Line format.

use crate::common::enums::MsoLineDashStyle;
use crate::common::{EnumMember, Length, Result};
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue};

use super::color::ColorFormat;
use super::fill::FillFormat;

/// Outline of a shape or a connector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineFormat {
    fill: FillFormat,
    width: Length,
    dash_style: Option<MsoLineDashStyle>,
}

impl LineFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solid line of the given color and width.
    pub fn solid(color: ColorFormat, width: Length) -> Self {
        Self {
            fill: FillFormat::solid(color),
            width,
            dash_style: None,
        }
    }

    pub fn with_fill(mut self, fill: FillFormat) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    pub fn with_dash_style(mut self, dash_style: MsoLineDashStyle) -> Self {
        self.dash_style = Some(dash_style);
        self
    }

    #[inline]
    pub fn fill(&self) -> &FillFormat {
        &self.fill
    }

    /// Line color; only defined for solid and patterned line fills.
    pub fn color(&self) -> Result<&ColorFormat> {
        self.fill.fore_color()
    }

    /// Line width; zero means the width is inherited.
    #[inline]
    pub fn width(&self) -> Length {
        self.width
    }

    #[inline]
    pub fn dash_style(&self) -> Option<MsoLineDashStyle> {
        self.dash_style
    }
}

impl Introspect for LineFormat {
    fn type_name(&self) -> &'static str {
        "LineFormat"
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("fill", &self.fill as &dyn Introspect)
            .with("width", self.width)
            .with("dash_style", PropertyValue::enumeration_opt(self.dash_style)))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut parts = vec!["Line".to_string()];
        if self.width.emus() > 0 {
            parts.push(format!("{:.2}pt", self.width.points()));
        }
        if let Some(dash) = self.dash_style {
            parts.push(dash.name().to_lowercase().replace('_', " "));
        }
        let mut summary = parts.join(" ");
        match self.color() {
            Ok(color) => {
                summary.push_str(" with ");
                summary.push_str(&color.describe());
            },
            Err(_) => {
                summary.push_str(" (");
                summary.push_str(&self.fill.describe());
                summary.push(')');
            },
        }
        summary.push('.');

        Ok(AiSummary::new("Describes the outline of a shape.")
            .with_summary(summary)
            .with_operations([
                "set width (line.width = Pt(2))",
                "set color (line.color.rgb = RGBColor(...))",
                "set dash style (line.dash_style = MSO_LINE.DASH)",
            ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use serde_json::json;

    #[test]
    fn test_line_color_requires_solid_fill() {
        let line = LineFormat::solid(ColorFormat::from_rgb(RGBColor::new(0, 0, 255)), Length::from_points(2.0));
        assert_eq!(line.color().unwrap().rgb().unwrap().b, 255);
        assert!(LineFormat::new().color().is_err());
    }

    #[test]
    fn test_line_introspection() {
        let line = LineFormat::solid(ColorFormat::from_rgb(RGBColor::new(0, 0, 255)), Length::from_points(2.0))
            .with_dash_style(MsoLineDashStyle::Dash);
        let out = line.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["width"]["pt"], json!(2.0));
        assert_eq!(out["properties"]["dash_style"]["xml_value"], json!("dash"));
        assert_eq!(out["properties"]["fill"]["properties"]["type"]["name"], json!("SOLID"));
        assert_eq!(
            out["_llm_context"]["summary"],
            json!("Line 2.00pt dash with Solid RGB color: #0000FF (R:0, G:0, B:255).")
        );
    }

    #[test]
    fn test_default_line_summary() {
        let out = LineFormat::new().to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(
            out["_llm_context"]["summary"],
            json!("Line (No explicit fill defined (fill is inherited)).")
        );
    }
}
