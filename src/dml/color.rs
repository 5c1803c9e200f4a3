//! Color format.

use crate::common::enums::{MsoColorType, MsoThemeColor};
use crate::common::{EnumMember, Error, RGBColor, Result};
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColorSpec {
    None,
    Rgb(RGBColor),
    Theme(MsoThemeColor),
}

/// Color of a fill, line or font.
///
/// A color is either undefined (inherited), an explicit RGB value or a theme
/// color slot, optionally lightened or darkened by a brightness adjustment.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFormat {
    spec: ColorSpec,
    brightness: f64,
}

impl Default for ColorFormat {
    fn default() -> Self {
        Self::none()
    }
}

impl ColorFormat {
    /// A color that is not defined at this level.
    pub fn none() -> Self {
        Self {
            spec: ColorSpec::None,
            brightness: 0.0,
        }
    }

    pub fn from_rgb(rgb: RGBColor) -> Self {
        Self {
            spec: ColorSpec::Rgb(rgb),
            brightness: 0.0,
        }
    }

    pub fn from_theme(theme_color: MsoThemeColor) -> Self {
        Self {
            spec: ColorSpec::Theme(theme_color),
            brightness: 0.0,
        }
    }

    /// Set the brightness adjustment, from -1.0 (black) to 1.0 (white).
    pub fn with_brightness(mut self, brightness: f64) -> Result<Self> {
        if !(-1.0..=1.0).contains(&brightness) {
            return Err(Error::InvalidValue(format!(
                "brightness must be between -1.0 and 1.0, got {brightness}"
            )));
        }
        if matches!(self.spec, ColorSpec::None) {
            return Err(Error::unavailable(
                "brightness",
                "a color must be defined before brightness can be set",
            ));
        }
        self.brightness = brightness;
        Ok(self)
    }

    /// Kind of color, `None` when no color is defined.
    pub fn color_type(&self) -> Option<MsoColorType> {
        match self.spec {
            ColorSpec::None => None,
            ColorSpec::Rgb(_) => Some(MsoColorType::Rgb),
            ColorSpec::Theme(_) => Some(MsoColorType::Scheme),
        }
    }

    /// Explicit RGB value.
    ///
    /// Fails for theme colors and undefined colors.
    pub fn rgb(&self) -> Result<RGBColor> {
        match self.spec {
            ColorSpec::Rgb(rgb) => Ok(rgb),
            ColorSpec::Theme(_) => Err(Error::unavailable("rgb", "color is a theme color")),
            ColorSpec::None => Err(Error::unavailable("rgb", "no color is defined")),
        }
    }

    /// Theme color slot; `NotThemeColor` for RGB colors.
    pub fn theme_color(&self) -> Result<MsoThemeColor> {
        match self.spec {
            ColorSpec::Theme(theme) => Ok(theme),
            ColorSpec::Rgb(_) => Ok(MsoThemeColor::NotThemeColor),
            ColorSpec::None => Err(Error::unavailable("theme_color", "no color is defined")),
        }
    }

    #[inline]
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    fn brightness_phrase(&self) -> String {
        if self.brightness > 0.0 {
            format!(", lightened by {:.0}%", self.brightness * 100.0)
        } else if self.brightness < 0.0 {
            format!(", darkened by {:.0}%", -self.brightness * 100.0)
        } else {
            String::new()
        }
    }

    /// One-line description used in AI summaries of owning objects.
    pub(crate) fn describe(&self) -> String {
        match self.spec {
            ColorSpec::Rgb(rgb) => format!(
                "Solid RGB color: #{} (R:{}, G:{}, B:{})",
                rgb.to_hex(),
                rgb.r,
                rgb.g,
                rgb.b
            ),
            ColorSpec::Theme(theme) => {
                format!("Theme color: {}{}", theme.name(), self.brightness_phrase())
            },
            ColorSpec::None => {
                "No explicit color defined (color is inherited or not set)".to_string()
            },
        }
    }
}

impl Introspect for ColorFormat {
    fn type_name(&self) -> &'static str {
        "ColorFormat"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Represents a color definition."))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let rgb = match self.spec {
            ColorSpec::Rgb(rgb) => PropertyValue::Color(rgb),
            _ => PropertyValue::Null,
        };
        let theme_color = match self.spec {
            ColorSpec::Theme(theme) => PropertyValue::enumeration(&theme),
            _ => PropertyValue::Null,
        };
        Ok(Fields::new()
            .with("type", PropertyValue::enumeration_opt(self.color_type()))
            .with("rgb", rgb)
            .with("theme_color", theme_color)
            .with("brightness", self.brightness))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new("Represents a color setting.")
            .with_summary(format!("{}.", self.describe()))
            .with_operations(["set_rgb_color", "set_theme_color", "adjust_brightness"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use serde_json::json;

    #[test]
    fn test_rgb_accessors() {
        let color = ColorFormat::from_rgb(RGBColor::new(255, 0, 0));
        assert_eq!(color.color_type(), Some(MsoColorType::Rgb));
        assert_eq!(color.rgb().unwrap(), RGBColor::new(255, 0, 0));
        assert_eq!(color.theme_color().unwrap(), MsoThemeColor::NotThemeColor);
    }

    #[test]
    fn test_theme_color_has_no_rgb() {
        let color = ColorFormat::from_theme(MsoThemeColor::Accent1);
        assert!(matches!(
            color.rgb(),
            Err(Error::PropertyUnavailable { property: "rgb", .. })
        ));
        assert!(ColorFormat::none().theme_color().is_err());
    }

    #[test]
    fn test_brightness_validation() {
        let color = ColorFormat::from_theme(MsoThemeColor::Accent1);
        assert!(color.clone().with_brightness(1.5).is_err());
        assert!(ColorFormat::none().with_brightness(0.2).is_err());
        assert_eq!(color.with_brightness(-0.25).unwrap().brightness(), -0.25);
    }

    #[test]
    fn test_rgb_color_introspection() {
        let color = ColorFormat::from_rgb(RGBColor::new(255, 0, 0));
        let out = color.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["_object_type"], json!("ColorFormat"));
        assert_eq!(out["properties"]["type"]["name"], json!("RGB"));
        assert_eq!(out["properties"]["rgb"]["hex"], json!("FF0000"));
        assert_eq!(out["properties"]["theme_color"], json!(null));
        assert_eq!(
            out["_llm_context"]["summary"],
            json!("Solid RGB color: #FF0000 (R:255, G:0, B:0).")
        );
    }

    #[test]
    fn test_theme_color_introspection() {
        let color = ColorFormat::from_theme(MsoThemeColor::Accent1)
            .with_brightness(0.4)
            .unwrap();
        let out = color.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["rgb"], json!(null));
        assert_eq!(out["properties"]["theme_color"]["xml_value"], json!("accent1"));
        assert_eq!(
            out["_llm_context"]["summary"],
            json!("Theme color: ACCENT_1, lightened by 40%.")
        );
    }
}
