//! Character formatting.

use crate::common::{Length, Result};
use crate::dml::ColorFormat;
use crate::introspection::{AiSummary, Fields, Introspect};

/// Character properties of a run, a paragraph default or a text frame
/// default.
///
/// Every attribute is optional; `None` means the value is inherited from the
/// style hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    name: Option<String>,
    size: Option<Length>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    color: ColorFormat,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: Length) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn with_color(mut self, color: ColorFormat) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn size(&self) -> Option<Length> {
        self.size
    }

    pub fn bold(&self) -> Option<bool> {
        self.bold
    }

    pub fn italic(&self) -> Option<bool> {
        self.italic
    }

    pub fn underline(&self) -> Option<bool> {
        self.underline
    }

    pub fn color(&self) -> &ColorFormat {
        &self.color
    }
}

impl Introspect for Font {
    fn type_name(&self) -> &'static str {
        "Font"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Font settings for text formatting"))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("name", self.name.as_deref())
            .with("size", self.size)
            .with("bold", self.bold)
            .with("italic", self.italic)
            .with("underline", self.underline)
            .with("color", &self.color as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name.clone());
        }
        if let Some(size) = self.size {
            parts.push(format!("{:.0}pt", size.points()));
        }
        for (flag, label) in [(self.bold, "bold"), (self.italic, "italic"), (self.underline, "underlined")] {
            if flag == Some(true) {
                parts.push(label.to_string());
            }
        }

        let summary = if parts.is_empty() {
            "Font with inherited settings.".to_string()
        } else {
            format!("Font: {}.", parts.join(", "))
        };

        Ok(AiSummary::new("Font settings for text formatting.")
            .with_summary(summary)
            .with_operations([
                "set typeface (font.name = 'Arial')",
                "set size (font.size = Pt(18))",
                "toggle bold/italic/underline",
                "set color (font.color.rgb = RGBColor(...))",
            ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use serde_json::json;

    #[test]
    fn test_font_introspection() {
        let font = Font::new()
            .with_name("Calibri")
            .with_size(Length::from_points(18.0))
            .with_bold(true);
        let out = font.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["name"], json!("Calibri"));
        assert_eq!(out["properties"]["size"]["pt"], json!(18.0));
        assert_eq!(out["properties"]["bold"], json!(true));
        assert_eq!(out["properties"]["italic"], json!(null));
        assert_eq!(out["_llm_context"]["summary"], json!("Font: Calibri, 18pt, bold."));
    }

    #[test]
    fn test_inherited_font_summary() {
        let out = Font::new().to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["_llm_context"]["summary"], json!("Font with inherited settings."));
    }
}
