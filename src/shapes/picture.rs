//! Picture shapes.

use serde_json::{Map, Value};

use crate::common::enums::{MsoAutoShapeType, MsoShapeType};
use crate::common::{EnumMember, Error, Result};
use crate::dml::LineFormat;
use crate::introspection::{AiSummary, Fields, Geometry, Introspect, PropertyValue};

use super::base::{BaseShape, ShapeContent};

/// Image displayed by a picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    filename: Option<String>,
    content_type: String,
    ext: String,
    size: (u32, u32),
    dpi: (u32, u32),
    byte_len: usize,
}

impl Image {
    /// Image with the given MIME type, extension and pixel size.
    pub fn new(content_type: impl Into<String>, ext: impl Into<String>, width_px: u32, height_px: u32) -> Self {
        Self {
            filename: None,
            content_type: content_type.into(),
            ext: ext.into(),
            size: (width_px, height_px),
            dpi: (72, 72),
            byte_len: 0,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_dpi(mut self, horz: u32, vert: u32) -> Self {
        self.dpi = (horz, vert);
        self
    }

    pub fn with_byte_len(mut self, byte_len: usize) -> Self {
        self.byte_len = byte_len;
        self
    }

    /// Original filename, if the image was loaded from a file.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Pixel dimensions as width, height.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Resolution as horizontal, vertical dots per inch.
    pub fn dpi(&self) -> (u32, u32) {
        self.dpi
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    fn label(&self) -> String {
        match &self.filename {
            Some(name) => name.clone(),
            None => format!("streamed {} image", self.ext),
        }
    }
}

impl Introspect for Image {
    fn type_name(&self) -> &'static str {
        "Image"
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let size = vec![
            ("width".to_string(), PropertyValue::from(self.size.0)),
            ("height".to_string(), PropertyValue::from(self.size.1)),
        ];
        let dpi = vec![
            ("horz".to_string(), PropertyValue::from(self.dpi.0)),
            ("vert".to_string(), PropertyValue::from(self.dpi.1)),
        ];
        Ok(Fields::new()
            .with("filename", self.filename.as_deref())
            .with("content_type", self.content_type.as_str())
            .with("ext", self.ext.as_str())
            .with("size", PropertyValue::Mapping(size))
            .with("dpi", PropertyValue::Mapping(dpi))
            .with("byte_len", self.byte_len))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new(format!(
            "{} image, {}x{} px.",
            self.ext.to_uppercase(),
            self.size.0,
            self.size.1
        )))
    }
}

/// Crop fractions of a picture, each the share of the image cut from one side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Crop {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Crop {
    fn is_empty(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    fn describe(&self) -> String {
        let sides = [
            (self.left, "left"),
            (self.top, "top"),
            (self.right, "right"),
            (self.bottom, "bottom"),
        ];
        sides
            .iter()
            .filter(|(fraction, _)| *fraction != 0.0)
            .map(|(fraction, side)| format!("{:.1}% from {side}", fraction * 100.0))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Shape displaying an image.
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    base: BaseShape,
    image: Option<Image>,
    line: LineFormat,
    crop: Crop,
    mask: Option<MsoAutoShapeType>,
}

impl Picture {
    pub fn new(base: BaseShape, image: Image) -> Self {
        Self {
            base,
            image: Some(image),
            line: LineFormat::default(),
            crop: Crop::default(),
            mask: None,
        }
    }

    /// Picture placeholder or linked picture with no embedded image.
    pub fn empty(base: BaseShape) -> Self {
        Self {
            base,
            image: None,
            line: LineFormat::default(),
            crop: Crop::default(),
            mask: None,
        }
    }

    pub fn with_line(mut self, line: LineFormat) -> Self {
        self.line = line;
        self
    }

    /// Set the crop fractions; each must lie within `0.0..1.0`.
    pub fn with_crop(mut self, crop: Crop) -> Result<Self> {
        for value in [crop.left, crop.top, crop.right, crop.bottom] {
            if !(0.0..1.0).contains(&value) {
                return Err(Error::InvalidValue(format!(
                    "crop fraction must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        self.crop = crop;
        Ok(self)
    }

    /// Clip the image to a preset outline.
    pub fn with_mask(mut self, mask: MsoAutoShapeType) -> Self {
        self.mask = Some(mask);
        self
    }

    #[inline]
    pub fn base(&self) -> &BaseShape {
        &self.base
    }

    #[inline]
    pub fn shape_type(&self) -> MsoShapeType {
        MsoShapeType::Picture
    }

    /// Embedded image.
    ///
    /// Fails when the picture has no embedded image.
    pub fn image(&self) -> Result<&Image> {
        self.image
            .as_ref()
            .ok_or_else(|| Error::unavailable("image", "no embedded image"))
    }

    #[inline]
    pub fn line(&self) -> &LineFormat {
        &self.line
    }

    #[inline]
    pub fn crop(&self) -> Crop {
        self.crop
    }

    #[inline]
    pub fn auto_shape_mask_type(&self) -> Option<MsoAutoShapeType> {
        self.mask
    }

    fn image_label(&self) -> String {
        self.image
            .as_ref()
            .map_or_else(|| "no embedded image".to_string(), Image::label)
    }
}

impl Introspect for Picture {
    fn type_name(&self) -> &'static str {
        "Picture"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(self
            .base
            .identity_fields(self.type_name(), self.shape_type())
            .with(
                "description",
                format!("Picture shape displaying: {}", self.image_label()),
            ))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(self
            .base
            .geometry_fields()
            .with_result("image_details", self.image().map(|i| i as &dyn Introspect))
            .with("auto_shape_mask_type", PropertyValue::enumeration_opt(self.mask))
            .with("line", &self.line as &dyn Introspect)
            .with("crop_left", self.crop.left)
            .with("crop_top", self.crop.top)
            .with("crop_right", self.crop.right)
            .with("crop_bottom", self.crop.bottom))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut summary = self.base.ai_summary(&format!("A {} shape", self.shape_type().name()));

        let label = self.image_label();
        let mut description = format!(
            "{} displaying: {label}.",
            summary.description.trim_end_matches('.')
        );
        if let Some(mask) = self.mask {
            description.push_str(&format!(" Masked as {}.", mask.name()));
        }
        if !self.crop.is_empty() {
            description.push_str(&format!(" Cropped {}.", self.crop.describe()));
        }
        summary.description = description;
        summary.summary = Some(format!("Picture: {label}"));

        Ok(summary.with_operations([
            "change image source (replace with new image)",
            "adjust crop properties (crop_left, crop_top, crop_right, crop_bottom)",
            "set mask shape via auto_shape_type property",
            "modify border line properties",
        ]))
    }

    fn tree_identity(&self) -> Map<String, Value> {
        self.base.tree_identity(self.type_name(), self.shape_type())
    }

    fn tree_geometry(&self) -> Option<Geometry> {
        Some(self.base.geometry())
    }

    fn content_summary(&self) -> String {
        self.base
            .content_summary(self.type_name(), self.shape_type(), ShapeContent::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use serde_json::json;

    fn logo() -> Picture {
        Picture::new(
            BaseShape::new(7, "Logo"),
            Image::new("image/png", "png", 640, 480).with_filename("logo.png"),
        )
    }

    #[test]
    fn test_crop_validation() {
        let crop = Crop {
            left: 1.5,
            ..Crop::default()
        };
        assert!(logo().with_crop(crop).is_err());
    }

    #[test]
    fn test_picture_introspection() {
        let picture = logo()
            .with_mask(MsoAutoShapeType::Oval)
            .with_crop(Crop {
                left: 0.1,
                ..Crop::default()
            })
            .unwrap();
        let out = picture.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["_identity"]["description"], json!("Picture shape displaying: logo.png"));
        assert_eq!(out["properties"]["image_details"]["properties"]["size"], json!({"width": 640, "height": 480}));
        assert_eq!(out["properties"]["auto_shape_mask_type"]["name"], json!("OVAL"));
        assert_eq!(
            out["_llm_context"]["description"],
            json!("A PICTURE shape named 'Logo' (ID: 7) displaying: logo.png. Masked as OVAL. Cropped 10.0% from left.")
        );
        assert_eq!(out["_llm_context"]["summary"], json!("Picture: logo.png"));
    }

    #[test]
    fn test_missing_image_is_error_stub() {
        let out = Picture::empty(BaseShape::new(8, "Picture Placeholder 2"))
            .to_dict(&IntrospectionOptions::default())
            .unwrap();
        assert_eq!(out["properties"]["image_details"]["error_in"], json!("image_details"));
        assert_eq!(out["_llm_context"]["summary"], json!("Picture: no embedded image"));
    }

    #[test]
    fn test_picture_tree_summary() {
        assert_eq!(logo().get_tree(None).content_summary, "PICTURE 'Logo'");
        let unnamed = Picture::new(BaseShape::new(3, "Picture 2"), Image::new("image/jpeg", "jpg", 1, 1));
        assert_eq!(unnamed.get_tree(None).content_summary, "PICTURE");
    }
}
