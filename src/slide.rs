//! Slide masters, slide layouts and slides.
//!
//! Masters own their layouts and each layout points back at its master, so
//! the pair forms a reference cycle. Layouts hold a [`Weak`] reference to
//! keep the cycle from leaking; walking it through introspection still meets
//! the master twice and yields a circular-reference stub.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde_json::{Map, Value};

use crate::common::enums::PpPlaceholderType;
use crate::common::{Error, Result};
use crate::dml::FillFormat;
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue, TreeChild};
use crate::shapes::Shape;
use crate::text::{TextFrame, preview};

/// Compact `{placeholder_idx, placeholder_type, shape_id, name}` entries for
/// the placeholder shapes of a shape list.
fn placeholder_entries(shapes: &[Shape]) -> PropertyValue<'_> {
    let entries = shapes
        .iter()
        .filter_map(|shape| {
            let placeholder = shape.base().placeholder()?;
            Some(PropertyValue::Mapping(vec![
                ("placeholder_idx".into(), placeholder.idx().into()),
                (
                    "placeholder_type".into(),
                    PropertyValue::enumeration_opt(placeholder.ph_type()),
                ),
                ("shape_id".into(), shape.shape_id().into()),
                ("name".into(), shape.name().into()),
            ]))
        })
        .collect::<Vec<_>>();
    PropertyValue::Sequence(entries)
}

fn shape_children(shapes: &[Shape]) -> Vec<TreeChild<'_>> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| TreeChild::indexed("shapes", i, shape as &dyn Introspect))
        .collect()
}

fn count_placeholders(shapes: &[Shape]) -> usize {
    shapes.iter().filter(|s| s.is_placeholder()).count()
}

/// Root of the design hierarchy: master, then layout, then slide.
#[derive(Debug, Default)]
pub struct SlideMaster {
    name: String,
    shapes: Vec<Shape>,
    background: FillFormat,
    layouts: RefCell<Vec<Rc<SlideLayout>>>,
}

impl SlideMaster {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn with_background(mut self, background: FillFormat) -> Self {
        self.background = background;
        self
    }

    /// Create a layout inheriting from this master and register it.
    pub fn add_layout(self: &Rc<Self>, name: impl Into<String>, shapes: Vec<Shape>) -> Rc<SlideLayout> {
        let layout = Rc::new(SlideLayout {
            name: name.into(),
            master: Rc::downgrade(self),
            shapes,
        });
        self.layouts.borrow_mut().push(Rc::clone(&layout));
        layout
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn background(&self) -> &FillFormat {
        &self.background
    }

    pub fn slide_layouts(&self) -> Vec<Rc<SlideLayout>> {
        self.layouts.borrow().clone()
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Default Master"
        } else {
            &self.name
        }
    }
}

impl Introspect for SlideMaster {
    fn type_name(&self) -> &'static str {
        "SlideMaster"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", format!("Slide Master: '{}'", self.display_name()))
            .with("name", self.name.as_str()))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("background_fill", &self.background as &dyn Introspect)
            .with("shapes", PropertyValue::objects(&self.shapes))
            .with("placeholders", placeholder_entries(&self.shapes))
            .with(
                "slide_layouts",
                PropertyValue::shared_objects(&self.layouts.borrow()),
            ))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let layout_count = self.layouts.borrow().len();
        let placeholder_count = count_placeholders(&self.shapes);
        let shape_count = self.shapes.len() - placeholder_count;
        let description = format!(
            "Slide Master '{}' defines the foundational design template for {layout_count} slide layout(s). \
             Contains {placeholder_count} default placeholders and {shape_count} non-placeholder shapes.",
            self.display_name()
        );
        Ok(AiSummary::new(description)
            .with_summary(format!(
                "Master '{}' with {layout_count} layout(s).",
                self.display_name()
            ))
            .with_operations([
                "Modify master placeholders to change default formatting for all slides",
                "Add persistent background elements (logos, graphics) that appear on all slides",
                "Configure color mapping between theme colors and slide elements",
                "Set up default text styles for titles, body text, and other placeholder types",
                "Create new slide layouts based on this master",
            ]))
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        shape_children(&self.shapes)
    }

    fn content_summary(&self) -> String {
        format!(
            "Master '{}' ({} layouts, {} shapes)",
            self.display_name(),
            self.layouts.borrow().len(),
            self.shapes.len()
        )
    }
}

/// Arrangement of placeholders and static shapes that slides are based on.
#[derive(Debug)]
pub struct SlideLayout {
    name: String,
    master: Weak<SlideMaster>,
    shapes: Vec<Shape>,
}

impl SlideLayout {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Master this layout inherits from.
    ///
    /// Fails once the master has been dropped.
    pub fn slide_master(&self) -> Result<Rc<SlideMaster>> {
        self.master
            .upgrade()
            .ok_or_else(|| Error::unavailable("slide_master", "slide master is no longer alive"))
    }
}

impl Introspect for SlideLayout {
    fn type_name(&self) -> &'static str {
        "SlideLayout"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", format!("Slide Layout: '{}'", self.name))
            .with("name", self.name.as_str()))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        let non_placeholders = self
            .shapes
            .iter()
            .filter(|s| !s.is_placeholder())
            .map(|s| PropertyValue::Object(s as &dyn Introspect))
            .collect::<Vec<_>>();
        Ok(Fields::new()
            .with("non_placeholder_shapes", non_placeholders)
            .with("placeholders", placeholder_entries(&self.shapes))
            .with_result(
                "slide_master",
                self.slide_master().map(|m| m as Rc<dyn Introspect>),
            ))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let master_name = self
            .master
            .upgrade()
            .map_or_else(|| "unknown".to_string(), |m| m.display_name().to_string());
        let description = format!(
            "Slide Layout '{}', based on slide master '{master_name}'. \
             Contains {} total shapes, of which {} are placeholders.",
            self.name,
            self.shapes.len(),
            count_placeholders(&self.shapes)
        );
        Ok(AiSummary::new(description.clone())
            .with_summary(description)
            .with_operations([
                "access shapes (slide_layout.shapes)",
                "access placeholders (slide_layout.placeholders)",
                "access parent slide master (slide_layout.slide_master)",
                "access background (slide_layout.background.fill)",
                "iterate cloneable placeholders (slide_layout.iter_cloneable_placeholders())",
            ]))
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        shape_children(&self.shapes)
    }

    fn content_summary(&self) -> String {
        format!("Layout '{}' ({} shapes)", self.name, self.shapes.len())
    }
}

/// Speaker notes attached to a slide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesSlide {
    notes_text_frame: TextFrame,
}

impl NotesSlide {
    pub fn new(text: &str) -> Self {
        Self {
            notes_text_frame: TextFrame::from_text(text),
        }
    }

    pub fn notes_text_frame(&self) -> &TextFrame {
        &self.notes_text_frame
    }
}

impl Introspect for NotesSlide {
    fn type_name(&self) -> &'static str {
        "NotesSlide"
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("notes_text", self.notes_text_frame.text())
            .with("notes_text_frame", &self.notes_text_frame as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        Ok(AiSummary::new("Speaker notes of a slide.").with_summary(format!(
            "Notes: \"{}\"",
            preview(&self.notes_text_frame.text().replace('\n', " "), 50)
        )))
    }
}

/// A slide based on a layout.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use pptx_introspect::slide::{Slide, SlideMaster};
///
/// let master = Rc::new(SlideMaster::new("Office Theme"));
/// let layout = master.add_layout("Title Only", Vec::new());
/// let slide = Slide::new(256, layout);
/// assert_eq!(slide.slide_layout().name(), "Title Only");
/// ```
#[derive(Debug, Clone)]
pub struct Slide {
    slide_id: u32,
    name: String,
    layout: Rc<SlideLayout>,
    shapes: Vec<Shape>,
    /// `None` follows the master background
    background: Option<FillFormat>,
    notes: Option<NotesSlide>,
}

impl Slide {
    pub fn new(slide_id: u32, layout: Rc<SlideLayout>) -> Self {
        Self {
            slide_id,
            name: String::new(),
            layout,
            shapes: Vec::new(),
            background: None,
            notes: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shapes.push(shape.into());
        self
    }

    /// Override the inherited background.
    pub fn with_background(mut self, background: FillFormat) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_notes(mut self, notes: NotesSlide) -> Self {
        self.notes = Some(notes);
        self
    }

    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn slide_layout(&self) -> &Rc<SlideLayout> {
        &self.layout
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.is_placeholder())
    }

    #[inline]
    pub fn follow_master_background(&self) -> bool {
        self.background.is_none()
    }

    #[inline]
    pub fn has_notes_slide(&self) -> bool {
        self.notes.is_some()
    }

    pub fn notes_slide(&self) -> Option<&NotesSlide> {
        self.notes.as_ref()
    }

    /// Title placeholder, if the slide has one.
    pub fn title(&self) -> Option<&Shape> {
        self.shapes.iter().find(|shape| {
            shape
                .base()
                .placeholder()
                .and_then(|p| p.ph_type())
                .is_some_and(|t| matches!(t, PpPlaceholderType::Title | PpPlaceholderType::CenterTitle))
        })
    }

    fn title_text(&self) -> Option<String> {
        let text = self.title()?.text_frame().ok()?.text();
        if text.is_empty() { None } else { Some(text) }
    }
}

impl Introspect for Slide {
    fn type_name(&self) -> &'static str {
        "Slide"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        let mut identity = Fields::new()
            .with("class_name", self.type_name())
            .with("description", format!("Represents slide ID {}.", self.slide_id))
            .with("slide_id", self.slide_id);
        if !self.name.is_empty() {
            identity.push("name", self.name.as_str());
        }
        Ok(identity)
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("has_notes_slide", self.has_notes_slide())
            .with("follow_master_background", self.follow_master_background())
            .with(
                "background",
                self.background.as_ref().map(|b| b as &dyn Introspect),
            )
            .with("shapes", PropertyValue::objects(&self.shapes))
            .with("placeholders", placeholder_entries(&self.shapes)))
    }

    fn relationships(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with(
                "slide_layout",
                Rc::clone(&self.layout) as Rc<dyn Introspect>,
            )
            .with(
                "notes_slide",
                self.notes.as_ref().map(|n| n as &dyn Introspect),
            ))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut identifier = format!("Slide ID {}", self.slide_id);
        if !self.name.is_empty() {
            identifier.push_str(&format!(" named '{}'", self.name));
        }
        let title = self
            .title_text()
            .map(|t| format!(" with title \"{}\"", preview(&t.replace(['\n', '\u{b}'], " "), 50)))
            .unwrap_or_default();
        let mut parts = vec![
            format!(
                "{identifier}{title}, based on layout '{}'.",
                self.layout.name()
            ),
            format!(
                "Contains {} shape(s) including {} placeholder(s).",
                self.shapes.len(),
                count_placeholders(&self.shapes)
            ),
        ];
        if self.has_notes_slide() {
            parts.push("Has speaker notes.".to_string());
        }
        let description = parts.join(" ");

        Ok(AiSummary::new(description.clone())
            .with_summary(description)
            .with_operations([
                "access shapes (slide.shapes)",
                "access placeholders (slide.placeholders, slide.shapes.title)",
                "add shapes (slide.shapes.add_shape(...), etc.)",
                "access slide layout (slide.slide_layout)",
                "access/modify notes (slide.notes_slide.notes_text_frame.text = ...)",
                "get slide properties (slide.slide_id, slide.name, slide.follow_master_background)",
            ]))
    }

    fn tree_identity(&self) -> Map<String, Value> {
        let mut identity = Map::new();
        identity.insert("class_name".into(), self.type_name().into());
        identity.insert("slide_id".into(), self.slide_id.into());
        if !self.name.is_empty() {
            identity.insert("name".into(), self.name.clone().into());
        }
        identity.insert("layout_name".into(), self.layout.name().into());
        identity
    }

    fn content_summary(&self) -> String {
        let mut parts = vec![format!("Slide {}", self.slide_id)];
        if !self.name.is_empty() {
            parts.push(format!("'{}'", self.name));
        }
        match self.shapes.len() {
            0 => parts.push("(empty)".to_string()),
            1 => parts.push("(1 shape)".to_string()),
            n => parts.push(format!("({n} shapes)")),
        }
        parts.join(" ")
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        shape_children(&self.shapes)
    }

    fn root_access_path(&self) -> String {
        format!("slide_{}", self.slide_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::enums::MsoAutoShapeType;
    use crate::common::Length;
    use crate::introspection::{IntrospectExt, IntrospectionOptions};
    use crate::shapes::{AutoShape, BaseShape, PlaceholderFormat};
    use serde_json::json;

    fn title_shape(text: &str) -> AutoShape {
        AutoShape::new(
            BaseShape::new(2, "Title 1")
                .with_placeholder(PlaceholderFormat::new(0, PpPlaceholderType::Title))
                .with_size(Length::from_inches(9.0), Length::from_inches(1.0)),
            MsoAutoShapeType::Rectangle,
        )
        .with_text_frame(TextFrame::from_text(text))
    }

    fn intro_slide() -> (Rc<SlideMaster>, Slide) {
        let master = Rc::new(SlideMaster::new("Office Theme"));
        let layout = master.add_layout("Title Slide", vec![title_shape("").into()]);
        let slide = Slide::new(256, layout)
            .with_name("Intro")
            .with_shape(title_shape("Quarterly Review"))
            .with_shape(AutoShape::new(BaseShape::new(3, "Oval 2"), MsoAutoShapeType::Oval))
            .with_notes(NotesSlide::new("Welcome everyone"));
        (master, slide)
    }

    #[test]
    fn test_layout_master_link() {
        let master = Rc::new(SlideMaster::new("Office Theme"));
        let layout = master.add_layout("Blank", Vec::new());
        assert!(Rc::ptr_eq(&layout.slide_master().unwrap(), &master));
        assert_eq!(master.slide_layouts().len(), 1);

        drop(master);
        assert!(layout.slide_master().is_err());
    }

    #[test]
    fn test_master_layout_cycle_yields_circular_stub() {
        let master = Rc::new(SlideMaster::new("Office Theme"));
        master.add_layout("Blank", Vec::new());
        let out = master
            .to_dict(&IntrospectionOptions::new().with_max_depth(4))
            .unwrap();
        let layout = &out["properties"]["slide_layouts"][0];
        assert_eq!(layout["_object_type"], json!("SlideLayout"));
        assert_eq!(
            layout["properties"]["slide_master"],
            json!({
                "circular_reference": true,
                "description": "Circular reference to SlideMaster (object #0)",
            })
        );
    }

    #[test]
    fn test_dropped_master_is_error_stub() {
        let master = Rc::new(SlideMaster::new("Office Theme"));
        let layout = master.add_layout("Blank", Vec::new());
        drop(master);
        let out = layout.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["properties"]["slide_master"]["error_in"], json!("slide_master"));
    }

    #[test]
    fn test_slide_introspection() {
        let (_master, slide) = intro_slide();
        let out = slide.to_dict(&IntrospectionOptions::default()).unwrap();
        assert_eq!(out["_identity"]["slide_id"], json!(256));
        assert_eq!(out["properties"]["follow_master_background"], json!(true));
        assert_eq!(out["properties"]["shapes"].as_array().unwrap().len(), 2);
        assert_eq!(
            out["properties"]["placeholders"],
            json!([{
                "placeholder_idx": 0,
                "placeholder_type": {
                    "_object_type": "PP_PLACEHOLDER_TYPE",
                    "name": "TITLE",
                    "value": 1,
                    "description": "Title",
                    "xml_value": "title",
                },
                "shape_id": 2,
                "name": "Title 1",
            }])
        );
        assert_eq!(out["relationships"]["slide_layout"]["_object_type"], json!("SlideLayout"));
        assert_eq!(out["relationships"]["notes_slide"]["_object_type"], json!("NotesSlide"));
        assert_eq!(
            out["_llm_context"]["description"],
            json!("Slide ID 256 named 'Intro' with title \"Quarterly Review\", based on layout 'Title Slide'. Contains 2 shape(s) including 1 placeholder(s). Has speaker notes.")
        );
    }

    #[test]
    fn test_slide_tree() {
        let (_master, slide) = intro_slide();
        let tree = slide.get_tree(None);
        assert_eq!(tree.access_path, "slide_256");
        assert_eq!(tree.content_summary, "Slide 256 'Intro' (2 shapes)");
        assert_eq!(tree.identity["layout_name"], json!("Title Slide"));
        let children = tree.children.unwrap();
        assert_eq!(children[0].access_path, "slide_256.shapes[0]");
        assert_eq!(
            children[0].content_summary,
            "PLACEHOLDER 'Title 1' (TITLE placeholder) Text: 'Quarterly Review'"
        );
        assert_eq!(children[1].content_summary, "AUTO_SHAPE 'Oval 2' (empty text)");
    }
}
