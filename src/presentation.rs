//! The root presentation object.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::common::{Length, Result};
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue, TreeChild};
use crate::slide::{Slide, SlideMaster};

/// Default slide width, 10 inches.
const DEFAULT_SLIDE_WIDTH: Length = Length::from_emus(9_144_000);
/// Default slide height, 7.5 inches.
const DEFAULT_SLIDE_HEIGHT: Length = Length::from_emus(6_858_000);

/// Document metadata from the package's core properties part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoreProperties {
    /// Document author/creator
    pub author: Option<String>,
    pub category: Option<String>,
    /// Document description/comments
    pub comments: Option<String>,
    /// Content status (draft, final, etc.)
    pub content_status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub identifier: Option<String>,
    pub keywords: Option<String>,
    pub language: Option<String>,
    /// Last person to modify the document
    pub last_modified_by: Option<String>,
    pub last_printed: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub revision: Option<u32>,
    pub subject: Option<String>,
    pub title: Option<String>,
    pub version: Option<String>,
}

impl CoreProperties {
    /// Properties as an ordered mapping; timestamps become RFC 3339 text.
    fn to_mapping(&self) -> PropertyValue<'_> {
        fn text(value: &Option<String>) -> PropertyValue<'_> {
            value.as_deref().into()
        }
        fn timestamp(value: &Option<DateTime<Utc>>) -> PropertyValue<'static> {
            value.map(|t| t.to_rfc3339()).into()
        }

        PropertyValue::Mapping(vec![
            ("author".into(), text(&self.author)),
            ("category".into(), text(&self.category)),
            ("comments".into(), text(&self.comments)),
            ("content_status".into(), text(&self.content_status)),
            ("created".into(), timestamp(&self.created)),
            ("identifier".into(), text(&self.identifier)),
            ("keywords".into(), text(&self.keywords)),
            ("language".into(), text(&self.language)),
            ("last_modified_by".into(), text(&self.last_modified_by)),
            ("last_printed".into(), timestamp(&self.last_printed)),
            ("modified".into(), timestamp(&self.modified)),
            ("revision".into(), self.revision.into()),
            ("subject".into(), text(&self.subject)),
            ("title".into(), text(&self.title)),
            ("version".into(), text(&self.version)),
        ])
    }
}

/// A presentation: slides, the masters they derive from and document metadata.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use pptx_introspect::introspection::IntrospectExt;
/// use pptx_introspect::presentation::{CoreProperties, Presentation};
/// use pptx_introspect::slide::{Slide, SlideMaster};
///
/// let master = Rc::new(SlideMaster::new("Office Theme"));
/// let layout = master.add_layout("Blank", Vec::new());
/// let prs = Presentation::new()
///     .with_core_properties(CoreProperties {
///         title: Some("Roadmap".to_string()),
///         ..CoreProperties::default()
///     })
///     .with_slide_master(master)
///     .with_slide(Slide::new(256, layout));
///
/// let tree = prs.get_tree(None);
/// assert_eq!(tree.content_summary, "Presentation: 'Roadmap' (1 slide, 1 master)");
/// assert_eq!(tree.children.unwrap()[0].access_path, "slides[0]");
/// ```
#[derive(Debug, Clone)]
pub struct Presentation {
    core_properties: CoreProperties,
    slide_width: Length,
    slide_height: Length,
    slides: Vec<Slide>,
    slide_masters: Vec<Rc<SlideMaster>>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            core_properties: CoreProperties::default(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            slides: Vec::new(),
            slide_masters: Vec::new(),
        }
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_core_properties(mut self, core_properties: CoreProperties) -> Self {
        self.core_properties = core_properties;
        self
    }

    pub fn with_slide_size(mut self, width: Length, height: Length) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    pub fn with_slide_master(mut self, master: Rc<SlideMaster>) -> Self {
        self.slide_masters.push(master);
        self
    }

    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    #[inline]
    pub fn core_properties(&self) -> &CoreProperties {
        &self.core_properties
    }

    #[inline]
    pub fn slide_width(&self) -> Length {
        self.slide_width
    }

    #[inline]
    pub fn slide_height(&self) -> Length {
        self.slide_height
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn slide_masters(&self) -> &[Rc<SlideMaster>] {
        &self.slide_masters
    }

    /// Title from the core properties, or `Untitled Presentation`.
    pub fn title(&self) -> &str {
        self.core_properties
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled Presentation")
    }

    fn has_default_size(&self) -> bool {
        (self.slide_width.inches() - 10.0).abs() < 0.1
            && (self.slide_height.inches() - 7.5).abs() < 0.1
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

impl Introspect for Presentation {
    fn type_name(&self) -> &'static str {
        "Presentation"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Root Presentation object."))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("core_properties", self.core_properties.to_mapping())
            .with("slide_width", self.slide_width)
            .with("slide_height", self.slide_height)
            .with("slides", PropertyValue::objects(&self.slides))
            .with(
                "slide_masters",
                PropertyValue::shared_objects(&self.slide_masters),
            ))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let description = format!(
            "Presentation: '{}'. Contains {} slide(s) and {} slide master(s). \
             Slide dimensions: {:.2}\"W x {:.2}\"H.",
            self.title(),
            self.slides.len(),
            self.slide_masters.len(),
            self.slide_width.inches(),
            self.slide_height.inches()
        );
        Ok(AiSummary::new(description.clone())
            .with_summary(description)
            .with_operations([
                "access slides (prs.slides)",
                "add a slide (prs.slides.add_slide(...))",
                "access slide masters (prs.slide_masters, prs.slide_master)",
                "modify core properties (prs.core_properties.title = ...)",
                "change slide dimensions (prs.slide_width = Inches(...))",
                "save presentation (prs.save(...))",
            ]))
    }

    fn tree_identity(&self) -> Map<String, Value> {
        let mut identity = Map::new();
        identity.insert("class_name".into(), self.type_name().into());
        identity.insert("title".into(), self.title().into());
        identity.insert("slide_count".into(), self.slides.len().into());
        identity.insert("master_count".into(), self.slide_masters.len().into());
        identity.insert("slide_width".into(), self.slide_width.to_string().into());
        identity.insert("slide_height".into(), self.slide_height.to_string().into());
        identity
    }

    fn content_summary(&self) -> String {
        let mut parts = vec![format!("Presentation: '{}'", self.title())];
        let mut counts = Vec::new();
        if !self.slides.is_empty() {
            counts.push(plural(self.slides.len(), "slide"));
        }
        if !self.slide_masters.is_empty() {
            counts.push(plural(self.slide_masters.len(), "master"));
        }
        if !counts.is_empty() {
            parts.push(format!("({})", counts.join(", ")));
        }
        if !self.has_default_size() {
            parts.push(format!(
                "[{:.1}\"×{:.1}\"]",
                self.slide_width.inches(),
                self.slide_height.inches()
            ));
        }
        parts.join(" ")
    }

    fn tree_children(&self) -> Vec<TreeChild<'_>> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| TreeChild::indexed("slides", i, slide as &dyn Introspect))
            .collect()
    }
}
