//! Text frames, paragraphs and runs.

use crate::common::enums::{MsoVerticalAnchor, PpParagraphAlignment};
use crate::common::{EnumMember, Error, Length, Result};
use crate::introspection::{AiSummary, Fields, Introspect, PropertyValue};

use super::font::Font;
use super::preview;

/// Default left and right inset of a text frame.
const DEFAULT_MARGIN_X: Length = Length::from_emus(91_440);
/// Default top and bottom inset of a text frame.
const DEFAULT_MARGIN_Y: Length = Length::from_emus(45_720);

/// Run of text sharing one set of character properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    text: String,
    font: Font,
    hyperlink: Option<String>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_hyperlink(mut self, address: impl Into<String>) -> Self {
        self.hyperlink = Some(address.into());
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn hyperlink(&self) -> Option<&str> {
        self.hyperlink.as_deref()
    }
}

impl Introspect for Run {
    fn type_name(&self) -> &'static str {
        "_Run"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with(
                "description",
                format!("A text run containing: \"{}\"", preview(&self.text, 50)),
            ))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("text", self.text.as_str())
            .with("font", &self.font as &dyn Introspect)
            .with("hyperlink_address", self.hyperlink.as_deref()))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut summary = format!("Text run: \"{}\"", preview(&self.text, 50));
        if let Some(address) = &self.hyperlink {
            summary.push_str(&format!(" linking to {address}"));
        }
        summary.push('.');
        Ok(AiSummary::new("A run of text with uniform character formatting.")
            .with_summary(summary)
            .with_operations(["change text (run.text = ...)", "format characters (run.font)"]))
    }
}

/// Paragraph of a text frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    runs: Vec<Run>,
    alignment: Option<PpParagraphAlignment>,
    level: u8,
    font: Font,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single unformatted run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().with_run(Run::new(text))
    }

    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_alignment(mut self, alignment: PpParagraphAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the indentation level, 0 to 8.
    pub fn with_level(mut self, level: u8) -> Result<Self> {
        if level > 8 {
            return Err(Error::InvalidValue(format!(
                "paragraph level must be between 0 and 8, got {level}"
            )));
        }
        self.level = level;
        Ok(self)
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    #[inline]
    pub fn alignment(&self) -> Option<PpParagraphAlignment> {
        self.alignment
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(Run::text).collect()
    }
}

impl Introspect for Paragraph {
    fn type_name(&self) -> &'static str {
        "_Paragraph"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with(
                "description",
                format!("Paragraph containing: \"{}\"", preview(&self.text(), 50)),
            ))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("text", self.text())
            .with("alignment", PropertyValue::enumeration_opt(self.alignment))
            .with("level", self.level)
            .with("font", &self.font as &dyn Introspect)
            .with("runs", PropertyValue::objects(&self.runs)))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut summary = format!(
            "Paragraph at level {} with {} run(s)",
            self.level,
            self.runs.len()
        );
        if let Some(alignment) = self.alignment {
            summary.push_str(&format!(", {} aligned", alignment.name()));
        }
        summary.push('.');
        Ok(AiSummary::new(format!(
            "Paragraph containing: \"{}\"",
            preview(&self.text(), 50)
        ))
        .with_summary(summary)
        .with_operations([
            "add run (paragraph.add_run())",
            "set alignment (paragraph.alignment = PP_ALIGN.CENTER)",
            "set indent level (paragraph.level = 1)",
        ]))
    }
}

/// Text container of a shape or table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    word_wrap: Option<bool>,
    vertical_anchor: Option<MsoVerticalAnchor>,
    margin_left: Length,
    margin_right: Length,
    margin_top: Length,
    margin_bottom: Length,
    font: Font,
}

impl Default for TextFrame {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: None,
            vertical_anchor: None,
            margin_left: DEFAULT_MARGIN_X,
            margin_right: DEFAULT_MARGIN_X,
            margin_top: DEFAULT_MARGIN_Y,
            margin_bottom: DEFAULT_MARGIN_Y,
            font: Font::default(),
        }
    }
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame with one paragraph per line of `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: text.split('\n').map(Paragraph::from_text).collect(),
            ..Self::default()
        }
    }

    pub fn with_paragraph(mut self, paragraph: Paragraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn with_word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = Some(word_wrap);
        self
    }

    pub fn with_vertical_anchor(mut self, anchor: MsoVerticalAnchor) -> Self {
        self.vertical_anchor = Some(anchor);
        self
    }

    /// Set the four insets: left, top, right, bottom.
    pub fn with_margins(mut self, left: Length, top: Length, right: Length, bottom: Length) -> Self {
        self.margin_left = left;
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    pub fn vertical_anchor(&self) -> Option<MsoVerticalAnchor> {
        self.vertical_anchor
    }

    /// Insets as left, top, right, bottom.
    pub fn margins(&self) -> [Length; 4] {
        [
            self.margin_left,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
        ]
    }

    #[inline]
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Text of all paragraphs separated by line feeds.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Introspect for TextFrame {
    fn type_name(&self) -> &'static str {
        "TextFrame"
    }

    fn identity(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("class_name", self.type_name())
            .with("description", "Container for text within a shape."))
    }

    fn properties(&self) -> Result<Fields<'_>> {
        Ok(Fields::new()
            .with("text", self.text())
            .with("paragraphs", PropertyValue::objects(&self.paragraphs))
            .with("margin_left", self.margin_left)
            .with("margin_top", self.margin_top)
            .with("margin_right", self.margin_right)
            .with("margin_bottom", self.margin_bottom)
            .with("vertical_anchor", PropertyValue::enumeration_opt(self.vertical_anchor))
            .with("word_wrap", self.word_wrap)
            .with("font", &self.font as &dyn Introspect))
    }

    fn ai_summary(&self) -> Result<AiSummary> {
        let mut parts = vec![format!(
            "TextFrame containing {} paragraph(s).",
            self.paragraphs.len()
        )];
        let text = self.text().replace('\n', " ");
        if !text.trim().is_empty() {
            parts.push(format!("Text starts with: \"{}\".", preview(&text, 100)));
        }
        if let Some(word_wrap) = self.word_wrap {
            parts.push(format!("Word wrap: {}.", if word_wrap { "On" } else { "Off" }));
        }
        if let Some(anchor) = self.vertical_anchor {
            parts.push(format!("Vertical anchor: {}.", anchor.name()));
        }
        let description = parts.join(" ");

        Ok(AiSummary::new(description.clone())
            .with_summary(description)
            .with_operations([
                "read or replace text (text_frame.text = ...)",
                "add paragraph (text_frame.add_paragraph())",
                "set vertical anchor and word wrap",
                "adjust margins",
            ]))
    }
}
