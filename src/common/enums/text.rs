//! Text layout enumerations.

use super::office_enum;

office_enum! {
    /// Horizontal alignment of a paragraph.
    pub enum PpParagraphAlignment as "PP_PARAGRAPH_ALIGNMENT" {
        Left = 1, "LEFT", "Left aligned", xml = "l";
        Center = 2, "CENTER", "Center align", xml = "ctr";
        Right = 3, "RIGHT", "Right aligned", xml = "r";
        Justify = 4, "JUSTIFY", "Justified, spacing added between words", xml = "just";
        Distribute = 5, "DISTRIBUTE", "Evenly distributes characters across the line", xml = "dist";
    }
}

office_enum! {
    /// Vertical anchoring of text within its frame.
    pub enum MsoVerticalAnchor as "MSO_VERTICAL_ANCHOR" {
        Top = 1, "TOP", "Aligns text to top of text frame", xml = "t";
        Middle = 3, "MIDDLE", "Centers text vertically", xml = "ctr";
        Bottom = 4, "BOTTOM", "Aligns text to bottom of text frame", xml = "b";
    }
}
