//! Shape and placeholder enumerations.

use super::office_enum;

office_enum! {
    /// Broad category of a shape.
    pub enum MsoShapeType as "MSO_SHAPE_TYPE" {
        AutoShape = 1, "AUTO_SHAPE", "AutoShape";
        Chart = 3, "CHART", "Chart";
        Freeform = 5, "FREEFORM", "Freeform";
        Group = 6, "GROUP", "Group";
        Line = 9, "LINE", "Line";
        Picture = 13, "PICTURE", "Picture";
        Placeholder = 14, "PLACEHOLDER", "Placeholder";
        TextBox = 17, "TEXT_BOX", "Text box";
        Table = 19, "TABLE", "Table";
    }
}

office_enum! {
    /// Preset geometry of an autoshape.
    pub enum MsoAutoShapeType as "MSO_AUTO_SHAPE_TYPE" {
        Rectangle = 1, "RECTANGLE", "Rectangle", xml = "rect";
        RoundedRectangle = 5, "ROUNDED_RECTANGLE", "Rounded rectangle", xml = "roundRect";
        IsoscelesTriangle = 7, "ISOSCELES_TRIANGLE", "Isosceles triangle", xml = "triangle";
        Oval = 9, "OVAL", "Oval", xml = "ellipse";
        RightArrow = 33, "RIGHT_ARROW", "Block arrow that points right", xml = "rightArrow";
        Chevron = 52, "CHEVRON", "Chevron", xml = "chevron";
        Star5Point = 92, "STAR_5_POINT", "5-point star", xml = "star5";
        Cloud = 179, "CLOUD", "Cloud shape", xml = "cloud";
    }
}

office_enum! {
    /// Role of a placeholder shape.
    pub enum PpPlaceholderType as "PP_PLACEHOLDER_TYPE" {
        Title = 1, "TITLE", "Title", xml = "title";
        Body = 2, "BODY", "Body", xml = "body";
        CenterTitle = 3, "CENTER_TITLE", "Center Title", xml = "ctrTitle";
        Subtitle = 4, "SUBTITLE", "Subtitle", xml = "subTitle";
        Object = 7, "OBJECT", "Object", xml = "obj";
        Chart = 8, "CHART", "Chart", xml = "chart";
        Table = 12, "TABLE", "Table", xml = "tbl";
        SlideNumber = 13, "SLIDE_NUMBER", "Slide Number", xml = "sldNum";
        Header = 14, "HEADER", "Header", xml = "hdr";
        Footer = 15, "FOOTER", "Footer", xml = "ftr";
        Date = 16, "DATE", "Date", xml = "dt";
        Picture = 18, "PICTURE", "Picture", xml = "pic";
    }
}
