//! DrawingML enumerations: colors, fills and lines.

use super::office_enum;

office_enum! {
    /// How a color is specified.
    pub enum MsoColorType as "MSO_COLOR_TYPE" {
        /// Color is specified by an RGB value
        Rgb = 1, "RGB", "Color is specified by an RGBColor value";
        /// Color is one of the theme colors
        Scheme = 2, "SCHEME", "Color is one of the preset theme colors";
        Hsl = 101, "HSL", "Color is specified using Hue, Saturation, and Luminosity values";
        Preset = 102, "PRESET", "Color is specified using a named built-in color";
        Scrgb = 103, "SCRGB", "Color is an scRGB color, a wide color gamut RGB color space";
        System = 104, "SYSTEM", "Color is one specified by the operating system";
    }
}

office_enum! {
    /// Theme color slots.
    pub enum MsoThemeColor as "MSO_THEME_COLOR" {
        NotThemeColor = 0, "NOT_THEME_COLOR", "Indicates the color is not a theme color";
        Dark1 = 1, "DARK_1", "Specifies the Dark 1 theme color", xml = "dk1";
        Light1 = 2, "LIGHT_1", "Specifies the Light 1 theme color", xml = "lt1";
        Dark2 = 3, "DARK_2", "Specifies the Dark 2 theme color", xml = "dk2";
        Light2 = 4, "LIGHT_2", "Specifies the Light 2 theme color", xml = "lt2";
        Accent1 = 5, "ACCENT_1", "Specifies the Accent 1 theme color", xml = "accent1";
        Accent2 = 6, "ACCENT_2", "Specifies the Accent 2 theme color", xml = "accent2";
        Accent3 = 7, "ACCENT_3", "Specifies the Accent 3 theme color", xml = "accent3";
        Accent4 = 8, "ACCENT_4", "Specifies the Accent 4 theme color", xml = "accent4";
        Accent5 = 9, "ACCENT_5", "Specifies the Accent 5 theme color", xml = "accent5";
        Accent6 = 10, "ACCENT_6", "Specifies the Accent 6 theme color", xml = "accent6";
        Hyperlink = 11, "HYPERLINK", "Specifies the theme color for a hyperlink", xml = "hlink";
        FollowedHyperlink = 12, "FOLLOWED_HYPERLINK", "Specifies the theme color for a clicked hyperlink", xml = "folHlink";
        Text1 = 13, "TEXT_1", "Specifies the Text 1 theme color", xml = "tx1";
        Background1 = 14, "BACKGROUND_1", "Specifies the Background 1 theme color", xml = "bg1";
        Text2 = 15, "TEXT_2", "Specifies the Text 2 theme color", xml = "tx2";
        Background2 = 16, "BACKGROUND_2", "Specifies the Background 2 theme color", xml = "bg2";
    }
}

office_enum! {
    /// Kind of fill applied to a shape or background.
    pub enum MsoFillType as "MSO_FILL_TYPE" {
        Solid = 1, "SOLID", "Solid fill";
        Patterned = 2, "PATTERNED", "Patterned fill";
        Gradient = 3, "GRADIENT", "Gradient fill";
        Textured = 4, "TEXTURED", "Textured fill";
        Background = 5, "BACKGROUND", "Shape is transparent, background shows through";
        Picture = 6, "PICTURE", "Shape is filled with a picture";
        Group = 101, "GROUP", "Shape fill is inherited from the parent group";
    }
}

office_enum! {
    /// Pattern used by a patterned fill.
    pub enum MsoPatternType as "MSO_PATTERN_TYPE" {
        Percent5 = 1, "PERCENT_5", "5% of the foreground color", xml = "pct5";
        Percent10 = 2, "PERCENT_10", "10% of the foreground color", xml = "pct10";
        Percent25 = 4, "PERCENT_25", "25% of the foreground color", xml = "pct25";
        Percent50 = 7, "PERCENT_50", "50% of the foreground color", xml = "pct50";
        Horizontal = 49, "HORIZONTAL", "Horizontal lines", xml = "horz";
        Vertical = 50, "VERTICAL", "Vertical lines", xml = "vert";
        Cross = 51, "CROSS", "Crossed lines", xml = "cross";
        DiagonalBrick = 40, "DIAGONAL_BRICK", "Diagonal brick", xml = "diagBrick";
    }
}

office_enum! {
    /// Dash style of a line.
    pub enum MsoLineDashStyle as "MSO_LINE_DASH_STYLE" {
        Solid = 1, "SOLID", "Solid line", xml = "solid";
        SquareDot = 2, "SQUARE_DOT", "Square dots", xml = "sysDash";
        RoundDot = 3, "ROUND_DOT", "Round dots", xml = "sysDot";
        Dash = 4, "DASH", "Dashes", xml = "dash";
        DashDot = 5, "DASH_DOT", "Dash-dot pattern", xml = "dashDot";
        LongDash = 7, "LONG_DASH", "Long dashes", xml = "lgDash";
        LongDashDot = 8, "LONG_DASH_DOT", "Long dash-dot pattern", xml = "lgDashDot";
    }
}
