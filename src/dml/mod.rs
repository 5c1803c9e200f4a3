//! DrawingML value objects.
//!
//! Colors, fills and lines are shared by shapes, text and tables. Several of
//! their accessors are only defined for some sub-types (an RGB value for a
//! theme color, a foreground color for a gradient fill) and return
//! [`Error::PropertyUnavailable`](crate::Error::PropertyUnavailable)
//! otherwise.

pub mod color;
pub mod fill;
pub mod line;

pub use color::ColorFormat;
pub use fill::{FillFormat, GradientStop};
pub use line::LineFormat;
