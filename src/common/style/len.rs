use std::fmt;

use crate::common::unit::{
    EMUS_PER_CENTIPOINT, cm_to_emu_f64, emu_to_cm_f64, emu_to_inches_f64, emu_to_mm_f64,
    emu_to_pt_f64, inches_to_emu_f64, mm_to_emu_f64, pt_to_emu_f64,
};

/// Length measurement with units.
///
/// Represents a measurement value used for dimensions, positions, etc.
/// Office formats primarily use EMUs (English Metric Units).
///
/// # Examples
///
/// ```rust
/// use pptx_introspect::common::Length;
///
/// // Create from EMUs
/// let length = Length::from_emus(914400); // 1 inch
///
/// // Convert to different units
/// assert_eq!(length.inches(), 1.0);
/// assert_eq!(length.points(), 72.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    /// Value in EMUs (English Metric Units)
    /// 1 inch = 914,400 EMUs
    /// 1 cm = 360,000 EMUs
    emus: i64,
}

impl Length {
    pub const ZERO: Length = Length { emus: 0 };

    /// Create a length from EMUs (English Metric Units).
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self::from_emus(inches_to_emu_f64(inches))
    }

    /// Create a length from centimeters.
    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self::from_emus(cm_to_emu_f64(cm))
    }

    /// Create a length from millimeters.
    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self::from_emus(mm_to_emu_f64(mm))
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn from_points(pt: f64) -> Self {
        Self::from_emus(pt_to_emu_f64(pt))
    }

    /// Create a length from centipoints, the unit font sizes are stored in.
    #[inline]
    pub const fn from_centipoints(centipoints: i64) -> Self {
        Self::from_emus(centipoints * EMUS_PER_CENTIPOINT)
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        emu_to_inches_f64(self.emus)
    }

    /// Convert to centimeters.
    #[inline]
    pub fn cm(&self) -> f64 {
        emu_to_cm_f64(self.emus)
    }

    /// Convert to millimeters.
    #[inline]
    pub fn mm(&self) -> f64 {
        emu_to_mm_f64(self.emus)
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn points(&self) -> f64 {
        emu_to_pt_f64(self.emus)
    }
}

impl From<i64> for Length {
    #[inline]
    fn from(emus: i64) -> Self {
        Self::from_emus(emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} in", self.inches())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let length = Length::from_inches(2.0);
        assert_eq!(length.emus(), 1_828_800);
        assert_eq!(length.points(), 144.0);
        assert_eq!(length.cm(), 5.08);
        assert_eq!(length.mm(), 50.8);
    }

    #[test]
    fn test_length_from_centipoints() {
        // 18pt font size
        assert_eq!(Length::from_centipoints(1800).points(), 18.0);
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::from_inches(1.5).to_string(), "1.50 in");
    }
}
