//! Unit conversion utilities.
//!
//! Office documents measure everything in English Metric Units (EMU).
//! These helpers convert EMUs to the units humans and agents reason in.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_CENTIPOINT: i64 = 127;

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn emu_to_pt_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[inline]
pub fn inches_to_emu_f64(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

#[inline]
pub fn emu_to_inches_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn cm_to_emu_f64(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64) as i64
}

#[inline]
pub fn emu_to_cm_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_CM as f64
}

#[inline]
pub fn mm_to_emu_f64(mm: f64) -> i64 {
    (mm * EMUS_PER_MM as f64) as i64
}

#[inline]
pub fn emu_to_mm_f64(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_MM as f64
}

/// Round a float to a fixed number of decimals for stable JSON output.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        assert_eq!(inches_to_emu_f64(1.0), EMUS_PER_INCH);
        assert_eq!(emu_to_inches_f64(EMUS_PER_INCH / 2), 0.5);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(pt_to_emu_f64(12.0), 152_400);
        assert_eq!(emu_to_pt_f64(152_400), 12.0);
    }

    #[test]
    fn test_metric_conversions() {
        assert_eq!(cm_to_emu_f64(2.0), 720_000);
        assert_eq!(emu_to_mm_f64(72_000), 2.0);
        assert_eq!(mm_to_emu_f64(1.0), EMUS_PER_MM);
        assert_eq!(emu_to_cm_f64(EMUS_PER_INCH), 2.54);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-0.005, 1), -0.0);
    }
}
