use crate::error::Error;

/// How a bare number (no unit suffix) in a measurement attribute is scaled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUsage {
    /// Twentieths of a point (`w:ind`, `w:spacing`, `w:tab/@pos`, page geometry).
    Dxa,
    /// Half-points (`w:sz`).
    HalfPoint,
    /// Eighths of a point (border widths).
    EighthPoint,
    /// Whole points (border spacing).
    Point,
}

impl LengthUsage {
    fn points_per_unit(self) -> f32 {
        match self {
            LengthUsage::Dxa => 1.0 / 20.0,
            LengthUsage::HalfPoint => 0.5,
            LengthUsage::EighthPoint => 0.125,
            LengthUsage::Point => 1.0,
        }
    }
}

const UNIT_SUFFIXES: &[(&str, f32)] = &[
    ("pt", 1.0),
    ("in", 72.0),
    ("cm", 72.0 / 2.54),
    ("mm", 72.0 / 25.4),
    ("pc", 12.0),
    ("pi", 12.0),
];

/// A physical length, stored in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Length(f32);

impl Length {
    pub const ZERO: Length = Length(0.0);

    pub fn from_points(points: f32) -> Self {
        Length(points)
    }

    pub fn from_twips(twips: f32) -> Self {
        Length(twips / 20.0)
    }

    pub fn points(self) -> f32 {
        self.0
    }

    pub fn twips(self) -> f32 {
        self.0 * 20.0
    }

    /// Parse an OOXML measurement. Values such as `"1.5in"` or `"12pt"` carry
    /// their own unit; bare numbers are interpreted according to `usage`.
    pub fn parse(value: &str, usage: LengthUsage) -> Result<Length, Error> {
        let trimmed = value.trim();
        let invalid = || Error::InvalidLength(value.to_string());

        for &(suffix, factor) in UNIT_SUFFIXES {
            if let Some(number) = trimmed.strip_suffix(suffix) {
                let n = number.trim().parse::<f32>().map_err(|_| invalid())?;
                return finite(n * factor).ok_or_else(invalid);
            }
        }

        let n = trimmed.parse::<f32>().map_err(|_| invalid())?;
        finite(n * usage.points_per_unit()).ok_or_else(invalid)
    }
}

fn finite(points: f32) -> Option<Length> {
    points.is_finite().then_some(Length(points))
}
