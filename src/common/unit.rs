//! Unit conversion utilities.
//!
//! Every coordinate in a deck is stored in EMUs (English Metric Units), the
//! native unit of DrawingML. Human-entered measurements are converted once, at
//! the edge, by [`to_absolute`] or [`Length::new`].

use crate::common::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

pub const EMUS_PER_INCH: u64 = 914_400;
pub const EMUS_PER_CM: u64 = 360_000;
pub const EMUS_PER_MM: u64 = 36_000;
pub const EMUS_PER_PT: u64 = 12_700;

/// Supported length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Inch
    Inch,
    /// Point (1/72 inch)
    Point,
    /// Centimeter
    Centimeter,
    /// Millimeter
    Millimeter,
    /// English Metric Unit, the device unit of the package format
    Emu,
}

impl LengthUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Emu => "emu",
        }
    }

    /// Number of EMUs in one of this unit.
    #[inline]
    pub const fn emus_per_unit(&self) -> u64 {
        match self {
            Self::Inch => EMUS_PER_INCH,
            Self::Point => EMUS_PER_PT,
            Self::Centimeter => EMUS_PER_CM,
            Self::Millimeter => EMUS_PER_MM,
            Self::Emu => 1,
        }
    }

    /// Parse unit from string
    fn from_str_internal(s: &str) -> Option<Self> {
        match s {
            "in" | "inch" | "inches" => Some(Self::Inch),
            "pt" => Some(Self::Point),
            "cm" => Some(Self::Centimeter),
            "mm" => Some(Self::Millimeter),
            "emu" => Some(Self::Emu),
            _ => None,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_internal(s.trim())
            .ok_or_else(|| Error::InvalidUnit(format!("Unknown length unit '{}'", s)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A non-negative distance on the canvas, stored in EMUs.
///
/// The integer constructors are exact and infallible, which makes them the
/// natural choice for layout constants:
///
/// ```
/// use pitaya::common::unit::Length;
///
/// // 1.5 inches, 72 points and 914400 EMUs
/// let gap = Length::mils(1_500);
/// assert_eq!(Length::points(72), Length::from_emus(914_400));
/// assert_eq!(gap.inches(), 1.5);
///
/// // Human input goes through the fallible path
/// let width = "13.333in".parse::<Length>().unwrap();
/// assert_eq!(width, Length::mils(13_333));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Length(u64);

impl Length {
    /// Zero length.
    pub const ZERO: Length = Length(0);

    /// Largest coordinate DrawingML accepts (`ST_Coordinate`).
    pub const MAX_COORDINATE: Length = Length(27_273_042_316_900);

    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: u64) -> Self {
        Self(emus)
    }

    /// Create a length from thousandths of an inch.
    ///
    /// `Length::mils(60)` is 0.06in. Fractional EMUs are dropped, matching
    /// how `Inches(13.333)` truncates in other OOXML writers.
    #[inline]
    pub const fn mils(mils: u64) -> Self {
        Self(mils * EMUS_PER_INCH / 1_000)
    }

    /// Create a length from whole points.
    #[inline]
    pub const fn points(pt: u64) -> Self {
        Self(pt * EMUS_PER_PT)
    }

    /// Create a length from hundredths of a point, the unit DrawingML uses for
    /// font sizes. `Length::centipoints(250)` is a 2.5pt stroke.
    #[inline]
    pub const fn centipoints(cpt: u64) -> Self {
        Self(cpt * EMUS_PER_PT / 100)
    }

    /// Convert a measurement in `unit` to a length.
    ///
    /// The value is rounded to the nearest EMU, which is the native resolution
    /// of the package format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnit`] for negative, NaN or infinite values.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidUnit(format!(
                "Length must be a finite, non-negative number, got {}{}",
                value, unit
            )));
        }
        let emus = (value * unit.emus_per_unit() as f64).round();
        if emus > u64::MAX as f64 {
            return Err(Error::InvalidUnit(format!("Length {}{} is too large", value, unit)));
        }
        Ok(Self(emus as u64))
    }

    /// Get the value in EMUs.
    #[inline]
    pub const fn emus(&self) -> u64 {
        self.0
    }

    /// Convert to inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }

    /// Convert to points (1/72 inch).
    #[inline]
    pub fn pt(&self) -> f64 {
        self.0 as f64 / EMUS_PER_PT as f64
    }

    /// Convert to `unit`.
    #[inline]
    pub fn to_unit(&self, unit: LengthUnit) -> f64 {
        self.0 as f64 / unit.emus_per_unit() as f64
    }

    /// Multiply by a non-negative factor, rounding to the nearest EMU.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "Scale factor must be finite and non-negative, got {}",
                factor
            )));
        }
        Ok(Self((self.0 as f64 * factor).round() as u64))
    }

    /// Subtract, stopping at zero.
    #[inline]
    pub const fn saturating_sub(self, other: Length) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Length {
    type Output = Length;

    #[inline]
    fn add(self, rhs: Length) -> Length {
        Length(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Length {
    #[inline]
    fn add_assign(&mut self, rhs: Length) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Mul<u64> for Length {
    type Output = Length;

    #[inline]
    fn mul(self, rhs: u64) -> Length {
        Length(self.0.saturating_mul(rhs))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}in", self.inches())
    }
}

impl FromStr for Length {
    type Err = Error;

    /// Parse a length such as `"0.5in"`, `"72pt"` or `"914400emu"`.
    ///
    /// A bare number is read as EMUs.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| Error::InvalidUnit(format!("Invalid length '{}'", s)))?;
        let unit = if unit.trim().is_empty() {
            LengthUnit::Emu
        } else {
            unit.parse()?
        };

        Length::new(value, unit)
    }
}

impl TryFrom<String> for Length {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Convert a human-entered measurement to an absolute length.
///
/// # Arguments
///
/// * `value` - Magnitude, must be finite and non-negative
/// * `unit` - Unit abbreviation: `in`, `pt`, `cm`, `mm` or `emu`
///
/// # Errors
///
/// [`Error::InvalidUnit`] for an unrecognized unit or a negative magnitude.
///
/// # Examples
///
/// ```
/// use pitaya::common::unit::to_absolute;
///
/// assert_eq!(to_absolute(1.0, "in").unwrap(), to_absolute(72.0, "pt").unwrap());
/// assert!(to_absolute(-1.0, "in").is_err());
/// ```
pub fn to_absolute(value: f64, unit: &str) -> Result<Length> {
    let unit: LengthUnit = unit.parse()?;
    Length::new(value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_magnitude_is_invalid_unit() {
        assert!(matches!(to_absolute(-1.0, "in"), Err(Error::InvalidUnit(_))));
        assert!(matches!(to_absolute(f64::NAN, "pt"), Err(Error::InvalidUnit(_))));
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(to_absolute(1.0, "furlong"), Err(Error::InvalidUnit(_))));
    }

    #[test]
    fn test_inch_point_consistency() {
        assert_eq!(to_absolute(1.0, "in").unwrap(), to_absolute(72.0, "pt").unwrap());
        assert_eq!(to_absolute(2.54, "cm").unwrap(), to_absolute(1.0, "in").unwrap());
        assert_eq!(to_absolute(1.0, "in").unwrap().emus(), 914_400);
    }

    #[test]
    fn test_mils_are_exact() {
        assert_eq!(Length::mils(1_000).emus(), EMUS_PER_INCH);
        assert_eq!(Length::mils(60).emus(), 54_864);
        assert_eq!(Length::mils(13_333).emus(), 12_191_695);
        assert_eq!(Length::mils(500), to_absolute(0.5, "in").unwrap());
        assert_eq!(Length::centipoints(250).emus(), 31_750);
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.5in".parse::<Length>().unwrap(), Length::mils(500));
        assert_eq!("72 pt".parse::<Length>().unwrap(), Length::mils(1_000));
        assert_eq!("914400".parse::<Length>().unwrap(), Length::mils(1_000));
        assert!("-3in".parse::<Length>().is_err());
        assert!("in".parse::<Length>().is_err());
        assert!("3parsecs".parse::<Length>().is_err());
    }

    #[test]
    fn test_scale() {
        assert_eq!(Length::mils(6_000).scale(0.5).unwrap(), Length::mils(3_000));
        assert!(Length::mils(1).scale(-1.0).is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Length::from_emus(u64::MAX);
        assert_eq!(max + Length::mils(150), max);
        assert_eq!(max * 2, max);

        let mut length = Length::from_emus(u64::MAX - 1);
        length += Length::mils(1);
        assert_eq!(length, max);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::mils(7_500).to_string(), "7.500in");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_whole_inches_match_points(inches in 0u32..200) {
                let a = to_absolute(inches as f64, "in").unwrap();
                let b = to_absolute(inches as f64 * 72.0, "pt").unwrap();
                prop_assert_eq!(a, b);
                prop_assert_eq!(a, Length::mils(inches as u64 * 1_000));
            }

            #[test]
            fn prop_round_trip_through_inches(emus in 0u64..100_000_000) {
                let length = Length::from_emus(emus);
                let back = Length::new(length.inches(), LengthUnit::Inch).unwrap();
                prop_assert_eq!(back, length);
            }
        }
    }
}
