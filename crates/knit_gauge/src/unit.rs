//! Measurement units and unit-tagged lengths.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::convert::convert_unit;
use crate::error::{GaugeError, GaugeResult};

/// Centimeters in one inch.
pub const CM_PER_INCH: f64 = 2.54;

const LENGTH_PATTERN: &str =
    r#"(?i)^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*(cm|centimet(?:er|re)s?|in|inch|inches|")?\s*$"#;

/// Unit of physical length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    #[serde(alias = "in", alias = "inches")]
    Inch,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Inch => "inch",
        }
    }

    /// Short label used when rendering lengths.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Inch => "in",
        }
    }
}

impl FromStr for Unit {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(Unit::Cm),
            "in" | "inch" | "inches" | "\"" => Ok(Unit::Inch),
            other => Err(GaugeError::UnknownUnit(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical length tagged with its unit.
///
/// Arithmetic between two lengths converts the right-hand side into the
/// left-hand side's unit, so values in different units never mix silently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn cm(value: f64) -> Self {
        Self::new(value, Unit::Cm)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    /// Express this length in another unit.
    pub fn to(self, unit: Unit) -> Self {
        Self::new(convert_unit(self.value, self.unit, unit), unit)
    }

    /// Numeric value of this length in the given unit.
    pub fn value_in(self, unit: Unit) -> f64 {
        convert_unit(self.value, self.unit, unit)
    }

    pub fn is_positive(&self) -> bool {
        self.value.is_finite() && self.value > 0.0
    }

    /// Absolute difference, expressed in `self`'s unit.
    pub fn abs_diff(self, other: Length) -> Length {
        Length::new((self.value - other.value_in(self.unit)).abs(), self.unit)
    }
}

fn length_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LENGTH_PATTERN).expect("LENGTH_PATTERN is a valid regex"))
}

fn parse_parts(input: &str) -> GaugeResult<(f64, Option<Unit>)> {
    let invalid = |message: &str| GaugeError::InvalidLength {
        input: input.to_string(),
        message: message.to_string(),
    };

    let captures = length_pattern()
        .captures(input)
        .ok_or_else(|| invalid("expected a number optionally followed by 'cm' or 'in'"))?;

    let value: f64 = captures[1]
        .parse()
        .map_err(|_| invalid("not a valid number"))?;

    let unit = match captures.get(2) {
        Some(m) => Some(m.as_str().parse()?),
        None => None,
    };

    Ok((value, unit))
}

impl FromStr for Length {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_parts(s)? {
            (value, Some(unit)) => Ok(Self::new(value, unit)),
            (_, None) => Err(GaugeError::InvalidLength {
                input: s.to_string(),
                message: "missing unit (use 'cm' or 'in')".to_string(),
            }),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_amount(self.value), self.unit.abbreviation())
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length::new(self.value + rhs.value_in(self.unit), self.unit)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length::new(self.value - rhs.value_in(self.unit), self.unit)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length::new(self.value / rhs, self.unit)
    }
}

/// Render a measurement with at most two decimals and no trailing zeros.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing() {
        assert_eq!("cm".parse::<Unit>().unwrap(), Unit::Cm);
        assert_eq!("Inches".parse::<Unit>().unwrap(), Unit::Inch);
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Inch);
        assert!("mm".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::Inch).unwrap(), "\"inch\"");
        let unit: Unit = serde_json::from_str("\"in\"").unwrap();
        assert_eq!(unit, Unit::Inch);
    }

    #[test]
    fn test_length_parsing() {
        assert_eq!("45cm".parse::<Length>().unwrap(), Length::cm(45.0));
        assert_eq!("17.5 in".parse::<Length>().unwrap(), Length::inches(17.5));
        assert_eq!("10\"".parse::<Length>().unwrap(), Length::inches(10.0));
        assert!("45".parse::<Length>().is_err());
        assert!("forty cm".parse::<Length>().is_err());
    }

    #[test]
    fn test_length_arithmetic_converts_rhs() {
        let total = Length::cm(2.54) + Length::inches(1.0);
        assert_eq!(total.unit, Unit::Cm);
        assert!((total.value - 5.08).abs() < 1e-9);

        let half = Length::cm(25.0) / 2.0;
        assert_eq!(half, Length::cm(12.5));
    }

    #[test]
    fn test_length_display() {
        assert_eq!(Length::cm(50.0).to_string(), "50 cm");
        assert_eq!(Length::inches(19.686).to_string(), "19.69 in");
        assert_eq!(Length::cm(12.5).to_string(), "12.5 cm");
    }

    #[test]
    fn test_abs_diff() {
        let diff = Length::cm(50.0).abs_diff(Length::cm(47.5));
        assert_eq!(diff, Length::cm(2.5));
    }
}
