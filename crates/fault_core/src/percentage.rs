//! Activation percentage value object
//!
//! The configured fraction of requests a fault applies to, expressed as a
//! numerator over an enumerated denominator scale. Resolvers store and
//! expose this value unchanged; rolling the dice against it belongs to the
//! embedding filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Denominator scale of an [`ActivationPercentage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominatorScale {
    /// Whole percent (out of 100)
    #[default]
    Hundred,
    /// Basis points (out of 10,000)
    TenThousand,
    /// Parts per million (out of 1,000,000)
    Million,
}

impl DenominatorScale {
    /// Numeric value of the scale
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Hundred => 100,
            Self::TenThousand => 10_000,
            Self::Million => 1_000_000,
        }
    }
}

/// Fraction of requests a fault applies to
///
/// Immutable once constructed. A numerator of zero never fires; a numerator
/// at or above the denominator always fires. The default is `0/100`.
///
/// # Examples
///
/// ```
/// use fault_core::{ActivationPercentage, DenominatorScale};
///
/// let p = ActivationPercentage::new(25, DenominatorScale::Hundred);
/// assert_eq!(p.numerator(), 25);
/// assert_eq!(p.denominator().value(), 100);
/// assert_eq!(format!("{p}"), "25/100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActivationPercentage {
    #[serde(default)]
    numerator: u32,
    #[serde(default)]
    denominator: DenominatorScale,
}

impl ActivationPercentage {
    /// Create a percentage from a numerator and a denominator scale
    #[must_use]
    pub const fn new(numerator: u32, denominator: DenominatorScale) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Percentage that never applies (`0/100`)
    #[must_use]
    pub const fn never() -> Self {
        Self::new(0, DenominatorScale::Hundred)
    }

    /// Percentage that always applies (`100/100`)
    #[must_use]
    pub const fn always() -> Self {
        Self::new(100, DenominatorScale::Hundred)
    }

    /// The configured numerator
    #[must_use]
    pub const fn numerator(self) -> u32 {
        self.numerator
    }

    /// The configured denominator scale
    #[must_use]
    pub const fn denominator(self) -> DenominatorScale {
        self.denominator
    }

    /// The fraction as a float; may exceed `1.0` when the numerator is
    /// larger than the denominator scale
    #[must_use]
    pub fn as_ratio(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator.value())
    }
}

impl fmt::Display for ActivationPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_preserves_parts() {
        let p = ActivationPercentage::new(37, DenominatorScale::TenThousand);
        assert_eq!(p.numerator(), 37);
        assert_eq!(p.denominator(), DenominatorScale::TenThousand);
    }

    #[test]
    fn never_has_zero_numerator() {
        assert_eq!(ActivationPercentage::never().numerator(), 0);
    }

    #[test]
    fn always_is_full_fraction() {
        let p = ActivationPercentage::always();
        assert_eq!(p.numerator(), p.denominator().value());
    }

    #[test]
    fn default_never_fires() {
        let p = ActivationPercentage::default();
        assert_eq!(p, ActivationPercentage::never());
    }

    #[test]
    fn scale_values() {
        assert_eq!(DenominatorScale::Hundred.value(), 100);
        assert_eq!(DenominatorScale::TenThousand.value(), 10_000);
        assert_eq!(DenominatorScale::Million.value(), 1_000_000);
    }

    #[test]
    fn ratio_handles_overfull_numerator() {
        let p = ActivationPercentage::new(150, DenominatorScale::Hundred);
        assert!((p.as_ratio() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn display_format() {
        let p = ActivationPercentage::new(5, DenominatorScale::Million);
        assert_eq!(format!("{p}"), "5/1000000");
    }

    #[test]
    fn serde_roundtrip() {
        let p = ActivationPercentage::new(250, DenominatorScale::TenThousand);
        let json = serde_json::to_string(&p).unwrap();
        let back: ActivationPercentage = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let p: ActivationPercentage = serde_json::from_str(r#"{"numerator": 50}"#).unwrap();
        assert_eq!(p.numerator(), 50);
        assert_eq!(p.denominator(), DenominatorScale::Hundred);
    }

    #[test]
    fn serde_rejects_unknown_scale() {
        let result: Result<ActivationPercentage, _> =
            serde_json::from_str(r#"{"numerator": 1, "denominator": "thousand"}"#);
        assert!(result.is_err());
    }
}
