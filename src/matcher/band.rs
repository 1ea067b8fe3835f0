//! Band Comparator
//!
//! Scores one measured value against a plant's inclusive [min, max] band.
//! Inside the band earns the dimension's full weight; outside it the credit
//! decays linearly with distance from the band center, twice as fast once
//! the value is more than one band-width from the center.

use serde::{Deserialize, Serialize};

/// Where a measured value sits relative to a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandFit {
    /// value < min
    BelowRange,

    /// min <= value <= max
    WithinRange,

    /// value > max (also used for values that cannot be compared, e.g. NaN)
    AboveRange,
}

impl BandFit {
    pub fn display_text(&self) -> &'static str {
        match self {
            BandFit::BelowRange => "Below range",
            BandFit::WithinRange => "Within range",
            BandFit::AboveRange => "Above range",
        }
    }
}

/// Inclusive acceptable range for one dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn classify(&self, value: f64) -> BandFit {
        if self.contains(value) {
            BandFit::WithinRange
        } else if value < self.min {
            BandFit::BelowRange
        } else {
            BandFit::AboveRange
        }
    }
}

/// Weighted credit (0 to weight × 100) for `value` against `band`
///
/// Zero-width and inverted bands only give credit for values inside the
/// band; everything else scores 0.
pub fn band_sub_score(value: f64, band: Band, weight: f64) -> f64 {
    let full = weight * 100.0;

    if band.contains(value) {
        return full;
    }

    let range = band.width();
    if range <= 0.0 {
        return 0.0;
    }

    let distance = (value - band.center()).abs();
    if distance <= range {
        full * (1.0 - distance / range)
    } else {
        // f64::max drops NaN, so unscorable values land on 0
        (full * (1.0 - 2.0 * distance / range)).max(0.0)
    }
}

/// Weighted credit for a lower-is-better value with a tolerance ceiling
///
/// Credit falls by twice the excess (in the value's own units) per unit
/// of weight, reaching 0 at half a unit over the ceiling.
pub fn ceiling_sub_score(value: f64, ceiling: f64, weight: f64) -> f64 {
    let full = weight * 100.0;

    if value <= ceiling {
        full
    } else {
        let excess = value - ceiling;
        (full * (1.0 - 2.0 * excess)).max(0.0)
    }
}

/// Fit of a lower-is-better value against its ceiling
pub fn classify_ceiling(value: f64, ceiling: f64) -> BandFit {
    if value <= ceiling {
        BandFit::WithinRange
    } else {
        BandFit::AboveRange
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_within_band_full_weight() {
        let band = Band::new(6.0, 7.0);
        assert_relative_eq!(band_sub_score(6.0, band, 0.25), 25.0, epsilon = 1e-9);
        assert_relative_eq!(band_sub_score(6.5, band, 0.25), 25.0, epsilon = 1e-9);
        assert_relative_eq!(band_sub_score(7.0, band, 0.25), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_near_decay() {
        // Band 6-7: center 6.5, width 1.0
        // 7.25 → distance 0.75, credit 25 × 0.25
        let band = Band::new(6.0, 7.0);
        assert_relative_eq!(band_sub_score(7.25, band, 0.25), 6.25, epsilon = 1e-9);
        assert_relative_eq!(band_sub_score(5.75, band, 0.25), 6.25, epsilon = 1e-9);

        // distance exactly one width
        assert_relative_eq!(band_sub_score(7.5, band, 0.25), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_far_value_floors_at_zero() {
        // 8.0 → distance 1.5 > width, 25 × (1 - 3) clamps to 0
        let band = Band::new(6.0, 7.0);
        assert_eq!(band_sub_score(8.0, band, 0.25), 0.0);
        assert_eq!(band_sub_score(-100.0, band, 0.25), 0.0);
    }

    #[test]
    fn test_monotonic_outside_band() {
        let band = Band::new(15.0, 20.0);
        let mut previous = band_sub_score(20.0, band, 0.25);
        let mut temp = 20.0;
        while temp < 40.0 {
            temp += 0.1;
            let current = band_sub_score(temp, band, 0.25);
            assert!(current <= previous, "score rose at {}", temp);
            previous = current;
        }
    }

    #[test]
    fn test_zero_width_band() {
        let band = Band::new(7.0, 7.0);
        assert_eq!(band_sub_score(7.0, band, 0.25), 25.0);
        assert_eq!(band_sub_score(7.01, band, 0.25), 0.0);
        assert_eq!(band_sub_score(6.0, band, 0.25), 0.0);
    }

    #[test]
    fn test_inverted_band_scores_zero() {
        let band = Band::new(7.0, 6.0);
        assert_eq!(band_sub_score(6.5, band, 0.25), 0.0);
        assert_eq!(band_sub_score(100.0, band, 0.25), 0.0);
    }

    #[test]
    fn test_nan_scores_zero() {
        let band = Band::new(6.0, 7.0);
        assert_eq!(band_sub_score(f64::NAN, band, 0.25), 0.0);
        assert_eq!(band.classify(f64::NAN), BandFit::AboveRange);
        assert_eq!(ceiling_sub_score(f64::NAN, 0.5, 0.10), 0.0);
    }

    #[test]
    fn test_ceiling() {
        assert_relative_eq!(ceiling_sub_score(0.5, 0.5, 0.10), 10.0, epsilon = 1e-9);
        assert_relative_eq!(ceiling_sub_score(0.0, 0.5, 0.10), 10.0, epsilon = 1e-9);
        // excess 0.25 → 10 × 0.5
        assert_relative_eq!(ceiling_sub_score(0.75, 0.5, 0.10), 5.0, epsilon = 1e-9);
        assert_eq!(ceiling_sub_score(2.0, 0.5, 0.10), 0.0);
    }

    #[test]
    fn test_classify() {
        let band = Band::new(50.0, 400.0);
        assert_eq!(band.classify(10.0), BandFit::BelowRange);
        assert_eq!(band.classify(50.0), BandFit::WithinRange);
        assert_eq!(band.classify(401.0), BandFit::AboveRange);
        assert_eq!(classify_ceiling(0.6, 0.5), BandFit::AboveRange);
    }
}
