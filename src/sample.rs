//! Water-quality samples
//!
//! A sample is one set of measurements from the fish tank. The scorer
//! accepts any values; `validate` applies the range checks that request
//! handlers are expected to run before scoring.

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// Accepted pH range
pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
/// Accepted temperature range (°C)
pub const TEMPERATURE_RANGE: (f64, f64) = (-10.0, 50.0);
/// Accepted dissolved oxygen range (mg/L)
pub const DISSOLVED_OXYGEN_RANGE: (f64, f64) = (0.0, 50.0);
/// Accepted nitrate range (mg/L)
pub const NITRATE_RANGE: (f64, f64) = (0.0, 5000.0);

/// One set of water-quality measurements
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WaterSample {
    pub ph: f64,
    /// °C
    pub temperature: f64,
    /// mg/L
    pub dissolved_oxygen: f64,
    /// mg/L, 0 when not measured
    #[serde(default)]
    pub ammonia: f64,
    /// mg/L, 0 when not measured
    #[serde(default)]
    pub nitrate: f64,
}

impl WaterSample {
    /// Sample with ammonia and nitrate left at 0
    pub fn new(ph: f64, temperature: f64, dissolved_oxygen: f64) -> Self {
        Self {
            ph,
            temperature,
            dissolved_oxygen,
            ammonia: 0.0,
            nitrate: 0.0,
        }
    }

    pub fn with_ammonia(mut self, ammonia: f64) -> Self {
        self.ammonia = ammonia;
        self
    }

    pub fn with_nitrate(mut self, nitrate: f64) -> Self {
        self.nitrate = nitrate;
        self
    }

    /// Check every field against its accepted range
    ///
    /// Ammonia only has to be finite. Reports the first failing field.
    pub fn validate(&self) -> Result<(), SampleError> {
        check_range("pH", self.ph, PH_RANGE)?;
        check_range("temperature", self.temperature, TEMPERATURE_RANGE)?;
        check_range(
            "dissolved oxygen",
            self.dissolved_oxygen,
            DISSOLVED_OXYGEN_RANGE,
        )?;
        if !self.ammonia.is_finite() {
            return Err(SampleError::NotFinite { field: "ammonia" });
        }
        check_range("nitrate", self.nitrate, NITRATE_RANGE)?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), SampleError> {
    if !value.is_finite() {
        return Err(SampleError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(SampleError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_zero() {
        let sample: WaterSample =
            serde_json::from_str(r#"{"ph": 6.8, "temperature": 22.0, "dissolved_oxygen": 6.5}"#)
                .unwrap();
        assert_eq!(sample, WaterSample::new(6.8, 22.0, 6.5));
        assert_eq!(sample.ammonia, 0.0);
        assert_eq!(sample.nitrate, 0.0);
    }

    #[test]
    fn test_valid_sample() {
        let sample = WaterSample::new(7.0, 20.0, 6.0)
            .with_ammonia(0.2)
            .with_nitrate(150.0);
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(WaterSample::new(0.0, -10.0, 0.0).validate().is_ok());
        assert!(WaterSample::new(14.0, 50.0, 50.0)
            .with_nitrate(5000.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_out_of_range_reports_field() {
        let err = WaterSample::new(15.0, 20.0, 6.0).validate().unwrap_err();
        assert_eq!(
            err,
            SampleError::OutOfRange {
                field: "pH",
                value: 15.0,
                min: 0.0,
                max: 14.0
            }
        );

        let err = WaterSample::new(7.0, 20.0, 6.0)
            .with_nitrate(-1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SampleError::OutOfRange { field: "nitrate", .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let err = WaterSample::new(7.0, f64::NAN, 6.0).validate().unwrap_err();
        assert_eq!(err, SampleError::NotFinite { field: "temperature" });

        let err = WaterSample::new(7.0, 20.0, 6.0)
            .with_ammonia(f64::INFINITY)
            .validate()
            .unwrap_err();
        assert_eq!(err, SampleError::NotFinite { field: "ammonia" });
    }
}
