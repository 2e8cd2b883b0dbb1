//! Declared input ranges for each parameter field
//!
//! Front ends enforce these before a projection runs: `check` produces the
//! field-level message while the user is typing, `clamp` pulls the value back
//! into range once editing is finished.

use serde::Serialize;
use crate::error::ParameterError;
use super::InputParameters;

/// Range and step of one input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldBounds {
    pub field: &'static str,
    pub min: f64,
    /// Absolute maximum accepted from typed input
    pub max: f64,
    /// Upper end of the slider; larger values are still valid up to `max`
    pub slider_max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub const fn new(field: &'static str, min: f64, max: f64, slider_max: f64, step: f64) -> Self {
        Self { field, min, max, slider_max, step }
    }

    /// Validate a typed value against this field's range
    pub fn check(&self, value: f64) -> Result<(), ParameterError> {
        if !value.is_finite() {
            Err(ParameterError::NotFinite { field: self.field })
        } else if value < 0.0 {
            Err(ParameterError::Negative { field: self.field })
        } else if value > self.max {
            Err(ParameterError::AboveMaximum { field: self.field, max: self.max })
        } else if value < self.min {
            Err(ParameterError::BelowMinimum { field: self.field, min: self.min })
        } else {
            Ok(())
        }
    }

    /// Pull a value back into `[min, max]`; non-finite input falls back to `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Whether the value sits beyond the slider track (shown with an overflow marker)
    pub fn exceeds_slider(&self, value: f64) -> bool {
        value > self.slider_max
    }
}

/// Bounds for every field of [`InputParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterBounds {
    pub initial_principal: FieldBounds,
    pub monthly_contribution: FieldBounds,
    pub annual_rate_pct: FieldBounds,
    pub years: FieldBounds,
    pub inflation_pct: FieldBounds,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            initial_principal: FieldBounds::new("initial_principal", 0.0, 10_000_000.0, 100_000.0, 100.0),
            monthly_contribution: FieldBounds::new("monthly_contribution", 0.0, 500_000.0, 5_000.0, 50.0),
            annual_rate_pct: FieldBounds::new("annual_rate_pct", 0.0, 100.0, 15.0, 0.1),
            years: FieldBounds::new("years", 1.0, 100.0, 50.0, 1.0),
            inflation_pct: FieldBounds::new("inflation_pct", 0.0, 50.0, 10.0, 0.1),
        }
    }
}

impl ParameterBounds {
    /// First field that falls outside its declared range, if any
    pub fn check(&self, params: &InputParameters) -> Result<(), ParameterError> {
        self.initial_principal.check(params.initial_principal)?;
        self.monthly_contribution.check(params.monthly_contribution)?;
        self.annual_rate_pct.check(params.annual_rate_pct)?;
        self.years.check(params.years as f64)?;
        self.inflation_pct.check(params.inflation_pct)?;
        Ok(())
    }

    /// Copy of `params` with every field clamped into range
    pub fn clamp(&self, params: &InputParameters) -> InputParameters {
        InputParameters {
            initial_principal: self.initial_principal.clamp(params.initial_principal),
            monthly_contribution: self.monthly_contribution.clamp(params.monthly_contribution),
            annual_rate_pct: self.annual_rate_pct.clamp(params.annual_rate_pct),
            years: self.years.clamp(params.years as f64) as u32,
            inflation_pct: self.inflation_pct.clamp(params.inflation_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_messages() {
        let bounds = ParameterBounds::default();

        assert!(bounds.monthly_contribution.check(250.0).is_ok());

        let err = bounds.monthly_contribution.check(-10.0).unwrap_err();
        assert_eq!(err, ParameterError::Negative { field: "monthly_contribution" });

        let err = bounds.annual_rate_pct.check(120.0).unwrap_err();
        assert_eq!(err.to_string(), "annual_rate_pct: maximum allowed value is 100");

        let err = bounds.years.check(0.0).unwrap_err();
        assert_eq!(err, ParameterError::BelowMinimum { field: "years", min: 1.0 });
    }

    #[test]
    fn test_clamp_pulls_values_into_range() {
        let bounds = ParameterBounds::default();
        let params = InputParameters::new(20_000_000.0, -5.0, 150.0, 0, 60.0);

        let clamped = bounds.clamp(&params);
        assert_eq!(clamped, InputParameters::new(10_000_000.0, 0.0, 100.0, 1, 50.0));
        assert!(bounds.check(&clamped).is_ok());
    }

    #[test]
    fn test_clamp_leaves_valid_values_alone() {
        let bounds = ParameterBounds::default();
        let params = InputParameters::default();
        assert_eq!(bounds.clamp(&params), params);
    }

    #[test]
    fn test_slider_overflow() {
        let bounds = ParameterBounds::default();
        assert!(bounds.initial_principal.exceeds_slider(250_000.0));
        assert!(!bounds.initial_principal.exceeds_slider(100_000.0));
        assert!(bounds.initial_principal.check(250_000.0).is_ok());
    }
}
