//! Inflation discounting from nominal to real (present-value) terms

use crate::params::InputParameters;

/// Monthly inflation discount applied at year boundaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationDiscount {
    /// Periodic (monthly) inflation rate as a decimal
    pub monthly_inflation: f64,
}

impl InflationDiscount {
    pub fn new(monthly_inflation: f64) -> Self {
        Self { monthly_inflation }
    }

    pub fn from_params(params: &InputParameters) -> Self {
        Self::new(params.monthly_inflation())
    }

    /// Discount factor to a given elapsed month: `1 / (1 + i)^months`
    pub fn discount_to_month(&self, months: u64) -> f64 {
        let growth = 1.0 + self.monthly_inflation;
        match i32::try_from(months) {
            Ok(n) => 1.0 / growth.powi(n),
            Err(_) => 1.0 / growth.powf(months as f64),
        }
    }

    /// Real value of a nominal amount observed after `months`
    pub fn real_value(&self, nominal: f64, months: u64) -> f64 {
        nominal * self.discount_to_month(months)
    }
}

/// Rough purchasing power of `amount` after `years` of inflation
///
/// Uses the simple `amount * (1 - rate)^years` illustration shown next to the
/// inflation input (10 000 at 3% over 20 years is about 5 438), not the
/// monthly discount the engine applies.
pub fn purchasing_power(amount: f64, annual_inflation_pct: f64, years: u32) -> f64 {
    amount * (1.0 - annual_inflation_pct / 100.0).powi(years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_inflation_is_identity() {
        let discount = InflationDiscount::new(0.0);
        assert_eq!(discount.discount_to_month(240), 1.0);
        assert_eq!(discount.real_value(1234.5, 120), 1234.5);
    }

    #[test]
    fn test_discount_compounds_monthly() {
        let discount = InflationDiscount::from_params(&InputParameters::default().with_inflation_pct(12.0));
        assert_relative_eq!(discount.discount_to_month(12), 1.0 / 1.01_f64.powi(12), epsilon = 1e-12);
        assert!(discount.discount_to_month(24) < discount.discount_to_month(12));
    }

    #[test]
    fn test_discount_beyond_i32_months() {
        let discount = InflationDiscount::new(0.0);
        assert_eq!(discount.discount_to_month(4_800_000_000), 1.0);

        let discount = InflationDiscount::new(1e-10);
        assert!(discount.discount_to_month(3_000_000_000) < discount.discount_to_month(2_000_000_000));
    }

    #[test]
    fn test_purchasing_power_example() {
        assert_relative_eq!(purchasing_power(10_000.0, 3.0, 20), 5437.94, epsilon = 0.01);
        assert_eq!(purchasing_power(10_000.0, 0.0, 20), 10_000.0);
    }
}
