//! Input parameters for a single projection

use serde::{Deserialize, Serialize};
use crate::error::ParameterError;

/// Simulation steps per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Shortest horizon accepted by validation
pub const MIN_YEARS: u32 = 1;

/// Parameters of one projection run
///
/// Immutable per invocation: callers that let users edit values rebuild a new
/// struct on every change and pass it to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputParameters {
    /// Starting capital
    #[serde(alias = "initialPrincipal")]
    pub initial_principal: f64,

    /// Deposit added at the end of every simulated month
    #[serde(alias = "monthlyContribution")]
    pub monthly_contribution: f64,

    /// Nominal annual interest rate in percent (8.0 = 8%)
    #[serde(alias = "interestRate", alias = "annualRatePct")]
    pub annual_rate_pct: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Annual inflation rate in percent, used to discount to real terms
    #[serde(default, alias = "inflationRate", alias = "annualInflationPct")]
    pub inflation_pct: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            initial_principal: 5000.0,
            monthly_contribution: 500.0,
            annual_rate_pct: 8.0,
            years: 20,
            inflation_pct: 0.0,
        }
    }
}

impl InputParameters {
    pub fn new(
        initial_principal: f64,
        monthly_contribution: f64,
        annual_rate_pct: f64,
        years: u32,
        inflation_pct: f64,
    ) -> Self {
        Self {
            initial_principal,
            monthly_contribution,
            annual_rate_pct,
            years,
            inflation_pct,
        }
    }

    pub fn with_initial_principal(self, initial_principal: f64) -> Self {
        Self { initial_principal, ..self }
    }

    pub fn with_monthly_contribution(self, monthly_contribution: f64) -> Self {
        Self { monthly_contribution, ..self }
    }

    pub fn with_annual_rate_pct(self, annual_rate_pct: f64) -> Self {
        Self { annual_rate_pct, ..self }
    }

    pub fn with_years(self, years: u32) -> Self {
        Self { years, ..self }
    }

    pub fn with_inflation_pct(self, inflation_pct: f64) -> Self {
        Self { inflation_pct, ..self }
    }

    /// Periodic (monthly) interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / MONTHS_PER_YEAR as f64
    }

    /// Periodic (monthly) inflation rate as a decimal
    pub fn monthly_inflation(&self) -> f64 {
        self.inflation_pct / 100.0 / MONTHS_PER_YEAR as f64
    }

    /// Total number of simulated months
    ///
    /// Widened to `u64` so every `u32` horizon maps to an exact month count.
    pub fn total_months(&self) -> u64 {
        u64::from(self.years) * u64::from(MONTHS_PER_YEAR)
    }

    /// Check the engine's domain: finite, non-negative amounts and rates, at least one year
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("initial_principal", self.initial_principal),
            ("monthly_contribution", self.monthly_contribution),
            ("annual_rate_pct", self.annual_rate_pct),
            ("inflation_pct", self.inflation_pct),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ParameterError::Negative { field });
            }
        }

        if self.years < MIN_YEARS {
            return Err(ParameterError::HorizonTooShort { years: self.years, min: MIN_YEARS });
        }

        Ok(())
    }
}
