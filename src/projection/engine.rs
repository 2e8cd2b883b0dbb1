//! Core projection engine for monthly compounding with yearly output

use crate::error::ParameterError;
use crate::params::InputParameters;
use super::inflation::InflationDiscount;
use super::series::{ProjectionResult, YearPoint};
use super::state::SimulationState;

/// Upper limit on series slots reserved up front; longer horizons grow on demand
const PREALLOCATED_YEARS: u32 = 100;

/// Projection engine for one parameter set
///
/// Holds nothing but its inputs; `project` can be called any number of times
/// and always yields the same result.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: InputParameters,
}

impl ProjectionEngine {
    /// Create an engine without checking the inputs
    ///
    /// Out-of-domain values pass straight through the arithmetic: `years = 0`
    /// yields only the starting point, negative or non-finite amounts produce
    /// whatever numbers fall out. Any `u32` horizon is simulated in full, so
    /// very long ones are slow rather than truncated. Use
    /// [`ProjectionEngine::checked`] at trust boundaries.
    pub fn new(params: InputParameters) -> Self {
        Self { params }
    }

    /// Create an engine after validating the inputs
    pub fn checked(params: InputParameters) -> Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self::new(params))
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    /// Run the monthly simulation and emit one point per completed year
    pub fn project(&self) -> ProjectionResult {
        let params = &self.params;
        let monthly_rate = params.monthly_rate();
        let discount = InflationDiscount::from_params(params);

        let mut state = SimulationState::from_params(params);
        let mut series = Vec::with_capacity(params.years.min(PREALLOCATED_YEARS) as usize + 1);
        series.push(YearPoint::initial(params.initial_principal));

        for _month in 1..=params.total_months() {
            state.advance_month(monthly_rate, params.monthly_contribution);

            if state.is_year_boundary() {
                let point = Self::year_end_point(&state, &discount);
                log::trace!(
                    "year {}: nominal={:.2} real={} contributed={}",
                    point.year,
                    state.nominal_balance,
                    point.balance,
                    point.total_principal
                );
                series.push(point);
            }
        }

        let result = ProjectionResult::from_series(series);
        log::debug!(
            "Projected {} years: final balance {}, contributions {}",
            params.years,
            result.summary.final_balance,
            result.summary.total_contributions
        );
        result
    }

    /// Discount the nominal balance by the elapsed months and round for output
    fn year_end_point(state: &SimulationState, discount: &InflationDiscount) -> YearPoint {
        let real_balance = discount.real_value(state.nominal_balance, state.month);
        YearPoint::at_year_end(state.year(), real_balance, state.contributed)
    }
}

/// Project a parameter set without validation
pub fn project(params: &InputParameters) -> ProjectionResult {
    ProjectionEngine::new(*params).project()
}
