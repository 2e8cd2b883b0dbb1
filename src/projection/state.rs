//! Month-by-month simulation state for a single projection

use crate::params::{InputParameters, MONTHS_PER_YEAR};

/// Nominal state of the account at the end of a simulated month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Months elapsed (0 = start, before any growth)
    pub month: u64,

    /// Nominal account value, never rounded
    pub nominal_balance: f64,

    /// Cumulative nominal contributions including the initial principal
    pub contributed: f64,
}

impl SimulationState {
    /// State at month 0
    pub fn from_params(params: &InputParameters) -> Self {
        Self {
            month: 0,
            nominal_balance: params.initial_principal,
            contributed: params.initial_principal,
        }
    }

    /// Advance one month: grow the balance, then add the end-of-month deposit
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.month += 1;
        self.nominal_balance *= 1.0 + monthly_rate;
        self.nominal_balance += contribution;
        self.contributed += contribution;
    }

    /// True when the current month closes a projection year
    pub fn is_year_boundary(&self) -> bool {
        self.month > 0 && self.month % u64::from(MONTHS_PER_YEAR) == 0
    }

    /// Completed years at the current month
    ///
    /// Saturates at `u32::MAX`, which no `u32` horizon can exceed.
    pub fn year(&self) -> u32 {
        u32::try_from(self.month / u64::from(MONTHS_PER_YEAR)).unwrap_or(u32::MAX)
    }
}
