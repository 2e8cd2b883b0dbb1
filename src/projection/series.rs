//! Yearly output series and summary for a projection

use serde::{Deserialize, Serialize};

/// Round to the nearest whole unit, halves toward positive infinity
///
/// `2.5 -> 3`, `-2.5 -> -2`. `f64::round` sends negative halves away from
/// zero, which would shift negative interest figures by one unit.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Account position at the end of a projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Completed years (0 = start, before any growth)
    pub year: u32,

    /// Inflation-adjusted (real) account value, rounded to whole units
    pub balance: f64,

    /// Nominal contributions to date including the principal, rounded
    pub total_principal: f64,

    /// Real balance minus nominal contributions, rounded
    pub interest: f64,
}

impl YearPoint {
    /// Starting point: nothing has grown yet, values are taken as given
    pub fn initial(principal: f64) -> Self {
        Self {
            year: 0,
            balance: principal,
            total_principal: principal,
            interest: 0.0,
        }
    }

    /// Point emitted at a year boundary from unrounded simulation values
    pub fn at_year_end(year: u32, real_balance: f64, contributed: f64) -> Self {
        Self {
            year,
            balance: round_half_up(real_balance),
            total_principal: round_half_up(contributed),
            interest: round_half_up(real_balance - contributed),
        }
    }
}

/// Headline figures taken from the final year of a projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

impl From<&YearPoint> for Summary {
    fn from(point: &YearPoint) -> Self {
        Self {
            final_balance: point.balance,
            total_contributions: point.total_principal,
            total_interest: point.interest,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One point per year, `0..=years`
    pub series: Vec<YearPoint>,

    /// Copy of the last point's figures
    pub summary: Summary,
}

impl ProjectionResult {
    /// Build a result, deriving the summary from the last point of the series
    pub fn from_series(series: Vec<YearPoint>) -> Self {
        let summary = series.last().map(Summary::from).unwrap_or_default();
        Self { series, summary }
    }
}
