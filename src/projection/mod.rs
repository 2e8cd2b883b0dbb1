//! Projection engine for compound growth with monthly contributions

mod state;
mod engine;
mod series;
mod inflation;

pub use state::SimulationState;
pub use engine::{project, ProjectionEngine};
pub use series::{round_half_up, ProjectionResult, Summary, YearPoint};
pub use inflation::{purchasing_power, InflationDiscount};
