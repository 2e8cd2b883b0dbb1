//! Investment Projection - compound growth engine with inflation adjustment
//!
//! This library provides:
//! - A deterministic month-by-month projection reported once per year
//! - Inflation discounting of balances to real (present-value) terms
//! - Parameter validation, field bounds and clamping
//! - Side-by-side scenario comparison and parallel batch runs
//! - CSV report export and localized currency formatting

pub mod error;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod report;
pub mod config;
pub mod api;

// Re-export commonly used types
pub use error::{ParameterError, LoadError, ConfigError, ApiError};
pub use params::{InputParameters, ParameterBounds};
pub use projection::{project, ProjectionEngine, ProjectionResult, Summary, YearPoint};
pub use scenario::{Scenario, ScenarioRunner, Comparison, merge_series};
pub use config::Settings;
