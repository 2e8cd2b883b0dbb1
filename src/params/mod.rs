//! Investment parameters, field bounds and scenario loading

mod data;
pub mod bounds;
pub mod loader;

pub use data::{InputParameters, MONTHS_PER_YEAR, MIN_YEARS};
pub use bounds::{FieldBounds, ParameterBounds};
pub use loader::{load_scenarios, load_scenarios_from_reader};
