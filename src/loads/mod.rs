//! Load cases, code-mandated combinations and environmental load parameters

mod combinations;
mod environment;
mod load_case;

pub use combinations::{generate_combinations, ActiveCases, ComboClass, LoadCombination};
pub use environment::{seismic_load, wind_load, SeismicLoad, SeismicZone, WindLoad};
pub use load_case::{LoadCase, LoadCaseKind};

/// Identifier for a load combination
pub type CombinationId = u32;
