//! framegen - parametric structural frame generation and screening
//!
//! Given coarse project parameters (plot footprint, story count, location,
//! active load cases) this library produces a regular 3D structural grid,
//! computes code-table wind and seismic design parameters with their factored
//! load combinations, estimates member forces through a pluggable solver seam
//! and screens each member against a representative flexure check.
//!
//! ## Example
//! ```rust
//! use framegen::prelude::*;
//!
//! let catalog = Catalog::default();
//! let tables = CodeTables::default();
//!
//! // Generate a 4-story frame on a 60 x 40 m plot
//! let model = generate(&GridConfig::new(60.0, 40.0, 4), &catalog);
//! assert_eq!(model.nodes.len(), 585);
//!
//! // Environmental loads and factored combinations
//! let wind = wind_load(&tables, "Delhi", 12.0);
//! assert_eq!(wind.basic_speed, 47.0);
//! let combos = generate_combinations(&ActiveCases::gravity());
//!
//! // Estimate forces and screen each member
//! let forces = ProfileSolver.solve(&model, &catalog, &combos).unwrap();
//! let results = DesignChecker::default().check_model(&model.members, &catalog, &forces);
//! assert_eq!(results.len(), model.members.len());
//! ```

pub mod catalog;
pub mod design;
pub mod elements;
pub mod error;
pub mod generator;
pub mod loads;
pub mod math;
pub mod model;
pub mod mutation;
pub mod pipeline;
pub mod results;
pub mod solver;
pub mod tables;

// Re-export common types
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::design::DesignChecker;
    pub use crate::elements::{
        Material, MaterialKind, Member, MemberKind, Node, Plate, Restraint, Section, Support,
    };
    pub use crate::error::{EngineError, EngineResult};
    pub use crate::generator::{generate, GridConfig};
    pub use crate::loads::{
        generate_combinations, seismic_load, wind_load, ActiveCases, ComboClass, LoadCase,
        LoadCaseKind, LoadCombination, SeismicLoad, SeismicZone, WindLoad,
    };
    pub use crate::model::StructuralModel;
    pub use crate::mutation::{apply, MemberPatch, Mutation, NodePatch};
    pub use crate::pipeline::{run_pipeline, PipelineInput, PipelineOutput};
    pub use crate::results::{CheckStatus, DesignResult, MemberForceSet};
    pub use crate::solver::{ProfileSolver, Solver, StiffnessSolver};
    pub use crate::tables::CodeTables;
}
