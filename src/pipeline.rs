//! Pipeline facade - generate, load, solve and check in one call
//!
//! Thin composition of the engine components for callers that want the whole
//! generation-to-screening pass at once. Each stage stays independently
//! usable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::design::DesignChecker;
use crate::elements::MemberId;
use crate::error::EngineResult;
use crate::generator::{generate, GridConfig};
use crate::loads::{
    generate_combinations, seismic_load, wind_load, ActiveCases, LoadCase, LoadCombination,
    SeismicLoad, WindLoad,
};
use crate::model::StructuralModel;
use crate::results::{DesignResult, MemberForceSet};
use crate::solver::Solver;
use crate::tables::CodeTables;

/// Project-level input for a full pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineInput {
    /// Footprint and story parameters
    pub grid: GridConfig,
    /// Project location for the code-table lookups
    pub location: String,
    /// Which load cases are switched on
    pub active: ActiveCases,
}

/// Everything the pipeline produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Generated geometry snapshot
    pub model: StructuralModel,
    /// Wind design parameters at roof height
    pub wind: WindLoad,
    /// Seismic design parameters
    pub seismic: SeismicLoad,
    /// Active load cases in declaration order
    pub load_cases: Vec<LoadCase>,
    /// Factored combinations in emission order
    pub combinations: Vec<LoadCombination>,
    /// Governing force set per member
    pub member_forces: BTreeMap<MemberId, MemberForceSet>,
    /// Classified check result per member
    pub design_results: BTreeMap<MemberId, DesignResult>,
}

/// Run the full generate -> load -> solve -> check pipeline
pub fn run_pipeline(
    input: &PipelineInput,
    catalog: &Catalog,
    tables: &CodeTables,
    solver: &dyn Solver,
) -> EngineResult<PipelineOutput> {
    let model = generate(&input.grid, catalog);

    let roof_height = input.grid.stories.max(0) as f64 * input.grid.story_height;
    let wind = wind_load(tables, &input.location, roof_height);
    let seismic = seismic_load(tables, &input.location);

    let load_cases = input.active.cases();
    let combinations = generate_combinations(&input.active);
    let member_forces = solver.solve(&model, catalog, &combinations)?;

    let checker = DesignChecker::new(tables.clone());
    let design_results = checker.check_model(&model.members, catalog, &member_forces);

    Ok(PipelineOutput {
        model,
        wind,
        seismic,
        load_cases,
        combinations,
        member_forces,
        design_results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::CheckStatus;
    use crate::solver::ProfileSolver;

    #[test]
    fn test_pipeline_produces_result_per_member() {
        let input = PipelineInput {
            grid: GridConfig::new(20.0, 15.0, 2),
            location: "Delhi".to_string(),
            active: ActiveCases::all(),
        };
        let catalog = Catalog::default();
        let tables = CodeTables::default();

        let output = run_pipeline(&input, &catalog, &tables, &ProfileSolver).unwrap();

        assert!(!output.model.is_empty());
        assert_eq!(output.load_cases.len(), 4);
        assert_eq!(output.load_cases[0].kind, crate::loads::LoadCaseKind::Dead);
        assert_eq!(output.combinations.len(), 4);
        assert_eq!(output.member_forces.len(), output.model.members.len());
        assert_eq!(output.design_results.len(), output.model.members.len());
        assert_eq!(output.wind.basic_speed, 47.0);

        for member in output.model.members.iter().filter(|m| m.is_column()) {
            assert_eq!(
                output.design_results[&member.id].status,
                CheckStatus::NotApplicable
            );
        }
    }

    #[test]
    fn test_pipeline_with_degenerate_grid_is_empty_but_complete() {
        let input = PipelineInput {
            grid: GridConfig::new(0.0, 15.0, 2),
            location: "Atlantis".to_string(),
            active: ActiveCases::gravity(),
        };
        let catalog = Catalog::default();
        let tables = CodeTables::default();

        let output = run_pipeline(&input, &catalog, &tables, &ProfileSolver).unwrap();
        assert!(output.model.is_empty());
        assert!(output.member_forces.is_empty());
        assert!(output.design_results.is_empty());
        // Load stages are independent of the geometry
        assert_eq!(output.combinations.len(), 1);
        assert_eq!(output.wind.basic_speed, tables.default_wind_speed);
    }
}
