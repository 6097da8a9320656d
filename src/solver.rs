//! Structural solver seam
//!
//! `Solver` is the pluggable force-estimation contract: one force set per
//! member, tagged with its governing combination. Downstream consumers depend
//! only on the shape of the map, never on how it was produced.
//!
//! Two strategies are provided: [`ProfileSolver`], a deterministic type-based
//! profile lookup for fast feedback and testing, and [`StiffnessSolver`], a
//! linear-elastic direct-stiffness frame solve under self-weight and floor
//! loads.

use std::collections::BTreeMap;

use log::debug;

use crate::catalog::Catalog;
use crate::elements::{Member, MemberId, NodeId};
use crate::error::{EngineError, EngineResult};
use crate::loads::{CombinationId, LoadCaseKind, LoadCombination};
use crate::math::{self, DVec, Mat, Vec12};
use crate::model::StructuralModel;
use crate::results::MemberForceSet;

/// Gravitational acceleration, m/s²
const GRAVITY: f64 = 9.81;
/// Uniform floor live load, N/m²
const FLOOR_LIVE_LOAD: f64 = 3000.0;

/// Pluggable force-estimation strategy
pub trait Solver {
    /// Produce one force set per member under the given combinations
    fn solve(
        &self,
        model: &StructuralModel,
        catalog: &Catalog,
        combos: &[LoadCombination],
    ) -> EngineResult<BTreeMap<MemberId, MemberForceSet>>;
}

/// Deterministic type-based force-profile estimator
///
/// Columns receive an axial-dominant profile, beams a flexure/shear-dominant
/// one, scaled by the governing combination's dead-load factor. Suitable for
/// interactive feedback; not a structural analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSolver;

impl ProfileSolver {
    /// Pick the combination with the largest dead-load factor; ties go to the
    /// first emitted. Empty input behaves as a single unit-factor case.
    fn governing_combo(combos: &[LoadCombination]) -> (CombinationId, f64) {
        let mut best: Option<(CombinationId, f64)> = None;
        for combo in combos {
            let factor = combo.factor(LoadCaseKind::Dead);
            if best.map_or(true, |(_, f)| factor > f) {
                best = Some((combo.id, factor));
            }
        }
        best.unwrap_or((0, 1.0))
    }

    fn profile(member: &Member, combo: CombinationId, scale: f64) -> MemberForceSet {
        let mut forces = MemberForceSet::zero(combo);
        if member.is_column() {
            // Axial-dominant: service-level gravity column load with a
            // nominal frame-action moment
            forces.axial = 350e3 * scale;
            forces.shear_y = 6e3 * scale;
            forces.moment_z = 8e3 * scale;
        } else {
            // Flexure/shear-dominant beam profile
            forces.shear_y = 45e3 * scale;
            forces.moment_z = 55e3 * scale;
        }
        forces
    }
}

impl Solver for ProfileSolver {
    fn solve(
        &self,
        model: &StructuralModel,
        _catalog: &Catalog,
        combos: &[LoadCombination],
    ) -> EngineResult<BTreeMap<MemberId, MemberForceSet>> {
        let (combo, factor) = Self::governing_combo(combos);
        debug!(
            "Profile solve: {} members, governing combo {} (factor {})",
            model.members.len(),
            combo,
            factor
        );

        Ok(model
            .members
            .iter()
            .map(|m| (m.id, Self::profile(m, combo, factor)))
            .collect())
    }
}

/// Linear-elastic direct-stiffness frame solver
///
/// Derives gravity loads from the model itself: member self-weight plus slab
/// dead load lumped to plate corners, and a uniform floor live load on slabs.
/// Lateral case factors are honored but no wind/seismic load pattern is
/// applied here; that extension rides on the same contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct StiffnessSolver;

struct MemberContext {
    t: math::Mat12,
    k_local: math::Mat12,
    /// Unfactored self-weight fixed end reactions in local coordinates
    fer_dead: Vec12,
    start: NodeId,
    end: NodeId,
}

impl StiffnessSolver {
    fn member_context(
        model: &StructuralModel,
        catalog: &Catalog,
        member: &Member,
    ) -> EngineResult<MemberContext> {
        let start = model
            .node(member.start_node)
            .ok_or(EngineError::NodeNotFound(member.start_node))?;
        let end = model
            .node(member.end_node)
            .ok_or(EngineError::NodeNotFound(member.end_node))?;
        let material = catalog
            .material(member.material)
            .ok_or(EngineError::MaterialNotFound(member.material))?;
        let section = catalog
            .section(member.section)
            .ok_or(EngineError::SectionNotFound(member.section))?;

        let length = start.distance_to(end);
        if length < 1e-10 {
            return Err(EngineError::InvalidGeometry(format!(
                "Member {} has zero length",
                member.id
            )));
        }

        let (a, iy, iz, j) = match (section.area(), section.iy(), section.iz(), section.j()) {
            (Some(a), Some(iy), Some(iz), Some(j)) => (a, iy, iz, j),
            _ => {
                return Err(EngineError::InvalidGeometry(format!(
                    "Section {} lacks the dimensions for a frame solve",
                    section.id
                )))
            }
        };

        let t = math::member_transformation_matrix(&start.coords(), &end.coords());
        let k_local = math::member_local_stiffness(material.e, material.g(), a, iy, iz, j, length);

        // Self-weight acts along global -Y; vertical members carry it
        // axially, horizontal ones transversely in local y
        let w = material.density * a * GRAVITY;
        let vertical = (end.x - start.x).abs() < 1e-10 && (end.z - start.z).abs() < 1e-10;
        let fer_dead = if vertical {
            let sign = if end.y > start.y { -1.0 } else { 1.0 };
            math::fer_uniform_load(sign * w, length, 0)
        } else {
            math::fer_uniform_load(-w, length, 1)
        };

        Ok(MemberContext {
            t,
            k_local,
            fer_dead,
            start: member.start_node,
            end: member.end_node,
        })
    }

    /// Horizontal projected area of a plate loop (shoelace over x-z)
    fn plate_area(model: &StructuralModel, node_ids: &[NodeId]) -> f64 {
        let coords: Vec<[f64; 3]> = node_ids
            .iter()
            .filter_map(|&id| model.node(id).map(|n| n.coords()))
            .collect();
        if coords.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        for i in 0..coords.len() {
            let a = &coords[i];
            let b = &coords[(i + 1) % coords.len()];
            twice_area += a[0] * b[2] - b[0] * a[2];
        }
        (twice_area / 2.0).abs()
    }

    /// Unfactored vertical nodal loads (N, negative = down) per load case
    /// kind, lumped from the slabs to their corner nodes
    fn slab_nodal_loads(
        model: &StructuralModel,
        catalog: &Catalog,
        kind: LoadCaseKind,
    ) -> BTreeMap<NodeId, f64> {
        let mut loads: BTreeMap<NodeId, f64> = BTreeMap::new();
        for plate in &model.plates {
            let area = Self::plate_area(model, &plate.node_ids);
            if area <= 0.0 || plate.node_ids.is_empty() {
                continue;
            }
            let pressure = match kind {
                LoadCaseKind::Dead => {
                    let density = catalog
                        .material(plate.material)
                        .map(|m| m.density)
                        .unwrap_or(2500.0);
                    density * plate.thickness * GRAVITY
                }
                LoadCaseKind::Live => FLOOR_LIVE_LOAD,
                _ => continue,
            };
            let per_corner = pressure * area / plate.node_ids.len() as f64;
            for &node in &plate.node_ids {
                *loads.entry(node).or_insert(0.0) -= per_corner;
            }
        }
        loads
    }
}

impl Solver for StiffnessSolver {
    fn solve(
        &self,
        model: &StructuralModel,
        catalog: &Catalog,
        combos: &[LoadCombination],
    ) -> EngineResult<BTreeMap<MemberId, MemberForceSet>> {
        if model.members.is_empty() {
            return Ok(BTreeMap::new());
        }

        // Node id -> DOF base index, in model order
        let dof_map: BTreeMap<NodeId, usize> = model
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id, i * 6))
            .collect();
        let n_dofs = model.nodes.len() * 6;

        // Member contexts and global stiffness assembly
        let mut contexts: BTreeMap<MemberId, MemberContext> = BTreeMap::new();
        let mut k_global = Mat::zeros(n_dofs, n_dofs);
        for member in &model.members {
            let ctx = Self::member_context(model, catalog, member)?;
            let k_member = ctx.t.transpose() * ctx.k_local * ctx.t;
            let i_dof = dof_map[&ctx.start];
            let j_dof = dof_map[&ctx.end];
            for a in 0..6 {
                for b in 0..6 {
                    k_global[(i_dof + a, i_dof + b)] += k_member[(a, b)];
                    k_global[(i_dof + a, j_dof + b)] += k_member[(a, b + 6)];
                    k_global[(j_dof + a, i_dof + b)] += k_member[(a + 6, b)];
                    k_global[(j_dof + a, j_dof + b)] += k_member[(a + 6, b + 6)];
                }
            }
            contexts.insert(member.id, ctx);
        }

        // Free/restrained DOF partition from the supports
        let mut free_dofs: Vec<usize> = Vec::new();
        for node in &model.nodes {
            let base = dof_map[&node.id];
            let restrained = model
                .support_at(node.id)
                .map(|s| s.restraint.restrained_dofs())
                .unwrap_or([false; 6]);
            for (i, &fixed) in restrained.iter().enumerate() {
                if !fixed {
                    free_dofs.push(base + i);
                }
            }
        }
        if free_dofs.len() == n_dofs {
            return Err(EngineError::Unstable(
                "model has no supports".to_string(),
            ));
        }
        if free_dofs.is_empty() {
            return Err(EngineError::Unstable(
                "no free degrees of freedom".to_string(),
            ));
        }

        let slab_dead = Self::slab_nodal_loads(model, catalog, LoadCaseKind::Dead);
        let slab_live = Self::slab_nodal_loads(model, catalog, LoadCaseKind::Live);

        // Default to a single unit dead-load case when no combination is given
        let fallback = [LoadCombination::new(
            0,
            "DL",
            crate::loads::ComboClass::Sls,
            &[(LoadCaseKind::Dead, 1.0)],
        )];
        let combos = if combos.is_empty() {
            &fallback[..]
        } else {
            combos
        };

        let n_free = free_dofs.len();
        let mut k11 = Mat::zeros(n_free, n_free);
        for (i, &di) in free_dofs.iter().enumerate() {
            for (j, &dj) in free_dofs.iter().enumerate() {
                k11[(i, j)] = k_global[(di, dj)];
            }
        }
        let lu = k11.lu();

        let mut results: BTreeMap<MemberId, MemberForceSet> = BTreeMap::new();

        for combo in combos {
            let dead = combo.factor(LoadCaseKind::Dead);
            let live = combo.factor(LoadCaseKind::Live);

            // Global load vector: slab loads at nodes, self-weight as member
            // fixed end reactions transformed to global and negated
            let mut p = DVec::zeros(n_dofs);
            for (&node, &load) in &slab_dead {
                p[dof_map[&node] + 1] += dead * load;
            }
            for (&node, &load) in &slab_live {
                p[dof_map[&node] + 1] += live * load;
            }
            for ctx in contexts.values() {
                let fer_global = ctx.t.transpose() * (ctx.fer_dead * dead);
                let i_dof = dof_map[&ctx.start];
                let j_dof = dof_map[&ctx.end];
                for i in 0..6 {
                    p[i_dof + i] -= fer_global[i];
                    p[j_dof + i] -= fer_global[i + 6];
                }
            }

            let mut p1 = DVec::zeros(n_free);
            for (i, &di) in free_dofs.iter().enumerate() {
                p1[i] = p[di];
            }

            let d1 = lu.solve(&p1).ok_or(EngineError::SingularMatrix)?;

            let mut d_full = DVec::zeros(n_dofs);
            for (i, &di) in free_dofs.iter().enumerate() {
                d_full[di] = d1[i];
            }

            // Member end forces: F = K_local * d_local + factored FER
            for (member_id, ctx) in &contexts {
                let i_dof = dof_map[&ctx.start];
                let j_dof = dof_map[&ctx.end];
                let mut d_global = Vec12::zeros();
                for i in 0..6 {
                    d_global[i] = d_full[i_dof + i];
                    d_global[i + 6] = d_full[j_dof + i];
                }
                let d_local = ctx.t * d_global;
                let f_local = ctx.k_local * d_local + ctx.fer_dead * dead;

                let candidate = MemberForceSet {
                    axial: f_local[0],
                    shear_y: f_local[1],
                    shear_z: f_local[2],
                    torsion: -f_local[3],
                    moment_y: f_local[4],
                    moment_z: f_local[5],
                    combo: combo.id,
                };

                // Envelope across combinations by flexural demand, then axial
                let replace = match results.get(member_id) {
                    None => true,
                    Some(best) => {
                        candidate.flexural_demand() > best.flexural_demand()
                            || (candidate.flexural_demand() == best.flexural_demand()
                                && candidate.axial.abs() > best.axial.abs())
                    }
                };
                if replace {
                    results.insert(*member_id, candidate);
                }
            }
        }

        debug!(
            "Stiffness solve: {} members, {} combinations, {} free DOFs",
            results.len(),
            combos.len(),
            n_free
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GridConfig};
    use crate::loads::{generate_combinations, ActiveCases};

    #[test]
    fn test_profile_solver_covers_every_member() {
        let catalog = Catalog::default();
        let model = generate(&GridConfig::new(20.0, 15.0, 2), &catalog);
        let combos = generate_combinations(&ActiveCases::gravity());

        let forces = ProfileSolver.solve(&model, &catalog, &combos).unwrap();
        assert_eq!(forces.len(), model.members.len());
        for member in &model.members {
            let f = &forces[&member.id];
            assert_eq!(f.combo, 1);
            if member.is_column() {
                assert!(f.axial.abs() > f.moment_z.abs());
            } else {
                assert!(f.moment_z.abs() > 0.0);
                assert_eq!(f.axial, 0.0);
            }
        }
    }

    #[test]
    fn test_profile_solver_scales_with_combo_factor() {
        let catalog = Catalog::default();
        let model = generate(&GridConfig::new(10.0, 10.0, 1), &catalog);
        let combos = generate_combinations(&ActiveCases::gravity());

        let factored = ProfileSolver.solve(&model, &catalog, &combos).unwrap();
        let unfactored = ProfileSolver.solve(&model, &catalog, &[]).unwrap();

        let beam = model.members.iter().find(|m| m.is_beam()).unwrap();
        let ratio = factored[&beam.id].moment_z / unfactored[&beam.id].moment_z;
        assert!((ratio - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_stiffness_solver_gravity_columns_in_compression() {
        let catalog = Catalog::default();
        let model = generate(&GridConfig::new(10.0, 10.0, 1), &catalog);
        let combos = generate_combinations(&ActiveCases::gravity());

        let forces = StiffnessSolver.solve(&model, &catalog, &combos).unwrap();
        assert_eq!(forces.len(), model.members.len());

        for member in model.members.iter().filter(|m| m.is_column()) {
            // Compression-positive axial under gravity
            assert!(
                forces[&member.id].axial > 0.0,
                "column {} not in compression",
                member.id
            );
        }
        let any_beam = model.members.iter().find(|m| m.is_beam()).unwrap();
        assert!(forces[&any_beam.id].flexural_demand() > 0.0);
    }

    #[test]
    fn test_stiffness_solver_rejects_unsupported_model() {
        let catalog = Catalog::default();
        let mut model = generate(&GridConfig::new(10.0, 10.0, 1), &catalog);
        model.supports.clear();
        let result = StiffnessSolver.solve(&model, &catalog, &[]);
        assert!(matches!(result, Err(EngineError::Unstable(_))));
    }

    #[test]
    fn test_empty_model_yields_empty_map() {
        let catalog = Catalog::default();
        let model = StructuralModel::new();
        let forces = StiffnessSolver.solve(&model, &catalog, &[]).unwrap();
        assert!(forces.is_empty());
    }
}
