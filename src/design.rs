//! Design checker - screens members against a representative capacity check
//!
//! The check in scope is beam flexure per the limiting-moment formula
//! Mu_lim = k * fck * b * (d - cover)². Columns, members with unresolvable
//! catalog references and degenerate sections come back as `NotApplicable`
//! rather than failing the batch; the same member-to-result contract is the
//! seat for future shear, column-interaction and steel checks.

use std::collections::BTreeMap;

use log::debug;

use crate::catalog::Catalog;
use crate::elements::{Member, MemberId};
use crate::results::{DesignResult, MemberForceSet};
use crate::tables::CodeTables;

/// Label of the flexure check
pub const FLEXURE_CHECK: &str = "Beam flexure (limit state)";

/// Screens members against the code tables' capacity constants
#[derive(Debug, Clone)]
pub struct DesignChecker {
    tables: CodeTables,
}

impl DesignChecker {
    /// Create a checker over the given code tables
    pub fn new(tables: CodeTables) -> Self {
        Self { tables }
    }

    /// Limiting moment of resistance for a rectangular section, N·m
    ///
    /// Returns None when the section lacks dimensions or the effective depth
    /// after cover deduction is non-positive.
    fn limiting_moment(&self, fck: f64, breadth: f64, depth: f64) -> Option<f64> {
        let d_eff = depth - self.tables.effective_cover;
        if d_eff <= 0.0 || breadth <= 0.0 || fck <= 0.0 {
            return None;
        }
        Some(self.tables.flexure_k * fck * breadth * d_eff * d_eff)
    }

    /// Check one member against its force set
    pub fn check_member(
        &self,
        member: &Member,
        catalog: &Catalog,
        forces: &MemberForceSet,
    ) -> DesignResult {
        if !member.is_beam() {
            return DesignResult::not_applicable();
        }

        let (section, material) = match (
            catalog.section(member.section),
            catalog.material(member.material),
        ) {
            (Some(s), Some(m)) => (s, m),
            _ => return DesignResult::not_applicable(),
        };

        let (breadth, depth) = match (section.breadth(), section.depth()) {
            (Some(b), Some(d)) => (b, d),
            _ => return DesignResult::not_applicable(),
        };

        let mu_lim = match self.limiting_moment(material.strength, breadth, depth) {
            Some(mu) => mu,
            None => return DesignResult::not_applicable(),
        };

        let demand = forces.moment_z.abs();
        let utilization = demand / mu_lim;
        DesignResult::from_utilization(utilization, FLEXURE_CHECK, forces.combo)
    }

    /// Check every member with a force set; members without one are skipped
    ///
    /// One unanalyzable member never blocks reporting on the rest.
    pub fn check_model(
        &self,
        members: &[Member],
        catalog: &Catalog,
        forces: &BTreeMap<MemberId, MemberForceSet>,
    ) -> BTreeMap<MemberId, DesignResult> {
        let results: BTreeMap<MemberId, DesignResult> = members
            .iter()
            .map(|member| {
                let result = match forces.get(&member.id) {
                    Some(f) => self.check_member(member, catalog, f),
                    None => DesignResult::not_applicable(),
                };
                (member.id, result)
            })
            .collect();

        debug!("Design check complete: {} members screened", results.len());
        results
    }
}

impl Default for DesignChecker {
    fn default() -> Self {
        Self::new(CodeTables::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::MemberKind;
    use crate::results::CheckStatus;
    use approx::assert_relative_eq;

    fn beam() -> Member {
        Member::new(1, 1, 2, crate::catalog::DEFAULT_BEAM_SECTION, 1, MemberKind::Beam)
    }

    fn forces_with_moment(moment_z: f64) -> MemberForceSet {
        let mut f = MemberForceSet::zero(1);
        f.moment_z = moment_z;
        f
    }

    #[test]
    fn test_limiting_moment_value() {
        let checker = DesignChecker::default();
        // 0.138 * 25e6 * 0.23 * 0.425²
        let mu = checker.limiting_moment(25e6, 0.23, 0.45).unwrap();
        assert_relative_eq!(mu, 0.138 * 25e6 * 0.23 * 0.425 * 0.425, epsilon = 1e-6);
    }

    #[test]
    fn test_beam_within_capacity_passes() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let result = checker.check_member(&beam(), &catalog, &forces_with_moment(50e3));
        assert_eq!(result.status, CheckStatus::Pass);
        assert!(result.utilization > 0.0 && result.utilization < 0.9);
        assert_eq!(result.check, FLEXURE_CHECK);
        assert_eq!(result.combo, Some(1));
    }

    #[test]
    fn test_overloaded_beam_fails() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let result = checker.check_member(&beam(), &catalog, &forces_with_moment(200e3));
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.utilization > 1.0);
    }

    #[test]
    fn test_negative_moment_uses_magnitude() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let positive = checker.check_member(&beam(), &catalog, &forces_with_moment(80e3));
        let negative = checker.check_member(&beam(), &catalog, &forces_with_moment(-80e3));
        assert_eq!(positive.utilization, negative.utilization);
    }

    #[test]
    fn test_column_is_not_applicable() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let column = Member::new(2, 1, 2, 1, 1, MemberKind::Column);
        let result = checker.check_member(&column, &catalog, &forces_with_moment(80e3));
        assert_eq!(result.status, CheckStatus::NotApplicable);
    }

    #[test]
    fn test_unresolved_catalog_reference_is_not_applicable() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let mut member = beam();
        member.section = 99;
        let result = checker.check_member(&member, &catalog, &forces_with_moment(80e3));
        assert_eq!(result.status, CheckStatus::NotApplicable);
        assert!(result.combo.is_none());
    }

    #[test]
    fn test_batch_survives_mixed_members() {
        let checker = DesignChecker::default();
        let catalog = Catalog::default();
        let members = vec![
            beam(),
            Member::new(2, 2, 3, 1, 1, MemberKind::Column),
            Member::new(3, 3, 4, 99, 1, MemberKind::Beam),
        ];
        let mut forces = BTreeMap::new();
        forces.insert(1, forces_with_moment(50e3));
        forces.insert(2, forces_with_moment(10e3));
        forces.insert(3, forces_with_moment(10e3));

        let results = checker.check_model(&members, &catalog, &forces);
        assert_eq!(results.len(), 3);
        assert_eq!(results[&1].status, CheckStatus::Pass);
        assert_eq!(results[&2].status, CheckStatus::NotApplicable);
        assert_eq!(results[&3].status, CheckStatus::NotApplicable);
    }
}
