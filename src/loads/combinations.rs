//! Factored load combinations
//!
//! A curated, code-sanctioned menu of combination templates gated by which
//! load cases are active, not a combinatorial product. Emission order is
//! fixed so downstream enveloping stays stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CombinationId, LoadCase, LoadCaseKind};

/// Classification of a load combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboClass {
    /// Ultimate limit state
    Uls,
    /// Serviceability limit state
    Sls,
}

/// A factored sum of load cases for a specific check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCombination {
    /// Unique combination id, sequential in emission order
    pub id: CombinationId,
    /// Code-style name, e.g. "1.5(DL+LL)"
    pub name: String,
    /// Limit-state classification
    pub class: ComboClass,
    /// Factor per load case kind
    pub factors: BTreeMap<LoadCaseKind, f64>,
}

impl LoadCombination {
    /// Create a combination from (case, factor) pairs
    pub fn new(
        id: CombinationId,
        name: &str,
        class: ComboClass,
        factors: &[(LoadCaseKind, f64)],
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            class,
            factors: factors.iter().copied().collect(),
        }
    }

    /// Get the factor for a load case kind (0.0 when absent)
    pub fn factor(&self, kind: LoadCaseKind) -> f64 {
        self.factors.get(&kind).copied().unwrap_or(0.0)
    }

    /// Whether this combination includes a load case kind
    pub fn includes(&self, kind: LoadCaseKind) -> bool {
        self.factor(kind).abs() > 1e-10
    }
}

/// Which load cases the project has switched on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCases {
    pub dead: bool,
    pub live: bool,
    pub wind: bool,
    pub seismic: bool,
}

impl ActiveCases {
    /// Gravity-only selection (dead + live)
    pub fn gravity() -> Self {
        Self {
            dead: true,
            live: true,
            ..Default::default()
        }
    }

    /// Every case switched on
    pub fn all() -> Self {
        Self {
            dead: true,
            live: true,
            wind: true,
            seismic: true,
        }
    }

    pub fn with_wind(mut self) -> Self {
        self.wind = true;
        self
    }

    pub fn with_seismic(mut self) -> Self {
        self.seismic = true;
        self
    }

    /// Materialize the switched-on flags as load cases, ids sequential from 1
    /// in dead, live, wind, seismic order
    pub fn cases(&self) -> Vec<LoadCase> {
        let flags = [
            (self.dead, LoadCase::dead as fn(u32) -> LoadCase),
            (self.live, LoadCase::live),
            (self.wind, LoadCase::wind),
            (self.seismic, LoadCase::seismic),
        ];

        let mut cases = Vec::new();
        for (enabled, build) in flags {
            if enabled {
                cases.push(build(cases.len() as u32 + 1));
            }
        }
        cases
    }
}

/// Enumerate the factored combinations for the active load cases
///
/// Fixed ordered menu per IS 456 practice; ids are sequential from 1 in
/// emission order. Returns an empty list when no template is enabled.
pub fn generate_combinations(active: &ActiveCases) -> Vec<LoadCombination> {
    use LoadCaseKind::{Dead, Live, Seismic, Wind};

    let menu: [(bool, &str, &[(LoadCaseKind, f64)]); 4] = [
        (
            active.dead && active.live,
            "1.5(DL+LL)",
            &[(Dead, 1.5), (Live, 1.5)],
        ),
        (
            active.dead && active.wind,
            "1.5(DL+WL)",
            &[(Dead, 1.5), (Wind, 1.5)],
        ),
        (
            active.dead && active.live && active.wind,
            "1.2(DL+LL+WL)",
            &[(Dead, 1.2), (Live, 1.2), (Wind, 1.2)],
        ),
        (
            active.dead && active.seismic,
            "1.5(DL+EQL)",
            &[(Dead, 1.5), (Seismic, 1.5)],
        ),
    ];

    let mut combos = Vec::new();
    for (enabled, name, factors) in menu {
        if enabled {
            let id = combos.len() as CombinationId + 1;
            combos.push(LoadCombination::new(id, name, ComboClass::Uls, factors));
        }
    }

    combos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_only_yields_single_combination() {
        let combos = generate_combinations(&ActiveCases::gravity());
        assert_eq!(combos.len(), 1);
        let combo = &combos[0];
        assert_eq!(combo.name, "1.5(DL+LL)");
        assert_eq!(combo.class, ComboClass::Uls);
        assert_eq!(combo.factor(LoadCaseKind::Dead), 1.5);
        assert_eq!(combo.factor(LoadCaseKind::Live), 1.5);
        assert_eq!(combo.factor(LoadCaseKind::Wind), 0.0);
    }

    #[test]
    fn test_all_cases_yield_four_in_fixed_order() {
        let combos = generate_combinations(&ActiveCases::all());
        let names: Vec<&str> = combos.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["1.5(DL+LL)", "1.5(DL+WL)", "1.2(DL+LL+WL)", "1.5(DL+EQL)"]
        );
        let ids: Vec<u32> = combos.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn test_no_dead_case_yields_nothing() {
        let active = ActiveCases {
            live: true,
            wind: true,
            seismic: true,
            ..Default::default()
        };
        assert!(generate_combinations(&active).is_empty());
    }

    #[test]
    fn test_active_flags_materialize_as_cases() {
        let cases = ActiveCases::all().cases();
        let labels: Vec<&str> = cases.iter().map(|c| c.kind.label()).collect();
        assert_eq!(labels, ["DL", "LL", "WL", "EQL"]);
        let ids: Vec<u32> = cases.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);

        let gravity = ActiveCases::gravity().cases();
        assert_eq!(gravity.len(), 2);
        assert_eq!(gravity[1].kind, LoadCaseKind::Live);
        assert_eq!(gravity[1].id, 2);
    }

    #[test]
    fn test_dead_and_seismic() {
        let active = ActiveCases {
            dead: true,
            seismic: true,
            ..Default::default()
        };
        let combos = generate_combinations(&active);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].name, "1.5(DL+EQL)");
        assert!(combos[0].includes(LoadCaseKind::Seismic));
    }
}
