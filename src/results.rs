//! Result types - member forces and design check outcomes

use serde::{Deserialize, Serialize};

use crate::loads::CombinationId;

/// Internal forces in a member under one governing load combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberForceSet {
    /// Axial force P (positive = compression), N
    pub axial: f64,
    /// Shear force in local y direction, N
    pub shear_y: f64,
    /// Shear force in local z direction, N
    pub shear_z: f64,
    /// Torsion T, N·m
    pub torsion: f64,
    /// Bending moment about local y axis, N·m
    pub moment_y: f64,
    /// Bending moment about local z axis, N·m
    pub moment_z: f64,
    /// Combination this force set belongs to
    pub combo: CombinationId,
}

impl MemberForceSet {
    /// A zero force set tied to a combination
    pub fn zero(combo: CombinationId) -> Self {
        Self {
            axial: 0.0,
            shear_y: 0.0,
            shear_z: 0.0,
            torsion: 0.0,
            moment_y: 0.0,
            moment_z: 0.0,
            combo,
        }
    }

    /// Governing flexural demand magnitude
    pub fn flexural_demand(&self) -> f64 {
        self.moment_z.abs().max(self.moment_y.abs())
    }
}

/// Pass/warning/fail classification of a design check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    /// Utilization at or below 0.9
    Pass,
    /// Utilization above 0.9, at or below 1.0
    Warning,
    /// Utilization above 1.0
    Fail,
    /// Member could not be checked (missing catalog data or unsupported type)
    NotApplicable,
}

impl CheckStatus {
    /// Classify a utilization ratio
    ///
    /// Fail iff u > 1.0; Warning iff 0.9 < u <= 1.0; Pass otherwise.
    pub fn classify(utilization: f64) -> Self {
        if utilization > 1.0 {
            CheckStatus::Fail
        } else if utilization > 0.9 {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        }
    }
}

/// Outcome of a capacity check on one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    /// Classification of the check
    pub status: CheckStatus,
    /// Demand over capacity; >= 0, > 1.0 is non-compliant
    pub utilization: f64,
    /// Label of the check performed
    pub check: String,
    /// Governing combination, absent for unchecked members
    pub combo: Option<CombinationId>,
}

impl DesignResult {
    /// Build a classified result from a utilization ratio
    pub fn from_utilization(utilization: f64, check: &str, combo: CombinationId) -> Self {
        Self {
            status: CheckStatus::classify(utilization),
            utilization,
            check: check.to_string(),
            combo: Some(combo),
        }
    }

    /// Neutral result for members the checker cannot analyze
    pub fn not_applicable() -> Self {
        Self {
            status: CheckStatus::NotApplicable,
            utilization: 0.0,
            check: "Not checked".to_string(),
            combo: None,
        }
    }
}
