//! Material properties

use serde::{Deserialize, Serialize};

use super::MaterialId;

/// Broad material family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    Concrete,
    Steel,
}

/// Material properties for structural members and slabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique material id
    pub id: MaterialId,
    /// Display name (e.g. "M25", "Fe415")
    pub name: String,
    /// Material family
    pub kind: MaterialKind,
    /// Modulus of elasticity in Pa
    pub e: f64,
    /// Density in kg/m³
    pub density: f64,
    /// Characteristic strength in Pa (fck for concrete, fy for steel)
    pub strength: f64,
}

impl Material {
    /// Create a new material with given properties
    pub fn new(
        id: MaterialId,
        name: &str,
        kind: MaterialKind,
        e: f64,
        density: f64,
        strength: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            e,
            density,
            strength,
        }
    }

    /// Create a concrete material from its grade strength fck (Pa)
    ///
    /// E estimated per IS 456: E = 5000 * sqrt(fck in MPa), in MPa.
    pub fn concrete(id: MaterialId, name: &str, fck: f64) -> Self {
        let fck_mpa = fck / 1e6;
        let e = 5000.0 * fck_mpa.sqrt() * 1e6;
        Self::new(id, name, MaterialKind::Concrete, e, 2500.0, fck)
    }

    /// Create a reinforcing/structural steel from its yield strength fy (Pa)
    pub fn steel(id: MaterialId, name: &str, fy: f64) -> Self {
        Self::new(id, name, MaterialKind::Steel, 200e9, 7850.0, fy)
    }

    /// Shear modulus, estimated from E with the family's Poisson ratio
    pub fn g(&self) -> f64 {
        let nu = match self.kind {
            MaterialKind::Concrete => 0.2,
            MaterialKind::Steel => 0.3,
        };
        self.e / (2.0 * (1.0 + nu))
    }
}
