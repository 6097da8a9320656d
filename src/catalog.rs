//! Catalog of default materials and sections
//!
//! A fixed lookup used when the caller supplies no explicit choice; the
//! default entries follow the IS-code engineering defaults of the source
//! system (M25 concrete frame, Fe415 rebar, 300x300 columns, 230x450 beams,
//! 150 mm slabs).

use serde::{Deserialize, Serialize};

use crate::elements::{Material, MaterialId, Section, SectionId};

/// Default material id for frame concrete
pub const DEFAULT_CONCRETE: MaterialId = 1;
/// Default material id for reinforcing steel
pub const DEFAULT_STEEL: MaterialId = 2;
/// Default section id for columns
pub const DEFAULT_COLUMN_SECTION: SectionId = 1;
/// Default section id for beams
pub const DEFAULT_BEAM_SECTION: SectionId = 2;

/// Static lookup of materials and sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Available materials
    pub materials: Vec<Material>,
    /// Available sections
    pub sections: Vec<Section>,
    /// Default slab thickness in m
    pub slab_thickness: f64,
}

impl Catalog {
    /// Find a material by id
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Find a section by id
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// The default frame concrete
    pub fn default_concrete(&self) -> &Material {
        self.material(DEFAULT_CONCRETE)
            .expect("catalog missing default concrete")
    }

    /// The default column section
    pub fn column_section(&self) -> &Section {
        self.section(DEFAULT_COLUMN_SECTION)
            .expect("catalog missing default column section")
    }

    /// The default beam section
    pub fn beam_section(&self) -> &Section {
        self.section(DEFAULT_BEAM_SECTION)
            .expect("catalog missing default beam section")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            materials: vec![
                Material::concrete(DEFAULT_CONCRETE, "M25", 25e6),
                Material::steel(DEFAULT_STEEL, "Fe415", 415e6),
            ],
            sections: vec![
                Section::rectangular(DEFAULT_COLUMN_SECTION, "COL300X300", 0.3, 0.3),
                Section::rectangular(DEFAULT_BEAM_SECTION, "BEAM230X450", 0.23, 0.45),
            ],
            slab_thickness: 0.15,
        }
    }
}
