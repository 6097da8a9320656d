//! Section properties for frame members

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SectionId;

/// Cross-section of a frame member
///
/// Dimensions live in a named map so shapes beyond rectangles can carry
/// their own parameters; rectangular sections use "b" (breadth) and
/// "d" (depth), in m.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section id
    pub id: SectionId,
    /// Display name (e.g. "BEAM230X450")
    pub name: String,
    /// Shape identifier (e.g. "rectangular")
    pub shape: String,
    /// Named dimensions in m
    pub dims: BTreeMap<String, f64>,
}

impl Section {
    /// Create a rectangular section from breadth and depth (m)
    pub fn rectangular(id: SectionId, name: &str, breadth: f64, depth: f64) -> Self {
        let mut dims = BTreeMap::new();
        dims.insert("b".to_string(), breadth);
        dims.insert("d".to_string(), depth);
        Self {
            id,
            name: name.to_string(),
            shape: "rectangular".to_string(),
            dims,
        }
    }

    /// Breadth, if the shape defines one
    pub fn breadth(&self) -> Option<f64> {
        self.dims.get("b").copied()
    }

    /// Depth, if the shape defines one
    pub fn depth(&self) -> Option<f64> {
        self.dims.get("d").copied()
    }

    /// Cross-sectional area in m², if derivable from the dimensions
    pub fn area(&self) -> Option<f64> {
        Some(self.breadth()? * self.depth()?)
    }

    /// Moment of inertia about the strong bending axis in m⁴
    pub fn iy(&self) -> Option<f64> {
        let b = self.breadth()?;
        let d = self.depth()?;
        Some(b * d.powi(3) / 12.0)
    }

    /// Moment of inertia about the weak bending axis in m⁴
    pub fn iz(&self) -> Option<f64> {
        let b = self.breadth()?;
        let d = self.depth()?;
        Some(d * b.powi(3) / 12.0)
    }

    /// Torsional constant in m⁴ (St. Venant approximation for rectangles)
    pub fn j(&self) -> Option<f64> {
        let b = self.breadth()?;
        let d = self.depth()?;
        let (long, short) = if b > d { (b, d) } else { (d, b) };
        Some(long * short.powi(3) / 3.0 * (1.0 - 0.63 * short / long))
    }
}
