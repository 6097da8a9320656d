//! Plate - planar slab element bounded by an ordered node loop

use serde::{Deserialize, Serialize};

use super::{MaterialId, NodeId, PlateId};

/// A planar element (slab panel) referencing an ordered loop of nodes
///
/// The loop must have at least three nodes, be coplanar and
/// non-self-intersecting; grid-generated plates are four-node bay cells
/// wound counterclockwise when seen from above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    /// Unique plate id
    pub id: PlateId,
    /// Ordered corner node ids (>= 3)
    pub node_ids: Vec<NodeId>,
    /// Thickness in m
    pub thickness: f64,
    /// Catalog material id
    pub material: MaterialId,
}

impl Plate {
    /// Create a new plate from an ordered node loop
    pub fn new(id: PlateId, node_ids: Vec<NodeId>, thickness: f64, material: MaterialId) -> Self {
        Self {
            id,
            node_ids,
            thickness,
            material,
        }
    }

    /// Number of corner nodes
    pub fn corner_count(&self) -> usize {
        self.node_ids.len()
    }
}
