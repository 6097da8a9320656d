//! Node - a point in 3D space

use serde::{Deserialize, Serialize};

use super::NodeId;

/// A 3D node in the structural model
///
/// Nodes are created only by the grid generator or the mutation service;
/// ids are unique within a model and stable across identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node id
    pub id: NodeId,
    /// X coordinate (along the plot length)
    pub x: f64,
    /// Y coordinate (vertical, up)
    pub y: f64,
    /// Z coordinate (along the plot width)
    pub z: f64,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(id: NodeId, x: f64, y: f64, z: f64) -> Self {
        Self { id, x, y, z }
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(1, 1.0, 2.0, 3.0);
        assert_eq!(node.id, 1);
        assert_eq!(node.coords(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(1, 0.0, 0.0, 0.0);
        let n2 = Node::new(2, 3.0, 4.0, 0.0);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-10);
    }
}
