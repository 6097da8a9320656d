//! Structural model - immutable snapshot of generated geometry

use serde::{Deserialize, Serialize};

use crate::elements::{Member, MemberId, Node, NodeId, Plate, PlateId, Support, SupportId};
use crate::error::{EngineError, EngineResult};

/// A snapshot of the structural geometry
///
/// Rebuilt wholesale whenever footprint or story count changes; incremental
/// edits via the mutation service produce a new snapshot and survive only
/// until the next rebuild.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralModel {
    /// Nodes in the model
    pub nodes: Vec<Node>,
    /// Members (columns and beams)
    pub members: Vec<Member>,
    /// Plates (slab panels)
    pub plates: Vec<Plate>,
    /// Supports at base nodes
    pub supports: Vec<Support>,
}

impl StructuralModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the model holds no entities at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.members.is_empty()
            && self.plates.is_empty()
            && self.supports.is_empty()
    }

    /// Find a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a member by id
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Find a plate by id
    pub fn plate(&self, id: PlateId) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id == id)
    }

    /// Find the support at a node, if any
    pub fn support_at(&self, node: NodeId) -> Option<&Support> {
        self.supports.iter().find(|s| s.node == node)
    }

    /// Next free node id (max existing + 1, starting at 1)
    pub fn next_node_id(&self) -> NodeId {
        self.nodes.iter().map(|n| n.id).max().unwrap_or(0) + 1
    }

    /// Next free member id
    pub fn next_member_id(&self) -> MemberId {
        self.members.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }

    /// Next free plate id
    pub fn next_plate_id(&self) -> PlateId {
        self.plates.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Next free support id
    pub fn next_support_id(&self) -> SupportId {
        self.supports.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    /// Length of a member, if both end nodes resolve
    pub fn member_length(&self, member: &Member) -> Option<f64> {
        let start = self.node(member.start_node)?;
        let end = self.node(member.end_node)?;
        Some(start.distance_to(end))
    }

    /// Check referential integrity of the snapshot
    ///
    /// Every member and plate node reference must resolve, members must join
    /// two distinct nodes, plates need at least three corners and each node
    /// carries at most one support.
    pub fn validate(&self) -> EngineResult<()> {
        for member in &self.members {
            if member.start_node == member.end_node {
                return Err(EngineError::InvalidGeometry(format!(
                    "Member {} joins node {} to itself",
                    member.id, member.start_node
                )));
            }
            for node_id in [member.start_node, member.end_node] {
                if self.node(node_id).is_none() {
                    return Err(EngineError::NodeNotFound(node_id));
                }
            }
        }

        for plate in &self.plates {
            if plate.node_ids.len() < 3 {
                return Err(EngineError::InvalidGeometry(format!(
                    "Plate {} has only {} corner nodes",
                    plate.id,
                    plate.node_ids.len()
                )));
            }
            for &node_id in &plate.node_ids {
                if self.node(node_id).is_none() {
                    return Err(EngineError::NodeNotFound(node_id));
                }
            }
        }

        for support in &self.supports {
            if self.node(support.node).is_none() {
                return Err(EngineError::NodeNotFound(support.node));
            }
            let count = self
                .supports
                .iter()
                .filter(|s| s.node == support.node)
                .count();
            if count > 1 {
                return Err(EngineError::InvalidGeometry(format!(
                    "Node {} carries {} supports",
                    support.node, count
                )));
            }
        }

        Ok(())
    }
}
