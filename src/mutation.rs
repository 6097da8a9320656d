//! Model mutation service - atomic, idempotent incremental edits
//!
//! Each operation takes a snapshot and returns a new snapshot; the input is
//! never mutated. Malformed operations (missing references, degenerate
//! geometry, unknown target ids) are no-ops returning a value-equal snapshot,
//! logged at warn level - never an error.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::elements::{
    MaterialId, Member, MemberId, MemberKind, Node, NodeId, Plate, Restraint, SectionId, Support,
};
use crate::model::StructuralModel;

/// Field patch for a node; absent fields keep their value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Field patch for a member; absent fields keep their value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberPatch {
    pub start_node: Option<NodeId>,
    pub end_node: Option<NodeId>,
    pub section: Option<SectionId>,
    pub material: Option<MaterialId>,
    pub kind: Option<MemberKind>,
}

/// An incremental edit to a model snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Add a node at the given coordinates
    AddNode { x: f64, y: f64, z: f64 },
    /// Add a member between two distinct existing nodes
    AddMember {
        start_node: NodeId,
        end_node: NodeId,
        section: SectionId,
        material: MaterialId,
        kind: MemberKind,
    },
    /// Add a plate over an ordered loop of at least three existing nodes
    AddPlate {
        node_ids: Vec<NodeId>,
        thickness: f64,
        material: MaterialId,
    },
    /// Add or replace the support at a node; at most one per node
    SetSupport { node: NodeId, restraint: Restraint },
    /// Patch fields of an existing node
    UpdateNode { id: NodeId, patch: NodePatch },
    /// Patch fields of an existing member
    UpdateMember { id: MemberId, patch: MemberPatch },
}

/// Apply a mutation to a snapshot, producing a new snapshot
///
/// Ids are allocated as max(existing) + 1 within each entity family,
/// starting at 1 for an empty collection. There is no delete operation.
pub fn apply(model: &StructuralModel, mutation: &Mutation) -> StructuralModel {
    let mut next = model.clone();

    match mutation {
        Mutation::AddNode { x, y, z } => {
            let id = next.next_node_id();
            next.nodes.push(Node::new(id, *x, *y, *z));
        }

        Mutation::AddMember {
            start_node,
            end_node,
            section,
            material,
            kind,
        } => {
            if start_node == end_node {
                warn!("AddMember joins node {} to itself; ignoring", start_node);
                return next;
            }
            if next.node(*start_node).is_none() || next.node(*end_node).is_none() {
                warn!(
                    "AddMember references missing node ({} or {}); ignoring",
                    start_node, end_node
                );
                return next;
            }
            let id = next.next_member_id();
            next.members.push(Member::new(
                id,
                *start_node,
                *end_node,
                *section,
                *material,
                *kind,
            ));
        }

        Mutation::AddPlate {
            node_ids,
            thickness,
            material,
        } => {
            if node_ids.len() < 3 {
                warn!(
                    "AddPlate needs at least 3 nodes, got {}; ignoring",
                    node_ids.len()
                );
                return next;
            }
            if let Some(&missing) = node_ids.iter().find(|&&id| next.node(id).is_none()) {
                warn!("AddPlate references missing node {}; ignoring", missing);
                return next;
            }
            let id = next.next_plate_id();
            next.plates
                .push(Plate::new(id, node_ids.clone(), *thickness, *material));
        }

        Mutation::SetSupport { node, restraint } => {
            if next.node(*node).is_none() {
                warn!("SetSupport references missing node {}; ignoring", node);
                return next;
            }
            if let Some(existing) = next.supports.iter_mut().find(|s| s.node == *node) {
                existing.restraint = *restraint;
            } else {
                let id = next.next_support_id();
                next.supports.push(Support::new(id, *node, *restraint));
            }
        }

        Mutation::UpdateNode { id, patch } => {
            match next.nodes.iter_mut().find(|n| n.id == *id) {
                Some(node) => {
                    if let Some(x) = patch.x {
                        node.x = x;
                    }
                    if let Some(y) = patch.y {
                        node.y = y;
                    }
                    if let Some(z) = patch.z {
                        node.z = z;
                    }
                }
                None => warn!("UpdateNode target {} not found; ignoring", id),
            }
        }

        Mutation::UpdateMember { id, patch } => {
            match next.members.iter_mut().find(|m| m.id == *id) {
                Some(member) => {
                    if let Some(start) = patch.start_node {
                        member.start_node = start;
                    }
                    if let Some(end) = patch.end_node {
                        member.end_node = end;
                    }
                    if let Some(section) = patch.section {
                        member.section = section;
                    }
                    if let Some(material) = patch.material {
                        member.material = material;
                    }
                    if let Some(kind) = patch.kind {
                        member.kind = kind;
                    }
                }
                None => warn!("UpdateMember target {} not found; ignoring", id),
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_model() -> StructuralModel {
        let mut model = StructuralModel::new();
        model.nodes.push(Node::new(1, 0.0, 0.0, 0.0));
        model.nodes.push(Node::new(2, 5.0, 0.0, 0.0));
        model.nodes.push(Node::new(3, 5.0, 3.0, 0.0));
        model.nodes.push(Node::new(4, 0.0, 3.0, 0.0));
        model
            .members
            .push(Member::new(1, 1, 2, 2, 1, MemberKind::Beam));
        model.supports.push(Support::fixed(1, 1));
        model
    }

    #[test]
    fn test_add_node_allocates_next_id() {
        let model = base_model();
        let next = apply(&model, &Mutation::AddNode { x: 1.0, y: 2.0, z: 3.0 });
        assert_eq!(next.nodes.len(), 5);
        assert_eq!(next.nodes.last().unwrap().id, 5);
        // Input snapshot untouched
        assert_eq!(model.nodes.len(), 4);
    }

    #[test]
    fn test_add_node_to_empty_model_starts_at_one() {
        let empty = StructuralModel::new();
        let next = apply(&empty, &Mutation::AddNode { x: 0.0, y: 0.0, z: 0.0 });
        assert_eq!(next.nodes[0].id, 1);
    }

    #[test]
    fn test_add_member_with_missing_node_is_noop() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::AddMember {
                start_node: 1,
                end_node: 99,
                section: 2,
                material: 1,
                kind: MemberKind::Beam,
            },
        );
        assert_eq!(next, model);
    }

    #[test]
    fn test_add_degenerate_member_is_noop() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::AddMember {
                start_node: 2,
                end_node: 2,
                section: 2,
                material: 1,
                kind: MemberKind::Column,
            },
        );
        assert_eq!(next, model);
    }

    #[test]
    fn test_add_plate() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::AddPlate {
                node_ids: vec![1, 2, 3, 4],
                thickness: 0.15,
                material: 1,
            },
        );
        assert_eq!(next.plates.len(), 1);
        assert_eq!(next.plates[0].id, 1);
        assert!(next.validate().is_ok());
    }

    #[test]
    fn test_add_plate_with_too_few_nodes_is_noop() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::AddPlate {
                node_ids: vec![1, 2],
                thickness: 0.15,
                material: 1,
            },
        );
        assert_eq!(next, model);
    }

    #[test]
    fn test_set_support_replaces_existing() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::SetSupport {
                node: 1,
                restraint: Restraint::Pinned,
            },
        );
        assert_eq!(next.supports.len(), 1);
        assert_eq!(next.supports[0].restraint, Restraint::Pinned);
        // Replacement keeps the original support id
        assert_eq!(next.supports[0].id, 1);
    }

    #[test]
    fn test_set_support_on_new_node() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::SetSupport {
                node: 2,
                restraint: Restraint::Roller,
            },
        );
        assert_eq!(next.supports.len(), 2);
        assert_eq!(next.supports[1].id, 2);
    }

    #[test]
    fn test_update_node_patch() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::UpdateNode {
                id: 2,
                patch: NodePatch {
                    x: Some(6.0),
                    ..Default::default()
                },
            },
        );
        let node = next.node(2).unwrap();
        assert_eq!(node.x, 6.0);
        assert_eq!(node.y, 0.0);
    }

    #[test]
    fn test_update_with_empty_patch_is_identity() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::UpdateNode {
                id: 2,
                patch: NodePatch::default(),
            },
        );
        assert_eq!(next, model);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::UpdateMember {
                id: 42,
                patch: MemberPatch {
                    section: Some(1),
                    ..Default::default()
                },
            },
        );
        assert_eq!(next, model);
    }

    #[test]
    fn test_update_member_kind() {
        let model = base_model();
        let next = apply(
            &model,
            &Mutation::UpdateMember {
                id: 1,
                patch: MemberPatch {
                    kind: Some(MemberKind::Column),
                    ..Default::default()
                },
            },
        );
        assert!(next.member(1).unwrap().is_column());
    }
}
