//! Member - linear frame element (column or beam)

use serde::{Deserialize, Serialize};

use super::{MaterialId, MemberId, NodeId, SectionId};

/// Structural role of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    /// Vertical gravity element between stories
    Column,
    /// Horizontal element spanning between columns
    Beam,
}

/// A linear structural member joining two distinct nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member id
    pub id: MemberId,
    /// Start node id
    pub start_node: NodeId,
    /// End node id
    pub end_node: NodeId,
    /// Catalog section id
    pub section: SectionId,
    /// Catalog material id
    pub material: MaterialId,
    /// Column or beam
    pub kind: MemberKind,
}

impl Member {
    /// Create a new member
    pub fn new(
        id: MemberId,
        start_node: NodeId,
        end_node: NodeId,
        section: SectionId,
        material: MaterialId,
        kind: MemberKind,
    ) -> Self {
        Self {
            id,
            start_node,
            end_node,
            section,
            material,
            kind,
        }
    }

    /// Whether this member is a column
    pub fn is_column(&self) -> bool {
        self.kind == MemberKind::Column
    }

    /// Whether this member is a beam
    pub fn is_beam(&self) -> bool {
        self.kind == MemberKind::Beam
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new(1, 10, 11, 1, 1, MemberKind::Column);
        assert_eq!(member.start_node, 10);
        assert_eq!(member.end_node, 11);
        assert!(member.is_column());
        assert!(!member.is_beam());
    }
}
