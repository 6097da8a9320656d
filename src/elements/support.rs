//! Support conditions at nodes

use serde::{Deserialize, Serialize};

use super::{NodeId, SupportId};

/// Restraint condition of a support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Restraint {
    /// All six DOFs restrained
    Fixed,
    /// Translations restrained, rotations free
    Pinned,
    /// Vertical translation restrained only
    Roller,
}

impl Restraint {
    /// Restrained DOF flags as [DX, DY, DZ, RX, RY, RZ]
    pub fn restrained_dofs(&self) -> [bool; 6] {
        match self {
            Restraint::Fixed => [true; 6],
            Restraint::Pinned => [true, true, true, false, false, false],
            Restraint::Roller => [false, true, false, false, false, false],
        }
    }

    /// Count of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.restrained_dofs().iter().filter(|&&r| r).count()
    }
}

/// A support restraining a node; at most one support per node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Unique support id
    pub id: SupportId,
    /// Restrained node id
    pub node: NodeId,
    /// Restraint condition
    pub restraint: Restraint,
}

impl Support {
    /// Create a new support
    pub fn new(id: SupportId, node: NodeId, restraint: Restraint) -> Self {
        Self {
            id,
            node,
            restraint,
        }
    }

    /// Create a fixed support
    pub fn fixed(id: SupportId, node: NodeId) -> Self {
        Self::new(id, node, Restraint::Fixed)
    }

    /// Create a pinned support
    pub fn pinned(id: SupportId, node: NodeId) -> Self {
        Self::new(id, node, Restraint::Pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_restraints() {
        let support = Support::fixed(1, 5);
        assert_eq!(support.restraint.num_restrained(), 6);
    }

    #[test]
    fn test_pinned_restraints() {
        let dofs = Restraint::Pinned.restrained_dofs();
        assert!(dofs[0] && dofs[1] && dofs[2]);
        assert!(!dofs[3] && !dofs[4] && !dofs[5]);
    }

    #[test]
    fn test_roller_restraints() {
        assert_eq!(Restraint::Roller.num_restrained(), 1);
    }
}
