//! Structural entity types

mod material;
mod member;
mod node;
mod plate;
mod section;
mod support;

pub use material::{Material, MaterialKind};
pub use member::{Member, MemberKind};
pub use node::Node;
pub use plate::Plate;
pub use section::Section;
pub use support::{Restraint, Support};

/// Identifier for a node
pub type NodeId = u32;
/// Identifier for a member
pub type MemberId = u32;
/// Identifier for a plate
pub type PlateId = u32;
/// Identifier for a support
pub type SupportId = u32;
/// Identifier for a catalog material
pub type MaterialId = u32;
/// Identifier for a catalog section
pub type SectionId = u32;
