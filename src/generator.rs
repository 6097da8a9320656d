//! Grid generator - builds a regular 3D frame from footprint parameters
//!
//! Converts plot length/width and story count into nodes, columns, beams,
//! slab plates and base supports on an equal-bay grid. Identical inputs
//! always produce identical ids and coordinates.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DEFAULT_BEAM_SECTION, DEFAULT_COLUMN_SECTION, DEFAULT_CONCRETE};
use crate::elements::{Member, MemberKind, Node, NodeId, Plate, Support};
use crate::model::StructuralModel;

/// Engineering default target bay spacing in m
pub const DEFAULT_BAY_SPACING: f64 = 5.0;
/// Engineering default story height in m
pub const DEFAULT_STORY_HEIGHT: f64 = 3.0;

/// Parameters for grid generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Plot length along X in m
    pub length: f64,
    /// Plot width along Z in m
    pub width: f64,
    /// Number of stories above ground
    pub stories: i32,
    /// Target bay spacing in m; actual bays divide the plot evenly
    pub bay_spacing: f64,
    /// Story height in m
    pub story_height: f64,
}

impl GridConfig {
    /// Create a config with default bay spacing and story height
    pub fn new(length: f64, width: f64, stories: i32) -> Self {
        Self {
            length,
            width,
            stories,
            bay_spacing: DEFAULT_BAY_SPACING,
            story_height: DEFAULT_STORY_HEIGHT,
        }
    }

    /// Override the target bay spacing
    pub fn with_bay_spacing(mut self, spacing: f64) -> Self {
        self.bay_spacing = spacing;
        self
    }

    /// Override the story height
    pub fn with_story_height(mut self, height: f64) -> Self {
        self.story_height = height;
        self
    }

    /// Bay counts (nx, nz) along length and width
    pub fn bay_counts(&self) -> (usize, usize) {
        let nx = (self.length / self.bay_spacing).ceil().max(1.0) as usize;
        let nz = (self.width / self.bay_spacing).ceil().max(1.0) as usize;
        (nx, nz)
    }
}

/// Generate a full structural model from grid parameters
///
/// Non-positive length, width or story count yields an empty, well-formed
/// model rather than an error; edge validation belongs to the caller.
pub fn generate(config: &GridConfig, catalog: &Catalog) -> StructuralModel {
    if config.length <= 0.0 || config.width <= 0.0 || config.stories <= 0 {
        warn!(
            "Degenerate grid parameters (L={}, W={}, S={}); returning empty model",
            config.length, config.width, config.stories
        );
        return StructuralModel::new();
    }

    let (nx, nz) = config.bay_counts();
    let spacing_x = config.length / nx as f64;
    let spacing_z = config.width / nz as f64;
    let stories = config.stories as usize;

    let mut model = StructuralModel::new();

    // Nodes in fixed iteration order: story-major, then i, then j.
    // node_index(story, i, j) relies on this order.
    let mut node_id: NodeId = 1;
    for story in 0..=stories {
        for i in 0..=nx {
            for j in 0..=nz {
                model.nodes.push(Node::new(
                    node_id,
                    i as f64 * spacing_x,
                    story as f64 * config.story_height,
                    j as f64 * spacing_z,
                ));
                node_id += 1;
            }
        }
    }

    let node_at = |story: usize, i: usize, j: usize| -> NodeId {
        (story * (nx + 1) * (nz + 1) + i * (nz + 1) + j) as NodeId + 1
    };

    // Catalog defaults; explicit section/material choices come later through
    // the mutation service
    let column_section = DEFAULT_COLUMN_SECTION;
    let beam_section = DEFAULT_BEAM_SECTION;
    let material = DEFAULT_CONCRETE;

    // Columns between consecutive stories at every grid position
    let mut member_id = 1;
    for story in 0..stories {
        for i in 0..=nx {
            for j in 0..=nz {
                model.members.push(Member::new(
                    member_id,
                    node_at(story, i, j),
                    node_at(story + 1, i, j),
                    column_section,
                    material,
                    MemberKind::Column,
                ));
                member_id += 1;
            }
        }
    }

    // Beams along both axes at every elevated story
    for story in 1..=stories {
        for i in 0..nx {
            for j in 0..=nz {
                model.members.push(Member::new(
                    member_id,
                    node_at(story, i, j),
                    node_at(story, i + 1, j),
                    beam_section,
                    material,
                    MemberKind::Beam,
                ));
                member_id += 1;
            }
        }
        for i in 0..=nx {
            for j in 0..nz {
                model.members.push(Member::new(
                    member_id,
                    node_at(story, i, j),
                    node_at(story, i, j + 1),
                    beam_section,
                    material,
                    MemberKind::Beam,
                ));
                member_id += 1;
            }
        }
    }

    // One slab plate per bay cell per elevated story, corners wound
    // counterclockwise seen from above
    let mut plate_id = 1;
    for story in 1..=stories {
        for i in 0..nx {
            for j in 0..nz {
                model.plates.push(Plate::new(
                    plate_id,
                    vec![
                        node_at(story, i, j),
                        node_at(story, i + 1, j),
                        node_at(story, i + 1, j + 1),
                        node_at(story, i, j + 1),
                    ],
                    catalog.slab_thickness,
                    material,
                ));
                plate_id += 1;
            }
        }
    }

    // Fixed supports at every base node
    let mut support_id = 1;
    for i in 0..=nx {
        for j in 0..=nz {
            model
                .supports
                .push(Support::fixed(support_id, node_at(0, i, j)));
            support_id += 1;
        }
    }

    debug!(
        "Generated grid: {} nodes, {} members, {} plates, {} supports ({}x{} bays, {} stories)",
        model.nodes.len(),
        model.members.len(),
        model.plates.len(),
        model.supports.len(),
        nx,
        nz,
        stories
    );

    model
}
