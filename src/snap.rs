//! The snap resolver: converts a raw, continuous candidate position into a
//! visually clean one by pulling it toward walls, peer module edges, and
//! shared axes with other modules.
//!
//! Rules run in a fixed order and every later rule reads the coordinates the
//! earlier rules already adjusted. Assignment order is the priority contract,
//! not an accident:
//!
//! 1. Wall snap (left, right, back; 50 mm). One flag slot; a later wall
//!    match overwrites an earlier one.
//! 2. Floor snap (50 mm on the y axis).
//! 3. Peer edge snap (50 mm; height/depth banded; list order, the loop
//!    keeps assigning so the last match wins).
//! 4. Alignment guides (30 mm; no bands; full snap to the shared axis,
//!    last match in list order wins).
//!
//! There are no failure modes: unmatched conditions leave coordinates
//! unchanged, and a degenerate input (module wider than the room) still
//! produces a deterministic best-effort result.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::Serialize;

use crate::consts::{EDGE_SNAP_MM, FLOOR_SNAP_MM, GUIDE_SNAP_MM, HEIGHT_BAND_MM, WALL_SNAP_MM};
use crate::plan::{Footprint, FurnitureModule, ModuleId};
use crate::room::{Vec3, WallSet};

/// Wall identifier for the snap flag. The front opening never snaps;
/// modules face into the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Left,
    Right,
    Back,
}

/// Guide orientation: `X` guides share an x coordinate (a vertical line on
/// the floor plan), `Z` guides share a z coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Z,
}

/// An active alignment guide: the candidate shares `position` on `axis` with
/// another module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignmentGuide {
    pub axis: Axis,
    pub position: f64,
}

/// The resolved landing position for one pointer move. Transient, produced
/// per move and never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub snapped_to_wall: Option<Wall>,
    pub snapped_to_module: Option<ModuleId>,
    #[serde(rename = "alignmentGuides")]
    pub guides: Vec<AlignmentGuide>,
}

impl SnapResult {
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Resolve where a dragged module lands.
///
/// `module_id` is the dragged module itself, excluded from peer iteration
/// (`None` for template drags). `modules` is the read-only snapshot of the
/// plan as of this pointer event, in list order.
#[must_use]
pub fn resolve_snap(
    module_id: Option<&ModuleId>,
    raw: Vec3,
    footprint: Footprint,
    modules: &[FurnitureModule],
    walls: &WallSet,
) -> SnapResult {
    let half_w = footprint.width / 2.0;
    let half_d = footprint.depth / 2.0;

    let mut x = raw.x;
    let mut y = raw.y;
    let mut z = raw.z;
    let mut snapped_to_wall = None;
    let mut snapped_to_module = None;
    let mut guides = Vec::new();

    // Rule 1: wall snap. Left, then right, then back; the flag is a single
    // slot, so when a module is wider than the room the right wall wins.
    if (x - half_w - walls.left).abs() < WALL_SNAP_MM {
        x = walls.left + half_w;
        snapped_to_wall = Some(Wall::Left);
    }
    if (x + half_w - walls.right).abs() < WALL_SNAP_MM {
        x = walls.right - half_w;
        snapped_to_wall = Some(Wall::Right);
    }
    if (z - half_d - walls.back).abs() < WALL_SNAP_MM {
        z = walls.back + half_d;
        snapped_to_wall = Some(Wall::Back);
    }

    // Rule 2: floor snap.
    if y.abs() < FLOOR_SNAP_MM {
        y = 0.0;
    }

    // Rule 3: peer edge snap. Peers must share the height band and overlap
    // in depth; the loop keeps assigning, so the last match in list order
    // wins both the coordinate and the flag.
    for m in modules {
        if Some(&m.id) == module_id {
            continue;
        }
        if (m.y - y).abs() >= HEIGHT_BAND_MM || (m.z - z).abs() >= footprint.depth {
            continue;
        }
        if (m.right_edge() - (x - half_w)).abs() < EDGE_SNAP_MM {
            x = m.right_edge() + half_w;
            snapped_to_module = Some(m.id);
        }
        if (m.left_edge() - (x + half_w)).abs() < EDGE_SNAP_MM {
            x = m.left_edge() - half_w;
            snapped_to_module = Some(m.id);
        }
    }

    // Rule 4: alignment guides. Full snap to the shared axis, not just a
    // visual hint. Every matching peer pushes a guide; the last one in list
    // order wins the coordinate.
    for m in modules {
        if Some(&m.id) == module_id {
            continue;
        }
        if (m.x - x).abs() < GUIDE_SNAP_MM {
            guides.push(AlignmentGuide { axis: Axis::X, position: m.x });
            x = m.x;
        }
        if (m.z - z).abs() < GUIDE_SNAP_MM {
            guides.push(AlignmentGuide { axis: Axis::Z, position: m.z });
            z = m.z;
        }
    }

    SnapResult { x, y, z, snapped_to_wall, snapped_to_module, guides }
}
