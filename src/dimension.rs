//! Dimension calculator: the distance labels shown for the selected module.
//!
//! Produces wall clearances, intrinsic sizes, and inter-module gaps as
//! [`DimensionEntry`] values the overlay renderer can draw directly. Every
//! entry is computed here; [`visible_entries`] applies the 50 mm display
//! floor for clearances so the presentation layer and the tests share one
//! rule. Size entries always survive filtering: a selected module's width,
//! height, and depth are always shown.

#[cfg(test)]
#[path = "dimension_test.rs"]
mod dimension_test;

use serde::Serialize;

use crate::consts::{GAP_MAX_MM, GAP_MIN_MM, MIN_LABEL_MM, ROW_BAND_MM};
use crate::plan::FurnitureModule;
use crate::room::{Room, Vec3};

/// Color role the overlay renderer assigns to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DimensionRole {
    WallDistance,
    ModuleGap,
    ModuleSize,
}

/// One measurement to draw: a line from `from` to `to` with a label.
/// Transient, recomputed on selection change or module move.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionEntry {
    pub from: Vec3,
    pub to: Vec3,
    pub value_mm: f64,
    pub label: String,
    pub role: DimensionRole,
}

/// The nine distances reported for a selected module, in millimeters.
///
/// Wall distances are measured from the module's near face, so a module
/// flush against a wall reports 0 and a module poking through reports a
/// negative clearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDimensions {
    pub to_left_wall: f64,
    pub to_right_wall: f64,
    pub to_back_wall: f64,
    pub to_front_wall: f64,
    pub to_floor: f64,
    pub to_ceiling: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Compute the nine distances for `module` inside `room`.
#[must_use]
pub fn dimensions_for(module: &FurnitureModule, room: &Room) -> ModuleDimensions {
    let walls = room.walls();
    ModuleDimensions {
        to_left_wall: module.left_edge() - walls.left,
        to_right_wall: walls.right - module.right_edge(),
        to_back_wall: module.back_edge() - walls.back,
        to_front_wall: walls.front - module.front_edge(),
        to_floor: module.y,
        to_ceiling: room.height_mm - (module.y + module.height_mm),
        width: module.width_mm,
        height: module.height_mm,
        depth: module.depth_mm,
    }
}

fn label(value_mm: f64) -> String {
    format!("{value_mm:.0} mm")
}

fn entry(from: Vec3, to: Vec3, value_mm: f64, role: DimensionRole) -> DimensionEntry {
    DimensionEntry { from, to, value_mm, label: label(value_mm), role }
}

/// All wall-clearance and size entries for `module`, unfiltered.
///
/// Clearance lines run from the wall plane to the module face at the
/// module's own height and axis; size lines run along the top front edges of
/// the module's box.
#[must_use]
pub fn wall_entries(module: &FurnitureModule, room: &Room) -> Vec<DimensionEntry> {
    let walls = room.walls();
    let dims = dimensions_for(module, room);
    let top = module.y + module.height_mm;

    vec![
        entry(
            Vec3::new(walls.left, module.y, module.z),
            Vec3::new(module.left_edge(), module.y, module.z),
            dims.to_left_wall,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.right_edge(), module.y, module.z),
            Vec3::new(walls.right, module.y, module.z),
            dims.to_right_wall,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.x, module.y, walls.back),
            Vec3::new(module.x, module.y, module.back_edge()),
            dims.to_back_wall,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.x, module.y, module.front_edge()),
            Vec3::new(module.x, module.y, walls.front),
            dims.to_front_wall,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.x, 0.0, module.z),
            Vec3::new(module.x, module.y, module.z),
            dims.to_floor,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.x, top, module.z),
            Vec3::new(module.x, room.height_mm, module.z),
            dims.to_ceiling,
            DimensionRole::WallDistance,
        ),
        entry(
            Vec3::new(module.left_edge(), top, module.front_edge()),
            Vec3::new(module.right_edge(), top, module.front_edge()),
            dims.width,
            DimensionRole::ModuleSize,
        ),
        entry(
            Vec3::new(module.left_edge(), module.y, module.front_edge()),
            Vec3::new(module.left_edge(), top, module.front_edge()),
            dims.height,
            DimensionRole::ModuleSize,
        ),
        entry(
            Vec3::new(module.right_edge(), top, module.back_edge()),
            Vec3::new(module.right_edge(), top, module.front_edge()),
            dims.depth,
            DimensionRole::ModuleSize,
        ),
    ]
}

/// Wall and size entries with the display policy applied: clearances under
/// [`MIN_LABEL_MM`] are suppressed, sizes are always kept.
#[must_use]
pub fn visible_entries(module: &FurnitureModule, room: &Room) -> Vec<DimensionEntry> {
    wall_entries(module, room)
        .into_iter()
        .filter(|e| e.role == DimensionRole::ModuleSize || e.value_mm >= MIN_LABEL_MM)
        .collect()
}

/// Gap entries between `selected` and every other module sharing its row.
///
/// Two modules share a row when their z centers differ by less than
/// [`ROW_BAND_MM`]. A gap is reported when one module's right face precedes
/// the other's left face by more than [`GAP_MIN_MM`] and at most
/// [`GAP_MAX_MM`]; gaps outside that band are not shown.
#[must_use]
pub fn gap_entries(selected: &FurnitureModule, others: &[FurnitureModule]) -> Vec<DimensionEntry> {
    let mut entries = Vec::new();
    for m in others {
        if m.id == selected.id {
            continue;
        }
        if (m.z - selected.z).abs() >= ROW_BAND_MM {
            continue;
        }
        let (from_x, to_x) = if m.right_edge() <= selected.left_edge() {
            (m.right_edge(), selected.left_edge())
        } else if selected.right_edge() <= m.left_edge() {
            (selected.right_edge(), m.left_edge())
        } else {
            continue;
        };
        let gap = to_x - from_x;
        if gap <= GAP_MIN_MM || gap > GAP_MAX_MM {
            continue;
        }
        let z = (m.z + selected.z) / 2.0;
        entries.push(entry(
            Vec3::new(from_x, selected.y, z),
            Vec3::new(to_x, selected.y, z),
            gap,
            DimensionRole::ModuleGap,
        ));
    }
    entries
}
