//! Plan model: placed furniture modules, catalog templates, and the
//! engine-side mirror of the authoritative module list.
//!
//! The persistence collaborator owns the real module list; the engine keeps a
//! mirror hydrated from snapshots and broadcasts so snap and dimension
//! queries run synchronously on every pointer event. Iteration order is
//! snapshot/insertion order: the snap rules are defined over "list order",
//! so the store preserves it rather than hashing.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::room::Vec3;

/// Unique identifier for a placed furniture module.
pub type ModuleId = Uuid;

/// A module's intrinsic extent in millimeters, as consumed by the snap
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A catalog entry: intrinsic dimensions and commercial data, not yet placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleTemplate {
    /// Catalog type identifier (e.g. `"base-cabinet-2door"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Catalog grouping (e.g. `"kitchen"`, `"wardrobe"`).
    pub category: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    /// Surface finish code from the catalog.
    pub finish: String,
    pub price: f64,
}

impl ModuleTemplate {
    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint {
            width: self.width_mm,
            height: self.height_mm,
            depth: self.depth_mm,
        }
    }
}

/// A placed furniture module as stored in the plan and on the wire.
///
/// `x`/`z` are the center position in room-local millimeters and are not
/// clamped to the room bounds. `y` is height off the floor, 0 for
/// floor-standing modules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureModule {
    pub id: ModuleId,
    /// Catalog type identifier.
    #[serde(rename = "type")]
    pub kind: String,
    /// Catalog grouping.
    pub category: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Clockwise rotation around the vertical axis, in degrees.
    pub rotation_deg: f64,
    /// Surface finish code from the catalog.
    pub finish: String,
    pub price: f64,
}

impl FurnitureModule {
    /// Materialize a placed module from a catalog template at `position`,
    /// with a fresh id and zero rotation.
    #[must_use]
    pub fn from_template(template: &ModuleTemplate, position: Vec3) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: template.kind.clone(),
            category: template.category.clone(),
            width_mm: template.width_mm,
            height_mm: template.height_mm,
            depth_mm: template.depth_mm,
            x: position.x,
            y: position.y,
            z: position.z,
            rotation_deg: 0.0,
            finish: template.finish.clone(),
            price: template.price,
        }
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint {
            width: self.width_mm,
            height: self.height_mm,
            depth: self.depth_mm,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// x of the left face.
    #[must_use]
    pub fn left_edge(&self) -> f64 {
        self.x - self.width_mm / 2.0
    }

    /// x of the right face.
    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.x + self.width_mm / 2.0
    }

    /// z of the back face.
    #[must_use]
    pub fn back_edge(&self) -> f64 {
        self.z - self.depth_mm / 2.0
    }

    /// z of the front face.
    #[must_use]
    pub fn front_edge(&self) -> f64 {
        self.z + self.depth_mm / 2.0
    }
}

/// Sparse update for a placed module. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFurnitureModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PartialFurnitureModule {
    /// Sparse update carrying just a position, as emitted on drag commit.
    #[must_use]
    pub fn position(position: Vec3) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            z: Some(position.z),
            ..Self::default()
        }
    }
}

/// In-memory, insertion-ordered mirror of the authoritative module list.
pub struct PlanStore {
    modules: Vec<FurnitureModule>,
}

impl PlanStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { modules: Vec::new() }
    }

    /// Insert a module, or replace it in place if the id already exists.
    /// Replacement keeps the module's list position.
    pub fn insert(&mut self, module: FurnitureModule) {
        if let Some(existing) = self.modules.iter_mut().find(|m| m.id == module.id) {
            *existing = module;
        } else {
            self.modules.push(module);
        }
    }

    /// Remove a module by id, returning it if it was present.
    pub fn remove(&mut self, id: &ModuleId) -> Option<FurnitureModule> {
        let index = self.modules.iter().position(|m| m.id == *id)?;
        Some(self.modules.remove(index))
    }

    /// Return a reference to a module by id.
    #[must_use]
    pub fn get(&self, id: &ModuleId) -> Option<&FurnitureModule> {
        self.modules.iter().find(|m| m.id == *id)
    }

    /// Overwrite a module's position. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: &ModuleId, position: Vec3) -> bool {
        let Some(module) = self.modules.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        module.x = position.x;
        module.y = position.y;
        module.z = position.z;
        true
    }

    /// Apply a partial update to an existing module. Returns false if the
    /// module doesn't exist.
    pub fn apply_partial(&mut self, id: &ModuleId, partial: &PartialFurnitureModule) -> bool {
        let Some(module) = self.modules.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        if let Some(x) = partial.x {
            module.x = x;
        }
        if let Some(y) = partial.y {
            module.y = y;
        }
        if let Some(z) = partial.z {
            module.z = z;
        }
        if let Some(rotation) = partial.rotation_deg {
            module.rotation_deg = rotation;
        }
        if let Some(ref finish) = partial.finish {
            module.finish = finish.clone();
        }
        if let Some(price) = partial.price {
            module.price = price;
        }
        true
    }

    /// Replace all modules with a full snapshot, keeping the snapshot order.
    pub fn load_snapshot(&mut self, modules: Vec<FurnitureModule>) {
        self.modules = modules;
    }

    /// All modules in list order.
    #[must_use]
    pub fn modules(&self) -> &[FurnitureModule] {
        &self.modules
    }

    /// Number of modules currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if the store contains no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
