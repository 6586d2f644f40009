//! `wasm_bindgen` surface for the JS host.
//!
//! This module is the only place that touches `wasm_bindgen`. Structured
//! values cross the boundary as `JsValue` via `serde_wasm_bindgen`; pointer
//! moves cross as plain `f64`s (hot path, one call per pointer event, no
//! serialization). Every failure surfaces as `Err(JsValue)`; nothing here
//! panics.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::engine::EngineCore;
use crate::plan::{FurnitureModule, ModuleId, ModuleTemplate, PartialFurnitureModule};
use crate::room::{Room, Vec3};

fn into_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(into_js_error)
}

fn parse_id(id: &str) -> Result<ModuleId, JsValue> {
    id.parse::<ModuleId>().map_err(into_js_error)
}

/// The engine handle held by the JS host.
#[wasm_bindgen]
pub struct LayoutEngine {
    core: EngineCore,
}

#[wasm_bindgen]
impl LayoutEngine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: EngineCore::new() }
    }

    // --- Data inputs ---

    /// Replace the room: `{ widthMm, depthMm, heightMm }`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `room` doesn't deserialize.
    pub fn set_room(&mut self, room: JsValue) -> Result<(), JsValue> {
        let room: Room = serde_wasm_bindgen::from_value(room).map_err(into_js_error)?;
        self.core.set_room(room);
        Ok(())
    }

    /// Hydrate the mirror from the authoritative module list.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `modules` doesn't deserialize.
    pub fn load_snapshot(&mut self, modules: JsValue) -> Result<(), JsValue> {
        let modules: Vec<FurnitureModule> =
            serde_wasm_bindgen::from_value(modules).map_err(into_js_error)?;
        self.core.load_snapshot(modules);
        Ok(())
    }

    /// Apply a persistence broadcast: module created.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `module` doesn't deserialize.
    pub fn apply_create(&mut self, module: JsValue) -> Result<(), JsValue> {
        let module: FurnitureModule =
            serde_wasm_bindgen::from_value(module).map_err(into_js_error)?;
        self.core.apply_create(module);
        Ok(())
    }

    /// Apply a persistence broadcast: module updated.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` is not a uuid or `fields` doesn't deserialize.
    pub fn apply_update(&mut self, id: &str, fields: JsValue) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        let fields: PartialFurnitureModule =
            serde_wasm_bindgen::from_value(fields).map_err(into_js_error)?;
        self.core.apply_update(&id, &fields);
        Ok(())
    }

    /// Apply a persistence broadcast: module deleted.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` is not a uuid.
    pub fn apply_delete(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.core.apply_delete(&id);
        Ok(())
    }

    // --- Selection ---

    /// Select a module, or clear the selection with `null`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` is present but not a uuid.
    pub fn select(&mut self, id: Option<String>) -> Result<(), JsValue> {
        let id = match id {
            Some(raw) => Some(parse_id(&raw)?),
            None => None,
        };
        self.core.select(id);
        Ok(())
    }

    /// The selected module id as a string, or `undefined`.
    #[must_use]
    pub fn selection(&self) -> Option<String> {
        self.core.selection().map(|id| id.to_string())
    }

    // --- Drag flow ---

    /// Start dragging a catalog template into the room.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `template` doesn't deserialize or a drag is already
    /// active.
    pub fn begin_template_drag(&mut self, template: JsValue) -> Result<(), JsValue> {
        let template: ModuleTemplate =
            serde_wasm_bindgen::from_value(template).map_err(into_js_error)?;
        self.core.begin_template_drag(template).map_err(into_js_error)
    }

    /// Start repositioning a placed module.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `id` is not a uuid, the module is unknown, or a drag
    /// is already active.
    pub fn begin_module_drag(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.core.begin_module_drag(id).map_err(into_js_error)
    }

    /// Feed one raw pointer-ray intersection point (room-local millimeters)
    /// into the active drag. Returns the snap result, or `null` when no drag
    /// is active or the sample was dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the result fails to serialize.
    pub fn drag_to(&mut self, x: f64, y: f64, z: f64) -> Result<JsValue, JsValue> {
        match self.core.drag_to(Vec3::new(x, y, z)) {
            Some(result) => to_js(&result),
            None => Ok(JsValue::NULL),
        }
    }

    /// Commit the active drag. Returns the actions the host must process
    /// (persist the placed/moved module, redraw).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the actions fail to serialize.
    pub fn commit_drag(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.core.commit_drag())
    }

    /// Cancel the active drag, restoring a repositioned module to its
    /// pre-drag position.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the actions fail to serialize.
    pub fn cancel_drag(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.core.cancel_drag())
    }

    // --- Dimensions ---

    /// Dimension entries for the selected module, ready for the overlay
    /// renderer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the entries fail to serialize.
    pub fn selected_dimensions(&self) -> Result<JsValue, JsValue> {
        to_js(&self.core.selected_dimensions())
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}
