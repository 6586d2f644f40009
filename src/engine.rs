//! Top-level engine facade.
//!
//! [`EngineCore`] wires pointer events through the drag session, the snap
//! resolver, and the dimension calculator, and emits [`Action`] values for
//! the host to process. It keeps a mirror of the authoritative module list,
//! hydrated via snapshots and broadcasts from the persistence collaborator,
//! so every query runs synchronously against current data. Separated from
//! the wasm bindings so it can be tested natively.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;

use crate::dimension::{self, DimensionEntry};
use crate::plan::{FurnitureModule, ModuleId, ModuleTemplate, PartialFurnitureModule, PlanStore};
use crate::room::{Room, Vec3};
use crate::session::{CancelledDrag, DragController, DragSession, SessionError};
use crate::snap::{self, SnapResult};

/// Error returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A module id was not present in the mirror store.
    #[error("unknown module: {0}")]
    UnknownModule(ModuleId),
}

/// Proposed writes and notifications returned to the host.
///
/// The engine never persists anything itself: a commit produces the action,
/// the host writes it through.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    /// A template drag committed; persist this new module.
    ModulePlaced(FurnitureModule),
    /// A module drag committed; persist these fields.
    ModuleMoved { id: ModuleId, fields: PartialFurnitureModule },
    /// Scene state changed; redraw.
    RenderNeeded,
}

/// Core engine state: room, module mirror, drag session, selection.
pub struct EngineCore {
    room: Room,
    store: PlanStore,
    drag: DragController,
    selected: Option<ModuleId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            room: Room::default(),
            store: PlanStore::new(),
            drag: DragController::new(),
            selected: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the room for this editing session.
    pub fn set_room(&mut self, room: Room) {
        self.room = room;
    }

    /// Hydrate the mirror from a full snapshot of the authoritative list.
    pub fn load_snapshot(&mut self, modules: Vec<FurnitureModule>) {
        self.store.load_snapshot(modules);
    }

    /// Apply a persistence broadcast: module created.
    pub fn apply_create(&mut self, module: FurnitureModule) {
        self.store.insert(module);
    }

    /// Apply a persistence broadcast: module updated.
    pub fn apply_update(&mut self, id: &ModuleId, fields: &PartialFurnitureModule) {
        self.store.apply_partial(id, fields);
    }

    /// Apply a persistence broadcast: module deleted. Clears the selection
    /// and abandons an in-flight drag of that module.
    pub fn apply_delete(&mut self, id: &ModuleId) {
        self.store.remove(id);
        if self.selected == Some(*id) {
            self.selected = None;
        }
        let dragging_deleted = matches!(
            self.drag.state(),
            DragSession::Module { module_id, .. } if module_id == id
        );
        if dragging_deleted && self.drag.cancel().is_some() {
            log::debug!("cancelled drag of deleted module {id}");
        }
    }

    // --- Queries ---

    /// The current room.
    #[must_use]
    pub fn room(&self) -> Room {
        self.room
    }

    /// The mirror of the module list.
    #[must_use]
    pub fn store(&self) -> &PlanStore {
        &self.store
    }

    /// The current drag session state.
    #[must_use]
    pub fn drag_state(&self) -> &DragSession {
        self.drag.state()
    }

    /// The currently selected module, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ModuleId> {
        self.selected
    }

    /// Select a module (or clear the selection with `None`).
    pub fn select(&mut self, id: Option<ModuleId>) {
        self.selected = id;
    }

    // --- Drag flow ---

    /// Start dragging a catalog template into the room.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DragInProgress`] if a drag is already active.
    pub fn begin_template_drag(&mut self, template: ModuleTemplate) -> Result<(), EngineError> {
        let kind = template.kind.clone();
        self.drag.start_template(template)?;
        log::debug!("template drag start: {kind}");
        Ok(())
    }

    /// Start repositioning a placed module. Also selects it, matching the
    /// pointer-down that initiates the gesture.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownModule`] if the id is not in the
    /// mirror, or [`SessionError::DragInProgress`] if a drag is already
    /// active.
    pub fn begin_module_drag(&mut self, id: ModuleId) -> Result<(), EngineError> {
        let start = self
            .store
            .get(&id)
            .map(FurnitureModule::position)
            .ok_or(EngineError::UnknownModule(id))?;
        self.drag.start_module(id, start)?;
        self.selected = Some(id);
        log::debug!("module drag start: {id}");
        Ok(())
    }

    /// Feed one raw pointer-ray intersection point into the active drag.
    ///
    /// Resolves the snap against the current mirror, updates the live
    /// session (template preview or module position), and returns the result
    /// for the scene to draw. `None` when no drag is active. A non-finite
    /// sample (degenerate ray/plane intersection) is dropped and the drag
    /// keeps its previous position.
    pub fn drag_to(&mut self, raw: Vec3) -> Option<SnapResult> {
        if !raw.is_finite() {
            log::warn!("dropping non-finite pointer sample");
            return None;
        }
        let (dragged, footprint) = match self.drag.state() {
            DragSession::Idle => return None,
            DragSession::Template { template, .. } => (None, template.footprint()),
            DragSession::Module { module_id, .. } => {
                let id = *module_id;
                (Some(id), self.store.get(&id)?.footprint())
            }
        };
        let walls = self.room.walls();
        let result = snap::resolve_snap(
            dragged.as_ref(),
            raw,
            footprint,
            self.store.modules(),
            &walls,
        );
        log::trace!(
            "drag_to ({:.0}, {:.0}, {:.0}) -> ({:.0}, {:.0}, {:.0})",
            raw.x,
            raw.y,
            raw.z,
            result.x,
            result.y,
            result.z
        );
        match dragged {
            None => self.drag.update_preview(result.position()),
            Some(id) => {
                self.store.set_position(&id, result.position());
            }
        }
        Some(result)
    }

    /// Commit the active drag.
    ///
    /// A template commit materializes a new module at the last preview
    /// position, inserts it into the mirror, selects it, and proposes
    /// [`Action::ModulePlaced`]. A module commit proposes
    /// [`Action::ModuleMoved`] with the final position (the mirror already
    /// tracks it live). Empty when no drag was active.
    pub fn commit_drag(&mut self) -> Vec<Action> {
        if let Some(drop) = self.drag.end_template() {
            let module = FurnitureModule::from_template(&drop.template, drop.position);
            log::debug!("template drag commit: {} as {}", module.kind, module.id);
            self.selected = Some(module.id);
            self.store.insert(module.clone());
            return vec![Action::ModulePlaced(module), Action::RenderNeeded];
        }
        if let Some(id) = self.drag.end_module() {
            let Some(module) = self.store.get(&id) else {
                return vec![Action::RenderNeeded];
            };
            log::debug!("module drag commit: {id}");
            let fields = PartialFurnitureModule::position(module.position());
            return vec![Action::ModuleMoved { id, fields }, Action::RenderNeeded];
        }
        Vec::new()
    }

    /// Abandon the active drag. A cancelled module drag restores the
    /// pre-drag position in the mirror. Empty when no drag was active.
    pub fn cancel_drag(&mut self) -> Vec<Action> {
        match self.drag.cancel() {
            None => Vec::new(),
            Some(CancelledDrag::Template) => {
                log::debug!("template drag cancelled");
                vec![Action::RenderNeeded]
            }
            Some(CancelledDrag::Module { module_id, start }) => {
                log::debug!("module drag cancelled: {module_id}");
                self.store.set_position(&module_id, start);
                vec![Action::RenderNeeded]
            }
        }
    }

    // --- Dimensions ---

    /// Dimension entries for the selected module: visible wall clearances,
    /// the three sizes, and gaps to row neighbors. Empty when nothing is
    /// selected.
    #[must_use]
    pub fn selected_dimensions(&self) -> Vec<DimensionEntry> {
        let Some(id) = self.selected else {
            return Vec::new();
        };
        let Some(module) = self.store.get(&id) else {
            return Vec::new();
        };
        let mut entries = dimension::visible_entries(module, &self.room);
        entries.extend(dimension::gap_entries(module, self.store.modules()));
        entries
    }
}
