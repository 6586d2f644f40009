//! Drag session state machine.
//!
//! One continuous pointer interaction is one session: either a template drag
//! (new module from the catalog) or a module drag (repositioning a placed
//! module). The session is a single tagged union, so "both tracks active at
//! once" is unrepresentable. The controller never touches the module list:
//! it tracks interaction state and hands commit/cancel payloads back to the
//! caller, which owns all writes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::plan::{ModuleId, ModuleTemplate};
use crate::room::Vec3;

/// Error returned when a drag operation is invalid in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A new drag was started while another one is active.
    #[error("a drag session is already active")]
    DragInProgress,
}

/// The active drag, if any.
#[derive(Debug, Clone, Default)]
pub enum DragSession {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A catalog template is being dragged into the room.
    Template {
        template: ModuleTemplate,
        /// Last resolved preview position, overwritten on every pointer move.
        preview: Vec3,
    },
    /// A placed module is being repositioned.
    Module {
        module_id: ModuleId,
        /// Position at pointer-down, restored on cancel.
        start: Vec3,
    },
}

/// Payload returned when a template drag commits: the external collaborator
/// materializes it into a new placed module.
#[derive(Debug, Clone)]
pub struct TemplateDrop {
    pub template: ModuleTemplate,
    pub position: Vec3,
}

/// What was abandoned by [`DragController::cancel`].
#[derive(Debug, Clone)]
pub enum CancelledDrag {
    Template,
    /// The caller must restore the module to `start`.
    Module { module_id: ModuleId, start: Vec3 },
}

/// Owns the current [`DragSession`] and enforces its transitions.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragSession,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session state.
    #[must_use]
    pub fn state(&self) -> &DragSession {
        &self.state
    }

    /// Whether any drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragSession::Idle)
    }

    /// Begin dragging a catalog template. The preview sits at the origin
    /// until the first pointer move arrives.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DragInProgress`] if any drag is already
    /// active; the active session is left untouched.
    pub fn start_template(&mut self, template: ModuleTemplate) -> Result<(), SessionError> {
        if self.is_active() {
            return Err(SessionError::DragInProgress);
        }
        self.state = DragSession::Template { template, preview: Vec3::zero() };
        Ok(())
    }

    /// Overwrite the template preview with an already-resolved position.
    /// Silently a no-op unless a template drag is active.
    pub fn update_preview(&mut self, position: Vec3) {
        if let DragSession::Template { preview, .. } = &mut self.state {
            *preview = position;
        }
    }

    /// Commit the template drag. Returns the drop payload the first time and
    /// `None` on any later call; the second call has no side effects.
    pub fn end_template(&mut self) -> Option<TemplateDrop> {
        match std::mem::take(&mut self.state) {
            DragSession::Template { template, preview } => {
                Some(TemplateDrop { template, position: preview })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Begin repositioning a placed module, recording the pre-drag position
    /// for cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DragInProgress`] if any drag is already
    /// active; the active session is left untouched.
    pub fn start_module(&mut self, module_id: ModuleId, start: Vec3) -> Result<(), SessionError> {
        if self.is_active() {
            return Err(SessionError::DragInProgress);
        }
        self.state = DragSession::Module { module_id, start };
        Ok(())
    }

    /// Finish the module drag, returning the module id so the caller can
    /// write the final position back. The controller itself never mutates
    /// the module list. `None` (no side effects) when no module drag is
    /// active.
    pub fn end_module(&mut self) -> Option<ModuleId> {
        match std::mem::take(&mut self.state) {
            DragSession::Module { module_id, .. } => Some(module_id),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Abandon the active drag, whichever variant it is. A cancelled module
    /// drag reports the recorded start so the caller can restore the
    /// pre-drag position. `None` when already idle.
    pub fn cancel(&mut self) -> Option<CancelledDrag> {
        match std::mem::take(&mut self.state) {
            DragSession::Idle => None,
            DragSession::Template { .. } => Some(CancelledDrag::Template),
            DragSession::Module { module_id, start } => {
                Some(CancelledDrag::Module { module_id, start })
            }
        }
    }
}
