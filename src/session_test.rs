#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn template() -> ModuleTemplate {
    ModuleTemplate {
        kind: "tall-larder".into(),
        category: "kitchen".into(),
        width_mm: 600.0,
        height_mm: 2100.0,
        depth_mm: 560.0,
        finish: "graphite".into(),
        price: 780.0,
    }
}

fn pt(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn controller_starts_idle() {
    let ctl = DragController::new();
    assert!(!ctl.is_active());
    assert!(matches!(ctl.state(), DragSession::Idle));
}

#[test]
fn session_default_is_idle() {
    assert!(matches!(DragSession::default(), DragSession::Idle));
}

// =============================================================
// Template drags
// =============================================================

#[test]
fn start_template_activates_with_origin_preview() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    assert!(ctl.is_active());
    match ctl.state() {
        DragSession::Template { preview, .. } => assert_eq!(*preview, Vec3::zero()),
        other => panic!("expected template drag, got {other:?}"),
    }
}

#[test]
fn update_preview_overwrites_position() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    ctl.update_preview(pt(100.0, 0.0, -50.0));
    ctl.update_preview(pt(200.0, 0.0, -75.0));
    match ctl.state() {
        DragSession::Template { preview, .. } => assert_eq!(*preview, pt(200.0, 0.0, -75.0)),
        other => panic!("expected template drag, got {other:?}"),
    }
}

#[test]
fn update_preview_is_noop_when_idle() {
    let mut ctl = DragController::new();
    ctl.update_preview(pt(1.0, 2.0, 3.0));
    assert!(!ctl.is_active());
}

#[test]
fn update_preview_is_noop_during_module_drag() {
    let mut ctl = DragController::new();
    ctl.start_module(Uuid::new_v4(), pt(5.0, 0.0, 5.0)).unwrap();
    ctl.update_preview(pt(1.0, 2.0, 3.0));
    match ctl.state() {
        DragSession::Module { start, .. } => assert_eq!(*start, pt(5.0, 0.0, 5.0)),
        other => panic!("expected module drag, got {other:?}"),
    }
}

#[test]
fn end_template_returns_last_preview() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    ctl.update_preview(pt(420.0, 0.0, -1220.0));
    let drop = ctl.end_template().unwrap();
    assert_eq!(drop.position, pt(420.0, 0.0, -1220.0));
    assert_eq!(drop.template.kind, "tall-larder");
    assert!(!ctl.is_active());
}

#[test]
fn end_template_twice_returns_payload_then_none() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    assert!(ctl.end_template().is_some());
    assert!(ctl.end_template().is_none());
    assert!(!ctl.is_active());
}

#[test]
fn end_template_during_module_drag_is_noop() {
    let mut ctl = DragController::new();
    let id = Uuid::new_v4();
    ctl.start_module(id, Vec3::zero()).unwrap();
    assert!(ctl.end_template().is_none());
    // The module drag is still alive.
    assert!(ctl.is_active());
    assert_eq!(ctl.end_module(), Some(id));
}

// =============================================================
// Module drags
// =============================================================

#[test]
fn start_module_records_start_position() {
    let mut ctl = DragController::new();
    let id = Uuid::new_v4();
    ctl.start_module(id, pt(800.0, 0.0, -1220.0)).unwrap();
    match ctl.state() {
        DragSession::Module { module_id, start } => {
            assert_eq!(*module_id, id);
            assert_eq!(*start, pt(800.0, 0.0, -1220.0));
        }
        other => panic!("expected module drag, got {other:?}"),
    }
}

#[test]
fn end_module_returns_id_and_clears() {
    let mut ctl = DragController::new();
    let id = Uuid::new_v4();
    ctl.start_module(id, Vec3::zero()).unwrap();
    assert_eq!(ctl.end_module(), Some(id));
    assert!(!ctl.is_active());
}

#[test]
fn end_module_twice_returns_id_then_none() {
    let mut ctl = DragController::new();
    ctl.start_module(Uuid::new_v4(), Vec3::zero()).unwrap();
    assert!(ctl.end_module().is_some());
    assert!(ctl.end_module().is_none());
}

#[test]
fn end_module_during_template_drag_is_noop() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    assert!(ctl.end_module().is_none());
    assert!(ctl.is_active());
}

// =============================================================
// Exclusivity
// =============================================================

#[test]
fn second_template_start_is_rejected() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    let err = ctl.start_template(template()).unwrap_err();
    assert_eq!(err, SessionError::DragInProgress);
}

#[test]
fn template_start_during_module_drag_is_rejected() {
    let mut ctl = DragController::new();
    let id = Uuid::new_v4();
    ctl.start_module(id, pt(7.0, 0.0, 7.0)).unwrap();
    assert_eq!(ctl.start_template(template()).unwrap_err(), SessionError::DragInProgress);
    // The original session survives the rejected start.
    match ctl.state() {
        DragSession::Module { module_id, start } => {
            assert_eq!(*module_id, id);
            assert_eq!(*start, pt(7.0, 0.0, 7.0));
        }
        other => panic!("expected module drag, got {other:?}"),
    }
}

#[test]
fn module_start_during_template_drag_is_rejected() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    let err = ctl.start_module(Uuid::new_v4(), Vec3::zero()).unwrap_err();
    assert_eq!(err, SessionError::DragInProgress);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancel_when_idle_is_none() {
    let mut ctl = DragController::new();
    assert!(ctl.cancel().is_none());
}

#[test]
fn cancel_template_drag() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    assert!(matches!(ctl.cancel(), Some(CancelledDrag::Template)));
    assert!(!ctl.is_active());
}

#[test]
fn cancel_module_drag_reports_start_for_restore() {
    let mut ctl = DragController::new();
    let id = Uuid::new_v4();
    ctl.start_module(id, pt(800.0, 0.0, -1220.0)).unwrap();
    match ctl.cancel() {
        Some(CancelledDrag::Module { module_id, start }) => {
            assert_eq!(module_id, id);
            assert_eq!(start, pt(800.0, 0.0, -1220.0));
        }
        other => panic!("expected cancelled module drag, got {other:?}"),
    }
    assert!(!ctl.is_active());
}

#[test]
fn new_drag_can_start_after_cancel() {
    let mut ctl = DragController::new();
    ctl.start_template(template()).unwrap();
    assert!(ctl.cancel().is_some());
    ctl.start_module(Uuid::new_v4(), Vec3::zero()).unwrap();
    assert!(ctl.is_active());
}

// =============================================================
// SessionError
// =============================================================

#[test]
fn error_display() {
    assert_eq!(SessionError::DragInProgress.to_string(), "a drag session is already active");
}
