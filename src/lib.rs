//! Placement, snapping and dimensioning engine for the furniture layout planner.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! geometric core of the layout editor: deciding where a dragged furniture
//! module actually lands (wall snap, peer-edge snap, axis alignment), deriving
//! the distance labels installers use to verify real-world clearances, and
//! tracking the in-progress drag session. The host JavaScript layer renders
//! the scene, persists the module list, and converts pointer rays into
//! room-local millimeter coordinates before they reach the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level facade: testable [`engine::EngineCore`] and [`engine::Action`] |
//! | [`plan`] | Furniture module / catalog template types and the mirror store |
//! | [`room`] | Room dimensions, derived wall planes, room-local points |
//! | [`snap`] | The snap resolver: raw candidate position → clean position |
//! | [`dimension`] | Wall clearances, module sizes, and inter-module gaps |
//! | [`session`] | The drag session state machine |
//! | [`bindings`] | `wasm_bindgen` surface for the JS host |
//! | [`consts`] | Snap thresholds and display bands |

pub mod bindings;
pub mod consts;
pub mod dimension;
pub mod engine;
pub mod plan;
pub mod room;
pub mod session;
pub mod snap;
