//! Snap thresholds and display bands, all in millimeters.

// ── Snapping ────────────────────────────────────────────────────

/// Pull range for wall snapping: a module edge within this distance of a wall
/// plane lands exactly on it.
pub const WALL_SNAP_MM: f64 = 50.0;

/// Pull range for floor snapping on the y axis.
pub const FLOOR_SNAP_MM: f64 = 50.0;

/// Pull range for peer edge snapping (edge-to-edge contact).
pub const EDGE_SNAP_MM: f64 = 50.0;

/// Pull range for axis alignment guides (both axes, no height/depth bands).
pub const GUIDE_SNAP_MM: f64 = 30.0;

/// Peers must sit within this vertical band of the candidate for their edges
/// to snap together.
pub const HEIGHT_BAND_MM: f64 = 100.0;

// ── Dimension display ───────────────────────────────────────────

/// Clearance labels below this value are suppressed to avoid clutter.
pub const MIN_LABEL_MM: f64 = 50.0;

/// Two modules count as sharing a row for gap labels within this z band.
pub const ROW_BAND_MM: f64 = 300.0;

/// Gap labels are shown for gaps strictly greater than this.
pub const GAP_MIN_MM: f64 = 10.0;

/// Gap labels are shown for gaps up to and including this.
pub const GAP_MAX_MM: f64 = 2000.0;
