//! Shared constants for the navbar crate.

// ── Geography ───────────────────────────────────────────────────

/// Latitude limit of the plate-carrée world, in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Longitude limit of the plate-carrée world, in degrees.
pub const MAX_LNG: f64 = 180.0;

// ── Simulated viewport ──────────────────────────────────────────

/// Width and height of one map tile in pixels; the world is one tile wide at zoom 0.
pub const TILE_SIZE_PX: f64 = 256.0;

/// Lowest zoom level the simulated map accepts.
pub const MIN_ZOOM: f64 = 0.0;

/// Highest zoom level the simulated map accepts.
pub const MAX_ZOOM: f64 = 18.0;

/// Slack when snapping a fitted zoom down to a whole level, so that bounds
/// read back from the map refit at the zoom they came from.
pub const ZOOM_SNAP_EPSILON: f64 = 1e-9;

// ── Toolbar ─────────────────────────────────────────────────────

/// CSS class shared by the toolbar container and, as a prefix, by every button.
pub const CONTROL_CLASS: &str = "leaflet-control-navbar";

/// CSS class the host's bar styling hooks onto.
pub const BAR_CLASS: &str = "leaflet-bar";

/// CSS class added to a highlighted button.
pub const ACTIVE_CLASS: &str = "active";

/// CSS class added to a button that cannot be clicked.
pub const DISABLED_CLASS: &str = "leaflet-disabled";

pub const DEFAULT_HOME_TITLE: &str = "Go to home map view";
pub const DEFAULT_BACK_TITLE: &str = "Go back in map view history";
pub const DEFAULT_FORWARD_TITLE: &str = "Go forward in map view history";
pub const DEFAULT_ZOOM_BOX_TITLE: &str = "Draw a box to zoom";
pub const DEFAULT_PAN_HAND_TITLE: &str = "Drag to pan";
