//! The host map viewer, as seen by the control.

use crate::view::{Bounds, LatLng, Point, View, ViewKind};

/// Whether a programmatic view change will be followed by a settle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The host will deliver a [`MapEvent::MoveEnd`](crate::events::MapEvent::MoveEnd).
    Scheduled,
    /// The view did not change and no settle event will arrive.
    Skipped,
}

/// Capabilities the control needs from the map it is attached to.
///
/// The host delivers its events by calling
/// [`NavigationController::notify`](crate::controller::NavigationController::notify).
pub trait MapHost {
    /// The view the map shows right now, in the requested representation.
    fn current_view(&self, kind: ViewKind) -> View;

    /// Center the map on `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: f64) -> Settle;

    /// Move and zoom so that `bounds` fits the viewport.
    fn fit_bounds(&mut self, bounds: Bounds) -> Settle;

    /// Show the entire world.
    fn fit_world(&mut self) -> Settle;

    /// Enable or disable the native drag-to-pan gesture.
    fn set_drag_pan_enabled(&mut self, enabled: bool);

    /// Start the box-zoom gesture as if the primary button went down at `at`
    /// with the box-zoom modifier held.
    fn begin_box_zoom(&mut self, at: Point);

    /// Apply a recorded view using the matching host call.
    fn apply_view(&mut self, view: &View) -> Settle {
        match view {
            View::Centered { center, zoom } => self.set_view(*center, *zoom),
            View::Bounded { bounds } => self.fit_bounds(*bounds),
        }
    }
}
