//! In-memory map host for tests and the replay binary.
//!
//! The world is a plate-carrée projection one tile wide at zoom 0, doubling in
//! pixel size with each zoom level. Every view change that actually moves the
//! map queues a [`MapEvent::MoveEnd`]; the owner drains the queue and forwards
//! events to the controller, as a browser event loop would.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use std::collections::VecDeque;

use crate::consts::{MAX_LAT, MAX_LNG, MAX_ZOOM, MIN_ZOOM, TILE_SIZE_PX, ZOOM_SNAP_EPSILON};
use crate::events::MapEvent;
use crate::host::{MapHost, Settle};
use crate::view::{Bounds, LatLng, Point, View, ViewKind};

/// A headless map with a fixed-size viewport.
#[derive(Debug, Clone)]
pub struct SimulatedMap {
    center: LatLng,
    zoom: f64,
    width_px: f64,
    height_px: f64,
    drag_pan_enabled: bool,
    queue: VecDeque<MapEvent>,
    box_zoom_starts: Vec<Point>,
}

impl SimulatedMap {
    /// A 512×256 viewport showing `center` at `zoom`.
    #[must_use]
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_size(center, zoom, 2.0 * TILE_SIZE_PX, TILE_SIZE_PX)
    }

    #[must_use]
    pub fn with_size(center: LatLng, zoom: f64, width_px: f64, height_px: f64) -> Self {
        Self {
            center,
            zoom: clamp_zoom(zoom),
            width_px,
            height_px,
            drag_pan_enabled: true,
            queue: VecDeque::new(),
            box_zoom_starts: Vec::new(),
        }
    }

    // --- User gestures ---

    /// The user dragged the map so that `center` is in the middle.
    pub fn user_pan_to(&mut self, center: LatLng) {
        self.move_to(center, self.zoom);
    }

    /// The user zoomed to `zoom` around the current center.
    pub fn user_zoom_to(&mut self, zoom: f64) {
        self.move_to(self.center, zoom);
    }

    /// The user drew a box or otherwise framed `bounds`.
    pub fn user_fit_bounds(&mut self, bounds: Bounds) {
        let (center, zoom) = self.framing(bounds);
        self.move_to(center, zoom);
    }

    /// The user pressed the primary pointer at `at`.
    pub fn pointer_down(&mut self, at: Point) {
        self.queue.push_back(MapEvent::PointerDown(at));
    }

    // --- Event queue ---

    /// Take the oldest pending event.
    pub fn next_event(&mut self) -> Option<MapEvent> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    // --- Queries ---

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Geographic extent of the viewport.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        let degrees_per_px = 2.0 * MAX_LNG / world_size_px(self.zoom);
        let half_lng = self.width_px / 2.0 * degrees_per_px;
        let half_lat = self.height_px / 2.0 * degrees_per_px;
        Bounds {
            south_west: LatLng::new(self.center.lat - half_lat, self.center.lng - half_lng),
            north_east: LatLng::new(self.center.lat + half_lat, self.center.lng + half_lng),
        }
    }

    #[must_use]
    pub fn drag_pan_enabled(&self) -> bool {
        self.drag_pan_enabled
    }

    /// Points at which a box-zoom gesture was started, oldest first.
    #[must_use]
    pub fn box_zoom_starts(&self) -> &[Point] {
        &self.box_zoom_starts
    }

    // --- Internals ---

    /// Center and largest whole zoom at which `bounds` fits the viewport.
    fn framing(&self, bounds: Bounds) -> (LatLng, f64) {
        let lng_span = bounds.lng_span();
        let lat_span = bounds.lat_span();
        // At zoom z one degree is world_size_px(z) / 360 pixels, on both axes.
        let fit = |viewport_px: f64, span_deg: f64| {
            if span_deg <= 0.0 {
                MAX_ZOOM
            } else {
                (viewport_px * 2.0 * MAX_LNG / (TILE_SIZE_PX * span_deg)).log2()
            }
        };
        let fitted = fit(self.width_px, lng_span).min(fit(self.height_px, lat_span));
        (bounds.center(), clamp_zoom((fitted + ZOOM_SNAP_EPSILON).floor()))
    }

    fn move_to(&mut self, center: LatLng, zoom: f64) -> Settle {
        let center = LatLng::new(
            center.lat.clamp(-MAX_LAT, MAX_LAT),
            center.lng.clamp(-MAX_LNG, MAX_LNG),
        );
        let zoom = clamp_zoom(zoom);
        if center == self.center && zoom == self.zoom {
            return Settle::Skipped;
        }
        self.center = center;
        self.zoom = zoom;
        self.queue.push_back(MapEvent::MoveEnd);
        Settle::Scheduled
    }
}

impl MapHost for SimulatedMap {
    fn current_view(&self, kind: ViewKind) -> View {
        match kind {
            ViewKind::Centered => View::centered(self.center, self.zoom),
            ViewKind::Bounded => View::bounded(self.bounds()),
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) -> Settle {
        self.move_to(center, zoom)
    }

    fn fit_bounds(&mut self, bounds: Bounds) -> Settle {
        let (center, zoom) = self.framing(bounds);
        self.move_to(center, zoom)
    }

    fn fit_world(&mut self) -> Settle {
        self.fit_bounds(Bounds::WORLD)
    }

    fn set_drag_pan_enabled(&mut self, enabled: bool) {
        self.drag_pan_enabled = enabled;
    }

    fn begin_box_zoom(&mut self, at: Point) {
        self.box_zoom_starts.push(at);
    }
}

fn world_size_px(zoom: f64) -> f64 {
    TILE_SIZE_PX * zoom.exp2()
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
