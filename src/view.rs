//! Map view values: geographic points, bounding boxes, and recorded views.
//!
//! A [`View`] is an immutable snapshot of where the map was looking. A control
//! records views in exactly one representation, chosen once at construction
//! via [`ViewKind`]: either a center point plus zoom level, or a bounding box.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_LAT, MAX_LNG};

/// A point in screen space (CSS pixels relative to the map container).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// An axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    /// The whole world in plate-carrée coordinates.
    pub const WORLD: Self = Self {
        south_west: LatLng { lat: -MAX_LAT, lng: -MAX_LNG },
        north_east: LatLng { lat: MAX_LAT, lng: MAX_LNG },
    };

    #[must_use]
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self { south_west, north_east }
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lng: (self.south_west.lng + self.north_east.lng) / 2.0,
        }
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north_east.lat - self.south_west.lat
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.north_east.lng - self.south_west.lng
    }

    /// Corners are finite and the north-east corner is not south or west of the south-west one.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.south_west.is_finite()
            && self.north_east.is_finite()
            && self.lat_span() >= 0.0
            && self.lng_span() >= 0.0
    }
}

/// Which representation a control records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Center point and zoom level.
    Centered,
    /// Bounding box.
    Bounded,
}

/// A recorded map view.
///
/// Deserializes from either `{"center": {...}, "zoom": 3}` or `{"bounds": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum View {
    Centered { center: LatLng, zoom: f64 },
    Bounded { bounds: Bounds },
}

impl View {
    #[must_use]
    pub fn centered(center: LatLng, zoom: f64) -> Self {
        Self::Centered { center, zoom }
    }

    #[must_use]
    pub fn bounded(bounds: Bounds) -> Self {
        Self::Bounded { bounds }
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Centered { .. } => ViewKind::Centered,
            Self::Bounded { .. } => ViewKind::Bounded,
        }
    }
}
