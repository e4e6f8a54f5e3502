//! Control options and their validation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACK_TITLE, DEFAULT_FORWARD_TITLE, DEFAULT_HOME_TITLE, DEFAULT_PAN_HAND_TITLE,
    DEFAULT_ZOOM_BOX_TITLE,
};
use crate::view::{View, ViewKind};

/// Error returned when options cannot be parsed or are inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options JSON is malformed or has fields of the wrong type.
    #[error("failed to parse navbar options: {0}")]
    Parse(#[from] serde_json::Error),
    /// The home view uses the representation the control does not record.
    #[error("home view must be {expected:?} when use_bounds is {use_bounds}")]
    HomeKindMismatch { expected: ViewKind, use_bounds: bool },
    /// A home coordinate or zoom is NaN or infinite.
    #[error("home view has a non-finite coordinate or zoom")]
    NonFiniteHome,
    /// The home bounds' north-east corner lies south or west of the south-west corner.
    #[error("home bounds are inverted")]
    InvertedBounds,
}

/// Corner of the map the toolbar is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Tooltip text for each toolbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonTitles {
    pub home: String,
    pub back: String,
    pub forward: String,
    pub zoom_box: String,
    pub pan_hand: String,
}

impl Default for ButtonTitles {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME_TITLE.to_string(),
            back: DEFAULT_BACK_TITLE.to_string(),
            forward: DEFAULT_FORWARD_TITLE.to_string(),
            zoom_box: DEFAULT_ZOOM_BOX_TITLE.to_string(),
            pan_hand: DEFAULT_PAN_HAND_TITLE.to_string(),
        }
    }
}

/// Options recognised by the navigation control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBarOptions {
    /// Where the toolbar sits on the map.
    pub position: Position,
    /// Record bounding boxes instead of center/zoom.
    pub use_bounds: bool,
    /// The view the home button returns to and history starts from.
    ///
    /// When absent, center/zoom controls use the map's view at attach time
    /// and bounds controls fit the whole world.
    pub home: Option<View>,
    /// Show the zoom-box / pan-hand toggle.
    pub enable_zoom_box_toggle: bool,
    pub titles: ButtonTitles,
}

impl NavBarOptions {
    /// Parse options from JSON and validate them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`NavBarOptions::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// The view representation this control records.
    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        if self.use_bounds { ViewKind::Bounded } else { ViewKind::Centered }
    }

    /// Check the home view against `use_bounds` and for usable numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeKindMismatch`], [`ConfigError::NonFiniteHome`]
    /// or [`ConfigError::InvertedBounds`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(home) = &self.home else {
            return Ok(());
        };
        let expected = self.view_kind();
        if home.kind() != expected {
            return Err(ConfigError::HomeKindMismatch { expected, use_bounds: self.use_bounds });
        }
        match home {
            View::Centered { center, zoom } => {
                if !center.is_finite() || !zoom.is_finite() {
                    return Err(ConfigError::NonFiniteHome);
                }
            }
            View::Bounded { bounds } => {
                if !bounds.south_west.is_finite() || !bounds.north_east.is_finite() {
                    return Err(ConfigError::NonFiniteHome);
                }
                if !bounds.is_well_formed() {
                    return Err(ConfigError::InvertedBounds);
                }
            }
        }
        Ok(())
    }
}
