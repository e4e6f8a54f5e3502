//! Scripted sessions: drive a controller against a [`SimulatedMap`].
//!
//! A session is a JSON document with the control options, the initial map
//! setup and a list of steps. After each step every queued map event is
//! delivered to the controller and a [`StepReport`] is produced.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConfigError, NavBarOptions};
use crate::consts::TILE_SIZE_PX;
use crate::controller::{Action, NavigationController};
use crate::history::HistoryState;
use crate::mode::InteractionMode;
use crate::sim::SimulatedMap;
use crate::toolbar::ButtonKind;
use crate::view::{Bounds, LatLng, Point};

/// Error returned when a session cannot be loaded or started.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The session file could not be read.
    #[error("failed to read session {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session JSON is malformed.
    #[error("failed to parse session: {0}")]
    Parse(#[from] serde_json::Error),
    /// The embedded control options are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Initial state of the simulated map.
#[derive(Debug, Clone, Deserialize)]
pub struct MapSetup {
    pub center: LatLng,
    pub zoom: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    2.0 * TILE_SIZE_PX
}

fn default_height() -> f64 {
    TILE_SIZE_PX
}

/// One thing the user does.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Drag the map to a new center.
    PanTo(LatLng),
    /// Zoom around the current center.
    ZoomTo(f64),
    /// Frame a bounding box.
    FitBounds(Bounds),
    /// Click a toolbar button.
    Click(ButtonKind),
    /// Press the primary pointer on the map.
    PointerDown(Point),
}

/// A complete session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub options: NavBarOptions,
    pub map: MapSetup,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Session {
    /// Parse a session from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Parse`] for malformed JSON and
    /// [`ScriptError::Config`] for invalid options.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let session: Self = serde_json::from_str(json)?;
        session.options.validate()?;
        Ok(session)
    }

    /// Read and parse a session file.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Session::from_json`].
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let json = std::fs::read_to_string(path)
            .map_err(|source| ScriptError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&json)
    }
}

/// Controller state observed after a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Zero for the attach, then one per step.
    pub step: usize,
    pub actions: Vec<Action>,
    pub history: HistoryState,
    pub cursor: usize,
    pub len: usize,
    pub mode: Option<InteractionMode>,
    pub center: LatLng,
    pub zoom: f64,
}

/// Run `session` and report the state after attach and after every step.
///
/// # Errors
///
/// Returns [`ScriptError::Config`] when the options are invalid.
pub fn run(session: &Session) -> Result<Vec<StepReport>, ScriptError> {
    let setup = &session.map;
    let mut map = SimulatedMap::with_size(setup.center, setup.zoom, setup.width, setup.height);
    let mut control = NavigationController::new(session.options.clone())?;
    info!(control_id = %control.id(), steps = session.steps.len(), "script: session started");

    let mut actions = control.attach(&mut map);
    actions.extend(pump(&mut control, &mut map));
    let mut reports = vec![report(0, actions, &control, &map)];

    for (index, step) in session.steps.iter().enumerate() {
        let mut actions = match step {
            Step::PanTo(center) => {
                map.user_pan_to(*center);
                Vec::new()
            }
            Step::ZoomTo(zoom) => {
                map.user_zoom_to(*zoom);
                Vec::new()
            }
            Step::FitBounds(bounds) => {
                map.user_fit_bounds(*bounds);
                Vec::new()
            }
            Step::Click(button) => control.click(&mut map, *button),
            Step::PointerDown(at) => {
                map.pointer_down(*at);
                Vec::new()
            }
        };
        actions.extend(pump(&mut control, &mut map));
        reports.push(report(index + 1, actions, &control, &map));
    }
    Ok(reports)
}

/// Deliver every queued map event to the controller.
pub fn pump(control: &mut NavigationController, map: &mut SimulatedMap) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Some(event) = map.next_event() {
        actions.extend(control.notify(map, event));
    }
    actions
}

fn report(
    step: usize,
    actions: Vec<Action>,
    control: &NavigationController,
    map: &SimulatedMap,
) -> StepReport {
    let history = control.history();
    StepReport {
        step,
        actions,
        history: history.state(),
        cursor: history.cursor(),
        len: history.len(),
        mode: control.mode(),
        center: map.center(),
        zoom: map.zoom(),
    }
}
