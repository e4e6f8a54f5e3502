//! Button model for the toolbar the host renders.
//!
//! Nothing here touches the DOM. [`ToolbarState`] is recomputed from the
//! controller whenever the host wants to redraw, and carries everything a
//! renderer needs: order, titles, CSS classes and highlight/disabled flags.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use serde::{Deserialize, Serialize};

use crate::config::{NavBarOptions, Position};
use crate::consts::{ACTIVE_CLASS, BAR_CLASS, CONTROL_CLASS, DISABLED_CLASS};
use crate::history::HistoryState;
use crate::mode::InteractionMode;

/// A toolbar button, which is also the command it issues when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Home,
    Back,
    Forward,
    ZoomBox,
    PanHand,
}

impl ButtonKind {
    /// Suffix appended to the control class for this button.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Back => "back",
            Self::Forward => "fwd",
            Self::ZoomBox => "zoombox",
            Self::PanHand => "panhand",
        }
    }

    /// Full CSS class identifying this button, e.g. `leaflet-control-navbar-back`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("{CONTROL_CLASS}-{}", self.class_suffix())
    }
}

/// Render state of one button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub kind: ButtonKind,
    pub title: String,
    pub class_name: String,
    /// Highlighted: an available history step, or the current mode.
    pub active: bool,
    /// Greyed out and unclickable.
    pub disabled: bool,
}

impl ButtonState {
    fn new(kind: ButtonKind, title: &str, active: bool, disabled: bool) -> Self {
        Self { kind, title: title.to_string(), class_name: kind.class_name(), active, disabled }
    }

    /// Space-separated class list for the button element.
    #[must_use]
    pub fn css_classes(&self) -> String {
        let mut classes = self.class_name.clone();
        if self.active {
            classes.push(' ');
            classes.push_str(ACTIVE_CLASS);
        }
        if self.disabled {
            classes.push(' ');
            classes.push_str(DISABLED_CLASS);
        }
        classes
    }
}

/// Everything the host needs to draw the toolbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarState {
    pub position: Position,
    pub buttons: Vec<ButtonState>,
}

impl ToolbarState {
    /// Derive button states. `mode` is `None` when the zoom-box toggle is disabled.
    #[must_use]
    pub fn derive(
        options: &NavBarOptions,
        history: HistoryState,
        mode: Option<InteractionMode>,
    ) -> Self {
        let titles = &options.titles;
        let mut buttons = vec![
            ButtonState::new(ButtonKind::Home, &titles.home, false, false),
            ButtonState::new(ButtonKind::Back, &titles.back, history.can_back, !history.can_back),
            ButtonState::new(
                ButtonKind::Forward,
                &titles.forward,
                history.can_forward,
                !history.can_forward,
            ),
        ];
        if let Some(mode) = mode {
            buttons.push(ButtonState::new(
                ButtonKind::ZoomBox,
                &titles.zoom_box,
                mode == InteractionMode::ZoomBox,
                false,
            ));
            buttons.push(ButtonState::new(
                ButtonKind::PanHand,
                &titles.pan_hand,
                mode == InteractionMode::Pan,
                false,
            ));
        }
        Self { position: options.position, buttons }
    }

    /// Class list for the toolbar container.
    #[must_use]
    pub fn container_classes() -> String {
        format!("{CONTROL_CLASS} {BAR_CLASS}")
    }

    /// Look up a button by kind.
    #[must_use]
    pub fn button(&self, kind: ButtonKind) -> Option<&ButtonState> {
        self.buttons.iter().find(|b| b.kind == kind)
    }
}
