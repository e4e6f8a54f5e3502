//! Pointer-interaction modes: drag to pan, or drag to draw a zoom box.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use serde::Serialize;

use crate::events::{EventBus, EventKind, Listener};
use crate::host::MapHost;

/// Which pointer interaction is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Dragging pans the map (default).
    #[default]
    Pan,
    /// Dragging draws a box to zoom into.
    ZoomBox,
}

/// Exclusive Pan/ZoomBox toggle.
///
/// Each transition changes the host's drag-pan capability and the box-zoom
/// pointer-down subscription together.
#[derive(Debug, Clone, Default)]
pub struct ModeToggle {
    mode: InteractionMode,
}

impl ModeToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switch to `target`. Returns `false` when it was already active.
    pub fn activate<H: MapHost>(
        &mut self,
        target: InteractionMode,
        host: &mut H,
        listeners: &mut EventBus,
    ) -> bool {
        if self.mode == target {
            return false;
        }
        match target {
            InteractionMode::ZoomBox => {
                host.set_drag_pan_enabled(false);
                listeners.on(EventKind::PointerDown, Listener::BoxZoomStart);
            }
            InteractionMode::Pan => {
                listeners.off(EventKind::PointerDown, Listener::BoxZoomStart);
                host.set_drag_pan_enabled(true);
            }
        }
        self.mode = target;
        true
    }
}
