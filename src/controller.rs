//! Navigation controller: ties view history and the mode toggle to a host map.
//!
//! The host calls [`NavigationController::notify`] for every raw event and the
//! command methods for every button click. Each call returns the [`Action`]s the
//! toolbar must render.
//!
//! Replaying a historical view moves the host, and the host answers with a
//! settle event like any other move. That settle must not be recorded. Before
//! a replay the recorder is unsubscribed and a one-shot
//! [`Listener::ResumeRecording`] takes its place; consuming one settle puts the
//! recorder back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::config::{ConfigError, NavBarOptions};
use crate::events::{EventBus, EventKind, Listener, MapEvent};
use crate::history::{HistoryState, ViewHistory};
use crate::host::{MapHost, Settle};
use crate::mode::{InteractionMode, ModeToggle};
use crate::toolbar::{ButtonKind, ToolbarState};
use crate::view::{View, ViewKind};

/// Unique identifier for a control instance.
pub type ControlId = Uuid;

/// Changes returned from the controller for the toolbar to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Back/forward availability after a record or step.
    HistoryChanged(HistoryState),
    /// The interaction mode switched.
    ModeChanged(InteractionMode),
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

/// One navigation control bound to one map.
pub struct NavigationController {
    id: ControlId,
    options: NavBarOptions,
    home: Option<View>,
    history: ViewHistory,
    toggle: Option<ModeToggle>,
    listeners: EventBus,
    attached: bool,
}

impl NavigationController {
    /// Create a detached control.
    ///
    /// # Errors
    ///
    /// Returns any [`ConfigError`] from [`NavBarOptions::validate`].
    pub fn new(options: NavBarOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let toggle = options.enable_zoom_box_toggle.then(ModeToggle::new);
        Ok(Self {
            id: Uuid::new_v4(),
            home: options.home.clone(),
            options,
            history: ViewHistory::new(),
            toggle,
            listeners: EventBus::new(),
            attached: false,
        })
    }

    // --- Lifecycle ---

    /// Bind to `host`: seed history with the home view and move the host there.
    ///
    /// The settle caused by moving to the home view is not recorded. Attaching
    /// an attached control detaches it first, so it always starts in Pan.
    pub fn attach<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        if self.attached {
            debug!(control_id = %self.id, "navbar: reattach");
            self.detach(host);
        }
        let kind = self.view_kind();
        self.home = match (&self.options.home, kind) {
            (Some(home), _) => Some(home.clone()),
            (None, ViewKind::Centered) => Some(host.current_view(kind)),
            (None, ViewKind::Bounded) => None,
        };
        self.history = self.home.clone().map_or_else(ViewHistory::new, ViewHistory::seeded);
        self.listeners.clear();
        self.attached = true;
        info!(control_id = %self.id, ?kind, seeded = !self.history.is_empty(), "navbar: attached");

        let mut actions = vec![Action::HistoryChanged(self.history.state())];
        if let Some(toggle) = &self.toggle {
            actions.push(Action::ModeChanged(toggle.mode()));
        }

        self.mute_next_settle();
        let settle = self.apply_home(host);
        self.after_replay(settle);
        actions
    }

    /// Unbind from `host`. Drops every subscription and restores drag-to-pan.
    pub fn detach<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        if !self.attached {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if let Some(toggle) = &mut self.toggle {
            if toggle.activate(InteractionMode::Pan, host, &mut self.listeners) {
                actions.push(Action::ModeChanged(InteractionMode::Pan));
            }
        }
        self.listeners.clear();
        self.attached = false;
        info!(control_id = %self.id, "navbar: detached");
        actions
    }

    // --- Host events ---

    /// Route one host event through the subscribed listeners.
    pub fn notify<H: MapHost>(&mut self, host: &mut H, event: MapEvent) -> Vec<Action> {
        let mut actions = Vec::new();
        for listener in self.listeners.dispatch(event.kind()) {
            trace!(control_id = %self.id, ?event, ?listener, "navbar: dispatch");
            match listener {
                Listener::RecordView => actions.extend(self.on_host_view_settled(host)),
                Listener::ResumeRecording => self.resume_recording(),
                Listener::BoxZoomStart => {
                    if let MapEvent::PointerDown(at) = event {
                        host.begin_box_zoom(at);
                    }
                }
            }
        }
        actions
    }

    /// Record the host's current view.
    ///
    /// This records unconditionally. Hosts should deliver settles through
    /// [`notify`](Self::notify), which skips the settles caused by replays.
    pub fn on_host_view_settled<H: MapHost>(&mut self, host: &H) -> Vec<Action> {
        let view = host.current_view(self.view_kind());
        self.history.record(view);
        debug!(
            control_id = %self.id,
            cursor = self.history.cursor(),
            len = self.history.len(),
            "navbar: recorded view"
        );
        vec![Action::HistoryChanged(self.history.state())]
    }

    // --- Commands ---

    /// Move the host to the home view. The resulting settle is recorded.
    pub fn go_home<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        if !self.attached {
            return Vec::new();
        }
        debug!(control_id = %self.id, "navbar: home");
        self.apply_home(host);
        Vec::new()
    }

    /// Step back in history and replay that view. No-op when unavailable.
    pub fn go_back<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        self.replay(host, Direction::Back)
    }

    /// Step forward in history and replay that view. No-op when unavailable.
    pub fn go_forward<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        self.replay(host, Direction::Forward)
    }

    /// Switch to drawing zoom boxes. No-op without the toggle or when already active.
    pub fn activate_zoom_box<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        self.activate_mode(host, InteractionMode::ZoomBox)
    }

    /// Switch back to drag-to-pan. No-op without the toggle or when already active.
    pub fn activate_pan<H: MapHost>(&mut self, host: &mut H) -> Vec<Action> {
        self.activate_mode(host, InteractionMode::Pan)
    }

    /// Run the command behind a toolbar button.
    pub fn click<H: MapHost>(&mut self, host: &mut H, button: ButtonKind) -> Vec<Action> {
        match button {
            ButtonKind::Home => self.go_home(host),
            ButtonKind::Back => self.go_back(host),
            ButtonKind::Forward => self.go_forward(host),
            ButtonKind::ZoomBox => self.activate_zoom_box(host),
            ButtonKind::PanHand => self.activate_pan(host),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn id(&self) -> ControlId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &NavBarOptions {
        &self.options
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    /// The resolved home view; `None` means "fit the world".
    #[must_use]
    pub fn home(&self) -> Option<&View> {
        self.home.as_ref()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.can_step_back()
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Current mode, or `None` when the zoom-box toggle is disabled.
    #[must_use]
    pub fn mode(&self) -> Option<InteractionMode> {
        self.toggle.as_ref().map(ModeToggle::mode)
    }

    /// Whether host settles are currently being recorded.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.listeners.has_persistent(EventKind::MoveEnd, Listener::RecordView)
    }

    #[must_use]
    pub fn listeners(&self) -> &EventBus {
        &self.listeners
    }

    #[must_use]
    pub fn toolbar(&self) -> ToolbarState {
        ToolbarState::derive(&self.options, self.history.state(), self.mode())
    }

    // --- Internals ---

    fn view_kind(&self) -> ViewKind {
        self.options.view_kind()
    }

    fn apply_home<H: MapHost>(&self, host: &mut H) -> Settle {
        match &self.home {
            Some(home) => host.apply_view(home),
            None => host.fit_world(),
        }
    }

    fn replay<H: MapHost>(&mut self, host: &mut H, direction: Direction) -> Vec<Action> {
        if !self.attached {
            return Vec::new();
        }
        let available = match direction {
            Direction::Back => self.history.can_step_back(),
            Direction::Forward => self.history.can_step_forward(),
        };
        if !available {
            return Vec::new();
        }
        self.mute_next_settle();
        let stepped = match direction {
            Direction::Back => self.history.step_back(),
            Direction::Forward => self.history.step_forward(),
        };
        let Some(view) = stepped.cloned() else {
            return Vec::new();
        };
        debug!(control_id = %self.id, ?direction, cursor = self.history.cursor(), "navbar: replay");
        let settle = host.apply_view(&view);
        self.after_replay(settle);
        vec![Action::HistoryChanged(self.history.state())]
    }

    fn activate_mode<H: MapHost>(&mut self, host: &mut H, target: InteractionMode) -> Vec<Action> {
        if !self.attached {
            return Vec::new();
        }
        let Some(toggle) = &mut self.toggle else {
            return Vec::new();
        };
        if !toggle.activate(target, host, &mut self.listeners) {
            return Vec::new();
        }
        debug!(control_id = %self.id, mode = ?target, "navbar: mode changed");
        vec![Action::ModeChanged(target)]
    }

    /// Stop recording until one settle has been consumed.
    fn mute_next_settle(&mut self) {
        self.listeners.off(EventKind::MoveEnd, Listener::RecordView);
        self.listeners.once(EventKind::MoveEnd, Listener::ResumeRecording);
    }

    /// Resubscribe the recorder once no replay settle is outstanding.
    fn resume_recording(&mut self) {
        if self.listeners.has_once(EventKind::MoveEnd, Listener::ResumeRecording) {
            return;
        }
        self.listeners.on(EventKind::MoveEnd, Listener::RecordView);
    }

    /// A replay the host will not settle must not keep its mute.
    fn after_replay(&mut self, settle: Settle) {
        if settle == Settle::Skipped
            && self.listeners.cancel_once(EventKind::MoveEnd, Listener::ResumeRecording)
        {
            trace!(control_id = %self.id, "navbar: replay settled immediately");
            self.resume_recording();
        }
    }
}
