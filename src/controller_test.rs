#![allow(clippy::float_cmp)]

use super::*;
use crate::script::pump;
use crate::sim::SimulatedMap;
use crate::view::{Bounds, LatLng, Point};

// =============================================================
// Helpers
// =============================================================

fn at(lat: f64, lng: f64) -> View {
    View::centered(LatLng::new(lat, lng), 2.0)
}

fn start_map() -> SimulatedMap {
    SimulatedMap::new(LatLng::new(0.0, 0.0), 2.0)
}

fn attached(options: NavBarOptions) -> (NavigationController, SimulatedMap) {
    let mut map = start_map();
    let mut ctrl = NavigationController::new(options).unwrap();
    ctrl.attach(&mut map);
    pump(&mut ctrl, &mut map);
    (ctrl, map)
}

fn default_control() -> (NavigationController, SimulatedMap) {
    attached(NavBarOptions::default())
}

fn toggle_control() -> (NavigationController, SimulatedMap) {
    attached(NavBarOptions { enable_zoom_box_toggle: true, ..Default::default() })
}

fn pan(ctrl: &mut NavigationController, map: &mut SimulatedMap, lat: f64, lng: f64) -> Vec<Action> {
    map.user_pan_to(LatLng::new(lat, lng));
    pump(ctrl, map)
}

fn history_changed(can_back: bool, can_forward: bool) -> Action {
    Action::HistoryChanged(HistoryState { can_back, can_forward })
}

// =============================================================
// Construction and attach
// =============================================================

#[test]
fn new_rejects_invalid_options() {
    let options = NavBarOptions { home: Some(View::bounded(Bounds::WORLD)), ..Default::default() };
    assert!(NavigationController::new(options).is_err());
}

#[test]
fn new_control_is_detached() {
    let ctrl = NavigationController::new(NavBarOptions::default()).unwrap();
    assert!(!ctrl.is_attached());
    assert!(ctrl.history().is_empty());
}

#[test]
fn controls_have_distinct_ids() {
    let a = NavigationController::new(NavBarOptions::default()).unwrap();
    let b = NavigationController::new(NavBarOptions::default()).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn attach_without_home_uses_current_map_view() {
    let (ctrl, map) = default_control();
    assert!(ctrl.is_attached());
    assert_eq!(ctrl.home(), Some(&at(0.0, 0.0)));
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0)]);
    assert_eq!(map.pending_events(), 0);
    assert!(ctrl.is_recording());
}

#[test]
fn attach_reports_initial_state() {
    let mut map = start_map();
    let mut ctrl = NavigationController::new(NavBarOptions::default()).unwrap();
    assert_eq!(ctrl.attach(&mut map), vec![history_changed(false, false)]);
}

#[test]
fn attach_reports_initial_mode_with_toggle() {
    let mut map = start_map();
    let options = NavBarOptions { enable_zoom_box_toggle: true, ..Default::default() };
    let mut ctrl = NavigationController::new(options).unwrap();
    assert_eq!(
        ctrl.attach(&mut map),
        vec![history_changed(false, false), Action::ModeChanged(InteractionMode::Pan)]
    );
}

#[test]
fn attach_with_home_moves_map_without_recording() {
    let options = NavBarOptions { home: Some(at(10.0, 20.0)), ..Default::default() };
    let mut map = start_map();
    let mut ctrl = NavigationController::new(options).unwrap();
    ctrl.attach(&mut map);
    assert_eq!(map.center(), LatLng::new(10.0, 20.0));
    assert!(!ctrl.is_recording());

    assert!(pump(&mut ctrl, &mut map).is_empty());
    assert_eq!(ctrl.history().len(), 1);
    assert!(ctrl.is_recording());
}

#[test]
fn attach_in_bounds_mode_without_home_fits_world() {
    let (ctrl, map) = attached(NavBarOptions { use_bounds: true, ..Default::default() });
    assert_eq!(ctrl.home(), None);
    assert!(ctrl.history().is_empty());
    assert_eq!(map.bounds(), Bounds::WORLD);
    assert!(ctrl.is_recording());
}

#[test]
fn first_move_in_empty_bounds_history_is_entry_zero() {
    let (mut ctrl, mut map) = attached(NavBarOptions { use_bounds: true, ..Default::default() });
    let actions = pan(&mut ctrl, &mut map, 10.0, 20.0);
    assert_eq!(actions, vec![history_changed(false, false)]);
    assert_eq!(ctrl.history().entries(), &[View::bounded(map.bounds())]);
    assert_eq!(ctrl.history().cursor(), 0);
}

// =============================================================
// Recording
// =============================================================

#[test]
fn user_move_is_recorded() {
    let (mut ctrl, mut map) = default_control();
    let actions = pan(&mut ctrl, &mut map, 10.0, 10.0);
    assert_eq!(actions, vec![history_changed(true, false)]);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(10.0, 10.0)]);
}

#[test]
fn zoom_is_recorded() {
    let (mut ctrl, mut map) = default_control();
    map.user_zoom_to(5.0);
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().current(), Some(&View::centered(LatLng::new(0.0, 0.0), 5.0)));
}

#[test]
fn browser_style_scenario() {
    let (mut ctrl, mut map) = default_control();

    assert_eq!(pan(&mut ctrl, &mut map, 10.0, 10.0), vec![history_changed(true, false)]);
    assert_eq!(ctrl.history().cursor(), 1);

    assert_eq!(ctrl.go_back(&mut map), vec![history_changed(false, true)]);
    assert_eq!(map.center(), LatLng::new(0.0, 0.0));
    assert!(pump(&mut ctrl, &mut map).is_empty());

    assert_eq!(pan(&mut ctrl, &mut map, -20.0, 30.0), vec![history_changed(true, false)]);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(-20.0, 30.0)]);
    assert_eq!(ctrl.history().cursor(), 1);
}

// =============================================================
// Replay
// =============================================================

#[test]
fn replay_settle_is_not_recorded() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    ctrl.go_back(&mut map);
    assert!(!ctrl.is_recording());
    assert_eq!(map.pending_events(), 1);

    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().len(), 2);
    assert_eq!(ctrl.history().cursor(), 0);
    assert!(ctrl.is_recording());
}

#[test]
fn move_after_replay_is_recorded() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    ctrl.go_back(&mut map);
    pump(&mut ctrl, &mut map);

    pan(&mut ctrl, &mut map, 5.0, 5.0);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(5.0, 5.0)]);
}

#[test]
fn go_forward_replays_next_view() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    ctrl.go_back(&mut map);
    pump(&mut ctrl, &mut map);

    assert_eq!(ctrl.go_forward(&mut map), vec![history_changed(true, false)]);
    assert_eq!(map.center(), LatLng::new(10.0, 10.0));
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().len(), 2);
    assert_eq!(ctrl.history().cursor(), 1);
}

#[test]
fn unavailable_navigation_is_silent_noop() {
    let (mut ctrl, mut map) = default_control();
    assert!(ctrl.go_back(&mut map).is_empty());
    assert!(ctrl.go_forward(&mut map).is_empty());
    assert_eq!(map.pending_events(), 0);
    assert!(ctrl.is_recording());
    assert_eq!(ctrl.history().len(), 1);
}

#[test]
fn two_replays_mute_two_settles() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    pan(&mut ctrl, &mut map, 20.0, 20.0);

    ctrl.go_back(&mut map);
    ctrl.go_back(&mut map);
    assert_eq!(map.pending_events(), 2);

    assert!(pump(&mut ctrl, &mut map).is_empty());
    assert_eq!(ctrl.history().len(), 3);
    assert_eq!(ctrl.history().cursor(), 0);
    assert!(ctrl.is_recording());

    pan(&mut ctrl, &mut map, -5.0, -5.0);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(-5.0, -5.0)]);
}

#[test]
fn replay_without_settle_does_not_leak_mute() {
    let (mut ctrl, mut map) = default_control();
    // Two identical entries: replaying the first does not move the map.
    ctrl.on_host_view_settled(&map);
    assert_eq!(ctrl.history().len(), 2);

    ctrl.go_back(&mut map);
    assert_eq!(map.pending_events(), 0);
    assert!(ctrl.is_recording());

    pan(&mut ctrl, &mut map, 10.0, 10.0);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(10.0, 10.0)]);
}

#[test]
fn settled_replay_then_unsettled_replay_mutes_once() {
    let (mut ctrl, mut map) = default_control();
    // [A, A, B]: the first step back moves the map, the second does not.
    ctrl.on_host_view_settled(&map);
    pan(&mut ctrl, &mut map, 10.0, 10.0);

    ctrl.go_back(&mut map);
    ctrl.go_back(&mut map);
    assert_eq!(map.pending_events(), 1);
    assert!(!ctrl.is_recording());

    assert!(pump(&mut ctrl, &mut map).is_empty());
    assert_eq!(ctrl.history().len(), 3);
    assert_eq!(ctrl.history().cursor(), 0);
    assert!(ctrl.is_recording());

    pan(&mut ctrl, &mut map, -5.0, -5.0);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(-5.0, -5.0)]);
}

#[test]
fn unsettled_replay_then_settled_replay_mutes_once() {
    let (mut ctrl, mut map) = default_control();
    // [A, B, B]: the first step back does not move the map, the second does.
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    ctrl.on_host_view_settled(&map);

    ctrl.go_back(&mut map);
    assert!(ctrl.is_recording());
    ctrl.go_back(&mut map);
    assert_eq!(map.pending_events(), 1);

    assert!(pump(&mut ctrl, &mut map).is_empty());
    assert_eq!(ctrl.history().len(), 3);
    assert_eq!(ctrl.history().cursor(), 0);
    assert!(ctrl.is_recording());
}

#[test]
fn bounds_mode_replays_with_fit_bounds() {
    let options = NavBarOptions {
        use_bounds: true,
        home: Some(View::bounded(Bounds::WORLD)),
        ..Default::default()
    };
    let (mut ctrl, mut map) = attached(options);
    assert_eq!(ctrl.history().entries(), &[View::bounded(Bounds::WORLD)]);
    assert_eq!(map.zoom(), 1.0);

    pan(&mut ctrl, &mut map, 10.0, 20.0);
    assert_eq!(ctrl.history().len(), 2);

    ctrl.go_back(&mut map);
    pump(&mut ctrl, &mut map);
    assert_eq!(map.bounds(), Bounds::WORLD);
    assert_eq!(ctrl.history().len(), 2);
    assert_eq!(ctrl.history().cursor(), 0);
}

// =============================================================
// Home
// =============================================================

#[test]
fn go_home_is_recorded_like_a_move() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);

    assert!(ctrl.go_home(&mut map).is_empty());
    assert_eq!(pump(&mut ctrl, &mut map), vec![history_changed(true, false)]);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(10.0, 10.0), at(0.0, 0.0)]);
}

#[test]
fn go_home_truncates_forward_branch() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    pan(&mut ctrl, &mut map, 20.0, 20.0);
    ctrl.go_back(&mut map);
    pump(&mut ctrl, &mut map);

    ctrl.go_home(&mut map);
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().entries(), &[at(0.0, 0.0), at(10.0, 10.0), at(0.0, 0.0)]);
    assert!(!ctrl.can_go_forward());
}

#[test]
fn go_home_in_bounds_mode_without_home_fits_world() {
    let (mut ctrl, mut map) = attached(NavBarOptions { use_bounds: true, ..Default::default() });
    map.user_zoom_to(6.0);
    pump(&mut ctrl, &mut map);

    ctrl.go_home(&mut map);
    pump(&mut ctrl, &mut map);
    assert_eq!(map.bounds(), Bounds::WORLD);
    assert_eq!(ctrl.history().current(), Some(&View::bounded(Bounds::WORLD)));
}

#[test]
fn go_home_at_home_records_nothing() {
    let (mut ctrl, mut map) = default_control();
    ctrl.go_home(&mut map);
    assert!(pump(&mut ctrl, &mut map).is_empty());
    assert_eq!(ctrl.history().len(), 1);
}

// =============================================================
// Interaction mode
// =============================================================

#[test]
fn zoom_box_hands_pointer_down_to_host() {
    let (mut ctrl, mut map) = toggle_control();
    assert_eq!(
        ctrl.activate_zoom_box(&mut map),
        vec![Action::ModeChanged(InteractionMode::ZoomBox)]
    );
    assert_eq!(ctrl.mode(), Some(InteractionMode::ZoomBox));
    assert!(!map.drag_pan_enabled());

    map.pointer_down(Point::new(40.0, 50.0));
    pump(&mut ctrl, &mut map);
    assert_eq!(map.box_zoom_starts(), &[Point::new(40.0, 50.0)]);
}

#[test]
fn zoom_box_twice_is_idempotent() {
    let (mut ctrl, mut map) = toggle_control();
    ctrl.activate_zoom_box(&mut map);
    assert!(ctrl.activate_zoom_box(&mut map).is_empty());
    assert_eq!(ctrl.listeners().count(EventKind::PointerDown), 1);

    map.pointer_down(Point::new(1.0, 1.0));
    pump(&mut ctrl, &mut map);
    assert_eq!(map.box_zoom_starts().len(), 1);
}

#[test]
fn pan_restores_drag_and_stops_box_zoom() {
    let (mut ctrl, mut map) = toggle_control();
    ctrl.activate_zoom_box(&mut map);
    assert_eq!(ctrl.activate_pan(&mut map), vec![Action::ModeChanged(InteractionMode::Pan)]);
    assert!(map.drag_pan_enabled());
    assert_eq!(ctrl.listeners().count(EventKind::PointerDown), 0);

    map.pointer_down(Point::new(1.0, 1.0));
    pump(&mut ctrl, &mut map);
    assert!(map.box_zoom_starts().is_empty());
}

#[test]
fn mode_commands_without_toggle_are_noops() {
    let (mut ctrl, mut map) = default_control();
    assert!(ctrl.activate_zoom_box(&mut map).is_empty());
    assert_eq!(ctrl.mode(), None);
    assert!(map.drag_pan_enabled());
}

#[test]
fn box_zoom_result_is_recorded() {
    let (mut ctrl, mut map) = toggle_control();
    ctrl.activate_zoom_box(&mut map);
    map.user_fit_bounds(Bounds::new(LatLng::new(10.0, 10.0), LatLng::new(20.0, 30.0)));
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().len(), 2);
    assert_eq!(ctrl.mode(), Some(InteractionMode::ZoomBox));
}

// =============================================================
// Toolbar and click routing
// =============================================================

#[test]
fn toolbar_tracks_history() {
    let (mut ctrl, mut map) = toggle_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    let toolbar = ctrl.toolbar();
    assert!(toolbar.button(ButtonKind::Back).unwrap().active);
    assert!(toolbar.button(ButtonKind::Forward).unwrap().disabled);
    assert!(toolbar.button(ButtonKind::PanHand).unwrap().active);
}

#[test]
fn click_routes_to_commands() {
    let (mut ctrl, mut map) = toggle_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);

    assert_eq!(ctrl.click(&mut map, ButtonKind::Back), vec![history_changed(false, true)]);
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.click(&mut map, ButtonKind::Forward), vec![history_changed(true, false)]);
    pump(&mut ctrl, &mut map);
    assert_eq!(
        ctrl.click(&mut map, ButtonKind::ZoomBox),
        vec![Action::ModeChanged(InteractionMode::ZoomBox)]
    );
    assert_eq!(
        ctrl.click(&mut map, ButtonKind::PanHand),
        vec![Action::ModeChanged(InteractionMode::Pan)]
    );
    ctrl.click(&mut map, ButtonKind::Home);
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().len(), 3);
}

// =============================================================
// Detach
// =============================================================

#[test]
fn detach_stops_recording_and_restores_pan() {
    let (mut ctrl, mut map) = toggle_control();
    ctrl.activate_zoom_box(&mut map);

    assert_eq!(ctrl.detach(&mut map), vec![Action::ModeChanged(InteractionMode::Pan)]);
    assert!(!ctrl.is_attached());
    assert!(map.drag_pan_enabled());
    assert_eq!(ctrl.listeners().count(EventKind::MoveEnd), 0);
    assert_eq!(ctrl.listeners().count(EventKind::PointerDown), 0);

    assert!(pan(&mut ctrl, &mut map, 10.0, 10.0).is_empty());
    assert_eq!(ctrl.history().len(), 1);
}

#[test]
fn commands_while_detached_are_ignored() {
    let mut map = start_map();
    let mut ctrl = NavigationController::new(NavBarOptions {
        enable_zoom_box_toggle: true,
        ..Default::default()
    })
    .unwrap();
    assert!(ctrl.go_home(&mut map).is_empty());
    assert!(ctrl.activate_zoom_box(&mut map).is_empty());
    assert_eq!(map.pending_events(), 0);
    assert!(map.drag_pan_enabled());
}

#[test]
fn detach_twice_is_noop() {
    let (mut ctrl, mut map) = default_control();
    assert!(ctrl.detach(&mut map).is_empty());
    assert!(ctrl.detach(&mut map).is_empty());
}

#[test]
fn reattach_reseeds_history() {
    let (mut ctrl, mut map) = default_control();
    pan(&mut ctrl, &mut map, 10.0, 10.0);
    ctrl.detach(&mut map);

    ctrl.attach(&mut map);
    pump(&mut ctrl, &mut map);
    assert_eq!(ctrl.history().len(), 1);
    assert!(ctrl.is_recording());
}

#[test]
fn reattach_in_zoom_box_keeps_mode_pair_consistent() {
    let (mut ctrl, mut map) = toggle_control();
    ctrl.activate_zoom_box(&mut map);

    let actions = ctrl.attach(&mut map);
    pump(&mut ctrl, &mut map);
    assert!(actions.contains(&Action::ModeChanged(InteractionMode::Pan)));
    assert_eq!(ctrl.mode(), Some(InteractionMode::Pan));
    assert!(map.drag_pan_enabled());
    assert_eq!(ctrl.listeners().count(EventKind::PointerDown), 0);
    assert!(ctrl.is_recording());

    ctrl.activate_zoom_box(&mut map);
    assert!(!map.drag_pan_enabled());
    map.pointer_down(Point::new(1.0, 1.0));
    pump(&mut ctrl, &mut map);
    assert_eq!(map.box_zoom_starts(), &[Point::new(1.0, 1.0)]);
}
