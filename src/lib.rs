//! Back/forward navigation through map view history.
//!
//! A toolbar control for an interactive map: it records every view the map
//! settles on, lets the user step backward and forward through them like
//! browser history, returns to a home view, and optionally toggles between
//! dragging to pan and dragging a box to zoom. The map itself is abstracted
//! behind [`host::MapHost`]; the host forwards its events to
//! [`controller::NavigationController`] and renders the returned
//! [`controller::Action`]s and [`toolbar::ToolbarState`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level control: lifecycle, commands, event routing |
//! | [`history`] | View list with cursor and forward-branch truncation |
//! | [`mode`] | Pan / zoom-box interaction toggle |
//! | [`events`] | Host events and the ordered listener registry |
//! | [`host`] | The map capabilities the control depends on |
//! | [`view`] | Points, bounds and recorded views |
//! | [`toolbar`] | Derived button state for rendering |
//! | [`config`] | Options and validation |
//! | [`sim`] | Headless map host for tests and scripted sessions |
//! | [`script`] | JSON session runner behind the `navbar` binary |
//! | [`consts`] | Shared constants (CSS classes, titles, zoom limits) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod events;
pub mod history;
pub mod host;
pub mod mode;
pub mod script;
pub mod sim;
pub mod toolbar;
pub mod view;
