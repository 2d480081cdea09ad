//! Render components for the dashboard.
//!
//! Each component is a free render function over `Frame`, a target `Rect`,
//! and the shared [`AppState`](crate::state::AppState).

pub mod busy;
pub mod charts;
pub mod input_panel;
pub mod readouts;
pub mod status_bar;
pub mod strategy;
