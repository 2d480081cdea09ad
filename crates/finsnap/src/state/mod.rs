//! Application state for the snapshot dashboard.

mod app_state;
mod loading;
mod readouts;

pub use app_state::{AppState, InputField, Notice, NoticeKind};
pub use loading::LoadingState;
pub use readouts::ReadoutPanel;
