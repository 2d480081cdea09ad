//! Action handlers that mutate [`AppState`](crate::state::AppState).

mod analyze;

pub use analyze::{handle_response, poll_worker, submit_analysis};
