//! Busy-indicator visibility flag.

/// Visibility of the shared busy overlay around the request lifecycle.
/// `show` and `hide` are idempotent; there is no nesting or counting.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadingState {
    visible: bool,
}

impl LoadingState {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
