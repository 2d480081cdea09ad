//! Central mutable state for the dashboard.

use finsnap_core::protocol::{MetricsSnapshot, RiskLevel};
use finsnap_core::reveal::RevealSession;

use crate::components::charts::ChartSlots;
use crate::state::loading::LoadingState;
use crate::state::readouts::ReadoutPanel;

/// Which of the three input fields currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Revenue,
    Expenses,
    Cash,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::Revenue => "Monthly Revenue",
            InputField::Expenses => "Monthly Expenses",
            InputField::Cash => "Cash on Hand",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InputField::Revenue => InputField::Expenses,
            InputField::Expenses => InputField::Cash,
            InputField::Cash => InputField::Revenue,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            InputField::Revenue => InputField::Cash,
            InputField::Expenses => InputField::Revenue,
            InputField::Cash => InputField::Expenses,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A user-visible message shown in the status bar until dismissed or
/// replaced.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct AppState {
    pub exit: bool,

    // Input panel
    pub revenue_input: String,
    pub expenses_input: String,
    pub cash_input: String,
    pub focus: InputField,

    // Request lifecycle
    pub loading: LoadingState,
    pub notice: Option<Notice>,
    /// Bumped on every submitted request; responses carrying an older
    /// sequence number are stale and discarded.
    pub cycle_seq: u64,

    // Result surfaces. These persist across cycles: a failed re-analysis
    // leaves all of them untouched.
    pub readouts: ReadoutPanel,
    pub charts: ChartSlots,
    pub narrative: Option<RevealSession>,
    pub metrics: Option<MetricsSnapshot>,
    pub risk: Option<RiskLevel>,

    /// Result sections stay hidden until the settle delay after the first
    /// successful response has elapsed.
    pub sections_visible: bool,
    pub settle_ms: Option<u64>,

    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            exit: false,
            revenue_input: String::new(),
            expenses_input: String::new(),
            cash_input: String::new(),
            focus: InputField::Revenue,
            loading: LoadingState::default(),
            notice: None,
            cycle_seq: 0,
            readouts: ReadoutPanel::new(),
            charts: ChartSlots::default(),
            narrative: None,
            metrics: None,
            risk: None,
            sections_visible: false,
            settle_ms: None,
            spinner_frame: 0,
        }
    }
}

impl AppState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        });
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            message: message.into(),
        });
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Revenue => &mut self.revenue_input,
            InputField::Expenses => &mut self.expenses_input,
            InputField::Cash => &mut self.cash_input,
        }
    }

    pub fn input_for(&self, field: InputField) -> &str {
        match field {
            InputField::Revenue => &self.revenue_input,
            InputField::Expenses => &self.expenses_input,
            InputField::Cash => &self.cash_input,
        }
    }

    /// Advance every time-driven presentation state by one frame delta.
    pub fn tick(&mut self, dt_ms: u64) {
        self.readouts.tick(dt_ms);

        if let Some(narrative) = self.narrative.as_mut() {
            narrative.tick(dt_ms);
        }

        if let Some(remaining) = self.settle_ms {
            if remaining <= dt_ms {
                self.settle_ms = None;
                // the TUI analog of scrolling the metrics into view
                self.sections_visible = true;
            } else {
                self.settle_ms = Some(remaining - dt_ms);
            }
        }

        if self.loading.is_visible() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
