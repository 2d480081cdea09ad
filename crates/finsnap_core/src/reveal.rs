//! Typed-text reveal scheduler for the strategy narrative.
//!
//! State machine: `Pending` (initial delay, typing indicator shown) →
//! `Revealing` (one character per interval, strictly in source order) →
//! `Done`. A new session replaces the old one wholesale, so characters from
//! superseded sessions never interleave.

/// Delay before the first character appears.
pub const REVEAL_DELAY_MS: u64 = 1500;
/// Interval between revealed characters.
pub const REVEAL_INTERVAL_MS: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Revealing,
    Done,
}

/// One run of the typed-text disclosure effect from empty to full string.
#[derive(Debug, Clone)]
pub struct RevealSession {
    chars: Vec<char>,
    revealed: usize,
    phase: RevealPhase,
    delay_ms: u64,
    interval_ms: u64,
    clock_ms: u64,
}

impl RevealSession {
    pub fn new(text: &str) -> Self {
        Self::with_timing(text, REVEAL_DELAY_MS, REVEAL_INTERVAL_MS)
    }

    pub fn with_timing(text: &str, delay_ms: u64, interval_ms: u64) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            phase: RevealPhase::Pending,
            delay_ms,
            interval_ms: interval_ms.max(1),
            clock_ms: 0,
        }
    }

    /// Advance the session clock. The first character appears exactly when
    /// the initial delay elapses (hiding the typing indicator on the same
    /// tick); a late tick reveals multiple characters in order rather than
    /// stretching the schedule.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.phase == RevealPhase::Done {
            return;
        }
        self.clock_ms += dt_ms;

        if self.phase == RevealPhase::Pending {
            if self.clock_ms < self.delay_ms {
                return;
            }
            self.clock_ms -= self.delay_ms;
            if self.chars.is_empty() {
                self.phase = RevealPhase::Done;
                return;
            }
            self.phase = RevealPhase::Revealing;
            self.revealed = 1;
        }

        while self.clock_ms >= self.interval_ms && self.revealed < self.chars.len() {
            self.clock_ms -= self.interval_ms;
            self.revealed += 1;
        }
        if self.revealed == self.chars.len() {
            self.phase = RevealPhase::Done;
        }
    }

    /// The currently visible prefix of the narrative.
    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// The typing indicator is shown exactly while the session is pending.
    pub fn is_typing(&self) -> bool {
        self.phase == RevealPhase::Pending
    }

    pub fn is_done(&self) -> bool {
        self.phase == RevealPhase::Done
    }
}
