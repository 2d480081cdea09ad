//! Numeric readout animation engine.
//!
//! A [`Readout`] owns at most one in-flight [`AnimationSession`]. Starting a
//! new animation replaces the old session outright, so a superseded session
//! can never write another frame; the generation counter makes that
//! supersession observable.

use crate::format::{INFINITY_SYMBOL, format_currency, format_decimal};

/// Quartic ease-out: decelerates toward the endpoint.
pub fn ease_out_quart(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// How a readout renders its interpolated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Sign-aware, thousands-grouped, symbol-prefixed integer amount.
    Currency,
    /// One fractional digit plus a fixed suffix.
    Decimal { suffix: &'static str },
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Decimal { suffix } => format_decimal(value, suffix),
        }
    }
}

/// One tween from `from` to `to` over a fixed duration.
///
/// Driven by [`advance`](Self::advance) with measured frame deltas; the final
/// frame lands exactly on `to` regardless of frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSession {
    from: f64,
    to: f64,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl AnimationSession {
    pub fn new(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Advance the session clock. Saturates at the full duration.
    pub fn advance(&mut self, dt_ms: u64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    /// Elapsed-time fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.elapsed_ms as f64 / self.duration_ms as f64
    }

    /// Interpolated value at the current clock.
    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_quart(self.progress())
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// A single on-screen numeric field: its display text plus the session
/// currently driving it, if any.
#[derive(Debug, Clone)]
pub struct Readout {
    format: ValueFormat,
    text: String,
    session: Option<AnimationSession>,
    generation: u64,
}

impl Readout {
    pub fn new(format: ValueFormat) -> Self {
        Self {
            format,
            text: format.render(0.0),
            session: None,
            generation: 0,
        }
    }

    /// Start a new animation toward `to`, superseding any in-flight session.
    ///
    /// A non-finite target (the unbounded runway sentinel) bypasses animation
    /// entirely and renders the infinity symbol immediately.
    pub fn animate_to(&mut self, from: f64, to: f64, duration_ms: u64) {
        self.generation += 1;
        if !to.is_finite() {
            self.session = None;
            self.text = INFINITY_SYMBOL.to_string();
            return;
        }
        let session = AnimationSession::new(from, to, duration_ms);
        self.text = self.format.render(session.value());
        self.session = Some(session);
    }

    /// Advance the active session and refresh the display text.
    pub fn tick(&mut self, dt_ms: u64) {
        if let Some(session) = self.session.as_mut() {
            session.advance(dt_ms);
            self.text = self.format.render(session.value());
            if session.is_done() {
                self.session = None;
            }
        }
    }

    /// Current display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Monotonically increasing session tag; bumps on every `animate_to`.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
