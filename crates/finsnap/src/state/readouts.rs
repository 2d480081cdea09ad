//! The five animated metric readouts.

use finsnap_core::animate::{Readout, ValueFormat};
use finsnap_core::protocol::MetricsSnapshot;

/// One readout per metric in the snapshot. All five are process-wide
/// singletons that persist across analysis cycles; each new cycle restarts
/// their animations from zero.
#[derive(Debug, Clone)]
pub struct ReadoutPanel {
    pub profit: Readout,
    pub profit_margin: Readout,
    pub burn_rate: Readout,
    pub runway: Readout,
    pub growth_score: Readout,
}

impl ReadoutPanel {
    pub fn new() -> Self {
        Self {
            profit: Readout::new(ValueFormat::Currency),
            profit_margin: Readout::new(ValueFormat::Decimal { suffix: "%" }),
            burn_rate: Readout::new(ValueFormat::Currency),
            runway: Readout::new(ValueFormat::Decimal { suffix: " months" }),
            growth_score: Readout::new(ValueFormat::Decimal { suffix: "/100" }),
        }
    }

    /// Start all five animations for a new metrics snapshot.
    pub fn animate(&mut self, metrics: &MetricsSnapshot, duration_ms: u64) {
        self.profit.animate_to(0.0, metrics.profit, duration_ms);
        self.profit_margin
            .animate_to(0.0, metrics.profit_margin, duration_ms);
        self.burn_rate.animate_to(0.0, metrics.burn_rate, duration_ms);
        self.runway
            .animate_to(0.0, metrics.runway.as_f64(), duration_ms);
        self.growth_score
            .animate_to(0.0, metrics.growth_score, duration_ms);
    }

    /// Advance every in-flight animation by one frame delta.
    pub fn tick(&mut self, dt_ms: u64) {
        self.profit.tick(dt_ms);
        self.profit_margin.tick(dt_ms);
        self.burn_rate.tick(dt_ms);
        self.runway.tick(dt_ms);
        self.growth_score.tick(dt_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.profit.is_animating()
            || self.profit_margin.is_animating()
            || self.burn_rate.is_animating()
            || self.runway.is_animating()
            || self.growth_score.is_animating()
    }
}

impl Default for ReadoutPanel {
    fn default() -> Self {
        Self::new()
    }
}
