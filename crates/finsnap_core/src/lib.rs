//! Core logic for the finsnap result-rendering pipeline.
//!
//! This crate holds everything the terminal frontend needs that does not
//! touch the terminal or the network:
//! - The wire contract with the remote analysis service (`protocol`)
//! - Input validation for the three snapshot fields (`validate`)
//! - Currency and readout formatting (`format`)
//! - The numeric readout animation engine (`animate`)
//! - The typed-text reveal scheduler (`reveal`)
//!
//! All timing-dependent state machines here are driven by elapsed-time
//! deltas rather than wall-clock timers, so they can be advanced by any
//! frame source and tested deterministically.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod animate;
pub mod format;
pub mod reveal;
pub mod validate;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod protocol;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use animate::{AnimationSession, Readout, ValueFormat, ease_out_quart};
pub use format::{INFINITY_SYMBOL, format_currency, format_decimal};
pub use protocol::{
    AnalysisInput, AnalysisResult, FORECAST_MONTHS, ForecastSeries, MONTH_LABELS, MetricsSnapshot,
    RiskLevel, Runway,
};
pub use reveal::{RevealPhase, RevealSession};
pub use validate::{ValidationError, parse_input};
