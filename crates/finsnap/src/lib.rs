//! Terminal dashboard for quick financial health snapshots.
//!
//! Collects three inputs (monthly revenue, monthly expenses, cash on hand),
//! sends them to a remote analysis service, and renders the response as
//! animated metric readouts, two twelve-month forecast charts, and a typed
//! strategy narrative.

// ============================================================================
// Core modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod client;
pub mod worker;

// ============================================================================
// Presentation modules
// ============================================================================

pub mod components;
pub mod state;
pub mod util;

// ============================================================================
// Infrastructure modules
// ============================================================================

pub mod config;
pub mod logging;

#[cfg(test)]
pub(crate) mod testutil;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;
