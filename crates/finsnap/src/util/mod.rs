//! Shared presentation utilities.

pub mod styles;
