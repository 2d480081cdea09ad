//! Unit tests for the result-rendering pipeline primitives.
//!
//! Tests are organized by topic:
//! - `protocol` - Wire contract shapes, runway sentinel, risk parsing
//! - `validation` - Input field validation
//! - `format` - Currency and decimal formatting
//! - `animation` - Easing, tween sessions, readout supersession
//! - `reveal` - Typed-text reveal state machine

mod animation;
mod protocol;
