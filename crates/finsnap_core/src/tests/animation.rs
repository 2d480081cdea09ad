//! Animation engine tests: easing, endpoint exactness, supersession.

use crate::animate::{AnimationSession, Readout, ValueFormat, ease_out_quart};
use crate::format::INFINITY_SYMBOL;

#[test]
fn ease_out_quart_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    // clamped outside [0, 1]
    assert_eq!(ease_out_quart(-0.5), 0.0);
    assert_eq!(ease_out_quart(2.0), 1.0);
}

#[test]
fn ease_out_quart_decelerates() {
    // front-loaded: half the time covers well over half the distance
    assert!(ease_out_quart(0.5) > 0.9);
}

#[test]
fn session_starts_at_from_and_lands_exactly_on_to() {
    let mut session = AnimationSession::new(0.0, 100.0, 1000);
    assert_eq!(session.value(), 0.0);

    session.advance(999);
    assert!(!session.is_done());

    session.advance(1);
    assert!(session.is_done());
    assert_eq!(session.value(), 100.0);
}

#[test]
fn session_survives_oversized_frames() {
    // one giant frame delta still lands exactly on the target
    let mut session = AnimationSession::new(-500.0, 250.0, 1000);
    session.advance(10_000);
    assert!(session.is_done());
    assert_eq!(session.value(), 250.0);
}

#[test]
fn values_are_monotonic_when_increasing() {
    let mut session = AnimationSession::new(0.0, 100.0, 1000);
    let mut previous = session.value();
    for _ in 0..20 {
        session.advance(50);
        let current = session.value();
        assert!(current >= previous, "value regressed: {previous} -> {current}");
        previous = current;
    }
    assert_eq!(previous, 100.0);
}

#[test]
fn readout_renders_through_its_format() {
    let mut readout = Readout::new(ValueFormat::Currency);
    assert_eq!(readout.text(), "$0");

    readout.animate_to(0.0, 3000.0, 1000);
    readout.tick(1000);
    assert_eq!(readout.text(), "$3,000");
    assert!(!readout.is_animating());

    readout.animate_to(0.0, -500.0, 1000);
    readout.tick(1000);
    assert_eq!(readout.text(), "-$500");
}

#[test]
fn unbounded_target_bypasses_animation() {
    let mut readout = Readout::new(ValueFormat::Decimal { suffix: " months" });
    readout.animate_to(0.0, f64::INFINITY, 1000);
    assert_eq!(readout.text(), INFINITY_SYMBOL);
    assert!(!readout.is_animating());

    // ticking does not disturb the sentinel
    readout.tick(500);
    assert_eq!(readout.text(), INFINITY_SYMBOL);
}

#[test]
fn new_animation_supersedes_in_flight_session() {
    let mut readout = Readout::new(ValueFormat::Currency);
    readout.animate_to(0.0, 100.0, 1000);
    let first_generation = readout.generation();
    readout.tick(200);

    readout.animate_to(0.0, 9000.0, 1000);
    assert_eq!(readout.generation(), first_generation + 1);

    // the new session's values are authoritative from here on
    readout.tick(1000);
    assert_eq!(readout.text(), "$9,000");
}
