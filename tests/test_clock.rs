use std::time::{Duration, Instant};

use hacker_runner::clock::FrameClock;

#[test]
fn first_step_without_start_is_zero() {
    let mut clock = FrameClock::new(0.033);
    assert_eq!(clock.step(Instant::now()), 0.0);
}

#[test]
fn step_measures_elapsed_time() {
    let t0 = Instant::now();
    let mut clock = FrameClock::new(0.033);
    clock.start(t0);
    let dt = clock.step(t0 + Duration::from_millis(10));
    assert!((dt - 0.010).abs() < 1e-9);
    let dt = clock.step(t0 + Duration::from_millis(26));
    assert!((dt - 0.016).abs() < 1e-9);
}

#[test]
fn stall_is_clamped_to_max_step() {
    let t0 = Instant::now();
    let mut clock = FrameClock::new(0.033);
    clock.start(t0);
    assert_eq!(clock.step(t0 + Duration::from_secs(5)), 0.033);
    // The reference instant still moves forward.
    let dt = clock.step(t0 + Duration::from_secs(5) + Duration::from_millis(5));
    assert!((dt - 0.005).abs() < 1e-9);
}

#[test]
fn time_going_backwards_yields_zero() {
    let t0 = Instant::now() + Duration::from_secs(1);
    let mut clock = FrameClock::new(0.033);
    clock.start(t0);
    assert_eq!(clock.step(t0 - Duration::from_millis(500)), 0.0);
    assert_eq!(clock.max_step(), 0.033);
}
