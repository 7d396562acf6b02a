use super::*;

#[test]
fn empty_clock_returns_immediately() {
    let mut clock = RealtimeClock::default();
    assert!(clock.wait_until(Millis(10_000)).is_none());
}

#[test]
fn wakes_fire_in_order_and_not_early() {
    let mut clock = RealtimeClock::new(Millis(2));
    let t = clock.set_timeout(Millis(5));
    let f = clock.request_frame();

    let first = clock.wait_until(Millis(10_000)).unwrap();
    assert!(matches!(first, Wake::Frame { handle, .. } if handle == f));
    let second = clock.wait_until(Millis(10_000)).unwrap();
    assert!(matches!(second, Wake::Timer { handle, .. } if handle == t));
    assert!(second.now() >= Millis(5));
}

#[test]
fn deadline_stops_waiting() {
    let mut clock = RealtimeClock::default();
    clock.set_timeout(Millis(60_000));
    assert!(clock.wait_until(Millis(3)).is_none());
    assert!(clock.now() >= Millis(3));
}

#[test]
fn cancelled_timer_is_not_delivered() {
    let mut clock = RealtimeClock::default();
    let t = clock.set_timeout(Millis(1));
    clock.clear_timeout(t);
    assert!(clock.wait_until(Millis(50)).is_none());
}
