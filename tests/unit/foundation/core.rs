use super::*;

#[test]
fn since_saturates_at_zero() {
    assert_eq!(Millis(30).since(Millis(10)), Millis(20));
    assert_eq!(Millis(10).since(Millis(30)), Millis::ZERO);
}

#[test]
fn next_multiple_is_strictly_later() {
    let step = Millis(16);
    assert_eq!(Millis(0).next_multiple_of(step), Millis(16));
    assert_eq!(Millis(15).next_multiple_of(step), Millis(16));
    assert_eq!(Millis(16).next_multiple_of(step), Millis(32));
    assert_eq!(Millis(7).next_multiple_of(Millis::ZERO), Millis(7));
}

#[test]
fn duration_conversions_floor() {
    assert_eq!(Millis(1500).as_duration(), Duration::from_millis(1500));
    assert_eq!(
        Millis::from_duration_floor(Duration::from_micros(2999)),
        Millis(2)
    );
}

#[test]
fn serializes_as_plain_number() {
    assert_eq!(serde_json::to_string(&Millis(42)).unwrap(), "42");
    let m: Millis = serde_json::from_str("7").unwrap();
    assert_eq!(m, Millis(7));
}
