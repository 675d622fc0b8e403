//! Stamina domain: unit tests for the resource pool.

use super::Stamina;

#[test]
fn test_reduce_clamps_at_zero() {
    let mut stamina = Stamina::new(10.0);

    let drained = stamina.reduce(25.0);

    assert_eq!(drained, 10.0);
    assert_eq!(stamina.current(), 0.0);
    assert!(stamina.is_exhausted());
}

#[test]
fn test_total_consumed_counts_only_what_was_removed() {
    let mut stamina = Stamina::new(10.0);

    stamina.reduce(4.0);
    assert_eq!(stamina.total_consumed(), 4.0);

    stamina.reduce(100.0);
    assert_eq!(stamina.current(), 0.0);
    assert_eq!(stamina.total_consumed(), 10.0);
}

#[test]
fn test_reduce_after_exhaustion_changes_nothing() {
    let mut stamina = Stamina::new(5.0);
    stamina.reduce(5.0);

    for _ in 0..3 {
        assert_eq!(stamina.reduce(5.0), 0.0);
    }
    assert_eq!(stamina.current(), 0.0);
    assert_eq!(stamina.total_consumed(), 5.0);
}

#[test]
fn test_negative_amounts_are_ignored() {
    let mut stamina = Stamina::new(10.0);
    stamina.reduce(4.0);

    stamina.reduce(-3.0);
    stamina.increase(-3.0);

    assert_eq!(stamina.current(), 6.0);
    assert_eq!(stamina.total_consumed(), 4.0);
}

#[test]
fn test_increase_clamps_at_max() {
    let mut stamina = Stamina::new(10.0);
    stamina.reduce(3.0);

    let gained = stamina.increase(50.0);

    assert_eq!(gained, 3.0);
    assert_eq!(stamina.current(), 10.0);
    // Refilling never rolls the consumption counter back.
    assert_eq!(stamina.total_consumed(), 3.0);
}

#[test]
fn test_regen_waits_for_delay() {
    let mut stamina = Stamina::new(10.0);
    stamina.regen_rate = 4.0;
    stamina.regen_delay = 1.0;
    stamina.reduce(8.0);

    stamina.tick_regen(0.5);
    assert_eq!(stamina.current(), 2.0);

    stamina.tick_regen(0.5);
    assert_eq!(stamina.current(), 4.0);
}

#[test]
fn test_regen_stops_at_max() {
    let mut stamina = Stamina::new(10.0);
    stamina.regen_rate = 100.0;
    stamina.reduce(1.0);

    stamina.tick_regen(1.0);

    assert_eq!(stamina.current(), 10.0);
}

#[test]
fn test_hold_regen_restarts_delay() {
    let mut stamina = Stamina::new(10.0);
    stamina.regen_rate = 4.0;
    stamina.regen_delay = 1.0;
    stamina.reduce(8.0);

    stamina.tick_regen(0.75);
    stamina.hold_regen();
    stamina.tick_regen(0.5);

    assert_eq!(stamina.current(), 2.0);
}
