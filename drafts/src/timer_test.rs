use super::*;

#[test]
fn arm_sets_deadline_from_clock() {
    let clock = ManualClock::new(100);
    let mut timer = ManualTimer::new(clock.clone());
    timer.arm(Ticket(1), Duration::from_millis(1000));
    assert_eq!(timer.pending(), Some((Ticket(1), 1100)));
    assert_eq!(timer.arm_count(), 1);
}

#[test]
fn take_due_waits_for_deadline() {
    let clock = ManualClock::new(0);
    let mut timer = ManualTimer::new(clock.clone());
    timer.arm(Ticket(7), Duration::from_millis(500));
    clock.set(499);
    assert_eq!(timer.take_due(), None);
    clock.set(500);
    assert_eq!(timer.take_due(), Some(Ticket(7)));
    assert_eq!(timer.take_due(), None);
}

#[test]
fn cancel_counts_only_pending_delays() {
    let clock = ManualClock::new(0);
    let mut timer = ManualTimer::new(clock);
    timer.cancel();
    assert_eq!(timer.cancel_count(), 0);
    timer.arm(Ticket(1), Duration::from_millis(10));
    timer.cancel();
    assert_eq!(timer.cancel_count(), 1);
    assert_eq!(timer.pending(), None);
}

#[test]
fn clones_share_pending_ticket() {
    let clock = ManualClock::new(0);
    let mut timer = ManualTimer::new(clock);
    let observer = timer.clone();
    timer.arm(Ticket(3), Duration::ZERO);
    assert_eq!(observer.take_due(), Some(Ticket(3)));
    assert_eq!(timer.pending(), None);
}
