//! Rearmable one-shot timer.
//!
//! The store never holds more than one pending delay. Every rearm cancels the
//! pending delay first, then schedules a new one tagged with a fresh
//! [`Ticket`]. When a delay elapses the host hands its ticket back to
//! [`DraftStore::fire`](crate::store::DraftStore::fire); tickets that were
//! superseded or cancelled in the meantime are ignored, so a timer backend
//! that cannot truly cancel is still correct.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::clock::{Clock, ManualClock};

/// Identity of one scheduled delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

pub trait Timer {
    /// Schedule `ticket` to fire after `delay`. Any previously armed ticket
    /// has already been cancelled by the caller.
    fn arm(&mut self, ticket: Ticket, delay: Duration);

    /// Drop the pending delay, if any.
    fn cancel(&mut self);
}

/// Virtual timer for tests and headless hosts. Deadlines are measured on a
/// shared [`ManualClock`]; clones observe the same pending ticket.
#[derive(Clone, Debug)]
pub struct ManualTimer {
    clock: ManualClock,
    inner: Rc<RefCell<ManualTimerInner>>,
}

#[derive(Debug, Default)]
struct ManualTimerInner {
    armed: Option<(Ticket, i64)>,
    arm_count: usize,
    cancel_count: usize,
}

impl ManualTimer {
    #[must_use]
    pub fn new(clock: ManualClock) -> Self {
        Self { clock, inner: Rc::new(RefCell::new(ManualTimerInner::default())) }
    }

    /// Pending ticket and its absolute deadline in millis.
    #[must_use]
    pub fn pending(&self) -> Option<(Ticket, i64)> {
        self.inner.borrow().armed
    }

    /// Take the pending ticket if its deadline has been reached.
    pub fn take_due(&self) -> Option<Ticket> {
        let now = self.clock.now_millis();
        let mut inner = self.inner.borrow_mut();
        match inner.armed {
            Some((ticket, deadline)) if deadline <= now => {
                inner.armed = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn arm_count(&self) -> usize {
        self.inner.borrow().arm_count
    }

    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.inner.borrow().cancel_count
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, ticket: Ticket, delay: Duration) {
        let delay_ms = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        let deadline = self.clock.now_millis().saturating_add(delay_ms);
        let mut inner = self.inner.borrow_mut();
        inner.armed = Some((ticket, deadline));
        inner.arm_count += 1;
    }

    fn cancel(&mut self) {
        let mut inner = self.inner.borrow_mut();
        if inner.armed.take().is_some() {
            inner.cancel_count += 1;
        }
    }
}
