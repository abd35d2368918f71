//! Debounce timer backed by `gloo_timers::callback::Timeout`.
//!
//! DESIGN
//! ======
//! A `Timeout` is cancelled when dropped, so rearming is "drop the old handle,
//! keep the new one". When a delay elapses the ticket is published on a
//! signal; the owning `DraftSession` hands it back to the store. Routing the
//! expiry through a signal avoids the store owning a callback into itself.

#[cfg(test)]
#[path = "browser_timer_test.rs"]
mod browser_timer_test;

use std::time::Duration;

use drafts::{Ticket, Timer};
use leptos::prelude::*;

pub struct BrowserTimer {
    fired: RwSignal<Option<Ticket>>,
    #[cfg(feature = "hydrate")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl BrowserTimer {
    pub fn new(fired: RwSignal<Option<Ticket>>) -> Self {
        Self {
            fired,
            #[cfg(feature = "hydrate")]
            pending: None,
        }
    }
}

impl Timer for BrowserTimer {
    fn arm(&mut self, ticket: Ticket, delay: Duration) {
        #[cfg(feature = "hydrate")]
        {
            let fired = self.fired;
            self.pending = Some(gloo_timers::callback::Timeout::new(delay_millis(delay), move || {
                fired.set(Some(ticket));
            }));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.fired, ticket, delay);
        }
    }

    fn cancel(&mut self) {
        // Dropping a `Timeout` clears it.
        #[cfg(feature = "hydrate")]
        {
            self.pending = None;
        }
    }
}

/// Clamp a delay to the `u32` milliseconds `setTimeout` accepts.
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
