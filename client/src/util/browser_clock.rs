//! Wall clock for the draft store.
//!
//! `std::time::SystemTime` panics on `wasm32-unknown-unknown`, so the client
//! reads `Date.now()` in the browser and the system clock during SSR.

use drafts::Clock;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            drafts::SystemClock.now_millis()
        }
    }
}
