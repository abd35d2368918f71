//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clock, toasts) from page logic so the draft store stays host-agnostic.

pub mod browser_clock;
pub mod browser_timer;
pub mod draft_session;
pub mod local_storage;
pub mod resend;
pub mod toast_notifier;
pub mod validate;
