//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only cross-page state lives here. Form values stay page-local signals and
//! are persisted through the draft store, not through context.

pub mod toast;
