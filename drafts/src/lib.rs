//! Debounced draft persistence for browser forms.
//!
//! A [`store::DraftStore`] watches a fixed set of form fields, coalesces bursts
//! of edits into a single save after a quiet period, writes a snapshot to a
//! key-value backend, and restores that snapshot when the page loads again.
//! Snapshots older than the configured expiry are ignored.
//!
//! The crate is host-agnostic: storage, timers, the wall clock, and the
//! notification surface are all traits so the same store runs against
//! `localStorage` in the browser and against in-memory doubles in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Per-session store and its state machine |
//! | [`draft`] | Snapshot type, on-disk record codec, expiry predicate |
//! | [`schema`] | Form identities and the built-in mailer forms |
//! | [`fields`] | Field-name to accessor bindings |
//! | [`storage`] | Key-value backend trait and in-memory backend |
//! | [`timer`] | Rearmable one-shot timer trait and manual timer |
//! | [`clock`] | Wall clock trait, system and manual clocks |
//! | [`notify`] | Transient message surface |
//! | [`config`] | Durations and their environment overrides |
//! | [`error`] | Error taxonomy |

pub mod clock;
pub mod config;
pub mod draft;
pub mod error;
pub mod fields;
pub mod notify;
pub mod schema;
pub mod storage;
pub mod store;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::DraftConfig;
pub use draft::Draft;
pub use error::{DraftError, StorageError};
pub use fields::{FieldAccess, FieldBinding, FieldBindings};
pub use notify::{NoticeKind, Notifier, RecordingNotifier};
pub use schema::FormSchema;
pub use storage::{DraftStorage, MemoryStorage};
pub use store::{DraftStore, LoadOutcome, SaveOutcome, SessionState};
pub use timer::{ManualTimer, Ticket, Timer};
