//! Networking for the external mail/AI API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints the pages call for generate, send, and
//! history. Draft persistence never touches the network.

pub mod api;
