//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each backend endpoint in one async function. Wire types live in
//! the shared `bank-types` crate.

pub mod api;
