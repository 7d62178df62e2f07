//! Networking modules for the remote registration endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the query-parameter-routed HTTP calls and `types` defines
//! the wire schema. The endpoint owns all storage, counting, and winner
//! selection; this layer only shuttles JSON.

pub mod api;
pub mod types;
