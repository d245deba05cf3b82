//! Networking modules for the auth collaborator's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls, `types` defines the shared wire schema.
//! The router itself never talks to the network; it only consumes the
//! `Session` values these helpers produce.

pub mod api;
pub mod types;
