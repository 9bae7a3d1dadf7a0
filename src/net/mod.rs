//! Networking modules for the documentation server.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls a generated page makes (search queries, the
//! site manifest) and `types` defines the shared wire schema.

pub mod api;
pub mod types;
