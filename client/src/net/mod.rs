//! Networking modules for the greet REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles request shaping and transport, `types` decodes the JSON
//! bodies the server sends back.

pub mod api;
pub mod types;
