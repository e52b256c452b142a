//! Networking modules for the generation backend and the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the generation call, `identity` wraps the hosted identity
//! REST API, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
