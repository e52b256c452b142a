//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`signin`, `signup`, `verify`, `compose`,
//! `result`) so each component depends on a small focused model. Every model
//! is a plain struct with pure transitions; pages wrap them in signals.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

pub mod auth;
pub mod compose;
pub mod result;
pub mod screen;
pub mod signin;
pub mod signup;
pub mod verify;
