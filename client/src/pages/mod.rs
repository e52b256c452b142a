//! Routed screens.

pub mod home;
pub mod signin;
pub mod signup;
pub mod verify_email;

#[cfg(feature = "hydrate")]
mod flow;
