//! Page behaviors and the ports they drive.
//!
//! `models` holds the events and the traits a host implements, `services`
//! holds one component per page feature.

pub mod models;
pub mod services;
