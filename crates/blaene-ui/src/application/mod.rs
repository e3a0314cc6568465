//! Top-level composition of the page components.

mod site;

pub use site::*;
