//! Port implementations.
//!
//! `scheduler` delivers deferred events on the tokio runtime. `memory` is a
//! headless page used by tests and for driving the site without a browser.

pub mod memory;
pub mod scheduler;
