//! Catalog filtering
//!
//! Entries are rendered by the page before any filtering happens. This module
//! never creates or destroys them; it only decides which ones should be in
//! the layout after each change to the category toggles or the price slider.

pub mod ceiling;
pub mod engine;
pub mod entry;
pub mod format;
pub mod selection;

pub use ceiling::*;
pub use engine::*;
pub use entry::*;
pub use format::*;
pub use selection::*;

#[cfg(test)]
mod tests;
