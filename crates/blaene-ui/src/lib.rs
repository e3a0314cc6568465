//! Page behaviors for the Blaene storefront.
//!
//! Every behavior is a component built from the page handles it needs and
//! driven by [`Event`]s. Components touch the page only through the port
//! traits in [`domain::models`], so a browser binding and the in-memory
//! page in [`infrastructure::memory`] are interchangeable.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub use application::{Site, SiteHandles};
pub use domain::models::{
    Browser, BrowserBox, Element, ElementBox, Event, Scheduler, SchedulerBox, ScrollBehavior,
    ScrollBlock,
};
pub use domain::services::{AdminRowHandles, CatalogFilter, CatalogFilterHandles};
pub use infrastructure::scheduler::TokioScheduler;
