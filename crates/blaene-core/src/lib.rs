//! Core library for the Blaene storefront.
//!
//! The storefront is mostly page wiring. The one piece of real logic is the
//! catalog filter: a set of already rendered entries, each tagged with a
//! category and a price, is shown or hidden according to the active category
//! toggles and the price slider.
//!
//! - **Catalog filtering**: [`catalog::FilterEngine`] decides visibility and
//!   hands out hide tickets so that a deferred hide can be superseded
//! - **Price handling**: lenient parsing of page attributes and locale-aware
//!   price labels
//! - **Configuration**: YAML site configuration with environment overrides

pub mod catalog;
pub mod config;
pub mod errors;

pub use catalog::{
    parse_category, parse_ceiling, parse_leading_integer, parse_price, CatalogEntry, EntryId,
    FilterEngine, FilterSelection, HideTicket, Presence, PriceCeiling, PriceFormat, Transition,
};
pub use config::*;
pub use errors::SiteError;
