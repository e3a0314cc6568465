//! Page components.
//!
//! Each component owns the handles it was built from and reacts to the
//! events routed to it by [`crate::application::Site`]. Constructors return
//! `None` when a required handle is missing so absent page sections no-op.

mod admin_panel;
mod ar_button;
mod catalog_filter;
mod contact_form;
mod debounce;
mod navigation;
mod product_viewer;
mod scroll;
pub mod styles;

pub use admin_panel::*;
pub use ar_button::*;
pub use catalog_filter::*;
pub use contact_form::*;
pub use debounce::*;
pub use navigation::*;
pub use product_viewer::*;
pub use scroll::*;
