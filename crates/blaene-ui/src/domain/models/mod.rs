mod browser;
mod element;
mod event;
mod scheduler;

pub use browser::*;
pub use element::*;
pub use event::*;
pub use scheduler::*;
