use blaene_core::HideTicket;

/// Everything the site reacts to: page input and deferred work coming back
/// from the scheduler. Indices refer to the order of the handles given to
/// `Site::init`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Scrolled { offset: f64 },
    MenuToggleClicked,
    SectionIntersected(usize),
    /// Raw `href` of the clicked in-page link.
    AnchorClicked(String),
    FilterOptionClicked(usize),
    /// Raw slider value.
    PriceInput(String),
    /// Debounce generation of the slider input that settled.
    PriceInputSettled(u64),
    HideElapsed(HideTicket),
    ContactSubmitted(Vec<(String, String)>),
    ContactResetElapsed,
    ViewerTick,
    ArButtonClicked,
    AdminEditClicked(usize),
    AdminDeleteClicked(usize),
    AdminRowRemovalElapsed(usize),
}
