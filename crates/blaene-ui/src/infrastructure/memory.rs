//! Headless page: elements, browser and a manual clock kept in memory.
//!
//! Handles are cheap clones sharing one state, so a caller can give a boxed
//! copy to a component and keep another to inspect what the component did.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;

use crate::domain::models::Browser;
use crate::domain::models::BrowserBox;
use crate::domain::models::Element;
use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::Scheduler;
use crate::domain::models::SchedulerBox;
use crate::domain::models::ScrollBehavior;
use crate::domain::models::ScrollBlock;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    return mutex.lock().unwrap_or_else(PoisonError::into_inner);
}

#[derive(Debug, Default)]
struct ElementState {
    data: HashMap<String, String>,
    value: Option<String>,
    initial_value: Option<String>,
    text: String,
    classes: BTreeSet<String>,
    styles: HashMap<String, String>,
    disabled: bool,
    removed: bool,
    resets: usize,
    scrolls: Vec<(ScrollBehavior, ScrollBlock)>,
}

#[derive(Clone, Default)]
pub struct MemoryElement {
    state: Arc<Mutex<ElementState>>,
}

impl MemoryElement {
    pub fn new() -> MemoryElement {
        return MemoryElement::default();
    }

    pub fn with_data(self, key: &str, value: &str) -> MemoryElement {
        lock(&self.state)
            .data
            .insert(key.to_string(), value.to_string());
        return self;
    }

    /// Sets both the current value and the value a form reset returns to.
    pub fn with_value(self, value: &str) -> MemoryElement {
        {
            let mut state = lock(&self.state);
            state.value = Some(value.to_string());
            state.initial_value = Some(value.to_string());
        }
        return self;
    }

    pub fn with_text(self, text: &str) -> MemoryElement {
        lock(&self.state).text = text.to_string();
        return self;
    }

    pub fn with_class(self, class: &str) -> MemoryElement {
        lock(&self.state).classes.insert(class.to_string());
        return self;
    }

    pub fn boxed(&self) -> ElementBox {
        return Box::new(self.clone());
    }

    /// Simulate the user editing the element's value.
    pub fn set_value(&self, value: &str) {
        lock(&self.state).value = Some(value.to_string());
    }

    pub fn current_value(&self) -> Option<String> {
        return lock(&self.state).value.clone();
    }

    pub fn classes(&self) -> Vec<String> {
        return lock(&self.state).classes.iter().cloned().collect();
    }

    pub fn style_of(&self, property: &str) -> Option<String> {
        return lock(&self.state).styles.get(property).cloned();
    }

    pub fn is_disabled(&self) -> bool {
        return lock(&self.state).disabled;
    }

    pub fn is_removed(&self) -> bool {
        return lock(&self.state).removed;
    }

    pub fn reset_count(&self) -> usize {
        return lock(&self.state).resets;
    }

    pub fn scroll_requests(&self) -> Vec<(ScrollBehavior, ScrollBlock)> {
        return lock(&self.state).scrolls.clone();
    }
}

impl Element for MemoryElement {
    fn dataset(&self, key: &str) -> Option<String> {
        return lock(&self.state).data.get(key).cloned();
    }

    fn value(&self) -> Option<String> {
        return lock(&self.state).value.clone();
    }

    fn text(&self) -> String {
        return lock(&self.state).text.clone();
    }

    fn set_text(&mut self, text: &str) {
        lock(&self.state).text = text.to_string();
    }

    fn has_class(&self, class: &str) -> bool {
        return lock(&self.state).classes.contains(class);
    }

    fn add_class(&mut self, class: &str) {
        lock(&self.state).classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        lock(&self.state).classes.remove(class);
    }

    fn style(&self, property: &str) -> Option<String> {
        return self.style_of(property);
    }

    fn set_style(&mut self, property: &str, value: &str) {
        let mut state = lock(&self.state);
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_string(), value.to_string());
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        lock(&self.state).disabled = disabled;
    }

    fn scroll_into_view(&mut self, behavior: ScrollBehavior, block: ScrollBlock) {
        lock(&self.state).scrolls.push((behavior, block));
    }

    fn reset(&mut self) {
        let mut state = lock(&self.state);
        state.value = state.initial_value.clone();
        state.resets += 1;
    }

    fn remove(&mut self) {
        lock(&self.state).removed = true;
    }
}

#[derive(Debug, Default)]
struct BrowserState {
    xr: bool,
    confirm_answer: bool,
    alerts: Vec<String>,
    confirms: Vec<String>,
    styles: Vec<String>,
}

#[derive(Clone, Default)]
pub struct MemoryBrowser {
    state: Arc<Mutex<BrowserState>>,
}

impl MemoryBrowser {
    pub fn new() -> MemoryBrowser {
        return MemoryBrowser::default();
    }

    pub fn with_xr(self, supported: bool) -> MemoryBrowser {
        lock(&self.state).xr = supported;
        return self;
    }

    /// Answer given to every confirmation dialog.
    pub fn answering(self, confirm: bool) -> MemoryBrowser {
        lock(&self.state).confirm_answer = confirm;
        return self;
    }

    pub fn boxed(&self) -> BrowserBox {
        return Box::new(self.clone());
    }

    pub fn alerts(&self) -> Vec<String> {
        return lock(&self.state).alerts.clone();
    }

    pub fn confirms(&self) -> Vec<String> {
        return lock(&self.state).confirms.clone();
    }

    pub fn injected_styles(&self) -> Vec<String> {
        return lock(&self.state).styles.clone();
    }
}

impl Browser for MemoryBrowser {
    fn supports_xr(&self) -> bool {
        return lock(&self.state).xr;
    }

    fn alert(&self, message: &str) {
        lock(&self.state).alerts.push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut state = lock(&self.state);
        state.confirms.push(message.to_string());
        return state.confirm_answer;
    }

    fn inject_style(&self, css: &str) {
        lock(&self.state).styles.push(css.to_string());
    }
}

#[derive(Debug)]
struct PendingEvent {
    due: Duration,
    seq: u64,
    event: Event,
}

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    queue: Vec<PendingEvent>,
}

/// Scheduler on a virtual clock that only moves when told to.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ClockState>>,
}

impl ManualScheduler {
    pub fn new() -> ManualScheduler {
        return ManualScheduler::default();
    }

    pub fn boxed(&self) -> SchedulerBox {
        return Box::new(self.clone());
    }

    pub fn now(&self) -> Duration {
        return lock(&self.state).now;
    }

    /// Events still waiting, with their due times, in delivery order.
    pub fn pending(&self) -> Vec<(Duration, Event)> {
        let state = lock(&self.state);
        let mut pending: Vec<&PendingEvent> = state.queue.iter().collect();
        pending.sort_by_key(|p| (p.due, p.seq));
        return pending.into_iter().map(|p| (p.due, p.event.clone())).collect();
    }

    /// Remove the earliest event due at or before `deadline`, moving the
    /// clock to its due time.
    pub fn pop_due(&self, deadline: Duration) -> Option<Event> {
        let mut state = lock(&self.state);
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)?;

        let pending = state.queue.remove(index);
        state.now = state.now.max(pending.due);
        return Some(pending.event);
    }

    /// Move the clock forward by `duration`, handing every event that falls
    /// due to `handle` in order. Events scheduled by `handle` are delivered
    /// too when they fall inside the window.
    pub fn run_for(&self, duration: Duration, mut handle: impl FnMut(Event)) {
        let deadline = self.now() + duration;
        while let Some(event) = self.pop_due(deadline) {
            handle(event);
        }

        let mut state = lock(&self.state);
        state.now = state.now.max(deadline);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, event: Event) {
        let mut state = lock(&self.state);
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(PendingEvent { due, seq, event });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let element = MemoryElement::new().with_data("price", "500");
        let mut handle = element.boxed();

        handle.add_class("active");
        handle.set_style("display", "none");

        assert_eq!(element.classes(), vec!["active".to_string()]);
        assert_eq!(element.style_of("display").as_deref(), Some("none"));
        assert_eq!(handle.dataset("price").as_deref(), Some("500"));

        handle.set_style("display", "");
        assert_eq!(element.style_of("display"), None);
    }

    #[test]
    fn test_toggle_class_reports_presence() {
        let element = MemoryElement::new();
        let mut handle = element.boxed();

        assert!(handle.toggle_class("active"));
        assert!(!handle.toggle_class("active"));
        assert!(element.classes().is_empty());
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let field = MemoryElement::new().with_value("");
        let mut handle = field.boxed();

        field.set_value("hello");
        handle.reset();

        assert_eq!(field.current_value().as_deref(), Some(""));
        assert_eq!(field.reset_count(), 1);
    }

    #[test]
    fn test_manual_scheduler_delivers_in_order() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(300), Event::ContactResetElapsed);
        scheduler.schedule(Duration::from_millis(100), Event::ViewerTick);
        scheduler.schedule(Duration::from_millis(300), Event::ArButtonClicked);

        let mut delivered = vec![];
        scheduler.run_for(Duration::from_millis(299), |event| delivered.push(event));
        assert_eq!(delivered, vec![Event::ViewerTick]);
        assert_eq!(scheduler.now(), Duration::from_millis(299));

        scheduler.run_for(Duration::from_millis(1), |event| delivered.push(event));
        assert_eq!(
            delivered,
            vec![
                Event::ViewerTick,
                Event::ContactResetElapsed,
                Event::ArButtonClicked
            ]
        );
        assert!(scheduler.pending().is_empty());
    }

    #[test]
    fn test_events_scheduled_while_running_are_delivered() {
        let scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(50), Event::ViewerTick);

        let mut ticks = 0;
        let rescheduler = scheduler.clone();
        scheduler.run_for(Duration::from_millis(200), |_| {
            ticks += 1;
            rescheduler.schedule(Duration::from_millis(50), Event::ViewerTick);
        });

        assert_eq!(ticks, 4);
        assert_eq!(scheduler.pending().len(), 1);
        assert_eq!(scheduler.pending()[0].0, Duration::from_millis(250));
    }

    #[test]
    fn test_browser_records_dialogs() {
        let browser = MemoryBrowser::new().with_xr(true).answering(true);
        let handle = browser.boxed();

        assert!(handle.supports_xr());
        assert!(handle.confirm("sure?"));
        handle.alert("hello");
        handle.inject_style(".a{}");

        assert_eq!(browser.confirms(), vec!["sure?".to_string()]);
        assert_eq!(browser.alerts(), vec!["hello".to_string()]);
        assert_eq!(browser.injected_styles(), vec![".a{}".to_string()]);
    }
}
