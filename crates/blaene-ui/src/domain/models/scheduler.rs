use std::time::Duration;

use super::Event;

/// Delivers an event back to the site after a delay.
///
/// Scheduled events cannot be cancelled. Components that need to drop a
/// pending event carry a generation in it and ignore it when it comes back
/// stale.
pub trait Scheduler: Send {
    fn schedule(&self, delay: Duration, event: Event);
}

pub type SchedulerBox = Box<dyn Scheduler>;
