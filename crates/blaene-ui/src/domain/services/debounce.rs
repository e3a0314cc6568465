use std::time::Duration;

use crate::domain::models::Event;
use crate::domain::models::Scheduler;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;

/// Keeps only the last value pushed within `wait`.
///
/// Every push bumps a generation and schedules a settle event carrying it.
/// Only the settle event for the latest generation yields the value, earlier
/// ones come back stale and are dropped.
pub struct Debouncer<T> {
    wait: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Debouncer<T> {
        return Debouncer {
            wait,
            generation: 0,
            pending: None,
        };
    }

    pub fn is_immediate(&self) -> bool {
        return self.wait.is_zero();
    }

    /// With a zero wait the value is handed straight back. Otherwise it is
    /// held and `settle_event(generation)` is scheduled.
    pub fn push(
        &mut self,
        value: T,
        scheduler: &dyn Scheduler,
        settle_event: impl FnOnce(u64) -> Event,
    ) -> Option<T> {
        if self.is_immediate() {
            return Some(value);
        }

        self.generation += 1;
        self.pending = Some(value);
        scheduler.schedule(self.wait, settle_event(self.generation));
        return None;
    }

    pub fn settle(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            log::debug!(
                "Dropping superseded debounce generation {} (current {})",
                generation,
                self.generation
            );
            return None;
        }

        return self.pending.take();
    }
}
