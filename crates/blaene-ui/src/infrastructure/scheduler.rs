use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;
use crate::domain::models::Scheduler;

/// Sleeps on the tokio runtime and feeds the event back into the site's
/// channel. Must be used from within a runtime.
#[derive(Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<Event>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> TokioScheduler {
        return TokioScheduler { tx };
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, event: Event) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            time::sleep(delay).await;
            if tx.send(event).is_err() {
                log::debug!("Site event loop closed before a deferred event was delivered");
            }
        });
    }
}
