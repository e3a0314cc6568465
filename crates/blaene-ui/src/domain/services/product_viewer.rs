use std::time::Duration;

use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::Scheduler;

#[cfg(test)]
#[path = "product_viewer_test.rs"]
mod tests;

/// Placeholder for the 3D viewer: spins the preview one degree per tick.
pub struct ProductViewer {
    placeholder: ElementBox,
    tick: Duration,
    rotation: u64,
}

impl ProductViewer {
    pub fn new(placeholder: Option<ElementBox>, tick: Duration) -> Option<ProductViewer> {
        return Some(ProductViewer {
            placeholder: placeholder?,
            tick,
            rotation: 0,
        });
    }

    pub fn start(&self, scheduler: &dyn Scheduler) {
        scheduler.schedule(self.tick, Event::ViewerTick);
    }

    pub fn on_tick(&mut self, scheduler: &dyn Scheduler) {
        self.rotation += 1;
        self.placeholder
            .set_style("transform", &format!("rotateY({}deg)", self.rotation));
        scheduler.schedule(self.tick, Event::ViewerTick);
    }

    pub fn rotation(&self) -> u64 {
        return self.rotation;
    }
}
