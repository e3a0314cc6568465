use std::collections::HashMap;

use crate::domain::models::ElementBox;
use crate::domain::models::ScrollBehavior;
use crate::domain::models::ScrollBlock;

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

pub const REVEAL_READY_CLASS: &str = "animate-ready";
pub const REVEAL_IN_CLASS: &str = "animate-in";

/// Intersection ratio at which a section counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so sections reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Fades sections in the first time they scroll into view.
pub struct ScrollReveal {
    sections: Vec<ElementBox>,
    observing: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(mut sections: Vec<ElementBox>) -> Option<ScrollReveal> {
        if sections.is_empty() {
            return None;
        }

        for section in sections.iter_mut() {
            section.add_class(REVEAL_READY_CLASS);
        }

        let observing = vec![true; sections.len()];
        return Some(ScrollReveal {
            sections,
            observing,
        });
    }

    /// Indices the intersection observer should still report.
    pub fn observed(&self) -> Vec<usize> {
        return self
            .observing
            .iter()
            .enumerate()
            .filter(|(_, observing)| **observing)
            .map(|(index, _)| index)
            .collect();
    }

    pub fn on_intersected(&mut self, index: usize) {
        let Some(observing) = self.observing.get_mut(index) else {
            return;
        };
        if !*observing {
            return;
        }

        *observing = false;
        self.sections[index].add_class(REVEAL_IN_CLASS);
    }
}

/// Smooth scrolling for in-page `#id` links.
pub struct AnchorScroller {
    targets: HashMap<String, ElementBox>,
}

impl AnchorScroller {
    /// `targets` are keyed by element id, without the leading `#`.
    pub fn new(targets: HashMap<String, ElementBox>) -> Option<AnchorScroller> {
        if targets.is_empty() {
            return None;
        }

        return Some(AnchorScroller { targets });
    }

    pub fn on_anchor_clicked(&mut self, href: &str) {
        let Some(id) = href.strip_prefix('#') else {
            return;
        };

        match self.targets.get_mut(id) {
            Some(target) => target.scroll_into_view(ScrollBehavior::Smooth, ScrollBlock::Start),
            None => log::debug!("No scroll target for {}", href),
        }
    }
}
