use std::time::Duration;

use blaene_core::parse_ceiling;
use blaene_core::parse_leading_integer;
use blaene_core::CatalogEntry;
use blaene_core::CatalogSettings;
use blaene_core::FilterEngine;
use blaene_core::HideTicket;
use blaene_core::PriceCeiling;
use blaene_core::PriceFormat;
use blaene_core::Transition;

use super::styles::FADE_IN_ANIMATION;
use super::styles::FADE_OUT_ANIMATION;
use super::Debouncer;
use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::Scheduler;

#[cfg(test)]
#[path = "catalog_filter_test.rs"]
mod tests;

pub const ACTIVE_CLASS: &str = "active";

#[derive(Default)]
pub struct CatalogFilterHandles {
    /// Product cards carrying `data-category` and `data-price`.
    pub cards: Vec<ElementBox>,
    /// Toggle controls carrying `data-filter`.
    pub options: Vec<ElementBox>,
    pub slider: Option<ElementBox>,
    /// Text showing the slider value as a whole-unit label.
    pub max_label: Option<ElementBox>,
    /// Text showing the slider value as a full currency amount.
    pub value_label: Option<ElementBox>,
}

/// Category toggles and price slider over the rendered product cards.
pub struct CatalogFilter {
    engine: FilterEngine,
    cards: Vec<ElementBox>,
    options: Vec<ElementBox>,
    slider: Option<ElementBox>,
    max_label: Option<ElementBox>,
    value_label: Option<ElementBox>,
    price_format: PriceFormat,
    hide_delay: Duration,
    debouncer: Debouncer<String>,
}

impl CatalogFilter {
    pub fn new(handles: CatalogFilterHandles, settings: &CatalogSettings) -> Option<CatalogFilter> {
        if handles.cards.is_empty() && handles.options.is_empty() && handles.slider.is_none() {
            return None;
        }

        let entries = handles
            .cards
            .iter()
            .map(|card| {
                CatalogEntry::from_attributes(
                    card.dataset("category").as_deref(),
                    card.dataset("price").as_deref(),
                )
            })
            .collect();

        let ceiling = match &handles.slider {
            Some(slider) => PriceCeiling::from_slider(slider.value().as_deref()),
            None => PriceCeiling::Unbounded,
        };

        log::debug!(
            "Catalog filter over {} cards and {} options, ceiling {:?}",
            handles.cards.len(),
            handles.options.len(),
            ceiling
        );

        return Some(CatalogFilter {
            engine: FilterEngine::new(entries).with_ceiling(ceiling),
            cards: handles.cards,
            options: handles.options,
            slider: handles.slider,
            max_label: handles.max_label,
            value_label: handles.value_label,
            price_format: settings.price_format(),
            hide_delay: settings.hide_transition(),
            debouncer: Debouncer::new(settings.slider_debounce()),
        });
    }

    pub fn engine(&self) -> &FilterEngine {
        return &self.engine;
    }

    pub fn on_option_clicked(&mut self, index: usize, scheduler: &dyn Scheduler) {
        let Some(option) = self.options.get_mut(index) else {
            log::debug!("Ignoring click on unknown filter option {}", index);
            return;
        };

        option.toggle_class(ACTIVE_CLASS);
        let Some(label) = option.dataset("filter") else {
            self.sync_unlabelled(scheduler);
            return;
        };

        // Several options may share a label; the label stays selected while
        // any of them is active.
        let wanted = self.options.iter().any(|option| {
            option.has_class(ACTIVE_CLASS) && option.dataset("filter").as_deref() == Some(label.as_str())
        });
        if wanted == self.engine.selection().contains(&label) {
            return;
        }

        let transitions = self.engine.toggle_category(&label);
        self.apply(transitions, scheduler);
    }

    pub fn on_price_input(&mut self, raw: String, scheduler: &dyn Scheduler) {
        if let Some(label) = self.max_label.as_mut() {
            label.set_text(&self.price_format.slider_label(&raw));
        }
        if let Some(label) = self.value_label.as_mut() {
            let amount = parse_leading_integer(&raw).map_or(f64::NAN, |amount| amount as f64);
            label.set_text(&self.price_format.currency(amount));
        }

        if let Some(raw) = self.debouncer.push(raw, scheduler, Event::PriceInputSettled) {
            self.apply_ceiling(&raw, scheduler);
        }
    }

    pub fn on_price_settled(&mut self, generation: u64, scheduler: &dyn Scheduler) {
        if let Some(raw) = self.debouncer.settle(generation) {
            self.apply_ceiling(&raw, scheduler);
        }
    }

    pub fn on_hide_elapsed(&mut self, ticket: HideTicket) {
        if !self.engine.complete_hide(ticket) {
            return;
        }

        if let Some(card) = self.cards.get_mut(ticket.entry) {
            card.set_style("display", "none");
        }
    }

    /// Current raw slider value, if a slider is on the page.
    pub fn slider_value(&self) -> Option<String> {
        return self.slider.as_ref().and_then(|slider| slider.value());
    }

    /// Active options without `data-filter` filter on a label nothing has.
    fn sync_unlabelled(&mut self, scheduler: &dyn Scheduler) {
        let active = self
            .options
            .iter()
            .filter(|option| option.has_class(ACTIVE_CLASS) && option.dataset("filter").is_none())
            .count();
        if active == self.engine.selection().unlabelled() {
            return;
        }

        let transitions = self.engine.set_unlabelled_filters(active);
        self.apply(transitions, scheduler);
    }

    fn apply_ceiling(&mut self, raw: &str, scheduler: &dyn Scheduler) {
        let transitions = self.engine.set_price_ceiling(parse_ceiling(raw));
        self.apply(transitions, scheduler);
    }

    fn apply(&mut self, transitions: Vec<Transition>, scheduler: &dyn Scheduler) {
        for transition in transitions {
            match transition {
                Transition::Show(id) => {
                    if let Some(card) = self.cards.get_mut(id) {
                        card.set_style("display", "block");
                        card.set_style("animation", FADE_IN_ANIMATION);
                    }
                }
                Transition::BeginHide(ticket) => {
                    if let Some(card) = self.cards.get_mut(ticket.entry) {
                        card.set_style("animation", FADE_OUT_ANIMATION);
                    }
                    scheduler.schedule(self.hide_delay, Event::HideElapsed(ticket));
                }
            }
        }
    }
}
