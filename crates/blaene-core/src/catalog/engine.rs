//! Visibility decisions for the catalog
//!
//! The engine keeps a presence state and a generation counter per entry.
//! Every decision change bumps the generation. A hide is two-phase: the
//! engine first reports [`Transition::BeginHide`] with a [`HideTicket`], and
//! the entry only leaves the layout when that ticket comes back through
//! [`FilterEngine::complete_hide`] while its generation is still current.
//! A show issued in between invalidates the ticket.

use super::ceiling::PriceCeiling;
use super::entry::{CatalogEntry, EntryId};
use super::selection::FilterSelection;

/// Where an entry currently stands in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Shown,
    /// Fade-out running; still occupies layout until its ticket completes.
    FadingOut,
    Hidden,
}

/// Permission to take an entry out of the layout, valid for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideTicket {
    pub entry: EntryId,
    pub generation: u64,
}

/// What the page must do to an entry after a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Put the entry back in the layout and play the fade-in.
    Show(EntryId),
    /// Play the fade-out and complete the ticket once the transition ends.
    BeginHide(HideTicket),
}

#[derive(Debug, Clone)]
struct Slot {
    entry: CatalogEntry,
    presence: Presence,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct FilterEngine {
    slots: Vec<Slot>,
    selection: FilterSelection,
    ceiling: PriceCeiling,
}

impl FilterEngine {
    /// All entries start shown, as rendered.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            slots: entries
                .into_iter()
                .map(|entry| Slot {
                    entry,
                    presence: Presence::Shown,
                    generation: 0,
                })
                .collect(),
            selection: FilterSelection::new(),
            ceiling: PriceCeiling::Unbounded,
        }
    }

    /// Set the starting ceiling without recomputing.
    pub fn with_ceiling(mut self, ceiling: PriceCeiling) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn entry(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.slots.get(id).map(|slot| &slot.entry)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn ceiling(&self) -> PriceCeiling {
        self.ceiling
    }

    pub fn presence(&self, id: EntryId) -> Option<Presence> {
        self.slots.get(id).map(|slot| slot.presence)
    }

    /// Whether the entry still takes up space (shown or fading out).
    pub fn in_layout(&self, id: EntryId) -> bool {
        matches!(
            self.presence(id),
            Some(Presence::Shown) | Some(Presence::FadingOut)
        )
    }

    /// Entries whose current decision is "show", in page order.
    pub fn visible_ids(&self) -> Vec<EntryId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.presence == Presence::Shown)
            .map(|(id, _)| id)
            .collect()
    }

    /// The visibility predicate for the current selection and ceiling.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.selection.admits(&entry.category) && self.ceiling.admits(entry.price)
    }

    /// Flip one category toggle and recompute. Unknown labels are accepted
    /// and simply match nothing.
    pub fn toggle_category(&mut self, label: &str) -> Vec<Transition> {
        let active = self.selection.toggle(label);
        log::debug!("Category '{}' is now {}", label, if active { "active" } else { "inactive" });
        self.recompute()
    }

    /// Set how many active toggles carry no label and recompute. Any such
    /// toggle keeps the selection non-empty without matching a category.
    pub fn set_unlabelled_filters(&mut self, count: usize) -> Vec<Transition> {
        self.selection.set_unlabelled(count);
        log::debug!("{} unlabelled category toggles active", count);
        self.recompute()
    }

    pub fn set_price_ceiling(&mut self, ceiling: PriceCeiling) -> Vec<Transition> {
        self.ceiling = ceiling;
        log::debug!("Price ceiling set to {:?}", ceiling);
        self.recompute()
    }

    /// Re-evaluate every entry against one snapshot of selection and ceiling.
    pub fn recompute(&mut self) -> Vec<Transition> {
        let selection = &self.selection;
        let ceiling = self.ceiling;
        let mut transitions = Vec::new();

        for (id, slot) in self.slots.iter_mut().enumerate() {
            let show = selection.admits(&slot.entry.category) && ceiling.admits(slot.entry.price);

            match (show, slot.presence) {
                (true, Presence::Hidden) | (true, Presence::FadingOut) => {
                    slot.generation += 1;
                    slot.presence = Presence::Shown;
                    transitions.push(Transition::Show(id));
                }
                (false, Presence::Shown) => {
                    slot.generation += 1;
                    slot.presence = Presence::FadingOut;
                    transitions.push(Transition::BeginHide(HideTicket {
                        entry: id,
                        generation: slot.generation,
                    }));
                }
                _ => {}
            }
        }

        log::debug!(
            "Recomputed {} catalog entries: {} transitions",
            self.slots.len(),
            transitions.len()
        );
        transitions
    }

    /// Finish a deferred hide. Returns `true` only when the ticket is still
    /// current, in which case the entry is now out of the layout.
    pub fn complete_hide(&mut self, ticket: HideTicket) -> bool {
        let Some(slot) = self.slots.get_mut(ticket.entry) else {
            return false;
        };

        if slot.presence != Presence::FadingOut || slot.generation != ticket.generation {
            log::debug!(
                "Ignoring stale hide for entry {} (ticket generation {}, current {})",
                ticket.entry,
                ticket.generation,
                slot.generation
            );
            return false;
        }

        slot.presence = Presence::Hidden;
        true
    }
}
