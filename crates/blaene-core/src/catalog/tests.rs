//! Behavioral tests for the filter engine

use super::*;

fn jewelry() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("ring", 500),
        CatalogEntry::new("necklace", 1500),
        CatalogEntry::new("ring", 2000),
        CatalogEntry::new("earring", 750),
        CatalogEntry::new("", 0),
    ]
}

fn visible_entries(engine: &FilterEngine) -> Vec<CatalogEntry> {
    engine
        .visible_ids()
        .into_iter()
        .filter_map(|id| engine.entry(id).cloned())
        .collect()
}

fn finish_hides(engine: &mut FilterEngine, transitions: &[Transition]) {
    for transition in transitions {
        if let Transition::BeginHide(ticket) = transition {
            assert!(engine.complete_hide(*ticket));
        }
    }
}

#[test]
fn test_concrete_ring_example() {
    let mut engine = FilterEngine::new(vec![
        CatalogEntry::new("ring", 500),
        CatalogEntry::new("necklace", 1500),
        CatalogEntry::new("ring", 2000),
    ]);

    engine.toggle_category("ring");
    engine.set_price_ceiling(PriceCeiling::AtMost(1000));

    assert_eq!(visible_entries(&engine), vec![CatalogEntry::new("ring", 500)]);
}

#[test]
fn test_recompute_is_idempotent() {
    let mut engine = FilterEngine::new(jewelry());
    engine.toggle_category("ring");
    engine.set_price_ceiling(PriceCeiling::AtMost(1000));

    let first = engine.visible_ids();
    let again = engine.recompute();
    let second = engine.visible_ids();

    assert!(again.is_empty(), "no state change must produce no transitions");
    assert_eq!(first, second);
}

#[test]
fn test_raising_ceiling_never_hides() {
    let mut engine = FilterEngine::new(jewelry());
    engine.toggle_category("ring");
    engine.toggle_category("earring");

    let mut previous: Vec<EntryId> = Vec::new();
    for limit in [0, 400, 500, 749, 750, 1999, 2000, 10_000] {
        let transitions = engine.set_price_ceiling(PriceCeiling::AtMost(limit));
        let hides = transitions
            .iter()
            .filter(|t| matches!(t, Transition::BeginHide(_)))
            .count();
        if limit > 0 {
            assert_eq!(hides, 0, "raising the ceiling to {} hid an entry", limit);
        }

        let current = engine.visible_ids();
        for id in &previous {
            assert!(current.contains(id), "entry {} disappeared at {}", id, limit);
        }
        previous = current;
    }
}

#[test]
fn test_empty_selection_unbounded_shows_all() {
    let mut engine = FilterEngine::new(jewelry());

    let on = engine.toggle_category("necklace");
    finish_hides(&mut engine, &on);
    engine.toggle_category("necklace");
    engine.set_price_ceiling(PriceCeiling::Unbounded);

    assert!(engine.selection().is_empty());
    assert_eq!(engine.visible_ids(), (0..engine.len()).collect::<Vec<_>>());
}

#[test]
fn test_single_category_partitions_entries() {
    let mut engine = FilterEngine::new(jewelry());
    engine.toggle_category("ring");

    let visible = visible_entries(&engine);
    assert_eq!(
        visible,
        vec![CatalogEntry::new("ring", 500), CatalogEntry::new("ring", 2000)]
    );
    assert!(visible.iter().all(|entry| entry.category == "ring"));
}

#[test]
fn test_unknown_label_matches_nothing() {
    let mut engine = FilterEngine::new(jewelry());
    let transitions = engine.toggle_category("watch");

    assert!(engine.visible_ids().is_empty());
    assert_eq!(transitions.len(), engine.len());
}

#[test]
fn test_unlabelled_filter_hides_everything() {
    let mut engine = FilterEngine::new(jewelry());
    let transitions = engine.set_unlabelled_filters(1);

    assert!(engine.visible_ids().is_empty());
    assert_eq!(transitions.len(), engine.len());

    finish_hides(&mut engine, &transitions);
    engine.toggle_category("necklace");
    assert_eq!(visible_entries(&engine), vec![CatalogEntry::new("necklace", 1500)]);

    engine.set_unlabelled_filters(0);
    engine.toggle_category("necklace");
    assert_eq!(engine.visible_ids(), (0..engine.len()).collect::<Vec<_>>());
}

#[test]
fn test_hide_is_deferred_until_ticket_completes() {
    let mut engine = FilterEngine::new(jewelry());
    let transitions = engine.toggle_category("necklace");

    let ticket = match transitions[0] {
        Transition::BeginHide(ticket) => ticket,
        other => panic!("expected a hide, got {:?}", other),
    };
    assert_eq!(ticket.entry, 0);
    assert_eq!(engine.presence(0), Some(Presence::FadingOut));
    assert!(engine.in_layout(0));

    assert!(engine.complete_hide(ticket));
    assert_eq!(engine.presence(0), Some(Presence::Hidden));
    assert!(!engine.in_layout(0));
}

#[test]
fn test_show_supersedes_pending_hide() {
    let mut engine = FilterEngine::new(jewelry());

    let hide = engine.toggle_category("necklace");
    let ticket = match hide[0] {
        Transition::BeginHide(ticket) => ticket,
        other => panic!("expected a hide, got {:?}", other),
    };

    let show = engine.toggle_category("necklace");
    assert!(show.contains(&Transition::Show(0)));

    assert!(!engine.complete_hide(ticket), "stale ticket must be rejected");
    assert_eq!(engine.presence(0), Some(Presence::Shown));
    assert!(engine.in_layout(0));
}

#[test]
fn test_fading_entry_is_not_restarted() {
    let mut engine = FilterEngine::new(jewelry());
    let first = engine.toggle_category("necklace");
    let second = engine.set_price_ceiling(PriceCeiling::AtMost(100));

    assert!(first.iter().any(|t| matches!(t, Transition::BeginHide(h) if h.entry == 0)));
    assert!(!second.iter().any(|t| matches!(t, Transition::BeginHide(h) if h.entry == 0)));

    if let Some(Transition::BeginHide(ticket)) = first.first() {
        assert!(engine.complete_hide(*ticket));
    }
}

#[test]
fn test_ticket_for_unknown_entry_is_ignored() {
    let mut engine = FilterEngine::new(jewelry());
    assert!(!engine.complete_hide(HideTicket {
        entry: 42,
        generation: 1
    }));
}

#[test]
fn test_malformed_entries_coerce() {
    let mut engine = FilterEngine::new(vec![
        CatalogEntry::from_attributes(None, Some("n/a")),
        CatalogEntry::from_attributes(Some("ring"), Some("900")),
    ]);

    engine.set_price_ceiling(PriceCeiling::AtMost(0));
    assert_eq!(engine.visible_ids(), vec![0]);

    engine.set_price_ceiling(PriceCeiling::Unbounded);
    engine.toggle_category("ring");
    assert_eq!(engine.visible_ids(), vec![1]);
}
