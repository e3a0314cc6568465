use std::time::Duration;

use super::ContactForm;
use crate::domain::models::Element;
use crate::domain::models::Event;
use crate::infrastructure::memory::ManualScheduler;
use crate::infrastructure::memory::MemoryElement;

fn fields() -> Vec<(String, String)> {
    return vec![
        ("name".to_string(), "Ayşe".to_string()),
        ("email".to_string(), "ayse@example.com".to_string()),
    ];
}

#[test]
fn it_acknowledges_then_resets() {
    let form = MemoryElement::new().with_value("");
    let button = MemoryElement::new().with_text("Gönder");
    let scheduler = ManualScheduler::new();
    let mut contact = ContactForm::new(
        Some(form.boxed()),
        Some(button.boxed()),
        Duration::from_millis(3000),
    )
    .unwrap();

    form.set_value("merhaba");
    contact.on_submitted(fields(), &scheduler);

    assert_eq!(button.text(), "Gönderildi ✓");
    assert_eq!(button.style_of("background").as_deref(), Some("#00ff88"));
    assert!(button.is_disabled());

    scheduler.run_for(Duration::from_millis(2999), |_| panic!("reset too early"));

    scheduler.run_for(Duration::from_millis(1), |event| {
        assert_eq!(event, Event::ContactResetElapsed);
        contact.on_reset_elapsed();
    });

    assert_eq!(button.text(), "Gönder");
    assert_eq!(button.style_of("background"), None);
    assert!(!button.is_disabled());
    assert_eq!(form.reset_count(), 1);
    assert_eq!(form.current_value().as_deref(), Some(""));
}

#[test]
fn it_ignores_submits_while_acknowledging() {
    let form = MemoryElement::new();
    let button = MemoryElement::new().with_text("Gönder");
    let scheduler = ManualScheduler::new();
    let mut contact = ContactForm::new(
        Some(form.boxed()),
        Some(button.boxed()),
        Duration::from_millis(3000),
    )
    .unwrap();

    contact.on_submitted(fields(), &scheduler);
    contact.on_submitted(fields(), &scheduler);
    assert_eq!(scheduler.pending().len(), 1);

    scheduler.run_for(Duration::from_millis(3000), |_| contact.on_reset_elapsed());
    assert_eq!(button.text(), "Gönder");
    assert!(!contact.is_acknowledging());
}

#[test]
fn it_needs_form_and_button() {
    let delay = Duration::from_millis(3000);
    assert!(ContactForm::new(None, Some(MemoryElement::new().boxed()), delay).is_none());
    assert!(ContactForm::new(Some(MemoryElement::new().boxed()), None, delay).is_none());
}
