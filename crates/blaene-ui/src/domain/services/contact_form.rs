use std::time::Duration;

use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::Scheduler;

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod tests;

pub const SENT_LABEL: &str = "Gönderildi ✓";
pub const SENT_BACKGROUND: &str = "#00ff88";

/// Demo contact form: acknowledges a submit on the button, then resets.
/// Nothing is sent anywhere.
pub struct ContactForm {
    form: ElementBox,
    submit: ElementBox,
    reset_delay: Duration,
    original_label: Option<String>,
}

impl ContactForm {
    pub fn new(
        form: Option<ElementBox>,
        submit: Option<ElementBox>,
        reset_delay: Duration,
    ) -> Option<ContactForm> {
        return Some(ContactForm {
            form: form?,
            submit: submit?,
            reset_delay,
            original_label: None,
        });
    }

    pub fn is_acknowledging(&self) -> bool {
        return self.original_label.is_some();
    }

    pub fn on_submitted(&mut self, fields: Vec<(String, String)>, scheduler: &dyn Scheduler) {
        if self.is_acknowledging() {
            log::debug!("Contact form submitted again while acknowledging, ignored");
            return;
        }

        log::debug!("Contact form submitted: {:?}", fields);

        self.original_label = Some(self.submit.text());
        self.submit.set_text(SENT_LABEL);
        self.submit.set_style("background", SENT_BACKGROUND);
        self.submit.set_disabled(true);

        scheduler.schedule(self.reset_delay, Event::ContactResetElapsed);
    }

    pub fn on_reset_elapsed(&mut self) {
        let Some(label) = self.original_label.take() else {
            return;
        };

        self.submit.set_text(&label);
        self.submit.set_style("background", "");
        self.submit.set_disabled(false);
        self.form.reset();
    }
}
