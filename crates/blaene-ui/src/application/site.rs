use std::collections::HashMap;

use blaene_core::SiteConfig;
use tokio::sync::mpsc;

use crate::domain::models::BrowserBox;
use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::SchedulerBox;
use crate::domain::services::styles::ANIMATION_STYLES;
use crate::domain::services::AdminPanel;
use crate::domain::services::AdminRowHandles;
use crate::domain::services::AnchorScroller;
use crate::domain::services::ArButton;
use crate::domain::services::CatalogFilter;
use crate::domain::services::CatalogFilterHandles;
use crate::domain::services::ContactForm;
use crate::domain::services::MobileMenu;
use crate::domain::services::Navbar;
use crate::domain::services::ProductViewer;
use crate::domain::services::ScrollReveal;

#[cfg(test)]
#[path = "site_test.rs"]
mod tests;

/// Everything the page exposes to the components. Missing handles switch the
/// matching feature off.
#[derive(Default)]
pub struct SiteHandles {
    pub navbar: Option<ElementBox>,
    pub menu_toggle: Option<ElementBox>,
    pub menu: Option<ElementBox>,
    pub sections: Vec<ElementBox>,
    /// Anchor scroll targets keyed by element id.
    pub anchor_targets: HashMap<String, ElementBox>,
    pub catalog: CatalogFilterHandles,
    pub contact_form: Option<ElementBox>,
    pub contact_submit: Option<ElementBox>,
    pub viewer_placeholder: Option<ElementBox>,
    pub ar_button: Option<ElementBox>,
    pub admin_rows: Vec<AdminRowHandles>,
}

/// Owns every component and processes one event at a time.
pub struct Site {
    scheduler: SchedulerBox,
    browser: BrowserBox,
    navbar: Option<Navbar>,
    menu: Option<MobileMenu>,
    reveal: Option<ScrollReveal>,
    anchors: Option<AnchorScroller>,
    catalog: Option<CatalogFilter>,
    contact: Option<ContactForm>,
    viewer: Option<ProductViewer>,
    ar_button: Option<ArButton>,
    admin: Option<AdminPanel>,
}

impl Site {
    pub fn init(
        handles: SiteHandles,
        config: &SiteConfig,
        scheduler: SchedulerBox,
        browser: BrowserBox,
    ) -> Site {
        browser.inject_style(ANIMATION_STYLES);

        let ui = &config.ui;
        let site = Site {
            navbar: Navbar::new(handles.navbar, ui.navbar_scroll_threshold),
            menu: MobileMenu::new(handles.menu_toggle, handles.menu),
            reveal: ScrollReveal::new(handles.sections),
            anchors: AnchorScroller::new(handles.anchor_targets),
            catalog: CatalogFilter::new(handles.catalog, &config.catalog),
            contact: ContactForm::new(
                handles.contact_form,
                handles.contact_submit,
                ui.contact_reset(),
            ),
            viewer: ProductViewer::new(handles.viewer_placeholder, ui.viewer_tick()),
            ar_button: ArButton::new(handles.ar_button),
            admin: AdminPanel::new(handles.admin_rows, ui.row_removal()),
            scheduler,
            browser,
        };

        if let Some(viewer) = &site.viewer {
            viewer.start(site.scheduler.as_ref());
        }

        log::info!(
            "Site initialized: navbar={} menu={} reveal={} anchors={} catalog={} contact={} viewer={} ar={} admin={}",
            site.navbar.is_some(),
            site.menu.is_some(),
            site.reveal.is_some(),
            site.anchors.is_some(),
            site.catalog.is_some(),
            site.contact.is_some(),
            site.viewer.is_some(),
            site.ar_button.is_some(),
            site.admin.is_some()
        );

        return site;
    }

    pub fn catalog(&self) -> Option<&CatalogFilter> {
        return self.catalog.as_ref();
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        return self.menu.as_ref();
    }

    pub fn reveal(&self) -> Option<&ScrollReveal> {
        return self.reveal.as_ref();
    }

    pub fn contact(&self) -> Option<&ContactForm> {
        return self.contact.as_ref();
    }

    pub fn viewer(&self) -> Option<&ProductViewer> {
        return self.viewer.as_ref();
    }

    pub fn admin(&self) -> Option<&AdminPanel> {
        return self.admin.as_ref();
    }

    pub fn handle(&mut self, event: Event) {
        let scheduler = self.scheduler.as_ref();
        let browser = self.browser.as_ref();

        match event {
            Event::Scrolled { offset } => {
                if let Some(navbar) = self.navbar.as_mut() {
                    navbar.on_scroll(offset);
                }
            }
            Event::MenuToggleClicked => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.on_toggle_clicked();
                }
            }
            Event::SectionIntersected(index) => {
                if let Some(reveal) = self.reveal.as_mut() {
                    reveal.on_intersected(index);
                }
            }
            Event::AnchorClicked(href) => {
                if let Some(anchors) = self.anchors.as_mut() {
                    anchors.on_anchor_clicked(&href);
                }
            }
            Event::FilterOptionClicked(index) => {
                if let Some(catalog) = self.catalog.as_mut() {
                    catalog.on_option_clicked(index, scheduler);
                }
            }
            Event::PriceInput(raw) => {
                if let Some(catalog) = self.catalog.as_mut() {
                    catalog.on_price_input(raw, scheduler);
                }
            }
            Event::PriceInputSettled(generation) => {
                if let Some(catalog) = self.catalog.as_mut() {
                    catalog.on_price_settled(generation, scheduler);
                }
            }
            Event::HideElapsed(ticket) => {
                if let Some(catalog) = self.catalog.as_mut() {
                    catalog.on_hide_elapsed(ticket);
                }
            }
            Event::ContactSubmitted(fields) => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_submitted(fields, scheduler);
                }
            }
            Event::ContactResetElapsed => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_reset_elapsed();
                }
            }
            Event::ViewerTick => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.on_tick(scheduler);
                }
            }
            Event::ArButtonClicked => {
                if let Some(ar_button) = self.ar_button.as_ref() {
                    ar_button.on_clicked(browser);
                }
            }
            Event::AdminEditClicked(index) => {
                if let Some(admin) = self.admin.as_mut() {
                    admin.on_edit_clicked(index);
                }
            }
            Event::AdminDeleteClicked(index) => {
                if let Some(admin) = self.admin.as_mut() {
                    admin.on_delete_clicked(index, browser, scheduler);
                }
            }
            Event::AdminRowRemovalElapsed(index) => {
                if let Some(admin) = self.admin.as_mut() {
                    admin.on_removal_elapsed(index);
                }
            }
        }
    }

    /// Handle events until every sender is gone.
    pub async fn run(&mut self, mut events: mpsc::UnboundedReceiver<Event>) {
        while let Some(event) = events.recv().await {
            self.handle(event);
        }

        log::debug!("Site event channel closed");
    }
}
