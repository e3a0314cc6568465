use std::time::Duration;

use super::styles::FADE_OUT_ANIMATION;
use crate::domain::models::Browser;
use crate::domain::models::ElementBox;
use crate::domain::models::Event;
use crate::domain::models::Scheduler;

#[cfg(test)]
#[path = "admin_panel_test.rs"]
mod tests;

pub const DELETE_CONFIRMATION: &str = "Bu ürünü silmek istediğinize emin misiniz?";

/// One `tr[data-product-id]` row and its action buttons.
pub struct AdminRowHandles {
    pub row: ElementBox,
    pub edit: Option<ElementBox>,
    pub delete: Option<ElementBox>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowState {
    Listed,
    Removing,
    Removed,
}

struct AdminRow {
    handles: AdminRowHandles,
    state: RowState,
}

/// Demo product table. Edits are only logged and deletes only drop the row
/// from the page.
pub struct AdminPanel {
    rows: Vec<AdminRow>,
    removal_delay: Duration,
}

impl AdminPanel {
    pub fn new(rows: Vec<AdminRowHandles>, removal_delay: Duration) -> Option<AdminPanel> {
        if rows.is_empty() {
            return None;
        }

        let rows = rows
            .into_iter()
            .map(|handles| AdminRow {
                handles,
                state: RowState::Listed,
            })
            .collect();
        return Some(AdminPanel {
            rows,
            removal_delay,
        });
    }

    pub fn product_id(&self, index: usize) -> Option<String> {
        return self.rows.get(index)?.handles.row.dataset("productId");
    }

    pub fn is_removed(&self, index: usize) -> bool {
        return self
            .rows
            .get(index)
            .is_some_and(|row| row.state == RowState::Removed);
    }

    pub fn on_edit_clicked(&mut self, index: usize) {
        let Some(row) = self.rows.get(index) else {
            return;
        };
        if row.handles.edit.is_none() || row.state != RowState::Listed {
            return;
        }

        let product_id = row.handles.row.dataset("productId").unwrap_or_default();
        log::info!("Edit product: {}", product_id);
    }

    pub fn on_delete_clicked(
        &mut self,
        index: usize,
        browser: &dyn Browser,
        scheduler: &dyn Scheduler,
    ) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if row.handles.delete.is_none() || row.state != RowState::Listed {
            return;
        }

        if !browser.confirm(DELETE_CONFIRMATION) {
            return;
        }

        log::debug!(
            "Removing product row {}",
            row.handles.row.dataset("productId").unwrap_or_default()
        );
        row.handles.row.set_style("animation", FADE_OUT_ANIMATION);
        row.state = RowState::Removing;
        scheduler.schedule(self.removal_delay, Event::AdminRowRemovalElapsed(index));
    }

    pub fn on_removal_elapsed(&mut self, index: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        if row.state != RowState::Removing {
            return;
        }

        row.handles.row.remove();
        row.state = RowState::Removed;
    }
}
