//! Form Orchestrator
//!
//! Turns form submissions into backend calls and backend answers into UI
//! feedback. Every handler gets the view model by reference.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::api::{FoodApi, HttpApi};
use crate::view_model::{ItemFilter, NotificationKind, SubmitGuard, ViewModel, SUBMITTING_LABEL};

/// Window of the "expiring soon" list
pub const EXPIRING_DAYS: u32 = 7;

/// Orchestrator wired to the real backend
pub type AppOrchestrator = FormOrchestrator<HttpApi>;

/// Get the app orchestrator from context
pub fn use_orchestrator() -> AppOrchestrator {
    expect_context::<AppOrchestrator>()
}

#[derive(Clone)]
pub struct FormOrchestrator<A> {
    api: A,
}

impl<A: FoodApi> FormOrchestrator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Create or update an inventory item from the modal form.
    ///
    /// A non-empty `editing_id` selects update. The form is only cleared
    /// on success.
    pub async fn submit_item(&self, vm: &ViewModel) {
        let payload = match vm.item_form.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("[ITEMS] invalid form: {}", e);
                vm.notify(NotificationKind::Error, e.to_string());
                return;
            }
        };

        let editing_id = vm.editing_id.get_untracked().filter(|id| !id.trim().is_empty());
        let result = match &editing_id {
            Some(id) => self.api.update_item(id, &payload).await,
            None => self.api.create_item(&payload).await,
        };

        match result {
            Ok(()) => {
                let text = if editing_id.is_some() { "Item updated successfully!" } else { "Item added successfully!" };
                vm.notify(NotificationKind::Success, text);
                vm.close_item_modal();
                vm.item_form.set(Default::default());
                vm.editing_id.set(None);
                self.reload_inventory(vm).await;
            }
            Err(e) => {
                log::error!("[ITEMS] save failed: {}", e);
                vm.notify(NotificationKind::Error, "Failed to save item. Please try again.");
            }
        }
    }

    /// Submit the donation form, holding its button disabled meanwhile
    pub async fn submit_donation(&self, vm: &ViewModel) {
        let Some(guard) = SubmitGuard::acquire(vm.donation_busy) else {
            return;
        };
        let _guard = guard.with_label(vm.donate_label, SUBMITTING_LABEL);

        let payload = match vm.donation_form.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("[DONATIONS] invalid form: {}", e);
                vm.notify(NotificationKind::Error, e.to_string());
                return;
            }
        };

        match self.api.create_donation(&payload).await {
            Ok(()) => {
                vm.donation_form.set(Default::default());
                vm.notify(NotificationKind::Success, "Thank you! Your donation has been submitted.");
            }
            Err(e) => {
                log::error!("[DONATIONS] submit failed: {}", e);
                vm.notify(NotificationKind::Error, "Failed to submit donation. Please try again.");
            }
        }
    }

    /// Submit the NGO registration form
    pub async fn submit_ngo(&self, vm: &ViewModel) {
        let Some(_guard) = SubmitGuard::acquire(vm.ngo_busy) else {
            return;
        };

        let payload = match vm.ngo_form.get_untracked().to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("[NGOS] invalid form: {}", e);
                vm.notify(NotificationKind::Error, e.to_string());
                return;
            }
        };

        match self.api.register_ngo(&payload).await {
            Ok(()) => {
                vm.ngo_form.set(Default::default());
                vm.notify(NotificationKind::Success, "NGO registered successfully!");
                self.refresh_ngos(vm).await;
            }
            Err(e) => {
                log::error!("[NGOS] registration failed: {}", e);
                vm.notify(NotificationKind::Error, "Failed to register NGO. Please try again.");
            }
        }
    }

    /// Reload the dashboard counters. Failures only reach the console.
    pub async fn refresh_dashboard(&self, vm: &ViewModel) {
        match self.api.fetch_stats().await {
            Ok(stats) => vm.stats.set(stats),
            Err(e) => log::error!("[DASHBOARD] failed to load stats: {}", e),
        }
    }

    /// Refresh the dashboard every `period` for as long as the future is polled
    pub async fn run_dashboard_refresh<S, F>(&self, vm: &ViewModel, period: Duration, sleep: S)
    where
        S: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        loop {
            self.refresh_dashboard(vm).await;
            sleep(period).await;
        }
    }

    /// Initial loads plus the periodic dashboard refresh, all concurrent so
    /// one stalled request never holds back the others
    pub async fn run_startup<S, F>(&self, vm: &ViewModel, period: Duration, sleep: S)
    where
        S: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        futures::join!(
            self.check_health(vm),
            self.refresh_items(vm),
            self.refresh_expiring(vm, EXPIRING_DAYS),
            self.refresh_ngos(vm),
            self.run_dashboard_refresh(vm, period, sleep),
        );
    }

    /// Reload the inventory table through the active filter. Failures only
    /// reach the console.
    pub async fn refresh_items(&self, vm: &ViewModel) {
        let result = match vm.item_filter.get_untracked() {
            ItemFilter::All => self.api.list_items().await,
            ItemFilter::Search(query) => self.api.search_items(&query).await,
            ItemFilter::Category(category) => self.api.items_by_category(&category).await,
        };
        match result {
            Ok(items) => {
                log::debug!("[ITEMS] loaded {} items", items.len());
                vm.items.set(items);
            }
            Err(e) => log::error!("[ITEMS] failed to load items: {}", e),
        }
    }

    /// Show items matching `query`; a blank query shows everything
    pub async fn search_items(&self, vm: &ViewModel, query: &str) {
        let query = query.trim();
        let filter = if query.is_empty() { ItemFilter::All } else { ItemFilter::Search(query.to_string()) };
        vm.item_filter.set(filter);
        self.refresh_items(vm).await;
    }

    /// Show one category; a blank category shows everything
    pub async fn filter_category(&self, vm: &ViewModel, category: &str) {
        let filter = if category.trim().is_empty() {
            ItemFilter::All
        } else {
            ItemFilter::Category(category.to_string())
        };
        vm.item_filter.set(filter);
        self.refresh_items(vm).await;
    }

    pub async fn refresh_expiring(&self, vm: &ViewModel, days: u32) {
        match self.api.expiring_items(days).await {
            Ok(items) => vm.expiring.set(items),
            Err(e) => log::error!("[ITEMS] failed to load items expiring within {} days: {}", days, e),
        }
    }

    pub async fn refresh_ngos(&self, vm: &ViewModel) {
        match self.api.list_ngos().await {
            Ok(ngos) => {
                log::debug!("[NGOS] loaded {} ngos", ngos.len());
                vm.ngos.set(ngos);
            }
            Err(e) => log::error!("[NGOS] failed to load ngos: {}", e),
        }
    }

    /// Everything an inventory change can affect
    async fn reload_inventory(&self, vm: &ViewModel) {
        self.refresh_items(vm).await;
        self.refresh_dashboard(vm).await;
        self.refresh_expiring(vm, EXPIRING_DAYS).await;
    }

    pub async fn consume_item(&self, vm: &ViewModel, id: &str) {
        match self.api.consume_item(id).await {
            Ok(()) => {
                vm.notify(NotificationKind::Success, "Item marked as consumed!");
                self.reload_inventory(vm).await;
            }
            Err(e) => {
                log::error!("[ITEMS] consume {} failed: {}", id, e);
                vm.notify(NotificationKind::Error, "Failed to update item. Please try again.");
            }
        }
    }

    pub async fn delete_item(&self, vm: &ViewModel, id: &str) {
        match self.api.delete_item(id).await {
            Ok(()) => {
                vm.notify(NotificationKind::Success, "Item deleted.");
                self.reload_inventory(vm).await;
            }
            Err(e) => {
                log::error!("[ITEMS] delete {} failed: {}", id, e);
                vm.notify(NotificationKind::Error, "Failed to delete item. Please try again.");
            }
        }
    }

    /// Update the backend online indicator
    pub async fn check_health(&self, vm: &ViewModel) {
        let online = match self.api.health().await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[HEALTH] backend unreachable: {}", e);
                false
            }
        };
        vm.backend_online.set(Some(online));
    }
}
