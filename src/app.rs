//! Food Rescue Frontend App
//!
//! Root component: owns the view model, wires the orchestrator to the
//! backend, and drives the periodic dashboard refresh.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::components::{Dashboard, DonationPanel, InventoryTable, ItemModal, NgoPanel, NotificationToast};
use crate::config::ApiConfig;
use crate::orchestrator::FormOrchestrator;
use crate::view_model::ViewModel;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("[APP] backend at {}", config.base_url);

    let vm = ViewModel::new();
    let orchestrator = FormOrchestrator::new(HttpApi::new(config.clone()));

    // Provide context to all children
    provide_context(vm);
    provide_context(orchestrator.clone());

    // Initial loads, then keep the counters fresh for the page lifetime
    let refresh_every = Duration::from_millis(config.stats_refresh_ms as u64);
    spawn_local(async move {
        orchestrator.run_startup(&vm, refresh_every, sleep).await;
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Food Rescue"</h1>
                <p class="tagline">"Track perishables, share the surplus."</p>
            </header>

            <main class="main-content">
                <Dashboard />
                <InventoryTable />
                <div class="panel-row">
                    <DonationPanel />
                    <NgoPanel />
                </div>
            </main>

            <ItemModal />
            <NotificationToast lifetime=config.notification_lifetime() />
        </div>
    }
}
