//! Dashboard Component
//!
//! Stat counters plus backend status. Refreshing is driven from `App`.

use leptos::prelude::*;

use crate::view_model::use_view_model;

#[component]
fn StatCard(label: &'static str, tone: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", tone)>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let vm = use_view_model();
    let counters = Memo::new(move |_| vm.counter_texts());
    let counter = move |i: usize| Signal::derive(move || counters.with(|c| c[i].clone()));

    let status = move || match vm.backend_online.get() {
        Some(true) => ("status online", "Backend online"),
        Some(false) => ("status offline", "Backend offline"),
        None => ("status", "Connecting..."),
    };

    view! {
        <section class="dashboard">
            <div class="dashboard-header">
                <h2>"Inventory Overview"</h2>
                <span class=move || status().0>{move || status().1}</span>
                <button class="primary-btn" on:click=move |_| vm.open_item_modal()>"+ Add Item"</button>
            </div>
            <div class="stat-grid">
                <StatCard label="Total Items" tone="total" value=counter(0) />
                <StatCard label="Critical" tone="critical" value=counter(1) />
                <StatCard label="Expiring Soon" tone="warning" value=counter(2) />
                <StatCard label="Expired" tone="expired" value=counter(3) />
            </div>
        </section>
    }
}
