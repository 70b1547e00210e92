//! Notification Toast Component
//!
//! Shows the view model's current notification and clears it after the
//! configured lifetime.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::view_model::use_view_model;

#[component]
pub fn NotificationToast(lifetime: Duration) -> impl IntoView {
    let vm = use_view_model();

    // One timer per banner; dismiss() ignores timers of replaced banners
    Effect::new(move |_| {
        if let Some(id) = vm.notification.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                vm.schedule_dismiss(id, lifetime, sleep).await;
            });
        }
    });

    view! {
        {move || vm.notification.get().map(|n| view! {
            <div class=n.kind.css_class() role="status" on:click=move |_| vm.dismiss(n.id)>
                {n.text}
            </div>
        })}
    }
}
