//! Item Modal Component
//!
//! Add/edit dialog for inventory items. The same form serves both modes;
//! the view model's `editing_id` decides which call goes out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::forms::ItemForm;
use crate::orchestrator::use_orchestrator;
use crate::view_model::use_view_model;
use super::fields::{select_field, text_field};

/// Item category options
pub(super) const CATEGORIES: &[(&str, &str)] = &[
    ("Dairy", "Dairy"),
    ("Meat", "Meat"),
    ("Vegetables", "Vegetables"),
    ("Fruits", "Fruits"),
    ("Bakery", "Bakery"),
    ("Grains", "Grains"),
    ("Beverages", "Beverages"),
    ("Other", "Other"),
];

#[component]
pub fn ItemModal() -> impl IntoView {
    let vm = use_view_model();
    let orchestrator = use_orchestrator();
    let form = vm.item_form;

    // No in-flight guard here: repeated clicks each send a request
    let save_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let orchestrator = orchestrator.clone();
        spawn_local(async move {
            orchestrator.submit_item(&vm).await;
        });
    };

    view! {
        <Show when=move || vm.item_modal_open.get()>
            <div class="modal-backdrop" on:click=move |_| vm.close_item_modal()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || vm.item_modal_title.get()}</h2>
                        <button class="close-btn" on:click=move |_| vm.close_item_modal()>"×"</button>
                    </div>
                    <form class="item-form" on:submit=save_item.clone()>
                        {text_field("Name", "text", form, |f: &ItemForm| &f.name, |f: &mut ItemForm| &mut f.name)}
                        {select_field("Category", CATEGORIES, form, |f: &ItemForm| &f.category, |f: &mut ItemForm| &mut f.category)}
                        {text_field("Location", "text", form, |f: &ItemForm| &f.location, |f: &mut ItemForm| &mut f.location)}
                        <div class="form-row">
                            {text_field("Quantity", "number", form, |f: &ItemForm| &f.quantity, |f: &mut ItemForm| &mut f.quantity)}
                            {text_field("Unit", "text", form, |f: &ItemForm| &f.unit, |f: &mut ItemForm| &mut f.unit)}
                        </div>
                        {text_field("Expiry date", "date", form, |f: &ItemForm| &f.expiry_date, |f: &mut ItemForm| &mut f.expiry_date)}
                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| vm.close_item_modal()>"Cancel"</button>
                            <button type="submit" class="primary-btn">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
