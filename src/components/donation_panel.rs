//! Donation Panel Component
//!
//! Surplus-food donation form. The submit button is disabled and relabelled
//! while the request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::forms::DonationForm;
use crate::orchestrator::use_orchestrator;
use crate::view_model::use_view_model;
use super::fields::{select_field, text_field, textarea_field};

const DONOR_TYPES: &[(&str, &str)] = &[
    ("individual", "Individual"),
    ("restaurant", "Restaurant"),
    ("grocery", "Grocery Store"),
    ("caterer", "Caterer / Event"),
    ("other", "Other"),
];

const FOOD_TYPES: &[(&str, &str)] = &[
    ("cooked", "Cooked Meals"),
    ("produce", "Fresh Produce"),
    ("bakery", "Bakery"),
    ("dairy", "Dairy"),
    ("packaged", "Packaged Food"),
    ("other", "Other"),
];

#[component]
pub fn DonationPanel() -> impl IntoView {
    let vm = use_view_model();
    let orchestrator = use_orchestrator();
    let form = vm.donation_form;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let orchestrator = orchestrator.clone();
        spawn_local(async move {
            orchestrator.submit_donation(&vm).await;
        });
    };

    view! {
        <section class="panel donation-panel">
            <h2>"Donate Food"</h2>
            <form class="donation-form" on:submit=submit>
                {text_field("Your name", "text", form, |f: &DonationForm| &f.donor_name, |f: &mut DonationForm| &mut f.donor_name)}
                {text_field("Contact", "tel", form, |f: &DonationForm| &f.contact, |f: &mut DonationForm| &mut f.contact)}
                <div class="form-row">
                    {select_field("Donor type", DONOR_TYPES, form, |f: &DonationForm| &f.donor_type, |f: &mut DonationForm| &mut f.donor_type)}
                    {select_field("Food type", FOOD_TYPES, form, |f: &DonationForm| &f.food_type, |f: &mut DonationForm| &mut f.food_type)}
                </div>
                {textarea_field("Description", form, |f: &DonationForm| &f.description, |f: &mut DonationForm| &mut f.description)}
                <div class="form-row">
                    {text_field("Servings", "number", form, |f: &DonationForm| &f.quantity, |f: &mut DonationForm| &mut f.quantity)}
                    {text_field("Pickup location", "text", form, |f: &DonationForm| &f.location, |f: &mut DonationForm| &mut f.location)}
                </div>
                {text_field("Best before", "datetime-local", form, |f: &DonationForm| &f.expiry_time, |f: &mut DonationForm| &mut f.expiry_time)}
                <button type="submit" class="primary-btn" disabled=move || vm.donation_busy.get()>
                    {move || vm.donate_label.get()}
                </button>
            </form>
        </section>
    }
}
