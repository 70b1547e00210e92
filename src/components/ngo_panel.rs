//! NGO Registration Panel Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::forms::NgoForm;
use crate::models::NgoRecord;
use crate::orchestrator::use_orchestrator;
use crate::view_model::use_view_model;
use super::fields::{text_field, textarea_field};

fn ngo_summary(ngo: &NgoRecord) -> String {
    let mut parts = vec![ngo.address.clone()];
    if let Some(person) = ngo.contact_person.as_deref().filter(|p| !p.is_empty()) {
        parts.push(person.to_string());
    }
    if !ngo.contact.is_empty() {
        parts.push(ngo.contact.clone());
    }
    if let Some(capacity) = ngo.capacity {
        parts.push(format!("{} meals/day", capacity));
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" · ")
}

#[component]
pub fn NgoPanel() -> impl IntoView {
    let vm = use_view_model();
    let orchestrator = use_orchestrator();
    let form = vm.ngo_form;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let orchestrator = orchestrator.clone();
        spawn_local(async move {
            orchestrator.submit_ngo(&vm).await;
        });
    };

    view! {
        <section class="panel ngo-panel">
            <h2>"Register an NGO"</h2>
            <form class="ngo-form" on:submit=submit>
                {text_field("Organization name", "text", form, |f: &NgoForm| &f.name, |f: &mut NgoForm| &mut f.name)}
                {text_field("Contact person", "text", form, |f: &NgoForm| &f.contact_person, |f: &mut NgoForm| &mut f.contact_person)}
                {text_field("Contact", "tel", form, |f: &NgoForm| &f.contact, |f: &mut NgoForm| &mut f.contact)}
                {textarea_field("Address", form, |f: &NgoForm| &f.address, |f: &mut NgoForm| &mut f.address)}
                {text_field("Daily capacity (meals)", "number", form, |f: &NgoForm| &f.capacity, |f: &mut NgoForm| &mut f.capacity)}
                <button type="submit" class="primary-btn" disabled=move || vm.ngo_busy.get()>
                    "Register"
                </button>
            </form>
            <Show when=move || vm.ngos.with(|ngos| !ngos.is_empty())>
                <h3>"Registered NGOs"</h3>
                <ul class="ngo-list">
                    <For
                        each=move || vm.ngos.get()
                        key=|ngo| ngo.id.clone()
                        children=move |ngo| {
                            let summary = ngo_summary(&ngo);
                            view! {
                                <li>
                                    <strong>{ngo.name}</strong>
                                    <span class="ngo-details">{summary}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngo_summary_skips_missing_parts() {
        let mut ngo = NgoRecord {
            id: "3".into(),
            name: "Food For All".into(),
            contact_person: Some("Sam".into()),
            contact: "555-0100".into(),
            address: "4 River Rd".into(),
            capacity: Some(120),
        };
        assert_eq!(ngo_summary(&ngo), "4 River Rd · Sam · 555-0100 · 120 meals/day");

        ngo.contact_person = None;
        ngo.capacity = None;
        ngo.address = String::new();
        assert_eq!(ngo_summary(&ngo), "555-0100");
    }
}
