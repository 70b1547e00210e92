//! Form Field Helpers
//!
//! Labelled inputs bound to one `String` field of a form held in a signal.

use leptos::prelude::*;

/// Labelled `<input>` bound to a form field
pub fn text_field<F>(
    label: &'static str,
    input_type: &'static str,
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                type=input_type
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            />
        </label>
    }
}

/// Labelled `<select>`; `options` are (value, label) pairs
pub fn select_field<F>(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                prop:value=move || form.with(|f| get(f).clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            >
                <option value="">"Select..."</option>
                {options.iter().map(|(value, text)| view! {
                    <option value=*value>{*text}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// Labelled `<textarea>`
pub fn textarea_field<F>(
    label: &'static str,
    form: RwSignal<F>,
    get: fn(&F) -> &String,
    set: fn(&mut F) -> &mut String,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows="3"
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *set(f) = value);
                }
            ></textarea>
        </label>
    }
}
