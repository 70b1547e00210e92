//! Inventory Table Component
//!
//! Stored items with their expiry status and per-row actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::ItemRecord;
use crate::orchestrator::use_orchestrator;
use crate::view_model::{use_view_model, ItemFilter};
use super::item_modal::CATEGORIES;
use super::DeleteConfirmButton;

fn expiry_text(record: &ItemRecord) -> String {
    match record.days_until_expiry {
        d if d < 0 => format!("Expired {} day(s) ago", -d),
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("{} days left", d),
    }
}

#[component]
fn InventoryRow(record: ItemRecord) -> impl IntoView {
    let vm = use_view_model();
    let orchestrator = use_orchestrator();

    let id = record.id.clone();
    let consume = {
        let orchestrator = orchestrator.clone();
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let orchestrator = orchestrator.clone();
            let id = id.clone();
            spawn_local(async move {
                orchestrator.consume_item(&vm, &id).await;
            });
        }
    };
    let delete = Callback::new(move |_: ()| {
        let orchestrator = orchestrator.clone();
        let id = id.clone();
        spawn_local(async move {
            orchestrator.delete_item(&vm, &id).await;
        });
    });

    let row_class = format!("item-row {}", record.status.as_str());
    let quantity = format!("{} {}", record.quantity, record.unit);
    let expiry = expiry_text(&record);
    let consumed = record.consumed;
    let edit_record = record.clone();

    view! {
        <tr class=row_class>
            <td>{record.name}</td>
            <td>{record.category}</td>
            <td>{quantity}</td>
            <td>{record.location}</td>
            <td class="expiry">{expiry}</td>
            <td class="row-actions">
                <button class="edit-btn" on:click=move |_| vm.open_edit_modal(&edit_record)>"Edit"</button>
                <Show when=move || !consumed>
                    <button class="consume-btn" on:click=consume.clone()>"Consumed"</button>
                </Show>
                <DeleteConfirmButton on_confirm=delete />
            </td>
        </tr>
    }
}

/// Search box, category select and clear button above the table
#[component]
fn InventoryFilters() -> impl IntoView {
    let vm = use_view_model();
    let orchestrator = use_orchestrator();
    let query = RwSignal::new(String::new());

    let search = {
        let orchestrator = orchestrator.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let orchestrator = orchestrator.clone();
            let text = query.get_untracked();
            spawn_local(async move {
                orchestrator.search_items(&vm, &text).await;
            });
        }
    };
    let pick_category = {
        let orchestrator = orchestrator.clone();
        move |ev: web_sys::Event| {
            let orchestrator = orchestrator.clone();
            let category = event_target_value(&ev);
            query.set(String::new());
            spawn_local(async move {
                orchestrator.filter_category(&vm, &category).await;
            });
        }
    };
    let clear = move |_: web_sys::MouseEvent| {
        let orchestrator = orchestrator.clone();
        query.set(String::new());
        spawn_local(async move {
            orchestrator.search_items(&vm, "").await;
        });
    };

    let selected_category = move || match vm.item_filter.get() {
        ItemFilter::Category(category) => category,
        _ => String::new(),
    };

    view! {
        <form class="inventory-filters" on:submit=search>
            <input
                type="search"
                placeholder="Search name, category or location"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
            <select prop:value=selected_category on:change=pick_category>
                <option value="">"All categories"</option>
                {CATEGORIES.iter().map(|(value, text)| view! {
                    <option value=*value>{*text}</option>
                }).collect_view()}
            </select>
            <Show when=move || vm.item_filter.with(|f| *f != ItemFilter::All)>
                <button type="button" class="clear-btn" on:click=clear.clone()>"Clear"</button>
            </Show>
        </form>
    }
}

/// Items expiring soon, soonest first
#[component]
fn ExpiringList() -> impl IntoView {
    let vm = use_view_model();

    view! {
        <Show when=move || vm.expiring.with(|items| !items.is_empty())>
            <div class="expiring-list">
                <h3>"Expiring soon"</h3>
                <ul>
                    <For
                        each=move || vm.expiring.get()
                        key=|record| (record.id.clone(), record.days_until_expiry)
                        children=move |record| {
                            let class = format!("expiring-item {}", record.status.as_str());
                            let expiry = expiry_text(&record);
                            view! { <li class=class>{record.name}" · "{expiry}</li> }
                        }
                    />
                </ul>
            </div>
        </Show>
    }
}

#[component]
pub fn InventoryTable() -> impl IntoView {
    let vm = use_view_model();

    view! {
        <section class="panel inventory-panel">
            <h2>"Inventory"</h2>
            <ExpiringList />
            <InventoryFilters />
            <Show
                when=move || vm.items.with(|items| !items.is_empty())
                fallback=|| view! { <p class="empty">"No items yet. Add one from the dashboard."</p> }
            >
                <table class="inventory-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Quantity"</th>
                            <th>"Location"</th>
                            <th>"Expiry"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || vm.items.get()
                            key=|record| (record.id.clone(), record.consumed, record.days_until_expiry)
                            children=move |record| view! { <InventoryRow record=record /> }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpiryStatus;

    fn record(days: i64) -> ItemRecord {
        ItemRecord {
            id: "1".into(),
            name: "Eggs".into(),
            category: "Dairy".into(),
            location: "Fridge".into(),
            quantity: 12.0,
            unit: "pcs".into(),
            expiry_date: "2026-10-20".into(),
            consumed: false,
            days_until_expiry: days,
            status: ExpiryStatus::Warning,
        }
    }

    #[test]
    fn test_expiry_text() {
        assert_eq!(expiry_text(&record(-2)), "Expired 2 day(s) ago");
        assert_eq!(expiry_text(&record(0)), "Expires today");
        assert_eq!(expiry_text(&record(1)), "Expires tomorrow");
        assert_eq!(expiry_text(&record(4)), "4 days left");
    }
}
