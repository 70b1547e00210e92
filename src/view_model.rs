//! View Model
//!
//! All UI state the form handlers touch, held in signals. The root
//! component owns one `ViewModel`, provides it via context, and handlers
//! receive it by reference instead of looking anything up in the DOM.

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::forms::{DonationForm, ItemForm, NgoForm};
use crate::models::{DashboardStats, ItemRecord, NgoRecord};

pub const ADD_ITEM_TITLE: &str = "Add Food Item";
pub const EDIT_ITEM_TITLE: &str = "Edit Food Item";
pub const DONATE_LABEL: &str = "Submit Donation";
pub const SUBMITTING_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
        }
    }
}

/// Transient banner; `id` lets a dismiss timer target only its own banner
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub text: String,
}

/// Which slice of the inventory the table shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ItemFilter {
    #[default]
    All,
    Search(String),
    Category(String),
}

#[derive(Clone, Copy)]
pub struct ViewModel {
    // Inventory item modal
    pub item_form: RwSignal<ItemForm>,
    /// Id of the record being edited (None = create mode)
    pub editing_id: RwSignal<Option<String>>,
    pub item_modal_open: RwSignal<bool>,
    pub item_modal_title: RwSignal<&'static str>,

    // Donation form
    pub donation_form: RwSignal<DonationForm>,
    pub donation_busy: RwSignal<bool>,
    pub donate_label: RwSignal<&'static str>,

    // NGO form
    pub ngo_form: RwSignal<NgoForm>,
    pub ngo_busy: RwSignal<bool>,

    // Dashboard
    pub stats: RwSignal<DashboardStats>,
    pub items: RwSignal<Vec<ItemRecord>>,
    pub item_filter: RwSignal<ItemFilter>,
    pub expiring: RwSignal<Vec<ItemRecord>>,
    pub ngos: RwSignal<Vec<NgoRecord>>,
    /// None until the first health check settles
    pub backend_online: RwSignal<Option<bool>>,

    pub notification: RwSignal<Option<Notification>>,
    notification_seq: RwSignal<u32>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self {
            item_form: RwSignal::new(ItemForm::default()),
            editing_id: RwSignal::new(None),
            item_modal_open: RwSignal::new(false),
            item_modal_title: RwSignal::new(ADD_ITEM_TITLE),
            donation_form: RwSignal::new(DonationForm::default()),
            donation_busy: RwSignal::new(false),
            donate_label: RwSignal::new(DONATE_LABEL),
            ngo_form: RwSignal::new(NgoForm::default()),
            ngo_busy: RwSignal::new(false),
            stats: RwSignal::new(DashboardStats::default()),
            items: RwSignal::new(Vec::new()),
            item_filter: RwSignal::new(ItemFilter::All),
            expiring: RwSignal::new(Vec::new()),
            ngos: RwSignal::new(Vec::new()),
            backend_online: RwSignal::new(None),
            notification: RwSignal::new(None),
            notification_seq: RwSignal::new(0),
        }
    }

    /// Show a notification, replacing any current one
    pub fn notify(&self, kind: NotificationKind, text: impl Into<String>) {
        self.notification_seq.update(|seq| *seq += 1);
        let id = self.notification_seq.get_untracked();
        self.notification.set(Some(Notification { id, kind, text: text.into() }));
    }

    /// Clear the notification if it is still the one with `id`
    pub fn dismiss(&self, id: u32) {
        if self.notification.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
            self.notification.set(None);
        }
    }

    /// Wait out `lifetime` with `sleep`, then dismiss notification `id`
    pub async fn schedule_dismiss<S, F>(&self, id: u32, lifetime: Duration, sleep: S)
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        sleep(lifetime).await;
        self.dismiss(id);
    }

    #[cfg(test)]
    pub(crate) fn notifications_shown(&self) -> u32 {
        self.notification_seq.get_untracked()
    }

    /// Open the item modal in create mode
    pub fn open_item_modal(&self) {
        self.editing_id.set(None);
        self.item_modal_title.set(ADD_ITEM_TITLE);
        self.item_form.set(ItemForm::default());
        self.item_modal_open.set(true);
    }

    pub fn close_item_modal(&self) {
        self.item_modal_open.set(false);
    }

    /// Open the item modal prefilled for editing `record`
    pub fn open_edit_modal(&self, record: &ItemRecord) {
        self.item_form.set(ItemForm::from_record(record));
        self.editing_id.set(Some(record.id.clone()));
        self.item_modal_title.set(EDIT_ITEM_TITLE);
        self.item_modal_open.set(true);
    }

    /// Dashboard counters as displayed: total, critical, warning, expired.
    /// Tracks `stats` when read inside a reactive scope.
    pub fn counter_texts(&self) -> [String; 4] {
        self.stats.with(DashboardStats::counter_texts)
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the view model from context
pub fn use_view_model() -> ViewModel {
    expect_context::<ViewModel>()
}

/// Holds a form's submit control disabled; re-enables it when dropped.
///
/// Dropping runs on every exit path of the handler holding it, early
/// returns and errors included.
pub struct SubmitGuard {
    busy: RwSignal<bool>,
    label: Option<(RwSignal<&'static str>, &'static str)>,
}

impl SubmitGuard {
    /// Disable the control; None if a submission is already in flight
    pub fn acquire(busy: RwSignal<bool>) -> Option<Self> {
        if busy.get_untracked() {
            return None;
        }
        busy.set(true);
        Some(Self { busy, label: None })
    }

    /// Also swap the control's label until the guard drops
    pub fn with_label(mut self, label: RwSignal<&'static str>, busy_text: &'static str) -> Self {
        let idle_text = label.get_untracked();
        label.set(busy_text);
        self.label = Some((label, idle_text));
        self
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.busy.set(false);
        if let Some((label, idle_text)) = self.label {
            label.set(idle_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::models::ExpiryStatus;

    fn setup() -> (Owner, ViewModel) {
        let owner = Owner::new();
        owner.set();
        (owner, ViewModel::new())
    }

    #[test]
    fn test_notify_replaces_and_dismiss_targets_own_id() {
        let (_owner, vm) = setup();
        vm.notify(NotificationKind::Success, "first");
        vm.notify(NotificationKind::Error, "second");
        assert_eq!(vm.notifications_shown(), 2);

        // Stale timer from the first banner leaves the second alone
        vm.dismiss(1);
        assert_eq!(vm.notification.get_untracked().map(|n| n.text), Some("second".to_string()));

        vm.dismiss(2);
        assert_eq!(vm.notification.get_untracked(), None);
    }

    #[test]
    fn test_open_item_modal_resets_edit_mode() {
        let (_owner, vm) = setup();
        let record = ItemRecord {
            id: "7".into(),
            name: "Apples".into(),
            category: "Fruit".into(),
            location: "Pantry".into(),
            quantity: 12.0,
            unit: "pcs".into(),
            expiry_date: "2026-10-30".into(),
            consumed: false,
            days_until_expiry: 12,
            status: ExpiryStatus::Good,
        };

        vm.open_edit_modal(&record);
        assert_eq!(vm.editing_id.get_untracked(), Some("7".to_string()));
        assert_eq!(vm.item_modal_title.get_untracked(), EDIT_ITEM_TITLE);
        assert_eq!(vm.item_form.get_untracked().name, "Apples");

        vm.close_item_modal();
        assert!(!vm.item_modal_open.get_untracked());

        vm.open_item_modal();
        assert!(vm.item_modal_open.get_untracked());
        assert_eq!(vm.editing_id.get_untracked(), None);
        assert_eq!(vm.item_modal_title.get_untracked(), ADD_ITEM_TITLE);
        assert_eq!(vm.item_form.get_untracked(), ItemForm::default());
    }

    #[test]
    fn test_submit_guard_restores_on_drop() {
        let (_owner, vm) = setup();
        {
            let _guard = SubmitGuard::acquire(vm.donation_busy)
                .unwrap()
                .with_label(vm.donate_label, SUBMITTING_LABEL);
            assert!(vm.donation_busy.get_untracked());
            assert_eq!(vm.donate_label.get_untracked(), SUBMITTING_LABEL);

            // Second submit while in flight is refused
            assert!(SubmitGuard::acquire(vm.donation_busy).is_none());
        }
        assert!(!vm.donation_busy.get_untracked());
        assert_eq!(vm.donate_label.get_untracked(), DONATE_LABEL);
    }

    #[test]
    fn test_counter_texts() {
        let (_owner, vm) = setup();
        vm.stats.set(DashboardStats { total: 10, critical: 2, warning: 3, expired: 1 });
        assert_eq!(vm.counter_texts(), ["10", "2", "3", "1"]);
    }

    #[tokio::test]
    async fn test_schedule_dismiss_clears_after_lifetime() {
        let (_owner, vm) = setup();
        vm.notify(NotificationKind::Success, "Item added");
        let id = vm.notification.get_untracked().unwrap().id;

        let waited = Rc::new(RefCell::new(Vec::new()));
        let log = waited.clone();
        vm.schedule_dismiss(id, Duration::from_millis(3000), move |d| {
            log.borrow_mut().push(d);
            async {}
        })
        .await;

        assert_eq!(*waited.borrow(), vec![Duration::from_millis(3000)]);
        assert_eq!(vm.notification.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_schedule_dismiss_waits_for_sleep() {
        let (_owner, vm) = setup();
        vm.notify(NotificationKind::Error, "Error adding item");
        let id = vm.notification.get_untracked().unwrap().id;

        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        let timer = vm.schedule_dismiss(id, Duration::from_secs(3), move |_| async move {
            let _ = rx.await;
        });
        let check = async move {
            tokio::task::yield_now().await;
            // Timer still pending: banner stays up
            assert!(vm.notification.get_untracked().is_some());
            let _ = tx.send(());
        };
        tokio::join!(timer, check);

        assert_eq!(vm.notification.get_untracked(), None);
    }

    #[tokio::test]
    async fn test_replacing_notification_outlives_old_timer() {
        let (_owner, vm) = setup();
        vm.notify(NotificationKind::Success, "first");
        let first = vm.notification.get_untracked().unwrap().id;
        vm.notify(NotificationKind::Error, "second");

        vm.schedule_dismiss(first, Duration::from_secs(3), |_| async {}).await;

        assert_eq!(vm.notification.get_untracked().map(|n| n.text), Some("second".to_string()));
    }

    #[test]
    fn test_counter_texts_track_stats() {
        let (_owner, vm) = setup();
        let counters = Memo::new(move |_| vm.counter_texts());
        assert_eq!(counters.get_untracked(), ["0", "0", "0", "0"]);
        vm.stats.set(DashboardStats { total: 4, critical: 1, warning: 0, expired: 2 });
        assert_eq!(counters.get_untracked(), ["4", "1", "0", "2"]);
    }
}
