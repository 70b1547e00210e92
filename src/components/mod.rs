//! UI Components
//!
//! Leptos components for the dashboard, forms and feedback.

mod fields;
mod dashboard;
mod item_modal;
mod donation_panel;
mod ngo_panel;
mod inventory_table;
mod delete_confirm_button;
mod notification_toast;

pub use dashboard::Dashboard;
pub use item_modal::ItemModal;
pub use donation_panel::DonationPanel;
pub use ngo_panel::NgoPanel;
pub use inventory_table::InventoryTable;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notification_toast::NotificationToast;
