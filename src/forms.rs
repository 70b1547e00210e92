//! Form State
//!
//! Raw text as typed into each form, keyed by field name, plus the
//! conversion into typed payloads.

use chrono::NaiveDate;

use crate::error::FormError;
use crate::models::{datetime_local, Donation, InventoryItem, ItemRecord, NgoRegistration};

pub const DEFAULT_LOCATION: &str = "Not specified";
pub const DEFAULT_UNIT: &str = "units";

/// Inventory item form (add/edit modal)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: String,
    pub unit: String,
    /// `YYYY-MM-DD` from `<input type="date">`
    pub expiry_date: String,
}

impl ItemForm {
    pub fn to_payload(&self) -> Result<InventoryItem, FormError> {
        Ok(InventoryItem {
            name: required("Name", &self.name)?,
            category: required("Category", &self.category)?,
            location: or_default(&self.location, DEFAULT_LOCATION),
            quantity: parse_quantity("Quantity", &self.quantity)?,
            unit: or_default(&self.unit, DEFAULT_UNIT),
            expiry_date: parse_date("Expiry date", &self.expiry_date)?,
        })
    }

    /// Prefill from a stored record for editing
    pub fn from_record(record: &ItemRecord) -> Self {
        // Date inputs only take the date part of an ISO datetime
        let expiry_date = record.expiry_date.get(..10).unwrap_or(&record.expiry_date);
        Self {
            name: record.name.clone(),
            category: record.category.clone(),
            location: record.location.clone(),
            quantity: record.quantity.to_string(),
            unit: record.unit.clone(),
            expiry_date: expiry_date.to_string(),
        }
    }
}

/// Donation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub donor_name: String,
    pub contact: String,
    pub donor_type: String,
    pub food_type: String,
    pub description: String,
    pub quantity: String,
    pub location: String,
    /// `YYYY-MM-DDTHH:MM` from `<input type="datetime-local">`
    pub expiry_time: String,
}

impl DonationForm {
    pub fn to_payload(&self) -> Result<Donation, FormError> {
        let expiry_time = required("Expiry time", &self.expiry_time)?;
        Ok(Donation {
            donor_name: required("Donor name", &self.donor_name)?,
            contact: required("Contact", &self.contact)?,
            donor_type: required("Donor type", &self.donor_type)?,
            food_type: required("Food type", &self.food_type)?,
            description: self.description.clone(),
            quantity: parse_count("Quantity", &self.quantity)?,
            location: required("Location", &self.location)?,
            expiry_time: datetime_local::parse(expiry_time.trim())
                .ok_or(FormError::Invalid { field: "Expiry time", value: expiry_time })?,
        })
    }
}

/// NGO registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NgoForm {
    pub name: String,
    pub contact_person: String,
    pub contact: String,
    pub address: String,
    pub capacity: String,
}

impl NgoForm {
    pub fn to_payload(&self) -> Result<NgoRegistration, FormError> {
        Ok(NgoRegistration {
            name: required("Organization name", &self.name)?,
            contact_person: required("Contact person", &self.contact_person)?,
            contact: required("Contact", &self.contact)?,
            address: required("Address", &self.address)?,
            capacity: parse_count("Capacity", &self.capacity)?,
        })
    }
}

// ========================
// Field Helpers
// ========================

// Whitespace only decides blankness; text values are sent as typed.

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() { default.to_string() } else { value.to_string() }
}

fn parse_quantity(field: &'static str, value: &str) -> Result<f64, FormError> {
    let raw = required(field, value)?;
    match raw.trim().parse::<f64>() {
        Ok(q) if q.is_finite() && q >= 0.0 => Ok(q),
        _ => Err(FormError::Invalid { field, value: raw }),
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, FormError> {
    let raw = required(field, value)?;
    raw.trim().parse::<u32>().map_err(|_| FormError::Invalid { field, value: raw })
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    let raw = required(field, value)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| FormError::Invalid { field, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpiryStatus;

    fn filled_item_form() -> ItemForm {
        ItemForm {
            name: "Yogurt".into(),
            category: "Dairy".into(),
            location: String::new(),
            quantity: "6".into(),
            unit: "  ".into(),
            expiry_date: "2026-10-25".into(),
        }
    }

    #[test]
    fn test_item_defaults_applied() {
        let item = filled_item_form().to_payload().unwrap();
        assert_eq!(item.name, "Yogurt");
        assert_eq!(item.location, "Not specified");
        assert_eq!(item.unit, "units");
        assert_eq!(item.quantity, 6.0);
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2026, 10, 25).unwrap());
    }

    #[test]
    fn test_item_rejects_malformed_quantity() {
        let mut form = filled_item_form();
        form.quantity = "six".into();
        assert_eq!(
            form.to_payload(),
            Err(FormError::Invalid { field: "Quantity", value: "six".into() })
        );

        form.quantity = "-1".into();
        assert!(form.to_payload().is_err());

        form.quantity = "NaN".into();
        assert!(form.to_payload().is_err());
    }

    #[test]
    fn test_item_requires_name() {
        let mut form = filled_item_form();
        form.name = "   ".into();
        assert_eq!(form.to_payload(), Err(FormError::Missing("Name")));
    }

    #[test]
    fn test_item_text_sent_as_typed() {
        let form = ItemForm {
            name: " Milk ".into(),
            location: "  Shelf 2 ".into(),
            quantity: " 3 ".into(),
            expiry_date: " 2026-10-25".into(),
            ..filled_item_form()
        };
        let item = form.to_payload().unwrap();
        assert_eq!(item.name, " Milk ");
        assert_eq!(item.location, "  Shelf 2 ");
        // Numbers and dates still parse around stray spaces
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.expiry_date, NaiveDate::from_ymd_opt(2026, 10, 25).unwrap());
    }

    #[test]
    fn test_item_form_from_record() {
        let record = ItemRecord {
            id: "abc".into(),
            name: "Cheese".into(),
            category: "Dairy".into(),
            location: "Fridge".into(),
            quantity: 1.5,
            unit: "kg".into(),
            expiry_date: "2026-11-02T00:00:00".into(),
            consumed: false,
            days_until_expiry: 15,
            status: ExpiryStatus::Good,
        };
        let form = ItemForm::from_record(&record);
        assert_eq!(form.expiry_date, "2026-11-02");
        assert_eq!(form.quantity, "1.5");
        assert_eq!(form.to_payload().unwrap().location, "Fridge");
    }

    #[test]
    fn test_donation_payload() {
        let form = DonationForm {
            donor_name: "Green Bistro".into(),
            contact: "555-0199".into(),
            donor_type: "restaurant".into(),
            food_type: "cooked".into(),
            description: String::new(),
            quantity: "25".into(),
            location: "12 Elm St".into(),
            expiry_time: "2026-10-18T22:00".into(),
        };
        let donation = form.to_payload().unwrap();
        assert_eq!(donation.quantity, 25);
        assert_eq!(donation.description, "");

        let bad = DonationForm { quantity: "2.5".into(), ..form.clone() };
        assert_eq!(
            bad.to_payload(),
            Err(FormError::Invalid { field: "Quantity", value: "2.5".into() })
        );

        let bad = DonationForm { expiry_time: "tonight".into(), ..form };
        assert!(matches!(bad.to_payload(), Err(FormError::Invalid { field: "Expiry time", .. })));
    }

    #[test]
    fn test_ngo_payload() {
        let form = NgoForm {
            name: "Food For All".into(),
            contact_person: "Sam".into(),
            contact: "sam@example.org".into(),
            address: "4 River Rd".into(),
            capacity: "120".into(),
        };
        assert_eq!(form.to_payload().unwrap().capacity, 120);

        let bad = NgoForm { capacity: String::new(), ..form };
        assert_eq!(bad.to_payload(), Err(FormError::Missing("Capacity")));
    }
}
