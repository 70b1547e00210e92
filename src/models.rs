//! Frontend Models
//!
//! Payloads sent to and responses received from the REST backend.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Inventory item payload for `POST /items` and `PUT /items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    pub category: String,
    pub location: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
}

/// Donation payload for `POST /donations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub donor_name: String,
    pub contact: String,
    pub donor_type: String,
    pub food_type: String,
    pub description: String,
    pub quantity: u32,
    pub location: String,
    #[serde(with = "datetime_local")]
    pub expiry_time: NaiveDateTime,
}

/// NGO registration payload for `POST /ngos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoRegistration {
    pub name: String,
    pub contact_person: String,
    pub contact: String,
    pub address: String,
    pub capacity: u32,
}

/// Dashboard counters from `GET /stats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: u64,
    pub critical: u64,
    pub warning: u64,
    pub expired: u64,
}

impl DashboardStats {
    /// Counter texts in display order: total, critical, warning, expired
    pub fn counter_texts(&self) -> [String; 4] {
        [self.total, self.critical, self.warning, self.expired].map(|n| n.to_string())
    }
}

/// Expiry bucket computed by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    Expired,
    Critical,
    Warning,
    #[default]
    #[serde(other)]
    Good,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "expired",
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Good => "good",
        }
    }
}

/// Stored item as listed by `GET /items`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    /// Kept verbatim; older backends send a full ISO datetime here
    pub expiry_date: String,
    #[serde(default)]
    pub consumed: bool,
    #[serde(default)]
    pub days_until_expiry: i64,
    #[serde(default)]
    pub status: ExpiryStatus,
}

// ========================
// Response Envelopes
// ========================

/// Plain `{success, message?}` acknowledgement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// Registered NGO as listed by `GET /ngos`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NgosResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ngos: Vec<NgoRecord>,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// `<input type="datetime-local">` format: `YYYY-MM-DDTHH:MM`
pub mod datetime_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime-local: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inventory_item_wire_names() {
        let item = InventoryItem {
            name: "Milk".into(),
            category: "Dairy".into(),
            location: "Fridge".into(),
            quantity: 2.5,
            unit: "liters".into(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 10, 21).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "name": "Milk",
                "category": "Dairy",
                "location": "Fridge",
                "quantity": 2.5,
                "unit": "liters",
                "expiryDate": "2026-10-21"
            })
        );
    }

    #[test]
    fn test_donation_expiry_time_format() {
        let donation = Donation {
            donor_name: "Ana".into(),
            contact: "555-0101".into(),
            donor_type: "restaurant".into(),
            food_type: "cooked".into(),
            description: "Rice and beans".into(),
            quantity: 40,
            location: "Main St".into(),
            expiry_time: datetime_local::parse("2026-10-18T21:30").unwrap(),
        };
        let value = serde_json::to_value(&donation).unwrap();
        assert_eq!(value["donorName"], "Ana");
        assert_eq!(value["donorType"], "restaurant");
        assert_eq!(value["foodType"], "cooked");
        assert_eq!(value["expiryTime"], "2026-10-18T21:30");
    }

    #[test]
    fn test_item_record_accepts_numeric_id_and_unknown_status() {
        let record: ItemRecord = serde_json::from_value(json!({
            "id": 12,
            "name": "Bread",
            "category": "Bakery",
            "quantity": 3.0,
            "expiryDate": "2026-10-20",
            "status": "stale"
        }))
        .unwrap();
        assert_eq!(record.id, "12");
        assert_eq!(record.status, ExpiryStatus::Good);
        assert!(!record.consumed);
        assert_eq!(record.unit, "");
    }

    #[test]
    fn test_ngos_response_from_minimal_rows() {
        let resp: NgosResponse = serde_json::from_value(json!({
            "success": true,
            "ngos": [{"id": 3, "name": "Food For All", "contact": "555-0100", "address": "4 River Rd"}]
        }))
        .unwrap();
        assert_eq!(resp.ngos.len(), 1);
        assert_eq!(resp.ngos[0].id, "3");
        assert_eq!(resp.ngos[0].contact_person, None);
        assert_eq!(resp.ngos[0].capacity, None);
    }

    #[test]
    fn test_stats_response_ignores_extra_fields() {
        let resp: StatsResponse = serde_json::from_value(json!({
            "success": true,
            "stats": {
                "total": 10, "critical": 2, "warning": 3, "expired": 1,
                "good": 4, "consumed": 7, "categories": {"Dairy": 3}
            }
        }))
        .unwrap();
        assert_eq!(
            resp.stats,
            Some(DashboardStats { total: 10, critical: 2, warning: 3, expired: 1 })
        );
    }
}
