//! REST Backend Bindings
//!
//! `FoodApi` is the seam between the form orchestrator and the backend;
//! `HttpApi` implements it over reqwest (fetch on wasm32). Calls are
//! organized by resource.

mod donations;
mod items;
mod ngos;
mod stats;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Ack, DashboardStats, Donation, InventoryItem, ItemRecord, NgoRecord, NgoRegistration};

/// Characters left unescaped in an `{id}` path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Backend operations used by the UI
#[allow(async_fn_in_trait)]
pub trait FoodApi {
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError>;
    async fn list_items(&self) -> Result<Vec<ItemRecord>, ApiError>;
    async fn search_items(&self, query: &str) -> Result<Vec<ItemRecord>, ApiError>;
    async fn items_by_category(&self, category: &str) -> Result<Vec<ItemRecord>, ApiError>;
    async fn expiring_items(&self, days: u32) -> Result<Vec<ItemRecord>, ApiError>;
    async fn create_item(&self, item: &InventoryItem) -> Result<(), ApiError>;
    async fn update_item(&self, id: &str, item: &InventoryItem) -> Result<(), ApiError>;
    async fn consume_item(&self, id: &str) -> Result<(), ApiError>;
    async fn delete_item(&self, id: &str) -> Result<(), ApiError>;
    async fn create_donation(&self, donation: &Donation) -> Result<(), ApiError>;
    async fn register_ngo(&self, ngo: &NgoRegistration) -> Result<(), ApiError>;
    async fn list_ngos(&self) -> Result<Vec<NgoRecord>, ApiError>;
    async fn health(&self) -> Result<(), ApiError>;
}

/// reqwest-backed implementation
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { client: Client::new(), config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

impl FoodApi for HttpApi {
    async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        stats::fetch_stats(self).await
    }

    async fn list_items(&self) -> Result<Vec<ItemRecord>, ApiError> {
        items::list_items(self).await
    }

    async fn search_items(&self, query: &str) -> Result<Vec<ItemRecord>, ApiError> {
        items::search_items(self, query).await
    }

    async fn items_by_category(&self, category: &str) -> Result<Vec<ItemRecord>, ApiError> {
        items::items_by_category(self, category).await
    }

    async fn expiring_items(&self, days: u32) -> Result<Vec<ItemRecord>, ApiError> {
        items::expiring_items(self, days).await
    }

    async fn create_item(&self, item: &InventoryItem) -> Result<(), ApiError> {
        items::create_item(self, item).await
    }

    async fn update_item(&self, id: &str, item: &InventoryItem) -> Result<(), ApiError> {
        items::update_item(self, id, item).await
    }

    async fn consume_item(&self, id: &str) -> Result<(), ApiError> {
        items::consume_item(self, id).await
    }

    async fn delete_item(&self, id: &str) -> Result<(), ApiError> {
        items::delete_item(self, id).await
    }

    async fn create_donation(&self, donation: &Donation) -> Result<(), ApiError> {
        donations::create_donation(self, donation).await
    }

    async fn register_ngo(&self, ngo: &NgoRegistration) -> Result<(), ApiError> {
        ngos::register_ngo(self, ngo).await
    }

    async fn list_ngos(&self) -> Result<Vec<NgoRecord>, ApiError> {
        ngos::list_ngos(self).await
    }

    async fn health(&self) -> Result<(), ApiError> {
        stats::health(self).await
    }
}

// ========================
// Shared Request Helpers
// ========================

/// Escape a value for use as one path segment
fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// `items/{id}` with the id escaped
fn item_path(id: &str, suffix: &str) -> String {
    format!("items/{}{}", path_segment(id), suffix)
}

/// Send a request and decode its JSON body
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    decode_body(status, &body)
}

/// Decode a response body.
///
/// An error status is only trusted when its body still decodes (the
/// envelope then carries `success: false`); otherwise it is an
/// application failure labelled with the status.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(ApiError::Application(Some(format!("HTTP {}", status)))),
        Err(e) => Err(ApiError::Transport(format!("invalid response body: {}", e))),
    }
}

/// Turn a `{success, message}` envelope into a result
fn check(success: bool, message: Option<String>) -> Result<(), ApiError> {
    if success { Ok(()) } else { Err(ApiError::Application(message)) }
}

async fn send_ack(request: RequestBuilder) -> Result<(), ApiError> {
    let ack: Ack = send(request).await?;
    check(ack.success, ack.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatsResponse;

    #[test]
    fn test_item_path_escapes_id() {
        assert_eq!(item_path("42", ""), "items/42");
        assert_eq!(item_path("65f0c1-a_b", "/consume"), "items/65f0c1-a_b/consume");
        assert_eq!(item_path("a/b c", ""), "items/a%2Fb%20c");
        assert_eq!(format!("category/{}", path_segment("Fruits & Veg")), "category/Fruits%20%26%20Veg");
    }

    #[test]
    fn test_decode_success_body() {
        let ack: Ack = decode_body(StatusCode::OK, r#"{"success":true}"#).unwrap();
        assert!(ack.success);
        assert_eq!(check(ack.success, ack.message), Ok(()));
    }

    #[test]
    fn test_decode_failure_envelope() {
        let ack: Ack =
            decode_body(StatusCode::BAD_REQUEST, r#"{"success":false,"message":"No fields to update"}"#).unwrap();
        assert_eq!(
            check(ack.success, ack.message),
            Err(ApiError::Application(Some("No fields to update".into())))
        );
    }

    #[test]
    fn test_decode_error_status_without_envelope() {
        let result: Result<Ack, _> = decode_body(StatusCode::NOT_FOUND, r#"{"detail":"Item not found"}"#);
        assert_eq!(result, Err(ApiError::Application(Some("HTTP 404 Not Found".into()))));
    }

    #[test]
    fn test_decode_garbage_on_ok_is_transport() {
        let result: Result<StatsResponse, _> = decode_body(StatusCode::OK, "<html>proxy</html>");
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
