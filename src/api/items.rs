//! Item Calls
//!
//! Inventory endpoints under `/items`.

use crate::error::ApiError;
use crate::models::{InventoryItem, ItemRecord, ItemsResponse};
use super::{check, item_path, path_segment, send, send_ack, HttpApi};

async fn fetch_list(request: reqwest::RequestBuilder) -> Result<Vec<ItemRecord>, ApiError> {
    let response: ItemsResponse = send(request).await?;
    check(response.success, response.message)?;
    Ok(response.items)
}

pub async fn list_items(api: &HttpApi) -> Result<Vec<ItemRecord>, ApiError> {
    fetch_list(api.client.get(api.url("items"))).await
}

/// Items whose name, category or location matches `query`
pub async fn search_items(api: &HttpApi, query: &str) -> Result<Vec<ItemRecord>, ApiError> {
    fetch_list(api.client.get(api.url("search")).query(&[("query", query)])).await
}

/// Unconsumed items in `category` (case-insensitive on the server)
pub async fn items_by_category(api: &HttpApi, category: &str) -> Result<Vec<ItemRecord>, ApiError> {
    fetch_list(api.client.get(api.url(&format!("category/{}", path_segment(category))))).await
}

/// Unconsumed items expiring within `days`, soonest first
pub async fn expiring_items(api: &HttpApi, days: u32) -> Result<Vec<ItemRecord>, ApiError> {
    fetch_list(api.client.get(api.url(&format!("expiring/{}", days)))).await
}

pub async fn create_item(api: &HttpApi, item: &InventoryItem) -> Result<(), ApiError> {
    send_ack(api.client.post(api.url("items")).json(item)).await
}

pub async fn update_item(api: &HttpApi, id: &str, item: &InventoryItem) -> Result<(), ApiError> {
    send_ack(api.client.put(api.url(&item_path(id, ""))).json(item)).await
}

/// Mark an item as used up; it stops counting towards the dashboard
pub async fn consume_item(api: &HttpApi, id: &str) -> Result<(), ApiError> {
    send_ack(api.client.patch(api.url(&item_path(id, "/consume")))).await
}

pub async fn delete_item(api: &HttpApi, id: &str) -> Result<(), ApiError> {
    send_ack(api.client.delete(api.url(&item_path(id, "")))).await
}
