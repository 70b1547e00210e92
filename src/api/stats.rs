//! Dashboard Calls
//!
//! Aggregate stats and backend liveness.

use crate::error::ApiError;
use crate::models::{DashboardStats, StatsResponse};
use super::{check, send, send_ack, HttpApi};

pub async fn fetch_stats(api: &HttpApi) -> Result<DashboardStats, ApiError> {
    let response: StatsResponse = send(api.client.get(api.url("stats"))).await?;
    check(response.success, response.message)?;
    response
        .stats
        .ok_or_else(|| ApiError::Transport("stats missing from response".to_string()))
}

pub async fn health(api: &HttpApi) -> Result<(), ApiError> {
    send_ack(api.client.get(api.url("health"))).await
}
