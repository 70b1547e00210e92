//! NGO Calls

use crate::error::ApiError;
use crate::models::{NgoRecord, NgoRegistration, NgosResponse};
use super::{check, send, send_ack, HttpApi};

pub async fn list_ngos(api: &HttpApi) -> Result<Vec<NgoRecord>, ApiError> {
    let response: NgosResponse = send(api.client.get(api.url("ngos"))).await?;
    check(response.success, response.message)?;
    Ok(response.ngos)
}

pub async fn register_ngo(api: &HttpApi, ngo: &NgoRegistration) -> Result<(), ApiError> {
    send_ack(api.client.post(api.url("ngos")).json(ngo)).await
}
