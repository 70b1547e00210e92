//! Donation Calls

use crate::error::ApiError;
use crate::models::Donation;
use super::{send_ack, HttpApi};

pub async fn create_donation(api: &HttpApi, donation: &Donation) -> Result<(), ApiError> {
    send_ack(api.client.post(api.url("donations")).json(donation)).await
}
