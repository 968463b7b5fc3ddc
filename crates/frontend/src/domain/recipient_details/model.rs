use crate::shared::api_utils::api_url;
use contracts::recipient::{PaymentHistoryEntry, Recipient};
use gloo_net::http::Request;

/// Полная запись получателя
pub async fn fetch_by_id(id: i64) -> Result<Recipient, String> {
    let response = Request::get(&api_url(&format!("/recipient/recipient/{}/", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Recipient>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// История платежей получателя
pub async fn fetch_payment_history(id: i64) -> Result<Vec<PaymentHistoryEntry>, String> {
    let response = Request::get(&api_url(&format!(
        "/recipient/get_recipient_payment_history/{}",
        id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<PaymentHistoryEntry>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
