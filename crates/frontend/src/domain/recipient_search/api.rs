use crate::shared::api_utils::api_url;
use contracts::recipient::{Recipient, RecipientListResponse};
use gloo_net::http::Request;

/// Список получателей по строке фильтров (строка может быть пустой)
pub async fn fetch_recipients(query: &str) -> Result<Vec<Recipient>, String> {
    let url = if query.is_empty() {
        api_url("/recipient/recipient/")
    } else {
        api_url(&format!("/recipient/recipient/?{}", query))
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let data = response
        .json::<RecipientListResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(data.results)
}
