use crate::shared::api_utils::api_url;
use contracts::region::RegionStats;
use gloo_net::http::Request;

/// Агрегаты по всем регионам одним запросом
pub async fn fetch_region_stats() -> Result<Vec<RegionStats>, String> {
    let response = Request::get(&api_url("/recipient/get_data_from_regions/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<RegionStats>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
