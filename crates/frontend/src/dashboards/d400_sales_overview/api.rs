use crate::shared::api_utils::api_url;
use crate::shared::date_utils::parse_latest_data_date;
use chrono::NaiveDate;
use contracts::shared::date_range::LatestDataDateResponse;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d400";

/// Дата самой свежей записи продаж; `None`, если данных ещё нет
pub async fn get_latest_data_date() -> Result<Option<NaiveDate>, String> {
    let url = api_url(&format!("{}/latest_date", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: LatestDataDateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    data.latest_date
        .as_deref()
        .map(parse_latest_data_date)
        .transpose()
        .map_err(|e| e.to_string())
}
