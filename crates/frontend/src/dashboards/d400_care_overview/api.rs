use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_care_overview::CareOverview;

const API_BASE: &str = "/api/d400";

/// Headline numbers for the facility's reference day
pub async fn fetch_overview() -> Result<CareOverview, String> {
    get_json(&format!("{}/overview", API_BASE), "care overview").await
}
