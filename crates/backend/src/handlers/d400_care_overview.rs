use axum::http::StatusCode;
use axum::Json;

use crate::dashboards::d400_care_overview;
use crate::shared::config;
use contracts::dashboards::d400_care_overview::CareOverview;

/// GET /api/d400/overview
pub async fn get_overview() -> Result<Json<CareOverview>, StatusCode> {
    let today = config::current()
        .map(|c| c.data.reference_date)
        .map_err(|e| {
            tracing::error!("Configuration unavailable: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match d400_care_overview::service::get_overview(today).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to compute care overview: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
