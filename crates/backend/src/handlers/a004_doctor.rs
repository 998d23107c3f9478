use axum::http::StatusCode;
use axum::Json;

use crate::domain::a004_doctor;
use contracts::domain::a004_doctor::Doctor;

/// GET /api/doctors
pub async fn list_all() -> Result<Json<Vec<Doctor>>, StatusCode> {
    a004_doctor::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list doctors: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
