use axum::{routing::get, Router};

use crate::handlers;

/// Application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Patients
        .route("/api/patients", get(handlers::a001_patient::list_all))
        .route("/api/patients/:id", get(handlers::a001_patient::get_by_id))
        // Appointments
        .route("/api/appointments", get(handlers::a002_appointment::list))
        // Vitals
        .route("/api/vitals", get(handlers::a003_vital::list))
        .route("/api/vitals/trend", get(handlers::a003_vital::trend))
        // Care team
        .route("/api/doctors", get(handlers::a004_doctor::list_all))
        // D400: care overview dashboard
        .route(
            "/api/d400/overview",
            get(handlers::d400_care_overview::get_overview),
        )
}
