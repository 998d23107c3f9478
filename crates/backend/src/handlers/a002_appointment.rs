use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::a002_appointment;
use contracts::domain::a002_appointment::Appointment;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// YYYY-MM-DD
    pub date: Option<String>,
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, StatusCode> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| StatusCode::BAD_REQUEST),
    }
}

/// GET /api/appointments
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Appointment>>, StatusCode> {
    let date = parse_date(query.date.as_deref())?;
    match a002_appointment::service::list(date).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list appointments: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None), Ok(None));
        assert_eq!(
            parse_date(Some("2024-11-14")),
            Ok(NaiveDate::from_ymd_opt(2024, 11, 14))
        );
        assert_eq!(parse_date(Some("14.11.2024")), Err(StatusCode::BAD_REQUEST));
    }
}
