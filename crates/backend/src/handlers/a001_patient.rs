use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::domain::a001_patient;
use contracts::domain::a001_patient::{Patient, PatientFilter, StatusFilter};
use contracts::enums::PatientStatus;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    /// Status code ("critical", ...); absent or "all" means no filter
    pub status: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> Result<PatientFilter, StatusCode> {
        let status = match self.status.as_deref() {
            None | Some("") | Some("all") => StatusFilter::All,
            Some(code) => StatusFilter::Only(
                PatientStatus::from_code(code).ok_or(StatusCode::BAD_REQUEST)?,
            ),
        };
        Ok(PatientFilter {
            search: self.search.unwrap_or_default(),
            status,
        })
    }
}

/// GET /api/patients
pub async fn list_all(Query(query): Query<ListQuery>) -> Result<Json<Vec<Patient>>, StatusCode> {
    let filter = query.into_filter()?;
    match a001_patient::service::search(&filter).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list patients: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/patients/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Patient>, StatusCode> {
    match a001_patient::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load patient {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_to_filter() {
        let filter = ListQuery {
            search: Some("finch".into()),
            status: Some("stable".into()),
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.search, "finch");
        assert_eq!(filter.status, StatusFilter::Only(PatientStatus::Stable));

        assert_eq!(
            ListQuery::default().into_filter().unwrap().status,
            StatusFilter::All
        );
        assert_eq!(
            ListQuery {
                search: None,
                status: Some("unknown".into()),
            }
            .into_filter(),
            Err(StatusCode::BAD_REQUEST)
        );
    }
}
