use crate::shared::api_utils::get_json;
use contracts::domain::a003_vital::{Vital, VitalSnapshot};

pub async fn fetch_vitals() -> Result<Vec<Vital>, String> {
    get_json("/api/vitals", "vitals").await
}

pub async fn fetch_trend() -> Result<Vec<VitalSnapshot>, String> {
    get_json("/api/vitals/trend", "vital trend").await
}
