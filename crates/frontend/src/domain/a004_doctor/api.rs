use crate::shared::api_utils::get_json;
use contracts::domain::a004_doctor::Doctor;

pub async fn fetch_doctors() -> Result<Vec<Doctor>, String> {
    get_json("/api/doctors", "doctors").await
}
