use crate::shared::api_utils::get_json;
use crate::shared::date_utils::to_iso_date;
use chrono::NaiveDate;
use contracts::domain::a002_appointment::Appointment;

/// Appointments on `date`, ordered by time
pub async fn fetch_appointments_on(date: NaiveDate) -> Result<Vec<Appointment>, String> {
    get_json(
        &format!("/api/appointments?date={}", to_iso_date(date)),
        "appointments",
    )
    .await
}
