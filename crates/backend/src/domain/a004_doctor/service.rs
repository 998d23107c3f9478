use contracts::domain::a004_doctor::Doctor;

use crate::shared::data::seed;

pub async fn list_all() -> anyhow::Result<Vec<Doctor>> {
    Ok(seed::get()?.doctors.clone())
}
