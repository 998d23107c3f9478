use chrono::NaiveDate;
use contracts::dashboards::d400_care_overview::CareOverview;

use crate::shared::data::seed;

/// Dashboard headline numbers as of `today`
pub async fn get_overview(today: NaiveDate) -> anyhow::Result<CareOverview> {
    let seed = seed::get()?;
    let overview = CareOverview::compute(&seed.patients, &seed.appointments, &seed.vitals, today);
    tracing::debug!(
        "d400 overview for {}: {} patients, {} critical",
        today,
        overview.total_patients,
        overview.critical_patients
    );
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_overview_on_seed_data() {
        seed::initialize().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let o = get_overview(today).await.unwrap();
        assert_eq!(o.total_patients, 3);
        assert_eq!(o.critical_patients, 1);
        assert_eq!(o.today_appointments, 3);
        assert_eq!(o.monitoring, 3);
        assert_eq!(o.watch_list.len(), 2);
        assert_eq!(o.watch_list[0].name, "Eleanor Rigby");
        assert_eq!(o.upcoming.len(), 1);
        assert_eq!(o.upcoming[0].provider, "Dr. Smith (Cardiology)");
    }
}
