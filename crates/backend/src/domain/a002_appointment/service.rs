use chrono::NaiveDate;
use contracts::domain::a002_appointment::{appointments_on, Appointment};

use crate::shared::data::seed;

/// All appointments, or only those on `date` ordered by time
pub async fn list(date: Option<NaiveDate>) -> anyhow::Result<Vec<Appointment>> {
    let appointments = &seed::get()?.appointments;
    Ok(match date {
        Some(date) => appointments_on(appointments, date),
        None => appointments.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_date() {
        seed::initialize().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let times: Vec<String> = list(Some(day))
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.time)
            .collect();
        assert_eq!(times, vec!["09:00", "10:30", "13:00"]);

        let empty = list(day.succ_opt()).await.unwrap();
        assert!(empty.is_empty());
        assert_eq!(list(None).await.unwrap().len(), 3);
    }
}
