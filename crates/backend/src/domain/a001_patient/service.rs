use contracts::domain::a001_patient::{Patient, PatientFilter};

use crate::shared::data::seed;

/// Patients matching the list-screen filter, in seed order
pub async fn search(filter: &PatientFilter) -> anyhow::Result<Vec<Patient>> {
    let patients = &seed::get()?.patients;
    Ok(filter.apply(patients).into_iter().cloned().collect())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Patient>> {
    Ok(seed::get()?
        .patients
        .iter()
        .find(|p| p.id.as_str() == id)
        .cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_patient::StatusFilter;
    use contracts::enums::PatientStatus;

    #[tokio::test]
    async fn test_get_by_id() {
        seed::initialize().unwrap();
        let p = get_by_id("p2").await.unwrap().unwrap();
        assert_eq!(p.name, "Harold Finch");
        assert!(get_by_id("p404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_default_filter_returns_all() {
        seed::initialize().unwrap();
        let found = search(&PatientFilter::default()).await.unwrap();
        assert_eq!(found, seed::get().unwrap().patients);
    }

    #[tokio::test]
    async fn test_search_critical() {
        seed::initialize().unwrap();
        let filter = PatientFilter {
            search: String::new(),
            status: StatusFilter::Only(PatientStatus::Critical),
        };
        let found = search(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].room_number, "301A");
    }
}
