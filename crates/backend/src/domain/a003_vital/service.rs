use contracts::domain::a001_patient::PatientId;
use contracts::domain::a003_vital::{self, Vital, VitalSnapshot};

use crate::shared::data::seed;

/// Readings newest first, optionally for one resident
pub async fn list(patient_id: Option<&str>) -> anyhow::Result<Vec<Vital>> {
    let vitals = &seed::get()?.vitals;
    let mut out = a003_vital::latest(vitals, vitals.len());
    if let Some(id) = patient_id {
        let id = PatientId::new(id);
        out.retain(|v| v.patient_id == id);
    }
    Ok(out)
}

pub async fn trend() -> anyhow::Result<Vec<VitalSnapshot>> {
    Ok(seed::get()?.vital_trend.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_newest_first() {
        seed::initialize().unwrap();
        let ids: Vec<String> = list(None)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.patient_id.0)
            .collect();
        assert_eq!(ids, vec!["p3", "p1", "p2"]);
        assert_eq!(list(Some("p2")).await.unwrap().len(), 1);
        assert_eq!(trend().await.unwrap()[0].timestamp_label, "Mon");
    }
}
