use crate::domain::a001_patient::api::fetch_patients;
use crate::domain::a003_vital::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::PatientStatusBadge;
use crate::shared::date_utils::format_reading_time;
use contracts::dashboards::d400_care_overview::dto::MONITORING_WINDOW;
use contracts::domain::a001_patient::Patient;
use contracts::domain::a003_vital::{latest, latest_for, Vital, VitalSnapshot};
use contracts::enums::PatientStatus;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, Default)]
struct VitalsData {
    vitals: Vec<Vital>,
    trend: Vec<VitalSnapshot>,
    patients: Vec<Patient>,
}

impl VitalsData {
    fn patient_name(&self, vital: &Vital) -> String {
        self.patients
            .iter()
            .find(|p| p.id == vital.patient_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| vital.patient_id.to_string())
    }
}

/// Owned card fields for one recent reading
struct RecentCard {
    name: String,
    status: PatientStatus,
    checked: String,
    notes: String,
}

impl RecentCard {
    fn new(data: &VitalsData, vital: Vital) -> Self {
        Self {
            name: data.patient_name(&vital),
            status: vital.status,
            checked: format_reading_time(&vital.timestamp),
            notes: vital.notes.unwrap_or_default(),
        }
    }
}

/// Owned row fields for the per-resident table
struct ResidentRow {
    name: String,
    room: String,
    checked: String,
    status: Option<PatientStatus>,
    notes: String,
}

impl ResidentRow {
    fn new(patient: &Patient, vital: Option<&Vital>) -> Self {
        Self {
            name: patient.name.clone(),
            room: patient.room_number.clone(),
            checked: vital
                .map(|v| format_reading_time(&v.timestamp))
                .unwrap_or_else(|| "\u{2014}".to_string()),
            status: vital.map(|v| v.status),
            notes: vital.and_then(|v| v.notes.clone()).unwrap_or_default(),
        }
    }
}

async fn load() -> Result<VitalsData, String> {
    Ok(VitalsData {
        vitals: api::fetch_vitals().await?,
        trend: api::fetch_trend().await?,
        patients: fetch_patients().await?,
    })
}

/// Latest readings, the weekly trend and each resident's last check
#[component]
pub fn VitalsMonitor() -> impl IntoView {
    let data = RwSignal::new(None::<VitalsData>);
    let error = RwSignal::new(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        match load().await {
            Ok(d) => data.set(Some(d)),
            Err(e) => {
                log::warn!("vitals screen: {}", e);
                error.set(Some(e));
            }
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Vitals" subtitle="Recent checks across the facility" />

            {move || {
                if let Some(err) = error.get() {
                    return view! { <div class="error">{err}</div> }.into_any();
                }
                let Some(d) = data.get() else {
                    return view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Spinner />
                            <span>"Loading vitals..."</span>
                        </Flex>
                    }.into_any();
                };

                let recent: Vec<RecentCard> = latest(&d.vitals, MONITORING_WINDOW)
                    .into_iter()
                    .map(|v| RecentCard::new(&d, v))
                    .collect();
                let trend = d.trend.clone();
                let per_patient: Vec<ResidentRow> = d
                    .patients
                    .iter()
                    .map(|p| ResidentRow::new(p, latest_for(&d.vitals, &p.id)))
                    .collect();

                view! {
                    <div class="vitals__cards">
                        {recent.into_iter().map(|RecentCard { name, status, checked, notes }| view! {
                            <Card>
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <strong>{name}</strong>
                                    <PatientStatusBadge status=status />
                                </Flex>
                                <div class="vitals__time">{checked}</div>
                                <div class="vitals__notes">{notes}</div>
                            </Card>
                        }).collect_view()}
                    </div>

                    <Card>
                        <h4 class="details-section__title">"Weekly trend"</h4>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Day"</TableHeaderCell>
                                    <TableHeaderCell>"Heart rate"</TableHeaderCell>
                                    <TableHeaderCell>"Blood pressure"</TableHeaderCell>
                                    <TableHeaderCell>"SpO2 %"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {trend.into_iter().map(|s| {
                                    let pressure = s.blood_pressure();
                                    let heart_rate = s.heart_rate;
                                    let spo2 = s.spo2;
                                    let label = s.timestamp_label;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{label}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{heart_rate}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{pressure}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{spo2}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Card>

                    <Card>
                        <h4 class="details-section__title">"Last check per resident"</h4>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Resident"</TableHeaderCell>
                                    <TableHeaderCell>"Room"</TableHeaderCell>
                                    <TableHeaderCell>"Checked"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Notes"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {per_patient.into_iter().map(|ResidentRow { name, room, checked, status, notes }| {
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{room}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{checked}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {status.map(|status| view! { <PatientStatusBadge status=status /> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{notes}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </Card>
                }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_patient::{EmergencyContact, Gender, PatientId};

    fn patient(id: &str, name: &str) -> Patient {
        Patient {
            id: PatientId::new(id),
            name: name.into(),
            age: 84,
            gender: Gender::Male,
            room_number: "204B".into(),
            primary_diagnosis: "COPD".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: PatientStatus::Stable,
            allergies: vec![],
            emergency_contact: EmergencyContact {
                name: "Kin".into(),
                relationship: "Daughter".into(),
                phone: "555".into(),
            },
        }
    }

    fn vital(id: &str, notes: Option<&str>) -> Vital {
        Vital {
            patient_id: PatientId::new(id),
            timestamp: Utc.with_ymd_and_hms(2024, 11, 14, 8, 30, 0).unwrap(),
            status: PatientStatus::Critical,
            notes: notes.map(Into::into),
        }
    }

    #[test]
    fn test_resident_row_without_reading() {
        let row = ResidentRow::new(&patient("p1", "Walter Hughes"), None);
        assert_eq!(row.name, "Walter Hughes");
        assert_eq!(row.room, "204B");
        assert_eq!(row.checked, "\u{2014}");
        assert_eq!(row.status, None);
        assert_eq!(row.notes, "");
    }

    #[test]
    fn test_resident_row_with_reading() {
        let v = vital("p1", Some("SpO2 low"));
        let row = ResidentRow::new(&patient("p1", "Walter Hughes"), Some(&v));
        assert_eq!(row.checked, "Nov 14, 08:30");
        assert_eq!(row.status, Some(PatientStatus::Critical));
        assert_eq!(row.notes, "SpO2 low");
    }

    #[test]
    fn test_recent_card_owns_its_fields() {
        let data = VitalsData {
            vitals: vec![],
            trend: vec![],
            patients: vec![patient("p1", "Walter Hughes")],
        };
        let card = RecentCard::new(&data, vital("p1", None));
        assert_eq!(card.name, "Walter Hughes");
        assert_eq!(card.checked, "Nov 14, 08:30");
        assert_eq!(card.notes, "");

        // Unknown resident falls back to the raw id
        let orphan = RecentCard::new(&data, vital("p9", Some("n")));
        assert_eq!(orphan.name, "p9");
        assert_eq!(orphan.status, PatientStatus::Critical);
    }
}
