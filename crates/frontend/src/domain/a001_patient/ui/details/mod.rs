pub mod view_model;

use crate::shared::components::status_badge::PatientStatusBadge;
use crate::shared::date_utils::{format_reading_time, format_short_date};
use crate::shared::icons::icon;
use contracts::domain::a001_patient::Patient;
use leptos::prelude::*;
use thaw::*;
use view_model::PatientDetailsViewModel;

/// "Mary Rigby (Daughter)"
fn contact_line(patient: &Patient) -> String {
    let contact = &patient.emergency_contact;
    format!("{} ({})", contact.name, contact.relationship)
}

#[component]
pub fn PatientDetails(#[prop(into)] patient: Signal<Option<Patient>>) -> impl IntoView {
    let vm = PatientDetailsViewModel::new();

    // Reload when the selection changes
    Effect::new(move |prev: Option<Option<String>>| {
        let id = patient.with(|p| p.as_ref().map(|p| p.id.clone()));
        let key = id.as_ref().map(|i| i.to_string());
        if prev.as_ref() != Some(&key) {
            if let Some(id) = id {
                vm.load_vitals(id);
            }
        }
        key
    });

    view! {
        {move || match patient.get() {
            None => view! {
                <Card>
                    <div class="patient-details__empty">"Select a patient to see details."</div>
                </Card>
            }.into_any(),
            Some(p) => {
                let name = p.name.clone();
                let summary = p.summary_line();
                let status = p.status;
                let diagnosis = p.primary_diagnosis.clone();
                let admitted = format_short_date(p.admission_date);
                let allergies = p.allergies_label();
                let contact = contact_line(&p);
                let phone = p.emergency_contact.phone.clone();
                view! {
                    <Card>
                        <div class="patient-details">
                            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                <div>
                                    <h3 class="patient-details__name">{name}</h3>
                                    <div class="patient-details__meta">{summary}</div>
                                </div>
                                <PatientStatusBadge status=status />
                            </Flex>

                            <div class="patient-details__grid">
                                <div>
                                    <div class="patient-details__label">"Primary diagnosis"</div>
                                    <div>{diagnosis}</div>
                                </div>
                                <div>
                                    <div class="patient-details__label">"Admitted"</div>
                                    <div>{admitted}</div>
                                </div>
                                <div>
                                    <div class="patient-details__label">{icon("alert-triangle")}" Allergies"</div>
                                    <div>{allergies}</div>
                                </div>
                            </div>

                            <h4 class="details-section__title">"Emergency contact"</h4>
                            <div class="patient-details__contact">
                                <span>{contact}</span>
                                <span>{icon("phone")}{phone}</span>
                            </div>

                            <h4 class="details-section__title">"Latest vitals"</h4>
                            {move || {
                                if vm.loading.get() {
                                    return view! {
                                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                            <Spinner />
                                            <span>"Loading vitals..."</span>
                                        </Flex>
                                    }.into_any();
                                }
                                if let Some(err) = vm.error.get() {
                                    return view! { <div class="error">{err}</div> }.into_any();
                                }
                                match vm.latest_vital.get() {
                                    Some(v) => {
                                        let vital_status = v.status;
                                        let checked = format_reading_time(&v.timestamp);
                                        let notes = v.notes.unwrap_or_default();
                                        view! {
                                            <div class="patient-details__vital">
                                                <PatientStatusBadge status=vital_status />
                                                <span>{checked}</span>
                                                <span>{notes}</span>
                                            </div>
                                        }.into_any()
                                    }
                                    None => view! {
                                        <div class="patient-details__empty">"No vitals recorded."</div>
                                    }.into_any(),
                                }
                            }}
                        </div>
                    </Card>
                }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_patient::{EmergencyContact, Gender, PatientId};
    use contracts::enums::PatientStatus;

    #[test]
    fn test_contact_line() {
        let patient = Patient {
            id: PatientId::new("p1"),
            name: "Eleanor Rigby".into(),
            age: 82,
            gender: Gender::Female,
            room_number: "301A".into(),
            primary_diagnosis: "Dementia".into(),
            admission_date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
            status: PatientStatus::Observation,
            allergies: vec![],
            emergency_contact: EmergencyContact {
                name: "Mary Rigby".into(),
                relationship: "Daughter".into(),
                phone: "555-0101".into(),
            },
        };
        assert_eq!(contact_line(&patient), "Mary Rigby (Daughter)");
    }
}
