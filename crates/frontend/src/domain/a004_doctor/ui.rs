use crate::domain::a004_doctor::api;
use crate::shared::components::page_header::PageHeader;
use contracts::domain::a004_doctor::Doctor;
use leptos::prelude::*;
use thaw::*;

fn availability(doctor: &Doctor) -> (&'static str, BadgeColor) {
    let color = if doctor.on_call {
        BadgeColor::Success
    } else {
        BadgeColor::Subtle
    };
    (doctor.on_call_label(), color)
}

#[component]
pub fn CareTeamList() -> impl IntoView {
    let doctors = RwSignal::new(None::<Result<Vec<Doctor>, String>>);

    wasm_bindgen_futures::spawn_local(async move {
        doctors.set(Some(api::fetch_doctors().await));
    });

    view! {
        <div class="page">
            <PageHeader title="Care Team" subtitle="Physicians and on-call coverage" />

            <Card>
                {move || match doctors.get() {
                    None => view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Spinner />
                            <span>"Loading care team..."</span>
                        </Flex>
                    }.into_any(),
                    Some(Err(e)) => view! { <div class="error">{e}</div> }.into_any(),
                    Some(Ok(list)) => view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Name"</TableHeaderCell>
                                    <TableHeaderCell>"Specialty"</TableHeaderCell>
                                    <TableHeaderCell>"Patients"</TableHeaderCell>
                                    <TableHeaderCell>"Availability"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {list.into_iter().map(|d| {
                                    let (availability, color) = availability(&d);
                                    let Doctor { name, specialty, patients, .. } = d;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{specialty}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{patients}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=color>
                                                        {availability}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any(),
                }}
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_badge() {
        let mut doctor = Doctor {
            id: "d1".into(),
            name: "Dr. Sarah Chen".into(),
            specialty: "Geriatrics".into(),
            patients: 12,
            on_call: true,
        };
        let (label, color) = availability(&doctor);
        assert_eq!(label, "On call");
        assert!(matches!(color, BadgeColor::Success));

        doctor.on_call = false;
        let (_, color) = availability(&doctor);
        assert!(matches!(color, BadgeColor::Subtle));
    }
}
