use crate::dashboards::d400_care_overview::api::fetch_overview;
use crate::domain::a002_appointment::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::AppointmentStatusBadge;
use crate::shared::date_utils::{format_long_date, shift_date};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a002_appointment::Appointment;
use leptos::prelude::*;
use thaw::*;

/// Day view of the appointment book with previous/next day stepping
#[component]
pub fn AppointmentCalendar() -> impl IntoView {
    let selected_date = RwSignal::new(None::<NaiveDate>);
    let appointments = RwSignal::new(Vec::<Appointment>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // The calendar opens on the facility's reference day
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_overview().await {
            Ok(overview) => selected_date.set(Some(overview.reference_date)),
            Err(e) => {
                error.set(Some(e));
                loading.set(false);
            }
        }
    });

    Effect::new(move |_| {
        let Some(date) = selected_date.get() else {
            return;
        };
        loading.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_appointments_on(date).await {
                Ok(items) => {
                    log::debug!("{} appointments on {}", items.len(), date);
                    appointments.set(items);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let step = move |days: i64| {
        selected_date.update(|d| {
            if let Some(date) = d {
                *date = shift_date(*date, days);
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Appointments" subtitle="Visits scheduled for the selected day" />

            <Card>
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <button class="top-header__icon-btn" title="Previous day" on:click=move |_| step(-1)>
                        {icon("chevron-left")}
                    </button>
                    <h3 class="calendar__date">
                        {move || selected_date.get().map(format_long_date).unwrap_or_default()}
                    </h3>
                    <button class="top-header__icon-btn" title="Next day" on:click=move |_| step(1)>
                        {icon("chevron-right")}
                    </button>
                </Flex>

                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                <Spinner />
                                <span>"Loading appointments..."</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! { <div class="error">{err}</div> }.into_any();
                    }
                    let items = appointments.get();
                    if items.is_empty() {
                        return view! {
                            <div class="calendar__empty">"No appointments on this day."</div>
                        }.into_any();
                    }
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Time"</TableHeaderCell>
                                    <TableHeaderCell>"Patient"</TableHeaderCell>
                                    <TableHeaderCell>"Provider"</TableHeaderCell>
                                    <TableHeaderCell>"Type"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {items.into_iter().map(|a| view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{icon("clock")}{a.time.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{a.patient_name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{a.provider.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {a.appointment_type.display_name()}
                                                {a.appointment_type.is_remote().then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Remote"</Badge>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout><AppointmentStatusBadge status=a.status /></TableCellLayout></TableCell>
                                    </TableRow>
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
                }}
            </Card>
        </div>
    }
}
