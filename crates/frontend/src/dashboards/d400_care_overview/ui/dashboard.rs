use crate::dashboards::d400_care_overview::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::status_badge::PatientStatusBadge;
use crate::shared::date_utils::{format_long_date, format_short_date};
use crate::shared::icons::icon;
use contracts::dashboards::d400_care_overview::CareOverview;
use contracts::shared::navigation::ViewId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Care overview: stat cards, watch list and upcoming visits
#[component]
pub fn CareOverviewDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let (data, set_data) = signal(None::<CareOverview>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_overview().await {
                Ok(overview) => set_data.set(Some(overview)),
                Err(e) => {
                    log::error!("Failed to load care overview: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let count = move |f: fn(&CareOverview) -> usize| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    let subtitle = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| format_long_date(d.reference_date)))
    });

    view! {
        <div class="page">
            <PageHeader title="Care Overview" subtitle=subtitle />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="dashboard__cards">
                <StatCard
                    label="Total Patients"
                    icon_name="users"
                    value=count(|d| d.total_patients)
                    tone=CardTone::Info
                    link_label="View patients"
                    on_link=Callback::new(move |_| ctx.navigate(ViewId::Patients))
                />
                <StatCard
                    label="Critical Alerts"
                    icon_name="alert-triangle"
                    value=count(|d| d.critical_patients)
                    tone=CardTone::Danger
                    link_label="Review patients"
                    on_link=Callback::new(move |_| ctx.navigate(ViewId::Patients))
                />
                <StatCard
                    label="Today's Appointments"
                    icon_name="calendar"
                    value=count(|d| d.today_appointments)
                    tone=CardTone::Info
                    link_label="Open calendar"
                    on_link=Callback::new(move |_| ctx.navigate(ViewId::Appointments))
                />
                <StatCard
                    label="Monitoring"
                    icon_name="activity"
                    value=count(|d| d.monitoring)
                    tone=CardTone::Success
                    link_label="View vitals"
                    on_link=Callback::new(move |_| ctx.navigate(ViewId::Vitals))
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Spinner />
                        <span>"Loading overview..."</span>
                    </Flex>
                }
            >
                {move || data.get().map(|d| view! {
                    <div class="dashboard__panels">
                        <Card>
                            <h4 class="details-section__title">{icon("alert-triangle")}" Patient watch list"</h4>
                            {if d.watch_list.is_empty() {
                                view! { <div class="dashboard__empty">"Every resident is stable."</div> }.into_any()
                            } else {
                                d.watch_list.iter().map(|w| view! {
                                    <div class="watch-list__row">
                                        <div class="patient-list__avatar">{w.initials.clone()}</div>
                                        <div class="patient-list__text">
                                            <div class="patient-list__name">{w.name.clone()}</div>
                                            <div class="patient-list__meta">
                                                {format!("Room {} \u{2022} {}", w.room_number, w.primary_diagnosis)}
                                            </div>
                                        </div>
                                        <PatientStatusBadge status=w.status />
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </Card>

                        <Card>
                            <h4 class="details-section__title">{icon("calendar")}" Upcoming appointments"</h4>
                            {if d.upcoming.is_empty() {
                                view! { <div class="dashboard__empty">"Nothing scheduled."</div> }.into_any()
                            } else {
                                d.upcoming.iter().map(|a| view! {
                                    <div class="upcoming__row">
                                        <div class="upcoming__when">
                                            <div>{a.time.clone()}</div>
                                            <div class="upcoming__date">{format_short_date(a.date)}</div>
                                        </div>
                                        <div class="patient-list__text">
                                            <div class="patient-list__name">{a.patient_name.clone()}</div>
                                            <div class="patient-list__meta">
                                                {format!("{} \u{2022} {}", a.appointment_type.display_name(), a.provider)}
                                            </div>
                                        </div>
                                    </div>
                                }).collect_view().into_any()
                            }}
                        </Card>
                    </div>
                })}
            </Show>
        </div>
    }
}
