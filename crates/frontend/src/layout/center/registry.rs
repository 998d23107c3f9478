//! View registry: the single mapping from `ViewId` to the screen that renders it

use crate::dashboards::d400_care_overview::CareOverviewDashboard;
use crate::domain::a001_patient::ui::PatientsPage;
use crate::domain::a002_appointment::ui::AppointmentCalendar;
use crate::domain::a003_vital::ui::VitalsMonitor;
use crate::domain::a004_doctor::ui::CareTeamList;
use crate::system::pages::placeholder::PlaceholderPage;
use crate::system::pages::settings::SettingsPage;
use contracts::shared::navigation::ViewId;
use leptos::prelude::*;

pub fn render_view(view_id: ViewId) -> AnyView {
    match view_id {
        ViewId::Dashboard => view! { <CareOverviewDashboard /> }.into_any(),
        ViewId::Patients => view! { <PatientsPage /> }.into_any(),
        ViewId::Appointments => view! { <AppointmentCalendar /> }.into_any(),
        ViewId::Vitals => view! { <VitalsMonitor /> }.into_any(),
        ViewId::Team => view! { <CareTeamList /> }.into_any(),
        ViewId::Medications => view! {
            <PlaceholderPage
                view_id=ViewId::Medications
                message="Medication administration records will appear here."
            />
        }
        .into_any(),
        ViewId::Reports => view! {
            <PlaceholderPage
                view_id=ViewId::Reports
                message="Occupancy, incident and care-hours reports will appear here."
            />
        }
        .into_any(),
        ViewId::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
