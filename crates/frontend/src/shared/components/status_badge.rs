use contracts::enums::{AppointmentStatus, PatientStatus};
use leptos::prelude::*;
use thaw::*;

fn patient_color(status: PatientStatus) -> BadgeColor {
    match status {
        PatientStatus::Stable => BadgeColor::Success,
        PatientStatus::Critical => BadgeColor::Danger,
        PatientStatus::Observation => BadgeColor::Warning,
    }
}

fn appointment_color(status: AppointmentStatus) -> BadgeColor {
    match status {
        AppointmentStatus::Scheduled => BadgeColor::Brand,
        AppointmentStatus::InProgress => BadgeColor::Warning,
        AppointmentStatus::Completed => BadgeColor::Success,
        AppointmentStatus::Cancelled => BadgeColor::Subtle,
    }
}

#[component]
pub fn PatientStatusBadge(status: PatientStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=patient_color(status)>
            {status.display_name()}
        </Badge>
    }
}

#[component]
pub fn AppointmentStatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Outline color=appointment_color(status)>
            {status.display_name()}
        </Badge>
    }
}
