//! Sidebar navigation: one entry per view, grouped into sections

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::navigation::ViewId;
use leptos::prelude::*;

struct MenuGroup {
    label: &'static str,
    items: &'static [ViewId],
}

const MENU_GROUPS: &[MenuGroup] = &[
    MenuGroup {
        label: "Overview",
        items: &[ViewId::Dashboard],
    },
    MenuGroup {
        label: "Care",
        items: &[
            ViewId::Patients,
            ViewId::Appointments,
            ViewId::Medications,
            ViewId::Vitals,
        ],
    },
    MenuGroup {
        label: "Organization",
        items: &[ViewId::Team, ViewId::Reports, ViewId::Settings],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("heart-pulse")}
                <span>"Eldercare Admin"</span>
            </div>
            {MENU_GROUPS.iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.iter().copied().map(|view_id| {
                            view! {
                                <div
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || ctx.current_view.get() == view_id
                                    on:click=move |_| ctx.navigate(view_id)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(view_id.icon())}
                                        <span>{view_id.label()}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
