pub mod state;

use crate::shared::components::status_badge::PatientStatusBadge;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use contracts::domain::a001_patient::Patient;
use leptos::prelude::*;
use state::PatientListState;
use thaw::*;

#[component]
pub fn PatientList(state: RwSignal<PatientListState>) -> impl IntoView {
    let search = Signal::derive(move || state.with(|s| s.filter.search.clone()));
    let filter_label = move || state.with(|s| s.filter.status.label());

    let on_search = Callback::new(move |value: String| {
        state.update(|s| s.filter.search = value);
    });

    let toggle_status = move |_| {
        state.update(|s| s.filter.status = s.filter.status.toggled());
        log::debug!("patient filter: {:?}", state.with_untracked(|s| s.filter.status));
    };

    view! {
        <Card>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <div style="flex: 1;">
                    <Input
                        value=search
                        on_input=on_search
                        placeholder="Search by name or room"
                    />
                </div>
                <button class="button button--secondary" on:click=toggle_status>
                    {icon("filter")}
                    {filter_label}
                </button>
            </Flex>

            {move || {
                let rows = state.with(|s| s.visible());
                if rows.is_empty() {
                    return view! {
                        <div class="patient-list__empty">"No patients match the current filter."</div>
                    }.into_any();
                }
                view! {
                    <div class="patient-list">
                        {rows.into_iter().map(|p| view! { <PatientRow patient=p state=state /> }).collect_view()}
                    </div>
                }.into_any()
            }}
        </Card>
    }
}

#[component]
fn PatientRow(patient: Patient, state: RwSignal<PatientListState>) -> impl IntoView {
    let id = patient.id.clone();
    let id_for_click = id.clone();
    let is_selected = move || state.with(|s| s.selected.as_ref() == Some(&id));

    view! {
        <div
            class="patient-list__row"
            class:patient-list__row--selected=is_selected
            on:click=move |_| state.update(|s| s.selected = Some(id_for_click.clone()))
        >
            <div class="patient-list__avatar">{patient.initials()}</div>
            <div class="patient-list__text">
                <div class="patient-list__name">{patient.name.clone()}</div>
                <div class="patient-list__meta">{patient.summary_line()}</div>
            </div>
            <PatientStatusBadge status=patient.status />
        </div>
    }
}
