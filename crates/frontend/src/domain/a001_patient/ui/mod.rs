pub mod details;
pub mod list;

use crate::domain::a001_patient::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use details::PatientDetails;
use leptos::prelude::*;
use list::state::create_state;
use list::PatientList;
use thaw::*;

/// Patients screen: filterable list on the left, details on the right
#[component]
pub fn PatientsPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_patients().await {
            Ok(patients) => {
                log::info!("loaded {} patients", patients.len());
                state.update(|s| s.set_loaded(patients));
            }
            Err(e) => state.update(|s| s.error = Some(e)),
        }
    });

    let selected = Signal::derive(move || state.with(|s| s.selected_patient()));

    view! {
        <div class="page">
            <PageHeader title="Patients" subtitle="Residents currently in care">
                <Button icon_name="plus" on_click=Callback::new(move |_| ctx.open_add_patient())>
                    "Add Patient"
                </Button>
            </PageHeader>

            {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || state.with(|s| s.is_loaded)
                fallback=move || view! {
                    <Show when=move || state.with(|s| s.error.is_none())>
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Spinner />
                            <span>"Loading patients..."</span>
                        </Flex>
                    </Show>
                }
            >
                <div class="patients-layout">
                    <PatientList state=state />
                    <PatientDetails patient=selected />
                </div>
            </Show>
        </div>
    }
}
