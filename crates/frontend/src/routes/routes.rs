use crate::layout::center::registry::render_view;
use crate::layout::global_context::use_app_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::usecases::u501_add_patient::AddPatientModal;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Runs once when the layout is created
    ctx.init_router_integration();

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }.into_any()
            content=move || render_view(ctx.current_view.get())
        />
        <Show when=move || ctx.add_patient_open.get()>
            <AddPatientModal />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <MainLayout />
    }
}
