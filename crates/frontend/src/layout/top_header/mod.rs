//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the current view title, the wizard
//! validation switch, the add-patient action and the signed-in role.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Role shown in the header; the dashboard has no sign-in
const SIGNED_IN_ROLE: &str = "Administrator";

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || ctx.current_view.get().title()}</span>
            </div>

            <div class="top-header__actions">
                <Switch checked=ctx.validation_enabled label="Form validation" />

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.open_add_patient()
                >
                    {icon("plus")}
                    "Add Patient"
                </Button>

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{SIGNED_IN_ROLE}</span>
                </div>
            </div>
        </div>
    }
}
