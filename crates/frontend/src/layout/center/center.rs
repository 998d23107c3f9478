use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || ctx.notice.get().map(|text| view! {
                <div class="app-notice">
                    {icon("check")}
                    <span>{text}</span>
                    <button class="app-notice__close" on:click=move |_| ctx.notice.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}
            {children()}
        </div>
    }
}
