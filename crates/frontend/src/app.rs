use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

/// Root component: owns the app-wide context and hands off to the routes
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    log::info!("eldercare admin: starting on {:?}", ctx.current_view.get_untracked());
    provide_context(ctx);

    view! { <AppRoutes /> }
}
