use crate::shared::icons::icon;
use leptos::prelude::*;

/// Button with variants ("primary", "secondary", "ghost") and an optional leading icon
#[component]
pub fn Button(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {icon_name.map(|name| icon(&name))}
            {children()}
        </button>
    }
}
