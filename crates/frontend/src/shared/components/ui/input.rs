use leptos::prelude::*;

/// Single-line text field with label and inline error
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Validation message shown under the field
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|msg| view! {
                <div class="form__error">{msg}</div>
            })}
        </div>
    }
}
