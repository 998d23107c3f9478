use super::view_model::AddPatientViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::wizard::{FormField, WizardStep};
use contracts::usecases::u501_add_patient::{IntakeField, IntakeStep};
use leptos::prelude::*;

#[component]
pub fn AddPatientModal() -> impl IntoView {
    let ctx = use_app_context();
    let vm = AddPatientViewModel::new(ctx);
    vm.bind_validation_toggle();

    // Only changes on transitions, so typing does not rebuild the fields
    let current_step = Memo::new(move |_| vm.wizard.with(|w| w.current_step()));

    view! {
        <ModalFrame
            on_close=Callback::new(move |_| vm.cancel())
            modal_class="wizard"
            aria_label="Add New Patient"
        >
            <div class="wizard__header">
                <div>
                    <h2>"Add New Patient"</h2>
                    <div class="wizard__subtitle">
                        {move || current_step.get().map(|s| {
                            format!("Step {} of {}: {}", s.number(), IntakeStep::ALL.len(), s.title())
                        })}
                    </div>
                </div>
                <button class="top-header__icon-btn" title="Close" on:click=move |_| vm.cancel()>
                    {icon("x")}
                </button>
            </div>

            <StepIndicator current=current_step />

            {move || {
                let count = vm.error_count();
                (count > 0).then(|| view! {
                    <div class="wizard__errors">
                        {icon("alert-triangle")}
                        {format!("Please fix {} field(s) before continuing.", count)}
                    </div>
                })
            }}

            <div class="wizard__body">
                {move || current_step.get().map(|step| {
                    step.fields()
                        .iter()
                        .copied()
                        .map(|field| view! { <WizardField vm=vm field=field /> })
                        .collect_view()
                })}
            </div>

            <div class="wizard__footer">
                <Button variant="secondary" on_click=Callback::new(move |_| vm.back())>
                    {move || match current_step.get() {
                        Some(step) if step.previous().is_none() => "Cancel",
                        _ => "Back",
                    }}
                </Button>
                <Button on_click=Callback::new(move |_| vm.next())>
                    {move || match current_step.get() {
                        Some(step) if step.is_last() => "Finish",
                        _ => "Next",
                    }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
fn StepIndicator(current: Memo<Option<IntakeStep>>) -> impl IntoView {
    view! {
        <ol class="wizard__steps">
            {IntakeStep::ALL.iter().copied().map(|step| {
                let state = move || match current.get() {
                    Some(c) if c == step => "wizard__step wizard__step--active",
                    Some(c) if c.index() > step.index() => "wizard__step wizard__step--done",
                    _ => "wizard__step",
                };
                let is_done = move || current.get().is_some_and(|c| c.index() > step.index());
                view! {
                    <li class=state>
                        <span class="wizard__step-number">
                            {move || if is_done() {
                                icon("check")
                            } else {
                                view! { <span>{step.number()}</span> }.into_any()
                            }}
                        </span>
                        {icon(step.icon())}
                        <span class="wizard__step-title">{step.title()}</span>
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

#[component]
fn WizardField(vm: AddPatientViewModel, field: IntakeField) -> impl IntoView {
    let meta = field.metadata();
    let on_input = Callback::new(move |value: String| vm.edit(field, value));
    let placeholder = meta.ui.placeholder.unwrap_or_default();

    if meta.ui.multiline {
        view! {
            <Textarea
                id=meta.name
                label=meta.ui.label
                placeholder=placeholder
                value=vm.value(field)
                on_input=on_input
                error=vm.error(field)
                rows=3
            />
        }
        .into_any()
    } else {
        view! {
            <Input
                id=meta.name
                label=meta.ui.label
                placeholder=placeholder
                value=vm.value(field)
                on_input=on_input
                error=vm.error(field)
                required=meta.validation.is_required()
            />
        }
        .into_any()
    }
}
