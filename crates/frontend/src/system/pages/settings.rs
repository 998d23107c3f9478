use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page">
            <PageHeader title="Settings" />
            <Card>
                <h4 class="details-section__title">"Add-patient form"</h4>
                <Flex vertical=true gap=FlexGap::Small>
                    <Switch checked=ctx.validation_enabled label="Validate required fields" />
                    <div class="settings__hint">
                        {move || if ctx.validation_enabled.get() {
                            "Each step checks the whole form before moving on."
                        } else {
                            "Steps advance without checks."
                        }}
                    </div>
                </Flex>
            </Card>
        </div>
    }
}
